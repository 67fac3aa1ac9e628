//! Endpoint paths and wire types for the Git Memory MCP Server API.

use serde::{Deserialize, Serialize};

/// Endpoint for login.
pub(crate) const AUTH_LOGIN: &str = "/auth/login";

/// Subscription endpoints.
pub(crate) const SUBSCRIPTION_PLANS: &str = "/subscriptions/plans";
pub(crate) const SUBSCRIPTION_CURRENT: &str = "/subscriptions/current";
pub(crate) const SUBSCRIPTION_CREATE: &str = "/subscriptions/create";
pub(crate) const SUBSCRIPTION_CANCEL: &str = "/subscriptions/cancel";

/// Payment endpoints.
pub(crate) const PAYMENT_INVOICES: &str = "/payments/invoices";
pub(crate) const PAYMENT_HISTORY: &str = "/payments/history";

/// Marketplace and services endpoints.
pub(crate) const MARKETPLACE_SERVERS: &str = "/community-marketplace/servers";
pub(crate) const PROFESSIONAL_SERVICES: &str = "/api/professional-services";

/// Request body for login.
#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub(crate) username: &'a str,
    pub(crate) password: &'a str,
}

/// Response from login.
///
/// The token field is optional on the wire; a success response without it
/// is rejected by [`crate::Auth`] rather than cached as nothing.
#[derive(Debug, Deserialize)]
pub(crate) struct LoginResponse {
    pub(crate) token: Option<String>,
}

/// Request body for creating a subscription.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateSubscriptionRequest<'a> {
    pub(crate) plan_id: &'a str,
}

/// Error body shape the server uses for non-success responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub(crate) error: Option<String>,
    pub(crate) message: Option<String>,
}

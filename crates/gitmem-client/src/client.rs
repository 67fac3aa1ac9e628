//! Domain facade over the Git Memory MCP Server API.

use serde_json::Value;

use gitmem_core::{Credentials, Result, ServerUrl};

use crate::auth::Auth;
use crate::endpoints::*;
use crate::http::Api;

/// Client for the Git Memory MCP Server.
///
/// Each method maps one domain operation to a fixed endpoint and returns the
/// server's JSON response as-is; callers interpret the shape. Authentication
/// is lazy: a client constructed with credentials logs in on its first call
/// and reuses the bearer token for the lifetime of the instance.
///
/// # Example
///
/// ```no_run
/// use gitmem_client::GitMemoryClient;
/// use gitmem_core::ServerUrl;
///
/// # async fn example() -> gitmem_core::Result<()> {
/// let base = ServerUrl::new("https://mcp.gitmemory.dev")?;
/// let client = GitMemoryClient::with_credentials(base, "alice", "secret");
///
/// let plans = client.subscription_plans().await?;
/// println!("{plans}");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct GitMemoryClient {
    api: Api,
}

impl GitMemoryClient {
    /// Create an unauthenticated client.
    ///
    /// Requests carry no authorization header; endpoints that require auth
    /// will fail with a protocol error.
    pub fn new(base: ServerUrl) -> Self {
        Self {
            api: Api::new(Auth::new(base, None)),
        }
    }

    /// Create a client that logs in on first use.
    pub fn with_credentials(
        base: ServerUrl,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let credentials = Credentials::new(username, password);
        Self {
            api: Api::new(Auth::new(base, Some(credentials))),
        }
    }

    /// Returns the underlying API wrapper, for endpoints without a method here.
    pub fn api(&self) -> &Api {
        &self.api
    }

    // ===== Subscriptions =====

    /// List the available subscription plans.
    pub async fn subscription_plans(&self) -> Result<Value> {
        self.api.get(SUBSCRIPTION_PLANS).await
    }

    /// Fetch the current subscription.
    pub async fn current_subscription(&self) -> Result<Value> {
        self.api.get(SUBSCRIPTION_CURRENT).await
    }

    /// Subscribe to a plan by its identifier.
    pub async fn create_subscription(&self, plan_id: &str) -> Result<Value> {
        let request = CreateSubscriptionRequest { plan_id };
        self.api.post(SUBSCRIPTION_CREATE, &request).await
    }

    /// Cancel the current subscription.
    pub async fn cancel_subscription(&self) -> Result<Value> {
        self.api.post_empty(SUBSCRIPTION_CANCEL).await
    }

    // ===== Payments =====

    /// List invoices.
    pub async fn invoices(&self) -> Result<Value> {
        self.api.get(PAYMENT_INVOICES).await
    }

    /// Fetch the payment history.
    pub async fn payment_history(&self) -> Result<Value> {
        self.api.get(PAYMENT_HISTORY).await
    }

    // ===== Marketplace =====

    /// List servers published on the community marketplace.
    pub async fn marketplace_servers(&self) -> Result<Value> {
        self.api.get(MARKETPLACE_SERVERS).await
    }

    // ===== Professional services =====

    /// List the professional services on offer.
    pub async fn professional_services(&self) -> Result<Value> {
        self.api.get(PROFESSIONAL_SERVICES).await
    }
}

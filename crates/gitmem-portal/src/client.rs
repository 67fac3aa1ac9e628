//! Portal client implementation.

use std::sync::{Arc, RwLock};

use serde_json::Value;
use tracing::{debug, info, instrument};

use gitmem_core::{AccessToken, AuthError, Error, ProtocolError, Result, ServerUrl};

/// Endpoint for login.
const AUTH_LOGIN: &str = "/auth/login";

/// Portal endpoints.
const ANALYTICS: &str = "/api/analytics";
const BRANDING: &str = "/api/branding";
const PORTAL_PLANS: &str = "/portal/plans";

/// Request body for login.
#[derive(Debug, serde::Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Error body shape the server uses for non-success responses.
#[derive(Debug, serde::Deserialize)]
struct PortalErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// Client for the Git Memory MCP Server customer portal.
///
/// Unlike [`gitmem-client`](https://docs.rs/gitmem-client), which logs in
/// lazily, this client authenticates eagerly: [`PortalClient::login`] posts
/// credentials, stores the issued token through the client's single
/// authenticated-state transition, and every later call carries it. The
/// token lives in memory only; there is no refresh, expiry handling, or
/// transition back to the unauthenticated state.
#[derive(Clone)]
pub struct PortalClient {
    inner: Arc<PortalInner>,
}

struct PortalInner {
    client: reqwest::Client,
    base: ServerUrl,
    token: RwLock<Option<AccessToken>>,
}

impl PortalClient {
    /// Create a new, unauthenticated portal client.
    pub fn new(base: ServerUrl) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("gitmem-portal/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self {
            inner: Arc::new(PortalInner {
                client,
                base,
                token: RwLock::new(None),
            }),
        }
    }

    /// Returns the server base URL.
    pub fn base_url(&self) -> &ServerUrl {
        &self.inner.base
    }

    /// Authenticate and store the bearer token for all later calls.
    ///
    /// Returns the full login response body; the portal backend includes
    /// account details alongside the `accessToken` field it is named by.
    /// On failure nothing is stored and the client stays unauthenticated.
    #[instrument(skip(self, username, password), fields(base = %self.inner.base))]
    pub async fn login(&self, username: &str, password: &str) -> Result<Value> {
        debug!("Logging in");

        let request = LoginRequest { username, password };

        let response = self
            .inner
            .client
            .post(self.inner.base.endpoint_url(AUTH_LOGIN))
            .json(&request)
            .send()
            .await
            .map_err(|err| AuthError::LoginFailed {
                message: err.to_string(),
            })?;

        if !response.status().is_success() {
            let error = parse_error_body(response).await;
            return Err(AuthError::LoginFailed {
                message: error.to_string(),
            }
            .into());
        }

        let body: Value = response
            .json()
            .await
            .map_err(|err| AuthError::LoginFailed {
                message: err.to_string(),
            })?;

        let token = body
            .get("accessToken")
            .and_then(Value::as_str)
            .ok_or(AuthError::MissingToken {
                field: "accessToken",
            })?;

        {
            let mut cached = self.inner.token.write().unwrap();
            *cached = Some(AccessToken::new(token));
        }

        info!("Login succeeded");
        Ok(body)
    }

    /// Fetch usage analytics.
    pub async fn analytics(&self) -> Result<Value> {
        self.get(ANALYTICS).await
    }

    /// Fetch branding configuration.
    pub async fn branding(&self) -> Result<Value> {
        self.get(BRANDING).await
    }

    /// List the plans shown on the portal.
    pub async fn plans(&self) -> Result<Value> {
        self.get(PORTAL_PLANS).await
    }

    /// Issue a GET request, attaching the stored token if one is held.
    #[instrument(skip(self))]
    async fn get(&self, endpoint: &str) -> Result<Value> {
        let url = self.inner.base.endpoint_url(endpoint);
        debug!(endpoint, "GET");

        // Snapshot the token so no lock is held across the request.
        let token = {
            let cached = self.inner.token.read().unwrap();
            cached.as_ref().map(|t| t.as_str().to_string())
        };

        let mut request = self.inner.client.get(&url);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        let status = response.status();
        if status.is_success() {
            let body = response.json::<Value>().await?;
            Ok(body)
        } else {
            Err(Error::Protocol(parse_error_body(response).await))
        }
    }
}

/// Parse a non-success response into a protocol error.
async fn parse_error_body(response: reqwest::Response) -> ProtocolError {
    let status = response.status().as_u16();

    match response.json::<PortalErrorBody>().await {
        Ok(body) => ProtocolError::new(status, body.error, body.message),
        Err(_) => ProtocolError::new(status, None, None),
    }
}

impl std::fmt::Debug for PortalClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortalClient")
            .field("base", &self.inner.base)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

//! Generic HTTP wrapper.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use gitmem_core::{Error, ProtocolError, Result};

use crate::auth::Auth;
use crate::endpoints::ApiErrorBody;

/// Generic API wrapper over the Git Memory MCP Server.
///
/// Each call resolves headers via [`Auth`] (attaching a bearer token only if
/// one is held), issues the request against the base URL plus the endpoint
/// path, and returns the parsed JSON body or a protocol error for any
/// non-success status. No retries, no configured timeouts, no backoff.
#[derive(Clone, Debug)]
pub struct Api {
    client: reqwest::Client,
    auth: Auth,
}

impl Api {
    /// Create a new API wrapper over the given auth state.
    pub fn new(auth: Auth) -> Self {
        Self {
            client: build_client(),
            auth,
        }
    }

    /// Returns the auth state backing this wrapper.
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Issue a GET request.
    #[instrument(skip(self))]
    pub async fn get<R>(&self, endpoint: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let url = self.auth.base_url().endpoint_url(endpoint);
        debug!(endpoint, "GET");

        let response = self
            .client
            .get(&url)
            .headers(self.request_headers().await?)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Issue a POST request with a JSON body.
    #[instrument(skip(self, body))]
    pub async fn post<B, R>(&self, endpoint: &str, body: &B) -> Result<R>
    where
        B: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        let url = self.auth.base_url().endpoint_url(endpoint);
        debug!(endpoint, "POST");

        let response = self
            .client
            .post(&url)
            .json(body)
            .headers(self.request_headers().await?)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Issue a POST request without a body.
    /// Used for endpoints like subscription cancellation that take no payload.
    #[instrument(skip(self))]
    pub async fn post_empty<R>(&self, endpoint: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let url = self.auth.base_url().endpoint_url(endpoint);
        debug!(endpoint, "POST (no body)");

        let response = self
            .client
            .post(&url)
            .headers(self.request_headers().await?)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Issue a PUT request with a JSON body.
    #[instrument(skip(self, body))]
    pub async fn put<B, R>(&self, endpoint: &str, body: &B) -> Result<R>
    where
        B: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        let url = self.auth.base_url().endpoint_url(endpoint);
        debug!(endpoint, "PUT");

        let response = self
            .client
            .put(&url)
            .json(body)
            .headers(self.request_headers().await?)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Issue a DELETE request.
    #[instrument(skip(self))]
    pub async fn delete<R>(&self, endpoint: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let url = self.auth.base_url().endpoint_url(endpoint);
        debug!(endpoint, "DELETE");

        let response = self
            .client
            .delete(&url)
            .headers(self.request_headers().await?)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Resolve request headers, attaching a bearer token only if one is held.
    async fn request_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = self.auth.token().await? {
            let auth_value = format!("Bearer {}", token.as_str());
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&auth_value).expect("invalid token characters"),
            );
        }

        Ok(headers)
    }

    /// Handle a response, parsing the body or error.
    async fn handle_response<R: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<R> {
        let status = response.status();
        trace!(status = %status, "response");

        if status.is_success() {
            let body = response.json::<R>().await?;
            Ok(body)
        } else {
            Err(Error::Protocol(parse_error_body(response).await))
        }
    }
}

/// Build an HTTP client with the SDK user agent.
pub(crate) fn build_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(concat!("gitmem/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("failed to build HTTP client")
}

/// Parse a non-success response into a protocol error.
pub(crate) async fn parse_error_body(response: reqwest::Response) -> ProtocolError {
    let status = response.status().as_u16();

    // Try to parse the server's JSON error format
    match response.json::<ApiErrorBody>().await {
        Ok(body) => ProtocolError::new(status, body.error, body.message),
        Err(_) => ProtocolError::new(status, None, None),
    }
}

//! Credential storage and lazy token acquisition.

use std::sync::{Arc, RwLock};

use tracing::{debug, info, instrument};

use gitmem_core::{AccessToken, AuthError, Credentials, Result, ServerUrl};

use crate::endpoints::{AUTH_LOGIN, LoginRequest, LoginResponse};
use crate::http;

/// Credentials and the cached bearer token for a client instance.
///
/// The token is fetched on first need and reused for every subsequent call
/// within the lifetime of the instance; there is no invalidation or refresh
/// path. Constructed without credentials, no login is ever attempted and
/// requests proceed unauthenticated.
#[derive(Clone)]
pub struct Auth {
    inner: Arc<AuthInner>,
}

struct AuthInner {
    client: reqwest::Client,
    base: ServerUrl,
    credentials: Option<Credentials>,
    token: RwLock<Option<AccessToken>>,
}

impl Auth {
    /// Create a new auth state for the given server.
    pub fn new(base: ServerUrl, credentials: Option<Credentials>) -> Self {
        Self {
            inner: Arc::new(AuthInner {
                client: http::build_client(),
                base,
                credentials,
                token: RwLock::new(None),
            }),
        }
    }

    /// Returns the server base URL.
    pub fn base_url(&self) -> &ServerUrl {
        &self.inner.base
    }

    /// Returns the cached token, logging in first if none is held.
    ///
    /// Without credentials this returns `Ok(None)` and no login request is
    /// made.
    pub async fn token(&self) -> Result<Option<AccessToken>> {
        {
            let cached = self.inner.token.read().unwrap();
            if let Some(token) = cached.as_ref() {
                return Ok(Some(token.clone()));
            }
        }

        let Some(credentials) = self.inner.credentials.as_ref() else {
            return Ok(None);
        };

        let token = self.login(credentials).await?;

        {
            let mut cached = self.inner.token.write().unwrap();
            *cached = Some(token.clone());
        }

        Ok(Some(token))
    }

    /// Authenticate against the login endpoint and return the issued token.
    ///
    /// Any transport failure or non-success status surfaces as an
    /// authentication error; nothing is cached on failure.
    #[instrument(skip(self, credentials), fields(base = %self.inner.base))]
    async fn login(&self, credentials: &Credentials) -> Result<AccessToken> {
        debug!("Logging in");

        let request = LoginRequest {
            username: credentials.username(),
            password: credentials.password(),
        };

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
            let error = http::parse_error_body(response).await;
            return Err(AuthError::LoginFailed {
                message: error.to_string(),
            }
            .into());
        }

        let body: LoginResponse =
            response
                .json()
                .await
                .map_err(|err| AuthError::LoginFailed {
                    message: err.to_string(),
                })?;

        let token = body
            .token
            .ok_or(AuthError::MissingToken { field: "token" })?;

        info!("Login succeeded");
        Ok(AccessToken::new(token))
    }
}

impl std::fmt::Debug for Auth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Auth")
            .field("base", &self.inner.base)
            .field("credentials", &self.inner.credentials)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn token_absent_without_credentials() {
        // Nothing listens on this address; success proves no request is made.
        let base = ServerUrl::new("http://127.0.0.1:9").unwrap();
        let auth = Auth::new(base, None);

        let token = auth.token().await.unwrap();
        assert!(token.is_none());
    }
}

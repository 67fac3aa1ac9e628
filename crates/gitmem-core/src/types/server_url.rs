//! Server URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// A validated Git Memory MCP Server base URL.
///
/// Server URLs must use HTTPS (or HTTP for localhost) and are normalized so
/// that endpoint paths can be appended without doubled slashes.
///
/// # Example
///
/// ```
/// use gitmem_core::ServerUrl;
///
/// let server = ServerUrl::new("https://mcp.gitmemory.dev").unwrap();
/// assert_eq!(server.endpoint_url("/subscriptions/plans"),
///            "https://mcp.gitmemory.dev/subscriptions/plans");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ServerUrl(Url);

impl ServerUrl {
    /// Create a new server URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::ServerUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        // Normalize: remove trailing slash
        let normalized = if url.path() == "/" {
            let mut u = url.clone();
            u.set_path("");
            u
        } else {
            url
        };

        Ok(Self(normalized))
    }

    /// Returns the full URL for a given endpoint path (e.g. `/auth/login`).
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        // The URL crate always adds a trailing slash to root paths,
        // so we need to handle that when constructing endpoint URLs
        let base = self.0.as_str().trim_end_matches('/');
        format!("{}{}", base, endpoint)
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        // Must be absolute
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::ServerUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        // Must be HTTPS (or HTTP for localhost)
        let scheme = url.scheme();
        let is_localhost = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "::1");

        if scheme != "https" && !(scheme == "http" && is_localhost) {
            return Err(InvalidInputError::ServerUrl {
                value: original.to_string(),
                reason: "must use HTTPS (HTTP allowed only for localhost)".to_string(),
            }
            .into());
        }

        // Must have a host
        if url.host_str().is_none() {
            return Err(InvalidInputError::ServerUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for ServerUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ServerUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ServerUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for ServerUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ServerUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for ServerUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_https_url() {
        let server = ServerUrl::new("https://mcp.gitmemory.dev").unwrap();
        assert_eq!(server.host(), Some("mcp.gitmemory.dev"));
    }

    #[test]
    fn valid_localhost_http() {
        let server = ServerUrl::new("http://localhost:3000").unwrap();
        assert_eq!(server.host(), Some("localhost"));
    }

    #[test]
    fn endpoint_url_construction() {
        let server = ServerUrl::new("https://mcp.gitmemory.dev").unwrap();
        assert_eq!(
            server.endpoint_url("/auth/login"),
            "https://mcp.gitmemory.dev/auth/login"
        );
    }

    #[test]
    fn normalizes_trailing_slash_in_endpoint_url() {
        let server = ServerUrl::new("https://mcp.gitmemory.dev/").unwrap();
        assert_eq!(
            server.endpoint_url("/subscriptions/plans"),
            "https://mcp.gitmemory.dev/subscriptions/plans"
        );
    }

    #[test]
    fn invalid_http_non_localhost() {
        assert!(ServerUrl::new("http://mcp.gitmemory.dev").is_err());
    }

    #[test]
    fn invalid_relative_url() {
        assert!(ServerUrl::new("/auth/login").is_err());
    }
}

//! gitmem-core - Shared types and errors for the Git Memory MCP Server SDKs.

pub mod credentials;
pub mod error;
pub mod tokens;
pub mod types;

pub use credentials::Credentials;
pub use error::{AuthError, Error, InvalidInputError, ProtocolError, TransportError};
pub use tokens::AccessToken;
pub use types::ServerUrl;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

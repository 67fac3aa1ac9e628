//! gitmem-client - Client SDK for the Git Memory MCP Server.
//!
//! [`GitMemoryClient`] is the domain facade; [`Api`] is the generic HTTP
//! wrapper underneath it, and [`Auth`] holds credentials and the lazily
//! acquired bearer token.

mod auth;
mod client;
mod endpoints;
mod http;

pub use auth::Auth;
pub use client::GitMemoryClient;
pub use http::Api;

//! Command group implementations.

pub mod marketplace;
pub mod payments;
pub mod portal;
pub mod services;
pub mod subscription;

use anyhow::{Context, Result};
use clap::Args;

use gitmem_client::GitMemoryClient;
use gitmem_core::ServerUrl;

/// Connection arguments shared by every command.
#[derive(Args, Debug)]
pub struct ConnectArgs {
    /// Base URL of the Git Memory MCP server
    #[arg(long, env = "GITMEM_URL")]
    pub url: String,

    /// Username for authenticated endpoints
    #[arg(long, env = "GITMEM_USERNAME")]
    pub username: Option<String>,

    /// Password for authenticated endpoints
    #[arg(long, env = "GITMEM_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

impl ConnectArgs {
    /// Build a client. Credentials are optional; when present, the client
    /// logs in lazily on its first authenticated call.
    pub fn client(&self) -> Result<GitMemoryClient> {
        let base = ServerUrl::new(&self.url).context("Invalid server URL")?;

        Ok(match (&self.username, &self.password) {
            (Some(username), Some(password)) => {
                GitMemoryClient::with_credentials(base, username, password)
            }
            _ => GitMemoryClient::new(base),
        })
    }
}

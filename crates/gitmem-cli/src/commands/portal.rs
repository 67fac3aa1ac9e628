//! Customer portal commands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;

use gitmem_core::ServerUrl;
use gitmem_portal::PortalClient;

use crate::output;

#[derive(Args, Debug)]
pub struct PortalCommand {
    #[command(subcommand)]
    pub command: PortalSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum PortalSubcommand {
    /// Fetch usage analytics
    Analytics(PortalArgs),

    /// Fetch branding configuration
    Branding(PortalArgs),

    /// List the plans shown on the portal
    Plans(PortalArgs),
}

/// Portal endpoints sit behind an eager login, so credentials are required.
#[derive(Args, Debug)]
pub struct PortalArgs {
    /// Base URL of the Git Memory MCP server
    #[arg(long, env = "GITMEM_URL")]
    pub url: String,

    /// Portal username
    #[arg(long, env = "GITMEM_USERNAME")]
    pub username: String,

    /// Portal password
    #[arg(long, env = "GITMEM_PASSWORD", hide_env_values = true)]
    pub password: String,
}

impl PortalArgs {
    async fn login(&self) -> Result<PortalClient> {
        let base = ServerUrl::new(&self.url).context("Invalid server URL")?;
        let client = PortalClient::new(base);

        eprintln!("{}", "Logging in...".dimmed());
        client
            .login(&self.username, &self.password)
            .await
            .context("Failed to login")?;

        Ok(client)
    }
}

pub async fn handle(cmd: PortalCommand) -> Result<()> {
    match cmd.command {
        PortalSubcommand::Analytics(args) => {
            let client = args.login().await?;
            let analytics = client.analytics().await.context("Failed to fetch analytics")?;
            output::json_pretty(&analytics)
        }
        PortalSubcommand::Branding(args) => {
            let client = args.login().await?;
            let branding = client.branding().await.context("Failed to fetch branding")?;
            output::json_pretty(&branding)
        }
        PortalSubcommand::Plans(args) => {
            let client = args.login().await?;
            let plans = client.plans().await.context("Failed to fetch portal plans")?;
            output::json_pretty(&plans)
        }
    }
}

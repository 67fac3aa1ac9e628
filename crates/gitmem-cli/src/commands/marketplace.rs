//! Marketplace commands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use crate::commands::ConnectArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct MarketplaceCommand {
    #[command(subcommand)]
    pub command: MarketplaceSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum MarketplaceSubcommand {
    /// List servers on the community marketplace
    Servers(ServersArgs),
}

#[derive(Args, Debug)]
pub struct ServersArgs {
    #[command(flatten)]
    pub connect: ConnectArgs,
}

pub async fn handle(cmd: MarketplaceCommand) -> Result<()> {
    match cmd.command {
        MarketplaceSubcommand::Servers(args) => servers(args).await,
    }
}

async fn servers(args: ServersArgs) -> Result<()> {
    let client = args.connect.client()?;
    let servers = client
        .marketplace_servers()
        .await
        .context("Failed to fetch marketplace servers")?;

    output::json_pretty(&servers)
}

//! Professional services commands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use crate::commands::ConnectArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct ServicesCommand {
    #[command(subcommand)]
    pub command: ServicesSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ServicesSubcommand {
    /// List the professional services on offer
    List(ListArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub connect: ConnectArgs,
}

pub async fn handle(cmd: ServicesCommand) -> Result<()> {
    match cmd.command {
        ServicesSubcommand::List(args) => list(args).await,
    }
}

async fn list(args: ListArgs) -> Result<()> {
    let client = args.connect.client()?;
    let services = client
        .professional_services()
        .await
        .context("Failed to fetch professional services")?;

    output::json_pretty(&services)
}

//! Payment commands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use crate::commands::ConnectArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct PaymentsCommand {
    #[command(subcommand)]
    pub command: PaymentsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum PaymentsSubcommand {
    /// List invoices
    Invoices(InvoicesArgs),

    /// Show the payment history
    History(HistoryArgs),
}

#[derive(Args, Debug)]
pub struct InvoicesArgs {
    #[command(flatten)]
    pub connect: ConnectArgs,
}

#[derive(Args, Debug)]
pub struct HistoryArgs {
    #[command(flatten)]
    pub connect: ConnectArgs,
}

pub async fn handle(cmd: PaymentsCommand) -> Result<()> {
    match cmd.command {
        PaymentsSubcommand::Invoices(args) => invoices(args).await,
        PaymentsSubcommand::History(args) => history(args).await,
    }
}

async fn invoices(args: InvoicesArgs) -> Result<()> {
    let client = args.connect.client()?;
    let invoices = client.invoices().await.context("Failed to fetch invoices")?;

    output::json_pretty(&invoices)
}

async fn history(args: HistoryArgs) -> Result<()> {
    let client = args.connect.client()?;
    let history = client
        .payment_history()
        .await
        .context("Failed to fetch payment history")?;

    output::json_pretty(&history)
}

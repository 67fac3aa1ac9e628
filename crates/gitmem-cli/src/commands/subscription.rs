//! Subscription commands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use crate::commands::ConnectArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct SubscriptionCommand {
    #[command(subcommand)]
    pub command: SubscriptionSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum SubscriptionSubcommand {
    /// List available subscription plans
    Plans(PlansArgs),

    /// Show the current subscription
    Current(CurrentArgs),

    /// Subscribe to a plan
    Create(CreateArgs),

    /// Cancel the current subscription
    Cancel(CancelArgs),
}

#[derive(Args, Debug)]
pub struct PlansArgs {
    #[command(flatten)]
    pub connect: ConnectArgs,
}

#[derive(Args, Debug)]
pub struct CurrentArgs {
    #[command(flatten)]
    pub connect: ConnectArgs,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Plan identifier to subscribe to
    #[arg(long)]
    pub plan: String,

    #[command(flatten)]
    pub connect: ConnectArgs,
}

#[derive(Args, Debug)]
pub struct CancelArgs {
    #[command(flatten)]
    pub connect: ConnectArgs,
}

pub async fn handle(cmd: SubscriptionCommand) -> Result<()> {
    match cmd.command {
        SubscriptionSubcommand::Plans(args) => plans(args).await,
        SubscriptionSubcommand::Current(args) => current(args).await,
        SubscriptionSubcommand::Create(args) => create(args).await,
        SubscriptionSubcommand::Cancel(args) => cancel(args).await,
    }
}

async fn plans(args: PlansArgs) -> Result<()> {
    let client = args.connect.client()?;
    let plans = client
        .subscription_plans()
        .await
        .context("Failed to fetch subscription plans")?;

    output::json_pretty(&plans)
}

async fn current(args: CurrentArgs) -> Result<()> {
    let client = args.connect.client()?;
    let subscription = client
        .current_subscription()
        .await
        .context("Failed to fetch current subscription")?;

    output::json_pretty(&subscription)
}

async fn create(args: CreateArgs) -> Result<()> {
    let client = args.connect.client()?;
    let response = client
        .create_subscription(&args.plan)
        .await
        .context("Failed to create subscription")?;

    output::success("Subscription created");
    output::json_pretty(&response)
}

async fn cancel(args: CancelArgs) -> Result<()> {
    let client = args.connect.client()?;
    let response = client
        .cancel_subscription()
        .await
        .context("Failed to cancel subscription")?;

    output::success("Subscription cancelled");
    output::json_pretty(&response)
}

//! gitmem - CLI for the Git Memory MCP Server.
//!
//! A thin wrapper over the `gitmem-client` and `gitmem-portal` SDKs for
//! exploring the server's API by hand. Each invocation is one-shot: tokens
//! live only for the duration of the command.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.json_logs);

    match cli.command {
        Commands::Subscription(cmd) => commands::subscription::handle(cmd).await,
        Commands::Payments(cmd) => commands::payments::handle(cmd).await,
        Commands::Marketplace(cmd) => commands::marketplace::handle(cmd).await,
        Commands::Services(cmd) => commands::services::handle(cmd).await,
        Commands::Portal(cmd) => commands::portal::handle(cmd).await,
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .init();
    }
}

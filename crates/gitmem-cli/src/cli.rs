//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::marketplace::MarketplaceCommand;
use crate::commands::payments::PaymentsCommand;
use crate::commands::portal::PortalCommand;
use crate::commands::services::ServicesCommand;
use crate::commands::subscription::SubscriptionCommand;

/// Command-line client for the Git Memory MCP Server.
#[derive(Parser, Debug)]
#[command(name = "gitmem")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Subscription management
    Subscription(SubscriptionCommand),

    /// Invoices and payment history
    Payments(PaymentsCommand),

    /// Community marketplace listings
    Marketplace(MarketplaceCommand),

    /// Professional services
    Services(ServicesCommand),

    /// Customer portal endpoints (eager login)
    Portal(PortalCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    use crate::commands::subscription::SubscriptionSubcommand;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_subscription_create() {
        let cli = Cli::try_parse_from([
            "gitmem",
            "subscription",
            "create",
            "--plan",
            "pro",
            "--url",
            "https://mcp.gitmemory.dev",
        ])
        .unwrap();

        let Commands::Subscription(cmd) = cli.command else {
            panic!("expected subscription command");
        };
        let SubscriptionSubcommand::Create(args) = cmd.command else {
            panic!("expected create subcommand");
        };
        assert_eq!(args.plan, "pro");
        assert_eq!(args.connect.url, "https://mcp.gitmemory.dev");
    }

    #[test]
    fn create_requires_plan() {
        let result = Cli::try_parse_from([
            "gitmem",
            "subscription",
            "create",
            "--url",
            "https://mcp.gitmemory.dev",
        ]);
        assert!(result.is_err());
    }
}

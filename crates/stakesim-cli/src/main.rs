// crates/stakesim-cli/src/main.rs
//
// CLI entrypoint for the stakesim validator reward simulator.
//
// Provides subcommands for generating a staking distribution and
// allocating one year of rewards, sweeping the proposer/staker split, and
// running the same allocation over a live council snapshot.

mod commands;
mod output;

use clap::{Parser, Subcommand};
use commands::fetch::FetchArgs;
use commands::simulate::SimulateArgs;
use commands::sweep::SweepArgs;

/// stakesim — proof-of-stake validator reward and APR simulator.
#[derive(Parser, Debug)]
#[command(
    name = "stakesim",
    version = "0.1.0",
    about = "Simulate validator reward distribution and APR under a proof-of-stake incentive scheme"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate a staking distribution and allocate one year of rewards.
    Simulate(SimulateArgs),
    /// Sweep the proposer ratio across [0, 100] and report average APR.
    Sweep(SweepArgs),
    /// Fetch the live council snapshot and allocate rewards over it.
    Fetch(FetchArgs),
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber for structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Simulate(args) => commands::simulate::run(args)?,
        Commands::Sweep(args) => commands::sweep::run(args)?,
        Commands::Fetch(args) => commands::fetch::run(args).await?,
    }

    Ok(())
}

// crates/stakesim-cli/src/commands/fetch.rs
//
// `stakesim fetch` — fetch the live council staking snapshot and run the
// reward allocation over it.

use clap::Args;

use stakesim_chain::{fetch_staking_snapshot, DEFAULT_RPC_ENDPOINT};
use stakesim_economics::allocate;

use crate::commands::args::EconomicArgs;
use crate::output::{self, OutputFormat};

/// Arguments for the fetch subcommand.
#[derive(Debug, Args)]
pub struct FetchArgs {
    /// JSON-RPC endpoint serving the staking snapshot.
    #[arg(long, default_value = DEFAULT_RPC_ENDPOINT)]
    pub rpc: String,

    #[command(flatten)]
    pub economics: EconomicArgs,

    /// Output format: table or json.
    #[arg(long, default_value = "table")]
    pub format: String,
}

/// Run the fetch subcommand.
pub async fn run(args: &FetchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let format = OutputFormat::parse(&args.format)?;

    tracing::info!("fetching staking snapshot from {}", args.rpc);
    let stakes = fetch_staking_snapshot(&args.rpc).await?;
    tracing::info!(validators = stakes.len(), "consolidated council snapshot");

    let breakdowns = allocate(&stakes, &args.economics.to_params(), None)?;
    output::print_breakdowns(&breakdowns, format);

    Ok(())
}

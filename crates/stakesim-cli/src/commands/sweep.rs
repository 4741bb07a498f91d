// crates/stakesim-cli/src/commands/sweep.rs
//
// `stakesim sweep` — sweep the proposer/staker split across its full
// domain and print the network-average APR at each point.

use clap::Args;

use stakesim_economics::scan;

use crate::commands::args::{DistributionArgs, EconomicArgs};
use crate::output::{self, OutputFormat};

/// Arguments for the sweep subcommand.
#[derive(Debug, Args)]
pub struct SweepArgs {
    #[command(flatten)]
    pub distribution: DistributionArgs,

    #[command(flatten)]
    pub economics: EconomicArgs,

    /// Output format: table or json.
    #[arg(long, default_value = "table")]
    pub format: String,
}

/// Run the sweep subcommand.
pub fn run(args: &SweepArgs) -> Result<(), Box<dyn std::error::Error>> {
    let format = OutputFormat::parse(&args.format)?;
    let stakes = args.distribution.build_stakes()?;
    let params = args.economics.to_params();

    tracing::info!(validators = stakes.len(), "sweeping proposer ratio over [0, 100]");

    let samples = scan(&stakes, &params)?;
    output::print_samples(&samples, format);

    Ok(())
}

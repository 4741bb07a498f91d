// crates/stakesim-cli/src/commands/simulate.rs
//
// `stakesim simulate` — generate a staking distribution, allocate one year
// of rewards, and print the per-validator breakdown.

use clap::Args;

use stakesim_economics::{allocate, PdOverride};

use crate::commands::args::{DistributionArgs, EconomicArgs};
use crate::output::{self, OutputFormat};

/// Arguments for the simulate subcommand.
#[derive(Debug, Args)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub distribution: DistributionArgs,

    #[command(flatten)]
    pub economics: EconomicArgs,

    /// Validator index to simulate a partial delegation for (0-based).
    #[arg(long)]
    pub pd_node: Option<usize>,

    /// Simulated total stake for the PD validator; values at or below the
    /// council minimum leave the generated stake in place.
    #[arg(long, default_value_t = 0)]
    pub pd_stake: u64,

    /// Percent of the PD validator's stake delegated to a third party.
    #[arg(long, default_value_t = 0.0)]
    pub pd_percent: f64,

    /// Output format: table or json.
    #[arg(long, default_value = "table")]
    pub format: String,
}

/// Run the simulate subcommand.
pub fn run(args: &SimulateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let format = OutputFormat::parse(&args.format)?;
    let stakes = args.distribution.build_stakes()?;
    let params = args.economics.to_params();

    let pd = args.pd_node.map(|node_index| PdOverride {
        node_index,
        simulated_stake: args.pd_stake,
        pd_percentage: args.pd_percent.clamp(0.0, 100.0),
    });

    let total_stake: u64 = stakes.iter().sum();
    tracing::info!(
        validators = stakes.len(),
        total_stake,
        "allocating yearly rewards"
    );

    let breakdowns = allocate(&stakes, &params, pd.as_ref())?;
    output::print_breakdowns(&breakdowns, format);

    Ok(())
}

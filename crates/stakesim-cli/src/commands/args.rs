// crates/stakesim-cli/src/commands/args.rs
//
// Flag groups shared by the simulate and sweep subcommands.

use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;

use stakesim_core::{
    EconomicParameters, SimError, DEFAULT_COMMISSION_RATE, DEFAULT_PROPOSER_RATIO,
    DEFAULT_REWARD_PER_BLOCK,
};
use stakesim_economics::{generate, DistributionMode, MAJOR_STAKERS};

/// Flags controlling staking-distribution generation.
#[derive(Debug, Args)]
pub struct DistributionArgs {
    /// Number of validators in the council.
    #[arg(long, default_value_t = 10)]
    pub validators: usize,

    /// Staking spread: 0 is a uniform council, 100 is extreme
    /// concentration.
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub spread: u8,

    /// Explicit distribution mode, overriding --spread: uniform,
    /// log_uniform_low, log_uniform_full, bimodal, fixed_reference_set, or
    /// reference_style.
    #[arg(long)]
    pub mode: Option<String>,

    /// Seed for reproducible sampling.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl DistributionArgs {
    /// Resolve the sampling mode and produce a stake vector.
    ///
    /// A reference-style request for a council smaller than the
    /// major-staker prefix is degraded rather than fatal: the error is
    /// logged and the truncated prefix is used.
    pub fn build_stakes(&self) -> Result<Vec<u64>, SimError> {
        let mode = match self.mode.as_deref() {
            Some(name) => parse_mode(name)?,
            None => DistributionMode::from_spread(self.spread),
        };

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        match generate(mode, self.validators, &mut rng) {
            Err(SimError::Configuration(msg))
                if mode == DistributionMode::ReferenceStyle
                    && self.validators > 0
                    && self.validators < MAJOR_STAKERS.len() =>
            {
                tracing::warn!("{}; falling back to the truncated major-staker prefix", msg);
                Ok(MAJOR_STAKERS[..self.validators].to_vec())
            }
            other => other,
        }
    }
}

/// Economic parameter flags.
#[derive(Debug, Args)]
pub struct EconomicArgs {
    /// Proposer reward ratio: percent of the yearly pool paid flat per
    /// validator.
    #[arg(long, default_value_t = DEFAULT_PROPOSER_RATIO)]
    pub proposer_ratio: f64,

    /// Validator commission rate (percent).
    #[arg(long, default_value_t = DEFAULT_COMMISSION_RATE)]
    pub commission_rate: f64,

    /// Reward minted per block (tokens).
    #[arg(long, default_value_t = DEFAULT_REWARD_PER_BLOCK)]
    pub reward_per_block: f64,
}

impl EconomicArgs {
    /// Build the (clamped) parameter bundle.
    pub fn to_params(&self) -> EconomicParameters {
        EconomicParameters::new(
            self.proposer_ratio,
            self.commission_rate,
            self.reward_per_block,
        )
    }
}

/// Parse a distribution mode name from the command line.
pub fn parse_mode(name: &str) -> Result<DistributionMode, SimError> {
    match name {
        "uniform" => Ok(DistributionMode::Uniform),
        "log_uniform_low" => Ok(DistributionMode::LogUniformLow),
        "log_uniform_full" => Ok(DistributionMode::LogUniformFull),
        "bimodal" => Ok(DistributionMode::Bimodal),
        "fixed_reference_set" => Ok(DistributionMode::FixedReferenceSet),
        "reference_style" => Ok(DistributionMode::ReferenceStyle),
        other => Err(SimError::Configuration(format!(
            "unknown distribution mode: {}",
            other
        ))),
    }
}

// crates/stakesim-core/src/params.rs
//
// Network constants and the economic parameter bundle for a simulation run.
//
// The constants model a council-style proof-of-stake network: every
// validator must post at least MIN_STAKE to join, a single validator holds
// at most MAX_STAKE, and the council's combined stake is capped at
// MAX_TOTAL_STAKE. One block is produced per second, so the yearly reward
// pool is reward_per_block * SECONDS_PER_YEAR.

use serde::{Deserialize, Serialize};

/// Minimum stake a validator must post to join the council (in tokens).
/// Only stake above this floor participates in stake-weighted rewards.
pub const MIN_STAKE: u64 = 5_000_000;

/// Maximum stake a single validator may hold (in tokens).
pub const MAX_STAKE: u64 = 500_000_000;

/// Cap on the council's combined stake (in tokens). Generated stake
/// vectors exceeding this are scaled down proportionally.
pub const MAX_TOTAL_STAKE: u64 = 3_000_000_000;

/// Blocks produced per second.
pub const BLOCKS_PER_SECOND: u64 = 1;

/// Seconds in a 365-day year.
pub const SECONDS_PER_YEAR: u64 = 86_400 * 365;

/// Default reward minted per block (in tokens).
pub const DEFAULT_REWARD_PER_BLOCK: f64 = 4.8;

/// Default share of the yearly reward paid flat per validator (percent).
pub const DEFAULT_PROPOSER_RATIO: f64 = 20.0;

/// Default commission a validator deducts from rewards on delegated stake
/// (percent).
pub const DEFAULT_COMMISSION_RATE: f64 = 5.0;

/// Economic parameters for one simulation run.
///
/// `proposer_ratio` percent of the yearly pool is paid flat per validator;
/// the remainder is distributed in proportion to effective stake.
/// Both percentages are clamped into [0, 100] at construction, which is the
/// single place clamping happens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EconomicParameters {
    /// Percent of the yearly reward paid equally to every validator.
    pub proposer_ratio: f64,
    /// Percent a validator deducts from rewards on delegated stake.
    pub commission_rate: f64,
    /// Reward minted per block (in tokens).
    pub reward_per_block: f64,
}

impl EconomicParameters {
    /// Create a parameter bundle, clamping both percentages into [0, 100].
    pub fn new(proposer_ratio: f64, commission_rate: f64, reward_per_block: f64) -> Self {
        Self {
            proposer_ratio: proposer_ratio.clamp(0.0, 100.0),
            commission_rate: commission_rate.clamp(0.0, 100.0),
            reward_per_block,
        }
    }

    /// Copy of these parameters with a different proposer ratio.
    pub fn with_proposer_ratio(&self, proposer_ratio: f64) -> Self {
        Self::new(proposer_ratio, self.commission_rate, self.reward_per_block)
    }

    /// Total reward minted per year: blocks/s * reward/block * seconds/year.
    pub fn total_reward_per_year(&self) -> f64 {
        (BLOCKS_PER_SECOND * SECONDS_PER_YEAR) as f64 * self.reward_per_block
    }
}

impl Default for EconomicParameters {
    fn default() -> Self {
        Self::new(
            DEFAULT_PROPOSER_RATIO,
            DEFAULT_COMMISSION_RATE,
            DEFAULT_REWARD_PER_BLOCK,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentages_clamped_at_construction() {
        let p = EconomicParameters::new(150.0, -3.0, 4.8);
        assert_eq!(p.proposer_ratio, 100.0);
        assert_eq!(p.commission_rate, 0.0);
    }

    #[test]
    fn test_total_reward_per_year() {
        let p = EconomicParameters::new(20.0, 5.0, 4.8);
        assert_eq!(p.total_reward_per_year(), 4.8 * 86_400.0 * 365.0);
    }

    #[test]
    fn test_with_proposer_ratio_keeps_other_fields() {
        let p = EconomicParameters::default().with_proposer_ratio(73.0);
        assert_eq!(p.proposer_ratio, 73.0);
        assert_eq!(p.commission_rate, DEFAULT_COMMISSION_RATE);
        assert_eq!(p.reward_per_block, DEFAULT_REWARD_PER_BLOCK);
    }

    #[test]
    fn test_with_proposer_ratio_clamps() {
        let p = EconomicParameters::default().with_proposer_ratio(120.0);
        assert_eq!(p.proposer_ratio, 100.0);
    }
}

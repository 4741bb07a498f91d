// crates/stakesim-economics/src/rewards.rs
//
// Yearly reward allocation.
//
// The yearly pool splits into a flat proposer share, paid equally to every
// validator, and a staker share distributed in proportion to effective
// stake (stake above MIN_STAKE). Two overlays refine the headline figures:
//
//   1. Commission: the first MIN_STAKE of a validator's stake is self-stake
//      earning full APR; the remainder is delegated stake from which the
//      validator keeps commission_rate percent.
//   2. Partial delegation (PD): one validator's own stake is split into a
//      directly-owned portion at full APR and a delegated portion at APR
//      net of commission.
//
// The allocator never mutates the caller's stake vector: a PD override is
// applied to an internal copy.

use serde::{Deserialize, Serialize};

use stakesim_core::{EconomicParameters, SimError, MIN_STAKE};

/// Per-validator result of one reward allocation.
///
/// Created fresh on every allocation call and never mutated afterwards.
/// Reward fields are tokens per year; `apr` and `user_apr` are percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardBreakdown {
    /// Zero-based validator index within the stake vector.
    pub validator_id: usize,
    /// The stake this allocation was computed against (after any PD
    /// substitution).
    pub stake: u64,
    /// Flat share of the yearly pool, identical for every validator.
    pub proposer_reward: f64,
    /// Stake-weighted share of the remaining pool.
    pub staker_reward: f64,
    /// proposer_reward + staker_reward.
    pub total_reward: f64,
    /// Annualized return on the validator's total stake (percent).
    pub apr: f64,
    /// Reward the validator keeps once delegated stake pays commission:
    /// full APR on the MIN_STAKE self-stake plus the commission cut on the
    /// delegated remainder.
    pub commission_adjusted_reward: f64,
    /// Net APR a pure delegator receives after commission (percent).
    pub user_apr: f64,
    /// Alternate reward under a partial-delegation split; present only for
    /// the overridden validator and only when strictly positive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pd_adjusted_reward: Option<f64>,
}

/// Partial-delegation simulation overlay for one validator.
///
/// Read-only input owned by the caller. A `pd_percentage` of zero means no
/// override: a zero-percent delegation is economically identical to none.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PdOverride {
    /// Zero-based index of the validator to override.
    pub node_index: usize,
    /// Stake substituted for the validator before allocation. Values at or
    /// below MIN_STAKE leave the original stake in place.
    pub simulated_stake: u64,
    /// Percent of the validator's own stake delegated to a third party.
    pub pd_percentage: f64,
}

/// Allocate one year of rewards across the council.
///
/// # Errors
/// Returns `SimError::Configuration` for an empty stake vector and
/// `SimError::IndexOutOfRange` when a PD override references a validator
/// outside the council. The override is validated before any stake is
/// touched.
pub fn allocate(
    stakes: &[u64],
    params: &EconomicParameters,
    pd: Option<&PdOverride>,
) -> Result<Vec<RewardBreakdown>, SimError> {
    if stakes.is_empty() {
        return Err(SimError::Configuration("empty stake vector".to_string()));
    }
    if let Some(pd) = pd {
        if pd.node_index >= stakes.len() {
            return Err(SimError::IndexOutOfRange(format!(
                "PD node index {} outside council of {} validators",
                pd.node_index,
                stakes.len()
            )));
        }
    }

    // The caller's vector is never observably altered: the PD substitution
    // operates on an owned copy.
    let mut stakes = stakes.to_vec();
    if let Some(pd) = pd {
        if pd.simulated_stake > MIN_STAKE {
            stakes[pd.node_index] = pd.simulated_stake;
        }
    }

    let n = stakes.len();
    let total_reward_per_year = params.total_reward_per_year();
    let proposer_fraction = params.proposer_ratio / 100.0;
    let total_effective_stake: u64 = stakes.iter().map(|s| s.saturating_sub(MIN_STAKE)).sum();

    let proposer_reward = total_reward_per_year * proposer_fraction / n as f64;
    let staker_pool = total_reward_per_year * (1.0 - proposer_fraction);

    let mut breakdowns = Vec::with_capacity(n);
    for (i, &stake) in stakes.iter().enumerate() {
        let effective_stake = stake.saturating_sub(MIN_STAKE);

        // A council where everyone staked exactly MIN_STAKE has no
        // effective stake; the staker share is zero for all.
        let staker_reward = if total_effective_stake > 0 {
            staker_pool * effective_stake as f64 / total_effective_stake as f64
        } else {
            0.0
        };

        let total_reward = proposer_reward + staker_reward;
        let apr = if stake > 0 {
            total_reward / stake as f64 * 100.0
        } else {
            0.0
        };

        let commission_adjusted_reward = MIN_STAKE as f64 * apr / 100.0
            + effective_stake as f64 * apr / 100.0 * params.commission_rate / 100.0;
        let user_apr = apr * (100.0 - params.commission_rate) / 100.0;

        let pd_adjusted_reward = match pd {
            Some(pd) if pd.node_index == i && pd.pd_percentage > 0.0 => {
                let gross = stake as f64 * apr / 100.0;
                let delegated = pd.pd_percentage / 100.0;
                let adjusted = gross * (1.0 - delegated)
                    + gross * delegated * (params.commission_rate / 100.0);
                (adjusted > 0.0).then_some(adjusted)
            }
            _ => None,
        };

        breakdowns.push(RewardBreakdown {
            validator_id: i,
            stake,
            proposer_reward,
            staker_reward,
            total_reward,
            apr,
            commission_adjusted_reward,
            user_apr,
            pd_adjusted_reward,
        });
    }

    Ok(breakdowns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stakesim_core::SECONDS_PER_YEAR;

    fn params(proposer_ratio: f64, commission_rate: f64) -> EconomicParameters {
        EconomicParameters::new(proposer_ratio, commission_rate, 4.8)
    }

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = 1e-6 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() < tolerance,
            "expected {} within {} of {}",
            actual,
            tolerance,
            expected
        );
    }

    #[test]
    fn test_proposer_reward_sum_matches_ratio() {
        let stakes = [10_000_000, 20_000_000, 50_000_000];
        let p = params(30.0, 5.0);
        let breakdowns = allocate(&stakes, &p, None).unwrap();

        let proposer_total: f64 = breakdowns.iter().map(|b| b.proposer_reward).sum();
        assert_close(proposer_total, p.total_reward_per_year() * 0.30);
    }

    #[test]
    fn test_staker_reward_sum_matches_remainder() {
        let stakes = [10_000_000, 20_000_000, 50_000_000];
        let p = params(30.0, 5.0);
        let breakdowns = allocate(&stakes, &p, None).unwrap();

        let staker_total: f64 = breakdowns.iter().map(|b| b.staker_reward).sum();
        assert_close(staker_total, p.total_reward_per_year() * 0.70);
    }

    #[test]
    fn test_rewards_are_non_negative() {
        let stakes = [5_000_000, 7_000_000, 500_000_000];
        let breakdowns = allocate(&stakes, &params(15.0, 10.0), None).unwrap();
        for b in &breakdowns {
            assert!(b.proposer_reward >= 0.0);
            assert!(b.staker_reward >= 0.0);
            assert!(b.apr >= 0.0);
        }
    }

    #[test]
    fn test_single_min_stake_validator_all_proposer() {
        // One validator at the floor with a 100% proposer ratio earns the
        // entire yearly pool as proposer reward.
        let p = params(100.0, 0.0);
        let breakdowns = allocate(&[MIN_STAKE], &p, None).unwrap();

        let expected_apr = 100.0 * (4.8 * SECONDS_PER_YEAR as f64) / MIN_STAKE as f64;
        assert_eq!(breakdowns.len(), 1);
        assert_eq!(breakdowns[0].staker_reward, 0.0);
        assert_close(breakdowns[0].apr, expected_apr);
    }

    #[test]
    fn test_degenerate_council_is_symmetric() {
        // Two validators at exactly MIN_STAKE: no effective stake, so the
        // staker share zeroes out and both earn the same flat reward.
        let breakdowns = allocate(&[MIN_STAKE, MIN_STAKE], &params(50.0, 5.0), None).unwrap();
        assert_eq!(breakdowns[0].staker_reward, 0.0);
        assert_eq!(breakdowns[1].staker_reward, 0.0);
        assert_eq!(breakdowns[0].total_reward, breakdowns[1].total_reward);
    }

    #[test]
    fn test_user_apr_is_exact_for_all_commissions() {
        let stakes = [8_000_000, 40_000_000, 120_000_000];
        for commission in [0.0, 37.5, 100.0] {
            let breakdowns = allocate(&stakes, &params(20.0, commission), None).unwrap();
            for b in &breakdowns {
                assert_eq!(b.user_apr, b.apr * (100.0 - commission) / 100.0);
            }
        }
    }

    #[test]
    fn test_commission_adjusted_reward_formula() {
        let stakes = [60_000_000];
        let breakdowns = allocate(&stakes, &params(20.0, 10.0), None).unwrap();
        let b = &breakdowns[0];

        let expected = MIN_STAKE as f64 * b.apr / 100.0
            + (60_000_000 - MIN_STAKE) as f64 * b.apr / 100.0 * 0.10;
        assert_close(b.commission_adjusted_reward, expected);
    }

    #[test]
    fn test_allocation_is_idempotent() {
        let stakes = [6_000_000, 12_000_000, 90_000_000];
        let p = params(25.0, 7.0);
        let first = allocate(&stakes, &p, None).unwrap();
        let second = allocate(&stakes, &p, None).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_pd_out_of_range_rejected() {
        let pd = PdOverride {
            node_index: 3,
            simulated_stake: 50_000_000,
            pd_percentage: 40.0,
        };
        let result = allocate(&[10_000_000, 20_000_000], &params(20.0, 5.0), Some(&pd));
        assert!(matches!(result, Err(SimError::IndexOutOfRange(_))));
    }

    #[test]
    fn test_pd_substitutes_stake_in_copy_only() {
        let stakes = vec![10_000_000, 20_000_000];
        let pd = PdOverride {
            node_index: 1,
            simulated_stake: 80_000_000,
            pd_percentage: 0.0,
        };
        let breakdowns = allocate(&stakes, &params(20.0, 5.0), Some(&pd)).unwrap();

        assert_eq!(breakdowns[1].stake, 80_000_000);
        // The caller's vector is untouched.
        assert_eq!(stakes, vec![10_000_000, 20_000_000]);
    }

    #[test]
    fn test_pd_at_or_below_min_stake_keeps_original() {
        let pd = PdOverride {
            node_index: 0,
            simulated_stake: MIN_STAKE,
            pd_percentage: 30.0,
        };
        let breakdowns = allocate(&[25_000_000, 30_000_000], &params(20.0, 5.0), Some(&pd)).unwrap();
        assert_eq!(breakdowns[0].stake, 25_000_000);
        // The split still applies to the original stake.
        assert!(breakdowns[0].pd_adjusted_reward.is_some());
    }

    #[test]
    fn test_pd_zero_percentage_yields_no_field() {
        let pd = PdOverride {
            node_index: 0,
            simulated_stake: 0,
            pd_percentage: 0.0,
        };
        let breakdowns = allocate(&[25_000_000, 30_000_000], &params(20.0, 5.0), Some(&pd)).unwrap();
        assert!(breakdowns.iter().all(|b| b.pd_adjusted_reward.is_none()));
    }

    #[test]
    fn test_pd_field_only_on_overridden_validator() {
        let pd = PdOverride {
            node_index: 1,
            simulated_stake: 100_000_000,
            pd_percentage: 60.0,
        };
        let p = params(20.0, 10.0);
        let breakdowns = allocate(&[25_000_000, 30_000_000, 45_000_000], &p, Some(&pd)).unwrap();

        assert!(breakdowns[0].pd_adjusted_reward.is_none());
        assert!(breakdowns[2].pd_adjusted_reward.is_none());

        let b = &breakdowns[1];
        let gross = b.stake as f64 * b.apr / 100.0;
        let expected = gross * 0.4 + gross * 0.6 * 0.10;
        assert_close(b.pd_adjusted_reward.unwrap(), expected);
    }

    #[test]
    fn test_empty_stake_vector_rejected() {
        let result = allocate(&[], &params(20.0, 5.0), None);
        assert!(matches!(result, Err(SimError::Configuration(_))));
    }
}

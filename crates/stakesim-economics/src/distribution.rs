// crates/stakesim-economics/src/distribution.rs
//
// Stake vector generation.
//
// A stake vector is an ascending list of per-validator stake amounts. Six
// sampling regimes are supported, from a fully uniform council to a
// bimodal whale/minnow split, plus two regimes built on the hard-coded
// reference tables.
//
// Every regime runs the same post-processing: truncate samples to whole
// tokens, scale the vector down if the combined stake exceeds
// MAX_TOTAL_STAKE (re-clamping each entry to MIN_STAKE afterwards, so the
// capped sum is approximate), and sort ascending.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::reference::{MAJOR_STAKERS, REFERENCE_SNAPSHOT};
use stakesim_core::{SimError, MAX_STAKE, MAX_TOTAL_STAKE, MIN_STAKE};

/// Lower bound of the log-uniform-low sampling range, and upper bound of
/// the small-validator fill in the reference-style regime (in tokens).
pub const LOW_RANGE_FLOOR: u64 = 50_000_000;

/// Statistical regime used to generate a stake vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionMode {
    /// Every validator stakes exactly MIN_STAKE.
    Uniform,
    /// Log-uniform samples between LOW_RANGE_FLOOR and MAX_STAKE.
    LogUniformLow,
    /// Log-uniform samples between MIN_STAKE and MAX_STAKE.
    LogUniformFull,
    /// The top tenth of the council at MAX_STAKE, the rest at MIN_STAKE.
    Bimodal,
    /// The hard-coded 42-validator council snapshot.
    FixedReferenceSet,
    /// The fixed major-staker prefix plus small sampled validators.
    ReferenceStyle,
}

impl DistributionMode {
    /// Map a 0-100 spread setting to a sampling regime.
    ///
    /// Mirrors the spread dial of the original simulator: 0 is a uniform
    /// council, low spreads sample only the upper stake range, mid spreads
    /// sample the full range, and high spreads are bimodal.
    pub fn from_spread(spread: u8) -> Self {
        match spread {
            0 => DistributionMode::Uniform,
            1..=33 => DistributionMode::LogUniformLow,
            34..=66 => DistributionMode::LogUniformFull,
            _ => DistributionMode::Bimodal,
        }
    }
}

/// Generate a stake vector of `validator_count` entries under `mode`.
///
/// `rng` is caller-owned so determinism is a property of the call: seed it
/// for reproducible vectors. `FixedReferenceSet` ignores `validator_count`
/// and always yields the full snapshot.
///
/// # Errors
/// Returns `SimError::Configuration` when `validator_count` is zero, or
/// when `ReferenceStyle` is requested with fewer validators than the
/// major-staker prefix holds. Callers that want the truncated prefix as a
/// fallback can take it from `reference::MAJOR_STAKERS` directly.
pub fn generate<R: Rng + ?Sized>(
    mode: DistributionMode,
    validator_count: usize,
    rng: &mut R,
) -> Result<Vec<u64>, SimError> {
    if validator_count == 0 && mode != DistributionMode::FixedReferenceSet {
        return Err(SimError::Configuration(
            "validator count must be at least 1".to_string(),
        ));
    }

    let raw = match mode {
        DistributionMode::Uniform => vec![MIN_STAKE; validator_count],
        DistributionMode::LogUniformLow => {
            log_uniform(LOW_RANGE_FLOOR, MAX_STAKE, validator_count, rng)
        }
        DistributionMode::LogUniformFull => {
            log_uniform(MIN_STAKE, MAX_STAKE, validator_count, rng)
        }
        DistributionMode::Bimodal => bimodal(validator_count, rng),
        DistributionMode::FixedReferenceSet => REFERENCE_SNAPSHOT.to_vec(),
        DistributionMode::ReferenceStyle => reference_style(validator_count, rng)?,
    };

    Ok(finalize(raw))
}

/// Draw `count` samples log-uniformly from [lo, hi], truncated to whole
/// tokens.
fn log_uniform<R: Rng + ?Sized>(lo: u64, hi: u64, count: usize, rng: &mut R) -> Vec<u64> {
    let ln_lo = (lo as f64).ln();
    let ln_hi = (hi as f64).ln();
    (0..count)
        .map(|_| rng.gen_range(ln_lo..=ln_hi).exp() as u64)
        .collect()
}

/// Assign the top tenth of the council (by count, rounded down) MAX_STAKE
/// and everyone else MIN_STAKE, then shuffle the assignment.
fn bimodal<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<u64> {
    let whales = count / 10;
    let mut stakes: Vec<u64> = (0..count)
        .map(|i| if i < whales { MAX_STAKE } else { MIN_STAKE })
        .collect();
    stakes.shuffle(rng);
    stakes
}

/// The fixed major-staker prefix, two validators pinned at MIN_STAKE, and
/// the remainder sampled log-uniformly below the major-staker range.
fn reference_style<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Result<Vec<u64>, SimError> {
    if count < MAJOR_STAKERS.len() {
        return Err(SimError::Configuration(format!(
            "reference_style needs at least {} validators, got {}",
            MAJOR_STAKERS.len(),
            count
        )));
    }

    let mut stakes = MAJOR_STAKERS.to_vec();
    let remainder = count - stakes.len();
    let pinned = remainder.min(2);
    stakes.extend(std::iter::repeat(MIN_STAKE).take(pinned));
    stakes.extend(log_uniform(MIN_STAKE, LOW_RANGE_FLOOR, remainder - pinned, rng));
    Ok(stakes)
}

/// Shared post-processing: cap the combined stake, clamp, and sort.
///
/// Re-clamping to MIN_STAKE after scaling can leave the capped sum
/// slightly off MAX_TOTAL_STAKE; accepted as approximate.
fn finalize(mut stakes: Vec<u64>) -> Vec<u64> {
    let total: u64 = stakes.iter().sum();
    if total > MAX_TOTAL_STAKE {
        let factor = MAX_TOTAL_STAKE as f64 / total as f64;
        tracing::info!(
            total,
            factor,
            "combined stake exceeds the council cap, scaling down"
        );
        for stake in stakes.iter_mut() {
            *stake = ((*stake as f64 * factor) as u64).max(MIN_STAKE);
        }
    }
    stakes.sort_unstable();
    stakes
}

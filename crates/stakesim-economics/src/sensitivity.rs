// crates/stakesim-economics/src/sensitivity.rs
//
// Proposer-ratio sensitivity sweep.
//
// Sweeps the proposer/staker split across its full [0, 100] domain and
// records the network-average APR at each point. Every sample is an
// independent allocation over the same stake vector, so the sweep shares
// no mutable state between points.

use serde::{Deserialize, Serialize};

use crate::rewards::allocate;
use stakesim_core::{EconomicParameters, SimError};

/// Number of sample points across the ratio domain, both ends included.
pub const RATIO_SAMPLES: usize = 101;

/// One sample point of the sensitivity sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioSample {
    /// Proposer ratio this sample was computed at (percent).
    pub proposer_ratio: f64,
    /// Mean per-validator APR across the council (percent).
    pub average_apr: f64,
}

/// Sweep the proposer ratio across [0, 100] in 101 evenly spaced points.
///
/// All other parameters are held fixed and no PD override applies.
///
/// # Errors
/// Propagates the allocator's rejection of an empty stake vector.
pub fn scan(stakes: &[u64], params: &EconomicParameters) -> Result<Vec<RatioSample>, SimError> {
    let mut samples = Vec::with_capacity(RATIO_SAMPLES);
    for step in 0..RATIO_SAMPLES {
        let ratio = step as f64 * 100.0 / (RATIO_SAMPLES - 1) as f64;
        let breakdowns = allocate(stakes, &params.with_proposer_ratio(ratio), None)?;
        let average_apr =
            breakdowns.iter().map(|b| b.apr).sum::<f64>() / breakdowns.len() as f64;
        samples.push(RatioSample {
            proposer_ratio: ratio,
            average_apr,
        });
    }
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> EconomicParameters {
        EconomicParameters::new(20.0, 5.0, 4.8)
    }

    #[test]
    fn test_scan_covers_full_domain() {
        let stakes = [10_000_000, 40_000_000, 250_000_000];
        let samples = scan(&stakes, &params()).unwrap();

        assert_eq!(samples.len(), RATIO_SAMPLES);
        assert_eq!(samples[0].proposer_ratio, 0.0);
        assert_eq!(samples[100].proposer_ratio, 100.0);
    }

    #[test]
    fn test_scan_zero_ratio_matches_allocator() {
        // The first sample must reproduce the all-staker allocation.
        let stakes = [10_000_000, 40_000_000, 250_000_000];
        let samples = scan(&stakes, &params()).unwrap();

        let breakdowns = allocate(&stakes, &params().with_proposer_ratio(0.0), None).unwrap();
        let expected = breakdowns.iter().map(|b| b.apr).sum::<f64>() / breakdowns.len() as f64;
        assert_eq!(samples[0].average_apr, expected);
    }

    #[test]
    fn test_scan_ignores_current_proposer_ratio() {
        // The sweep overrides the configured ratio at every point, so two
        // scans differing only in proposer_ratio are identical.
        let stakes = [10_000_000, 40_000_000];
        let a = scan(&stakes, &EconomicParameters::new(5.0, 5.0, 4.8)).unwrap();
        let b = scan(&stakes, &EconomicParameters::new(95.0, 5.0, 4.8)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_scan_empty_vector_propagates_error() {
        assert!(matches!(
            scan(&[], &params()),
            Err(SimError::Configuration(_))
        ));
    }
}

// crates/stakesim-cli/src/output.rs
//
// Output formatting for the stakesim CLI.
// Supports table and JSON output modes.

use serde::Serialize;
use tabled::{Table, Tabled};

use stakesim_core::SimError;
use stakesim_economics::{RatioSample, RewardBreakdown};

/// Output format for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed table output (default).
    Table,
    /// JSON output for machine consumption.
    Json,
}

impl OutputFormat {
    /// Parse a `--format` flag value.
    pub fn parse(name: &str) -> Result<Self, SimError> {
        match name {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(SimError::Configuration(format!(
                "unknown output format: {} (expected table or json)",
                other
            ))),
        }
    }
}

/// A row in the per-validator reward table.
#[derive(Tabled)]
struct RewardRow {
    #[tabled(rename = "Validator")]
    validator: String,
    #[tabled(rename = "Total Staking")]
    staking: String,
    #[tabled(rename = "Proposer Reward")]
    proposer_reward: String,
    #[tabled(rename = "Staker Reward")]
    staker_reward: String,
    #[tabled(rename = "Total Reward")]
    total_reward: String,
    #[tabled(rename = "APR (%)")]
    apr: String,
    #[tabled(rename = "User APR (%)")]
    user_apr: String,
    #[tabled(rename = "Commission-Adjusted Reward")]
    commission_adjusted: String,
    #[tabled(rename = "PD Reward")]
    pd_reward: String,
}

impl From<&RewardBreakdown> for RewardRow {
    fn from(b: &RewardBreakdown) -> Self {
        Self {
            validator: format!("Validator {}", b.validator_id + 1),
            staking: with_thousands(b.stake),
            proposer_reward: with_thousands(b.proposer_reward.round() as u64),
            staker_reward: with_thousands(b.staker_reward.round() as u64),
            total_reward: with_thousands(b.total_reward.round() as u64),
            apr: format!("{:.2}", b.apr),
            user_apr: format!("{:.2}", b.user_apr),
            commission_adjusted: with_thousands(b.commission_adjusted_reward.round() as u64),
            pd_reward: match b.pd_adjusted_reward {
                Some(reward) => with_thousands(reward.round() as u64),
                None => "--".to_string(),
            },
        }
    }
}

/// A row in the sensitivity sweep table.
#[derive(Tabled)]
struct RatioRow {
    #[tabled(rename = "Proposer Ratio (%)")]
    proposer_ratio: String,
    #[tabled(rename = "Network Average APR (%)")]
    average_apr: String,
}

impl From<&RatioSample> for RatioRow {
    fn from(s: &RatioSample) -> Self {
        Self {
            proposer_ratio: format!("{:.0}", s.proposer_ratio),
            average_apr: format!("{:.4}", s.average_apr),
        }
    }
}

/// Print per-validator reward breakdowns in the requested format.
pub fn print_breakdowns(breakdowns: &[RewardBreakdown], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            let rows: Vec<RewardRow> = breakdowns.iter().map(RewardRow::from).collect();
            println!("{}", format_table(&rows));
        }
        OutputFormat::Json => println!("{}", format_json(&breakdowns)),
    }
}

/// Print sensitivity sweep samples in the requested format.
pub fn print_samples(samples: &[RatioSample], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            let rows: Vec<RatioRow> = samples.iter().map(RatioRow::from).collect();
            println!("{}", format_table(&rows));
        }
        OutputFormat::Json => println!("{}", format_json(&samples)),
    }
}

/// Format a slice of Tabled items as a table string.
fn format_table<T: Tabled>(data: &[T]) -> String {
    Table::new(data).to_string()
}

/// Format a serializable value as a pretty-printed JSON string.
fn format_json<T: Serialize>(data: &T) -> String {
    serde_json::to_string_pretty(data)
        .unwrap_or_else(|e| format!("JSON serialization error: {}", e))
}

/// Group a token amount with thousands separators.
fn with_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_thousands_grouping() {
        assert_eq!(with_thousands(0), "0");
        assert_eq!(with_thousands(999), "999");
        assert_eq!(with_thousands(5_000_000), "5,000,000");
        assert_eq!(with_thousands(3_000_000_000), "3,000,000,000");
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::parse("table").unwrap(), OutputFormat::Table);
        assert_eq!(OutputFormat::parse("json").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::parse("csv").is_err());
    }
}

// crates/stakesim-core/src/error.rs

use thiserror::Error;

/// Workspace-wide error types for the stakesim simulator.
#[derive(Debug, Error)]
pub enum SimError {
    /// Invalid simulation configuration (validator count, unknown mode,
    /// empty inputs).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A partial-delegation override referenced a validator that does not
    /// exist in the stake vector.
    #[error("Index out of range: {0}")]
    IndexOutOfRange(String),

    /// The live stake source failed (transport or response shape). Terminal
    /// for the invocation; never retried.
    #[error("Source error: {0}")]
    Source(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for SimError {
    fn from(e: serde_json::Error) -> Self {
        SimError::Serialization(e.to_string())
    }
}

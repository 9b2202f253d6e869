//! Error types for Momentum core operations.

use thiserror::Error;

/// Result type alias for Momentum operations.
pub type Result<T> = std::result::Result<T, MomentumError>;

/// Core error types for the Momentum tracker.
#[derive(Debug, Error)]
pub enum MomentumError {
    /// Data validation error (blank names and the like)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Preference store backend error
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<std::io::Error> for MomentumError {
    fn from(err: std::io::Error) -> Self {
        MomentumError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for MomentumError {
    fn from(err: serde_json::Error) -> Self {
        MomentumError::Storage(err.to_string())
    }
}

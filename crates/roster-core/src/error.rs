//! Error types for Roster core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-friendly messages and exit codes.

use thiserror::Error;

use crate::validation::ValidationError;

/// Result type alias for Roster operations.
pub type Result<T> = std::result::Result<T, RosterError>;

/// Core error type for Roster operations.
#[derive(Debug, Error)]
pub enum RosterError {
    /// A candidate record failed a field rule
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid caller input (bad slot key, malformed id, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<std::io::Error> for RosterError {
    fn from(err: std::io::Error) -> Self {
        RosterError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for RosterError {
    fn from(err: serde_json::Error) -> Self {
        RosterError::Storage(format!("JSON error: {}", err))
    }
}

//! Leaderboard-specific error types

use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeaderboardError {
    #[error("Invalid instance: {reason}")]
    InvalidInstance { reason: String },

    #[error("Caller {caller} is not authorized to {action}")]
    Unauthorized { caller: String, action: String },

    #[error("Ledger append out of order: objective {objective} does not exceed best {best}")]
    LedgerOrder { objective: u64, best: u64 },

    #[error("Failed to load instance from {path}: {reason}")]
    InstanceLoadError { path: String, reason: String },

    #[error("Replay failed at line {line}: {reason}")]
    ReplayError { line: usize, reason: String },

    #[error("Configuration error: {field}")]
    ConfigurationError { field: String },

    #[error("Shared component error")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl LeaderboardError {
    pub fn config(field: impl Into<String>) -> Self {
        LeaderboardError::ConfigurationError { field: field.into() }
    }

    pub fn invalid_instance(reason: impl Into<String>) -> Self {
        LeaderboardError::InvalidInstance { reason: reason.into() }
    }
}

pub type LeaderboardResult<T> = Result<T, LeaderboardError>;

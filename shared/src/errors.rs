//! Shared error types for the leaderboard system

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Invalid caller identity: {input:?}")]
    InvalidCallerId { input: String },
}

pub type SharedResult<T> = Result<T, SharedError>;

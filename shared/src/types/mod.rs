//! Core types used throughout the leaderboard system

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::errors::{SharedError, SharedResult};

/// Opaque identity of a caller, compared only for equality
///
/// Deserialization goes through [`CallerId::parse`], so identities read from
/// files are normalized the same way as configured ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CallerId(String);

impl CallerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Parse a caller identity, rejecting blank input
    pub fn parse(input: &str) -> SharedResult<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(SharedError::InvalidCallerId {
                input: input.to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CallerId {
    type Error = SharedError;

    fn try_from(value: String) -> SharedResult<Self> {
        Self::parse(&value)
    }
}

impl From<CallerId> for String {
    fn from(id: CallerId) -> Self {
        id.0
    }
}

impl fmt::Display for CallerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a single leaderboard instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardId(Uuid);

impl BoardId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BoardId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Short form keeps log lines readable
        let full = self.0.to_string();
        write!(f, "board_{}", &full[..8])
    }
}

/// Problem domains a leaderboard can rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProblemKind {
    Sat,
    Knapsack,
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProblemKind::Sat => write!(f, "sat"),
            ProblemKind::Knapsack => write!(f, "knapsack"),
        }
    }
}

/// Submission gate state. Only ever moves from `Open` to `Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionState {
    Open,
    Closed,
}

impl SubmissionState {
    pub fn is_open(&self) -> bool {
        matches!(self, SubmissionState::Open)
    }
}

impl Default for SubmissionState {
    fn default() -> Self {
        SubmissionState::Open
    }
}

/// Identity and time of a call, supplied by the execution environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallContext {
    pub caller: CallerId,
    pub timestamp: DateTime<Utc>,
}

impl CallContext {
    pub fn new(caller: CallerId, timestamp: DateTime<Utc>) -> Self {
        Self { caller, timestamp }
    }

    /// Context stamped with the current wall clock
    pub fn now(caller: CallerId) -> Self {
        Self::new(caller, Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caller_id_parse_trims_and_rejects_blank() {
        assert_eq!(CallerId::parse("  alice ").unwrap().as_str(), "alice");
        assert!(matches!(
            CallerId::parse("   "),
            Err(SharedError::InvalidCallerId { .. })
        ));
    }

    #[test]
    fn test_caller_id_deserialization_normalizes_like_parse() {
        let id: CallerId = serde_json::from_str(r#"" controller ""#).unwrap();
        assert_eq!(id, CallerId::parse("controller").unwrap());
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""controller""#);
        assert!(serde_json::from_str::<CallerId>(r#""  ""#).is_err());
    }

    #[test]
    fn test_board_id_display_and_uniqueness() {
        let id = BoardId::new();
        assert!(id.to_string().starts_with("board_"));
        assert_eq!(id.to_string().len(), "board_".len() + 8);
        assert_ne!(BoardId::new(), id);
    }

    #[test]
    fn test_problem_kind_display_matches_wire_name() {
        assert_eq!(ProblemKind::Sat.to_string(), "sat");
        assert_eq!(serde_json::to_value(ProblemKind::Knapsack).unwrap(), "knapsack");
    }

    #[test]
    fn test_submission_state_defaults_open() {
        assert!(SubmissionState::default().is_open());
        assert!(!SubmissionState::Closed.is_open());
    }
}

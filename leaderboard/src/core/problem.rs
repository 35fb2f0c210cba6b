//! The problem abstraction shared by every leaderboard
//!
//! A problem owns its immutable instance and knows how to validate and score a
//! candidate. Everything else (ledger, gate, serialization of mutations) is
//! generic over this trait.

use std::fmt::Debug;

use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::{CallerId, ObjectiveMetrics, ProblemKind};

/// An immutable optimization instance with a pure validity checker
pub trait Problem: Serialize + Debug + Send + Sync + 'static {
    /// Caller-supplied candidate solution
    type Candidate: Clone + Debug + Serialize + Send + Sync + 'static;

    const KIND: ProblemKind;

    /// Metrics of a feasible candidate, or `None` when it fails validation.
    /// Must be pure: same instance and candidate always give the same answer.
    fn evaluate(&self, candidate: &Self::Candidate) -> Option<ObjectiveMetrics>;
}

/// Anything the ledger can rank
pub trait Ranked {
    fn objective(&self) -> u64;
}

/// An accepted solution as stored in the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolutionRecord<C> {
    pub candidate: C,
    pub metrics: ObjectiveMetrics,
    pub timestamp: DateTime<Utc>,
    pub submitter: CallerId,
}

impl<C> Ranked for SolutionRecord<C> {
    fn objective(&self) -> u64 {
        self.metrics.objective()
    }
}

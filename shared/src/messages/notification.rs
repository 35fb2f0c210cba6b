//! Improvement notifications emitted once per accepted submission

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{BoardId, CallerId, ProblemKind};

/// Objective metrics of an accepted solution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ObjectiveMetrics {
    Sat { satisfied_clauses: u64 },
    Knapsack { total_value: u64, total_weight: u64 },
}

impl ObjectiveMetrics {
    /// The scalar used to rank solutions
    pub fn objective(&self) -> u64 {
        match self {
            ObjectiveMetrics::Sat { satisfied_clauses } => *satisfied_clauses,
            ObjectiveMetrics::Knapsack { total_value, .. } => *total_value,
        }
    }

    pub fn problem_kind(&self) -> ProblemKind {
        match self {
            ObjectiveMetrics::Sat { .. } => ProblemKind::Sat,
            ObjectiveMetrics::Knapsack { .. } => ProblemKind::Knapsack,
        }
    }
}

/// Published on the notify side-channel after a solution is recorded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImprovementNotice {
    pub board_id: BoardId,
    /// Ledger position of the new best entry
    pub index: usize,
    pub metrics: ObjectiveMetrics,
    pub submitter: CallerId,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_objective_selects_ranking_metric() {
        let sat = ObjectiveMetrics::Sat { satisfied_clauses: 7 };
        let knapsack = ObjectiveMetrics::Knapsack {
            total_value: 12,
            total_weight: 40,
        };
        assert_eq!(sat.objective(), 7);
        assert_eq!(knapsack.objective(), 12);
        assert_eq!(knapsack.problem_kind(), ProblemKind::Knapsack);
    }

    #[test]
    fn test_metrics_serialize_with_kind_tag() {
        let metrics = ObjectiveMetrics::Knapsack {
            total_value: 3,
            total_weight: 2,
        };
        let json = serde_json::to_value(metrics).unwrap();
        assert_eq!(json["kind"], "knapsack");
        assert_eq!(json["total_value"], 3);
    }
}

//! Weighted satisfiability instances
//!
//! Clauses are lists of signed literals: the magnitude is the 1-based variable
//! index and the sign is the required polarity. The objective is the number of
//! satisfied clauses.

use serde::Serialize;
use shared::{ObjectiveMetrics, ProblemKind};

use super::problem::Problem;
use crate::error::{LeaderboardError, LeaderboardResult};

pub type Literal = i64;
pub type Clause = Vec<Literal>;

/// Immutable CNF formula
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SatInstance {
    clauses: Vec<Clause>,
    variable_count: usize,
}

impl SatInstance {
    /// Build an instance, rejecting literals that name variable 0.
    ///
    /// Empty formulas and empty clauses are accepted. An empty clause can
    /// never be satisfied; an empty formula has a single valid assignment
    /// (the empty one) scoring 0.
    pub fn new(clauses: Vec<Clause>) -> LeaderboardResult<Self> {
        let mut variable_count = 0usize;

        for (clause_index, clause) in clauses.iter().enumerate() {
            for &literal in clause {
                if literal == 0 {
                    return Err(LeaderboardError::invalid_instance(format!(
                        "clause {clause_index} contains literal 0"
                    )));
                }
                let magnitude = usize::try_from(literal.unsigned_abs()).map_err(|_| {
                    LeaderboardError::invalid_instance(format!(
                        "clause {clause_index} literal {literal} is out of range"
                    ))
                })?;
                variable_count = variable_count.max(magnitude);
            }
        }

        Ok(Self {
            clauses,
            variable_count,
        })
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Largest literal magnitude across all clauses (0 when empty)
    pub fn variable_count(&self) -> usize {
        self.variable_count
    }

    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// An assignment is valid iff it assigns exactly every variable
    pub fn check_validity(&self, assignment: &[bool]) -> bool {
        assignment.len() == self.variable_count
    }

    /// Number of clauses with at least one true literal.
    ///
    /// Independent of validity; a literal naming a variable the assignment
    /// does not cover is treated as false in both polarities.
    pub fn score(&self, assignment: &[bool]) -> u64 {
        self.clauses
            .iter()
            .filter(|clause| clause.iter().any(|&literal| literal_holds(literal, assignment)))
            .count() as u64
    }
}

fn literal_holds(literal: Literal, assignment: &[bool]) -> bool {
    let Ok(variable) = usize::try_from(literal.unsigned_abs()) else {
        return false;
    };
    match variable.checked_sub(1).and_then(|slot| assignment.get(slot)) {
        Some(&value) => value == (literal > 0),
        None => false,
    }
}

/// Decode a 0/1 encoded assignment; any other value makes it invalid
pub fn assignment_from_bits(bits: &[i64]) -> Option<Vec<bool>> {
    bits.iter()
        .map(|&bit| match bit {
            0 => Some(false),
            1 => Some(true),
            _ => None,
        })
        .collect()
}

impl Problem for SatInstance {
    type Candidate = Vec<bool>;

    const KIND: ProblemKind = ProblemKind::Sat;

    fn evaluate(&self, candidate: &Self::Candidate) -> Option<ObjectiveMetrics> {
        if !self.check_validity(candidate) {
            return None;
        }
        Some(ObjectiveMetrics::Sat {
            satisfied_clauses: self.score(candidate),
        })
    }
}

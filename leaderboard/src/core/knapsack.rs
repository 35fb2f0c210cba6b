//! 0/1 knapsack instances
//!
//! A candidate is a list of distinct item indices. It is feasible when every
//! index is in range and the chosen weight fits the capacity; the objective is
//! the total value.

use serde::{Deserialize, Serialize};
use shared::{ObjectiveMetrics, ProblemKind};

use super::problem::Problem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnapsackItem {
    pub weight: u64,
    pub value: u64,
}

impl KnapsackItem {
    pub fn new(weight: u64, value: u64) -> Self {
        Self { weight, value }
    }
}

/// Exact sums over a feasible selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnapsackTotals {
    pub total_value: u64,
    pub total_weight: u64,
}

/// Immutable item list plus capacity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KnapsackInstance {
    items: Vec<KnapsackItem>,
    capacity: u64,
}

impl KnapsackInstance {
    pub fn new(items: Vec<KnapsackItem>, capacity: u64) -> Self {
        Self { items, capacity }
    }

    pub fn items(&self) -> &[KnapsackItem] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Totals of a feasible selection, `None` if any check fails.
    ///
    /// Duplicates reject the whole selection rather than being collapsed.
    /// Sums that overflow are infeasible.
    pub fn check_validity(&self, indices: &[u64]) -> Option<KnapsackTotals> {
        if has_duplicates(indices) {
            return None;
        }

        let mut totals = KnapsackTotals {
            total_value: 0,
            total_weight: 0,
        };
        for &index in indices {
            let item = usize::try_from(index).ok().and_then(|i| self.items.get(i))?;
            totals.total_weight = totals.total_weight.checked_add(item.weight)?;
            totals.total_value = totals.total_value.checked_add(item.value)?;
        }

        (totals.total_weight <= self.capacity).then_some(totals)
    }
}

// All-pairs comparison; selections are small
fn has_duplicates(indices: &[u64]) -> bool {
    indices
        .iter()
        .enumerate()
        .any(|(i, a)| indices[i + 1..].contains(a))
}

impl Problem for KnapsackInstance {
    type Candidate = Vec<u64>;

    const KIND: ProblemKind = ProblemKind::Knapsack;

    fn evaluate(&self, candidate: &Self::Candidate) -> Option<ObjectiveMetrics> {
        self.check_validity(candidate)
            .map(|totals| ObjectiveMetrics::Knapsack {
                total_value: totals.total_value,
                total_weight: totals.total_weight,
            })
    }
}

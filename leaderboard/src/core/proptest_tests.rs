//! Property-based tests for the checkers and the ledger.

use proptest::prelude::*;

use chrono::Utc;
use shared::{CallContext, CallerId};

use super::{KnapsackInstance, KnapsackItem, Ledger, Problem, Ranked, SatInstance};
use crate::leaderboard::Leaderboard;
use crate::services::LogNotifier;

fn arb_literal(max_var: i64) -> impl Strategy<Value = i64> {
    (1..=max_var, any::<bool>()).prop_map(|(var, positive)| if positive { var } else { -var })
}

fn arb_clauses() -> impl Strategy<Value = Vec<Vec<i64>>> {
    proptest::collection::vec(proptest::collection::vec(arb_literal(8), 0..4), 0..10)
}

fn arb_items() -> impl Strategy<Value = Vec<KnapsackItem>> {
    proptest::collection::vec((0..20u64, 0..20u64), 0..8)
        .prop_map(|pairs| pairs.into_iter().map(|(w, v)| KnapsackItem::new(w, v)).collect())
}

struct Entry(u64);

impl Ranked for Entry {
    fn objective(&self) -> u64 {
        self.0
    }
}

proptest! {
    #[test]
    fn variable_count_is_max_magnitude(clauses in arb_clauses()) {
        let expected = clauses
            .iter()
            .flatten()
            .map(|literal| literal.unsigned_abs() as usize)
            .max()
            .unwrap_or(0);
        let sat = SatInstance::new(clauses).unwrap();
        prop_assert_eq!(sat.variable_count(), expected);
    }

    #[test]
    fn sat_validity_depends_only_on_length(
        clauses in arb_clauses(),
        assignment in proptest::collection::vec(any::<bool>(), 0..10)
    ) {
        let sat = SatInstance::new(clauses).unwrap();
        prop_assert_eq!(sat.check_validity(&assignment), assignment.len() == sat.variable_count());
    }

    #[test]
    fn sat_score_never_exceeds_clause_count(
        clauses in arb_clauses(),
        assignment in proptest::collection::vec(any::<bool>(), 8)
    ) {
        let sat = SatInstance::new(clauses).unwrap();
        prop_assert!(sat.score(&assignment) <= sat.clause_count() as u64);
    }

    #[test]
    fn knapsack_valid_selection_fits_and_is_distinct(
        items in arb_items(),
        capacity in 0..60u64,
        indices in proptest::collection::vec(0..10u64, 0..6)
    ) {
        let knapsack = KnapsackInstance::new(items.clone(), capacity);
        if let Some(totals) = knapsack.check_validity(&indices) {
            prop_assert!(totals.total_weight <= capacity);
            let mut sorted = indices.clone();
            sorted.sort_unstable();
            sorted.dedup();
            prop_assert_eq!(sorted.len(), indices.len());
            let value: u64 = indices.iter().map(|&i| items[i as usize].value).sum();
            prop_assert_eq!(totals.total_value, value);
            prop_assert_eq!(
                knapsack.evaluate(&indices).map(|m| m.objective()),
                Some(value)
            );
        }
    }

    #[test]
    fn ledger_only_ever_strictly_increases(objectives in proptest::collection::vec(0..50u64, 0..40)) {
        let mut ledger = Ledger::new();
        for objective in objectives {
            let before = ledger.best_objective();
            let was_empty = ledger.is_empty();
            let appended = ledger.append(Entry(objective)).is_ok();
            prop_assert_eq!(appended, was_empty || objective > before);
        }
        let recorded: Vec<u64> = ledger.iter().map(|entry| entry.objective()).collect();
        prop_assert!(recorded.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn board_accepts_exactly_the_strict_improvements(
        items in arb_items(),
        capacity in 0..60u64,
        selections in proptest::collection::vec(proptest::collection::vec(0..10u64, 0..5), 0..20)
    ) {
        let board = Leaderboard::new(KnapsackInstance::new(items, capacity), CallerId::new("owner"), LogNotifier);
        let ctx = CallContext::new(CallerId::new("bob"), Utc::now());

        for selection in selections {
            let prior = board.best_solution().map_or(0, |entry| entry.metrics.objective());
            let objective = board.check_validity(&selection).map(|metrics| metrics.objective());
            let accepted = tokio_test::block_on(board.submit_solution(&ctx, selection));

            prop_assert_eq!(accepted, objective.is_some_and(|objective| objective > prior));
            let now = board.best_solution().map_or(0, |entry| entry.metrics.objective());
            if accepted {
                prop_assert_eq!(Some(now), objective);
            } else {
                prop_assert_eq!(now, prior);
            }
        }
    }
}

//! Test helpers for building leaderboards and asserting on them

use leaderboard::services::BroadcastNotifier;
use leaderboard::{Leaderboard, MockNotifier, Problem};

use super::fixtures::TestFixtures;

pub struct TestHelpers;

impl TestHelpers {
    /// Mock notifier that accepts any number of notices
    pub fn permissive_notifier() -> MockNotifier {
        let mut notifier = MockNotifier::new();
        notifier.expect_notify().returning(|_| ()).times(0..);
        notifier
    }

    /// Mock notifier that must be called exactly `times` times
    pub fn counting_notifier(times: usize) -> MockNotifier {
        let mut notifier = MockNotifier::new();
        notifier.expect_notify().returning(|_| ()).times(times);
        notifier
    }

    pub fn board<P: Problem>(instance: P) -> Leaderboard<P, MockNotifier> {
        Leaderboard::new(instance, TestFixtures::controller(), Self::permissive_notifier())
    }

    pub fn broadcast_board<P: Problem>(instance: P) -> (Leaderboard<P, BroadcastNotifier>, BroadcastNotifier) {
        let notifier = BroadcastNotifier::new(1024);
        let observer = notifier.clone();
        (Leaderboard::new(instance, TestFixtures::controller(), notifier), observer)
    }

    /// Objectives of every ledger entry, in ledger order
    pub fn objectives<P: Problem, N: leaderboard::Notifier>(board: &Leaderboard<P, N>) -> Vec<u64> {
        let snapshot = board.snapshot();
        snapshot.ledger().iter().map(|entry| entry.metrics.objective()).collect()
    }

    pub fn assert_strictly_increasing(objectives: &[u64]) {
        assert!(
            objectives.windows(2).all(|pair| pair[0] < pair[1]),
            "ledger not strictly increasing: {objectives:?}"
        );
    }
}

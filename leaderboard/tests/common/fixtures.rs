//! Test fixtures and data for leaderboard tests

use chrono::{DateTime, Duration, TimeZone, Utc};
use leaderboard::{KnapsackInstance, KnapsackItem, SatInstance};
use shared::{CallContext, CallerId};

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    pub const CONTROLLER: &'static str = "controller";
    pub const ALICE: &'static str = "alice";
    pub const BOB: &'static str = "bob";
    pub const MALLORY: &'static str = "mallory";

    pub fn controller() -> CallerId {
        CallerId::new(Self::CONTROLLER)
    }

    /// Fixed base time so recorded timestamps are predictable
    pub fn epoch() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    /// Context for `caller` at `epoch + seconds`
    pub fn ctx(caller: &str, seconds: i64) -> CallContext {
        CallContext::new(CallerId::new(caller), Self::epoch() + Duration::seconds(seconds))
    }

    /// `[[1,-2],[2]]`: two variables, best score 2
    pub fn small_sat() -> SatInstance {
        SatInstance::new(vec![vec![1, -2], vec![2]]).unwrap()
    }

    /// One unit clause per variable, all positive: score = number of true bits
    pub fn unit_sat(variables: usize) -> SatInstance {
        let clauses = (1..=variables as i64).map(|v| vec![v]).collect();
        SatInstance::new(clauses).unwrap()
    }

    /// Assignment with the first `ones` variables true
    pub fn unit_assignment(variables: usize, ones: usize) -> Vec<bool> {
        (0..variables).map(|i| i < ones).collect()
    }

    /// Items `[(w=2,v=3),(w=5,v=4)]`, capacity 5
    pub fn small_knapsack() -> KnapsackInstance {
        KnapsackInstance::new(vec![KnapsackItem::new(2, 3), KnapsackItem::new(5, 4)], 5)
    }

    /// Item `i` has weight 0 and value `i + 1`: selecting `[i]` scores `i + 1`
    pub fn valued_knapsack(items: usize) -> KnapsackInstance {
        let items = (0..items as u64).map(|i| KnapsackItem::new(0, i + 1)).collect();
        KnapsackInstance::new(items, 0)
    }
}

//! Append-only optimization leaderboards
//!
//! Each leaderboard fixes one problem instance (weighted SAT or 0/1
//! knapsack), validates externally supplied candidates, and records a
//! candidate only when it strictly beats the best recorded so far. Mutations
//! are serialized per leaderboard; reads are served from published snapshots.

pub mod config;
pub mod core;
pub mod error;
pub mod leaderboard;
pub mod services;
pub mod traits;

// Re-export commonly used types
pub use crate::core::{
    KnapsackInstance, KnapsackItem, KnapsackTotals, Ledger, Problem, SatInstance, SolutionRecord,
    SubmissionGate,
};
pub use config::{AppConfig, Args};
pub use error::{LeaderboardError, LeaderboardResult};
pub use leaderboard::{BoardState, Leaderboard, LedgerExport, Record};
pub use traits::{ExportSink, MockExportSink, MockNotifier, Notifier};

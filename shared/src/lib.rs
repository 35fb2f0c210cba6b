//! Shared types for the optimization leaderboards
//!
//! Identifiers, call context, notification payloads and logging helpers
//! used by every leaderboard and by the replay binary.

pub mod errors;
pub mod logging;
pub mod messages;
pub mod types;

pub use errors::*;
pub use types::*;

pub use messages::{ImprovementNotice, ObjectiveMetrics, ReplayCall};

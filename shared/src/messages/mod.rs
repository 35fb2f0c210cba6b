//! Message types exchanged with the leaderboard core
//!
//! - `notification`: improvement events published on the side-channel
//! - `replay`: recorded calls fed to a leaderboard by the replay driver

pub mod notification;
pub mod replay;

pub use notification::{ImprovementNotice, ObjectiveMetrics};
pub use replay::ReplayCall;

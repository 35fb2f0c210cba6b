//! Command line and environment configuration
//!
//! Flags win over environment variables; environment variables may come from
//! a `.env` file in the current directory or its parents.
//!
//! | Flag | Environment fallback |
//! |---|---|
//! | `--instance` | `LEADERBOARD_INSTANCE` |
//! | `--controller` | `LEADERBOARD_CONTROLLER` |
//! | `--log-level` | `LEADERBOARD_LOG_LEVEL` |

use std::path::PathBuf;

use clap::Parser;
use shared::CallerId;

use crate::error::{LeaderboardError, LeaderboardResult};

pub const INSTANCE_ENV: &str = "LEADERBOARD_INSTANCE";
pub const CONTROLLER_ENV: &str = "LEADERBOARD_CONTROLLER";
pub const LOG_LEVEL_ENV: &str = "LEADERBOARD_LOG_LEVEL";

const DEFAULT_LOG_LEVEL: &str = "info";

/// Append-only optimization leaderboard
#[derive(Parser, Debug, Default)]
#[command(name = "leaderboard")]
#[command(about = "Replays submissions against a SAT or knapsack leaderboard")]
pub struct Args {
    /// Instance file (.json, or .cnf for DIMACS)
    #[arg(long)]
    pub instance: Option<PathBuf>,

    /// Identity allowed to close submissions
    #[arg(long)]
    pub controller: Option<String>,

    /// JSON-lines replay file (reads stdin when omitted)
    #[arg(long)]
    pub replay: Option<PathBuf>,

    /// Write a JSON export of the ledger here when done
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,
}

/// Fully resolved runtime configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub instance_path: PathBuf,
    pub controller: CallerId,
    pub replay_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub log_level: String,
}

impl AppConfig {
    /// Resolve against the process environment, loading `.env` first
    pub fn resolve(args: Args) -> LeaderboardResult<Self> {
        // Silently ignored when no .env file exists
        let _ = dotenv::dotenv();
        Self::resolve_with(args, |key| std::env::var(key).ok())
    }

    /// Resolve using `lookup` for environment fallbacks
    pub fn resolve_with<F>(args: Args, lookup: F) -> LeaderboardResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let instance_path = args
            .instance
            .or_else(|| lookup(INSTANCE_ENV).map(PathBuf::from))
            .ok_or_else(|| LeaderboardError::config(format!("--instance or {INSTANCE_ENV} is required")))?;

        let controller_raw = args
            .controller
            .or_else(|| lookup(CONTROLLER_ENV))
            .ok_or_else(|| LeaderboardError::config(format!("--controller or {CONTROLLER_ENV} is required")))?;
        let controller = CallerId::parse(&controller_raw)?;

        let log_level = args
            .log_level
            .or_else(|| lookup(LOG_LEVEL_ENV))
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Self {
            instance_path,
            controller,
            replay_path: args.replay,
            output_path: args.output,
            log_level,
        })
    }
}

//! Shared logging utilities for consistent tracing across leaderboards

use chrono::{DateTime, Utc};
use std::fmt::Display;
use tracing::{error, info, warn};

/// Build the filter directive for a base log level
pub fn filter_directive(log_level: Option<&str>) -> String {
    let base_level = log_level.unwrap_or("info");
    format!("leaderboard={base_level},shared={base_level}")
}

/// Initialize the stdout tracing subscriber with an optional log level
pub fn init_tracing_with_level(log_level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt};

    let directive = filter_directive(log_level);

    // try_init so repeated calls (tests, embedding) don't panic
    let _ = fmt()
        .with_env_filter(EnvFilter::new(&directive))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .try_init();
}

/// Initialize tracing at the default level
pub fn init_tracing() {
    init_tracing_with_level(None);
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for board-aware info logging
#[macro_export]
macro_rules! board_info {
    ($board_id:expr, $($arg:tt)*) => {
        tracing::info!(
            board = %$board_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for board-aware warning logging
#[macro_export]
macro_rules! board_warn {
    ($board_id:expr, $($arg:tt)*) => {
        tracing::warn!(
            board = %$board_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for board-aware error logging
#[macro_export]
macro_rules! board_error {
    ($board_id:expr, $($arg:tt)*) => {
        tracing::error!(
            board = %$board_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for board-aware debug logging
#[macro_export]
macro_rules! board_debug {
    ($board_id:expr, $($arg:tt)*) => {
        tracing::debug!(
            board = %$board_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for startup messages
pub fn log_startup(component: &dyn Display, details: &str) {
    info!(
        board = %component,
        timestamp = format_timestamp(),
        "🚀 Starting {}",
        details
    );
}

/// Contextual logging helper for shutdown messages
pub fn log_shutdown(component: &dyn Display, reason: &str) {
    info!(
        board = %component,
        timestamp = format_timestamp(),
        "🛑 Shutting down: {}",
        reason
    );
}

/// Contextual logging helper for error conditions
pub fn log_error(component: &dyn Display, context: &str, error: &dyn Display) {
    error!(
        board = %component,
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for rejected privileged calls
pub fn log_denied(component: &dyn Display, caller: &dyn Display, action: &str) {
    warn!(
        board = %component,
        timestamp = format_timestamp(),
        caller = %caller,
        "⛔ {} denied for {}",
        action,
        caller
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(component: &dyn Display, message: &str) {
    info!(
        board = %component,
        timestamp = format_timestamp(),
        "✅ {}",
        message
    );
}

/// Contextual logging helper for progress updates
pub fn log_progress(component: &dyn Display, action: &str, details: &str) {
    info!(
        board = %component,
        timestamp = format_timestamp(),
        "📋 {}: {}",
        action,
        details
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive_uses_level() {
        assert_eq!(filter_directive(None), "leaderboard=info,shared=info");
        assert_eq!(filter_directive(Some("debug")), "leaderboard=debug,shared=debug");
    }

    #[test]
    fn test_format_timestamp_shape() {
        let ts = format_timestamp();
        // HH:MM:SS.mmm
        assert_eq!(ts.len(), 12);
        assert_eq!(&ts[2..3], ":");
        assert_eq!(&ts[8..9], ".");
    }

    #[test]
    fn test_init_tracing_is_repeatable() {
        init_tracing_with_level(Some("debug"));
        init_tracing();
    }
}

//! Trait definitions with mockall annotations for testing
//!
//! These are the seams to the outside world: where improvement notices go and
//! where ledger exports are written. Both are injected so tests can assert on
//! them with the generated mocks.

use std::path::Path;

use shared::ImprovementNotice;

use crate::error::LeaderboardResult;
use crate::leaderboard::LedgerExport;

/// Notify side-channel for accepted submissions
///
/// Called exactly once per accepted submission, while the leaderboard still
/// holds its writer lock, so notices arrive in ledger order. Synchronous so
/// the hand-off cannot be cancelled halfway; implementations must queue the
/// notice rather than wait on an observer.
#[mockall::automock]
pub trait Notifier: Send + Sync {
    /// Publish a new best solution to whoever is observing
    fn notify(&self, notice: ImprovementNotice);
}

/// Destination for ledger exports
#[mockall::automock]
#[async_trait::async_trait]
pub trait ExportSink: Send + Sync {
    /// Persist an export at `path`
    ///
    /// # Parameters
    /// - `path`: Target file
    /// - `export`: Snapshot of the ledger to write
    async fn write_export(&self, path: &Path, export: &LedgerExport) -> LeaderboardResult<()>;
}

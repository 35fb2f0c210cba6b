//! Notifier implementations
//!
//! `BroadcastNotifier` fans notices out to any number of in-process observers
//! over a tokio broadcast channel. `LogNotifier` only records them in the log.

use shared::{board_debug, board_info, board_warn, BoardId, ImprovementNotice};
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinHandle;

use crate::traits::Notifier;

/// Broadcast-channel notifier
#[derive(Clone)]
pub struct BroadcastNotifier {
    sender: broadcast::Sender<ImprovementNotice>,
}

impl BroadcastNotifier {
    /// Create a notifier whose observers may lag up to `capacity` notices
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ImprovementNotice> {
        self.sender.subscribe()
    }

    pub fn observer_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for BroadcastNotifier {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl Notifier for BroadcastNotifier {
    fn notify(&self, notice: ImprovementNotice) {
        let board_id = notice.board_id;
        // No observers is fine, the notice is simply dropped
        if self.sender.send(notice).is_err() {
            board_debug!(board_id, "No observers for improvement notice");
        }
    }
}

/// Notifier that writes each notice to the log
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: ImprovementNotice) {
        board_info!(
            notice.board_id,
            "📣 Entry #{} by {}: {:?}",
            notice.index,
            notice.submitter,
            notice.metrics
        );
    }
}

/// Log every notice from `notices` until the sending side is dropped
pub fn spawn_notice_logger(board_id: BoardId, mut notices: broadcast::Receiver<ImprovementNotice>) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match notices.recv().await {
                Ok(notice) => board_info!(
                    notice.board_id,
                    "📣 New {} best #{} by {}: {:?}",
                    notice.metrics.problem_kind(),
                    notice.index,
                    notice.submitter,
                    notice.metrics
                ),
                Err(RecvError::Lagged(skipped)) => {
                    board_warn!(board_id, "Observer lagged, {} notices skipped", skipped)
                }
                Err(RecvError::Closed) => break,
            }
        }
    })
}

/// Wait for an observer task; returns false if it panicked or was cancelled
pub async fn join_observer(board_id: BoardId, observer: JoinHandle<()>) -> bool {
    match observer.await {
        Ok(()) => true,
        Err(e) => {
            board_warn!(board_id, "Notice observer ended abnormally: {}", e);
            false
        }
    }
}

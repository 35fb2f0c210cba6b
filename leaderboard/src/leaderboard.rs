//! Main leaderboard implementation
//!
//! Couples an immutable problem instance with the ledger and the submission
//! gate. Every mutation runs under a single async mutex, so submissions and
//! closes apply one at a time in one total order. After each mutation the new
//! state is published as an immutable snapshot; reads only ever look at the
//! latest snapshot and never touch the writer lock.

use std::sync::Arc;

use serde::Serialize;
use shared::{
    board_debug, board_error, board_info, logging, BoardId, CallContext, CallerId,
    ImprovementNotice, ObjectiveMetrics, ProblemKind, SubmissionState,
};
use tokio::sync::{watch, Mutex};

use crate::core::{Ledger, Problem, SolutionRecord, SubmissionGate};
use crate::error::LeaderboardResult;
use crate::traits::Notifier;

pub type Record<P> = SolutionRecord<<P as Problem>::Candidate>;

/// Gate and ledger, cloned into a fresh snapshot after every mutation
#[derive(Debug)]
pub struct BoardState<C> {
    gate: SubmissionGate,
    ledger: Ledger<SolutionRecord<C>>,
}

impl<C> Clone for BoardState<C> {
    fn clone(&self) -> Self {
        Self {
            gate: self.gate.clone(),
            ledger: self.ledger.clone(),
        }
    }
}

impl<C> BoardState<C> {
    fn new(controller: CallerId) -> Self {
        Self {
            gate: SubmissionGate::new(controller),
            ledger: Ledger::default(),
        }
    }

    pub fn submission_state(&self) -> SubmissionState {
        self.gate.state()
    }

    pub fn ledger(&self) -> &Ledger<SolutionRecord<C>> {
        &self.ledger
    }
}

/// Serializable view of a leaderboard, written by `--output`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerExport {
    pub board_id: BoardId,
    pub kind: ProblemKind,
    pub submission_state: SubmissionState,
    pub instance: serde_json::Value,
    pub entries: Vec<serde_json::Value>,
}

/// A single append-only leaderboard for one problem instance
pub struct Leaderboard<P, N>
where
    P: Problem,
    N: Notifier,
{
    id: BoardId,

    /// Immutable after construction
    instance: Arc<P>,

    /// Improvement side-channel
    notifier: N,

    /// Authoritative state; holding the lock is what serializes mutations
    writer: Mutex<BoardState<P::Candidate>>,

    /// Latest published snapshot for readers
    published: watch::Sender<Arc<BoardState<P::Candidate>>>,
}

impl<P, N> Leaderboard<P, N>
where
    P: Problem,
    N: Notifier,
{
    /// Create an open, empty leaderboard closable only by `controller`
    pub fn new(instance: P, controller: CallerId, notifier: N) -> Self {
        let state = BoardState::new(controller);
        let (published, _) = watch::channel(Arc::new(state.clone()));

        Self {
            id: BoardId::new(),
            instance: Arc::new(instance),
            notifier,
            writer: Mutex::new(state),
            published,
        }
    }

    pub fn id(&self) -> BoardId {
        self.id
    }

    pub fn kind(&self) -> ProblemKind {
        P::KIND
    }

    /// The full instance definition
    pub fn instance(&self) -> &P {
        &self.instance
    }

    pub fn controller(&self) -> CallerId {
        self.snapshot().gate.controller().clone()
    }

    /// Diagnostic validity check, independent of submission
    pub fn check_validity(&self, candidate: &P::Candidate) -> Option<ObjectiveMetrics> {
        self.instance.evaluate(candidate)
    }

    /// Submit a candidate; returns whether it became the new best.
    ///
    /// Closed gate, infeasible candidate and non-improving objective (ties
    /// included) all return `false` without side effects. The only await is
    /// the writer lock, so a caller dropped while waiting leaves no trace.
    pub async fn submit_solution(&self, ctx: &CallContext, candidate: P::Candidate) -> bool {
        let mut state = self.writer.lock().await;

        if !state.gate.is_open() {
            board_debug!(self.id, "Submission from {} ignored: submissions closed", ctx.caller);
            return false;
        }

        let Some(metrics) = self.instance.evaluate(&candidate) else {
            board_debug!(self.id, "Submission from {} rejected: invalid candidate", ctx.caller);
            return false;
        };

        let objective = metrics.objective();
        let best = state.ledger.best_objective();
        if objective <= best {
            board_debug!(
                self.id,
                "Submission from {} rejected: objective {} does not beat {}",
                ctx.caller,
                objective,
                best
            );
            return false;
        }

        let record = SolutionRecord {
            candidate,
            metrics,
            timestamp: ctx.timestamp,
            submitter: ctx.caller.clone(),
        };
        let index = match state.ledger.append(record) {
            Ok(index) => index,
            Err(e) => {
                // Unreachable while the objective check above holds
                board_error!(self.id, "Ledger refused improving entry: {}", e);
                return false;
            }
        };

        // No await from here on: entry, snapshot and notice land together
        self.published.send_replace(Arc::new(state.clone()));
        self.notifier.notify(ImprovementNotice {
            board_id: self.id,
            index,
            metrics,
            submitter: ctx.caller.clone(),
            timestamp: ctx.timestamp,
        });

        board_info!(
            self.id,
            "🏆 New best #{} from {}: objective {} (was {})",
            index,
            ctx.caller,
            objective,
            best
        );
        true
    }

    /// Close submissions for good. Controller only; idempotent.
    pub async fn close_submissions(&self, ctx: &CallContext) -> LeaderboardResult<()> {
        let mut state = self.writer.lock().await;

        match state.gate.close(&ctx.caller) {
            Ok(true) => {
                self.published.send_replace(Arc::new(state.clone()));
                logging::log_success(&self.id, "Submissions closed");
                Ok(())
            }
            Ok(false) => {
                board_debug!(self.id, "Submissions already closed");
                Ok(())
            }
            Err(e) => {
                logging::log_denied(&self.id, &ctx.caller, "close submissions");
                Err(e)
            }
        }
    }

    /// Latest published state; use it when several reads must agree
    pub fn snapshot(&self) -> Arc<BoardState<P::Candidate>> {
        self.published.borrow().clone()
    }

    /// Watch published snapshots as mutations land
    pub fn subscribe_snapshots(&self) -> watch::Receiver<Arc<BoardState<P::Candidate>>> {
        self.published.subscribe()
    }

    pub fn are_submissions_open(&self) -> bool {
        self.snapshot().gate.is_open()
    }

    pub fn number_of_solutions(&self) -> usize {
        self.snapshot().ledger.count()
    }

    pub fn stored_solution(&self, index: usize) -> Option<Arc<Record<P>>> {
        self.snapshot().ledger.at(index).cloned()
    }

    pub fn best_solution(&self) -> Option<Arc<Record<P>>> {
        self.snapshot().ledger.best().cloned()
    }

    /// Serialize the current snapshot
    pub fn export(&self) -> LeaderboardResult<LedgerExport> {
        let snapshot = self.snapshot();
        let entries = snapshot
            .ledger
            .iter()
            .map(|entry| serde_json::to_value(entry.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(LedgerExport {
            board_id: self.id,
            kind: P::KIND,
            submission_state: snapshot.gate.state(),
            instance: serde_json::to_value(self.instance.as_ref())?,
            entries,
        })
    }
}

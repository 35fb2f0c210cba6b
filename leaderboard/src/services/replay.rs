//! Replay driver
//!
//! Feeds a JSON-lines stream of recorded calls into a leaderboard, one call at
//! a time in file order. Each call is stamped with the wall clock when it is
//! applied. Solutions that cannot be decoded for the board's problem kind are
//! counted as rejected submissions; unauthorized closes are counted and
//! skipped. Malformed lines abort the replay.

use serde_json::Value;
use shared::{board_debug, board_warn, CallContext, ReplayCall};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::core::{assignment_from_bits, KnapsackInstance, Problem, SatInstance};
use crate::error::{LeaderboardError, LeaderboardResult};
use crate::leaderboard::Leaderboard;
use crate::traits::Notifier;

/// Decodes wire-format solutions into typed candidates
pub trait CandidateCodec: Problem {
    /// `None` when the value is not a well-formed candidate
    fn decode_candidate(value: &Value) -> Option<Self::Candidate>;
}

impl CandidateCodec for SatInstance {
    /// Accepts booleans or 0/1 integers, mixed freely
    fn decode_candidate(value: &Value) -> Option<Vec<bool>> {
        value
            .as_array()?
            .iter()
            .map(|element| match element {
                Value::Bool(bit) => Some(*bit),
                Value::Number(n) => assignment_from_bits(&[n.as_i64()?]).map(|bits| bits[0]),
                _ => None,
            })
            .collect()
    }
}

impl CandidateCodec for KnapsackInstance {
    fn decode_candidate(value: &Value) -> Option<Vec<u64>> {
        value.as_array()?.iter().map(Value::as_u64).collect()
    }
}

/// Outcome counts of a replay run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub submitted: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub closes: usize,
    pub denied: usize,
}

/// Apply every call in `reader` to `board`
pub async fn replay<P, N, R>(board: &Leaderboard<P, N>, reader: R) -> LeaderboardResult<ReplaySummary>
where
    P: CandidateCodec,
    N: Notifier,
    R: AsyncBufRead + Unpin,
{
    let mut summary = ReplaySummary::default();
    let mut lines = reader.lines();
    let mut line_no = 0usize;

    while let Some(line) = lines.next_line().await? {
        line_no += 1;
        if line.trim().is_empty() {
            continue;
        }

        let call: ReplayCall = serde_json::from_str(&line).map_err(|e| LeaderboardError::ReplayError {
            line: line_no,
            reason: e.to_string(),
        })?;

        let ctx = CallContext::now(call.caller().clone());
        match call {
            ReplayCall::Submit { solution, .. } => {
                summary.submitted += 1;
                let accepted = match P::decode_candidate(&solution) {
                    Some(candidate) => board.submit_solution(&ctx, candidate).await,
                    None => {
                        board_debug!(board.id(), "Line {}: undecodable solution from {}", line_no, ctx.caller);
                        false
                    }
                };
                if accepted {
                    summary.accepted += 1;
                } else {
                    summary.rejected += 1;
                }
            }
            ReplayCall::Close { .. } => match board.close_submissions(&ctx).await {
                Ok(()) => summary.closes += 1,
                Err(LeaderboardError::Unauthorized { .. }) => {
                    board_warn!(board.id(), "Line {}: close by {} refused", line_no, ctx.caller);
                    summary.denied += 1;
                }
                Err(e) => return Err(e),
            },
        }
    }

    Ok(summary)
}

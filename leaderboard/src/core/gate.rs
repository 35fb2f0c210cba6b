//! Submission gate: the open/closed flag and its single privileged transition

use shared::{CallerId, SubmissionState};

use crate::error::{LeaderboardError, LeaderboardResult};

#[derive(Debug, Clone)]
pub struct SubmissionGate {
    controller: CallerId,
    state: SubmissionState,
}

impl SubmissionGate {
    /// New gate, open, closable only by `controller`
    pub fn new(controller: CallerId) -> Self {
        Self {
            controller,
            state: SubmissionState::Open,
        }
    }

    pub fn controller(&self) -> &CallerId {
        &self.controller
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Close the gate on behalf of `caller`.
    ///
    /// Returns whether this call performed the transition; closing an already
    /// closed gate is a successful no-op. Non-controller callers get
    /// `Unauthorized` and the state is untouched.
    pub fn close(&mut self, caller: &CallerId) -> LeaderboardResult<bool> {
        if caller != &self.controller {
            return Err(LeaderboardError::Unauthorized {
                caller: caller.to_string(),
                action: "close submissions".to_string(),
            });
        }
        let was_open = self.is_open();
        self.state = SubmissionState::Closed;
        Ok(was_open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_starts_open() {
        let gate = SubmissionGate::new(CallerId::new("owner"));
        assert!(gate.is_open());
        assert_eq!(gate.controller().as_str(), "owner");
    }

    #[test]
    fn test_controller_closes_once() {
        let owner = CallerId::new("owner");
        let mut gate = SubmissionGate::new(owner.clone());
        assert!(gate.close(&owner).unwrap());
        assert_eq!(gate.state(), SubmissionState::Closed);
        // Idempotent second close
        assert!(!gate.close(&owner).unwrap());
        assert!(!gate.is_open());
    }

    #[test]
    fn test_non_controller_cannot_close() {
        let mut gate = SubmissionGate::new(CallerId::new("owner"));
        let result = gate.close(&CallerId::new("mallory"));
        assert!(matches!(result, Err(LeaderboardError::Unauthorized { .. })));
        assert!(gate.is_open());
    }
}

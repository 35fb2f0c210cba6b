//! Recorded calls for replaying against a leaderboard

use serde::{Deserialize, Serialize};

use crate::types::CallerId;

/// One line of a JSON-lines replay file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum ReplayCall {
    /// Submit a candidate; decoded per problem kind by the leaderboard side
    Submit {
        caller: CallerId,
        solution: serde_json::Value,
    },

    /// Close submissions (controller only)
    Close { caller: CallerId },
}

impl ReplayCall {
    pub fn caller(&self) -> &CallerId {
        match self {
            ReplayCall::Submit { caller, .. } | ReplayCall::Close { caller } => caller,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_submit_and_close_lines() {
        let submit: ReplayCall =
            serde_json::from_str(r#"{"op":"submit","caller":"bob","solution":[1,0]}"#).unwrap();
        assert_eq!(submit.caller().as_str(), "bob");
        assert!(matches!(submit, ReplayCall::Submit { ref solution, .. } if solution.is_array()));

        let close: ReplayCall = serde_json::from_str(r#"{"op":"close","caller":"alice"}"#).unwrap();
        assert_eq!(close, ReplayCall::Close { caller: CallerId::new("alice") });
    }

    #[test]
    fn test_unknown_op_is_rejected() {
        let result = serde_json::from_str::<ReplayCall>(r#"{"op":"retract","caller":"bob"}"#);
        assert!(result.is_err());
    }
}

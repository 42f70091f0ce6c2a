//! Approval state machine
//!
//! Folds one incoming review into an existing [`ApprovalState`]. The gate
//! has two logical phases, [`ReviewPhase::Pending`] and
//! [`ReviewPhase::Satisfied`]; the transition fires when the approver count
//! crosses the quorum threshold. The phase is recomputed on every
//! application rather than stored, and there is no transition that removes
//! an approver — the engine only accretes.

use serde::{Deserialize, Serialize};

use super::state::ApprovalState;

/// The two logical phases of the review gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewPhase {
    /// More approvals are needed.
    Pending,
    /// The quorum is satisfied.
    Satisfied,
}

impl ReviewPhase {
    /// Check if the phase is satisfied
    pub fn is_satisfied(&self) -> bool {
        matches!(self, ReviewPhase::Satisfied)
    }
}

impl From<&ApprovalState> for ReviewPhase {
    fn from(state: &ApprovalState) -> Self {
        if state.is_approved() {
            ReviewPhase::Satisfied
        } else {
            ReviewPhase::Pending
        }
    }
}

impl std::fmt::Display for ReviewPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReviewPhase::Pending => write!(f, "pending"),
            ReviewPhase::Satisfied => write!(f, "satisfied"),
        }
    }
}

impl ApprovalState {
    /// Apply one reviewer approval, producing the successor state.
    ///
    /// - Adds `reviewer_login` unless an entry equal under case-insensitive
    ///   comparison already exists, so duplicate event deliveries are
    ///   no-ops.
    /// - Always overwrites the stored quorum with `quorum`, which the caller
    ///   obtains fresh from [`QuorumPolicy`](crate::QuorumPolicy). A quorum
    ///   decoded from previously published text is never trusted; manual
    ///   edits or partial corruption of the description must not cause
    ///   drift.
    pub fn apply(&self, reviewer_login: &str, quorum: usize) -> ApprovalState {
        let mut next = self.clone();
        next.set_quorum(quorum);
        next.push_approver(reviewer_login);
        next
    }

    /// The logical phase of the gate for this state.
    pub fn phase(&self) -> ReviewPhase {
        ReviewPhase::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_adds_reviewer() {
        let state = ApprovalState::new("deadbeef");
        let next = state.apply("octocat", 2);

        assert_eq!(next.approvers(), ["@octocat"]);
        assert_eq!(next.quorum(), 2);
        assert_eq!(next.phase(), ReviewPhase::Pending);
    }

    #[test]
    fn test_apply_is_idempotent() {
        let state = ApprovalState::new("deadbeef");
        let once = state.apply("@octocat", 2);
        let twice = once.apply("@octocat", 2);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_duplicate_delivery_with_different_casing() {
        let state = ApprovalState::new("deadbeef").apply("@OctoCat", 2);
        let next = state.apply("octocat", 2);

        assert_eq!(next.approvers(), ["@OctoCat"]);
    }

    #[test]
    fn test_transition_pending_to_satisfied() {
        let state = ApprovalState::new("deadbeef").apply("@a", 2);
        assert_eq!(state.phase(), ReviewPhase::Pending);

        let state = state.apply("@b", 2);
        assert_eq!(state.phase(), ReviewPhase::Satisfied);
        assert!(state.phase().is_satisfied());

        // Satisfied is sticky as long as approvers only accrete and the
        // quorum does not increase.
        let state = state.apply("@c", 2);
        assert_eq!(state.phase(), ReviewPhase::Satisfied);
    }

    #[test]
    fn test_quorum_always_overwritten() {
        let state = ApprovalState::new("deadbeef").with_quorum(5);
        let next = state.apply("@a", 1);

        assert_eq!(next.quorum(), 1);
        assert!(next.is_approved());
    }

    #[test]
    fn test_satisfied_can_revert_on_policy_change() {
        let state = ApprovalState::new("deadbeef").apply("@a", 1);
        assert!(state.is_approved());

        // An external quorum increase is the only way back to pending.
        let next = state.apply("@a", 3);
        assert_eq!(next.phase(), ReviewPhase::Pending);
    }

    #[test]
    fn test_order_independence() {
        let quorum = 3;
        let forward = ApprovalState::new("deadbeef")
            .apply("@a", quorum)
            .apply("@b", quorum)
            .apply("@c", quorum);
        let backward = ApprovalState::new("deadbeef")
            .apply("@c", quorum)
            .apply("@b", quorum)
            .apply("@a", quorum);

        // Same approver set and same verdict; rendering order differs only
        // by first-seen order.
        assert_eq!(forward.is_approved(), backward.is_approved());
        let mut f: Vec<_> = forward.approvers().to_vec();
        let mut b: Vec<_> = backward.approvers().to_vec();
        f.sort();
        b.sort();
        assert_eq!(f, b);
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(ReviewPhase::Pending.to_string(), "pending");
        assert_eq!(ReviewPhase::Satisfied.to_string(), "satisfied");
    }
}

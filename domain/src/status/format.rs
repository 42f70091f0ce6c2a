//! Description formatter
//!
//! Renders an [`ApprovalState`] into the human-readable status description.
//! Three clauses compose the text:
//!
//! 1. the approval clause (`Approved by @a, @b, and @c.`), absent with zero
//!    approvers;
//! 2. the remaining-approvals clause (`Requires 2 more LGTM's.` or
//!    `Awaiting approval from at least 2 maintainers.`), absent once the
//!    quorum is satisfied;
//! 3. the no-requirement clause (`No approval is required.`), exclusive —
//!    it stands alone when the quorum is zero and no approver is on record.
//!
//! The rendered text is the persistent encoding of the state, so the
//! wording here is load-bearing: [`codec::decode`](super::codec::decode)
//! must recognize every phrase this module emits.

use super::state::ApprovalState;

/// Hard ceiling on a commit-status description, imposed by the status API.
pub const MAX_DESCRIPTION_LEN: usize = 140;

/// Render the full description for a state.
///
/// Length is not checked here; [`codec::encode`](super::codec::encode)
/// enforces [`MAX_DESCRIPTION_LEN`] and is the entry point callers should
/// use.
pub fn render(state: &ApprovalState) -> String {
    if state.quorum() == 0 && state.approvers().is_empty() {
        return no_requirement_clause().to_string();
    }

    let mut clauses = Vec::with_capacity(2);
    if let Some(approval) = approval_clause(state.approvers()) {
        clauses.push(approval);
    }
    if let Some(remaining) = remaining_clause(state) {
        clauses.push(remaining);
    }
    clauses.join(" ")
}

/// The approver list clause: Oxford comma, final "and". `None` with zero
/// approvers.
fn approval_clause(approvers: &[String]) -> Option<String> {
    let listed = match approvers {
        [] => return None,
        [only] => only.clone(),
        [first, second] => format!("{first} and {second}"),
        [init @ .., last] => format!("{}, and {last}", init.join(", ")),
    };
    Some(format!("Approved by {listed}."))
}

/// The remaining-approvals clause. `None` once the quorum is satisfied.
fn remaining_clause(state: &ApprovalState) -> Option<String> {
    if state.is_approved() {
        return None;
    }

    if state.approvers().is_empty() {
        let quorum = state.quorum();
        let noun = if quorum == 1 { "maintainer" } else { "maintainers" };
        return Some(format!(
            "Awaiting approval from at least {quorum} {noun}."
        ));
    }

    let remaining = state.remaining();
    let noun = if remaining == 1 { "LGTM" } else { "LGTM's" };
    Some(format!("Requires {remaining} more {noun}."))
}

fn no_requirement_clause() -> &'static str {
    "No approval is required."
}

//! Status description codec
//!
//! The published commit-status description is the sole persistent record of
//! who has approved a commit. [`decode`] recovers structured state from that
//! free text and [`encode`] renders it back canonically.
//!
//! Decoding recognizes two independent signals:
//!
//! - a quorum signal: `at least N` states the total directly, while
//!   `Requires N more` is combined with the listed approver count to back
//!   out the total (`N + approvers`). When both appear, the explicit
//!   `at least N` wins.
//! - an approver-list signal: `@login` mentions, counted only when approval
//!   language (`Approved by` / `have approved`) is present so that
//!   unrelated mentions in hand-written text are not mistaken for
//!   approvals.
//!
//! Decoding never fails. Text this module cannot make sense of degrades to
//! the empty state; a malformed status must never block future evaluations.

use std::sync::LazyLock;

use regex::Regex;

use super::format::{self, MAX_DESCRIPTION_LEN};
use super::state::ApprovalState;
use crate::core::error::DomainError;

static MENTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@[A-Za-z0-9][A-Za-z0-9-]*").expect("mention regex"));

static AT_LEAST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"at least (\d+)").expect("at-least regex"));

static REQUIRES_MORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Requires (\d+) more").expect("requires-more regex"));

/// Decode a status description into approval state. Never fails; empty or
/// unparseable input yields the empty state.
pub fn decode(commit_id: &str, raw: &str) -> ApprovalState {
    let mut state = ApprovalState::new(commit_id);

    if has_approval_language(raw) {
        for mention in MENTION_RE.find_iter(raw) {
            state = state.with_approver(mention.as_str());
        }
    }

    let derived = capture_count(&REQUIRES_MORE_RE, raw)
        .and_then(|n| n.checked_add(state.approvers().len()));
    let explicit = capture_count(&AT_LEAST_RE, raw);

    state.with_quorum(explicit.or(derived).unwrap_or(0))
}

/// Encode approval state as the canonical status description.
///
/// Deterministic: encoding the result of decoding canonical text reproduces
/// that text exactly. Fails only if the composed text cannot satisfy the
/// length ceiling, which is surfaced rather than silently truncated.
pub fn encode(state: &ApprovalState) -> Result<String, DomainError> {
    let text = format::render(state);
    if text.len() > MAX_DESCRIPTION_LEN {
        return Err(DomainError::DescriptionTooLong { len: text.len() });
    }
    Ok(text)
}

fn has_approval_language(raw: &str) -> bool {
    raw.contains("Approved by") || raw.contains("have approved")
}

fn capture_count(re: &Regex, raw: &str) -> Option<usize> {
    re.captures(raw).and_then(|c| c[1].parse().ok())
}

//! Approval state for a single commit under review.

use serde::{Deserialize, Serialize};

/// State of a published commit status check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitState {
    /// The quorum is satisfied (or no approval is required).
    Success,
    /// More approvals are needed.
    Pending,
}

impl CommitState {
    /// The wire form used by the commit-status API.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitState::Success => "success",
            CommitState::Pending => "pending",
        }
    }

    /// Check if this state is success
    pub fn is_success(&self) -> bool {
        matches!(self, CommitState::Success)
    }
}

impl std::fmt::Display for CommitState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Approval record for one commit, materialized transiently per evaluation.
///
/// The approver list preserves first-approved-first order for deterministic
/// rendering; membership is case-insensitive, so the same reviewer can never
/// appear twice under different casing. Approvers are always stored in their
/// `@login` display form.
///
/// # Example
///
/// ```
/// use lgtm_domain::ApprovalState;
///
/// let state = ApprovalState::new("deadbeef")
///     .with_quorum(2)
///     .with_approver("octocat");
///
/// assert!(state.is_approver("@OctoCat"));
/// assert!(!state.is_approved());
/// assert_eq!(state.remaining(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalState {
    commit_id: String,
    approvers: Vec<String>,
    quorum: usize,
}

impl ApprovalState {
    /// Create an empty state for a commit: no approvers, no quorum.
    ///
    /// This is also the decode result for empty or unparseable text.
    pub fn new(commit_id: impl Into<String>) -> Self {
        Self {
            commit_id: commit_id.into(),
            approvers: Vec::new(),
            quorum: 0,
        }
    }

    /// Set the required number of distinct approvers.
    pub fn with_quorum(mut self, quorum: usize) -> Self {
        self.quorum = quorum;
        self
    }

    /// Add an approver, preserving insertion order. No-op if an entry equal
    /// under case-insensitive comparison already exists.
    pub fn with_approver(mut self, login: &str) -> Self {
        self.push_approver(login);
        self
    }

    // ==================== Accessors ====================

    /// The revision this state belongs to.
    pub fn commit_id(&self) -> &str {
        &self.commit_id
    }

    /// Approvers in first-approved-first order, in `@login` display form.
    pub fn approvers(&self) -> &[String] {
        &self.approvers
    }

    /// The number of distinct approvers required. Zero means no approval is
    /// required.
    pub fn quorum(&self) -> usize {
        self.quorum
    }

    // ==================== Queries ====================

    /// Whether `login` has already approved. Case-insensitive; a leading `@`
    /// on either side is ignored.
    pub fn is_approver(&self, login: &str) -> bool {
        let key = normalize(login);
        self.approvers.iter().any(|a| normalize(a) == key)
    }

    /// Whether the quorum is satisfied.
    pub fn is_approved(&self) -> bool {
        self.quorum == 0 || self.approvers.len() >= self.quorum
    }

    /// How many more approvals are needed before the quorum is satisfied.
    pub fn remaining(&self) -> usize {
        self.quorum.saturating_sub(self.approvers.len())
    }

    /// The commit status this state maps to.
    pub fn state(&self) -> CommitState {
        if self.is_approved() {
            CommitState::Success
        } else {
            CommitState::Pending
        }
    }

    // ==================== Mutation (crate-internal) ====================

    pub(crate) fn push_approver(&mut self, login: &str) {
        if !self.is_approver(login) {
            self.approvers.push(display_form(login));
        }
    }

    pub(crate) fn set_quorum(&mut self, quorum: usize) {
        self.quorum = quorum;
    }
}

/// Membership key: lower-cased login without the leading `@`.
fn normalize(login: &str) -> String {
    login.trim_start_matches('@').to_ascii_lowercase()
}

/// Display form: the login as given, prefixed with `@` if it was missing.
fn display_form(login: &str) -> String {
    if login.starts_with('@') {
        login.to_string()
    } else {
        format!("@{login}")
    }
}

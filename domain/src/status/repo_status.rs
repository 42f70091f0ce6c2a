//! The publishable commit status.

use serde::{Deserialize, Serialize};

use super::codec;
use super::state::{ApprovalState, CommitState};
use crate::core::error::DomainError;

/// A commit status ready to be published, the output contract of one
/// evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoStatus {
    /// Status context, `<repoOwner>/lgtm`.
    pub context: String,
    /// `success` once the quorum is satisfied, `pending` otherwise.
    pub state: CommitState,
    /// Canonical description text, at most 140 bytes.
    pub description: String,
}

impl ApprovalState {
    /// Build the status to publish for this state.
    ///
    /// Fails only if the rendered description cannot satisfy the length
    /// ceiling; see [`codec::encode`].
    pub fn new_repo_status(&self, repo_owner: &str) -> Result<RepoStatus, DomainError> {
        Ok(RepoStatus {
            context: format!("{repo_owner}/lgtm"),
            state: self.state(),
            description: codec::encode(self)?,
        })
    }
}

//! Incoming review event.

use serde::{Deserialize, Serialize};

/// A "review submitted" event, as handed in by the upstream webhook
/// dispatcher. Whether an event should trigger a re-evaluation at all is
/// decided upstream; by the time one reaches the engine it is authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewEvent {
    /// The revision under review, stable across re-evaluations.
    pub commit_id: String,
    pub repo_owner: String,
    pub repo_name: String,
    /// The reviewer who approved, with or without a leading `@`.
    pub reviewer_login: String,
}

impl ReviewEvent {
    pub fn new(
        commit_id: impl Into<String>,
        repo_owner: impl Into<String>,
        repo_name: impl Into<String>,
        reviewer_login: impl Into<String>,
    ) -> Self {
        Self {
            commit_id: commit_id.into(),
            repo_owner: repo_owner.into(),
            repo_name: repo_name.into(),
            reviewer_login: reviewer_login.into(),
        }
    }

    /// `owner/name` slug, for logging and policy lookup.
    pub fn repo_slug(&self) -> String {
        format!("{}/{}", self.repo_owner, self.repo_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_slug() {
        let event = ReviewEvent::new("deadbeef", "bunto", "bunto", "octocat");
        assert_eq!(event.repo_slug(), "bunto/bunto");
    }
}

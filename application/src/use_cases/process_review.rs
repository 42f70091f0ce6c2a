//! Process one submitted review.
//!
//! The full read-decode-mutate-encode-write cycle from the spec of the
//! gate: fetch the current status description, decode it, resolve the
//! authoritative quorum, fold in the reviewer, and publish the re-encoded
//! result. The cycle is stateless between invocations; the published
//! description is the sole source of truth.

use std::sync::Arc;

use lgtm_domain::{DomainError, QuorumPolicy, RepoStatus, ReviewEvent, decode};
use thiserror::Error;
use tracing::{debug, info};

use crate::ports::status_store::{StatusStore, StoreError};

/// Errors from processing a review event
#[derive(Error, Debug)]
pub enum ProcessReviewError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Folds submitted reviews into the published approval gate.
pub struct ProcessReviewUseCase {
    store: Arc<dyn StatusStore>,
    policy: QuorumPolicy,
}

impl ProcessReviewUseCase {
    pub fn new(store: Arc<dyn StatusStore>, policy: QuorumPolicy) -> Self {
        Self { store, policy }
    }

    /// Evaluate one review event and publish the resulting status.
    ///
    /// Safe under duplicate and out-of-order delivery: re-applying a
    /// reviewer who is already recorded publishes an identical status.
    pub async fn execute(&self, event: &ReviewEvent) -> Result<RepoStatus, ProcessReviewError> {
        let raw = self
            .store
            .fetch_description(&event.repo_owner, &event.repo_name, &event.commit_id)
            .await?
            .unwrap_or_default();

        let current = decode(&event.commit_id, &raw);
        let quorum = self
            .policy
            .required_approvals(&event.repo_owner, &event.repo_name);
        debug!(
            repo = %event.repo_slug(),
            commit = %event.commit_id,
            quorum,
            approvers = current.approvers().len(),
            "decoded current approval state"
        );

        let next = current.apply(&event.reviewer_login, quorum);
        let status = next.new_repo_status(&event.repo_owner)?;

        self.store
            .publish(&event.repo_owner, &event.repo_name, &event.commit_id, &status)
            .await?;

        info!(
            repo = %event.repo_slug(),
            commit = %event.commit_id,
            reviewer = %event.reviewer_login,
            state = %status.state,
            "published approval status"
        );
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use lgtm_domain::CommitState;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Status store backed by a map, keyed per commit like the real one.
    #[derive(Default)]
    struct FakeStore {
        descriptions: Mutex<HashMap<String, String>>,
    }

    impl FakeStore {
        fn key(owner: &str, repo: &str, commit_id: &str) -> String {
            format!("{owner}/{repo}@{commit_id}")
        }

        fn seed(self, owner: &str, repo: &str, commit_id: &str, text: &str) -> Self {
            self.descriptions
                .lock()
                .unwrap()
                .insert(Self::key(owner, repo, commit_id), text.to_string());
            self
        }
    }

    #[async_trait]
    impl StatusStore for FakeStore {
        async fn fetch_description(
            &self,
            owner: &str,
            repo: &str,
            commit_id: &str,
        ) -> Result<Option<String>, StoreError> {
            Ok(self
                .descriptions
                .lock()
                .unwrap()
                .get(&Self::key(owner, repo, commit_id))
                .cloned())
        }

        async fn publish(
            &self,
            owner: &str,
            repo: &str,
            commit_id: &str,
            status: &RepoStatus,
        ) -> Result<(), StoreError> {
            self.descriptions
                .lock()
                .unwrap()
                .insert(Self::key(owner, repo, commit_id), status.description.clone());
            Ok(())
        }
    }

    fn event(reviewer: &str) -> ReviewEvent {
        ReviewEvent::new("deadbeef", "bunto", "bunto", reviewer)
    }

    fn use_case(store: Arc<FakeStore>, fallback: usize) -> ProcessReviewUseCase {
        ProcessReviewUseCase::new(store, QuorumPolicy::new(fallback))
    }

    #[tokio::test]
    async fn test_first_review_publishes_pending() {
        let store = Arc::new(FakeStore::default());
        let uc = use_case(store.clone(), 2);

        let status = uc.execute(&event("octocat")).await.unwrap();

        assert_eq!(status.context, "bunto/lgtm");
        assert_eq!(status.state, CommitState::Pending);
        assert_eq!(
            status.description,
            "Approved by @octocat. Requires 1 more LGTM."
        );
    }

    #[tokio::test]
    async fn test_quorum_reached_publishes_success() {
        let store = Arc::new(FakeStore::default());
        let uc = use_case(store.clone(), 2);

        uc.execute(&event("alice")).await.unwrap();
        let status = uc.execute(&event("bob")).await.unwrap();

        assert_eq!(status.state, CommitState::Success);
        assert_eq!(status.description, "Approved by @alice and @bob.");
    }

    #[tokio::test]
    async fn test_duplicate_delivery_is_idempotent() {
        let store = Arc::new(FakeStore::default());
        let uc = use_case(store.clone(), 2);

        let first = uc.execute(&event("octocat")).await.unwrap();
        let second = uc.execute(&event("octocat")).await.unwrap();
        let third = uc.execute(&event("@OCTOCAT")).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first, third);
    }

    #[tokio::test]
    async fn test_lost_write_converges_on_redelivery() {
        // Two concurrent evaluations each read the empty state; the second
        // write overwrites the first, dropping @alice. Her retried webhook
        // delivery re-applies on top of the surviving state.
        let store = Arc::new(FakeStore::default());
        let uc = use_case(store.clone(), 2);

        uc.execute(&event("alice")).await.unwrap();
        // Simulate @bob's racing evaluation having read the empty state.
        let stale = FakeStore::default();
        let racing = use_case(Arc::new(stale), 2);
        let bob_only = racing.execute(&event("bob")).await.unwrap();
        store
            .publish("bunto", "bunto", "deadbeef", &bob_only)
            .await
            .unwrap();

        // Redelivery converges to both approvers.
        let status = uc.execute(&event("alice")).await.unwrap();
        assert_eq!(status.description, "Approved by @bob and @alice.");
        assert_eq!(status.state, CommitState::Success);
    }

    #[tokio::test]
    async fn test_malformed_stored_text_degrades_to_empty_state() {
        let store =
            Arc::new(FakeStore::default().seed("bunto", "bunto", "deadbeef", "ci exploded ~~~"));
        let uc = use_case(store, 2);

        let status = uc.execute(&event("octocat")).await.unwrap();
        assert_eq!(
            status.description,
            "Approved by @octocat. Requires 1 more LGTM."
        );
    }

    #[tokio::test]
    async fn test_policy_quorum_overrides_stored_quorum() {
        // The stored text claims 32 more approvals are needed; the policy
        // says 1 in total. The policy wins.
        let store = Arc::new(FakeStore::default().seed(
            "bunto",
            "bunto",
            "deadbeef",
            "@SuriyaaKudoIsc have approved this PR. Requires 32 more LGTM's.",
        ));
        let uc = use_case(store, 1);

        let status = uc.execute(&event("SuriyaaKudoIsc")).await.unwrap();
        assert_eq!(status.state, CommitState::Success);
        assert_eq!(status.description, "Approved by @SuriyaaKudoIsc.");
    }

    #[tokio::test]
    async fn test_zero_quorum_repo() {
        let store = Arc::new(FakeStore::default());
        let policy = QuorumPolicy::new(2).with_repo("bunto", "bunto", 0);
        let uc = ProcessReviewUseCase::new(store, policy);

        let status = uc.execute(&event("octocat")).await.unwrap();
        assert_eq!(status.state, CommitState::Success);
        assert_eq!(status.description, "Approved by @octocat.");
    }
}

//! In-memory status store.
//!
//! Port-conformant store backed by a mutexed map. Used by tests and by the
//! CLI's dry-run mode, where nothing may touch the network.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use lgtm_application::{StatusStore, StoreError};
use lgtm_domain::RepoStatus;

#[derive(Default)]
pub struct InMemoryStatusStore {
    statuses: Mutex<HashMap<String, RepoStatus>>,
}

impl InMemoryStatusStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last status published for a commit, if any.
    pub fn published(&self, owner: &str, repo: &str, commit_id: &str) -> Option<RepoStatus> {
        self.statuses
            .lock()
            .expect("store lock poisoned")
            .get(&key(owner, repo, commit_id))
            .cloned()
    }
}

fn key(owner: &str, repo: &str, commit_id: &str) -> String {
    format!("{owner}/{repo}@{commit_id}")
}

#[async_trait]
impl StatusStore for InMemoryStatusStore {
    async fn fetch_description(
        &self,
        owner: &str,
        repo: &str,
        commit_id: &str,
    ) -> Result<Option<String>, StoreError> {
        Ok(self
            .published(owner, repo, commit_id)
            .map(|status| status.description))
    }

    async fn publish(
        &self,
        owner: &str,
        repo: &str,
        commit_id: &str,
        status: &RepoStatus,
    ) -> Result<(), StoreError> {
        self.statuses
            .lock()
            .expect("store lock poisoned")
            .insert(key(owner, repo, commit_id), status.clone());
        Ok(())
    }
}

//! Status store port
//!
//! Defines how the application layer reads and writes the externally stored
//! commit status. The store is eventually consistent, not transactional:
//! there is no compare-and-swap, and concurrent writers race last-write-wins
//! at this boundary. The engine tolerates that because applying a reviewer
//! is idempotent — a dropped write is repaired by the next duplicate
//! delivery of the same event.

use async_trait::async_trait;
use lgtm_domain::RepoStatus;
use thiserror::Error;

/// Errors that can occur against the external status record
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("request failed: {0}")]
    RequestFailed(String),

    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("authentication failed")]
    Unauthorized,

    #[error("not found: {0}")]
    NotFound(String),
}

/// Read and write access to the published commit status.
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait StatusStore: Send + Sync {
    /// Fetch the last published gate description for a commit, or `None` if
    /// the gate has never published one.
    async fn fetch_description(
        &self,
        owner: &str,
        repo: &str,
        commit_id: &str,
    ) -> Result<Option<String>, StoreError>;

    /// Publish a status for a commit, replacing whatever was there.
    async fn publish(
        &self,
        owner: &str,
        repo: &str,
        commit_id: &str,
        status: &RepoStatus,
    ) -> Result<(), StoreError>;
}

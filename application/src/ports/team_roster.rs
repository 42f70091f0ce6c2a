//! Team roster port
//!
//! Resolves the review captains of a team. Adapters are expected to cache
//! behind this port; the use case treats every call as cheap.

use async_trait::async_trait;
use lgtm_domain::Team;
use thiserror::Error;

/// Errors that can occur while resolving a team
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("request failed: {0}")]
    RequestFailed(String),

    #[error("unknown team: {0}")]
    UnknownTeam(String),
}

/// Access to team membership.
#[async_trait]
pub trait TeamRoster: Send + Sync {
    /// Resolve a team and its captains by org and slug.
    async fn team(&self, org: &str, slug: &str) -> Result<Team, RosterError>;
}

//! GitHub REST adapters
//!
//! Thin clients for the two corners of the GitHub API this system touches:
//! commit statuses (the persistent record of the gate) and team membership
//! (review captains). Both authenticate with a personal access token.

pub mod roster;
pub mod status_store;

pub use roster::GithubTeamRoster;
pub use status_store::GithubStatusStore;

/// Default REST API root; overridable for GitHub Enterprise.
pub const DEFAULT_API_ROOT: &str = "https://api.github.com";

pub(crate) const USER_AGENT: &str = concat!("lgtm-bot/", env!("CARGO_PKG_VERSION"));

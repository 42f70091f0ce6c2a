//! Infrastructure layer for lgtm-quorum
//!
//! Adapters for the application-layer ports: the GitHub commit-status and
//! team roster REST clients, an in-memory status store for tests and dry
//! runs, configuration loading, and the TTL cache the roster adapter hides
//! behind.

pub mod cache;
pub mod config;
pub mod github;
pub mod memory;

// Re-export commonly used types
pub use cache::TtlCache;
pub use config::{ConfigLoader, FileConfig};
pub use github::{GithubStatusStore, GithubTeamRoster};
pub use memory::InMemoryStatusStore;

//! Domain layer for lgtm-quorum
//!
//! This crate contains the approval quorum engine: the pure business logic
//! that turns incoming review events into commit statuses. It has no
//! dependencies on infrastructure or presentation concerns and performs no
//! I/O.
//!
//! # Core Concepts
//!
//! ## Approval state
//!
//! All persistent state lives in the free-form description of a commit
//! status published on GitHub. [`status::codec`] decodes that text into an
//! [`ApprovalState`], [`ApprovalState::apply`] folds in a new reviewer, and
//! [`status::format`] renders the canonical description back out.
//!
//! ## Quorum
//!
//! The number of distinct approvers a repository requires before the gate
//! turns green. [`QuorumPolicy`] resolves it per repository with a global
//! fallback; the decoded value in the description is never trusted over the
//! policy.

pub mod affinity;
pub mod core;
pub mod event;
pub mod policy;
pub mod status;

// Re-export commonly used types
pub use affinity::Team;
pub use core::error::DomainError;
pub use event::ReviewEvent;
pub use policy::{DEFAULT_QUORUM, QuorumPolicy};
pub use status::{
    codec::{decode, encode},
    format::MAX_DESCRIPTION_LEN,
    machine::ReviewPhase,
    repo_status::RepoStatus,
    state::{ApprovalState, CommitState},
};

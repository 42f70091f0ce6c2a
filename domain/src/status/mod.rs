//! Approval status domain
//!
//! This module contains the core of the quorum engine. The persistent record
//! is a single free-form commit-status description; everything here works on
//! the transient in-memory form of that record.
//!
//! # Pipeline
//!
//! ```text
//! published description ──codec::decode──▶ ApprovalState
//!                                              │ apply(reviewer, quorum)
//!                                              ▼
//! published description ◀──codec::encode── ApprovalState
//! ```
//!
//! Decoding never fails: unrecognized text degrades to the empty state so a
//! malformed status can never block future evaluations. Encoding is
//! canonical — encoding the result of decoding canonical text reproduces
//! that text byte for byte.

pub mod codec;
pub mod format;
pub mod machine;
pub mod repo_status;
pub mod state;

// Re-export main types
pub use machine::ReviewPhase;
pub use repo_status::RepoStatus;
pub use state::{ApprovalState, CommitState};

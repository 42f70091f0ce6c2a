//! Application layer for lgtm-quorum
//!
//! Use cases and ports. A use case orchestrates one incoming event end to
//! end against the ports; adapters implementing the ports live in the
//! infrastructure layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::status_store::{StatusStore, StoreError};
pub use ports::team_roster::{RosterError, TeamRoster};
pub use use_cases::assign_reviewers::AssignReviewersUseCase;
pub use use_cases::process_review::{ProcessReviewError, ProcessReviewUseCase};

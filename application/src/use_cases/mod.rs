//! Use cases — one per externally triggered operation.

pub mod assign_reviewers;
pub mod process_review;

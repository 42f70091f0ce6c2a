//! Domain error types

use thiserror::Error;

use crate::status::format::MAX_DESCRIPTION_LEN;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    /// The rendered status description exceeds the GitHub commit-status
    /// description limit. Raised instead of truncating; under documented
    /// approver-set sizes this indicates a configuration or programming
    /// error rather than a runtime condition.
    #[error("status description is {len} bytes, exceeding the {MAX_DESCRIPTION_LEN}-byte limit")]
    DescriptionTooLong { len: usize },
}

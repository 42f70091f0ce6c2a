//! Core domain primitives shared across modules.

pub mod error;

pub use error::DomainError;

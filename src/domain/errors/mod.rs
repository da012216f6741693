//! # Domain Errors
//!
//! Error types for domain operations.
//!
//! All business-rule violations raised by the aggregates and value objects
//! are instances of [`DomainError`]. They are synchronous, non-retryable,
//! and caller-correctable: the caller must change its input or the
//! aggregate state before retrying the same operation.

pub mod domain_error;

pub use domain_error::{DomainError, DomainResult};

//! # Domain Errors
//!
//! Typed business-rule violations.
//!
//! This module provides the [`DomainError`] enum for representing
//! domain-level errors with numeric error codes. Every error names the
//! unmet precondition in a human-readable reason.
//!
//! # Error Code Ranges
//!
//! - **1000-1999**: Validation errors
//! - **2000-2999**: State errors
//! - **3000-3999**: Compliance errors
//! - **4000-4999**: Monetary errors
//!
//! # Examples
//!
//! ```
//! use amlaki_domain::domain::errors::DomainError;
//!
//! let error = DomainError::InvalidAmount("payment amount cannot be negative".to_string());
//! assert_eq!(error.code(), 1002);
//! ```

use crate::domain::value_objects::deal_status::DealStatus;
use crate::domain::value_objects::money::Money;
use thiserror::Error;

/// Domain-level error with numeric error codes.
///
/// Provides typed errors for domain operations with consistent
/// error codes for logging and API responses. All variants are
/// synchronous, non-retryable business-rule violations: the caller must
/// change its input or the aggregate state before retrying.
///
/// The only operation that mutates state while reporting an error is
/// `Deal::mark_completed`, which records partial payment progress and
/// raises [`OutstandingBalance`](DomainError::OutstandingBalance).
///
/// # Error Code Ranges
///
/// | Range | Category |
/// |-------|----------|
/// | 1000-1999 | Validation errors |
/// | 2000-2999 | State errors |
/// | 3000-3999 | Compliance errors |
/// | 4000-4999 | Monetary errors |
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (1000-1999)
    // ========================================================================
    /// An identity reference is missing or nil.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A monetary or numeric value is out of range.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// A commission split violates the percentage rules.
    #[error("invalid commission split: {0}")]
    InvalidCommissionSplit(String),

    /// A listing code violates the format rules.
    #[error("invalid listing code: {0}")]
    InvalidListingCode(String),

    /// A license has an inconsistent validity window.
    #[error("invalid license: {0}")]
    InvalidLicense(String),

    /// An interval ends before it starts.
    #[error("invalid interval: {0}")]
    InvalidInterval(String),

    /// A geographic coordinate is out of range.
    #[error("invalid location: {0}")]
    InvalidLocation(String),

    /// Generic validation error.
    #[error("validation error: {0}")]
    ValidationError(String),

    // ========================================================================
    // State Errors (2000-2999)
    // ========================================================================
    /// Invalid deal state transition attempted.
    #[error("invalid state transition from {from} to {to}")]
    InvalidStateTransition {
        /// The current state.
        from: DealStatus,
        /// The attempted target state.
        to: DealStatus,
    },

    /// Operation not allowed in the aggregate's current state.
    #[error("operation not allowed: {0}")]
    OperationNotAllowed(String),

    /// A conflicting value already exists on the aggregate.
    #[error("already exists: {0}")]
    AlreadyExists(String),

    // ========================================================================
    // Compliance Errors (3000-3999)
    // ========================================================================
    /// Verification prerequisites (email, phone, KYC) are not satisfied.
    #[error("verification incomplete: {0}")]
    VerificationIncomplete(String),

    /// The agent license is not currently valid.
    #[error("license invalid or expired: {0}")]
    LicenseNotValid(String),

    /// The brokerage affiliation has ended.
    #[error("affiliation ended: {0}")]
    AffiliationEnded(String),

    /// A required document is missing.
    #[error("missing document: {0}")]
    MissingDocument(String),

    /// No service area is configured.
    #[error("at least one service area is required")]
    NoServiceAreas,

    /// The listing has not passed moderation.
    #[error("moderation not approved: {0}")]
    ModerationNotApproved(String),

    /// The listing lacks required media.
    #[error("missing media: {0}")]
    MissingMedia(String),

    // ========================================================================
    // Monetary Errors (4000-4999)
    // ========================================================================
    /// Currencies do not match.
    #[error("currency mismatch: expected {expected}, got {actual}")]
    CurrencyMismatch {
        /// The currency established on the ledger or aggregate.
        expected: String,
        /// The currency of the rejected value.
        actual: String,
    },

    /// Payments do not cover the total due.
    #[error("outstanding balance remains: {shortfall}")]
    OutstandingBalance {
        /// The amount still owed.
        shortfall: Money,
    },
}

impl DomainError {
    /// Returns the numeric error code.
    ///
    /// # Examples
    ///
    /// ```
    /// use amlaki_domain::domain::errors::DomainError;
    ///
    /// assert_eq!(DomainError::InvalidId("test".to_string()).code(), 1001);
    /// assert_eq!(DomainError::NoServiceAreas.code(), 3005);
    /// ```
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            // Validation errors (1000-1999)
            Self::InvalidId(_) => 1001,
            Self::InvalidAmount(_) => 1002,
            Self::InvalidCommissionSplit(_) => 1003,
            Self::InvalidListingCode(_) => 1004,
            Self::InvalidLicense(_) => 1005,
            Self::InvalidInterval(_) => 1006,
            Self::InvalidLocation(_) => 1007,
            Self::ValidationError(_) => 1099,

            // State errors (2000-2999)
            Self::InvalidStateTransition { .. } => 2001,
            Self::OperationNotAllowed(_) => 2002,
            Self::AlreadyExists(_) => 2003,

            // Compliance errors (3000-3999)
            Self::VerificationIncomplete(_) => 3001,
            Self::LicenseNotValid(_) => 3002,
            Self::AffiliationEnded(_) => 3003,
            Self::MissingDocument(_) => 3004,
            Self::NoServiceAreas => 3005,
            Self::ModerationNotApproved(_) => 3006,
            Self::MissingMedia(_) => 3007,

            // Monetary errors (4000-4999)
            Self::CurrencyMismatch { .. } => 4001,
            Self::OutstandingBalance { .. } => 4002,
        }
    }

    /// Returns the error category name.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self.code() {
            1000..=1999 => "validation",
            2000..=2999 => "state",
            3000..=3999 => "compliance",
            4000..=4999 => "monetary",
            _ => "unknown",
        }
    }

    /// Returns true if this is a validation error.
    #[inline]
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(self.code(), 1000..=1999)
    }

    /// Returns true if this is a state error.
    #[inline]
    #[must_use]
    pub const fn is_state_error(&self) -> bool {
        matches!(self.code(), 2000..=2999)
    }

    /// Returns true if this is a compliance error.
    #[inline]
    #[must_use]
    pub const fn is_compliance_error(&self) -> bool {
        matches!(self.code(), 3000..=3999)
    }

    /// Returns true if this is a monetary error.
    #[inline]
    #[must_use]
    pub const fn is_monetary_error(&self) -> bool {
        matches!(self.code(), 4000..=4999)
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

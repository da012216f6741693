//! # Contract Info
//!
//! Contract artifact attached to a deal: empty until both parties sign,
//! then carries the contract number, an optional document reference, and
//! the signing instant.

use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Contract record for a deal.
///
/// # Examples
///
/// ```
/// use amlaki_domain::domain::value_objects::ContractInfo;
/// use chrono::Utc;
///
/// let empty = ContractInfo::empty();
/// assert!(!empty.is_signed());
///
/// let signed = ContractInfo::signed("CT-2025-001", Some("https://cdn/ct.pdf"), Utc::now()).unwrap();
/// assert!(signed.is_signed());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContractInfo {
    contract_number: Option<String>,
    document_url: Option<String>,
    signed_at: Option<DateTime<Utc>>,
}

impl ContractInfo {
    /// Creates the empty (unsigned) contract record.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            contract_number: None,
            document_url: None,
            signed_at: None,
        }
    }

    /// Creates a signed contract record.
    ///
    /// The number is trimmed; a blank document URL is stored as `None`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ValidationError`] if the contract number is
    /// blank.
    pub fn signed(
        number: impl AsRef<str>,
        document_url: Option<&str>,
        signed_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let number = number.as_ref().trim();
        if number.is_empty() {
            return Err(DomainError::ValidationError(
                "contract number is required".to_string(),
            ));
        }
        let document_url = document_url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .map(str::to_string);
        Ok(Self {
            contract_number: Some(number.to_string()),
            document_url,
            signed_at: Some(signed_at),
        })
    }

    /// Returns the contract number, if signed.
    #[inline]
    #[must_use]
    pub fn contract_number(&self) -> Option<&str> {
        self.contract_number.as_deref()
    }

    /// Returns the document reference, if any.
    #[inline]
    #[must_use]
    pub fn document_url(&self) -> Option<&str> {
        self.document_url.as_deref()
    }

    /// Returns when the contract was signed, if it has been.
    #[inline]
    #[must_use]
    pub const fn signed_at(&self) -> Option<DateTime<Utc>> {
        self.signed_at
    }

    /// Returns true once the contract has been signed.
    #[inline]
    #[must_use]
    pub const fn is_signed(&self) -> bool {
        self.signed_at.is_some()
    }
}

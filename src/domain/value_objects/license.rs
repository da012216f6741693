//! # Agent License
//!
//! Real-estate license with a validity window and status.
//!
//! A license is valid at an instant when its status is
//! [`LicenseStatus::Active`] and its expiry lies strictly after that
//! instant. Renewal and revocation return new copies; the license value
//! is never mutated in place.
//!
//! # Examples
//!
//! ```
//! use amlaki_domain::domain::value_objects::{AgentLicense, LicenseStatus};
//! use chrono::{TimeZone, Utc};
//!
//! let issued = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
//! let expires = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
//! let license = AgentLicense::new("LIC-100", "Tehran Union", issued, expires, LicenseStatus::Active).unwrap();
//!
//! let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
//! assert!(license.is_currently_valid(now));
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Administrative status of a license.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LicenseStatus {
    /// The license is in good standing.
    #[default]
    Active,

    /// The license is temporarily suspended by the issuing authority.
    Suspended,

    /// The license was revoked (terminal for this license number).
    Revoked,
}

impl fmt::Display for LicenseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Active => "ACTIVE",
            Self::Suspended => "SUSPENDED",
            Self::Revoked => "REVOKED",
        };
        write!(f, "{}", s)
    }
}

/// A real-estate agent license.
///
/// # Invariants
///
/// - Number and issuing authority are non-blank
/// - Expiry lies strictly after issuance
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentLicense {
    number: String,
    issuing_authority: String,
    issued_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
    status: LicenseStatus,
}

impl AgentLicense {
    /// Creates a license.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidLicense`] if the number or issuing
    /// authority is blank, or the expiry is not after the issue date.
    pub fn new(
        number: impl AsRef<str>,
        issuing_authority: impl AsRef<str>,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
        status: LicenseStatus,
    ) -> DomainResult<Self> {
        let number = number.as_ref().trim();
        if number.is_empty() {
            return Err(DomainError::InvalidLicense(
                "license number is required".to_string(),
            ));
        }
        let issuing_authority = issuing_authority.as_ref().trim();
        if issuing_authority.is_empty() {
            return Err(DomainError::InvalidLicense(
                "issuing authority is required".to_string(),
            ));
        }
        if expires_at <= issued_at {
            return Err(DomainError::InvalidLicense(
                "license expiry must be after issue date".to_string(),
            ));
        }
        Ok(Self {
            number: number.to_string(),
            issuing_authority: issuing_authority.to_string(),
            issued_at,
            expires_at,
            status,
        })
    }

    /// Returns the license number.
    #[inline]
    #[must_use]
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Returns the issuing authority.
    #[inline]
    #[must_use]
    pub fn issuing_authority(&self) -> &str {
        &self.issuing_authority
    }

    /// Returns when the license was issued.
    #[inline]
    #[must_use]
    pub const fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    /// Returns when the license expires.
    #[inline]
    #[must_use]
    pub const fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Returns the administrative status.
    #[inline]
    #[must_use]
    pub const fn status(&self) -> LicenseStatus {
        self.status
    }

    /// Returns true if the license is active and unexpired at `now`.
    #[must_use]
    pub fn is_currently_valid(&self, now: DateTime<Utc>) -> bool {
        self.status == LicenseStatus::Active && self.expires_at > now
    }

    /// Returns a renewed copy with a later expiry and `Active` status.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidLicense`] if the new expiry is not
    /// strictly later than the current one.
    pub fn renew(&self, new_expiry: DateTime<Utc>) -> DomainResult<Self> {
        if new_expiry <= self.expires_at {
            return Err(DomainError::InvalidLicense(
                "new expiry must be later than current expiry".to_string(),
            ));
        }
        Ok(Self {
            number: self.number.clone(),
            issuing_authority: self.issuing_authority.clone(),
            issued_at: self.issued_at,
            expires_at: new_expiry,
            status: LicenseStatus::Active,
        })
    }

    /// Returns a revoked copy, preserving the validity window.
    #[must_use]
    pub fn revoke(&self) -> Self {
        Self {
            status: LicenseStatus::Revoked,
            ..self.clone()
        }
    }
}

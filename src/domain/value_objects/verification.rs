//! # Verification Snapshot
//!
//! Point-in-time cache of a user's verification state.
//!
//! The identity service owns the live state; the agent aggregate holds a
//! snapshot taken at enrollment time that the orchestrator refreshes
//! before gated transitions.

use serde::{Deserialize, Serialize};

/// Email/phone/KYC verification results for a platform user.
///
/// # Examples
///
/// ```
/// use amlaki_domain::domain::value_objects::VerificationSnapshot;
///
/// let snapshot = VerificationSnapshot::new(true, true, true);
/// assert!(snapshot.meets_agent_prerequisites());
///
/// let partial = VerificationSnapshot::new(true, true, false);
/// assert!(!partial.meets_agent_prerequisites());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct VerificationSnapshot {
    email_verified: bool,
    phone_verified: bool,
    kyc_approved: bool,
}

impl VerificationSnapshot {
    /// Creates a snapshot.
    #[inline]
    #[must_use]
    pub const fn new(email_verified: bool, phone_verified: bool, kyc_approved: bool) -> Self {
        Self {
            email_verified,
            phone_verified,
            kyc_approved,
        }
    }

    /// Returns true if the email address is verified.
    #[inline]
    #[must_use]
    pub const fn email_verified(&self) -> bool {
        self.email_verified
    }

    /// Returns true if the phone number is verified.
    #[inline]
    #[must_use]
    pub const fn phone_verified(&self) -> bool {
        self.phone_verified
    }

    /// Returns true if KYC review approved the user.
    #[inline]
    #[must_use]
    pub const fn kyc_approved(&self) -> bool {
        self.kyc_approved
    }

    /// Returns true if the user satisfies every agent prerequisite:
    /// verified email, verified phone, and approved KYC.
    #[inline]
    #[must_use]
    pub const fn meets_agent_prerequisites(&self) -> bool {
        self.email_verified && self.phone_verified && self.kyc_approved
    }
}

//! # Deal Status
//!
//! Deal lifecycle state machine.
//!
//! This module provides the [`DealStatus`] enum representing the lifecycle
//! of a deal with enforced state transitions.
//!
//! # State Machine
//!
//! ```text
//! Initiated → OfferProposed → OfferAccepted → ContractSigned → PaymentInProgress → Completed
//!                  ↑    ↓
//!             OfferRejected
//!
//! every non-terminal state → Canceled
//! ```
//!
//! The rejection loop is legal: a rejected offer returns the deal to an
//! offer-eligible state so the buyer can propose again.
//!
//! # Examples
//!
//! ```
//! use amlaki_domain::domain::value_objects::DealStatus;
//!
//! let status = DealStatus::Initiated;
//! assert!(status.can_transition_to(DealStatus::OfferProposed));
//! assert!(!status.can_transition_to(DealStatus::Completed));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Deal lifecycle state.
///
/// State transitions are enforced via
/// [`can_transition_to`](DealStatus::can_transition_to).
///
/// # Terminal States
///
/// - [`Completed`](DealStatus::Completed) - all payments settled
/// - [`Canceled`](DealStatus::Canceled) - abandoned before completion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum DealStatus {
    /// Deal opened with a tentative price; no offer yet.
    #[default]
    Initiated = 0,

    /// A buyer has proposed an offer.
    OfferProposed = 1,

    /// The seller accepted the current offer.
    OfferAccepted = 2,

    /// The seller rejected the current offer; a new offer may follow.
    OfferRejected = 3,

    /// Both parties signed the contract.
    ContractSigned = 4,

    /// Partial payments have been recorded against the total due.
    PaymentInProgress = 5,

    /// Funds settled and transfer confirmed (terminal).
    Completed = 6,

    /// Deal canceled (terminal).
    Canceled = 7,
}

impl DealStatus {
    /// Returns true if this is a terminal state.
    ///
    /// # Examples
    ///
    /// ```
    /// use amlaki_domain::domain::value_objects::DealStatus;
    ///
    /// assert!(DealStatus::Completed.is_terminal());
    /// assert!(DealStatus::Canceled.is_terminal());
    /// assert!(!DealStatus::PaymentInProgress.is_terminal());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Canceled)
    }

    /// Returns true if this state can transition to the target state.
    ///
    /// Enforces the deal state machine rules:
    /// - Initiated → OfferProposed, Canceled
    /// - OfferProposed → OfferAccepted, OfferRejected, Canceled
    /// - OfferRejected → OfferProposed, Canceled (the re-offer loop)
    /// - OfferAccepted → ContractSigned, Canceled
    /// - ContractSigned → PaymentInProgress, Completed, Canceled
    /// - PaymentInProgress → Completed, Canceled
    /// - Terminal states → (none)
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            // From Initiated
            (Self::Initiated, Self::OfferProposed)
                | (Self::Initiated, Self::Canceled)
                // From OfferProposed
                | (Self::OfferProposed, Self::OfferAccepted)
                | (Self::OfferProposed, Self::OfferRejected)
                | (Self::OfferProposed, Self::Canceled)
                // From OfferRejected (re-offer loop)
                | (Self::OfferRejected, Self::OfferProposed)
                | (Self::OfferRejected, Self::Canceled)
                // From OfferAccepted
                | (Self::OfferAccepted, Self::ContractSigned)
                | (Self::OfferAccepted, Self::Canceled)
                // From ContractSigned
                | (Self::ContractSigned, Self::PaymentInProgress)
                | (Self::ContractSigned, Self::Completed)
                | (Self::ContractSigned, Self::Canceled)
                // From PaymentInProgress
                | (Self::PaymentInProgress, Self::Completed)
                | (Self::PaymentInProgress, Self::Canceled)
        )
    }

    /// Returns the valid next states from this state.
    #[must_use]
    pub fn valid_transitions(&self) -> Vec<Self> {
        match self {
            Self::Initiated => vec![Self::OfferProposed, Self::Canceled],
            Self::OfferProposed => {
                vec![Self::OfferAccepted, Self::OfferRejected, Self::Canceled]
            }
            Self::OfferRejected => vec![Self::OfferProposed, Self::Canceled],
            Self::OfferAccepted => vec![Self::ContractSigned, Self::Canceled],
            Self::ContractSigned => {
                vec![Self::PaymentInProgress, Self::Completed, Self::Canceled]
            }
            Self::PaymentInProgress => vec![Self::Completed, Self::Canceled],
            Self::Completed | Self::Canceled => vec![],
        }
    }

    /// Returns true if a new offer may be proposed from this state.
    #[inline]
    #[must_use]
    pub const fn accepts_offers(&self) -> bool {
        matches!(self, Self::Initiated | Self::OfferRejected)
    }

    /// Returns true if payments may be recorded in this state.
    ///
    /// Payments are blocked only by terminal states; recording a payment
    /// never changes the status by itself.
    #[inline]
    #[must_use]
    pub const fn accepts_payments(&self) -> bool {
        !self.is_terminal()
    }
}

impl fmt::Display for DealStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Initiated => "INITIATED",
            Self::OfferProposed => "OFFER_PROPOSED",
            Self::OfferAccepted => "OFFER_ACCEPTED",
            Self::OfferRejected => "OFFER_REJECTED",
            Self::ContractSigned => "CONTRACT_SIGNED",
            Self::PaymentInProgress => "PAYMENT_IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Canceled => "CANCELED",
        };
        write!(f, "{}", s)
    }
}

//! # Commission Value Objects
//!
//! Commission split percentages and flat listing commissions.
//!
//! [`CommissionSplit`] divides a deal commission between the agent, the
//! brokerage, and the platform. The three percentages must be
//! non-negative, sum to exactly 100, and the agent share is capped at 95
//! by policy.
//!
//! # Examples
//!
//! ```
//! use amlaki_domain::domain::value_objects::CommissionSplit;
//! use rust_decimal::Decimal;
//!
//! let split = CommissionSplit::new(
//!     Decimal::new(70, 0),
//!     Decimal::new(20, 0),
//!     Decimal::new(10, 0),
//! )
//! .unwrap();
//! assert_eq!(split.agent_percent(), Decimal::new(70, 0));
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::money::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum agent share of a commission split, in percent.
pub const MAX_AGENT_PERCENT: Decimal = Decimal::from_parts(95, 0, 0, false, 0);

const HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// How a deal commission is divided between agent, brokerage, and platform.
///
/// # Invariants
///
/// - All three percentages are >= 0
/// - They sum to exactly 100
/// - The agent share is <= 95
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SplitRepr", into = "SplitRepr")]
pub struct CommissionSplit {
    agent_percent: Decimal,
    brokerage_percent: Decimal,
    platform_percent: Decimal,
}

#[derive(Serialize, Deserialize)]
struct SplitRepr {
    agent_percent: Decimal,
    brokerage_percent: Decimal,
    platform_percent: Decimal,
}

impl CommissionSplit {
    /// Creates a commission split.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidCommissionSplit`] if any share is
    /// negative, the shares do not sum to 100, or the agent share exceeds
    /// the 95% policy cap.
    ///
    /// # Examples
    ///
    /// ```
    /// use amlaki_domain::domain::value_objects::CommissionSplit;
    /// use rust_decimal::Decimal;
    ///
    /// // Sums to 99: rejected
    /// let result = CommissionSplit::new(
    ///     Decimal::new(70, 0),
    ///     Decimal::new(20, 0),
    ///     Decimal::new(9, 0),
    /// );
    /// assert!(result.is_err());
    /// ```
    pub fn new(
        agent_percent: Decimal,
        brokerage_percent: Decimal,
        platform_percent: Decimal,
    ) -> DomainResult<Self> {
        if agent_percent.is_sign_negative()
            || brokerage_percent.is_sign_negative()
            || platform_percent.is_sign_negative()
        {
            return Err(DomainError::InvalidCommissionSplit(
                "commission percents cannot be negative".to_string(),
            ));
        }
        if agent_percent + brokerage_percent + platform_percent != HUNDRED {
            return Err(DomainError::InvalidCommissionSplit(
                "commission split must sum to 100%".to_string(),
            ));
        }
        if agent_percent > MAX_AGENT_PERCENT {
            return Err(DomainError::InvalidCommissionSplit(
                "agent share too high per policy".to_string(),
            ));
        }
        Ok(Self {
            agent_percent,
            brokerage_percent,
            platform_percent,
        })
    }

    /// Returns the agent share in percent.
    #[inline]
    #[must_use]
    pub const fn agent_percent(&self) -> Decimal {
        self.agent_percent
    }

    /// Returns the brokerage share in percent.
    #[inline]
    #[must_use]
    pub const fn brokerage_percent(&self) -> Decimal {
        self.brokerage_percent
    }

    /// Returns the platform share in percent.
    #[inline]
    #[must_use]
    pub const fn platform_percent(&self) -> Decimal {
        self.platform_percent
    }
}

impl fmt::Display for CommissionSplit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.agent_percent, self.brokerage_percent, self.platform_percent
        )
    }
}

impl TryFrom<SplitRepr> for CommissionSplit {
    type Error = DomainError;

    fn try_from(repr: SplitRepr) -> Result<Self, Self::Error> {
        Self::new(repr.agent_percent, repr.brokerage_percent, repr.platform_percent)
    }
}

impl From<CommissionSplit> for SplitRepr {
    fn from(split: CommissionSplit) -> Self {
        Self {
            agent_percent: split.agent_percent,
            brokerage_percent: split.brokerage_percent,
            platform_percent: split.platform_percent,
        }
    }
}

/// A flat commission fee attached to a listing.
///
/// The fee is a [`Money`] value and therefore never negative.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Commission(Money);

impl Commission {
    /// Creates a commission from a monetary value.
    #[inline]
    #[must_use]
    pub const fn new(amount: Money) -> Self {
        Self(amount)
    }

    /// Returns the commission amount.
    #[inline]
    #[must_use]
    pub const fn amount(&self) -> &Money {
        &self.0
    }
}

impl fmt::Display for Commission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn pct(value: i64) -> Decimal {
        Decimal::new(value, 0)
    }

    mod split {
        use super::*;

        #[test]
        fn valid_split_succeeds() {
            let split = CommissionSplit::new(pct(70), pct(20), pct(10)).unwrap();
            assert_eq!(split.agent_percent(), pct(70));
            assert_eq!(split.brokerage_percent(), pct(20));
            assert_eq!(split.platform_percent(), pct(10));
        }

        #[test]
        fn agent_at_cap_succeeds() {
            assert!(CommissionSplit::new(pct(95), pct(5), pct(0)).is_ok());
        }

        #[test]
        fn agent_above_cap_fails() {
            let result = CommissionSplit::new(pct(96), pct(4), pct(0));
            assert!(matches!(
                result,
                Err(DomainError::InvalidCommissionSplit(_))
            ));
        }

        #[test]
        fn sum_below_hundred_fails() {
            assert!(CommissionSplit::new(pct(70), pct(20), pct(9)).is_err());
        }

        #[test]
        fn sum_above_hundred_fails() {
            assert!(CommissionSplit::new(pct(70), pct(20), pct(11)).is_err());
        }

        #[test]
        fn negative_share_fails() {
            assert!(CommissionSplit::new(pct(105), pct(-5), pct(0)).is_err());
        }

        #[test]
        fn fractional_shares_must_still_sum() {
            let split = CommissionSplit::new(
                Decimal::new(705, 1),
                Decimal::new(195, 1),
                pct(10),
            )
            .unwrap();
            assert_eq!(split.agent_percent(), Decimal::new(705, 1));
        }

        #[test]
        fn serde_rejects_invalid_split() {
            let json = r#"{"agent_percent":"99","brokerage_percent":"1","platform_percent":"1"}"#;
            let result: Result<CommissionSplit, _> = serde_json::from_str(json);
            assert!(result.is_err());
        }

        #[test]
        fn serde_roundtrip() {
            let split = CommissionSplit::new(pct(50), pct(30), pct(20)).unwrap();
            let json = serde_json::to_string(&split).unwrap();
            let back: CommissionSplit = serde_json::from_str(&json).unwrap();
            assert_eq!(back, split);
        }
    }

    mod commission {
        use super::*;

        #[test]
        fn wraps_money() {
            let fee = Commission::new(Money::new(pct(500), "IRR").unwrap());
            assert_eq!(fee.amount().amount(), pct(500));
        }
    }
}

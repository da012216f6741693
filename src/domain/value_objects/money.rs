//! # Money Value Object
//!
//! Currency-tagged decimal amount.
//!
//! This module provides the [`Money`] type: a non-negative [`Decimal`]
//! amount paired with an uppercase ISO-style currency code. All monetary
//! values in the domain (prices, commissions, payments, ledger totals)
//! are `Money`.
//!
//! # Examples
//!
//! ```
//! use amlaki_domain::domain::value_objects::Money;
//! use rust_decimal::Decimal;
//!
//! let a = Money::new(Decimal::new(1000, 0), "irr").unwrap();
//! assert_eq!(a.currency(), "IRR");
//!
//! let b = Money::new(Decimal::new(500, 0), "IRR").unwrap();
//! let sum = a.checked_add(&b).unwrap();
//! assert_eq!(sum.amount(), Decimal::new(1500, 0));
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Currency code used when no other currency has been established,
/// e.g. for the total of an empty payment ledger.
pub const DEFAULT_CURRENCY: &str = "IRR";

/// A validated monetary value.
///
/// Pairs a non-negative decimal amount with an uppercase currency code.
/// Arithmetic across different currencies is rejected.
///
/// # Invariants
///
/// - Amount is always >= 0
/// - Currency is non-blank, trimmed, uppercase
///
/// # Examples
///
/// ```
/// use amlaki_domain::domain::value_objects::Money;
/// use rust_decimal::Decimal;
///
/// let money = Money::new(Decimal::new(250_000, 0), "IRR").unwrap();
/// assert!(!money.is_zero());
///
/// // Negative amounts are rejected at construction
/// assert!(Money::new(Decimal::new(-1, 0), "IRR").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MoneyRepr", into = "MoneyRepr")]
pub struct Money {
    amount: Decimal,
    currency: String,
}

/// Serde wire representation, validated on deserialization.
#[derive(Serialize, Deserialize)]
struct MoneyRepr {
    amount: Decimal,
    currency: String,
}

impl Money {
    /// Creates a new monetary value.
    ///
    /// The currency code is trimmed and uppercased.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidAmount`] if the amount is negative or
    /// the currency is blank.
    pub fn new(amount: Decimal, currency: impl AsRef<str>) -> DomainResult<Self> {
        if amount.is_sign_negative() {
            return Err(DomainError::InvalidAmount(
                "amount cannot be negative".to_string(),
            ));
        }
        let currency = currency.as_ref().trim();
        if currency.is_empty() {
            return Err(DomainError::InvalidAmount("currency is required".to_string()));
        }
        Ok(Self {
            amount,
            currency: currency.to_uppercase(),
        })
    }

    /// Creates a zero value in the given currency.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidAmount`] if the currency is blank.
    pub fn zero(currency: impl AsRef<str>) -> DomainResult<Self> {
        Self::new(Decimal::ZERO, currency)
    }

    /// Crate-internal constructor for values whose invariants are already
    /// established (e.g. a ledger total summed from validated entries).
    pub(crate) fn from_validated(amount: Decimal, currency: &str) -> Self {
        debug_assert!(!amount.is_sign_negative());
        debug_assert!(!currency.trim().is_empty());
        Self {
            amount,
            currency: currency.to_string(),
        }
    }

    /// Returns the decimal amount.
    #[inline]
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency code.
    #[inline]
    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Returns true if the amount is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is strictly positive.
    #[inline]
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// Returns a copy with a different amount in the same currency.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidAmount`] if the new amount is negative.
    pub fn with_amount(&self, amount: Decimal) -> DomainResult<Self> {
        Self::new(amount, &self.currency)
    }

    /// Adds another value of the same currency.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::CurrencyMismatch`] if the currencies differ.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn checked_add(&self, rhs: &Self) -> DomainResult<Self> {
        self.ensure_same_currency(rhs)?;
        Ok(Self {
            amount: self.amount + rhs.amount,
            currency: self.currency.clone(),
        })
    }

    /// Subtracts another value of the same currency, saturating at zero.
    ///
    /// Used to compute shortfalls, where overpayment simply means no
    /// balance remains.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::CurrencyMismatch`] if the currencies differ.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn saturating_sub(&self, rhs: &Self) -> DomainResult<Self> {
        self.ensure_same_currency(rhs)?;
        let amount = if rhs.amount > self.amount {
            Decimal::ZERO
        } else {
            self.amount - rhs.amount
        };
        Ok(Self {
            amount,
            currency: self.currency.clone(),
        })
    }

    fn ensure_same_currency(&self, other: &Self) -> DomainResult<()> {
        if self.currency != other.currency {
            return Err(DomainError::CurrencyMismatch {
                expected: self.currency.clone(),
                actual: other.currency.clone(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

impl PartialOrd for Money {
    /// Orders by amount; values in different currencies are incomparable.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.currency != other.currency {
            return None;
        }
        Some(self.amount.cmp(&other.amount))
    }
}

impl TryFrom<MoneyRepr> for Money {
    type Error = DomainError;

    fn try_from(repr: MoneyRepr) -> Result<Self, Self::Error> {
        Self::new(repr.amount, repr.currency)
    }
}

impl From<Money> for MoneyRepr {
    fn from(money: Money) -> Self {
        Self {
            amount: money.amount,
            currency: money.currency,
        }
    }
}

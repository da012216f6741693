//! # Price Value Object
//!
//! Listing and deal price.
//!
//! A [`Price`] wraps [`Money`], which already guarantees a non-negative
//! amount. The zero price is storable (a draft listing may not have a
//! price yet); publication requires a strictly positive one, checked via
//! [`is_positive`](Price::is_positive).

use crate::domain::errors::DomainResult;
use crate::domain::value_objects::money::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated price.
///
/// # Examples
///
/// ```
/// use amlaki_domain::domain::value_objects::{Money, Price};
/// use rust_decimal::Decimal;
///
/// let price = Price::new(Money::new(Decimal::new(100, 0), "IRR").unwrap());
/// assert!(price.is_positive());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Money);

impl Price {
    /// Creates a price from a monetary value.
    #[inline]
    #[must_use]
    pub const fn new(value: Money) -> Self {
        Self(value)
    }

    /// Returns the underlying monetary value.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> &Money {
        &self.0
    }

    /// Returns the decimal amount.
    #[inline]
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0.amount()
    }

    /// Returns the currency code.
    #[inline]
    #[must_use]
    pub fn currency(&self) -> &str {
        self.0.currency()
    }

    /// Returns true if the price is strictly positive.
    #[inline]
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0.is_positive()
    }

    /// Returns a copy with a different amount in the same currency.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidAmount`](crate::domain::errors::DomainError::InvalidAmount)
    /// if the new amount is negative.
    pub fn change_amount(&self, amount: Decimal) -> DomainResult<Self> {
        Ok(Self(self.0.with_amount(amount)?))
    }
}

impl From<Money> for Price {
    fn from(value: Money) -> Self {
        Self(value)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

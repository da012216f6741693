//! # Payment Ledger
//!
//! Append-only record of payments against a deal.
//!
//! The ledger is a value object: [`add`](PaymentLedger::add) returns a new
//! ledger rather than mutating in place. Its currency is fixed by the
//! first entry; later entries in any other currency are rejected, which
//! keeps the running total meaningful.
//!
//! # Examples
//!
//! ```
//! use amlaki_domain::domain::value_objects::{Money, PaymentEntry, PaymentLedger, PaymentMethod};
//! use chrono::Utc;
//! use rust_decimal::Decimal;
//!
//! let now = Utc::now();
//! let amount = Money::new(Decimal::new(600, 0), "IRR").unwrap();
//! let ledger = PaymentLedger::empty()
//!     .add(PaymentEntry::new(amount, PaymentMethod::BankTransfer, now, None))
//!     .unwrap();
//!
//! assert_eq!(ledger.total_paid().amount(), Decimal::new(600, 0));
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::money::{Money, DEFAULT_CURRENCY};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a payment was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    /// Direct bank transfer.
    BankTransfer,

    /// Cash payment.
    Cash,

    /// Funds held in escrow.
    Escrow,

    /// Bank cheque.
    Cheque,

    /// Mortgage financing.
    Mortgage,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::BankTransfer => "BANK_TRANSFER",
            Self::Cash => "CASH",
            Self::Escrow => "ESCROW",
            Self::Cheque => "CHEQUE",
            Self::Mortgage => "MORTGAGE",
        };
        write!(f, "{}", s)
    }
}

/// A single recorded payment.
///
/// The amount is [`Money`] and therefore never negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentEntry {
    amount: Money,
    method: PaymentMethod,
    paid_at: DateTime<Utc>,
    reference: Option<String>,
}

impl PaymentEntry {
    /// Creates a payment entry. A blank reference is stored as `None`.
    #[must_use]
    pub fn new(
        amount: Money,
        method: PaymentMethod,
        paid_at: DateTime<Utc>,
        reference: Option<&str>,
    ) -> Self {
        let reference = reference
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_string);
        Self {
            amount,
            method,
            paid_at,
            reference,
        }
    }

    /// Returns the paid amount.
    #[inline]
    #[must_use]
    pub const fn amount(&self) -> &Money {
        &self.amount
    }

    /// Returns the payment method.
    #[inline]
    #[must_use]
    pub const fn method(&self) -> PaymentMethod {
        self.method
    }

    /// Returns when the payment was made.
    #[inline]
    #[must_use]
    pub const fn paid_at(&self) -> DateTime<Utc> {
        self.paid_at
    }

    /// Returns the external payment reference, if any.
    #[inline]
    #[must_use]
    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }
}

/// Append-only, currency-homogeneous payment ledger.
///
/// # Invariants
///
/// - Entries are never removed or reordered
/// - All entries share the currency established by the first one
/// - `total_paid` equals the sum of all entry amounts
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaymentLedger {
    entries: Vec<PaymentEntry>,
}

impl PaymentLedger {
    /// Creates an empty ledger.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns the recorded entries in append order.
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[PaymentEntry] {
        &self.entries
    }

    /// Returns true if nothing has been paid.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the ledger currency: that of the first entry, or the
    /// default currency while the ledger is empty.
    #[must_use]
    pub fn currency(&self) -> &str {
        self.entries
            .first()
            .map_or(DEFAULT_CURRENCY, |e| e.amount.currency())
    }

    /// Returns the running total of all entries.
    #[must_use]
    pub fn total_paid(&self) -> Money {
        // Entries are non-negative and currency-homogeneous, so the sum
        // always satisfies the Money invariants.
        let total: Decimal = self.entries.iter().map(|e| e.amount.amount()).sum();
        Money::from_validated(total, self.currency())
    }

    /// Returns a new ledger with `entry` appended.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::CurrencyMismatch`] if the ledger is
    /// non-empty and the entry's currency differs from the established
    /// one.
    #[must_use = "this returns a new ledger, without modifying the original"]
    pub fn add(&self, entry: PaymentEntry) -> DomainResult<Self> {
        if !self.entries.is_empty() && entry.amount.currency() != self.currency() {
            return Err(DomainError::CurrencyMismatch {
                expected: self.currency().to_string(),
                actual: entry.amount.currency().to_string(),
            });
        }
        let mut entries = self.entries.clone();
        entries.push(entry);
        Ok(Self { entries })
    }
}

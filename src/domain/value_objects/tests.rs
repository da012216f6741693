//! # Property-Based Tests for Domain Value Objects
//!
//! This module contains property-based tests using proptest for the
//! monetary and collection invariants the aggregates depend on.
//!
//! # Test Categories
//!
//! - **Money laws**: non-negativity, commutative addition, floored
//!   subtraction
//! - **Ledger invariants**: running total, currency homogeneity
//! - **Commission split**: acceptance region of the percentage rules

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use proptest::prelude::*;

use super::commission::CommissionSplit;
use super::money::Money;
use super::payment::{PaymentEntry, PaymentLedger, PaymentMethod};
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;

// ============================================================================
// Strategy Definitions
// ============================================================================

/// Strategy for non-negative monetary amounts with two decimal places.
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000i64).prop_map(|v| Decimal::new(v, 2))
}

/// Strategy for short lists of payment amounts.
fn amounts() -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec(amount(), 0..16)
}

fn irr(value: Decimal) -> Money {
    Money::new(value, "IRR").unwrap()
}

fn paid_at() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
}

// ============================================================================
// Money Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Money addition is commutative: a + b == b + a
    #[test]
    fn money_addition_commutative(a in amount(), b in amount()) {
        let lhs = irr(a).checked_add(&irr(b)).unwrap();
        let rhs = irr(b).checked_add(&irr(a)).unwrap();
        prop_assert_eq!(lhs, rhs);
    }

    /// Saturating subtraction never produces a negative amount.
    #[test]
    fn money_saturating_sub_floors_at_zero(a in amount(), b in amount()) {
        let diff = irr(a).saturating_sub(&irr(b)).unwrap();
        prop_assert!(!diff.amount().is_sign_negative());
    }

    /// (a + b) - b == a for non-negative amounts.
    #[test]
    fn money_add_then_sub_roundtrips(a in amount(), b in amount()) {
        let sum = irr(a).checked_add(&irr(b)).unwrap();
        let back = sum.saturating_sub(&irr(b)).unwrap();
        prop_assert_eq!(back, irr(a));
    }

    /// Negative amounts are never constructible.
    #[test]
    fn money_rejects_negative(a in 1i64..1_000_000_000i64) {
        prop_assert!(Money::new(Decimal::new(-a, 2), "IRR").is_err());
    }
}

// ============================================================================
// Payment Ledger Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// The ledger total always equals the sum of its entry amounts.
    #[test]
    fn ledger_total_is_sum_of_entries(values in amounts()) {
        let mut ledger = PaymentLedger::empty();
        for value in &values {
            let entry = PaymentEntry::new(irr(*value), PaymentMethod::BankTransfer, paid_at(), None);
            ledger = ledger.add(entry).unwrap();
        }
        let expected: Decimal = values.iter().sum();
        prop_assert_eq!(ledger.total_paid().amount(), expected);
        prop_assert_eq!(ledger.entries().len(), values.len());
    }

    /// Adding an entry increases the total by exactly that amount.
    #[test]
    fn ledger_add_increases_total(initial in amounts(), extra in amount()) {
        let mut ledger = PaymentLedger::empty();
        for value in &initial {
            let entry = PaymentEntry::new(irr(*value), PaymentMethod::Cash, paid_at(), None);
            ledger = ledger.add(entry).unwrap();
        }
        let before = ledger.total_paid().amount();
        let after = ledger
            .add(PaymentEntry::new(irr(extra), PaymentMethod::Cash, paid_at(), None))
            .unwrap()
            .total_paid()
            .amount();
        prop_assert_eq!(after, before + extra);
    }

    /// Once established, the ledger currency rejects every other currency.
    #[test]
    fn ledger_rejects_foreign_currency(first in amount(), second in amount()) {
        let ledger = PaymentLedger::empty()
            .add(PaymentEntry::new(irr(first), PaymentMethod::Escrow, paid_at(), None))
            .unwrap();
        let foreign = Money::new(second, "USD").unwrap();
        let result = ledger.add(PaymentEntry::new(foreign, PaymentMethod::Escrow, paid_at(), None));
        prop_assert!(result.is_err());
    }
}

// ============================================================================
// Commission Split Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Construction succeeds exactly on the acceptance region:
    /// all shares >= 0, sum == 100, agent share <= 95.
    #[test]
    fn split_acceptance_region(agent in 0i64..=100, brokerage in 0i64..=100) {
        let platform = 100 - agent - brokerage;
        let result = CommissionSplit::new(
            Decimal::new(agent, 0),
            Decimal::new(brokerage, 0),
            Decimal::new(platform, 0),
        );
        let expected_ok = platform >= 0 && agent <= 95;
        prop_assert_eq!(result.is_ok(), expected_ok);
    }

    /// Any split not summing to 100 is rejected.
    #[test]
    fn split_requires_exact_sum(agent in 0i64..=95, brokerage in 0i64..=100, delta in 1i64..=50) {
        let platform = 100 - agent - brokerage + delta;
        prop_assume!(platform >= 0);
        let result = CommissionSplit::new(
            Decimal::new(agent, 0),
            Decimal::new(brokerage, 0),
            Decimal::new(platform, 0),
        );
        prop_assert!(result.is_err());
    }
}

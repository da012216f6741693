//! # Deal Aggregate
//!
//! A transaction over a property: offers, contract, payments, completion.
//!
//! This module provides the [`Deal`] aggregate root. The lifecycle is
//! linear with one legal loop - a rejected offer returns the deal to an
//! offer-eligible state:
//!
//! ```text
//! Initiated → OfferProposed → OfferAccepted → ContractSigned → PaymentInProgress → Completed
//!                  ↑    ↓
//!             OfferRejected          (any non-terminal) → Canceled
//! ```
//!
//! Completion is gated by the payment ledger: the total paid must reach
//! the agreed price plus both commissions. A completion attempt that
//! falls short is the one **side-effecting failure** in the domain - the
//! deal moves to `PaymentInProgress` to record the partial state *and*
//! the call reports the shortfall, so callers must not assume a failed
//! call left the aggregate untouched.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{
    CancellationReason, ContractInfo, DealId, DealStatus, Money, PaymentEntry, PaymentLedger,
    PaymentMethod, Price, PropertyId, TransactionType, UserId,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Why and with what note a deal was canceled.
///
/// Kept on the aggregate so the terminal state stays auditable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancellationRecord {
    reason: CancellationReason,
    note: Option<String>,
}

impl CancellationRecord {
    /// Creates a cancellation record. A blank note is stored as `None`.
    #[must_use]
    pub fn new(reason: CancellationReason, note: Option<&str>) -> Self {
        let note = note
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);
        Self { reason, note }
    }

    /// Returns the cancellation reason.
    #[inline]
    #[must_use]
    pub const fn reason(&self) -> CancellationReason {
        self.reason
    }

    /// Returns the free-text note, if any.
    #[inline]
    #[must_use]
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }
}

/// A deal over a property.
///
/// # Invariants
///
/// - Property and seller ids are non-nil
/// - Commission amounts are fixed at creation
/// - The ledger is append-only and currency-homogeneous
/// - `Completed` requires `total paid >= agreed price + both commissions`
/// - `Completed` and `Canceled` are terminal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    id: DealId,
    property_id: PropertyId,
    seller_id: UserId,
    buyer_id: Option<UserId>,
    deal_type: TransactionType,
    status: DealStatus,
    agreed_price: Price,
    agent_commission: Money,
    amlaki_commission: Money,
    contract: ContractInfo,
    payments: PaymentLedger,
    cancellation: Option<CancellationRecord>,
    version: u64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Deal {
    /// Opens a deal with a tentative price in the `Initiated` state.
    ///
    /// Both commission amounts are fixed here for the life of the deal;
    /// being [`Money`], they are non-negative by construction.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidId`] for a nil property or seller id.
    pub fn start(
        property_id: PropertyId,
        seller_id: UserId,
        deal_type: TransactionType,
        tentative_price: Price,
        agent_commission: Money,
        amlaki_commission: Money,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if property_id.is_nil() {
            return Err(DomainError::InvalidId("property id is required".to_string()));
        }
        if seller_id.is_nil() {
            return Err(DomainError::InvalidId("seller id is required".to_string()));
        }
        let deal = Self {
            id: DealId::new_v4(),
            property_id,
            seller_id,
            buyer_id: None,
            deal_type,
            status: DealStatus::Initiated,
            agreed_price: tentative_price,
            agent_commission,
            amlaki_commission,
            contract: ContractInfo::empty(),
            payments: PaymentLedger::empty(),
            cancellation: None,
            version: 1,
            created_at: now,
            updated_at: now,
        };
        debug!(deal_id = %deal.id, property_id = %property_id, "deal started");
        Ok(deal)
    }

    /// Reconstructs a deal from stored state.
    ///
    /// Bypasses validation; intended for the persistence collaborator
    /// only.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: DealId,
        property_id: PropertyId,
        seller_id: UserId,
        buyer_id: Option<UserId>,
        deal_type: TransactionType,
        status: DealStatus,
        agreed_price: Price,
        agent_commission: Money,
        amlaki_commission: Money,
        contract: ContractInfo,
        payments: PaymentLedger,
        cancellation: Option<CancellationRecord>,
        version: u64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            property_id,
            seller_id,
            buyer_id,
            deal_type,
            status,
            agreed_price,
            agent_commission,
            amlaki_commission,
            contract,
            payments,
            cancellation,
            version,
            created_at,
            updated_at,
        }
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
        self.version = self.version.saturating_add(1);
    }

    // ========== Accessors ==========

    /// Returns the deal id.
    #[inline]
    #[must_use]
    pub fn id(&self) -> DealId {
        self.id
    }

    /// Returns the property under negotiation.
    #[inline]
    #[must_use]
    pub fn property_id(&self) -> PropertyId {
        self.property_id
    }

    /// Returns the seller id.
    #[inline]
    #[must_use]
    pub fn seller_id(&self) -> UserId {
        self.seller_id
    }

    /// Returns the buyer id, once an offer has bound one.
    #[inline]
    #[must_use]
    pub fn buyer_id(&self) -> Option<UserId> {
        self.buyer_id
    }

    /// Returns the transaction type.
    #[inline]
    #[must_use]
    pub fn deal_type(&self) -> TransactionType {
        self.deal_type
    }

    /// Returns the lifecycle status.
    #[inline]
    #[must_use]
    pub fn status(&self) -> DealStatus {
        self.status
    }

    /// Returns the current agreed price. Until acceptance this is the
    /// best proposal, not a final figure.
    #[inline]
    #[must_use]
    pub fn agreed_price(&self) -> &Price {
        &self.agreed_price
    }

    /// Returns the agent commission fixed at creation.
    #[inline]
    #[must_use]
    pub fn agent_commission(&self) -> &Money {
        &self.agent_commission
    }

    /// Returns the platform (amlaki) commission fixed at creation.
    #[inline]
    #[must_use]
    pub fn amlaki_commission(&self) -> &Money {
        &self.amlaki_commission
    }

    /// Returns the contract record.
    #[inline]
    #[must_use]
    pub fn contract(&self) -> &ContractInfo {
        &self.contract
    }

    /// Returns the payment ledger.
    #[inline]
    #[must_use]
    pub fn payments(&self) -> &PaymentLedger {
        &self.payments
    }

    /// Returns the cancellation record, once canceled.
    #[inline]
    #[must_use]
    pub fn cancellation(&self) -> Option<&CancellationRecord> {
        self.cancellation.as_ref()
    }

    /// Returns the version for optimistic locking.
    #[inline]
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Returns when this deal was opened.
    #[inline]
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns when this deal was last updated.
    #[inline]
    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the total amount due for completion: agreed price plus
    /// both commissions, as a raw decimal amount.
    #[must_use]
    pub fn total_due(&self) -> Decimal {
        self.agreed_price.amount()
            + self.agent_commission.amount()
            + self.amlaki_commission.amount()
    }

    /// Returns the amount still owed, floored at zero.
    #[must_use]
    pub fn outstanding_balance(&self) -> Decimal {
        let remaining = self.total_due() - self.payments.total_paid().amount();
        remaining.max(Decimal::ZERO)
    }

    // ========== Lifecycle ==========

    /// Proposes an offer, binding the buyer and replacing the agreed
    /// price with the proposal.
    ///
    /// Legal from `Initiated` or `OfferRejected` - the re-offer loop.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::OperationNotAllowed`] from any other state
    /// and [`DomainError::InvalidId`] for a nil buyer id.
    pub fn propose_offer(
        &mut self,
        buyer_id: UserId,
        offer_price: Price,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        if !self.status.accepts_offers() {
            return Err(DomainError::OperationNotAllowed(
                "offer can only be proposed from Initiated or after rejection".to_string(),
            ));
        }
        if buyer_id.is_nil() {
            return Err(DomainError::InvalidId("buyer id is required".to_string()));
        }

        self.buyer_id = Some(buyer_id);
        self.agreed_price = offer_price;
        self.status = DealStatus::OfferProposed;
        self.touch(now);
        debug!(deal_id = %self.id, buyer_id = %buyer_id, "offer proposed");
        Ok(())
    }

    /// Accepts the proposed offer.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::OperationNotAllowed`] unless an offer is
    /// currently proposed.
    pub fn accept_offer(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        if self.status != DealStatus::OfferProposed {
            return Err(DomainError::OperationNotAllowed(
                "only a proposed offer can be accepted".to_string(),
            ));
        }
        self.status = DealStatus::OfferAccepted;
        self.touch(now);
        debug!(deal_id = %self.id, "offer accepted");
        Ok(())
    }

    /// Rejects the proposed offer. The buyer stays bound for audit; a new
    /// offer may follow.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::OperationNotAllowed`] unless an offer is
    /// currently proposed.
    pub fn reject_offer(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        if self.status != DealStatus::OfferProposed {
            return Err(DomainError::OperationNotAllowed(
                "only a proposed offer can be rejected".to_string(),
            ));
        }
        self.status = DealStatus::OfferRejected;
        self.touch(now);
        debug!(deal_id = %self.id, "offer rejected");
        Ok(())
    }

    /// Signs the contract, stamping it at `now`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::OperationNotAllowed`] unless the offer has
    /// been accepted, and [`DomainError::ValidationError`] for a blank
    /// contract number.
    pub fn sign_contract(
        &mut self,
        contract_number: &str,
        document_url: Option<&str>,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        if self.status != DealStatus::OfferAccepted {
            return Err(DomainError::OperationNotAllowed(
                "contract can be signed only after the offer is accepted".to_string(),
            ));
        }
        self.contract = ContractInfo::signed(contract_number, document_url, now)?;
        self.status = DealStatus::ContractSigned;
        self.touch(now);
        debug!(deal_id = %self.id, contract_number, "contract signed");
        Ok(())
    }

    /// Records a payment on the ledger.
    ///
    /// Does not change the deal status by itself; completion accounting
    /// happens in [`mark_completed`](Self::mark_completed).
    ///
    /// # Errors
    ///
    /// - [`DomainError::OperationNotAllowed`] once canceled or completed,
    ///   or while no buyer is bound
    /// - [`DomainError::CurrencyMismatch`] if the amount's currency
    ///   differs from the ledger's established one
    pub fn record_payment(
        &mut self,
        amount: Money,
        method: PaymentMethod,
        reference: Option<&str>,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        if self.status.is_terminal() {
            return Err(DomainError::OperationNotAllowed(
                "cannot record payments on canceled or completed deals".to_string(),
            ));
        }
        if self.buyer_id.is_none() {
            return Err(DomainError::OperationNotAllowed(
                "buyer must be set before payments".to_string(),
            ));
        }

        let entry = PaymentEntry::new(amount, method, now, reference);
        self.payments = self.payments.add(entry)?;
        self.touch(now);
        debug!(deal_id = %self.id, total_paid = %self.payments.total_paid(), "payment recorded");
        Ok(())
    }

    /// Attempts to complete the deal against the payment ledger.
    ///
    /// Computes `total due = agreed price + agent commission + amlaki
    /// commission` and compares it with the ledger total. When fully
    /// paid, the deal is `Completed` (terminal).
    ///
    /// **Side-effecting failure**: when a balance remains, the deal
    /// transitions to `PaymentInProgress` to record the partial state
    /// *and* the call returns [`DomainError::OutstandingBalance`] with
    /// the shortfall. Callers must not assume the failed call was a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::OperationNotAllowed`] unless the contract
    /// is signed or payments are in progress, and
    /// [`DomainError::OutstandingBalance`] on a shortfall (after the
    /// state change described above).
    pub fn mark_completed(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        if self.status != DealStatus::ContractSigned
            && self.status != DealStatus::PaymentInProgress
        {
            return Err(DomainError::OperationNotAllowed(
                "deal must have a signed contract or ongoing payments to complete".to_string(),
            ));
        }

        let shortfall = self.outstanding_balance();
        if shortfall > Decimal::ZERO {
            self.status = DealStatus::PaymentInProgress;
            self.touch(now);
            debug!(deal_id = %self.id, %shortfall, "completion blocked by outstanding balance");
            return Err(DomainError::OutstandingBalance {
                shortfall: Money::from_validated(shortfall, self.agreed_price.currency()),
            });
        }

        self.status = DealStatus::Completed;
        self.touch(now);
        debug!(deal_id = %self.id, "deal completed");
        Ok(())
    }

    /// Cancels the deal. Terminal; legal from any non-terminal state.
    ///
    /// The reason and trimmed note are kept on the aggregate and exposed
    /// via [`cancellation`](Self::cancellation).
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::OperationNotAllowed`] once completed or
    /// canceled.
    pub fn cancel(
        &mut self,
        reason: CancellationReason,
        note: Option<&str>,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        if self.status.is_terminal() {
            return Err(DomainError::OperationNotAllowed(
                "deal is already completed or canceled".to_string(),
            ));
        }
        self.status = DealStatus::Canceled;
        self.cancellation = Some(CancellationRecord::new(reason, note));
        self.touch(now);
        debug!(deal_id = %self.id, %reason, "deal canceled");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn irr(amount: i64) -> Money {
        Money::new(Decimal::new(amount, 0), "IRR").unwrap()
    }

    fn price(amount: i64) -> Price {
        Price::new(irr(amount))
    }

    /// Deal with agreed price 1000 and commissions 50 + 50: total due 1100.
    fn started_deal() -> Deal {
        Deal::start(
            PropertyId::new_v4(),
            UserId::new_v4(),
            TransactionType::Sale,
            price(1000),
            irr(50),
            irr(50),
            now(),
        )
        .unwrap()
    }

    fn signed_deal() -> Deal {
        let mut deal = started_deal();
        deal.propose_offer(UserId::new_v4(), price(1000), now()).unwrap();
        deal.accept_offer(now()).unwrap();
        deal.sign_contract("CT-1", None, now()).unwrap();
        deal
    }

    fn pay(deal: &mut Deal, amount: i64) {
        deal.record_payment(irr(amount), PaymentMethod::BankTransfer, None, now())
            .unwrap();
    }

    mod start {
        use super::*;

        #[test]
        fn starts_initiated_with_empty_artifacts() {
            let deal = started_deal();
            assert_eq!(deal.status(), DealStatus::Initiated);
            assert_eq!(deal.buyer_id(), None);
            assert!(!deal.contract().is_signed());
            assert!(deal.payments().is_empty());
            assert!(deal.cancellation().is_none());
            assert_eq!(deal.total_due(), Decimal::new(1100, 0));
        }

        #[test]
        fn nil_property_id_fails() {
            let result = Deal::start(
                PropertyId::new(uuid::Uuid::nil()),
                UserId::new_v4(),
                TransactionType::Sale,
                price(1000),
                irr(50),
                irr(50),
                now(),
            );
            assert!(matches!(result, Err(DomainError::InvalidId(_))));
        }

        #[test]
        fn nil_seller_id_fails() {
            let result = Deal::start(
                PropertyId::new_v4(),
                UserId::new(uuid::Uuid::nil()),
                TransactionType::Sale,
                price(1000),
                irr(50),
                irr(50),
                now(),
            );
            assert!(matches!(result, Err(DomainError::InvalidId(_))));
        }
    }

    mod offers {
        use super::*;

        #[test]
        fn propose_binds_buyer_and_price() {
            let mut deal = started_deal();
            let buyer = UserId::new_v4();
            deal.propose_offer(buyer, price(950), now()).unwrap();

            assert_eq!(deal.status(), DealStatus::OfferProposed);
            assert_eq!(deal.buyer_id(), Some(buyer));
            assert_eq!(deal.agreed_price(), &price(950));
        }

        #[test]
        fn propose_with_nil_buyer_fails() {
            let mut deal = started_deal();
            let result = deal.propose_offer(UserId::new(uuid::Uuid::nil()), price(950), now());
            assert!(matches!(result, Err(DomainError::InvalidId(_))));
            assert_eq!(deal.status(), DealStatus::Initiated);
        }

        #[test]
        fn propose_from_accepted_fails() {
            let mut deal = started_deal();
            deal.propose_offer(UserId::new_v4(), price(950), now()).unwrap();
            deal.accept_offer(now()).unwrap();

            let result = deal.propose_offer(UserId::new_v4(), price(900), now());
            assert!(matches!(result, Err(DomainError::OperationNotAllowed(_))));
        }

        #[test]
        fn reject_then_repropose_loops() {
            let mut deal = started_deal();
            deal.propose_offer(UserId::new_v4(), price(950), now()).unwrap();
            deal.reject_offer(now()).unwrap();
            assert_eq!(deal.status(), DealStatus::OfferRejected);

            // Rejection keeps the buyer for audit.
            assert!(deal.buyer_id().is_some());

            let second_buyer = UserId::new_v4();
            deal.propose_offer(second_buyer, price(980), now()).unwrap();
            assert_eq!(deal.status(), DealStatus::OfferProposed);
            assert_eq!(deal.buyer_id(), Some(second_buyer));
            assert_eq!(deal.agreed_price(), &price(980));
        }

        #[test]
        fn accept_requires_proposed_offer() {
            let mut deal = started_deal();
            assert!(deal.accept_offer(now()).is_err());
            assert!(deal.reject_offer(now()).is_err());
        }
    }

    mod contract {
        use super::*;

        #[test]
        fn sign_after_acceptance_stamps_now() {
            let deal = signed_deal();
            assert_eq!(deal.status(), DealStatus::ContractSigned);
            assert_eq!(deal.contract().contract_number(), Some("CT-1"));
            assert_eq!(deal.contract().signed_at(), Some(now()));
        }

        #[test]
        fn sign_before_acceptance_fails() {
            let mut deal = started_deal();
            deal.propose_offer(UserId::new_v4(), price(1000), now()).unwrap();

            let result = deal.sign_contract("CT-1", None, now());
            assert!(matches!(result, Err(DomainError::OperationNotAllowed(_))));
        }

        #[test]
        fn blank_contract_number_fails_without_transition() {
            let mut deal = started_deal();
            deal.propose_offer(UserId::new_v4(), price(1000), now()).unwrap();
            deal.accept_offer(now()).unwrap();

            let result = deal.sign_contract("   ", None, now());
            assert!(matches!(result, Err(DomainError::ValidationError(_))));
            assert_eq!(deal.status(), DealStatus::OfferAccepted);
        }
    }

    mod payments {
        use super::*;

        #[test]
        fn record_payment_appends_without_status_change() {
            let mut deal = signed_deal();
            pay(&mut deal, 600);

            assert_eq!(deal.status(), DealStatus::ContractSigned);
            assert_eq!(deal.payments().total_paid(), irr(600));
        }

        #[test]
        fn payment_requires_bound_buyer() {
            let mut deal = started_deal();
            let result = deal.record_payment(irr(100), PaymentMethod::Cash, None, now());
            assert!(matches!(result, Err(DomainError::OperationNotAllowed(_))));
        }

        #[test]
        fn payment_currency_must_match_ledger() {
            let mut deal = signed_deal();
            pay(&mut deal, 600);

            let usd = Money::new(Decimal::new(10, 0), "USD").unwrap();
            let result = deal.record_payment(usd, PaymentMethod::Cash, None, now());
            assert!(matches!(result, Err(DomainError::CurrencyMismatch { .. })));
            assert_eq!(deal.payments().entries().len(), 1);
        }

        #[test]
        fn payment_after_cancellation_fails() {
            let mut deal = signed_deal();
            deal.cancel(CancellationReason::BuyerWithdrawn, None, now()).unwrap();

            let result = deal.record_payment(irr(100), PaymentMethod::Cash, None, now());
            assert!(matches!(result, Err(DomainError::OperationNotAllowed(_))));
        }

        #[test]
        fn payment_reference_is_kept() {
            let mut deal = signed_deal();
            deal.record_payment(irr(600), PaymentMethod::Escrow, Some(" ESC-7 "), now())
                .unwrap();
            assert_eq!(deal.payments().entries()[0].reference(), Some("ESC-7"));
        }
    }

    mod completion {
        use super::*;

        #[test]
        fn shortfall_moves_to_payment_in_progress_and_errors() {
            let mut deal = signed_deal();
            pay(&mut deal, 600);

            let result = deal.mark_completed(now());
            assert_eq!(
                result,
                Err(DomainError::OutstandingBalance {
                    shortfall: irr(500)
                })
            );
            // The failure is side-effecting: state changed anyway.
            assert_eq!(deal.status(), DealStatus::PaymentInProgress);
            assert_eq!(deal.outstanding_balance(), Decimal::new(500, 0));
        }

        #[test]
        fn full_payment_completes() {
            let mut deal = signed_deal();
            pay(&mut deal, 600);
            let _ = deal.mark_completed(now());
            pay(&mut deal, 500);

            deal.mark_completed(now()).unwrap();
            assert_eq!(deal.status(), DealStatus::Completed);
            assert_eq!(deal.outstanding_balance(), Decimal::ZERO);
        }

        #[test]
        fn overpayment_completes() {
            let mut deal = signed_deal();
            pay(&mut deal, 2000);
            deal.mark_completed(now()).unwrap();
            assert_eq!(deal.status(), DealStatus::Completed);
        }

        #[test]
        fn completion_requires_contract_or_ongoing_payments() {
            let mut deal = started_deal();
            deal.propose_offer(UserId::new_v4(), price(1000), now()).unwrap();
            deal.accept_offer(now()).unwrap();

            let result = deal.mark_completed(now());
            assert!(matches!(result, Err(DomainError::OperationNotAllowed(_))));
        }

        #[test]
        fn completed_deal_blocks_everything() {
            let mut deal = signed_deal();
            pay(&mut deal, 1100);
            deal.mark_completed(now()).unwrap();

            assert!(deal
                .record_payment(irr(1), PaymentMethod::Cash, None, now())
                .is_err());
            assert!(deal.mark_completed(now()).is_err());
            assert!(deal
                .cancel(CancellationReason::Other, None, now())
                .is_err());
        }
    }

    mod cancellation {
        use super::*;

        #[test]
        fn cancel_is_reachable_from_every_non_terminal_state() {
            let mut deal = started_deal();
            deal.cancel(CancellationReason::SellerWithdrawn, Some(" changed mind "), now())
                .unwrap();
            assert_eq!(deal.status(), DealStatus::Canceled);

            let record = deal.cancellation().unwrap();
            assert_eq!(record.reason(), CancellationReason::SellerWithdrawn);
            assert_eq!(record.note(), Some("changed mind"));
        }

        #[test]
        fn cancel_from_completed_fails() {
            let mut deal = signed_deal();
            pay(&mut deal, 1100);
            deal.mark_completed(now()).unwrap();

            let result = deal.cancel(CancellationReason::Other, None, now());
            assert!(matches!(result, Err(DomainError::OperationNotAllowed(_))));
            assert_eq!(deal.status(), DealStatus::Completed);
        }

        #[test]
        fn cancel_twice_fails() {
            let mut deal = started_deal();
            deal.cancel(CancellationReason::Other, None, now()).unwrap();
            assert!(deal.cancel(CancellationReason::Other, None, now()).is_err());
        }

        #[test]
        fn blank_note_is_dropped() {
            let mut deal = started_deal();
            deal.cancel(CancellationReason::FinancingFailed, Some("   "), now())
                .unwrap();
            assert_eq!(deal.cancellation().unwrap().note(), None);
        }
    }

    mod reconstruction {
        use super::*;

        #[test]
        fn from_parts_roundtrips() {
            let mut deal = signed_deal();
            pay(&mut deal, 600);

            let copy = Deal::from_parts(
                deal.id(),
                deal.property_id(),
                deal.seller_id(),
                deal.buyer_id(),
                deal.deal_type(),
                deal.status(),
                deal.agreed_price().clone(),
                deal.agent_commission().clone(),
                deal.amlaki_commission().clone(),
                deal.contract().clone(),
                deal.payments().clone(),
                deal.cancellation().cloned(),
                deal.version(),
                deal.created_at(),
                deal.updated_at(),
            );
            assert_eq!(copy, deal);
        }

        #[test]
        fn serde_roundtrip() {
            let mut deal = signed_deal();
            pay(&mut deal, 600);
            let _ = deal.mark_completed(now());

            let json = serde_json::to_string(&deal).unwrap();
            let back: Deal = serde_json::from_str(&json).unwrap();
            assert_eq!(back, deal);
        }
    }
}

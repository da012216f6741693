//! # Property Aggregate
//!
//! A property listing with a moderated publication workflow.
//!
//! Two independent status axes track a listing:
//!
//! - [`TransactionStatus`] is the workflow axis: `Draft → Published →
//!   Closed` (terminal)
//! - [`PropertyStatus`] is the availability axis: `OffMarket ⇄ Available →
//!   Sold`
//!
//! [`ModerationStatus`] gates publication: only an approved draft with a
//! positive price and at least one photo can go live, and a rejected
//! listing is forced off the market.
//!
//! Once sold the listing is `Closed`/`Sold` with a bound buyer, and its
//! price, address, and media are frozen.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{
    Address, Amenities, AreaInfo, Commission, Interior, ListingCode, MediaCollection, MediaType,
    Notes, Price, PropertyId, PropertyType, Tag, TransactionType, UserId,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use tracing::debug;

/// Availability of a listed property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyStatus {
    /// Live and available to buyers.
    Available,

    /// Sold to a bound buyer.
    Sold,

    /// Temporarily reserved.
    Pending,

    /// Not visible on the market.
    #[default]
    OffMarket,
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Available => "AVAILABLE",
            Self::Sold => "SOLD",
            Self::Pending => "PENDING",
            Self::OffMarket => "OFF_MARKET",
        };
        write!(f, "{}", s)
    }
}

/// Workflow state of a listing.
///
/// `Closed` is terminal: a closed listing never reopens and its
/// price/address/media are immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    /// Being prepared; not visible.
    #[default]
    Draft,

    /// Live on the marketplace.
    Published,

    /// Sale concluded (terminal).
    Closed,
}

impl TransactionStatus {
    /// Returns true if this is the terminal state.
    #[inline]
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Closed)
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Draft => "DRAFT",
            Self::Published => "PUBLISHED",
            Self::Closed => "CLOSED",
        };
        write!(f, "{}", s)
    }
}

/// Moderation outcome for a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModerationStatus {
    /// Awaiting review.
    #[default]
    PendingReview,

    /// Cleared for publication.
    Approved,

    /// Rejected; may not be published.
    Rejected,
}

impl fmt::Display for ModerationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::PendingReview => "PENDING_REVIEW",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        };
        write!(f, "{}", s)
    }
}

/// A property listing.
///
/// # Invariants
///
/// - The seller id is non-nil
/// - `Sold` implies `Closed` implies a bound buyer
/// - A rejected listing is never live
/// - Price, address, and media are immutable once `Closed`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    id: PropertyId,
    code: ListingCode,
    transaction_type: TransactionType,
    status: PropertyStatus,
    transaction_status: TransactionStatus,
    moderation: ModerationStatus,
    seller_id: UserId,
    buyer_id: Option<UserId>,
    property_type: PropertyType,
    price: Price,
    area: AreaInfo,
    address: Address,
    interior: Interior,
    amenities: Amenities,
    media: MediaCollection,
    notes: Notes,
    commission: Commission,
    tags: BTreeSet<Tag>,
    version: u64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Property {
    /// Creates a listing in `Draft`/`OffMarket`/`PendingReview`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidId`] for a nil seller id.
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        code: ListingCode,
        transaction_type: TransactionType,
        seller_id: UserId,
        property_type: PropertyType,
        price: Price,
        area: AreaInfo,
        address: Address,
        interior: Interior,
        amenities: Amenities,
        media: MediaCollection,
        notes: Notes,
        commission: Commission,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if seller_id.is_nil() {
            return Err(DomainError::InvalidId("seller id is required".to_string()));
        }
        let property = Self {
            id: PropertyId::new_v4(),
            code,
            transaction_type,
            status: PropertyStatus::OffMarket,
            transaction_status: TransactionStatus::Draft,
            moderation: ModerationStatus::PendingReview,
            seller_id,
            buyer_id: None,
            property_type,
            price,
            area,
            address,
            interior,
            amenities,
            media,
            notes,
            commission,
            tags: BTreeSet::new(),
            version: 1,
            created_at: now,
            updated_at: now,
        };
        debug!(property_id = %property.id, code = %property.code, "listing created");
        Ok(property)
    }

    /// Reconstructs a listing from stored state.
    ///
    /// Bypasses validation; intended for the persistence collaborator
    /// only.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: PropertyId,
        code: ListingCode,
        transaction_type: TransactionType,
        status: PropertyStatus,
        transaction_status: TransactionStatus,
        moderation: ModerationStatus,
        seller_id: UserId,
        buyer_id: Option<UserId>,
        property_type: PropertyType,
        price: Price,
        area: AreaInfo,
        address: Address,
        interior: Interior,
        amenities: Amenities,
        media: MediaCollection,
        notes: Notes,
        commission: Commission,
        tags: BTreeSet<Tag>,
        version: u64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            code,
            transaction_type,
            status,
            transaction_status,
            moderation,
            seller_id,
            buyer_id,
            property_type,
            price,
            area,
            address,
            interior,
            amenities,
            media,
            notes,
            commission,
            tags,
            version,
            created_at,
            updated_at,
        }
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
        self.version = self.version.saturating_add(1);
    }

    fn ensure_not_closed(&self, action: &str) -> DomainResult<()> {
        if self.transaction_status == TransactionStatus::Closed {
            return Err(DomainError::OperationNotAllowed(format!(
                "closed listings cannot {}",
                action
            )));
        }
        Ok(())
    }

    // ========== Accessors ==========

    /// Returns the listing id.
    #[inline]
    #[must_use]
    pub fn id(&self) -> PropertyId {
        self.id
    }

    /// Returns the listing code.
    #[inline]
    #[must_use]
    pub fn code(&self) -> &ListingCode {
        &self.code
    }

    /// Returns the transaction type.
    #[inline]
    #[must_use]
    pub fn transaction_type(&self) -> TransactionType {
        self.transaction_type
    }

    /// Returns the availability status.
    #[inline]
    #[must_use]
    pub fn status(&self) -> PropertyStatus {
        self.status
    }

    /// Returns the workflow status.
    #[inline]
    #[must_use]
    pub fn transaction_status(&self) -> TransactionStatus {
        self.transaction_status
    }

    /// Returns the moderation status.
    #[inline]
    #[must_use]
    pub fn moderation(&self) -> ModerationStatus {
        self.moderation
    }

    /// Returns the seller id.
    #[inline]
    #[must_use]
    pub fn seller_id(&self) -> UserId {
        self.seller_id
    }

    /// Returns the buyer id, once sold.
    #[inline]
    #[must_use]
    pub fn buyer_id(&self) -> Option<UserId> {
        self.buyer_id
    }

    /// Returns the property type.
    #[inline]
    #[must_use]
    pub fn property_type(&self) -> PropertyType {
        self.property_type
    }

    /// Returns the asking price.
    #[inline]
    #[must_use]
    pub fn price(&self) -> &Price {
        &self.price
    }

    /// Returns the area information.
    #[inline]
    #[must_use]
    pub fn area(&self) -> AreaInfo {
        self.area
    }

    /// Returns the address.
    #[inline]
    #[must_use]
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Returns the interior counts.
    #[inline]
    #[must_use]
    pub fn interior(&self) -> Interior {
        self.interior
    }

    /// Returns the amenities.
    #[inline]
    #[must_use]
    pub fn amenities(&self) -> &Amenities {
        &self.amenities
    }

    /// Returns the media collection.
    #[inline]
    #[must_use]
    pub fn media(&self) -> &MediaCollection {
        &self.media
    }

    /// Returns the notes.
    #[inline]
    #[must_use]
    pub fn notes(&self) -> &Notes {
        &self.notes
    }

    /// Returns the listing commission.
    #[inline]
    #[must_use]
    pub fn commission(&self) -> &Commission {
        &self.commission
    }

    /// Returns the tag set.
    #[inline]
    #[must_use]
    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Returns the version for optimistic locking.
    #[inline]
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Returns when this listing was created.
    #[inline]
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns when this listing was last updated.
    #[inline]
    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns true once the listing is sold.
    #[inline]
    #[must_use]
    pub fn is_sold(&self) -> bool {
        self.status == PropertyStatus::Sold
    }

    // ========== Moderation ==========

    /// Approves the listing for publication.
    pub fn approve_moderation(&mut self, now: DateTime<Utc>) {
        self.moderation = ModerationStatus::Approved;
        self.touch(now);
    }

    /// Rejects the listing and forces it off the market, so a rejected
    /// listing can never remain live.
    pub fn reject_moderation(&mut self, now: DateTime<Utc>) {
        self.moderation = ModerationStatus::Rejected;
        self.unpublish(now);
        self.touch(now);
        debug!(property_id = %self.id, "listing rejected by moderation");
    }

    // ========== Publication ==========

    /// Publishes the listing: `Draft` → `Published`, `Available`.
    ///
    /// # Errors
    ///
    /// - [`DomainError::OperationNotAllowed`] unless the listing is a draft
    /// - [`DomainError::InvalidAmount`] unless the price is positive
    /// - [`DomainError::ModerationNotApproved`] unless moderation approved
    /// - [`DomainError::MissingMedia`] unless at least one photo is present
    pub fn publish(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        if self.transaction_status != TransactionStatus::Draft {
            return Err(DomainError::OperationNotAllowed(
                "only draft properties can be published".to_string(),
            ));
        }
        if !self.price.is_positive() {
            return Err(DomainError::InvalidAmount(
                "price must be > 0 to publish".to_string(),
            ));
        }
        if self.moderation != ModerationStatus::Approved {
            return Err(DomainError::ModerationNotApproved(
                "listing must be approved before publishing".to_string(),
            ));
        }
        if self.media.count_of(MediaType::Photo) < 1 {
            return Err(DomainError::MissingMedia(
                "at least one photo is required to publish".to_string(),
            ));
        }

        self.transaction_status = TransactionStatus::Published;
        self.status = PropertyStatus::Available;
        self.touch(now);
        debug!(property_id = %self.id, code = %self.code, "listing published");
        Ok(())
    }

    /// Takes a published listing off the market: `Published` → `Draft`,
    /// `OffMarket`.
    ///
    /// Idempotent: a no-op (no timestamp touch) in any other state.
    pub fn unpublish(&mut self, now: DateTime<Utc>) {
        if self.transaction_status == TransactionStatus::Published {
            self.transaction_status = TransactionStatus::Draft;
            self.status = PropertyStatus::OffMarket;
            self.touch(now);
            debug!(property_id = %self.id, "listing unpublished");
        }
    }

    // ========== Detail Mutators ==========

    /// Changes the asking price.
    ///
    /// A value-equal price is a no-op that does not touch the update
    /// stamp.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::OperationNotAllowed`] once closed.
    pub fn change_price(&mut self, new_price: Price, now: DateTime<Utc>) -> DomainResult<()> {
        self.ensure_not_closed("change price")?;
        if self.price != new_price {
            self.price = new_price;
            self.touch(now);
        }
        Ok(())
    }

    /// Replaces the address.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::OperationNotAllowed`] once closed.
    pub fn update_address(&mut self, new_address: Address, now: DateTime<Utc>) -> DomainResult<()> {
        self.ensure_not_closed("change address")?;
        self.address = new_address;
        self.touch(now);
        Ok(())
    }

    /// Replaces the media collection.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::OperationNotAllowed`] once closed.
    pub fn replace_media(&mut self, media: MediaCollection, now: DateTime<Utc>) -> DomainResult<()> {
        self.ensure_not_closed("change media")?;
        self.media = media;
        self.touch(now);
        Ok(())
    }

    /// Adds a tag; a no-op if already present. Tags do not touch the
    /// update stamp.
    pub fn add_tag(&mut self, tag: Tag) {
        self.tags.insert(tag);
    }

    /// Removes a tag; a no-op if absent.
    pub fn remove_tag(&mut self, tag: &Tag) {
        self.tags.remove(tag);
    }

    // ========== Sale ==========

    /// Marks the listing sold to `buyer_id`: sets the buyer,
    /// `Status = Sold`, `TransactionStatus = Closed`. Irreversible.
    ///
    /// # Errors
    ///
    /// - [`DomainError::OperationNotAllowed`] unless published, or if
    ///   already sold
    /// - [`DomainError::InvalidId`] for a nil buyer id
    pub fn mark_as_sold(&mut self, buyer_id: UserId, now: DateTime<Utc>) -> DomainResult<()> {
        if self.transaction_status != TransactionStatus::Published {
            return Err(DomainError::OperationNotAllowed(
                "only published listings can be sold".to_string(),
            ));
        }
        if self.status == PropertyStatus::Sold {
            return Err(DomainError::OperationNotAllowed(
                "property already sold".to_string(),
            ));
        }
        if buyer_id.is_nil() {
            return Err(DomainError::InvalidId("buyer id is required".to_string()));
        }

        self.buyer_id = Some(buyer_id);
        self.status = PropertyStatus::Sold;
        self.transaction_status = TransactionStatus::Closed;
        self.touch(now);
        debug!(property_id = %self.id, buyer_id = %buyer_id, "listing sold");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{GeoLocation, MediaItem, Money};
    use chrono::{Duration, TimeZone};
    use rust_decimal::Decimal;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn irr(amount: i64) -> Money {
        Money::new(Decimal::new(amount, 0), "IRR").unwrap()
    }

    fn price(amount: i64) -> Price {
        Price::new(irr(amount))
    }

    fn address() -> Address {
        Address::new(
            "Tehran",
            "Elahiyeh",
            "12 Maple St",
            "1915654321",
            GeoLocation::new(35.7, 51.4).unwrap(),
        )
        .unwrap()
    }

    fn one_photo() -> MediaCollection {
        MediaCollection::new([MediaItem::new("https://cdn/1.jpg", MediaType::Photo, 0).unwrap()])
            .unwrap()
    }

    fn draft_listing(price_amount: i64, media: MediaCollection) -> Property {
        Property::create(
            ListingCode::new("AMK-001").unwrap(),
            TransactionType::Sale,
            UserId::new_v4(),
            PropertyType::Apartment,
            price(price_amount),
            AreaInfo::new(Decimal::ZERO, Decimal::new(90, 0), 3).unwrap(),
            address(),
            Interior::new(2, 1, 1),
            Amenities::default(),
            media,
            Notes::new(Some("Bright corner unit"), None),
            Commission::new(irr(50)),
            now(),
        )
        .unwrap()
    }

    fn publishable_listing() -> Property {
        let mut listing = draft_listing(100, one_photo());
        listing.approve_moderation(now());
        listing
    }

    fn published_listing() -> Property {
        let mut listing = publishable_listing();
        listing.publish(now()).unwrap();
        listing
    }

    mod creation {
        use super::*;

        #[test]
        fn starts_draft_offmarket_pending_review() {
            let listing = draft_listing(100, one_photo());
            assert_eq!(listing.transaction_status(), TransactionStatus::Draft);
            assert_eq!(listing.status(), PropertyStatus::OffMarket);
            assert_eq!(listing.moderation(), ModerationStatus::PendingReview);
            assert_eq!(listing.buyer_id(), None);
            assert!(listing.tags().is_empty());
        }

        #[test]
        fn nil_seller_fails() {
            let result = Property::create(
                ListingCode::new("AMK-001").unwrap(),
                TransactionType::Sale,
                UserId::new(uuid::Uuid::nil()),
                PropertyType::Apartment,
                price(100),
                AreaInfo::new(Decimal::ZERO, Decimal::new(90, 0), 3).unwrap(),
                address(),
                Interior::new(2, 1, 1),
                Amenities::default(),
                one_photo(),
                Notes::default(),
                Commission::new(irr(50)),
                now(),
            );
            assert!(matches!(result, Err(DomainError::InvalidId(_))));
        }
    }

    mod publication {
        use super::*;

        #[test]
        fn publish_approved_draft_with_photo_and_price() {
            let mut listing = publishable_listing();
            listing.publish(now()).unwrap();
            assert_eq!(listing.transaction_status(), TransactionStatus::Published);
            assert_eq!(listing.status(), PropertyStatus::Available);
        }

        #[test]
        fn publish_twice_fails() {
            let mut listing = published_listing();
            let result = listing.publish(now());
            assert!(matches!(result, Err(DomainError::OperationNotAllowed(_))));
        }

        #[test]
        fn publish_without_approval_fails() {
            let mut listing = draft_listing(100, one_photo());
            let result = listing.publish(now());
            assert!(matches!(result, Err(DomainError::ModerationNotApproved(_))));
            assert_eq!(listing.transaction_status(), TransactionStatus::Draft);
        }

        #[test]
        fn publish_with_zero_price_fails() {
            let mut listing = draft_listing(0, one_photo());
            listing.approve_moderation(now());
            let result = listing.publish(now());
            assert!(matches!(result, Err(DomainError::InvalidAmount(_))));
        }

        #[test]
        fn publish_without_photo_fails() {
            let mut listing = draft_listing(100, MediaCollection::default());
            listing.approve_moderation(now());
            let result = listing.publish(now());
            assert!(matches!(result, Err(DomainError::MissingMedia(_))));
        }

        #[test]
        fn floor_plan_does_not_satisfy_photo_requirement() {
            let plans = MediaCollection::new([
                MediaItem::new("https://cdn/plan.png", MediaType::FloorPlan, 0).unwrap(),
            ])
            .unwrap();
            let mut listing = draft_listing(100, plans);
            listing.approve_moderation(now());
            assert!(matches!(
                listing.publish(now()),
                Err(DomainError::MissingMedia(_))
            ));
        }

        #[test]
        fn unpublish_reverts_to_draft() {
            let mut listing = published_listing();
            listing.unpublish(now());
            assert_eq!(listing.transaction_status(), TransactionStatus::Draft);
            assert_eq!(listing.status(), PropertyStatus::OffMarket);
        }

        #[test]
        fn unpublish_on_draft_is_noop() {
            let mut listing = publishable_listing();
            let version = listing.version();
            let updated = listing.updated_at();

            listing.unpublish(now() + Duration::hours(1));

            assert_eq!(listing.version(), version);
            assert_eq!(listing.updated_at(), updated);
        }

        #[test]
        fn rejection_forces_unpublish() {
            let mut listing = published_listing();
            listing.reject_moderation(now());
            assert_eq!(listing.moderation(), ModerationStatus::Rejected);
            assert_eq!(listing.transaction_status(), TransactionStatus::Draft);
            assert_eq!(listing.status(), PropertyStatus::OffMarket);
        }

        #[test]
        fn republish_after_rejection_needs_new_approval() {
            let mut listing = published_listing();
            listing.reject_moderation(now());
            assert!(matches!(
                listing.publish(now()),
                Err(DomainError::ModerationNotApproved(_))
            ));

            listing.approve_moderation(now());
            assert!(listing.publish(now()).is_ok());
        }
    }

    mod detail_mutations {
        use super::*;

        #[test]
        fn change_price_touches_on_new_value() {
            let mut listing = published_listing();
            let version = listing.version();
            listing.change_price(price(120), now()).unwrap();
            assert_eq!(listing.price(), &price(120));
            assert_eq!(listing.version(), version + 1);
        }

        #[test]
        fn change_price_equal_value_is_noop() {
            let mut listing = published_listing();
            let version = listing.version();
            let updated = listing.updated_at();

            listing
                .change_price(price(100), now() + Duration::hours(1))
                .unwrap();

            assert_eq!(listing.version(), version);
            assert_eq!(listing.updated_at(), updated);
        }

        #[test]
        fn closed_listing_freezes_details() {
            let mut listing = published_listing();
            listing.mark_as_sold(UserId::new_v4(), now()).unwrap();

            assert!(listing.change_price(price(200), now()).is_err());
            assert!(listing.update_address(address(), now()).is_err());
            assert!(listing.replace_media(one_photo(), now()).is_err());
        }

        #[test]
        fn tags_have_set_semantics() {
            let mut listing = draft_listing(100, one_photo());
            let version = listing.version();

            listing.add_tag(Tag::new("luxury").unwrap());
            listing.add_tag(Tag::new("LUXURY").unwrap());
            assert_eq!(listing.tags().len(), 1);

            listing.remove_tag(&Tag::new("luxury").unwrap());
            assert!(listing.tags().is_empty());

            // Tag changes never touch the update stamp.
            assert_eq!(listing.version(), version);
        }
    }

    mod sale {
        use super::*;

        #[test]
        fn mark_as_sold_closes_listing() {
            let mut listing = published_listing();
            let buyer = UserId::new_v4();
            listing.mark_as_sold(buyer, now()).unwrap();

            assert_eq!(listing.status(), PropertyStatus::Sold);
            assert_eq!(listing.transaction_status(), TransactionStatus::Closed);
            assert_eq!(listing.buyer_id(), Some(buyer));
            assert!(listing.is_sold());
        }

        #[test]
        fn draft_listing_cannot_be_sold() {
            let mut listing = publishable_listing();
            let result = listing.mark_as_sold(UserId::new_v4(), now());
            assert!(matches!(result, Err(DomainError::OperationNotAllowed(_))));
        }

        #[test]
        fn nil_buyer_fails() {
            let mut listing = published_listing();
            let result = listing.mark_as_sold(UserId::new(uuid::Uuid::nil()), now());
            assert!(matches!(result, Err(DomainError::InvalidId(_))));
            assert_eq!(listing.status(), PropertyStatus::Available);
        }

        #[test]
        fn sold_listing_cannot_be_sold_again() {
            let mut listing = published_listing();
            listing.mark_as_sold(UserId::new_v4(), now()).unwrap();
            let result = listing.mark_as_sold(UserId::new_v4(), now());
            assert!(matches!(result, Err(DomainError::OperationNotAllowed(_))));
        }

        #[test]
        fn sold_implies_closed_implies_buyer() {
            let mut listing = published_listing();
            listing.mark_as_sold(UserId::new_v4(), now()).unwrap();
            assert!(listing.is_sold());
            assert!(listing.transaction_status().is_terminal());
            assert!(listing.buyer_id().is_some());
        }
    }

    mod full_flow {
        use super::*;

        #[test]
        fn draft_to_sold_walkthrough() {
            // Approve, publish, reprice, and sell.
            let mut listing = draft_listing(100, one_photo());
            listing.approve_moderation(now());
            listing.publish(now()).unwrap();
            assert_eq!(listing.status(), PropertyStatus::Available);

            // Negative amounts cannot even be represented as a Price.
            assert!(Money::new(Decimal::new(-5, 0), "IRR").is_err());

            listing.mark_as_sold(UserId::new_v4(), now()).unwrap();
            assert_eq!(listing.transaction_status(), TransactionStatus::Closed);
            assert_eq!(listing.status(), PropertyStatus::Sold);
        }
    }
}

//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`UserId`], [`AgentId`], [`PropertyId`], [`DealId`], [`BrokerageId`]:
//!   UUID-based identifiers
//!
//! ## Monetary Types
//!
//! - [`Money`]: currency-tagged, never-negative decimal amount
//! - [`Price`]: listing/deal price
//! - [`CommissionSplit`], [`Commission`]: commission percentages and fees
//! - [`PaymentEntry`], [`PaymentLedger`]: append-only payment record
//!
//! ## Compliance Types
//!
//! - [`VerificationSnapshot`]: email/phone/KYC state with the agent
//!   prerequisite predicate
//! - [`AgentLicense`], [`LicenseStatus`]: license validity window
//! - [`BrokerageAffiliation`]: open/closed membership interval
//! - [`AgentDocument`], [`AgentDocuments`], [`DocumentType`]: uploaded
//!   documents and the required-set check
//! - [`ServiceAreas`]: case-normalized coverage areas
//!
//! ## Listing Types
//!
//! - [`ListingCode`]: 3-16 char business key
//! - [`MediaItem`], [`MediaCollection`], [`MediaType`]: listing media
//! - [`Address`], [`GeoLocation`]: location
//! - [`AreaInfo`], [`Interior`], [`Amenities`], [`Notes`]: attributes
//! - [`Tag`]: normalized listing tag
//!
//! ## Deal Types
//!
//! - [`DealStatus`]: deal lifecycle state machine
//! - [`ContractInfo`]: empty-until-signed contract record
//! - [`PaymentMethod`], [`CancellationReason`]: deal enums

pub mod address;
pub mod affiliation;
pub mod commission;
pub mod contract;
pub mod deal_status;
pub mod details;
pub mod documents;
pub mod enums;
pub mod ids;
pub mod license;
pub mod listing_code;
pub mod media;
pub mod money;
pub mod payment;
pub mod price;
pub mod service_areas;
pub mod tag;
pub mod verification;

#[cfg(test)]
mod tests;

pub use address::{Address, GeoLocation};
pub use affiliation::BrokerageAffiliation;
pub use commission::{Commission, CommissionSplit, MAX_AGENT_PERCENT};
pub use contract::ContractInfo;
pub use deal_status::DealStatus;
pub use details::{Amenities, AreaInfo, CoolingSystem, Furnishing, HeatingSystem, Interior, Notes};
pub use documents::{AgentDocument, AgentDocuments, DocumentType};
pub use enums::{CancellationReason, PropertyType, TransactionType};
pub use ids::{AgentId, BrokerageId, DealId, PropertyId, UserId};
pub use license::{AgentLicense, LicenseStatus};
pub use listing_code::{ListingCode, MAX_CODE_LEN, MIN_CODE_LEN};
pub use media::{MediaCollection, MediaItem, MediaType, MAX_MEDIA_ITEMS};
pub use money::{Money, DEFAULT_CURRENCY};
pub use payment::{PaymentEntry, PaymentLedger, PaymentMethod};
pub use price::Price;
pub use service_areas::ServiceAreas;
pub use tag::Tag;
pub use verification::VerificationSnapshot;

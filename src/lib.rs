//! # Amlaki Domain
//!
//! Aggregate lifecycle and invariant-enforcement engine for a real-estate
//! marketplace: agents with licensing and compliance gates, property
//! listings with a publication workflow, and deals tracking offers,
//! contracts, and payments to completion.
//!
//! ## Architecture
//!
//! This crate is the domain layer of a Domain-Driven Design system:
//!
//! - **Entities** (`domain::entities`): the [`Agent`], [`Property`], and
//!   [`Deal`] aggregate roots with enforced state machines
//! - **Value Objects** (`domain::value_objects`): immutable, validated
//!   types (money, ledger, license, media, ...) owned by the aggregates
//! - **Errors** (`domain::errors`): typed business-rule violations
//!
//! Persistence, transport, identity, and blob storage are external
//! collaborators. Every aggregate is loaded, mutated by exactly one
//! transition call, and handed back; no operation here performs I/O.
//! Time-sensitive operations take an explicit `now` so tests can supply
//! fixed clocks.
//!
//! ## Example
//!
//! ```rust
//! use amlaki_domain::domain::entities::Deal;
//! use amlaki_domain::domain::value_objects::{
//!     Money, Price, PropertyId, TransactionType, UserId,
//! };
//! use chrono::Utc;
//! use rust_decimal::Decimal;
//!
//! let now = Utc::now();
//! let price = Price::new(Money::new(Decimal::new(1000, 0), "IRR").unwrap());
//! let commission = Money::new(Decimal::new(50, 0), "IRR").unwrap();
//!
//! let mut deal = Deal::start(
//!     PropertyId::new_v4(),
//!     UserId::new_v4(),
//!     TransactionType::Sale,
//!     price.clone(),
//!     commission.clone(),
//!     commission,
//!     now,
//! )
//! .unwrap();
//!
//! deal.propose_offer(UserId::new_v4(), price, now).unwrap();
//! deal.accept_offer(now).unwrap();
//! ```
//!
//! [`Agent`]: domain::entities::Agent
//! [`Property`]: domain::entities::Property
//! [`Deal`]: domain::entities::Deal

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod domain;

//! # Brokerage Affiliation
//!
//! An agent's membership interval at a brokerage: open while no end
//! instant is set, closed once ended. Ending returns a new closed copy.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::ids::BrokerageId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An agent's affiliation with a brokerage.
///
/// # Invariants
///
/// - Brokerage id is non-nil, name is non-blank
/// - The end instant, when set, lies strictly after the start
///
/// # Examples
///
/// ```
/// use amlaki_domain::domain::value_objects::{BrokerageAffiliation, BrokerageId};
/// use chrono::{TimeZone, Utc};
///
/// let started = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
/// let affiliation =
///     BrokerageAffiliation::new(BrokerageId::new_v4(), "North Realty", started).unwrap();
/// assert!(affiliation.is_active());
///
/// let ended = affiliation.end(started + chrono::Duration::days(90)).unwrap();
/// assert!(!ended.is_active());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BrokerageAffiliation {
    brokerage_id: BrokerageId,
    brokerage_name: String,
    started_at: DateTime<Utc>,
    ended_at: Option<DateTime<Utc>>,
}

impl BrokerageAffiliation {
    /// Creates an open affiliation starting at `started_at`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidId`] for a nil brokerage id and
    /// [`DomainError::ValidationError`] for a blank name.
    pub fn new(
        brokerage_id: BrokerageId,
        brokerage_name: impl AsRef<str>,
        started_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if brokerage_id.is_nil() {
            return Err(DomainError::InvalidId("brokerage id is required".to_string()));
        }
        let brokerage_name = brokerage_name.as_ref().trim();
        if brokerage_name.is_empty() {
            return Err(DomainError::ValidationError(
                "brokerage name is required".to_string(),
            ));
        }
        Ok(Self {
            brokerage_id,
            brokerage_name: brokerage_name.to_string(),
            started_at,
            ended_at: None,
        })
    }

    /// Returns the brokerage id.
    #[inline]
    #[must_use]
    pub const fn brokerage_id(&self) -> BrokerageId {
        self.brokerage_id
    }

    /// Returns the brokerage name.
    #[inline]
    #[must_use]
    pub fn brokerage_name(&self) -> &str {
        &self.brokerage_name
    }

    /// Returns when the affiliation started.
    #[inline]
    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Returns when the affiliation ended, if it has.
    #[inline]
    #[must_use]
    pub const fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }

    /// Returns true while no end instant is set.
    #[inline]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.ended_at.is_none()
    }

    /// Returns a closed copy ending at `ended_at`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidInterval`] if the end is not strictly
    /// after the start.
    pub fn end(&self, ended_at: DateTime<Utc>) -> DomainResult<Self> {
        if ended_at <= self.started_at {
            return Err(DomainError::InvalidInterval(
                "end date must be after start date".to_string(),
            ));
        }
        Ok(Self {
            ended_at: Some(ended_at),
            ..self.clone()
        })
    }
}

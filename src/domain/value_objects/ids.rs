//! # Identity Value Objects
//!
//! Type-safe identity wrappers for domain identifiers.
//!
//! This module provides newtype wrappers for all domain identifiers,
//! ensuring type safety and preventing accidental mixing of different
//! ID types. All identifiers are UUID-based:
//!
//! - [`UserId`] - Platform user identifier (sellers, buyers, agents' owners)
//! - [`AgentId`] - Agent aggregate identifier
//! - [`PropertyId`] - Property listing identifier
//! - [`DealId`] - Deal (transaction) identifier
//! - [`BrokerageId`] - Brokerage identifier

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! uuid_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        ///
        /// A UUID-based identifier. The nil UUID is constructible but
        /// rejected wherever the domain requires a bound identity
        /// (see [`is_nil`](Self::is_nil)).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates an identifier from an existing UUID.
            #[inline]
            #[must_use]
            pub const fn new(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Generates a new random identifier using UUID v4.
            #[must_use]
            pub fn new_v4() -> Self {
                Self(Uuid::new_v4())
            }

            /// Returns the inner UUID value.
            #[inline]
            #[must_use]
            pub const fn get(self) -> Uuid {
                self.0
            }

            /// Returns true if this is the nil (all-zero) UUID.
            #[inline]
            #[must_use]
            pub fn is_nil(self) -> bool {
                self.0.is_nil()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0.hyphenated())
            }
        }

        impl From<Uuid> for $name {
            #[inline]
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }
    };
}

uuid_id! {
    /// Platform user identifier.
    ///
    /// Identifies a user account across aggregates: the seller and buyer of
    /// a property or deal, and the account an agent profile belongs to.
    UserId
}

uuid_id! {
    /// Agent aggregate identifier.
    AgentId
}

uuid_id! {
    /// Property listing identifier.
    PropertyId
}

uuid_id! {
    /// Deal (transaction) identifier.
    DealId
}

uuid_id! {
    /// Brokerage identifier.
    BrokerageId
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_v4_is_not_nil() {
        assert!(!UserId::new_v4().is_nil());
        assert!(!AgentId::new_v4().is_nil());
        assert!(!PropertyId::new_v4().is_nil());
        assert!(!DealId::new_v4().is_nil());
        assert!(!BrokerageId::new_v4().is_nil());
    }

    #[test]
    fn nil_is_detected() {
        assert!(UserId::new(Uuid::nil()).is_nil());
    }

    #[test]
    fn ids_roundtrip_through_uuid() {
        let uuid = Uuid::new_v4();
        let id = PropertyId::new(uuid);
        assert_eq!(id.get(), uuid);
        assert_eq!(PropertyId::from(uuid), id);
    }

    #[test]
    fn display_is_hyphenated() {
        let id = DealId::new_v4();
        let s = id.to_string();
        assert_eq!(s.len(), 36);
        assert_eq!(s.matches('-').count(), 4);
    }

    #[test]
    fn serde_is_transparent() {
        let id = UserId::new_v4();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
        let back: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}

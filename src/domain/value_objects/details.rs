//! # Property Details
//!
//! Descriptive attributes of a listed property: floor areas, interior
//! counts, amenities, and free-text notes.

use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Land and built areas in square meters, plus the floor number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AreaRepr", into = "AreaRepr")]
pub struct AreaInfo {
    land_sqm: Decimal,
    built_sqm: Decimal,
    floor_number: i32,
}

#[derive(Serialize, Deserialize)]
struct AreaRepr {
    land_sqm: Decimal,
    built_sqm: Decimal,
    floor_number: i32,
}

impl AreaInfo {
    /// Creates area information.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidAmount`] if the land area is negative
    /// or the built area is not positive.
    pub fn new(land_sqm: Decimal, built_sqm: Decimal, floor_number: i32) -> DomainResult<Self> {
        if land_sqm.is_sign_negative() {
            return Err(DomainError::InvalidAmount(
                "land area cannot be negative".to_string(),
            ));
        }
        if built_sqm <= Decimal::ZERO {
            return Err(DomainError::InvalidAmount(
                "built area must be positive".to_string(),
            ));
        }
        Ok(Self {
            land_sqm,
            built_sqm,
            floor_number,
        })
    }

    /// Returns the land area in square meters.
    #[inline]
    #[must_use]
    pub const fn land_sqm(&self) -> Decimal {
        self.land_sqm
    }

    /// Returns the built area in square meters.
    #[inline]
    #[must_use]
    pub const fn built_sqm(&self) -> Decimal {
        self.built_sqm
    }

    /// Returns the floor number (negative for basements).
    #[inline]
    #[must_use]
    pub const fn floor_number(&self) -> i32 {
        self.floor_number
    }
}

impl TryFrom<AreaRepr> for AreaInfo {
    type Error = DomainError;

    fn try_from(repr: AreaRepr) -> Result<Self, Self::Error> {
        Self::new(repr.land_sqm, repr.built_sqm, repr.floor_number)
    }
}

impl From<AreaInfo> for AreaRepr {
    fn from(area: AreaInfo) -> Self {
        Self {
            land_sqm: area.land_sqm,
            built_sqm: area.built_sqm,
            floor_number: area.floor_number,
        }
    }
}

/// Interior room and parking counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "InteriorRepr", into = "InteriorRepr")]
pub struct Interior {
    bedrooms: u16,
    bathrooms: u16,
    parking: u16,
}

#[derive(Serialize, Deserialize)]
struct InteriorRepr {
    bedrooms: u16,
    bathrooms: u16,
    parking: u16,
}

impl Interior {
    /// Creates interior counts.
    #[inline]
    #[must_use]
    pub const fn new(bedrooms: u16, bathrooms: u16, parking: u16) -> Self {
        Self {
            bedrooms,
            bathrooms,
            parking,
        }
    }

    /// Returns the bedroom count.
    #[inline]
    #[must_use]
    pub const fn bedrooms(&self) -> u16 {
        self.bedrooms
    }

    /// Returns the bathroom count.
    #[inline]
    #[must_use]
    pub const fn bathrooms(&self) -> u16 {
        self.bathrooms
    }

    /// Returns the parking-spot count.
    #[inline]
    #[must_use]
    pub const fn parking(&self) -> u16 {
        self.parking
    }
}

impl TryFrom<InteriorRepr> for Interior {
    type Error = DomainError;

    fn try_from(repr: InteriorRepr) -> Result<Self, Self::Error> {
        Ok(Self::new(repr.bedrooms, repr.bathrooms, repr.parking))
    }
}

impl From<Interior> for InteriorRepr {
    fn from(interior: Interior) -> Self {
        Self {
            bedrooms: interior.bedrooms,
            bathrooms: interior.bathrooms,
            parking: interior.parking,
        }
    }
}

/// Heating system of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HeatingSystem {
    /// No dedicated heating.
    #[default]
    None,
    /// Central building heating.
    Central,
    /// Per-unit package heater.
    Package,
    /// Floor heating.
    Radiant,
}

/// Cooling system of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CoolingSystem {
    /// No dedicated cooling.
    #[default]
    None,
    /// Evaporative (swamp) cooler.
    Evaporative,
    /// Split air conditioning.
    Split,
    /// Central chiller.
    Chiller,
}

/// Furnishing level of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Furnishing {
    /// No furniture included.
    #[default]
    Unfurnished,
    /// Partially furnished.
    Partial,
    /// Fully furnished.
    Full,
}

/// Amenity flags and equipment of a property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amenities {
    elevator: bool,
    balcony: bool,
    garden_sqm: Option<Decimal>,
    heating: HeatingSystem,
    cooling: CoolingSystem,
    furnishing: Furnishing,
    special_items: Vec<String>,
}

impl Amenities {
    /// Creates an amenity record.
    ///
    /// Special items are trimmed, blanks dropped, duplicates removed.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidAmount`] if the garden size is
    /// negative.
    pub fn new<I, S>(
        elevator: bool,
        balcony: bool,
        garden_sqm: Option<Decimal>,
        heating: HeatingSystem,
        cooling: CoolingSystem,
        furnishing: Furnishing,
        special_items: I,
    ) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if let Some(garden) = garden_sqm {
            if garden.is_sign_negative() {
                return Err(DomainError::InvalidAmount(
                    "garden size cannot be negative".to_string(),
                ));
            }
        }
        let mut items: Vec<String> = Vec::new();
        for item in special_items {
            let item = item.as_ref().trim();
            if item.is_empty() {
                continue;
            }
            if !items.iter().any(|existing| existing.as_str() == item) {
                items.push(item.to_string());
            }
        }
        Ok(Self {
            elevator,
            balcony,
            garden_sqm,
            heating,
            cooling,
            furnishing,
            special_items: items,
        })
    }

    /// Returns true if the building has an elevator.
    #[inline]
    #[must_use]
    pub const fn elevator(&self) -> bool {
        self.elevator
    }

    /// Returns true if the unit has a balcony.
    #[inline]
    #[must_use]
    pub const fn balcony(&self) -> bool {
        self.balcony
    }

    /// Returns the garden size in square meters, if any.
    #[inline]
    #[must_use]
    pub const fn garden_sqm(&self) -> Option<Decimal> {
        self.garden_sqm
    }

    /// Returns the heating system.
    #[inline]
    #[must_use]
    pub const fn heating(&self) -> HeatingSystem {
        self.heating
    }

    /// Returns the cooling system.
    #[inline]
    #[must_use]
    pub const fn cooling(&self) -> CoolingSystem {
        self.cooling
    }

    /// Returns the furnishing level.
    #[inline]
    #[must_use]
    pub const fn furnishing(&self) -> Furnishing {
        self.furnishing
    }

    /// Returns the special equipment items.
    #[inline]
    #[must_use]
    pub fn special_items(&self) -> &[String] {
        &self.special_items
    }
}

impl Default for Amenities {
    fn default() -> Self {
        Self {
            elevator: false,
            balcony: false,
            garden_sqm: None,
            heating: HeatingSystem::default(),
            cooling: CoolingSystem::default(),
            furnishing: Furnishing::default(),
            special_items: Vec::new(),
        }
    }
}

/// Public description and internal notes for a listing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Notes {
    public_text: String,
    internal_notes: Option<String>,
}

impl Notes {
    /// Creates a notes record. The public text defaults to empty; blank
    /// internal notes are stored as `None`.
    #[must_use]
    pub fn new(public_text: Option<&str>, internal_notes: Option<&str>) -> Self {
        let public_text = public_text.unwrap_or("").trim().to_string();
        let internal_notes = internal_notes
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);
        Self {
            public_text,
            internal_notes,
        }
    }

    /// Returns the public description text.
    #[inline]
    #[must_use]
    pub fn public_text(&self) -> &str {
        &self.public_text
    }

    /// Returns the internal notes, if any.
    #[inline]
    #[must_use]
    pub fn internal_notes(&self) -> Option<&str> {
        self.internal_notes.as_deref()
    }
}

//! # Address
//!
//! Postal address and geographic location of a listed property.

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A geographic coordinate pair.
///
/// Latitude is restricted to [-90, 90] and longitude to [-180, 180].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LocationRepr", into = "LocationRepr")]
pub struct GeoLocation {
    latitude: f64,
    longitude: f64,
}

#[derive(Serialize, Deserialize)]
struct LocationRepr {
    latitude: f64,
    longitude: f64,
}

impl GeoLocation {
    /// Creates a coordinate pair.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidLocation`] if either coordinate is
    /// out of range.
    pub fn new(latitude: f64, longitude: f64) -> DomainResult<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(DomainError::InvalidLocation(
                "latitude out of range".to_string(),
            ));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::InvalidLocation(
                "longitude out of range".to_string(),
            ));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Returns the latitude in degrees.
    #[inline]
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude in degrees.
    #[inline]
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

impl TryFrom<LocationRepr> for GeoLocation {
    type Error = DomainError;

    fn try_from(repr: LocationRepr) -> Result<Self, Self::Error> {
        Self::new(repr.latitude, repr.longitude)
    }
}

impl From<GeoLocation> for LocationRepr {
    fn from(loc: GeoLocation) -> Self {
        Self {
            latitude: loc.latitude,
            longitude: loc.longitude,
        }
    }
}

/// A postal address with a geographic location.
///
/// All textual components are required and trimmed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    city: String,
    neighborhood: String,
    line: String,
    postal_code: String,
    location: GeoLocation,
}

impl Address {
    /// Creates an address.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ValidationError`] if any textual component
    /// is blank.
    pub fn new(
        city: impl AsRef<str>,
        neighborhood: impl AsRef<str>,
        line: impl AsRef<str>,
        postal_code: impl AsRef<str>,
        location: GeoLocation,
    ) -> DomainResult<Self> {
        let required = |value: &str, name: &str| -> DomainResult<String> {
            let value = value.trim();
            if value.is_empty() {
                return Err(DomainError::ValidationError(format!("{} is required", name)));
            }
            Ok(value.to_string())
        };
        Ok(Self {
            city: required(city.as_ref(), "city")?,
            neighborhood: required(neighborhood.as_ref(), "neighborhood")?,
            line: required(line.as_ref(), "address line")?,
            postal_code: required(postal_code.as_ref(), "postal code")?,
            location,
        })
    }

    /// Returns the city.
    #[inline]
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Returns the neighborhood.
    #[inline]
    #[must_use]
    pub fn neighborhood(&self) -> &str {
        &self.neighborhood
    }

    /// Returns the street line.
    #[inline]
    #[must_use]
    pub fn line(&self) -> &str {
        &self.line
    }

    /// Returns the postal code.
    #[inline]
    #[must_use]
    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    /// Returns the geographic location.
    #[inline]
    #[must_use]
    pub const fn location(&self) -> GeoLocation {
        self.location
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn location() -> GeoLocation {
        GeoLocation::new(35.7, 51.4).unwrap()
    }

    #[test]
    fn latitude_out_of_range_fails() {
        assert!(GeoLocation::new(91.0, 0.0).is_err());
        assert!(GeoLocation::new(-91.0, 0.0).is_err());
    }

    #[test]
    fn longitude_out_of_range_fails() {
        assert!(GeoLocation::new(0.0, 181.0).is_err());
        assert!(GeoLocation::new(0.0, -181.0).is_err());
    }

    #[test]
    fn boundary_coordinates_accepted() {
        assert!(GeoLocation::new(90.0, 180.0).is_ok());
        assert!(GeoLocation::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn address_components_are_trimmed() {
        let addr = Address::new(" Tehran ", "Elahiyeh", "12 Maple St", "19... ", location())
            .unwrap();
        assert_eq!(addr.city(), "Tehran");
        assert_eq!(addr.postal_code(), "19...");
    }

    #[test]
    fn blank_component_fails() {
        let result = Address::new("Tehran", "  ", "12 Maple St", "191", location());
        assert!(matches!(result, Err(DomainError::ValidationError(_))));
    }

    #[test]
    fn location_display() {
        assert_eq!(location().to_string(), "35.7,51.4");
    }
}

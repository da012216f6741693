//! # Service Areas
//!
//! The cities or regions an agent covers. Names are trimmed, lowercased,
//! and deduplicated; at least one area is required for activation (checked
//! by the agent aggregate, not here — an empty set is a valid value).

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// Case-normalized, unique set of service area names.
///
/// # Examples
///
/// ```
/// use amlaki_domain::domain::value_objects::ServiceAreas;
///
/// let areas = ServiceAreas::new(["Tehran", "tehran", " Karaj "]).unwrap();
/// assert_eq!(areas.len(), 2);
/// assert!(areas.contains("TEHRAN"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ServiceAreas {
    areas: Vec<String>,
}

impl ServiceAreas {
    /// Creates a set of areas, normalizing and deduplicating the input.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ValidationError`] if any area name is blank.
    pub fn new<I, S>(areas: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for area in areas {
            let area = area.as_ref().trim().to_lowercase();
            if area.is_empty() {
                return Err(DomainError::ValidationError(
                    "service area name is required".to_string(),
                ));
            }
            if !normalized.contains(&area) {
                normalized.push(area);
            }
        }
        Ok(Self { areas: normalized })
    }

    /// Returns the normalized area names in insertion order.
    #[inline]
    #[must_use]
    pub fn areas(&self) -> &[String] {
        &self.areas
    }

    /// Returns the number of distinct areas.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    /// Returns true if no area is configured.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    /// Returns true if the given city or region is covered
    /// (case-insensitive).
    #[must_use]
    pub fn contains(&self, city_or_region: &str) -> bool {
        let needle = city_or_region.trim().to_lowercase();
        self.areas.contains(&needle)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_and_dedupes() {
        let areas = ServiceAreas::new(["Tehran", "TEHRAN", " tehran "]).unwrap();
        assert_eq!(areas.areas(), &["tehran".to_string()]);
    }

    #[test]
    fn blank_area_fails() {
        assert!(matches!(
            ServiceAreas::new(["Tehran", "  "]),
            Err(DomainError::ValidationError(_))
        ));
    }

    #[test]
    fn empty_set_is_valid_value() {
        let areas = ServiceAreas::new(Vec::<String>::new()).unwrap();
        assert!(areas.is_empty());
    }

    #[test]
    fn contains_is_case_insensitive() {
        let areas = ServiceAreas::new(["Karaj"]).unwrap();
        assert!(areas.contains("KARAJ"));
        assert!(areas.contains(" karaj "));
        assert!(!areas.contains("tehran"));
    }
}

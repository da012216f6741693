//! # Listing Code
//!
//! The public business key of a property listing.
//!
//! Codes are 3 to 16 characters of letters, digits, dashes, or
//! underscores, normalized to uppercase. Uniqueness across listings is a
//! persistence concern; the domain only guarantees the format.

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minimum listing code length.
pub const MIN_CODE_LEN: usize = 3;

/// Maximum listing code length.
pub const MAX_CODE_LEN: usize = 16;

/// A validated, case-normalized listing code.
///
/// # Examples
///
/// ```
/// use amlaki_domain::domain::value_objects::ListingCode;
///
/// let code = ListingCode::new("amk-2025-001").unwrap();
/// assert_eq!(code.as_str(), "AMK-2025-001");
///
/// assert!(ListingCode::new("ab").is_err());
/// assert!(ListingCode::new("has space").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ListingCode(String);

impl ListingCode {
    /// Creates a listing code from a string.
    ///
    /// The input is trimmed and uppercased.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidListingCode`] if the code is blank,
    /// outside the 3-16 character range, or contains characters other
    /// than letters, digits, `-`, and `_`.
    pub fn new(code: impl AsRef<str>) -> DomainResult<Self> {
        let code = code.as_ref().trim();
        if code.is_empty() {
            return Err(DomainError::InvalidListingCode(
                "listing code is required".to_string(),
            ));
        }
        let code = code.to_uppercase();
        if code.len() < MIN_CODE_LEN || code.len() > MAX_CODE_LEN {
            return Err(DomainError::InvalidListingCode(format!(
                "listing code length must be {}-{}",
                MIN_CODE_LEN, MAX_CODE_LEN
            )));
        }
        if !code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(DomainError::InvalidListingCode(
                "listing code contains invalid characters".to_string(),
            ));
        }
        Ok(Self(code))
    }

    /// Returns the normalized code.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ListingCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ListingCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ListingCode> for String {
    fn from(code: ListingCode) -> Self {
        code.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn valid_code_is_uppercased() {
        assert_eq!(ListingCode::new("amk-001").unwrap().as_str(), "AMK-001");
    }

    #[test]
    fn underscores_are_allowed() {
        assert!(ListingCode::new("AMK_001").is_ok());
    }

    #[test]
    fn min_and_max_lengths_accepted() {
        assert!(ListingCode::new("ABC").is_ok());
        assert!(ListingCode::new("A234567890123456").is_ok());
    }

    #[test]
    fn too_short_fails() {
        assert!(matches!(
            ListingCode::new("AB"),
            Err(DomainError::InvalidListingCode(_))
        ));
    }

    #[test]
    fn too_long_fails() {
        assert!(ListingCode::new("A2345678901234567").is_err());
    }

    #[test]
    fn blank_fails() {
        assert!(ListingCode::new("   ").is_err());
    }

    #[test]
    fn invalid_characters_fail() {
        assert!(ListingCode::new("AMK 001").is_err());
        assert!(ListingCode::new("AMK#001").is_err());
    }

    #[test]
    fn parse_from_str() {
        let code: ListingCode = "amk-7".parse().unwrap();
        assert_eq!(code.as_str(), "AMK-7");
    }

    #[test]
    fn serde_validates_on_deserialize() {
        let result: Result<ListingCode, _> = serde_json::from_str("\"x\"");
        assert!(result.is_err());
        let code: ListingCode = serde_json::from_str("\"amk-9\"").unwrap();
        assert_eq!(code.as_str(), "AMK-9");
    }
}

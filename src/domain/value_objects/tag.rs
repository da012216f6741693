//! # Tag
//!
//! Free-form listing tag, lowercased for set semantics.

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A normalized listing tag.
///
/// # Examples
///
/// ```
/// use amlaki_domain::domain::value_objects::Tag;
///
/// let tag = Tag::new(" Luxury ").unwrap();
/// assert_eq!(tag.as_str(), "luxury");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    /// Creates a tag, trimming and lowercasing the input.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ValidationError`] if the tag is blank.
    pub fn new(value: impl AsRef<str>) -> DomainResult<Self> {
        let value = value.as_ref().trim().to_lowercase();
        if value.is_empty() {
            return Err(DomainError::ValidationError("tag is required".to_string()));
        }
        Ok(Self(value))
    }

    /// Returns the normalized tag text.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Tag {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.0
    }
}

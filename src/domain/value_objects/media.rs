//! # Listing Media
//!
//! Photos, videos, and floor plans attached to a listing.
//!
//! The blob store owns the bytes; the domain sees URLs. A
//! [`MediaCollection`] deduplicates by (url, type), orders by sort order,
//! and caps the collection at [`MAX_MEDIA_ITEMS`]. Publication requires at
//! least one photo, checked by the property aggregate via
//! [`count_of`](MediaCollection::count_of).

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of media items per listing.
pub const MAX_MEDIA_ITEMS: usize = 50;

/// Kind of media attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaType {
    /// Listing photo.
    Photo,

    /// Walkthrough or drone video.
    Video,

    /// Floor plan drawing.
    FloorPlan,
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Photo => "PHOTO",
            Self::Video => "VIDEO",
            Self::FloorPlan => "FLOOR_PLAN",
        };
        write!(f, "{}", s)
    }
}

/// A single media attachment.
///
/// Identity is (url, type); the sort order is presentation metadata and
/// does not participate in equality.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaItem {
    url: String,
    media_type: MediaType,
    sort_order: i32,
}

impl MediaItem {
    /// Creates a media item.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ValidationError`] if the URL is blank.
    pub fn new(
        url: impl AsRef<str>,
        media_type: MediaType,
        sort_order: i32,
    ) -> DomainResult<Self> {
        let url = url.as_ref().trim();
        if url.is_empty() {
            return Err(DomainError::ValidationError(
                "media url is required".to_string(),
            ));
        }
        Ok(Self {
            url: url.to_string(),
            media_type,
            sort_order,
        })
    }

    /// Returns the media URL.
    #[inline]
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the media type.
    #[inline]
    #[must_use]
    pub const fn media_type(&self) -> MediaType {
        self.media_type
    }

    /// Returns the presentation sort order.
    #[inline]
    #[must_use]
    pub const fn sort_order(&self) -> i32 {
        self.sort_order
    }
}

impl PartialEq for MediaItem {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url && self.media_type == other.media_type
    }
}

impl Eq for MediaItem {}

/// An ordered, deduplicated media collection.
///
/// # Examples
///
/// ```
/// use amlaki_domain::domain::value_objects::{MediaCollection, MediaItem, MediaType};
///
/// let media = MediaCollection::new([
///     MediaItem::new("https://cdn/2.jpg", MediaType::Photo, 2).unwrap(),
///     MediaItem::new("https://cdn/1.jpg", MediaType::Photo, 1).unwrap(),
/// ])
/// .unwrap();
///
/// assert_eq!(media.count_of(MediaType::Photo), 2);
/// assert_eq!(media.items()[0].url(), "https://cdn/1.jpg");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MediaCollection {
    items: Vec<MediaItem>,
}

impl MediaCollection {
    /// Creates a collection, deduplicating by (url, type) and sorting by
    /// sort order (stable for equal orders).
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ValidationError`] if more than
    /// [`MAX_MEDIA_ITEMS`] distinct items remain after deduplication.
    pub fn new(items: impl IntoIterator<Item = MediaItem>) -> DomainResult<Self> {
        let mut unique: Vec<MediaItem> = Vec::new();
        for item in items {
            if !unique.contains(&item) {
                unique.push(item);
            }
        }
        if unique.len() > MAX_MEDIA_ITEMS {
            return Err(DomainError::ValidationError(format!(
                "maximum {} media items allowed",
                MAX_MEDIA_ITEMS
            )));
        }
        unique.sort_by_key(MediaItem::sort_order);
        Ok(Self { items: unique })
    }

    /// Returns the items sorted by sort order.
    #[inline]
    #[must_use]
    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    /// Returns true if the collection is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items of the given type.
    #[must_use]
    pub fn count_of(&self, media_type: MediaType) -> usize {
        self.items
            .iter()
            .filter(|i| i.media_type == media_type)
            .count()
    }
}

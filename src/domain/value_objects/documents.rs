//! # Agent Documents
//!
//! Uploaded compliance documents and the required-set check that gates
//! agent activation.
//!
//! The blob store owns the bytes; the domain only sees URLs and upload
//! timestamps. [`AgentDocuments`] is a duplicate-free collection replaced
//! wholesale on every addition.

use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of compliance document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
    /// Scan of the real-estate license.
    License,

    /// Government-issued identity proof.
    IdProof,

    /// Profile photo shown on listings.
    ProfilePhoto,

    /// Any other supporting document.
    Other,
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::License => "LICENSE",
            Self::IdProof => "ID_PROOF",
            Self::ProfilePhoto => "PROFILE_PHOTO",
            Self::Other => "OTHER",
        };
        write!(f, "{}", s)
    }
}

/// A single uploaded document.
///
/// Identity is structural: two documents are the same iff type, URL, and
/// upload instant all match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentDocument {
    doc_type: DocumentType,
    url: String,
    uploaded_at: DateTime<Utc>,
}

impl AgentDocument {
    /// Creates a document reference.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ValidationError`] if the URL is blank.
    pub fn new(
        doc_type: DocumentType,
        url: impl AsRef<str>,
        uploaded_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let url = url.as_ref().trim();
        if url.is_empty() {
            return Err(DomainError::ValidationError(
                "document url is required".to_string(),
            ));
        }
        Ok(Self {
            doc_type,
            url: url.to_string(),
            uploaded_at,
        })
    }

    /// Returns the document type.
    #[inline]
    #[must_use]
    pub const fn doc_type(&self) -> DocumentType {
        self.doc_type
    }

    /// Returns the stored URL.
    #[inline]
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns when the document was uploaded.
    #[inline]
    #[must_use]
    pub const fn uploaded_at(&self) -> DateTime<Utc> {
        self.uploaded_at
    }
}

/// A duplicate-free collection of uploaded documents.
///
/// # Examples
///
/// ```
/// use amlaki_domain::domain::value_objects::{AgentDocument, AgentDocuments, DocumentType};
/// use chrono::Utc;
///
/// let now = Utc::now();
/// let docs = AgentDocuments::default()
///     .add(AgentDocument::new(DocumentType::License, "https://cdn/l.pdf", now).unwrap());
/// assert!(docs.has(DocumentType::License));
/// assert!(!docs.has(DocumentType::IdProof));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AgentDocuments {
    docs: Vec<AgentDocument>,
}

impl AgentDocuments {
    /// Creates a collection from an iterator, dropping duplicates.
    #[must_use]
    pub fn new(docs: impl IntoIterator<Item = AgentDocument>) -> Self {
        let mut unique: Vec<AgentDocument> = Vec::new();
        for doc in docs {
            if !unique.contains(&doc) {
                unique.push(doc);
            }
        }
        Self { docs: unique }
    }

    /// Returns the documents in upload order.
    #[inline]
    #[must_use]
    pub fn docs(&self) -> &[AgentDocument] {
        &self.docs
    }

    /// Returns a new collection with `doc` appended (no-op on duplicates).
    #[must_use]
    pub fn add(&self, doc: AgentDocument) -> Self {
        if self.docs.contains(&doc) {
            return self.clone();
        }
        let mut docs = self.docs.clone();
        docs.push(doc);
        Self { docs }
    }

    /// Returns true if a document of the given type is present.
    #[must_use]
    pub fn has(&self, doc_type: DocumentType) -> bool {
        self.docs.iter().any(|d| d.doc_type == doc_type)
    }

    /// Checks that every document required for activation is present:
    /// license scan, identity proof, and profile photo.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingDocument`] naming the first missing
    /// type.
    pub fn ensure_required_for_activation(&self) -> DomainResult<()> {
        for required in [
            DocumentType::License,
            DocumentType::IdProof,
            DocumentType::ProfilePhoto,
        ] {
            if !self.has(required) {
                return Err(DomainError::MissingDocument(required.to_string()));
            }
        }
        Ok(())
    }
}

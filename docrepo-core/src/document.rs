//! Document and author value types.
//!
//! This module provides the [`Document`] value stored by a repository, the
//! [`Author`] embedded in it, and utilities for converting documents to and
//! from JSON for surrounding layers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, from_value, to_value};

use crate::error::StoreResult;

/// Author attached to a [`Document`], embedded by value.
///
/// The identifier is opaque and caller-assigned; the store never interprets
/// it beyond equality checks during author filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    /// Opaque author identifier.
    pub id: String,
    /// Display name.
    pub name: String,
}

impl Author {
    /// Creates an author from an identifier and a display name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// The stored unit of content: title, body text, author, identifier,
/// creation time.
///
/// Every field other than the identifier is stored exactly as supplied; the
/// store performs no validation. An absent `id` on input asks the store to
/// assign one on save. Once a document is stored, its identifier and its
/// creation timestamp are fixed for the lifetime of the store.
///
/// # Example
///
/// ```ignore
/// use docrepo_core::document::{Author, Document};
///
/// let document = Document::builder()
///     .title("Alpha report")
///     .content("quarterly results")
///     .author(Author::new("a1", "Ada"))
///     .build();
///
/// assert!(document.id.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Identifier, assigned by the store when absent on save.
    pub id: Option<String>,
    /// Title, matched by prefix during search.
    pub title: Option<String>,
    /// Free-text body, matched by substring during search.
    pub content: Option<String>,
    /// Embedded author value.
    pub author: Option<Author>,
    /// Creation timestamp, immutable once established for an identifier.
    pub created: Option<DateTime<Utc>>,
}

impl Document {
    /// Creates a builder for fluent document construction.
    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::new()
    }

    /// Returns the assigned identifier, if any.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Builder for constructing [`Document`] values.
///
/// All fields start absent; set only the ones the caller has.
#[derive(Debug, Clone, Default)]
pub struct DocumentBuilder {
    document: Document,
}

impl DocumentBuilder {
    /// Creates a new document builder with every field absent.
    pub fn new() -> Self {
        DocumentBuilder {
            document: Document::default(),
        }
    }

    /// Sets the document identifier.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.document.id = Some(id.into());
        self
    }

    /// Sets the document title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.document.title = Some(title.into());
        self
    }

    /// Sets the document body text.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.document.content = Some(content.into());
        self
    }

    /// Sets the embedded author.
    pub fn author(mut self, author: Author) -> Self {
        self.document.author = Some(author);
        self
    }

    /// Sets the creation timestamp.
    pub fn created(mut self, created: DateTime<Utc>) -> Self {
        self.document.created = Some(created);
        self
    }

    /// Builds and returns the final document.
    pub fn build(self) -> Document {
        self.document
    }
}

/// Extension trait providing JSON conversion utilities for documents.
///
/// Surrounding layers (HTTP handlers, persistence adapters) translate store
/// results into their own formats; these helpers cover the common JSON case
/// without the store owning a wire protocol.
pub trait DocumentExt: Sized {
    /// Converts this document to a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn to_json(&self) -> StoreResult<Value>;

    /// Creates a document from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails or the structure is invalid.
    fn from_json(value: Value) -> StoreResult<Self>;
}

impl DocumentExt for Document {
    fn to_json(&self) -> StoreResult<Value> {
        Ok(to_value(self)?)
    }

    fn from_json(value: Value) -> StoreResult<Self> {
        Ok(from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn builder_sets_only_requested_fields() {
        let document = Document::builder()
            .title("Alpha report")
            .author(Author::new("a1", "Ada"))
            .build();

        assert_eq!(document.title.as_deref(), Some("Alpha report"));
        assert_eq!(document.author.as_ref().map(|a| a.id.as_str()), Some("a1"));
        assert!(document.id.is_none());
        assert!(document.content.is_none());
        assert!(document.created.is_none());
    }

    #[test]
    fn json_conversion_preserves_absent_fields() {
        let created = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let document = Document::builder()
            .id("42")
            .title("Alpha report")
            .created(created)
            .build();

        let value = document.to_json().unwrap();
        let restored = Document::from_json(value).unwrap();

        assert_eq!(restored, document);
        assert!(restored.content.is_none());
    }
}

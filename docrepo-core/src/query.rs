//! Search request construction for document stores.
//!
//! This module provides the [`SearchRequest`] filter descriptor and a fluent
//! builder for constructing it.
//!
//! # Request semantics
//!
//! A request is a conjunction of five independent criteria. Each criterion
//! only constrains the result set when it is present, and list criteria only
//! when they are non-empty as well; a request with no criteria matches every
//! stored document. The list fields keep absent, present-but-empty, and
//! present-with-values distinguishable, which is why they are `Option<Vec>`
//! rather than plain vectors.
//!
//! ```ignore
//! use docrepo_core::query::SearchRequest;
//!
//! let request = SearchRequest::builder()
//!     .title_prefixes(["Alpha", "Beta"])
//!     .contains_contents(["quarterly"])
//!     .created_from(some_instant)
//!     .build();
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A conjunctive filter over stored documents.
///
/// Matching documents satisfy all present criteria:
///
/// - `title_prefixes` - the title starts with at least one listed prefix
///   (OR across the list)
/// - `contains_contents` - the content contains every listed substring
///   (AND across the list)
/// - `author_ids` - the author identifier is one of the listed values
/// - `created_from` - the creation timestamp is not before this instant
///   (inclusive)
/// - `created_to` - the creation timestamp is not after this instant
///   (inclusive)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Title must start with at least one of these prefixes.
    pub title_prefixes: Option<Vec<String>>,
    /// Content must contain every one of these substrings.
    pub contains_contents: Option<Vec<String>>,
    /// Author identifier must be a member of this set.
    pub author_ids: Option<Vec<String>>,
    /// Creation timestamp lower bound, inclusive.
    pub created_from: Option<DateTime<Utc>>,
    /// Creation timestamp upper bound, inclusive.
    pub created_to: Option<DateTime<Utc>>,
}

impl SearchRequest {
    /// Creates an empty request that matches every stored document.
    pub fn new() -> Self {
        SearchRequest::default()
    }

    /// Creates a builder for fluent request construction.
    pub fn builder() -> SearchRequestBuilder {
        SearchRequestBuilder::new()
    }
}

/// Builder for constructing [`SearchRequest`] values.
#[derive(Debug, Clone, Default)]
pub struct SearchRequestBuilder {
    request: SearchRequest,
}

impl SearchRequestBuilder {
    /// Creates a new request builder with no criteria set.
    pub fn new() -> Self {
        SearchRequestBuilder {
            request: SearchRequest::default(),
        }
    }

    /// Sets the title prefixes criterion.
    pub fn title_prefixes(
        mut self,
        prefixes: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.request.title_prefixes = Some(prefixes.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the required content substrings criterion.
    pub fn contains_contents(
        mut self,
        substrings: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.request.contains_contents = Some(substrings.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the acceptable author identifiers criterion.
    pub fn author_ids(mut self, ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.request.author_ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the inclusive creation timestamp lower bound.
    pub fn created_from(mut self, from: DateTime<Utc>) -> Self {
        self.request.created_from = Some(from);
        self
    }

    /// Sets the inclusive creation timestamp upper bound.
    pub fn created_to(mut self, to: DateTime<Utc>) -> Self {
        self.request.created_to = Some(to);
        self
    }

    /// Builds and returns the final request.
    pub fn build(self) -> SearchRequest {
        self.request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_request_has_no_criteria() {
        let request = SearchRequest::new();
        assert!(request.title_prefixes.is_none());
        assert!(request.contains_contents.is_none());
        assert!(request.author_ids.is_none());
        assert!(request.created_from.is_none());
        assert!(request.created_to.is_none());
    }

    #[test]
    fn builder_collects_list_criteria() {
        let request = SearchRequest::builder()
            .title_prefixes(["Alpha", "Beta"])
            .author_ids(["a1"])
            .build();

        assert_eq!(
            request.title_prefixes,
            Some(vec!["Alpha".to_string(), "Beta".to_string()])
        );
        assert_eq!(request.author_ids, Some(vec!["a1".to_string()]));
        assert!(request.contains_contents.is_none());
    }

    #[test]
    fn builder_keeps_empty_lists_distinct_from_absent() {
        let request = SearchRequest::builder()
            .title_prefixes(Vec::<String>::new())
            .build();

        assert_eq!(request.title_prefixes, Some(Vec::new()));
    }
}

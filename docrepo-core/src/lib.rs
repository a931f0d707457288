//! Core types for the docrepo document repository.
//!
//! This crate defines the value types and the store seam shared by every
//! docrepo backend:
//!
//! - **Document types** ([`document`]) - The [`Document`](document::Document) and
//!   [`Author`](document::Author) value types, builders, and JSON conversion helpers
//! - **Search requests** ([`query`]) - The [`SearchRequest`](query::SearchRequest)
//!   filter descriptor and its builder
//! - **Store seam** ([`store`]) - The [`DocumentStore`](store::DocumentStore) trait
//!   implemented by storage backends
//! - **Error handling** ([`error`]) - Error and result types for store operations
//!
//! # Example
//!
//! ```ignore
//! use docrepo_core::{document::{Author, Document}, query::SearchRequest};
//!
//! let document = Document::builder()
//!     .title("Alpha report")
//!     .content("quarterly results")
//!     .author(Author::new("a1", "Ada"))
//!     .build();
//!
//! let request = SearchRequest::builder()
//!     .title_prefixes(["Alpha"])
//!     .build();
//! ```

pub mod document;
pub mod error;
pub mod query;
pub mod store;

//! In-memory document repository backend for docrepo.
//!
//! This crate provides the bundled implementation of the
//! [`DocumentStore`](docrepo_core::store::DocumentStore) trait: a plain
//! `HashMap` keyed by document identifier next to a monotonically increasing
//! identifier counter. There is no persistence and no internal locking; the
//! store is owned and invoked by a single caller context at a time.
//!
//! # Quick Start
//!
//! ```ignore
//! use docrepo_core::{document::{Author, Document}, query::SearchRequest, store::DocumentStore};
//! use docrepo_memory::InMemoryStore;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut store = InMemoryStore::new();
//!
//!     let saved = store.save(
//!         Document::builder()
//!             .title("Alpha report")
//!             .content("quarterly results")
//!             .author(Author::new("a1", "Ada"))
//!             .build(),
//!     )?;
//!
//!     let found = store.find_by_id(saved.id().unwrap())?;
//!     assert!(found.is_some());
//!
//!     let matches = store.search(&SearchRequest::builder().title_prefixes(["Alpha"]).build())?;
//!     assert_eq!(matches.len(), 1);
//!
//!     Ok(())
//! }
//! ```

pub mod evaluator;
pub mod store;

pub use store::{InMemoryStore, InMemoryStoreBuilder};

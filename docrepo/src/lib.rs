//! Main docrepo crate providing an in-memory document repository.
//!
//! This crate is the primary entry point for users of docrepo. It re-exports
//! the core types and the bundled in-memory backend, so a single dependency
//! gives access to the whole surface: three operations (save, search,
//! find-by-id) over three data shapes (document, author, search request).
//!
//! # Features
//!
//! - **Upsert by identifier** - `save` inserts new documents, assigning
//!   counter-based identifiers and creation timestamps when absent, and
//!   overwrites existing ones while keeping their creation timestamp fixed
//! - **Multi-criteria search** - conjunctive filtering over title prefixes,
//!   content substrings, author identifiers, and an inclusive creation-time
//!   window
//! - **Direct lookup** - `find_by_id` returns a first-class `Option`, never
//!   an error
//!
//! # Quick Start
//!
//! ```ignore
//! use docrepo::{prelude::*, memory::InMemoryStore};
//!
//! fn main() -> StoreResult<()> {
//!     let mut store = InMemoryStore::new();
//!
//!     // Save a document; the store assigns "1" and stamps the current time.
//!     let saved = store.save(
//!         Document::builder()
//!             .title("Alpha report")
//!             .content("quarterly results")
//!             .author(Author::new("a1", "Ada"))
//!             .build(),
//!     )?;
//!
//!     // Later saves under the same identifier keep the creation timestamp.
//!     let updated = store.save(
//!         Document::builder()
//!             .id(saved.id().unwrap())
//!             .title("Alpha report v2")
//!             .build(),
//!     )?;
//!     assert_eq!(updated.created, saved.created);
//!
//!     // Search is a conjunctive filtered scan.
//!     let matches = store.search(
//!         &SearchRequest::builder()
//!             .title_prefixes(["Alpha"])
//!             .author_ids(["a1"])
//!             .build(),
//!     )?;
//!     println!("matched {} documents", matches.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Backends
//!
//! - [`memory`] - The bundled in-memory store. The
//!   [`DocumentStore`](store::DocumentStore) trait is the seam for plugging
//!   in others.

pub mod prelude;

pub use docrepo_core::{document, error, query, store};

/// In-memory storage backend implementations.
pub mod memory {
    pub use docrepo_memory::{InMemoryStore, InMemoryStoreBuilder};
}

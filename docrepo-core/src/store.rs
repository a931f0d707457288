//! Store seam for document repositories.
//!
//! This module defines the [`DocumentStore`] trait that abstracts over
//! concrete storage implementations, allowing callers to work against the
//! same upsert/search/lookup surface regardless of the backing structure.
//!
//! # Concurrency
//!
//! The trait is deliberately synchronous and single-caller: methods take
//! plain `&self`/`&mut self` borrows, perform no internal locking, and have
//! no suspension points. Callers that need concurrent access must wrap the
//! whole store in their own synchronization, keeping save's
//! lookup-then-insert sequence a single logical step so the creation
//! timestamp stays immutable.

use crate::{document::Document, error::StoreResult, query::SearchRequest};

/// Abstract interface for document repositories.
///
/// Implementers provide an in-memory mapping from identifier to document
/// plus an identifier generator, and uphold three invariants: every stored
/// document carries a unique, non-absent identifier; a stored creation
/// timestamp is never altered by a later save with the same identifier; and
/// auto-assigned identifiers are never reused for the lifetime of the
/// instance.
pub trait DocumentStore {
    /// Upserts a document and returns it exactly as stored.
    ///
    /// When the input carries no identifier, a store-unique one is assigned
    /// and, if the creation timestamp is also absent, the current time is
    /// stamped. When the identifier matches a stored document, the entry is
    /// overwritten with the input's fields except that the stored creation
    /// timestamp is kept. When the identifier is present but unknown, the
    /// document is inserted as-is, supplied creation timestamp (or its
    /// absence) included.
    ///
    /// Auto-assigned and caller-supplied identifiers share one namespace;
    /// the generator does not check caller-supplied values against its
    /// future output.
    ///
    /// # Errors
    ///
    /// The in-memory backend always succeeds; other backends may fail with
    /// a [`StoreError`](crate::error::StoreError).
    fn save(&mut self, document: Document) -> StoreResult<Document>;

    /// Scans all stored documents and returns those matching the request.
    ///
    /// Result order is unspecified. A request with no present, non-empty
    /// criteria matches every stored document; when nothing matches the
    /// result is an empty vector, never an error. A document missing a
    /// field that a present criterion inspects does not match.
    ///
    /// # Errors
    ///
    /// The in-memory backend always succeeds; other backends may fail with
    /// a [`StoreError`](crate::error::StoreError).
    fn search(&self, request: &SearchRequest) -> StoreResult<Vec<Document>>;

    /// Returns the document with the given identifier, or `None` when no
    /// such document is stored.
    ///
    /// # Errors
    ///
    /// The in-memory backend always succeeds; other backends may fail with
    /// a [`StoreError`](crate::error::StoreError).
    fn find_by_id(&self, id: &str) -> StoreResult<Option<Document>>;
}

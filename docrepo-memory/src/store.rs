//! In-memory storage implementation for document repositories.
//!
//! This module provides [`InMemoryStore`], a `HashMap`-backed implementation
//! of the [`DocumentStore`] trait with counter-based identifier assignment.

use std::collections::HashMap;

use chrono::Utc;
use tracing::{debug, instrument};

use docrepo_core::{
    document::Document,
    error::StoreResult,
    query::SearchRequest,
    store::DocumentStore,
};

use crate::evaluator::RequestEvaluator;

/// In-memory document repository.
///
/// Documents are held in a `HashMap` keyed by their identifier, next to the
/// counter used for identifier assignment. The counter starts at 1, is
/// rendered in decimal string form, and advances on every assignment, so an
/// auto-assigned identifier is never handed out twice by the same instance.
///
/// # Concurrency
///
/// The store performs no internal locking and gives no atomicity guarantees;
/// it is owned and invoked by a single caller context at a time. Callers
/// that need concurrent access must supply their own synchronization around
/// all three operations, keeping save's lookup-then-insert sequence one
/// logical step.
///
/// # Performance
///
/// Search is a full scan over all stored documents; no indexes are kept.
/// Every operation completes in time proportional to the number of stored
/// documents.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    /// The main storage map: document_id -> document
    documents: HashMap<String, Document>,
    /// Next value handed out by the identifier generator.
    id_counter: u64,
}

impl InMemoryStore {
    /// Creates a new empty in-memory document store.
    ///
    /// The returned store contains no documents and its identifier counter
    /// starts at 1.
    pub fn new() -> Self {
        Self {
            documents: HashMap::new(),
            id_counter: 1,
        }
    }

    /// Creates a builder for constructing an `InMemoryStore` with custom
    /// options.
    ///
    /// Currently, the builder simply creates a default store, but it can be
    /// extended in future versions to support configuration options.
    pub fn builder() -> InMemoryStoreBuilder {
        InMemoryStoreBuilder
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// True when the store holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Hands out the next identifier in decimal string form.
    ///
    /// The counter advances whether or not the returned identifier ends up
    /// stored. Caller-supplied identifiers share the same namespace and are
    /// not checked against future counter values.
    fn generate_id(&mut self) -> String {
        let id = self.id_counter.to_string();
        self.id_counter += 1;
        id
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        InMemoryStore::new()
    }
}

impl DocumentStore for InMemoryStore {
    #[instrument(skip(self, document))]
    fn save(&mut self, mut document: Document) -> StoreResult<Document> {
        let id = match document.id.clone() {
            None => {
                let id = self.generate_id();
                document.id = Some(id.clone());
                if document.created.is_none() {
                    document.created = Some(Utc::now());
                }
                id
            }
            Some(id) => {
                // The stored creation timestamp wins over whatever the
                // caller supplied. An unknown identifier is inserted as-is,
                // absent timestamp included.
                if let Some(existing) = self.documents.get(&id) {
                    document.created = existing.created;
                }
                id
            }
        };

        debug!(doc_id = %id, "saving document to in-memory store");
        self.documents.insert(id, document.clone());
        Ok(document)
    }

    #[instrument(skip(self, request))]
    fn search(&self, request: &SearchRequest) -> StoreResult<Vec<Document>> {
        let matched = RequestEvaluator::filter_documents(self.documents.values(), request);
        debug!(
            matched = matched.len(),
            scanned = self.documents.len(),
            "searched in-memory store"
        );
        Ok(matched)
    }

    #[instrument(skip(self))]
    fn find_by_id(&self, id: &str) -> StoreResult<Option<Document>> {
        debug!(doc_id = %id, "getting document from in-memory store");
        Ok(self.documents.get(id).cloned())
    }
}

/// Builder for constructing [`InMemoryStore`] instances.
///
/// Currently a no-op builder, but can be extended in future versions to
/// support configuration options like capacity hints.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStoreBuilder;

impl InMemoryStoreBuilder {
    /// Builds and returns a new [`InMemoryStore`] instance.
    ///
    /// This always succeeds and returns a freshly initialized store.
    pub fn build(self) -> InMemoryStore {
        InMemoryStore::new()
    }
}

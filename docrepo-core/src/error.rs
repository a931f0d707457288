//! Error types and result types for document store operations.
//!
//! Use [`StoreResult<T>`] as the return type for fallible store operations.

use serde_json::Error as SerdeJsonError;
use thiserror::Error;

/// Represents the errors a document store backend may surface.
///
/// The bundled in-memory backend is total over well-formed input and never
/// constructs any of these variants. They exist for the JSON conversion
/// helpers and for backends with real failure modes behind the same trait.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Serialization/deserialization error when converting documents to or from JSON.
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// An error occurred in the underlying storage backend.
    #[error("Backend error: {0}")]
    Backend(String),
}

/// A specialized `Result` type for document store operations.
///
/// This type alias is used throughout the workspace to indicate operations
/// that may fail with a [`StoreError`].
pub type StoreResult<T> = Result<T, StoreError>;

impl From<SerdeJsonError> for StoreError {
    fn from(err: SerdeJsonError) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

//! Convenient re-exports of commonly used types from docrepo.
//!
//! Import this prelude module to quickly access the most frequently used
//! types and traits without needing to import from multiple sub-modules:
//!
//! ```ignore
//! use docrepo::prelude::*;
//! ```

pub use docrepo_core::{
    document::{Author, Document, DocumentBuilder, DocumentExt},
    error::{StoreError, StoreResult},
    query::{SearchRequest, SearchRequestBuilder},
    store::DocumentStore,
};

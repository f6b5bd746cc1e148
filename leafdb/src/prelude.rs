//! Convenient re-exports of commonly used types from leafdb.
//!
//! ```ignore
//! use leafdb::prelude::*;
//! ```

pub use leafdb_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    criteria::Criteria,
    document::{Document, DocumentId, Fields, to_fields},
    error::{DocumentStoreError, DocumentStoreResult},
    id::IdStrategy,
    shared::SharedDocumentStore,
    store::{DocumentStore, DocumentStoreBuilder},
};

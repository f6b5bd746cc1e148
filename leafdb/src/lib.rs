//! Main leafdb crate providing a small in-memory JSON document store.
//!
//! This crate is the primary entry point for users of leafdb. It re-exports the
//! core types from `leafdb-core` and the in-memory backend from `leafdb-memory`.
//!
//! # Features
//!
//! - **Schemaless documents** - Each document is an integer id plus a JSON field mapping
//! - **Exact-match finding** - Find the first or all documents whose fields equal given values
//! - **Export and import** - Move the whole store to and from JSON text
//! - **Shared access** - A mutex-guarded handle for use from many async tasks
//!
//! # Quick Start
//!
//! ```ignore
//! use leafdb::{prelude::*, memory::InMemoryStore};
//! use serde_json::json;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut store = DocumentStore::new(InMemoryStore::builder().build()?);
//!
//!     // Insert a document; its id is the current time in milliseconds
//!     let doc = store.insert(json!({"key1": "value1"}).as_object().cloned().unwrap());
//!
//!     // Find it again by field value
//!     let found = store.find_first(&Criteria::new().eq("key1", "value1"));
//!     assert_eq!(found, Some(doc.clone()));
//!
//!     // Replace its fields, keeping the id
//!     store.overwrite_by_id(doc.id, json!({"key1": "value2"}).as_object().cloned().unwrap());
//!
//!     // Export everything and merge it into another store
//!     let text = store.export_to_json()?;
//!     let mut copy = DocumentStore::new(InMemoryStore::new());
//!     copy.import_from_json(&text)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Shared access
//!
//! ```ignore
//! use leafdb::{prelude::*, memory::InMemoryStore};
//!
//! #[tokio::main]
//! async fn main() {
//!     let shared = SharedDocumentStore::new(DocumentStore::new(InMemoryStore::new()));
//!
//!     let handle = shared.clone();
//!     tokio::spawn(async move {
//!         handle.insert(Fields::new()).await;
//!     })
//!     .await
//!     .unwrap();
//!
//!     assert_eq!(shared.len().await, 1);
//! }
//! ```
//!
//! # Backends
//!
//! - [`memory`] - Ordered in-memory storage

pub mod prelude;

pub use leafdb_core::{backend, criteria, document, error, id, shared, store};

// Re-export serde_json for building field mappings
pub use serde_json;

/// In-memory storage backend implementations.
pub mod memory {
    pub use leafdb_memory::{InMemoryStore, InMemoryStoreBuilder, evaluator::values_equal};
}

//! In-memory document storage backend for leafdb.
//!
//! This crate provides an in-memory implementation of the `StoreBackend` trait,
//! suitable for development, testing, and small single-process deployments.
//!
//! # Features
//!
//! - **Ordered storage** - Documents are kept in ascending identifier order
//! - **Exact-match criteria** - Filtering with deep equality on nested values
//! - **Seeding** - The builder can preload documents
//!
//! # Quick Start
//!
//! ```ignore
//! use leafdb::{prelude::*, memory::InMemoryStore};
//! use serde_json::json;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = InMemoryStore::builder().build()?;
//!     let mut store = DocumentStore::new(backend);
//!
//!     let doc = store.insert(json!({"name": "Alice"}).as_object().cloned().unwrap());
//!     assert!(store.contains(doc.id));
//!
//!     Ok(())
//! }
//! ```

#[allow(unused_extern_crates)]
extern crate self as leafdb_memory;

pub mod store;
pub mod evaluator;

pub use store::{InMemoryStore, InMemoryStoreBuilder};

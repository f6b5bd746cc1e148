//! A small in-memory JSON document store keyed by integer identifiers.
//!
//! This crate is the core of the leafdb project and provides:
//!
//! - **Documents** ([`document`]) - The document type, its field mapping and typed-record helpers
//! - **Criteria** ([`criteria`]) - Exact-match conditions for finding documents
//! - **Store backend abstraction** ([`backend`]) - Traits for implementing storage backends
//! - **Document store** ([`store`]) - Insert, lookup, overwrite, delete, find, export and import
//! - **Shared access** ([`shared`]) - A lock-guarded handle for using one store from many tasks
//! - **Identifiers** ([`id`]) - Millisecond-clock identifier generation
//! - **Error handling** ([`error`]) - Error types and result types
//!
//! # Example
//!
//! ```ignore
//! use leafdb::{prelude::*, memory::InMemoryStore};
//! use serde_json::json;
//!
//! let mut store = DocumentStore::new(InMemoryStore::new());
//! let doc = store.insert(json!({"key1": "value1"}).as_object().cloned().unwrap());
//!
//! let found = store.find_first(&Criteria::new().eq("key1", "value1"));
//! assert_eq!(found, Some(doc));
//! ```

#[allow(unused_extern_crates)]
extern crate self as leafdb_core;

pub mod backend;
pub mod criteria;
pub mod document;
pub mod error;
pub mod id;
pub mod shared;
pub mod store;

#[cfg(test)]
mod testing;

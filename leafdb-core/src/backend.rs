//! Storage backend abstraction for the document store.
//!
//! This module defines the traits that separate the [`DocumentStore`](crate::store::DocumentStore)
//! front end from the structure that actually holds documents.
//!
//! # Overview
//!
//! The [`StoreBackend`] trait is a small synchronous interface over a mapping from
//! [`DocumentId`] to [`Document`]. None of its operations fail: a missing document is
//! reported as `None`, never as an error. Identifier generation, logging and
//! export/import live in the front end, so a backend only needs to store, look up
//! and scan.
//!
//! # Traits
//!
//! - [`StoreBackend`]: The core trait for storage backends
//! - [`StoreBackendBuilder`]: Factory trait for creating backend instances
//!
//! # Examples
//!
//! ```ignore
//! use leafdb::backend::StoreBackend;
//! use leafdb::document::Document;
//!
//! let mut backend = MyBackendImpl::new();
//! backend.insert_document(Document::new(1, fields));
//! assert!(backend.contains_document(1));
//! ```

use std::fmt::Debug;

use crate::{
    criteria::Criteria,
    document::{Document, DocumentId},
    error::DocumentStoreResult,
};

/// Abstract interface for document storage backends.
///
/// All documents returned by a backend are owned copies.
///
/// # Ordering
///
/// [`query_documents`](StoreBackend::query_documents) returns documents in the
/// backend's own iteration order. Backends should document what that order is;
/// callers must not assume one.
pub trait StoreBackend: Send + Sync + Debug {
    /// Stores a document under its identifier, replacing any existing entry.
    ///
    /// Returns the entry that was replaced, if there was one.
    fn insert_document(&mut self, document: Document) -> Option<Document>;

    /// Replaces the document stored under `document.id`.
    ///
    /// If no document exists under that identifier nothing is stored and `None` is
    /// returned. Otherwise returns a copy of the newly stored document.
    fn replace_document(&mut self, document: Document) -> Option<Document>;

    /// Removes the document with the given identifier.
    ///
    /// Returns the removed document, or `None` if there was nothing to remove.
    fn delete_document(&mut self, id: DocumentId) -> Option<Document>;

    /// Returns a copy of the document with the given identifier.
    fn get_document(&self, id: DocumentId) -> Option<Document>;

    /// Returns copies of the documents matching `criteria`, in iteration order.
    ///
    /// # Arguments
    ///
    /// * `criteria` - Exact-match conditions; empty criteria match every document
    /// * `limit` - Stop after this many matches, if given
    fn query_documents(&self, criteria: &Criteria, limit: Option<usize>) -> Vec<Document>;

    /// Returns the number of stored documents.
    fn count_documents(&self) -> usize;

    /// Returns `true` if a document with the given identifier is stored.
    fn contains_document(&self, id: DocumentId) -> bool {
        self.get_document(id).is_some()
    }
}

impl<B> StoreBackend for Box<B>
where
    B: StoreBackend + ?Sized,
{
    fn insert_document(&mut self, document: Document) -> Option<Document> {
        (**self).insert_document(document)
    }

    fn replace_document(&mut self, document: Document) -> Option<Document> {
        (**self).replace_document(document)
    }

    fn delete_document(&mut self, id: DocumentId) -> Option<Document> {
        (**self).delete_document(id)
    }

    fn get_document(&self, id: DocumentId) -> Option<Document> {
        (**self).get_document(id)
    }

    fn query_documents(&self, criteria: &Criteria, limit: Option<usize>) -> Vec<Document> {
        (**self).query_documents(criteria, limit)
    }

    fn count_documents(&self) -> usize {
        (**self).count_documents()
    }

    fn contains_document(&self, id: DocumentId) -> bool {
        (**self).contains_document(id)
    }
}

/// Factory trait for constructing configured backends.
pub trait StoreBackendBuilder {
    type Backend: StoreBackend;

    fn build(self) -> DocumentStoreResult<Self::Backend>;
}

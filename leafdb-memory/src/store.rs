//! In-memory storage implementation for document stores.
//!
//! This module provides a simple in-memory backend that keeps documents in an
//! ordered map from identifier to field mapping.

use std::collections::BTreeMap;

use tracing::debug;

use leafdb_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    criteria::Criteria,
    document::{Document, DocumentId, Fields},
    error::DocumentStoreResult,
};

use crate::evaluator::DocumentEvaluator;

type DocumentMap = BTreeMap<DocumentId, Fields>;


/// In-memory document storage backend.
///
/// This struct implements the [`StoreBackend`] trait on top of a `BTreeMap` keyed by
/// document identifier. Iteration, and therefore `find_first` and export order, is
/// ascending by identifier, which for generated identifiers is insertion order.
///
/// # Performance
///
/// Criteria queries scan every document (no indexing). Lookups, inserts and deletes
/// by identifier are logarithmic.
///
/// # Example
///
/// ```ignore
/// use leafdb_memory::InMemoryStore;
/// use leafdb::backend::StoreBackend;
/// use leafdb::document::Document;
///
/// let mut store = InMemoryStore::new();
/// store.insert_document(Document::new(1, fields));
///
/// assert_eq!(store.count_documents(), 1);
/// ```
#[derive(Default, Clone, Debug)]
pub struct InMemoryStore {
    /// document_id -> document fields
    documents: DocumentMap,
}

impl InMemoryStore {
    /// Creates a new empty in-memory document store.
    pub fn new() -> Self {
        Self {
            documents: DocumentMap::new(),
        }
    }

    /// Creates a builder for constructing an `InMemoryStore` with initial documents.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use leafdb_memory::InMemoryStore;
    ///
    /// let store = InMemoryStore::builder()
    ///     .document(Document::new(1, fields))
    ///     .build()?;
    /// ```
    pub fn builder() -> InMemoryStoreBuilder {
        InMemoryStoreBuilder::default()
    }

    /// Returns the stored identifiers in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = DocumentId> + '_ {
        self.documents.keys().copied()
    }
}


impl StoreBackend for InMemoryStore {
    fn insert_document(&mut self, document: Document) -> Option<Document> {
        let id = document.id;

        self.documents
            .insert(id, document.data)
            .map(|previous| Document::new(id, previous))
    }

    fn replace_document(&mut self, document: Document) -> Option<Document> {
        let data = self.documents.get_mut(&document.id)?;
        *data = document.data.clone();

        Some(document)
    }

    fn delete_document(&mut self, id: DocumentId) -> Option<Document> {
        self.documents
            .remove(&id)
            .map(|data| Document::new(id, data))
    }

    fn get_document(&self, id: DocumentId) -> Option<Document> {
        self.documents
            .get(&id)
            .map(|data| Document::new(id, data.clone()))
    }

    fn query_documents(&self, criteria: &Criteria, limit: Option<usize>) -> Vec<Document> {
        // Empty criteria match everything; skip the evaluator
        if criteria.is_empty() {
            return self
                .documents
                .iter()
                .take(limit.unwrap_or(usize::MAX))
                .map(|(id, data)| Document::new(*id, data.clone()))
                .collect();
        }

        DocumentEvaluator::filter_documents(&self.documents, criteria, limit)
    }

    fn count_documents(&self) -> usize {
        self.documents.len()
    }

    fn contains_document(&self, id: DocumentId) -> bool {
        self.documents.contains_key(&id)
    }
}


/// Builder for constructing [`InMemoryStore`] instances.
///
/// Documents added to the builder are stored under their own identifiers; a later
/// document with the same identifier replaces an earlier one.
///
/// # Example
///
/// ```ignore
/// use leafdb_memory::InMemoryStore;
/// use leafdb::backend::StoreBackendBuilder;
///
/// let store = InMemoryStore::builder().build()?;
/// ```
#[derive(Default, Debug)]
pub struct InMemoryStoreBuilder {
    documents: Vec<Document>,
}

impl InMemoryStoreBuilder {
    /// Adds one document to seed the store with.
    pub fn document(mut self, document: Document) -> Self {
        self.documents.push(document);
        self
    }

    /// Adds several documents to seed the store with.
    pub fn documents(mut self, documents: impl IntoIterator<Item = Document>) -> Self {
        self.documents.extend(documents);
        self
    }
}

impl StoreBackendBuilder for InMemoryStoreBuilder {
    type Backend = InMemoryStore;

    /// Builds and returns a new [`InMemoryStore`] holding the seeded documents.
    ///
    /// This always succeeds.
    fn build(self) -> DocumentStoreResult<Self::Backend> {
        let mut store = InMemoryStore::new();

        for document in self.documents {
            store.insert_document(document);
        }

        debug!(count = store.count_documents(), "built in-memory store");

        Ok(store)
    }
}

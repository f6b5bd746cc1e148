//! Lock-guarded handle for sharing one store between async tasks.
//!
//! [`DocumentStore`] itself is single-threaded. [`SharedDocumentStore`] wraps it in a
//! single async mutex: every operation, reads included, takes the lock, runs one
//! store operation and releases it. The lock is never held across another await.
//!
//! ```ignore
//! use leafdb::{prelude::*, memory::InMemoryStore};
//!
//! let shared = SharedDocumentStore::new(DocumentStore::new(InMemoryStore::new()));
//! let handle = shared.clone();
//! tokio::spawn(async move { handle.insert(fields).await });
//! ```

use std::{fmt, sync::Arc};

use mea::mutex::Mutex;
use serde::Serialize;

use crate::{
    backend::StoreBackend,
    criteria::Criteria,
    document::{Document, DocumentId, Fields},
    error::DocumentStoreResult,
    store::DocumentStore,
};

/// Cloneable, mutex-guarded handle to a [`DocumentStore`].
///
/// Clones share the same underlying store. Every in-memory store operation has an
/// async counterpart here. The reader and writer variants of import and export do
/// blocking I/O, so they are left to [`with`](Self::with).
pub struct SharedDocumentStore<B: StoreBackend> {
    inner: Arc<Mutex<DocumentStore<B>>>,
}

impl<B: StoreBackend> SharedDocumentStore<B> {
    pub fn new(store: DocumentStore<B>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Runs `f` with exclusive access to the store.
    ///
    /// Use this to perform several operations without another task interleaving.
    pub async fn with<R>(&self, f: impl FnOnce(&mut DocumentStore<B>) -> R) -> R {
        let mut store = self.inner.lock().await;
        f(&mut *store)
    }

    pub async fn insert(&self, data: Fields) -> Document {
        self.with(|store| store.insert(data)).await
    }

    pub async fn insert_record<T: Serialize + ?Sized>(&self, record: &T) -> DocumentStoreResult<Document> {
        self.with(|store| store.insert_record(record)).await
    }

    pub async fn get_by_id(&self, id: DocumentId) -> Option<Document> {
        self.with(|store| store.get_by_id(id)).await
    }

    pub async fn delete_by_id(&self, id: DocumentId) -> Option<Document> {
        self.with(|store| store.delete_by_id(id)).await
    }

    pub async fn overwrite_by_id(&self, id: DocumentId, data: Fields) -> Option<Document> {
        self.with(|store| store.overwrite_by_id(id, data)).await
    }

    pub async fn find_first(&self, criteria: &Criteria) -> Option<Document> {
        self.with(|store| store.find_first(criteria)).await
    }

    pub async fn find_documents(&self, criteria: &Criteria) -> Vec<Document> {
        self.with(|store| store.find_documents(criteria)).await
    }

    pub async fn len(&self) -> usize {
        self.with(|store| store.len()).await
    }

    pub async fn is_empty(&self) -> bool {
        self.with(|store| store.is_empty()).await
    }

    pub async fn contains(&self, id: DocumentId) -> bool {
        self.with(|store| store.contains(id)).await
    }

    pub async fn export_to_json_pretty(&self) -> DocumentStoreResult<String> {
        self.with(|store| store.export_to_json_pretty()).await
    }

    pub async fn export_to_json(&self) -> DocumentStoreResult<String> {
        self.with(|store| store.export_to_json()).await
    }

    pub async fn import_from_json(&self, text: &str) -> DocumentStoreResult<usize> {
        self.with(|store| store.import_from_json(text)).await
    }
}

impl<B: StoreBackend> Clone for SharedDocumentStore<B> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<B: StoreBackend> From<DocumentStore<B>> for SharedDocumentStore<B> {
    fn from(store: DocumentStore<B>) -> Self {
        Self::new(store)
    }
}

impl<B: StoreBackend> fmt::Debug for SharedDocumentStore<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedDocumentStore").finish_non_exhaustive()
    }
}

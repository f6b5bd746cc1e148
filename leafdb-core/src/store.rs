//! Main document store interface.
//!
//! [`DocumentStore`] is the front end applications use. It drives a [`StoreBackend`],
//! assigns identifiers to inserted documents, and converts the whole store to and
//! from its JSON text form.
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
//! assert_eq!(store.get_by_id(doc.id), Some(doc));
//! println!("{}", store.export_to_json()?);
//! ```
//!
//! # Export format
//!
//! The exported text is a JSON array with one `{"id": <integer>, "data": {...}}`
//! object per document. Importing merges documents into the store by identifier.

use std::io::{Read, Write};

use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    backend::StoreBackend,
    criteria::Criteria,
    document::{Document, DocumentId, Fields, to_fields},
    error::{DocumentStoreError, DocumentStoreResult},
    id::{IdGenerator, IdStrategy},
};

/// A document store bound to a specific backend implementation.
///
/// The store is single-threaded: mutating operations take `&mut self`. Use
/// [`SharedDocumentStore`](crate::shared::SharedDocumentStore) to share one store
/// between tasks.
///
/// # Type Parameters
///
/// * `B` - The backend implementation type
#[derive(Debug)]
pub struct DocumentStore<B: StoreBackend> {
    backend: B,
    ids: IdGenerator,
}

impl<B: StoreBackend> DocumentStore<B> {
    /// Creates a new document store over the given backend with default settings.
    pub fn new(backend: B) -> Self {
        Self::builder(backend).build()
    }

    /// Creates a builder for configuring a store over the given backend.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let store = DocumentStore::builder(InMemoryStore::new())
    ///     .id_strategy(IdStrategy::WallClock)
    ///     .build();
    /// ```
    pub fn builder(backend: B) -> DocumentStoreBuilder<B> {
        DocumentStoreBuilder::new(backend)
    }

    /// Returns a reference to the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Returns the identifier strategy used for inserts.
    pub fn id_strategy(&self) -> IdStrategy {
        self.ids.strategy()
    }

    /// Inserts a new document with the given fields and returns a copy of it.
    ///
    /// The identifier is taken from the wall clock in milliseconds. With
    /// [`IdStrategy::WallClock`], an insert in the same millisecond as an earlier
    /// one replaces it. With [`IdStrategy::Monotonic`], an identifier that is
    /// already taken is skipped in favour of the lowest free one above it.
    pub fn insert(&mut self, data: Fields) -> Document {
        let mut id = self.ids.next_id();

        if self.ids.strategy() == IdStrategy::Monotonic && self.backend.contains_document(id) {
            id = self.free_id_from(id);
        }

        let document = Document::new(id, data);

        if self.backend.insert_document(document.clone()).is_some() {
            warn!(id, "insert replaced an existing document with the same id");
        } else {
            debug!(id, "inserted document");
        }

        document
    }

    /// Returns the lowest identifier at or above `start` with no stored document,
    /// wrapping around below `start` if the range above it is full.
    fn free_id_from(&self, start: DocumentId) -> DocumentId {
        let free = (start..=DocumentId::MAX)
            .chain((DocumentId::MIN..start).rev())
            .find(|id| !self.backend.contains_document(*id))
            .unwrap_or(start);

        debug!(taken = start, id = free, "skipped identifier already in use");

        free
    }

    /// Inserts a serializable record as a new document.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentStoreError::Serialization`] if the record does not encode to a JSON object.
    pub fn insert_record<T: Serialize + ?Sized>(&mut self, record: &T) -> DocumentStoreResult<Document> {
        Ok(self.insert(to_fields(record)?))
    }

    /// Returns a copy of the document with the given identifier, if present.
    pub fn get_by_id(&self, id: DocumentId) -> Option<Document> {
        self.backend.get_document(id)
    }

    /// Deletes the document with the given identifier.
    ///
    /// Deleting a missing identifier is a no-op. Returns the removed document, if any.
    pub fn delete_by_id(&mut self, id: DocumentId) -> Option<Document> {
        let removed = self.backend.delete_document(id);

        if removed.is_some() {
            debug!(id, "deleted document");
        }

        removed
    }

    /// Replaces the fields of an existing document, keeping its identifier.
    ///
    /// Returns `None` without creating anything if the identifier is not present.
    pub fn overwrite_by_id(&mut self, id: DocumentId, data: Fields) -> Option<Document> {
        let replaced = self.backend.replace_document(Document::new(id, data));

        if replaced.is_some() {
            debug!(id, "overwrote document");
        }

        replaced
    }

    /// Returns the first document in the backend's iteration order that matches the criteria.
    pub fn find_first(&self, criteria: &Criteria) -> Option<Document> {
        self.backend
            .query_documents(criteria, Some(1))
            .into_iter()
            .next()
    }

    /// Returns every document that matches the criteria.
    ///
    /// Empty criteria return the whole store.
    pub fn find_documents(&self, criteria: &Criteria) -> Vec<Document> {
        self.backend.query_documents(criteria, None)
    }

    /// Returns the number of stored documents.
    pub fn len(&self) -> usize {
        self.backend.count_documents()
    }

    /// Returns `true` if the store holds no documents.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if a document with the given identifier is stored.
    pub fn contains(&self, id: DocumentId) -> bool {
        self.backend.contains_document(id)
    }

    /// Exports every document as compact JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentStoreError::Serialization`] if a stored value cannot be encoded.
    pub fn export_to_json(&self) -> DocumentStoreResult<String> {
        serde_json::to_string(&self.find_documents(&Criteria::new()))
            .map_err(DocumentStoreError::serialization)
    }

    /// Exports every document as indented JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentStoreError::Serialization`] if a stored value cannot be encoded.
    pub fn export_to_json_pretty(&self) -> DocumentStoreResult<String> {
        serde_json::to_string_pretty(&self.find_documents(&Criteria::new()))
            .map_err(DocumentStoreError::serialization)
    }

    /// Writes every document as compact JSON to `writer`.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentStoreError::Serialization`] if encoding or writing fails.
    pub fn export_to_writer<W: Write>(&self, mut writer: W) -> DocumentStoreResult<()> {
        serde_json::to_writer(&mut writer, &self.find_documents(&Criteria::new()))
            .map_err(DocumentStoreError::serialization)?;

        writer.flush().map_err(DocumentStoreError::serialization)
    }

    /// Merges documents from exported JSON text into the store.
    ///
    /// Each document is stored under its own identifier, replacing any existing
    /// entry there; documents not mentioned in the text are kept. The literal
    /// `null` is accepted as an empty export. Returns the number of imported documents.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentStoreError::Parse`] if the text is not a valid export. The
    /// store is not modified in that case.
    pub fn import_from_json(&mut self, text: &str) -> DocumentStoreResult<usize> {
        let parsed = serde_json::from_str::<Option<Vec<Document>>>(text);

        self.store_imported(parsed)
    }

    /// Merges documents read from `reader` into the store.
    ///
    /// Behaves like [`import_from_json`](Self::import_from_json).
    ///
    /// # Errors
    ///
    /// Returns [`DocumentStoreError::Parse`] if reading fails or the input is not a valid export.
    pub fn import_from_reader<R: Read>(&mut self, reader: R) -> DocumentStoreResult<usize> {
        let parsed = serde_json::from_reader::<_, Option<Vec<Document>>>(reader);

        self.store_imported(parsed)
    }

    fn store_imported(
        &mut self,
        parsed: serde_json::Result<Option<Vec<Document>>>,
    ) -> DocumentStoreResult<usize> {
        let documents = parsed
            .map_err(|err| {
                warn!(error = %err, "rejected import");
                DocumentStoreError::parse(err)
            })?
            .unwrap_or_default();
        let count = documents.len();

        for document in documents {
            self.ids.observe(document.id);
            self.backend.insert_document(document);
        }

        debug!(count, "imported documents");

        Ok(count)
    }
}

/// Builder for configuring a [`DocumentStore`].
#[derive(Debug)]
pub struct DocumentStoreBuilder<B: StoreBackend> {
    backend: B,
    id_strategy: IdStrategy,
}

impl<B: StoreBackend> DocumentStoreBuilder<B> {
    /// Creates a builder over the given backend with default settings.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            id_strategy: IdStrategy::default(),
        }
    }

    /// Sets how identifiers are generated for inserted documents.
    pub fn id_strategy(mut self, id_strategy: IdStrategy) -> Self {
        self.id_strategy = id_strategy;
        self
    }

    /// Builds the store.
    ///
    /// Documents already present in the backend are observed by the identifier
    /// generator, so new identifiers never collide with them under
    /// [`IdStrategy::Monotonic`].
    pub fn build(self) -> DocumentStore<B> {
        let ids = IdGenerator::new(self.id_strategy);

        for document in self.backend.query_documents(&Criteria::new(), None) {
            ids.observe(document.id);
        }

        DocumentStore {
            backend: self.backend,
            ids,
        }
    }
}

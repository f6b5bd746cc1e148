//! Test-only backend used to exercise the front end without a real backend crate.

use crate::{
    backend::StoreBackend,
    criteria::Criteria,
    document::{Document, DocumentId},
};

/// Keeps documents in a vector, in insertion order.
#[derive(Debug, Default)]
pub(crate) struct ListBackend {
    documents: Vec<Document>,
}

impl StoreBackend for ListBackend {
    fn insert_document(&mut self, document: Document) -> Option<Document> {
        match self.documents.iter_mut().find(|doc| doc.id == document.id) {
            Some(existing) => Some(std::mem::replace(existing, document)),
            None => {
                self.documents.push(document);
                None
            }
        }
    }

    fn replace_document(&mut self, document: Document) -> Option<Document> {
        let existing = self.documents.iter_mut().find(|doc| doc.id == document.id)?;
        *existing = document.clone();
        Some(document)
    }

    fn delete_document(&mut self, id: DocumentId) -> Option<Document> {
        let index = self.documents.iter().position(|doc| doc.id == id)?;
        Some(self.documents.remove(index))
    }

    fn get_document(&self, id: DocumentId) -> Option<Document> {
        self.documents.iter().find(|doc| doc.id == id).cloned()
    }

    fn query_documents(&self, criteria: &Criteria, limit: Option<usize>) -> Vec<Document> {
        self.documents
            .iter()
            .filter(|doc| criteria.iter().all(|(field, value)| doc.get(field) == Some(value)))
            .take(limit.unwrap_or(usize::MAX))
            .cloned()
            .collect()
    }

    fn count_documents(&self) -> usize {
        self.documents.len()
    }
}

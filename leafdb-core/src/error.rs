//! Error types and result types for document store operations.
//!
//! Only export and import can fail. Lookups, deletes, overwrites and finds report
//! a missing document as `None` rather than as an error.

use thiserror::Error;

/// Represents all possible errors that can occur when interacting with a document store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentStoreError {
    /// A stored value (or a record being inserted) could not be encoded as JSON,
    /// or the encoded output could not be written.
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Input text was malformed or did not have the shape of an exported store.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DocumentStoreError {
    pub fn serialization(err: impl ToString) -> Self {
        DocumentStoreError::Serialization(err.to_string())
    }

    pub fn parse(err: impl ToString) -> Self {
        DocumentStoreError::Parse(err.to_string())
    }
}

/// A specialized `Result` type for document store operations.
///
/// This type alias is used throughout the crate to indicate operations that may fail
/// with a [`DocumentStoreError`].
pub type DocumentStoreResult<T> = Result<T, DocumentStoreError>;

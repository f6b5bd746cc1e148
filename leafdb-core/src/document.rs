//! Core types for document representation and serialization.
//!
//! A [`Document`] pairs an integer identifier with a mapping of field names to
//! dynamically-typed JSON values. This module also provides helpers for moving
//! between typed Rust records and that untyped field mapping.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value, from_value, to_value};

use crate::error::{DocumentStoreError, DocumentStoreResult};

/// Identifier of a document within a store.
///
/// Identifiers are milliseconds since the Unix epoch at the time of insertion,
/// but imports may place documents at any identifier.
pub type DocumentId = i64;

/// The field mapping held by a document.
///
/// Fields keep their insertion order.
pub type Fields = Map<String, Value>;

/// A single stored document.
///
/// Every `Document` handed out by a store is an owned copy; changing it has no
/// effect on the stored entry. The serialized form is exactly
/// `{"id": <integer>, "data": {...}}`.
///
/// # Example
///
/// ```ignore
/// use leafdb::document::Document;
/// use serde_json::json;
///
/// let doc = Document::new(1, json!({"name": "Alice"}).as_object().cloned().unwrap());
/// assert_eq!(doc.get("name"), Some(&json!("Alice")));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Document {
    /// The document's identifier.
    pub id: DocumentId,
    /// The document's field mapping.
    pub data: Fields,
}

impl Document {
    /// Creates a new document from an identifier and a field mapping.
    pub fn new(id: DocumentId, data: Fields) -> Self {
        Self { id, data }
    }

    /// Returns the document's identifier.
    pub fn id(&self) -> DocumentId {
        self.id
    }

    /// Returns a reference to the document's field mapping.
    pub fn data(&self) -> &Fields {
        &self.data
    }

    /// Consumes the document and returns its field mapping.
    pub fn into_data(self) -> Fields {
        self.data
    }

    /// Returns the value stored under `field`, if any.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.data.get(field)
    }

    /// Decodes the document's data into a typed record.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentStoreError::Parse`] if the data does not have the shape of `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> DocumentStoreResult<T> {
        from_value(Value::Object(self.data.clone())).map_err(DocumentStoreError::parse)
    }
}

/// Converts a serializable record into a field mapping.
///
/// # Errors
///
/// Returns [`DocumentStoreError::Serialization`] if the record cannot be encoded
/// or if its JSON form is not an object.
pub fn to_fields<T: Serialize + ?Sized>(record: &T) -> DocumentStoreResult<Fields> {
    match to_value(record).map_err(DocumentStoreError::serialization)? {
        Value::Object(fields) => Ok(fields),
        other => Err(DocumentStoreError::Serialization(format!(
            "expected a JSON object, found {}",
            value_kind(&other)
        ))),
    }
}

pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

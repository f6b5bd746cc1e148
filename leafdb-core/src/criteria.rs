//! Exact-match criteria for finding documents.
//!
//! A [`Criteria`] is a set of `(field, expected value)` pairs. A document matches
//! when every pair is present in its field mapping with an equal value; fields the
//! criteria do not mention are ignored, and empty criteria match every document.
//!
//! ```ignore
//! use leafdb::criteria::Criteria;
//!
//! let criteria = Criteria::new()
//!     .eq("kind", "player")
//!     .eq("online", true);
//! ```
//!
//! How values are compared is up to the backend evaluating the criteria.

use serde_json::Value;

use crate::document::Fields;

/// A set of exact-match conditions on top-level fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    fields: Fields,
}

impl Criteria {
    /// Creates empty criteria, which match every document.
    pub fn new() -> Self {
        Self { fields: Fields::new() }
    }

    /// Adds the condition that `field` equals `value`.
    ///
    /// A later condition on the same field replaces the earlier one.
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Returns `true` if there are no conditions.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the number of conditions.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Iterates over the `(field, expected value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(field, value)| (field.as_str(), value))
    }
}

impl From<Fields> for Criteria {
    fn from(fields: Fields) -> Self {
        Self { fields }
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Criteria {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(field, value)| (field.into(), value))
                .collect(),
        }
    }
}

//! Criteria evaluation for in-memory document filtering.
//!
//! This module decides whether a document's fields satisfy a [`Criteria`], using an
//! explicit deep equality over JSON values.

use std::collections::HashMap;

use serde_json::{Number, Value};

use leafdb_core::{
    criteria::Criteria,
    document::{Document, DocumentId, Fields},
};

/// Borrowed, comparable view of a JSON value.
///
/// Equality is structural all the way down:
///
/// - values of different kinds are never equal (`"1"` is not `1`, `true` is not `1`)
/// - numbers compare by numeric value, so `1` equals `1.0`
/// - arrays compare element by element, in order
/// - maps compare by key set and per-key value, regardless of key order
#[derive(Debug)]
pub(crate) enum Comparable<'a> {
    /// Null value
    Null,
    /// Boolean value
    Bool(bool),
    /// Numeric value
    Number(&'a Number),
    /// String value
    String(&'a str),
    /// Array of comparable values
    Array(Vec<Comparable<'a>>),
    /// Map/Object of comparable values
    Map(HashMap<&'a str, Comparable<'a>>),
}

impl<'a> From<&'a Value> for Comparable<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Null => Comparable::Null,
            Value::Bool(value) => Comparable::Bool(*value),
            Value::Number(value) => Comparable::Number(value),
            Value::String(value) => Comparable::String(value),
            Value::Array(arr) => Comparable::Array(
                arr
                    .iter()
                    .map(Comparable::from)
                    .collect::<Vec<_>>()
            ),
            Value::Object(map) => Comparable::Map(
                map
                    .iter()
                    .map(|(k, v)| (k.as_str(), Comparable::from(v)))
                    .collect::<HashMap<_, _>>()
            ),
        }
    }
}

impl<'a> PartialEq for Comparable<'a> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Comparable::Null, Comparable::Null) => true,
            (Comparable::Bool(a), Comparable::Bool(b)) => a == b,
            (Comparable::Number(a), Comparable::Number(b)) => numbers_equal(a, b),
            (Comparable::String(a), Comparable::String(b)) => a == b,
            (Comparable::Array(a), Comparable::Array(b)) => a == b,
            (Comparable::Map(a), Comparable::Map(b)) => a == b,
            _ => false,
        }
    }
}

/// Compares numbers by value without rounding.
///
/// Two integers compare exactly. An integer equals a float only when the float is
/// integral and holds that exact value, so `9007199254740993` does not equal
/// `9007199254740992.0`. Two floats compare as `f64`.
fn numbers_equal(a: &Number, b: &Number) -> bool {
    match (integer(a), integer(b)) {
        (Some(a), Some(b)) => a == b,
        (Some(int), None) => b.as_f64().is_some_and(|float| float_is_integer(float, int)),
        (None, Some(int)) => a.as_f64().is_some_and(|float| float_is_integer(float, int)),
        (None, None) => matches!((a.as_f64(), b.as_f64()), (Some(a), Some(b)) if a == b),
    }
}

fn integer(number: &Number) -> Option<i128> {
    number
        .as_i64()
        .map(i128::from)
        .or_else(|| number.as_u64().map(i128::from))
}

// `as` saturates, and every JSON integer is far inside the i128 range
fn float_is_integer(float: f64, int: i128) -> bool {
    float.fract() == 0.0 && float as i128 == int
}

/// Deep equality between two JSON values.
pub fn values_equal(left: &Value, right: &Value) -> bool {
    Comparable::from(left) == Comparable::from(right)
}

pub(crate) struct DocumentEvaluator<'a> {
    fields: &'a Fields,
}

impl<'a> DocumentEvaluator<'a> {
    pub fn new(fields: &'a Fields) -> Self {
        Self { fields }
    }

    /// Returns `true` if every criteria pair is present with an equal value.
    ///
    /// Empty criteria always match.
    pub fn matches(&self, criteria: &Criteria) -> bool {
        criteria
            .iter()
            .all(|(field, expected)| match self.fields.get(field) {
                Some(value) => values_equal(value, expected),
                None => false,
            })
    }

    /// Returns copies of the matching entries, stopping after `limit` matches.
    pub fn filter_documents<I>(
        documents: I,
        criteria: &Criteria,
        limit: Option<usize>,
    ) -> Vec<Document>
    where
        I: IntoIterator<Item = (&'a DocumentId, &'a Fields)>,
    {
        documents
            .into_iter()
            .filter(|(_, data)| DocumentEvaluator::new(data).matches(criteria))
            .take(limit.unwrap_or(usize::MAX))
            .map(|(id, data)| Document::new(*id, data.clone()))
            .collect::<Vec<_>>()
    }
}

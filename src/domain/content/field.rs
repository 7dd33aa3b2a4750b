//! Custom field values attached to content items.
//!
//! Fields form an open key-value map. Values are a closed set of JSON-like
//! shapes plus [`ContentRef`], a typed pointer to another item that always
//! serialises as `{"post_type": ..., "id": ...}`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ContentKind;
use crate::domain::foundation::ContentId;

/// Ordered map of custom field name to value.
pub type CustomFields = BTreeMap<String, FieldValue>;

/// Reference from one content item to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContentRef {
    pub post_type: ContentKind,
    pub id: ContentId,
}

impl ContentRef {
    pub fn new(post_type: ContentKind, id: ContentId) -> Self {
        Self { post_type, id }
    }
}

/// A single custom field value.
///
/// Deserialisation is untagged and order-sensitive: integers are tried
/// before floats, and references before free-form maps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Integer(i64),
    Number(f64),
    Text(String),
    Reference(ContentRef),
    List(Vec<FieldValue>),
    Map(BTreeMap<String, FieldValue>),
}

impl FieldValue {
    /// Integer view of the value. Numeric text is accepted.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(n) => Some(*n),
            FieldValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Floating point view of the value. Integers and numeric text are accepted.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(n) => Some(*n as f64),
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_reference(&self) -> Option<ContentRef> {
        match self {
            FieldValue::Reference(r) => Some(*r),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Integer(n)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<ContentRef> for FieldValue {
    fn from(r: ContentRef) -> Self {
        FieldValue::Reference(r)
    }
}

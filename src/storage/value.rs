//! Dynamic row model.
//!
//! Tables are discovered at runtime, so a row is an ordered list of
//! `(column, value)` pairs and every cell carries its own SQLite storage class.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// A single exported cell.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// SQL NULL
    Null,
    /// INTEGER storage class
    Integer(i64),
    /// REAL storage class
    Real(f64),
    /// TEXT storage class
    Text(String),
    /// BLOB storage class, written as a base64 string
    Blob(Vec<u8>),
    /// TEXT that was decoded into structured JSON
    Json(serde_json::Value),
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Null => serializer.serialize_unit(),
            FieldValue::Integer(i) => serializer.serialize_i64(*i),
            FieldValue::Real(f) => serializer.serialize_f64(*f),
            FieldValue::Text(s) => serializer.serialize_str(s),
            FieldValue::Blob(bytes) => serializer.serialize_str(&BASE64.encode(bytes)),
            FieldValue::Json(value) => value.serialize(serializer),
        }
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Integer(v)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Real(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

impl From<Vec<u8>> for FieldValue {
    fn from(v: Vec<u8>) -> Self {
        FieldValue::Blob(v)
    }
}

/// One record of a table, keyed by column name in column order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    fields: Vec<(String, FieldValue)>,
}

impl Row {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty row with room for `columns` fields.
    pub fn with_capacity(columns: usize) -> Self {
        Self {
            fields: Vec::with_capacity(columns),
        }
    }

    /// Sets `column` to `value`.
    ///
    /// A column that is already present keeps its position and takes the new value.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<FieldValue>) {
        let column = column.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(name, _)| *name == column) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((column, value)),
        }
    }

    /// Builder-style [`Row::insert`].
    pub fn with(mut self, column: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(column, value);
        self
    }

    /// Value of `column`, if the row has it.
    pub fn get(&self, column: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Mutable access to the value of `column`.
    pub fn get_mut(&mut self, column: &str) -> Option<&mut FieldValue> {
        self.fields
            .iter_mut()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Column names in order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the row has no columns.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

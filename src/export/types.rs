//! Export types and options.

use std::path::PathBuf;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::config::{DB_PATH, DOCUMENT_ROOT_KEY, OUTPUT_PATH};
use crate::storage::Row;

/// Options for exporting data.
#[derive(Clone, Debug)]
pub struct ExportOptions {
    /// Database path
    pub db_path: PathBuf,
    /// Output file path
    pub output: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DB_PATH),
            output: PathBuf::from(OUTPUT_PATH),
        }
    }
}

/// Every exported table with its rows, in catalog order.
///
/// Serializes as `{"data": {"<table>": [<row>, ...], ...}}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportDocument {
    tables: Vec<(String, Vec<Row>)>,
}

impl ExportDocument {
    /// Creates a document with no tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a table after those already present.
    pub fn push_table(&mut self, name: impl Into<String>, rows: Vec<Row>) {
        self.tables.push((name.into(), rows));
    }

    /// Rows of `name`, if that table was exported.
    pub fn rows(&self, name: &str) -> Option<&[Row]> {
        self.tables
            .iter()
            .find(|(table, _)| table == name)
            .map(|(_, rows)| rows.as_slice())
    }

    /// Table names in export order.
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().map(|(name, _)| name.as_str())
    }

    /// True when no table was exported.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Per-table row counts.
    pub fn summaries(&self) -> Vec<TableSummary> {
        self.tables
            .iter()
            .map(|(name, rows)| TableSummary {
                name: name.clone(),
                rows: rows.len(),
            })
            .collect()
    }
}

struct TableMap<'a>(&'a [(String, Vec<Row>)]);

impl Serialize for TableMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, rows) in self.0 {
            map.serialize_entry(name, rows)?;
        }
        map.end()
    }
}

impl Serialize for ExportDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(DOCUMENT_ROOT_KEY, &TableMap(&self.tables))?;
        map.end()
    }
}

/// Row count of one exported table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableSummary {
    /// Table name
    pub name: String,
    /// Rows written for the table
    pub rows: usize,
}

/// Results of an export run.
#[derive(Clone, Debug)]
pub struct ExportReport {
    /// Exported tables in output order
    pub tables: Vec<TableSummary>,
    /// Path of the written document
    pub output: PathBuf,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

impl ExportReport {
    /// Rows written across all tables.
    pub fn total_rows(&self) -> usize {
        self.tables.iter().map(|t| t.rows).sum()
    }
}

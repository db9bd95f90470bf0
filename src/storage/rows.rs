//! Reading every row of a table.
//!
//! Columns are not known ahead of time, and SQLite typing is per value rather
//! than per column, so each cell is decoded by the storage class it actually has.

use futures::TryStreamExt;
use log::{debug, warn};
use sqlx::sqlite::SqliteRow;
use sqlx::{Column, Row as _, TypeInfo, ValueRef};

use crate::error_handling::DatabaseError;

use super::value::{FieldValue, Row};
use super::DbPool;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StorageClass {
    Null,
    Integer,
    Real,
    Text,
    Blob,
}

impl StorageClass {
    fn from_type_name(name: &str) -> Self {
        match name {
            "NULL" => StorageClass::Null,
            "INTEGER" | "BOOLEAN" => StorageClass::Integer,
            "REAL" => StorageClass::Real,
            "BLOB" => StorageClass::Blob,
            _ => StorageClass::Text,
        }
    }
}

/// Quotes a table name for use as an SQL identifier.
pub(crate) fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Reads all rows of `table` in the order SQLite returns them.
///
/// No `ORDER BY` is applied; the result follows storage order.
pub async fn read_table(pool: &DbPool, table: &str) -> Result<Vec<Row>, DatabaseError> {
    let sql = format!("SELECT * FROM {}", quote_identifier(table));
    let mut stream = sqlx::query(&sql).fetch(pool);

    let mut rows = Vec::new();
    while let Some(row) = stream.try_next().await? {
        rows.push(decode_row(&row, table)?);
    }

    debug!("Read {} row(s) from {}", rows.len(), table);
    Ok(rows)
}

fn decode_row(row: &SqliteRow, table: &str) -> Result<Row, sqlx::Error> {
    let mut decoded = Row::with_capacity(row.len());
    for column in row.columns() {
        let value = decode_cell(row, column.ordinal())?;
        if let FieldValue::Real(f) = value {
            if !f.is_finite() {
                warn!(
                    "{}.{} holds {}, which JSON cannot represent; writing null",
                    table,
                    column.name(),
                    f
                );
            }
        }
        decoded.insert(column.name(), value);
    }
    Ok(decoded)
}

fn storage_class(row: &SqliteRow, index: usize) -> Result<StorageClass, sqlx::Error> {
    let raw = row.try_get_raw(index)?;
    if raw.is_null() {
        return Ok(StorageClass::Null);
    }
    Ok(StorageClass::from_type_name(raw.type_info().name()))
}

fn decode_cell(row: &SqliteRow, index: usize) -> Result<FieldValue, sqlx::Error> {
    let value = match storage_class(row, index)? {
        StorageClass::Null => FieldValue::Null,
        StorageClass::Integer => FieldValue::Integer(row.try_get_unchecked::<i64, _>(index)?),
        StorageClass::Real => FieldValue::Real(row.try_get_unchecked::<f64, _>(index)?),
        StorageClass::Text => FieldValue::Text(row.try_get_unchecked::<String, _>(index)?),
        StorageClass::Blob => FieldValue::Blob(row.try_get_unchecked::<Vec<u8>, _>(index)?),
    };
    Ok(value)
}

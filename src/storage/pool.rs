//! Database connection pool management.
//!
//! The export only reads, so the pool:
//! - opens the file read-only and never creates it
//! - holds a single connection, which is the one resource released at the end of a run

use std::path::Path;

use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::error_handling::DatabaseError;

/// Connection pool type used throughout the crate.
pub type DbPool = SqlitePool;

/// Opens a read-only pool on an existing database file.
///
/// # Errors
///
/// Returns `DatabaseError::OpenError` when the file is missing, unreadable or
/// not a SQLite database.
pub async fn init_db_pool_with_path(db_path: &Path) -> Result<DbPool, DatabaseError> {
    info!("Connecting to database...");

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .read_only(true)
        .create_if_missing(false);

    SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .map_err(|e| DatabaseError::OpenError {
            path: db_path.display().to_string(),
            source: e,
        })
}

//! Table discovery.

use log::debug;

use crate::config::SEQUENCE_TABLE;
use crate::error_handling::DatabaseError;

use super::DbPool;

/// Lists every table in catalog order, skipping `sqlite_sequence`.
pub async fn list_tables(pool: &DbPool) -> Result<Vec<String>, DatabaseError> {
    let names: Vec<String> =
        sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type='table'")
            .fetch_all(pool)
            .await?;

    let tables: Vec<String> = names
        .into_iter()
        .filter(|name| name != SEQUENCE_TABLE)
        .collect();
    debug!("Found {} table(s): {:?}", tables.len(), tables);
    Ok(tables)
}

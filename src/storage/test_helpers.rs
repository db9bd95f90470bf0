//! Shared test helpers for storage and export module tests.

#[cfg(test)]
use sqlx::sqlite::SqlitePoolOptions;
#[cfg(test)]
use sqlx::SqlitePool;

/// Creates an in-memory database and runs `statements` against it.
///
/// The pool is capped at one connection so every query sees the same
/// in-memory database.
#[cfg(test)]
pub async fn create_memory_pool(statements: &[&str]) -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database pool");
    for statement in statements {
        sqlx::query(statement)
            .execute(&pool)
            .await
            .unwrap_or_else(|e| panic!("Failed to execute {statement}: {e}"));
    }
    pool
}

// Shared test helpers for building SQLite fixture files.

use sqlx::sqlite::SqliteConnectOptions;
use sqlx::SqlitePool;
use std::path::Path;

/// Creates (or reuses) a database file at `db_path` and runs `statements`.
/// The pool is closed before returning so the export can open the file.
pub async fn create_database(db_path: &Path, statements: &[&str]) {
    let pool = SqlitePool::connect_with(
        SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true),
    )
    .await
    .expect("Failed to create test database");

    for statement in statements {
        sqlx::query(statement)
            .execute(&pool)
            .await
            .unwrap_or_else(|e| panic!("Failed to execute {statement}: {e}"));
    }

    pool.close().await;
}

/// The users/tickets fixture used by most export tests.
#[allow(dead_code)] // Used by other test files
pub async fn create_restaurant_database(db_path: &Path) {
    create_database(
        db_path,
        &[
            "CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT)",
            "CREATE TABLE tickets (id INTEGER PRIMARY KEY, items TEXT)",
            "INSERT INTO users (id, name) VALUES (1, 'Ana')",
            r#"INSERT INTO tickets (id, items) VALUES (1, '[{"sku":"A1"}]')"#,
        ],
    )
    .await;
}

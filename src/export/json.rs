//! JSON export functionality.
//!
//! Reads every table of the database into one [`ExportDocument`] and writes it
//! as a single pretty-printed JSON file.

use std::time::Instant;

use anyhow::{Context, Result};
use log::info;

use crate::error_handling::DatabaseError;
use crate::storage::{init_db_pool_with_path, list_tables, read_table, DbPool};

use super::transform::post_process;
use super::types::{ExportDocument, ExportOptions, ExportReport};
use super::writer::write_document;

/// Exports all tables of `opts.db_path` to `opts.output`.
///
/// The connection is closed before returning on every path, whether the read
/// succeeded or not. The output file is only replaced once the whole document
/// has been built and written.
///
/// # Errors
///
/// Returns an error if the database cannot be opened, a table cannot be read,
/// or the output file cannot be written.
pub async fn export_database(opts: &ExportOptions) -> Result<ExportReport> {
    let start_time = Instant::now();

    let pool = init_db_pool_with_path(&opts.db_path)
        .await
        .context("Failed to connect to database")?;

    let collected = collect_document(&pool).await;
    pool.close().await;
    let document = collected.context("Failed to read database")?;

    write_document(&document, &opts.output).with_context(|| {
        format!("Failed to write export to {}", opts.output.display())
    })?;

    let report = ExportReport {
        tables: document.summaries(),
        output: opts.output.clone(),
        elapsed_seconds: start_time.elapsed().as_secs_f64(),
    };
    info!(
        "Exported {} table(s), {} row(s) in {:.2}s",
        report.tables.len(),
        report.total_rows(),
        report.elapsed_seconds
    );
    Ok(report)
}

/// Reads and post-processes every table into a document.
pub async fn collect_document(pool: &DbPool) -> Result<ExportDocument, DatabaseError> {
    let mut document = ExportDocument::new();
    for table in list_tables(pool).await? {
        info!("Exporting table: {}", table);
        let mut rows = read_table(pool, &table).await?;
        post_process(&table, &mut rows);
        document.push_table(table, rows);
    }
    Ok(document)
}

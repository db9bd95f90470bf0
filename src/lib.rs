//! sqlite_export library: dump every table of a SQLite file into one JSON document
//!
//! Tables are discovered from the database catalog (the internal
//! `sqlite_sequence` table is skipped), every row is read with its column
//! order preserved, and the `items` column of the `tickets` table is decoded
//! from JSON text into structured JSON when it parses.
//!
//! # Example
//!
//! ```no_run
//! use sqlite_export::{export_database, ExportOptions};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> anyhow::Result<()> {
//! let report = export_database(&ExportOptions::default()).await?;
//! println!("Exported {} tables to {}", report.tables.len(), report.output.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. The export itself is strictly
//! sequential, so a `current_thread` runtime is enough.

#![warn(missing_docs)]

pub mod config;
mod error_handling;
pub mod export;
pub mod initialization;
mod storage;

// Re-export public API
pub use config::{LogFormat, LogLevel, Opt};
pub use error_handling::{DatabaseError, ExportError, InitializationError};
pub use export::{export_database, ExportDocument, ExportOptions, ExportReport, TableSummary};
pub use storage::{FieldValue, Row};

//! Configuration constants.
//!
//! The export reads and writes fixed locations relative to the working
//! directory. Table and column names that receive special handling live here too.

/// SQLite database file read by the export.
pub const DB_PATH: &str = "dump_restaurante.db";

/// JSON document written by the export.
pub const OUTPUT_PATH: &str = "extracted_data.json";

/// Internal table SQLite uses to track AUTOINCREMENT counters. Never exported.
pub const SEQUENCE_TABLE: &str = "sqlite_sequence";

/// Table whose `items` column holds JSON text.
pub const TICKETS_TABLE: &str = "tickets";

/// Column of [`TICKETS_TABLE`] decoded into structured JSON when possible.
pub const ITEMS_COLUMN: &str = "items";

/// Key wrapping the table mapping in the output document.
pub const DOCUMENT_ROOT_KEY: &str = "data";

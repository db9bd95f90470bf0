//! Error handling.
//!
//! Errors are split by the stage that produced them:
//! - **Initialization**: logger setup
//! - **Database**: opening the file, reading the catalog or a table
//! - **Export**: serializing and writing the output document
//!
//! A failed `items` decode is not an error; the original text is kept.

mod types;

// Re-export public API
pub use types::{DatabaseError, ExportError, InitializationError};

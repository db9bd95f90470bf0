//! Export functionality.
//!
//! This module reads every table of a SQLite database and writes them into a
//! single JSON document:
//!
//! ```text
//! {
//!   "data": {
//!     "<table>": [ { "<column>": <value>, ... }, ... ]
//!   }
//! }
//! ```

mod json;
mod transform;
mod types;
mod writer;

pub use json::{collect_document, export_database};
pub use transform::post_process;
pub use types::{ExportDocument, ExportOptions, ExportReport, TableSummary};
pub use writer::write_document;

//! Application initialization.
//!
//! Only the logger needs process-wide setup; the database pool is opened and
//! closed by the export itself.

mod logger;

// Re-export public API
pub use logger::init_logger_with;

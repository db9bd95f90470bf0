//! Error type definitions.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for database operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The database file could not be opened.
    #[error("unable to open database file {path}: {source}")]
    OpenError {
        /// Path that was opened
        path: String,
        /// Underlying driver error
        #[source]
        source: sqlx::Error,
    },

    /// SQL execution error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),
}

/// Error types for writing the export document.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The document could not be encoded or streamed to the output file.
    #[error("failed to encode export document: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Creating, syncing or renaming the output file failed.
    #[error("failed to write {path}: {source}")]
    Io {
        /// Output path being written
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

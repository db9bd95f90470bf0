//! Application configuration and constants.
//!
//! This module provides:
//! - Fixed paths and table names used by the export
//! - Logging option types and CLI parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{LogFormat, LogLevel, Opt};

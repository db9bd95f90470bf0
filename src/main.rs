//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `sqlite_export` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output and exit status
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use sqlite_export::initialization::init_logger_with;
use sqlite_export::{export_database, ExportOptions, Opt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let opt = Opt::parse();

    init_logger_with(opt.log_level.into(), opt.log_format)
        .context("Failed to initialize logger")?;

    match export_database(&ExportOptions::default()).await {
        Ok(report) => {
            println!(
                "Export complete: {} ({} table{}, {} row{})",
                report.output.display(),
                report.tables.len(),
                if report.tables.len() == 1 { "" } else { "s" },
                report.total_rows(),
                if report.total_rows() == 1 { "" } else { "s" },
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

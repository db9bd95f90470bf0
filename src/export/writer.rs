//! Writing the export document to disk.
//!
//! The document is written to a temporary file next to the destination and
//! renamed over it once complete. A failed run never leaves a partial file and
//! never clobbers an earlier export.

use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::error_handling::ExportError;

use super::types::ExportDocument;

/// Writes `document` as pretty-printed JSON (2-space indent, non-ASCII text
/// kept literal) to `path`, replacing any existing file.
pub fn write_document(document: &ExportDocument, path: &Path) -> Result<(), ExportError> {
    let io_error = |source: std::io::Error| ExportError::Io {
        path: path.display().to_string(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let tmp = tempfile::Builder::new()
        .prefix(".sqlite_export")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(io_error)?;

    let mut writer = BufWriter::new(tmp);
    serde_json::to_writer_pretty(&mut writer, document).map_err(|e| encode_error(path, e))?;
    writer.flush().map_err(io_error)?;
    let tmp = writer
        .into_inner()
        .map_err(|e| io_error(e.into_error()))?;
    tmp.as_file().sync_all().map_err(io_error)?;

    // Temp files are created owner-only
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .map_err(io_error)?;
    }

    tmp.persist(path).map_err(|e| io_error(e.error))?;
    debug!("Wrote {}", path.display());
    Ok(())
}

/// Splits encoder failures: I/O errors surfaced through serde_json name the output file.
fn encode_error(path: &Path, e: serde_json::Error) -> ExportError {
    if e.is_io() {
        ExportError::Io {
            path: path.display().to_string(),
            source: e.into(),
        }
    } else {
        ExportError::Serialize(e)
    }
}

//! Container handling for encoded streams
//!
//! An encoded stream is persisted verbatim; these helpers only move whole
//! buffers between memory and disk.

pub mod wav;

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Conventional extension for encoded output
pub const ENCODED_EXTENSION: &str = "wav";

/// Detect whether a path carries the conventional encoded-stream extension
pub fn is_encoded_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(ENCODED_EXTENSION))
        .unwrap_or(false)
}

/// Read an entire encoded stream from disk
pub fn read_encoded(path: &Path) -> Result<Vec<u8>> {
    let data = fs::read(path).map_err(|e| {
        Error::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to read {}: {}", path.display(), e),
        ))
    })?;
    debug!("Read {} bytes from {}", data.len(), path.display());
    Ok(data)
}

/// Write an encoded stream to disk, replacing any existing file
pub fn write_encoded(path: &Path, data: &[u8]) -> Result<()> {
    fs::write(path, data).map_err(|e| {
        Error::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to write {}: {}", path.display(), e),
        ))
    })?;
    debug!("Wrote {} bytes to {}", data.len(), path.display());
    Ok(())
}

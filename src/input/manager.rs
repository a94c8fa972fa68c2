//! Ingestion entry points
//!
//! Detects the upload format from the filename, buffers the bytes fully into
//! memory (single read, nothing is re-read afterwards), and hands them to the
//! matching extractor.

use crate::error::{FeedbackError, Result};
use crate::input::extractor;
use crate::input::format::FormatKind;
use crate::processing::table::Table;
use log::info;
use std::path::Path;
use tokio::fs;

/// Extract a raw table from an uploaded byte buffer with a declared filename.
pub fn ingest_bytes(filename: &str, bytes: &[u8]) -> Result<Table> {
    let format = FormatKind::from_path(Path::new(filename))?;
    info!("ingesting '{}' as {}", filename, format);
    extractor::extract(format, bytes)
}

/// Read a feedback file from disk and extract a raw table from it.
pub async fn ingest_file(path: &Path) -> Result<Table> {
    if !path.exists() {
        return Err(FeedbackError::InvalidInput(format!(
            "file does not exist: {}",
            path.display()
        )));
    }

    let format = FormatKind::from_path(path)?;
    info!("ingesting '{}' as {}", path.display(), format);

    let bytes = fs::read(path).await?;
    extractor::extract(format, &bytes)
}

//! File format detection

use crate::error::{FeedbackError, Result};
use std::path::Path;

/// The closed set of upload formats the ingestion pipeline understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    Csv,
    Json,
    JsonLines,
    PlainText,
    Pdf,
    WordDocument,
}

impl FormatKind {
    /// Map a lowercase filename suffix to a format. Unknown suffixes are an
    /// error rather than a fallback: the pipeline never guesses at bytes.
    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.to_lowercase().as_str() {
            "csv" => Ok(FormatKind::Csv),
            "json" => Ok(FormatKind::Json),
            "jsonl" => Ok(FormatKind::JsonLines),
            "txt" => Ok(FormatKind::PlainText),
            "pdf" => Ok(FormatKind::Pdf),
            "docx" => Ok(FormatKind::WordDocument),
            other => Err(FeedbackError::UnsupportedFormat(format!(
                ".{} (supported: .csv, .json, .jsonl, .txt, .pdf, .docx)",
                other
            ))),
        }
    }

    /// Detect the format from a file path, using the suffix after the last `.`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                FeedbackError::UnsupportedFormat(format!(
                    "file has no extension: {}",
                    path.display()
                ))
            })?;
        Self::from_extension(ext)
    }

    /// True for formats that carry their own column structure.
    pub fn is_tabular(&self) -> bool {
        matches!(
            self,
            FormatKind::Csv | FormatKind::Json | FormatKind::JsonLines
        )
    }
}

impl std::fmt::Display for FormatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatKind::Csv => write!(f, "CSV"),
            FormatKind::Json => write!(f, "JSON"),
            FormatKind::JsonLines => write!(f, "JSON Lines"),
            FormatKind::PlainText => write!(f, "plain text"),
            FormatKind::Pdf => write!(f, "PDF"),
            FormatKind::WordDocument => write!(f, "Word document"),
        }
    }
}

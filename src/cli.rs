//! CLI interface for feedback insights

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Extensions the ingestion pipeline accepts.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["csv", "json", "jsonl", "txt", "pdf", "docx"];

#[derive(Parser)]
#[command(name = "feedback-insights")]
#[command(about = "Convert unstructured feedback into structured, analyzable sentiment data")]
#[command(
    long_about = "Ingest a feedback file (CSV, JSON, JSON Lines, plain text, PDF, or DOCX), label every record with a sentiment, and export the result as CSV"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a feedback file and export the labeled table
    Analyze {
        /// Path to the feedback file (CSV, JSON, JSONL, TXT, PDF, DOCX)
        #[arg(short, long)]
        input: PathBuf,

        /// Where to write the CSV export (default: structured_feedback.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print every row instead of a preview
        #[arg(short, long)]
        detailed: bool,

        /// Skip the CSV export, console output only
        #[arg(long)]
        no_export: bool,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Validate file extension before the pipeline runs
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_supported_extension() {
        let path = PathBuf::from("feedback.csv");
        assert!(validate_file_extension(&path, SUPPORTED_EXTENSIONS).is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_extension() {
        let path = PathBuf::from("feedback.xlsx");
        assert!(validate_file_extension(&path, SUPPORTED_EXTENSIONS).is_err());
    }

    #[test]
    fn test_validate_rejects_missing_extension() {
        let path = PathBuf::from("feedback");
        assert!(validate_file_extension(&path, SUPPORTED_EXTENSIONS).is_err());
    }
}

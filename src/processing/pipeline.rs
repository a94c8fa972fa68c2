//! The ingestion-to-labeling pipeline
//!
//! Strict linear flow: detect format, extract, normalize, label. Any stage
//! failure aborts the run; nothing downstream executes and no partial table
//! is produced.

use crate::config::ProcessingConfig;
use crate::error::Result;
use crate::input::manager;
use crate::processing::normalizer;
use crate::processing::table::Table;
use crate::sentiment::SentimentAnalyzer;
use log::info;
use std::path::Path;

/// Column added for the categorical label.
pub const SENTIMENT_COLUMN: &str = "Sentiment";
/// Column added for the numeric polarity score.
pub const POLARITY_COLUMN: &str = "Polarity Score";

/// Run the full pipeline over a feedback file on disk.
pub async fn process_file(
    path: &Path,
    analyzer: &SentimentAnalyzer,
    config: &ProcessingConfig,
) -> Result<Table> {
    let raw = manager::ingest_file(path).await?;
    finish(raw, analyzer, config)
}

/// Run the full pipeline over an uploaded byte buffer.
pub fn process_bytes(
    filename: &str,
    bytes: &[u8],
    analyzer: &SentimentAnalyzer,
    config: &ProcessingConfig,
) -> Result<Table> {
    let raw = manager::ingest_bytes(filename, bytes)?;
    finish(raw, analyzer, config)
}

fn finish(raw: Table, analyzer: &SentimentAnalyzer, config: &ProcessingConfig) -> Result<Table> {
    let normalized = normalizer::normalize(raw, &config.text_column)?;
    info!("{} record(s) after normalization", normalized.row_count());
    label_table(normalized, analyzer, config)
}

/// Append the `Sentiment` (and optionally `Polarity Score`) columns, one
/// value per record. Expects a normalized table.
pub fn label_table(
    mut table: Table,
    analyzer: &SentimentAnalyzer,
    config: &ProcessingConfig,
) -> Result<Table> {
    let positions = table.column_positions(&config.text_column);
    let text_idx = match positions.as_slice() {
        [idx] => *idx,
        _ => {
            return Err(crate::error::FeedbackError::MissingTextColumn(format!(
                "expected exactly one '{}' column, found {}",
                config.text_column,
                positions.len()
            )));
        }
    };

    let mut labels = Vec::with_capacity(table.row_count());
    let mut scores = Vec::with_capacity(table.row_count());
    for row in table.rows() {
        let (label, score) = analyzer.label(&row[text_idx]);
        labels.push(label.to_string());
        scores.push(format!("{:.4}", score));
    }

    table.append_column(SENTIMENT_COLUMN, labels)?;
    if config.include_polarity {
        table.append_column(POLARITY_COLUMN, scores)?;
    }
    Ok(table)
}

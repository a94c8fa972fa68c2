//! CSV export of the labeled table

use crate::error::{FeedbackError, Result};
use crate::processing::table::Table;
use log::info;
use std::path::Path;

/// Default name of the downloadable export.
pub const DEFAULT_EXPORT_NAME: &str = "structured_feedback.csv";

/// Serialize the table to UTF-8, comma-delimited CSV with a header row.
pub fn to_csv_bytes(table: &Table) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(table.columns())?;
    for row in table.rows() {
        writer.write_record(row)?;
    }
    writer
        .into_inner()
        .map_err(|e| FeedbackError::InvalidInput(format!("CSV buffer flush failed: {}", e)))
}

/// Write the CSV export to disk.
pub fn write_csv(table: &Table, path: &Path) -> Result<()> {
    let bytes = to_csv_bytes(table)?;
    std::fs::write(path, bytes)?;
    info!(
        "wrote {} data row(s) to {}",
        table.row_count(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_bytes_have_header_and_rows() {
        let mut table = Table::from_text_lines("good\nbad, very bad\n");
        table
            .append_column("Sentiment", vec!["Positive".into(), "Negative".into()])
            .unwrap();

        let bytes = to_csv_bytes(&table).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Feedback,Sentiment");
        assert_eq!(lines[1], "good,Positive");
        // Embedded comma gets quoted.
        assert_eq!(lines[2], "\"bad, very bad\",Negative");
    }

    #[test]
    fn test_write_csv_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_EXPORT_NAME);

        let table = Table::from_text_lines("one\ntwo\n");
        write_csv(&table, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("Feedback\n"));
        assert_eq!(written.lines().count(), 3);
    }
}

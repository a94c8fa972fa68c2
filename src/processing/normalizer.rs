//! Record normalization
//!
//! Guarantees that an extracted table exposes a single designated text column
//! before labeling runs. Blank records are dropped here, and a table that ends
//! up with no records at all is rejected.

use crate::error::{FeedbackError, Result};
use crate::processing::table::Table;
use log::warn;

/// Normalize an extracted table around the designated text column.
///
/// If the table already carries exactly one column with the designated name,
/// it is kept untouched apart from blank-row filtering. If the name is absent,
/// the table collapses to its *first* column, renamed: the first column is
/// assumed to hold the feedback text and everything else is discarded, so the
/// collapse is logged loudly. Normalizing an already-normalized table is a
/// no-op.
pub fn normalize(mut table: Table, text_column: &str) -> Result<Table> {
    if table.columns().is_empty() {
        return Err(FeedbackError::MissingTextColumn(
            "input has no columns".to_string(),
        ));
    }

    let positions = table.column_positions(text_column);
    match positions.len() {
        1 => table.retain_non_blank(positions[0]),
        0 => {
            warn!(
                "no '{}' column found; collapsing to first column '{}' and dropping {} other column(s)",
                text_column,
                table.columns()[0],
                table.columns().len() - 1
            );
            table.collapse_to_column(0, text_column);
        }
        n => {
            return Err(FeedbackError::MissingTextColumn(format!(
                "column '{}' appears {} times",
                text_column, n
            )));
        }
    }

    if table.is_empty() {
        return Err(FeedbackError::EmptyInput);
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::table::TEXT_COLUMN;

    fn table(columns: &[&str], rows: &[&[&str]]) -> Table {
        let mut t = Table::new(columns.iter().map(|c| c.to_string()).collect());
        for row in rows {
            t.push_row(row.iter().map(|c| c.to_string()).collect()).unwrap();
        }
        t
    }

    #[test]
    fn test_designated_column_kept_as_is() {
        let input = table(
            &["Feedback", "Date"],
            &[&["great", "2024-01-01"], &["bad", "2024-01-02"]],
        );
        let normalized = normalize(input.clone(), TEXT_COLUMN).unwrap();
        assert_eq!(normalized, input);
    }

    #[test]
    fn test_blank_feedback_rows_dropped() {
        let input = table(
            &["Feedback", "Date"],
            &[&["great", "2024-01-01"], &["  ", "2024-01-02"]],
        );
        let normalized = normalize(input, TEXT_COLUMN).unwrap();
        assert_eq!(normalized.row_count(), 1);
        assert_eq!(normalized.rows()[0][0], "great");
    }

    #[test]
    fn test_first_column_collapse_heuristic() {
        // No "Feedback" column: the first column is assumed to be the text and
        // every other column is discarded. Deliberately surprising, pinned here.
        let input = table(
            &["Comment", "Date"],
            &[&["loved it", "2024-01-01"], &["hated it", "2024-01-02"]],
        );
        let normalized = normalize(input, TEXT_COLUMN).unwrap();
        assert_eq!(normalized.columns(), &[TEXT_COLUMN.to_string()]);
        assert_eq!(normalized.row_count(), 2);
        assert_eq!(normalized.rows()[0], vec!["loved it".to_string()]);
        assert_eq!(normalized.rows()[1], vec!["hated it".to_string()]);
    }

    #[test]
    fn test_idempotence() {
        let input = table(&["Comment", "Date"], &[&["fine", "2024-01-01"]]);
        let once = normalize(input, TEXT_COLUMN).unwrap();
        let twice = normalize(once.clone(), TEXT_COLUMN).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_duplicate_designated_columns_rejected() {
        let input = table(&["Feedback", "Feedback"], &[&["a", "b"]]);
        let err = normalize(input, TEXT_COLUMN).unwrap_err();
        assert!(matches!(err, FeedbackError::MissingTextColumn(_)));
    }

    #[test]
    fn test_no_columns_rejected() {
        let err = normalize(Table::new(Vec::new()), TEXT_COLUMN).unwrap_err();
        assert!(matches!(err, FeedbackError::MissingTextColumn(_)));
    }

    #[test]
    fn test_all_blank_rows_is_empty_input() {
        let input = table(&["Feedback"], &[&["   "], &[""]]);
        let err = normalize(input, TEXT_COLUMN).unwrap_err();
        assert!(matches!(err, FeedbackError::EmptyInput));
    }

    #[test]
    fn test_zero_rows_is_empty_input() {
        let input = table(&["Feedback"], &[]);
        let err = normalize(input, TEXT_COLUMN).unwrap_err();
        assert!(matches!(err, FeedbackError::EmptyInput));
    }
}

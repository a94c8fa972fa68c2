//! Tabular structures for feedback records

use crate::error::{FeedbackError, Result};
use serde::{Deserialize, Serialize};

/// Column name every normalized table exposes as its text column.
pub const TEXT_COLUMN: &str = "Feedback";

/// An ordered table of string cells. Rows keep the order of appearance in the
/// source file; columns keep the order of the source header (or key order for
/// JSON inputs).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Build a one-column table from free text: split on line boundaries,
    /// trim each line, drop the ones that end up empty. This is the shared
    /// rule for plain text, PDF, and Word inputs.
    pub fn from_text_lines(text: &str) -> Self {
        let rows = text
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .map(|line| vec![line.to_string()])
            .collect();

        Self {
            columns: vec![TEXT_COLUMN.to_string()],
            rows,
        }
    }

    /// Append a row. Cell count must match the column count.
    pub fn push_row(&mut self, row: Vec<String>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(FeedbackError::InvalidInput(format!(
                "row has {} cells but table has {} columns",
                row.len(),
                self.columns.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Positions of every column with the given name (headers can repeat).
    pub fn column_positions(&self, name: &str) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, col)| col.as_str() == name)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// All cell values of one column, in row order.
    pub fn column_values(&self, index: usize) -> Vec<&str> {
        self.rows
            .iter()
            .map(|row| row[index].as_str())
            .collect()
    }

    /// Append a derived column. Value count must match the row count.
    pub fn append_column(&mut self, name: &str, values: Vec<String>) -> Result<()> {
        if values.len() != self.rows.len() {
            return Err(FeedbackError::InvalidInput(format!(
                "column '{}' has {} values but table has {} rows",
                name,
                values.len(),
                self.rows.len()
            )));
        }
        self.columns.push(name.to_string());
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.push(value);
        }
        Ok(())
    }

    /// Keep only the column at `index`, renamed to `name`, and drop rows whose
    /// remaining cell is blank after trimming.
    pub fn collapse_to_column(&mut self, index: usize, name: &str) {
        self.columns = vec![name.to_string()];
        self.rows = self
            .rows
            .drain(..)
            .map(|mut row| vec![row.swap_remove(index)])
            .filter(|row| !row[0].trim().is_empty())
            .collect();
    }

    /// Drop rows whose cell at `index` is blank after trimming.
    pub fn retain_non_blank(&mut self, index: usize) {
        self.rows.retain(|row| !row[index].trim().is_empty());
    }
}

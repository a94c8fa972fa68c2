//! Format-specific text extraction
//!
//! Every extractor takes the fully buffered upload bytes and produces a
//! [`Table`] in a single pass. Tabular formats keep their source columns;
//! document formats are reduced to text and split into line records.

use crate::error::{FeedbackError, Result};
use crate::input::docx;
use crate::input::format::FormatKind;
use crate::processing::table::{Table, TEXT_COLUMN};
use log::debug;
use serde_json::Value;

/// Run the extractor matching `format` over the raw upload bytes.
pub fn extract(format: FormatKind, bytes: &[u8]) -> Result<Table> {
    debug!("extracting {} input ({} bytes)", format, bytes.len());
    match format {
        FormatKind::Csv => extract_csv(bytes),
        FormatKind::Json => extract_json(bytes),
        FormatKind::JsonLines => extract_json_lines(bytes),
        FormatKind::PlainText => extract_plain_text(bytes),
        FormatKind::Pdf => extract_pdf(bytes),
        FormatKind::WordDocument => extract_word_document(bytes),
    }
}

fn extract_csv(bytes: &[u8]) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new().from_reader(bytes);

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| FeedbackError::extraction(FormatKind::Csv, e))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut table = Table::new(columns);
    for record in reader.records() {
        let record = record.map_err(|e| FeedbackError::extraction(FormatKind::Csv, e))?;
        table.push_row(record.iter().map(|cell| cell.to_string()).collect())?;
    }
    Ok(table)
}

fn extract_json(bytes: &[u8]) -> Result<Table> {
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| FeedbackError::extraction(FormatKind::Json, e))?;

    match value {
        Value::Array(values) => records_to_table(values, FormatKind::Json),
        _ => Err(FeedbackError::extraction(
            FormatKind::Json,
            "expected a top-level array of records",
        )),
    }
}

fn extract_json_lines(bytes: &[u8]) -> Result<Table> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| FeedbackError::extraction(FormatKind::JsonLines, e))?;

    let mut values = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let value: Value = serde_json::from_str(line)
            .map_err(|e| FeedbackError::extraction(FormatKind::JsonLines, e))?;
        values.push(value);
    }
    records_to_table(values, FormatKind::JsonLines)
}

fn extract_plain_text(bytes: &[u8]) -> Result<Table> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| FeedbackError::extraction(FormatKind::PlainText, e))?;
    Ok(Table::from_text_lines(text))
}

fn extract_pdf(bytes: &[u8]) -> Result<Table> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| FeedbackError::extraction(FormatKind::Pdf, e))?;
    Ok(Table::from_text_lines(&text))
}

fn extract_word_document(bytes: &[u8]) -> Result<Table> {
    let paragraphs = docx::extract_paragraphs(bytes)?;
    Ok(Table::from_text_lines(&paragraphs.join("\n")))
}

/// Turn a list of JSON values into a table. An array of objects keeps every
/// key as a column (first-seen order); an array of scalars becomes a
/// one-column text table. Mixing the two shapes is a parse error.
fn records_to_table(values: Vec<Value>, format: FormatKind) -> Result<Table> {
    if values.is_empty() {
        return Ok(Table::new(vec![TEXT_COLUMN.to_string()]));
    }

    if values.iter().all(|v| v.is_object()) {
        let mut columns: Vec<String> = Vec::new();
        for value in &values {
            if let Value::Object(map) = value {
                for key in map.keys() {
                    if !columns.iter().any(|c| c == key) {
                        columns.push(key.clone());
                    }
                }
            }
        }

        let mut table = Table::new(columns.clone());
        for value in &values {
            if let Value::Object(map) = value {
                let row = columns
                    .iter()
                    .map(|col| map.get(col).map(cell_text).unwrap_or_default())
                    .collect();
                table.push_row(row)?;
            }
        }
        return Ok(table);
    }

    if values.iter().all(|v| !v.is_object() && !v.is_array()) {
        let mut table = Table::new(vec![TEXT_COLUMN.to_string()]);
        for value in &values {
            table.push_row(vec![cell_text(value)])?;
        }
        return Ok(table);
    }

    Err(FeedbackError::extraction(
        format,
        "records must be all objects or all scalar values",
    ))
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

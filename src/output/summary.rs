//! Console presentation of the labeled table

use crate::processing::pipeline::SENTIMENT_COLUMN;
use crate::processing::table::Table;
use colored::Colorize;

const BAR_WIDTH: usize = 30;

/// Print the first `max_rows` rows of the table in a fixed-width layout.
pub fn print_preview(table: &Table, max_rows: usize, use_colors: bool) {
    let widths = column_widths(table, max_rows);

    let header: Vec<String> = table
        .columns()
        .iter()
        .zip(&widths)
        .map(|(col, w)| format!("{:<width$}", col, width = w))
        .collect();
    let header = header.join("  ");
    if use_colors {
        println!("{}", header.bold());
    } else {
        println!("{}", header);
    }

    for row in table.rows().iter().take(max_rows) {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{:<width$}", truncate(cell, 60), width = w))
            .collect();
        println!("{}", line.join("  "));
    }

    if table.row_count() > max_rows {
        println!("... and {} more row(s)", table.row_count() - max_rows);
    }
}

/// Print sentiment value counts with a proportional bar, most frequent first.
pub fn print_distribution(table: &Table, use_colors: bool) {
    let positions = table.column_positions(SENTIMENT_COLUMN);
    let Some(&idx) = positions.first() else {
        return;
    };

    let mut counts: Vec<(String, usize)> = Vec::new();
    for row in table.rows() {
        let label = row[idx].as_str();
        match counts.iter_mut().find(|(l, _)| l == label) {
            Some((_, n)) => *n += 1,
            None => counts.push((label.to_string(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let total = table.row_count().max(1);
    println!("\nSentiment Distribution");
    for (label, count) in counts {
        let fraction = count as f64 / total as f64;
        let filled = ((fraction * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
        let bar = "█".repeat(filled);
        let bar = if use_colors {
            colorize_label_bar(&label, bar)
        } else {
            bar
        };
        println!(
            "  {:<8} {:>4}  {} {:.1}%",
            label,
            count,
            bar,
            fraction * 100.0
        );
    }
}

fn colorize_label_bar(label: &str, bar: String) -> String {
    match label {
        "Positive" => bar.green().to_string(),
        "Negative" => bar.red().to_string(),
        _ => bar.yellow().to_string(),
    }
}

fn column_widths(table: &Table, max_rows: usize) -> Vec<usize> {
    let mut widths: Vec<usize> = table.columns().iter().map(|c| c.chars().count()).collect();
    for row in table.rows().iter().take(max_rows) {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(truncate(cell, 60).chars().count());
        }
    }
    widths
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars - 3).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("short", 60), "short");
    }

    #[test]
    fn test_truncate_long_text() {
        let long = "x".repeat(100);
        let cut = truncate(&long, 60);
        assert_eq!(cut.chars().count(), 60);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_column_widths_cover_header_and_cells() {
        let mut table = Table::from_text_lines("tiny\nsomewhat longer cell\n");
        table
            .append_column("S", vec!["a".into(), "b".into()])
            .unwrap();
        let widths = column_widths(&table, 10);
        assert_eq!(widths[0], "somewhat longer cell".len());
        assert_eq!(widths[1], 1);
    }
}

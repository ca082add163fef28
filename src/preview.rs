use indexmap::IndexMap;
use serde_json::Value;

use crate::excel::{Row, Table};

pub const DEFAULT_PREVIEW_ROWS: usize = 10;

pub type PreviewRows = Vec<IndexMap<String, Value>>;

/// The first `n` rows of `table`, or all of them when it has fewer.
pub fn preview(table: &Table, n: usize) -> &[Row] {
    let rows = table.rows();
    &rows[..n.min(rows.len())]
}

// Non-ASCII characters (Hangul, CJK) take two terminal columns
fn display_width(s: &str) -> usize {
    s.chars().map(|c| if c.is_ascii() { 1 } else { 2 }).sum()
}

fn pad_left(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(display_width(s));
    let mut result = String::with_capacity(s.len() + padding);
    result.push_str(&" ".repeat(padding));
    result.push_str(s);
    result
}

/// Render rows as an aligned plain-text table with a row index on the left.
pub fn render_text(columns: &[String], rows: &[Row]) -> String {
    if rows.is_empty() {
        return format!("Empty table\nColumns: [{}]", columns.join(", "));
    }
    if columns.is_empty() {
        return format!("Empty table\nColumns: []\nRows: {}", rows.len());
    }

    let index_labels: Vec<String> = (0..rows.len()).map(|i| i.to_string()).collect();
    let index_width = index_labels.iter().map(|s| display_width(s)).max().unwrap_or(0);

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|name| row.get(name).map(|c| c.to_string()).unwrap_or_default())
                .collect()
        })
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(col_idx, name)| {
            cells
                .iter()
                .map(|row| display_width(&row[col_idx]))
                .chain(std::iter::once(display_width(name)))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = Vec::with_capacity(rows.len() + 1);

    let mut header = " ".repeat(index_width);
    for (name, width) in columns.iter().zip(&widths) {
        header.push_str("  ");
        header.push_str(&pad_left(name, *width));
    }
    lines.push(header.trim_end().to_string());

    for (label, row) in index_labels.iter().zip(&cells) {
        let mut line = pad_left(label, index_width);
        for (value, width) in row.iter().zip(&widths) {
            line.push_str("  ");
            line.push_str(&pad_left(value, *width));
        }
        lines.push(line);
    }

    lines.join("\n")
}

// Rows as ordered JSON objects, in the same shape as the JSON report
pub fn rows_to_json(rows: &[Row]) -> PreviewRows {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(|(name, cell)| (name.clone(), cell.to_json()))
                .collect()
        })
        .collect()
}

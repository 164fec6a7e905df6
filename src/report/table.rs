//! Markdown table output for notable examples.
//!
//! Cells are padded to a common column width and the delimiter row is as
//! wide as its column, so the raw markdown lines up when read as text.

use crate::types::Example;
use unicode_width::UnicodeWidthStr;

const HEADER: [&str; 2] = ["State", "Description"];

/// Placeholder for an absent message or file path
const ABSENT: &str = "null";

/// Render the examples as a two-column markdown table.
///
/// An empty slice still yields the header and delimiter rows.
pub fn render_table(examples: &[Example]) -> String {
    let rows: Vec<[String; 2]> = examples.iter().map(|e| [e.state.to_string(), describe(e)]).collect();

    let mut widths = HEADER.map(display_width);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(display_width(cell));
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(&HEADER, &widths));
    lines.push(format_delimiter(&widths));
    for row in &rows {
        lines.push(format_row(row, &widths));
    }
    lines.join("\n")
}

/// Second column: file, title and error, separated by `<br>`
fn describe(example: &Example) -> String {
    format!(
        "**Filepath**: {}<br>**Title**: {}<br>**Error**: {}",
        example.filepath.as_deref().unwrap_or(ABSENT),
        example.title,
        example.message.as_deref().unwrap_or(ABSENT)
    )
}

fn format_row<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    let padded: Vec<String> = cells.iter().zip(widths).map(|(cell, &width)| pad_right(cell.as_ref(), width)).collect();
    format!("| {} |", padded.join(" | "))
}

fn format_delimiter(widths: &[usize]) -> String {
    let dashes: Vec<String> = widths.iter().map(|&width| "-".repeat(width.max(1))).collect();
    format!("| {} |", dashes.join(" | "))
}

/// Calculate the display width of a string (accounting for wide characters)
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Pad a string with trailing spaces to a target display width
fn pad_right(s: &str, width: usize) -> String {
    let current = display_width(s);
    if current >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - current))
    }
}

//! Plain-text preview table of records.

use std::fmt;

use crate::Record;

const HEADERS: [&str; 4] = ["#", "Timestamp", "Author", "Message"];

/// Table of the first records of a collection.
#[derive(Debug, Clone)]
pub struct PreviewTable<'a> {
    records: &'a [Record],
    body_width: usize,
}

impl<'a> PreviewTable<'a> {
    pub fn new(records: &'a [Record], body_width: usize) -> Self {
        Self {
            records,
            body_width,
        }
    }

    fn rows(&self) -> Vec<[String; 4]> {
        self.records
            .iter()
            .enumerate()
            .map(|(i, r)| {
                [
                    (i + 1).to_string(),
                    single_line(r.timestamp()),
                    single_line(r.author()),
                    truncate(&single_line(r.body()), self.body_width),
                ]
            })
            .collect()
    }
}

impl fmt::Display for PreviewTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.rows();

        let mut widths = HEADERS.map(|h| h.chars().count());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        write_row(f, &HEADERS, &widths)?;
        let rule: Vec<String> = widths.iter().map(|&w| "─".repeat(w)).collect();
        write_row(f, &rule, &widths)?;
        for row in &rows {
            write_row(f, row, &widths)?;
        }
        Ok(())
    }
}

fn write_row<S: AsRef<str>>(f: &mut fmt::Formatter<'_>, cells: &[S], widths: &[usize]) -> fmt::Result {
    let mut line = String::from(" ");
    for (cell, &width) in cells.iter().zip(widths) {
        let cell = cell.as_ref();
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(width - cell.chars().count()));
        line.push_str("  ");
    }
    writeln!(f, "{}", line.trim_end())
}

/// Shortens `text` to `max` characters, marking the cut with `…`.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(max - 1).collect();
    out.push('…');
    out
}

// Tabs and stray control characters would break column alignment
fn single_line(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

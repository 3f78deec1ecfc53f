//! Horizontal bar charts drawn with block characters.

use std::fmt;

const FULL_BLOCK: char = '█';

/// One labelled bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: usize,
    /// Extra text printed after the value, e.g. a percentage
    pub note: Option<String>,
}

impl Bar {
    pub fn new(label: impl Into<String>, value: usize) -> Self {
        Self {
            label: label.into(),
            value,
            note: None,
        }
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// A horizontal bar chart. The largest value spans `width` cells.
#[derive(Debug, Clone)]
pub struct BarChart {
    bars: Vec<Bar>,
    width: usize,
}

impl BarChart {
    pub fn new(bars: Vec<Bar>, width: usize) -> Self {
        Self {
            bars,
            width: width.max(1),
        }
    }

    /// Length in cells of a bar for `value`.
    ///
    /// Non-zero values always get at least one cell.
    pub fn bar_len(&self, value: usize) -> usize {
        let max = self.bars.iter().map(|b| b.value).max().unwrap_or(0);
        if value == 0 || max == 0 {
            return 0;
        }
        let scaled = (value as f64 / max as f64 * self.width as f64).round() as usize;
        scaled.clamp(1, self.width)
    }
}

impl fmt::Display for BarChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label_width = self
            .bars
            .iter()
            .map(|b| b.label.chars().count())
            .max()
            .unwrap_or(0);

        for bar in &self.bars {
            let pad = label_width - bar.label.chars().count();
            let blocks: String = std::iter::repeat_n(FULL_BLOCK, self.bar_len(bar.value)).collect();
            write!(f, "  {}{} {} {}", bar.label, " ".repeat(pad), blocks, bar.value)?;
            if let Some(note) = &bar.note {
                write!(f, " {note}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

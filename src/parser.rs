//! Chat export line parser.
//!
//! Each line of an export is matched against one fixed pattern:
//!
//! ```text
//! 12/5/23, 10:30 AM - Alice: Hello there
//! └──── timestamp ─┘   └─┬─┘  └── body ──┘
//!                      author
//! ```
//!
//! A line matches only if it starts with a numeric `D/M/Y` (or `D/M/YY`) date,
//! a comma, an `H:MM AM|PM` time, the ` - ` separator, an author running up to
//! the first colon, `": "` and a non-empty body.
//!
//! # Limitations
//!
//! - Continuation lines of multi-line messages carry no timestamp, so they are
//!   dropped rather than appended to the previous message.
//! - The author stops at the first colon. A body may contain colons, an author
//!   name may not.
//! - 24-hour exports and bracketed iOS exports don't match at all.
//!
//! # Example
//!
//! ```rust
//! use chatlens::parser::LineParser;
//!
//! let parser = LineParser::new()?;
//! let records = parser.parse_str(
//!     "12/5/23, 10:30 AM - Alice: Hello there\n\
//!      and this continuation line is dropped\n\
//!      12/5/23, 10:31 AM - Bob: Hi!",
//! )?;
//!
//! assert_eq!(records.len(), 2);
//! assert_eq!(records.as_slice()[1].author(), "Bob");
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use std::fs;
use std::path::Path;

use regex::Regex;
use tracing::{debug, trace};

use crate::error::{ChatlensError, Result};
use crate::{ParsedCollection, Record};

/// The line pattern: timestamp, author, body.
///
/// Anchored at the start of the line only; the body runs to the end.
pub const LINE_PATTERN: &str =
    r"^(\d{1,2}/\d{1,2}/\d{2,4},\s\d{1,2}:\d{2}\s[AP]M)\s-\s([^:]+):\s(.+)";

/// Parser for chat export text.
///
/// Holds the compiled line pattern, so build it once and reuse it.
#[derive(Debug, Clone)]
pub struct LineParser {
    regex: Regex,
}

impl LineParser {
    /// Compiles the line pattern.
    pub fn new() -> Result<Self> {
        let regex = Regex::new(LINE_PATTERN)
            .map_err(|e| ChatlensError::invalid_format("chat line", e.to_string()))?;
        Ok(Self { regex })
    }

    /// Parses a single line, returning `None` when it doesn't match.
    ///
    /// ```rust
    /// use chatlens::parser::LineParser;
    ///
    /// let parser = LineParser::new()?;
    /// let record = parser.parse_line("12/5/23, 10:30 AM - Alice: Hello there").unwrap();
    /// assert_eq!(record.timestamp(), "12/5/23, 10:30 AM");
    ///
    /// assert!(parser.parse_line("Hello there").is_none());
    /// # Ok::<(), chatlens::ChatlensError>(())
    /// ```
    pub fn parse_line(&self, line: &str) -> Option<Record> {
        let caps = self.regex.captures(line)?;
        let timestamp = caps.get(1).map_or("", |m| m.as_str());
        let author = caps.get(2).map_or("", |m| m.as_str().trim());
        let body = caps.get(3).map_or("", |m| m.as_str().trim());
        Some(Record::new(timestamp, author, body))
    }

    /// Parses every line, skipping the ones that don't match.
    ///
    /// Never fails; the result may be empty.
    pub fn parse_lines<'a, I>(&self, lines: I) -> ParsedCollection
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut records = ParsedCollection::new();
        let mut skipped = 0usize;

        for (index, line) in lines.into_iter().enumerate() {
            match self.parse_line(line) {
                Some(record) => records.push(record),
                None => {
                    skipped += 1;
                    trace!(line = index + 1, "skipping unmatched line");
                }
            }
        }

        debug!(matched = records.len(), skipped, "parsed chat lines");
        records
    }

    /// Parses export content held in memory.
    ///
    /// Returns [`ChatlensError::NoMessages`] when no line matched.
    pub fn parse_str(&self, content: &str) -> Result<ParsedCollection> {
        let records = self.parse_lines(content.lines());
        if records.is_empty() {
            return Err(ChatlensError::no_messages(None));
        }
        Ok(records)
    }

    /// Parses raw export bytes, decoding them as UTF-8 first.
    ///
    /// `context` names the source in the decode error (a file name, `stdin`).
    pub fn parse_bytes(&self, bytes: Vec<u8>, context: &str) -> Result<ParsedCollection> {
        let content = decode(bytes, context)?;
        self.parse_str(&content)
    }

    /// Reads and parses an export file.
    ///
    /// # Errors
    ///
    /// - [`ChatlensError::Io`] if the file can't be read
    /// - [`ChatlensError::Utf8`] if it isn't UTF-8
    /// - [`ChatlensError::NoMessages`] if no line matched
    pub fn parse(&self, path: &Path) -> Result<ParsedCollection> {
        let bytes = fs::read(path)?;
        let content = decode(bytes, &path.display().to_string())?;
        let records = self.parse_lines(content.lines());
        if records.is_empty() {
            return Err(ChatlensError::no_messages(Some(path.to_path_buf())));
        }
        Ok(records)
    }
}

/// Decodes export bytes as UTF-8, tolerating a leading byte-order mark.
pub fn decode(bytes: Vec<u8>, context: &str) -> Result<String> {
    let mut content = String::from_utf8(bytes).map_err(|e| ChatlensError::utf8(context, e))?;
    if content.starts_with('\u{FEFF}') {
        content.replace_range(..'\u{FEFF}'.len_utf8(), "");
    }
    Ok(content)
}

//! The parsed chat record.
//!
//! A [`Record`] is one `(timestamp, author, body)` triple extracted from a
//! single line of a chat export. Records are immutable once built: the parser
//! creates them and everything downstream only reads them.
//!
//! # Examples
//!
//! ```
//! use chatlens::Record;
//!
//! let record = Record::new("12/5/23, 10:30 AM", "Alice", "Hello there");
//! assert_eq!(record.author(), "Alice");
//! assert_eq!(record.body(), "Hello there");
//! ```
//!
//! ## Serialization
//!
//! ```
//! use chatlens::Record;
//!
//! let record = Record::new("12/5/23, 10:30 AM", "Alice", "Hi!");
//! let json = serde_json::to_string(&record)?;
//! assert!(json.contains(r#""author":"Alice""#));
//!
//! let parsed: Record = serde_json::from_str(&json)?;
//! assert_eq!(record, parsed);
//! # Ok::<(), serde_json::Error>(())
//! ```

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// One chat message as it appeared on a single export line.
///
/// | Field | Description |
/// |-------|-------------|
/// | `timestamp` | The date-time prefix, verbatim (`12/5/23, 10:30 AM`) |
/// | `author` | Sender name, whitespace-trimmed |
/// | `body` | Message text, whitespace-trimmed |
///
/// The timestamp is kept as the locale-formatted string from the export.
/// Use [`sent_time`](Record::sent_time) when a typed time of day is needed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    timestamp: String,
    author: String,
    body: String,
}

impl Record {
    /// Creates a record from its three parts.
    ///
    /// Author and body are stored as given. The parser trims them before
    /// calling this.
    pub fn new(
        timestamp: impl Into<String>,
        author: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            author: author.into(),
            body: body.into(),
        }
    }

    /// Returns the verbatim timestamp string.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Returns the author name.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the message body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the date portion of the timestamp (everything before the comma).
    pub fn date(&self) -> &str {
        self.timestamp
            .split_once(',')
            .map_or(self.timestamp.as_str(), |(date, _)| date.trim())
    }

    /// Parses the time of day out of the timestamp.
    ///
    /// Exports separate the time from the meridiem with either a regular
    /// space or a narrow no-break space (U+202F), so whitespace is normalized
    /// before parsing. Returns `None` for times like `13:05 PM`.
    ///
    /// ```
    /// use chatlens::Record;
    /// use chrono::NaiveTime;
    ///
    /// let record = Record::new("12/5/23, 9:05 PM", "Alice", "Late");
    /// assert_eq!(record.sent_time(), NaiveTime::from_hms_opt(21, 5, 0));
    /// ```
    pub fn sent_time(&self) -> Option<NaiveTime> {
        let (_, time) = self.timestamp.split_once(',')?;
        let normalized = time.split_whitespace().collect::<Vec<_>>().join(" ");
        NaiveTime::parse_from_str(&normalized, "%I:%M %p").ok()
    }

    /// Returns the hour of day (0-23) the message was sent, if parseable.
    pub fn hour(&self) -> Option<u32> {
        self.sent_time().map(|t| t.hour())
    }

    /// Returns `true` if the body is a media placeholder (`<Media omitted>`).
    pub fn is_media_placeholder(&self) -> bool {
        self.body.eq_ignore_ascii_case("<Media omitted>")
    }
}

//! Ordered collection of parsed records.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::Record;

/// All records parsed from one export, in file order.
///
/// Every element matched the chat line pattern. Lines that didn't match were
/// dropped by the parser, so the collection never contains merged or partial
/// messages.
///
/// # Example
///
/// ```
/// use chatlens::{ParsedCollection, Record};
///
/// let records = ParsedCollection::from(vec![
///     Record::new("1/1/24, 9:00 AM", "Alice", "Morning"),
///     Record::new("1/1/24, 9:01 AM", "Bob", "Hi"),
/// ]);
/// assert_eq!(records.len(), 2);
/// assert_eq!(records.distinct_authors(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParsedCollection {
    records: Vec<Record>,
}

impl ParsedCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if nothing was parsed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates the records in file order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Returns the records as a slice.
    pub fn as_slice(&self) -> &[Record] {
        &self.records
    }

    /// Returns at most the first `limit` records.
    pub fn preview(&self, limit: usize) -> &[Record] {
        &self.records[..limit.min(self.records.len())]
    }

    /// Number of distinct author names.
    pub fn distinct_authors(&self) -> usize {
        self.records
            .iter()
            .map(Record::author)
            .collect::<HashSet<_>>()
            .len()
    }

    /// Consumes the collection, returning the records.
    pub fn into_vec(self) -> Vec<Record> {
        self.records
    }
}

impl From<Vec<Record>> for ParsedCollection {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl FromIterator<Record> for ParsedCollection {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ParsedCollection {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a ParsedCollection {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ParsedCollection {
        vec![
            Record::new("1/1/24, 9:00 AM", "Alice", "one"),
            Record::new("1/1/24, 9:01 AM", "Bob", "two"),
            Record::new("1/1/24, 9:02 AM", "Alice", "three"),
        ]
        .into()
    }

    #[test]
    fn test_preview_limits() {
        let records = sample();
        assert_eq!(records.preview(2).len(), 2);
        assert_eq!(records.preview(50).len(), 3);
        assert!(records.preview(0).is_empty());
        assert_eq!(records.preview(1)[0].body(), "one");
    }

    #[test]
    fn test_distinct_authors() {
        assert_eq!(sample().distinct_authors(), 2);
        assert_eq!(ParsedCollection::new().distinct_authors(), 0);
    }

    #[test]
    fn test_order_preserved() {
        let bodies: Vec<_> = sample().into_iter().map(|r| r.body().to_string()).collect();
        assert_eq!(bodies, ["one", "two", "three"]);
    }

    #[test]
    fn test_serializes_as_array() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.starts_with('['));
        assert!(json.ends_with(']'));
    }
}

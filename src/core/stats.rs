//! Aggregate views over a parsed collection.
//!
//! [`ChatStats::compute`] is a pure function of the records: nothing is cached
//! and nothing is carried between runs.
//!
//! # Example
//!
//! ```
//! use chatlens::config::AnalysisConfig;
//! use chatlens::core::stats::ChatStats;
//! use chatlens::{ParsedCollection, Record};
//!
//! let records = ParsedCollection::from(vec![
//!     Record::new("1/1/24, 9:00 AM", "Alice", "Hi 😀"),
//!     Record::new("1/1/24, 9:01 AM", "Bob", "Hello"),
//!     Record::new("1/1/24, 9:02 AM", "Alice", "How are you?"),
//! ]);
//!
//! let stats = ChatStats::compute(&records, &AnalysisConfig::default());
//! assert_eq!(stats.total_messages, 3);
//! assert_eq!(stats.distinct_authors, 2);
//! assert_eq!(stats.emoji_count, 1);
//! assert_eq!(stats.author_counts[0].author, "Alice");
//! ```

use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use super::emoji::count_emoji;
use crate::config::AnalysisConfig;
use crate::{ParsedCollection, Record};

/// Messages sent by one author.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorCount {
    /// Author name as it appears in the export
    pub author: String,
    /// Number of records by this author
    pub messages: usize,
    /// Percentage of all records (0.0 - 100.0)
    pub share: f64,
}

/// Occurrences of one word across all bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    /// Lowercased word
    pub word: String,
    /// Number of occurrences
    pub count: usize,
}

/// Every aggregate view the dashboard shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatStats {
    /// Number of parsed records
    pub total_messages: usize,
    /// Number of distinct authors
    pub distinct_authors: usize,
    /// In-range emoji characters across all bodies (see [`super::emoji`])
    pub emoji_count: usize,
    /// Records whose body is `<Media omitted>`
    pub media_messages: usize,
    /// Authors ranked by message count, highest first
    pub author_counts: Vec<AuthorCount>,
    /// Messages per hour of day, index 0 = midnight
    pub hourly_activity: Vec<usize>,
    /// Most frequent words, highest first
    pub top_words: Vec<WordCount>,
}

impl ChatStats {
    /// Computes all views from the records.
    pub fn compute(records: &ParsedCollection, config: &AnalysisConfig) -> Self {
        let total_messages = records.len();

        let author_counts = rank_authors(records.as_slice())
            .into_iter()
            .map(|(author, messages)| AuthorCount {
                author: author.to_string(),
                messages,
                share: percentage(messages, total_messages),
            })
            .collect();

        let top_words = rank_words(records.as_slice(), config.min_word_length)
            .into_iter()
            .take(config.top_words)
            .map(|(word, count)| WordCount { word, count })
            .collect();

        Self {
            total_messages,
            distinct_authors: records.distinct_authors(),
            emoji_count: records.iter().map(|r| count_emoji(r.body())).sum(),
            media_messages: records.iter().filter(|r| r.is_media_placeholder()).count(),
            author_counts,
            hourly_activity: hourly_activity(records.as_slice()),
            top_words,
        }
    }

    /// Returns the busiest hour of day, or `None` if no timestamp had a
    /// parseable time. Ties go to the earliest hour.
    pub fn peak_hour(&self) -> Option<u32> {
        let max = *self.hourly_activity.iter().max()?;
        if max == 0 {
            return None;
        }
        self.hourly_activity
            .iter()
            .position(|&count| count == max)
            .map(|hour| hour as u32)
    }

    /// Returns the message count of the most active author.
    pub fn top_author_messages(&self) -> usize {
        self.author_counts.first().map_or(0, |a| a.messages)
    }
}

/// Ranks authors by message count, highest first.
///
/// Authors with equal counts keep the order in which they first appear.
pub fn rank_authors(records: &[Record]) -> Vec<(&str, usize)> {
    rank_by_count(records.iter().map(Record::author))
}

/// Ranks body words by frequency, highest first.
///
/// Media placeholders are skipped. See [`words`] for tokenization.
pub fn rank_words(records: &[Record], min_len: usize) -> Vec<(String, usize)> {
    rank_by_count(
        records
            .iter()
            .filter(|r| !r.is_media_placeholder())
            .flat_map(|r| words(r.body(), min_len)),
    )
}

/// Splits text into lowercase words of at least `min_len` characters.
///
/// Words are runs of alphanumeric characters. Purely numeric runs are
/// dropped.
pub fn words(text: &str, min_len: usize) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(move |w| w.chars().count() >= min_len.max(1))
        .filter(|w| !w.chars().all(|c| c.is_numeric()))
        .map(str::to_lowercase)
}

/// Counts messages per hour of day. Always 24 buckets.
pub fn hourly_activity(records: &[Record]) -> Vec<usize> {
    let mut buckets = vec![0usize; 24];
    for hour in records.iter().filter_map(Record::hour) {
        buckets[hour as usize] += 1;
    }
    buckets
}

fn rank_by_count<K, I>(items: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();

    for item in items {
        if let Some(&i) = index.get(&item) {
            counts[i].1 += 1;
        } else {
            index.insert(item.clone(), counts.len());
            counts.push((item, 1));
        }
    }

    // Stable: ties keep first-appearance order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 / total as f64 * 100.0
}

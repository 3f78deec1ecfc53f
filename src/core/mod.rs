//! Aggregation and export.
//!
//! This module contains:
//! - [`emoji`] - Emoji occurrence counting over fixed code point ranges
//! - [`stats`] - Per-author ranking, hourly activity, word frequency
//! - [`output`] - Export writers (CSV, JSON)

pub mod emoji;
pub mod output;
pub mod stats;

pub use emoji::{EMOJI_RANGES, count_emoji, is_counted_emoji};
pub use stats::{AuthorCount, ChatStats, WordCount, rank_authors};

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, write_json};

//! The parse-then-aggregate pipeline.
//!
//! [`Analysis`] bundles the parsed records with the views computed from them.
//! It is what every presentation (dashboard, JSON export, CSV export) consumes.
//!
//! ```rust
//! use chatlens::analysis::Analysis;
//! use chatlens::config::AnalysisConfig;
//!
//! let content = "12/5/23, 10:30 AM - Alice: Hello there\n\
//!                12/5/23, 10:31 AM - Bob: Hi 😀";
//! let analysis = Analysis::from_str(content, &AnalysisConfig::default())?;
//!
//! assert_eq!(analysis.stats.total_messages, 2);
//! assert_eq!(analysis.stats.emoji_count, 1);
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::ParsedCollection;
use crate::config::AnalysisConfig;
use crate::core::stats::ChatStats;
use crate::error::Result;
use crate::parser::LineParser;

/// Parsed records together with their aggregate views.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// The records, in file order
    pub records: ParsedCollection,
    /// Views computed from `records`
    pub stats: ChatStats,
}

impl Analysis {
    /// Computes the views for an already parsed collection.
    pub fn new(records: ParsedCollection, config: &AnalysisConfig) -> Self {
        let stats = ChatStats::compute(&records, config);
        debug!(
            messages = stats.total_messages,
            authors = stats.distinct_authors,
            emoji = stats.emoji_count,
            "computed chat statistics"
        );
        Self { records, stats }
    }

    /// Parses export content and computes its views.
    ///
    /// Fails with [`NoMessages`](crate::ChatlensError::NoMessages) when no
    /// line matched, so an `Analysis` is never empty.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str, config: &AnalysisConfig) -> Result<Self> {
        let records = LineParser::new()?.parse_str(content)?;
        Ok(Self::new(records, config))
    }

    /// Decodes raw bytes as UTF-8, then parses and analyzes them.
    pub fn from_bytes(bytes: Vec<u8>, context: &str, config: &AnalysisConfig) -> Result<Self> {
        let records = LineParser::new()?.parse_bytes(bytes, context)?;
        Ok(Self::new(records, config))
    }

    /// Reads, parses and analyzes an export file.
    pub fn from_path(path: &Path, config: &AnalysisConfig) -> Result<Self> {
        let records = LineParser::new()?.parse(path)?;
        Ok(Self::new(records, config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHAT: &str = "\
12/5/23, 10:30 AM - Alice: Hello there
12/5/23, 10:31 AM - Alice: Anyone around?
this line continues the previous message
12/5/23, 10:32 AM - Bob: Yes! 😀
12/5/23, 10:33 AM - Alice: Great! 😀😀";

    #[test]
    fn test_pipeline() {
        let analysis = Analysis::from_str(CHAT, &AnalysisConfig::default()).unwrap();
        assert_eq!(analysis.records.len(), 4);
        assert_eq!(analysis.stats.total_messages, analysis.records.len());
        assert_eq!(analysis.stats.distinct_authors, 2);
        assert_eq!(analysis.stats.emoji_count, 3);
        assert_eq!(analysis.stats.author_counts[0].author, "Alice");
        assert_eq!(analysis.stats.author_counts[0].messages, 3);
    }

    #[test]
    fn test_pipeline_empty_input() {
        let err = Analysis::from_str("no chat here", &AnalysisConfig::default()).unwrap_err();
        assert!(err.is_no_messages());
    }

    #[test]
    fn test_pipeline_invalid_utf8() {
        let err = Analysis::from_bytes(vec![0xc0, 0xaf], "stdin", &AnalysisConfig::default())
            .unwrap_err();
        assert!(err.is_utf8());
    }
}

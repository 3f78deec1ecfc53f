//! Terminal dashboard.
//!
//! Renders an [`Analysis`] as text:
//!
//! 1. Three metrics: total messages, total members, emojis used
//! 2. 👥 Most Active Members: a horizontal bar chart of the author ranking
//! 3. 🕒 Peak Chat Times: messages per hour (optional)
//! 4. 🔤 Top Words (optional)
//! 5. 📊 Preview: the first records as a table
//!
//! An `Analysis` always holds at least one record. Empty input never gets
//! here: parsing reports [`NoMessages`](crate::ChatlensError::NoMessages) and
//! the caller shows [`FAILURE_MESSAGE`] instead.
//!
//! # Example
//!
//! ```rust
//! use chatlens::analysis::Analysis;
//! use chatlens::config::{AnalysisConfig, DashboardConfig};
//! use chatlens::dashboard::Dashboard;
//!
//! let analysis = Analysis::from_str(
//!     "12/5/23, 10:30 AM - Alice: Hello there",
//!     &AnalysisConfig::default(),
//! )?;
//! let rendered = Dashboard::new(&analysis, &DashboardConfig::default()).to_string();
//! assert!(rendered.contains("Total Messages"));
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

pub mod chart;
pub mod table;

use std::fmt;

use crate::analysis::Analysis;
use crate::config::DashboardConfig;

pub use chart::{Bar, BarChart};
pub use table::PreviewTable;

/// Shown instead of the dashboard when no line could be parsed.
pub const FAILURE_MESSAGE: &str = "Could not parse messages. Please check the file format.";

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Renders an analysis. Use it through `Display`.
#[derive(Debug, Clone, Copy)]
pub struct Dashboard<'a> {
    analysis: &'a Analysis,
    config: &'a DashboardConfig,
}

impl<'a> Dashboard<'a> {
    pub fn new(analysis: &'a Analysis, config: &'a DashboardConfig) -> Self {
        Self { analysis, config }
    }

    /// Bar chart of the author ranking.
    pub fn member_chart(&self) -> BarChart {
        let bars = self
            .analysis
            .stats
            .author_counts
            .iter()
            .map(|a| Bar::new(a.author.clone(), a.messages).with_note(format!("({:.1}%)", a.share)))
            .collect();
        BarChart::new(bars, self.config.chart_width)
    }

    /// Bar chart of messages per hour; hours without messages are omitted.
    pub fn hourly_chart(&self) -> BarChart {
        let bars = self
            .analysis
            .stats
            .hourly_activity
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(hour, &count)| Bar::new(format!("{hour:02}:00"), count))
            .collect();
        BarChart::new(bars, self.config.chart_width)
    }

    fn write_metrics(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = &self.analysis.stats;
        writeln!(f, "   Total Messages:  {}", stats.total_messages)?;
        writeln!(f, "   Total Members:   {}", stats.distinct_authors)?;
        writeln!(f, "   Emojis Used:     {}", stats.emoji_count)?;
        if stats.media_messages > 0 {
            writeln!(f, "   Media Shared:    {}", stats.media_messages)?;
        }
        Ok(())
    }

    fn write_hourly(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "🕒 Peak Chat Times")?;
        match self.analysis.stats.peak_hour() {
            Some(hour) => {
                writeln!(f, "   Busiest hour: {hour:02}:00")?;
                write!(f, "{}", self.hourly_chart())
            }
            None => writeln!(f, "   No parseable message times"),
        }
    }

    fn write_words(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "🔤 Top Words")?;
        let words = &self.analysis.stats.top_words;
        if words.is_empty() {
            return writeln!(f, "   No words to rank");
        }
        for (rank, word) in words.iter().enumerate() {
            writeln!(f, "   {:>2}. {} ({})", rank + 1, word.word, word.count)?;
        }
        Ok(())
    }

    fn write_preview(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let preview = self.analysis.records.preview(self.config.preview_limit);
        writeln!(
            f,
            "📊 Preview (first {} of {} messages)",
            preview.len(),
            self.analysis.records.len()
        )?;
        write!(f, "{}", PreviewTable::new(preview, self.config.body_width))
    }
}

impl fmt::Display for Dashboard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "💬 Chat Analysis")?;
        writeln!(f, "{RULE}")?;
        self.write_metrics(f)?;
        writeln!(f)?;

        writeln!(f, "👥 Most Active Members")?;
        write!(f, "{}", self.member_chart())?;

        if self.config.show_hourly {
            writeln!(f)?;
            self.write_hourly(f)?;
        }

        if self.config.show_words {
            writeln!(f)?;
            self.write_words(f)?;
        }

        if self.config.preview_limit > 0 {
            writeln!(f)?;
            self.write_preview(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalysisConfig;

    const CHAT: &str = "\
12/5/23, 10:30 AM - Alice: Hello there
12/5/23, 10:31 AM - Alice: pizza tonight? 😀
12/5/23, 10:32 AM - Bob: pizza sounds great 😀😀
12/5/23, 9:15 PM - Alice: <Media omitted>";

    fn analysis() -> Analysis {
        Analysis::from_str(CHAT, &AnalysisConfig::default()).unwrap()
    }

    #[test]
    fn test_metrics_section() {
        let analysis = analysis();
        let rendered = Dashboard::new(&analysis, &DashboardConfig::default()).to_string();
        assert!(rendered.contains("Total Messages:  4"));
        assert!(rendered.contains("Total Members:   2"));
        assert!(rendered.contains("Emojis Used:     3"));
        assert!(rendered.contains("Media Shared:    1"));
    }

    #[test]
    fn test_member_chart_order() {
        let analysis = analysis();
        let config = DashboardConfig::default();
        let chart = Dashboard::new(&analysis, &config).member_chart().to_string();
        let lines: Vec<_> = chart.lines().collect();
        assert!(lines[0].contains("Alice"));
        assert!(lines[0].contains("3 (75.0%)"));
        assert!(lines[1].contains("Bob"));
    }

    #[test]
    fn test_hourly_section() {
        let analysis = analysis();
        let rendered = Dashboard::new(&analysis, &DashboardConfig::default()).to_string();
        assert!(rendered.contains("Busiest hour: 10:00"));
        assert!(rendered.contains("21:00"));

        let hidden = DashboardConfig::new().with_hourly(false);
        let rendered = Dashboard::new(&analysis, &hidden).to_string();
        assert!(!rendered.contains("Peak Chat Times"));
    }

    #[test]
    fn test_words_section() {
        let analysis = analysis();
        let rendered = Dashboard::new(&analysis, &DashboardConfig::default()).to_string();
        assert!(rendered.contains("1. pizza (2)"));

        let hidden = DashboardConfig::new().with_words(false);
        let rendered = Dashboard::new(&analysis, &hidden).to_string();
        assert!(!rendered.contains("Top Words"));
    }

    #[test]
    fn test_preview_limit() {
        let analysis = analysis();
        let config = DashboardConfig::new().with_preview_limit(2);
        let rendered = Dashboard::new(&analysis, &config).to_string();
        assert!(rendered.contains("first 2 of 4 messages"));
        assert!(rendered.contains("Hello there"));
        assert!(!rendered.contains("<Media omitted>"));

        let none = DashboardConfig::new().with_preview_limit(0);
        let rendered = Dashboard::new(&analysis, &none).to_string();
        assert!(!rendered.contains("Preview"));
    }

    #[test]
    fn test_default_preview_stops_at_fifty() {
        let chat: String = (1..=60)
            .map(|i| format!("1/2/24, 9:{:02} AM - Alice: note {i:02}.\n", i % 60))
            .collect();
        let analysis = Analysis::from_str(&chat, &AnalysisConfig::default()).unwrap();
        let rendered = Dashboard::new(&analysis, &DashboardConfig::default()).to_string();

        assert!(rendered.contains("📊 Preview (first 50 of 60 messages)"));
        assert!(rendered.contains("note 50."));
        assert!(!rendered.contains("note 51."));
        assert!(!rendered.contains("note 60."));
    }
}

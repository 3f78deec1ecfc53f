//! Configuration types for analysis and the dashboard.
//!
//! These are plain builder-style structs with no CLI framework dependency, so
//! library users can drive the same pipeline the `chatlens` binary does.
//!
//! - [`AnalysisConfig`] - knobs for the aggregate views
//! - [`DashboardConfig`] - what the terminal dashboard shows and how wide
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::{AnalysisConfig, DashboardConfig};
//!
//! let analysis = AnalysisConfig::new().with_top_words(5);
//! let dashboard = DashboardConfig::new()
//!     .with_preview_limit(20)
//!     .with_chart_width(30);
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for computing aggregate views.
///
/// # Example
///
/// ```rust
/// use chatlens::config::AnalysisConfig;
///
/// let config = AnalysisConfig::new()
///     .with_top_words(20)
///     .with_min_word_length(4);
/// assert_eq!(config.top_words, 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// How many words the word-frequency ranking keeps (default: 10)
    pub top_words: usize,

    /// Words shorter than this many characters are ignored (default: 3)
    pub min_word_length: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_words: 10,
            min_word_length: 3,
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how many words the word ranking keeps.
    #[must_use]
    pub fn with_top_words(mut self, count: usize) -> Self {
        self.top_words = count;
        self
    }

    /// Sets the minimum counted word length.
    #[must_use]
    pub fn with_min_word_length(mut self, length: usize) -> Self {
        self.min_word_length = length;
        self
    }
}

/// Configuration for the terminal dashboard.
///
/// # Example
///
/// ```rust
/// use chatlens::config::DashboardConfig;
///
/// let config = DashboardConfig::new().with_hourly(false);
/// assert_eq!(config.preview_limit, 50);
/// assert!(!config.show_hourly);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Records shown in the preview table (default: 50)
    pub preview_limit: usize,

    /// Width in cells of the longest bar (default: 40)
    pub chart_width: usize,

    /// Characters of the body shown per preview row (default: 60)
    pub body_width: usize,

    /// Show the messages-per-hour chart (default: true)
    pub show_hourly: bool,

    /// Show the top words list (default: true)
    pub show_words: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            preview_limit: 50,
            chart_width: 40,
            body_width: 60,
            show_hourly: true,
            show_words: true,
        }
    }
}

impl DashboardConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how many records the preview table shows.
    #[must_use]
    pub fn with_preview_limit(mut self, limit: usize) -> Self {
        self.preview_limit = limit;
        self
    }

    /// Sets the width of the longest chart bar. Clamped to at least 1.
    #[must_use]
    pub fn with_chart_width(mut self, width: usize) -> Self {
        self.chart_width = width.max(1);
        self
    }

    /// Sets how many body characters each preview row shows.
    #[must_use]
    pub fn with_body_width(mut self, width: usize) -> Self {
        self.body_width = width;
        self
    }

    /// Shows or hides the hourly activity chart.
    #[must_use]
    pub fn with_hourly(mut self, show: bool) -> Self {
        self.show_hourly = show;
        self
    }

    /// Shows or hides the top words list.
    #[must_use]
    pub fn with_words(mut self, show: bool) -> Self {
        self.show_words = show;
        self
    }
}

//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure
//! - [`OutputFormat`] - Output format options, mirrored from [`crate::format`]

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{AnalysisConfig, DashboardConfig};

/// Analyze a WhatsApp chat export: member activity, emoji usage,
/// peak chat times and word frequency.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt --preview 10 --width 30
    chatlens chat.txt -o analysis.json
    chatlens chat.txt -f csv > records.csv
    cat chat.txt | chatlens -

EXPORTING A CHAT:
    WhatsApp > chat > More > Export chat > Without media")]
pub struct Args {
    /// Path to the exported chat (.txt), or '-' for stdin
    pub input: String,

    /// Output format [default: from the --output extension, else text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write output to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,

    /// Number of messages in the preview table
    #[arg(long, value_name = "N", default_value_t = 50)]
    pub preview: usize,

    /// Width of the longest chart bar
    #[arg(long, value_name = "CELLS", default_value_t = 40)]
    pub width: usize,

    /// Number of words in the word ranking
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub top_words: usize,

    /// Hide the peak chat times chart
    #[arg(long)]
    pub no_hourly: bool,

    /// Hide the top words list
    #[arg(long)]
    pub no_words: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Returns `true` when the input should be read from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.input == "-"
    }

    /// Resolves the output format.
    ///
    /// An explicit `--format` wins. Otherwise the `--output` extension decides
    /// (`.json`, `.csv`, `.txt`), and anything else gets the text dashboard.
    pub fn output_format(&self) -> crate::format::OutputFormat {
        match (self.format, &self.output) {
            (Some(format), _) => format.into(),
            (None, Some(path)) => crate::format::OutputFormat::from_path(path).unwrap_or_default(),
            (None, None) => crate::format::OutputFormat::Text,
        }
    }

    /// Builds the analysis configuration from the flags.
    pub fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig::new().with_top_words(self.top_words)
    }

    /// Builds the dashboard configuration from the flags.
    pub fn dashboard_config(&self) -> DashboardConfig {
        DashboardConfig::new()
            .with_preview_limit(self.preview)
            .with_chart_width(self.width)
            .with_hourly(!self.no_hourly)
            .with_words(!self.no_words)
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Terminal dashboard (default)
    #[default]
    #[value(alias = "txt")]
    Text,

    /// Records and statistics as JSON
    Json,

    /// Parsed records as semicolon-delimited CSV
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::format::OutputFormat::from(*self))
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Text => crate::format::OutputFormat::Text,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
        }
    }
}

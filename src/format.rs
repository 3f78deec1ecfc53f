//! Output format selection.
//!
//! Library-first format type that doesn't depend on the CLI framework.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatlens::Result<()> {
//! use chatlens::analysis::Analysis;
//! use chatlens::config::{AnalysisConfig, DashboardConfig};
//! use chatlens::format::{OutputFormat, to_format_string};
//!
//! let analysis = Analysis::from_str(
//!     "12/5/23, 10:30 AM - Alice: Hello there",
//!     &AnalysisConfig::default(),
//! )?;
//!
//! let csv = to_format_string(&analysis, OutputFormat::Csv, &DashboardConfig::default())?;
//! assert!(csv.starts_with("Timestamp;Author;Message"));
//!
//! let format = OutputFormat::from_path("report.json")?;
//! assert_eq!(format, OutputFormat::Json);
//! # Ok(())
//! # }
//! ```

use std::fs;

use serde::{Deserialize, Serialize};

use crate::analysis::Analysis;
use crate::config::DashboardConfig;
use crate::dashboard::Dashboard;
use crate::error::ChatlensError;

/// How an analysis is presented.
///
/// - [`Text`](OutputFormat::Text) - terminal dashboard (default)
/// - [`Json`](OutputFormat::Json) - records and stats as one JSON document
/// - [`Csv`](OutputFormat::Csv) - parsed records, semicolon-delimited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Terminal dashboard
    #[default]
    Text,

    /// JSON document with `records` and `stats`
    Json,

    /// CSV with semicolon delimiter
    Csv,
}

impl OutputFormat {
    /// Detects format from a file path based on extension.
    pub fn from_path(path: &str) -> Result<Self, ChatlensError> {
        let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();

        match ext.as_str() {
            "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(ChatlensError::invalid_format(
                "output",
                format!(
                    "Unknown file extension: '.{}'. Expected one of: txt, json, csv",
                    ext
                ),
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "Text"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Csv => write!(f, "CSV"),
        }
    }
}

/// Renders the analysis in the given format.
///
/// # Errors
///
/// Returns an error if the format's feature (`json-output`, `csv-output`) is
/// not enabled, or serialization fails.
pub fn to_format_string(
    analysis: &Analysis,
    format: OutputFormat,
    config: &DashboardConfig,
) -> Result<String, ChatlensError> {
    match format {
        OutputFormat::Text => Ok(Dashboard::new(analysis, config).to_string()),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(analysis),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(analysis.records.as_slice()),
        #[allow(unreachable_patterns)]
        _ => Err(ChatlensError::invalid_format(
            "output",
            format!(
                "Output format {} requires the '{}' feature to be enabled",
                format,
                match format {
                    OutputFormat::Csv => "csv-output",
                    _ => "json-output",
                }
            ),
        )),
    }
}

/// Renders the analysis and writes it to `path`.
pub fn write_to_format(
    analysis: &Analysis,
    path: &str,
    format: OutputFormat,
    config: &DashboardConfig,
) -> Result<(), ChatlensError> {
    let rendered = to_format_string(analysis, format, config)?;
    fs::write(path, rendered)?;
    Ok(())
}

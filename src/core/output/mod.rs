//! Export writers.
//!
//! - [`write_csv`] / [`to_csv`] - parsed records as semicolon-delimited CSV - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - full analysis (stats + records) as JSON - requires `json-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatlens::Result<()> {
//! use chatlens::analysis::Analysis;
//! use chatlens::config::AnalysisConfig;
//! use chatlens::core::output::{to_csv, write_json};
//!
//! let analysis = Analysis::from_path("chat.txt".as_ref(), &AnalysisConfig::default())?;
//!
//! write_json(&analysis, "analysis.json")?;
//! let csv = to_csv(analysis.records.as_slice())?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};

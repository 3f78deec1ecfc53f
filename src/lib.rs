//! # Chatlens
//!
//! A Rust library for turning WhatsApp chat exports into member activity,
//! emoji and word statistics.
//!
//! ## Overview
//!
//! An export line looks like
//!
//! ```text
//! 12/5/23, 10:30 AM - Alice: Hello there
//! ```
//!
//! Chatlens extracts one [`Record`] per matching line, collects them into a
//! [`ParsedCollection`], computes the aggregate views in
//! [`ChatStats`](core::stats::ChatStats) and presents them as a terminal
//! [`Dashboard`](dashboard::Dashboard), a JSON document or a CSV file.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let content = "12/5/23, 10:30 AM - Alice: Hello there\n\
//!                    12/5/23, 10:31 AM - Bob: Hi! 😀";
//!
//!     let analysis = Analysis::from_str(content, &AnalysisConfig::default())?;
//!     assert_eq!(analysis.stats.total_messages, 2);
//!
//!     println!("{}", Dashboard::new(&analysis, &DashboardConfig::default()));
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`LineParser`](parser::LineParser), the line pattern and UTF-8 decoding
//! - [`record`] / [`collection`] - [`Record`] and [`ParsedCollection`]
//! - [`core`] - Aggregation and export
//!   - [`core::emoji`] - emoji counting over fixed code point ranges
//!   - [`core::stats`] - [`ChatStats`](core::stats::ChatStats), author ranking, hourly activity, word frequency
//!   - [`core::output`] - CSV and JSON writers
//! - [`analysis`] - [`Analysis`](analysis::Analysis), the parse-then-aggregate pipeline
//! - [`dashboard`] - terminal rendering (metrics, bar charts, preview table)
//! - [`format`] - [`OutputFormat`](format::OutputFormat) selection
//! - [`config`] - [`AnalysisConfig`](config::AnalysisConfig), [`DashboardConfig`](config::DashboardConfig)
//! - [`error`] - [`ChatlensError`], [`Result`]
//! - [`prelude`] - Convenient re-exports

pub mod analysis;
#[cfg(feature = "cli")]
pub mod cli;
pub mod collection;
pub mod config;
pub mod core;
pub mod dashboard;
pub mod error;
pub mod format;
#[cfg(feature = "cli")]
pub mod logging;
pub mod parser;
pub mod record;

// Re-export the main types at the crate root for convenience
pub use collection::ParsedCollection;
pub use error::{ChatlensError, Result};
pub use record::Record;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{ParsedCollection, Record};

    pub use crate::error::{ChatlensError, Result};

    pub use crate::analysis::Analysis;
    pub use crate::parser::LineParser;

    pub use crate::config::{AnalysisConfig, DashboardConfig};

    pub use crate::core::emoji::count_emoji;
    pub use crate::core::stats::{AuthorCount, ChatStats, WordCount};

    pub use crate::dashboard::{Dashboard, FAILURE_MESSAGE};
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
}

//! JSON output writer.

use std::fs::File;
use std::io::Write;

use crate::analysis::Analysis;
use crate::error::Result;

/// Writes the analysis to a JSON file.
///
/// # Format
/// ```json
/// {
///   "records": [{"timestamp": "12/5/23, 10:30 AM", "author": "Alice", "body": "Hello"}],
///   "stats": {"total_messages": 1, "distinct_authors": 1, "emoji_count": 0, ...}
/// }
/// ```
pub fn write_json(analysis: &Analysis, output_path: &str) -> Result<()> {
    let json = to_json(analysis)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    file.write_all(b"\n")?;
    Ok(())
}

/// Converts the analysis to a pretty-printed JSON string.
pub fn to_json(analysis: &Analysis) -> Result<String> {
    Ok(serde_json::to_string_pretty(analysis)?)
}

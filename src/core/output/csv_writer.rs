//! CSV output writer.

use std::fs::File;
use std::io::Write;

use crate::Record;
use crate::error::{ChatlensError, Result};

const HEADER: [&str; 3] = ["Timestamp", "Author", "Message"];

/// Writes records to a CSV file with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Timestamp`, `Author`, `Message`
/// - Encoding: UTF-8
pub fn write_csv(records: &[Record], output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(records, file)
}

/// Converts records to a CSV string.
///
/// Same format as [`write_csv`].
pub fn to_csv(records: &[Record]) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(records, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_records<W: Write>(records: &[Record], sink: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);

    writer.write_record(HEADER)?;
    for record in records {
        writer.write_record([record.timestamp(), record.author(), record.body()])?;
    }

    writer.flush().map_err(ChatlensError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn sample() -> Vec<Record> {
        vec![
            Record::new("12/5/23, 10:30 AM", "Alice", "Hello there"),
            Record::new("12/5/23, 10:31 AM", "Bob", "semi; colons \"quoted\""),
        ]
    }

    #[test]
    fn test_to_csv_basic() {
        let csv = to_csv(&sample()).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Timestamp;Author;Message"));
        assert_eq!(lines.next(), Some("12/5/23, 10:30 AM;Alice;Hello there"));
    }

    #[test]
    fn test_to_csv_escapes_delimiter() {
        let csv = to_csv(&sample()).unwrap();
        assert!(csv.contains(r#""semi; colons ""quoted""""#));

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .from_reader(csv.as_bytes());
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][2], "semi; colons \"quoted\"");
    }

    #[test]
    fn test_write_csv_file() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();

        write_csv(&sample(), path).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.starts_with("Timestamp;Author;Message"));
        assert!(content.contains("Alice;Hello there"));
    }

    #[test]
    fn test_empty_records_header_only() {
        let csv = to_csv(&[]).unwrap();
        assert_eq!(csv.trim_end(), "Timestamp;Author;Message");
    }
}

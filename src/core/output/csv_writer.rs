//! CSV output writer for the engagement table.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::core::analysis::EngagementRow;
use crate::error::{Result, SentiviewError};

/// Writes the engagement table to a CSV file.
///
/// # Format
/// - Delimiter: `,`
/// - Columns: `text`, `retweet_count`, `reply_count`, `like_count`, `quote_count`
/// - Row order: as given (the ranking's like-count order)
/// - Encoding: UTF-8
pub fn write_csv(rows: &[EngagementRow], output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    write_rows(rows, file)
}

/// Converts the engagement table to a CSV string.
///
/// Same format as [`write_csv`]. The header is written even when there are no
/// rows.
pub fn to_csv(rows: &[EngagementRow]) -> Result<String> {
    let mut buf = Vec::new();
    write_rows(rows, &mut buf)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

fn write_rows<W: Write>(rows: &[EngagementRow], sink: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(sink);

    // serialize() only emits a header together with the first row.
    writer.write_record(HEADER)?;
    for row in rows {
        writer.write_record([
            row.text.clone(),
            row.retweet_count.to_string(),
            row.reply_count.to_string(),
            row.like_count.to_string(),
            row.quote_count.to_string(),
        ])?;
    }

    writer.flush().map_err(SentiviewError::from)
}

const HEADER: [&str; 5] = [
    "text",
    "retweet_count",
    "reply_count",
    "like_count",
    "quote_count",
];

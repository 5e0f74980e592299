//! CSV loader for the post record source.
//!
//! The source is a table with a header row naming at least these columns
//! (in any order; extra columns are ignored):
//!
//! | Column | Parsed as |
//! |--------|-----------|
//! | `created_at` | timestamp, see [`parse_timestamp`] |
//! | `text` | string |
//! | `sentiment_score` | finite `f64` |
//! | `mentions` | list literal, see [`crate::mentions`] |
//! | `retweet_count`, `reply_count`, `like_count`, `quote_count` | `u64` |
//!
//! An optional `id` column supplies post ids; without it the 1-based data
//! row number is used.
//!
//! # Error recovery
//!
//! A record that cannot become a [`Post`] is skipped and listed in
//! [`LoadReport::skipped`]; the load carries on. A mentions field that does
//! not decode does **not** skip the record: the post keeps a
//! [`Mentions::Malformed`] marker and is counted in
//! [`LoadReport::malformed_mentions`].
//!
//! # Example
//!
//! ```
//! use sentiview::config::LoaderConfig;
//! use sentiview::loader::load_from_str;
//!
//! let csv = "\
//! created_at,text,sentiment_score,mentions,retweet_count,reply_count,like_count,quote_count
//! 2024-01-01 10:00:00,Hello world,0.5,['alice'],1,0,3,0
//! not-a-date,Broken,0.1,[],0,0,0,0
//! ";
//!
//! let report = load_from_str(csv, &LoaderConfig::new())?;
//! assert_eq!(report.posts.len(), 1);
//! assert_eq!(report.skipped.len(), 1);
//! # Ok::<(), sentiview::SentiviewError>(())
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::Post;
use crate::config::LoaderConfig;
use crate::error::{RecordErrorKind, Result, SentiviewError};
use crate::mentions::Mentions;

/// Timestamp layouts tried after RFC 3339, in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Timestamp layouts carrying a numeric offset, e.g. `2024-01-01 10:00:00+00:00`.
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%z"];

/// A record that was left out of the working set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedRecord {
    /// 1-based line number in the source (the header is line 1)
    pub line: u64,
    /// Why the record was skipped
    #[serde(serialize_with = "serialize_display")]
    pub reason: RecordErrorKind,
}

/// Outcome of a load: the posts plus what had to be left out.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadReport {
    /// Successfully loaded posts, in source order
    pub posts: Vec<Post>,
    /// Records excluded from the working set
    pub skipped: Vec<SkippedRecord>,
    /// Loaded posts whose mentions field did not decode
    pub malformed_mentions: usize,
}

impl LoadReport {
    /// Number of data rows seen (loaded + skipped).
    pub fn total_rows(&self) -> usize {
        self.posts.len() + self.skipped.len()
    }

    /// Returns `true` if every row loaded and every mentions field decoded.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.malformed_mentions == 0
    }
}

/// Column positions resolved from the header row.
struct Columns {
    id: Option<usize>,
    created_at: usize,
    text: usize,
    sentiment_score: usize,
    mentions: usize,
    retweet_count: usize,
    reply_count: usize,
    like_count: usize,
    quote_count: usize,
}

impl Columns {
    fn resolve(headers: &csv::StringRecord) -> Result<Self> {
        let find = |name: &'static str| -> Result<usize> {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
                .ok_or(SentiviewError::MissingColumn { column: name })
        };

        Ok(Self {
            id: find("id").ok(),
            created_at: find("created_at")?,
            text: find("text")?,
            sentiment_score: find("sentiment_score")?,
            mentions: find("mentions")?,
            retweet_count: find("retweet_count")?,
            reply_count: find("reply_count")?,
            like_count: find("like_count")?,
            quote_count: find("quote_count")?,
        })
    }
}

/// Loads posts from a CSV file.
pub fn load_posts(path: &Path, config: &LoaderConfig) -> Result<LoadReport> {
    tracing::debug!(path = %path.display(), "Opening record source");
    let file = File::open(path)?;
    load_from_reader(BufReader::new(file), config)
}

/// Loads posts from an in-memory CSV string.
pub fn load_from_str(content: &str, config: &LoaderConfig) -> Result<LoadReport> {
    load_from_reader(content.as_bytes(), config)
}

/// Loads posts from any CSV reader.
pub fn load_from_reader<R: Read>(reader: R, config: &LoaderConfig) -> Result<LoadReport> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .flexible(true)
        .from_reader(reader);

    let columns = Columns::resolve(rdr.headers()?)?;
    let mut report = LoadReport::default();

    for (row, result) in rdr.records().enumerate() {
        // Header occupies line 1.
        let fallback_line = row as u64 + 2;

        let outcome = match result {
            Ok(record) => {
                let line = record.position().map_or(fallback_line, |p| p.line());
                parse_record(&record, &columns, row + 1).map_err(|kind| (line, kind))
            }
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                let line = e.position().map_or(fallback_line, |p| p.line());
                Err((line, RecordErrorKind::Malformed(e.to_string())))
            }
        };

        match outcome {
            Ok(post) => {
                if post.mentions.is_malformed() {
                    tracing::warn!(id = %post.id, "Mentions field did not decode; excluded from mention counts");
                    report.malformed_mentions += 1;
                }
                report.posts.push(post);
            }
            Err((line, kind)) => {
                if !config.skip_invalid {
                    return Err(SentiviewError::record(line, kind));
                }
                tracing::warn!(line, reason = %kind, "Skipping invalid record");
                report.skipped.push(SkippedRecord { line, reason: kind });
            }
        }
    }

    tracing::info!(
        loaded = report.posts.len(),
        skipped = report.skipped.len(),
        malformed_mentions = report.malformed_mentions,
        "Record source loaded"
    );

    Ok(report)
}

fn parse_record(
    record: &csv::StringRecord,
    columns: &Columns,
    row_number: usize,
) -> std::result::Result<Post, RecordErrorKind> {
    let field = |idx: usize, name: &'static str| -> std::result::Result<&str, RecordErrorKind> {
        record
            .get(idx)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or(RecordErrorKind::MissingField(name))
    };

    let created_raw = field(columns.created_at, "created_at")?;
    let created_at = parse_timestamp(created_raw)
        .ok_or_else(|| RecordErrorKind::Timestamp(created_raw.to_string()))?;

    // Text may legitimately be empty, but the cell must exist.
    let text = record
        .get(columns.text)
        .ok_or(RecordErrorKind::MissingField("text"))?;

    let score_raw = field(columns.sentiment_score, "sentiment_score")?;
    let sentiment_score: f64 = score_raw.parse().map_err(|_| RecordErrorKind::Number {
        field: "sentiment_score",
        value: score_raw.to_string(),
    })?;
    if !sentiment_score.is_finite() {
        return Err(RecordErrorKind::NonFiniteScore(score_raw.to_string()));
    }

    let mentions = Mentions::from_raw(record.get(columns.mentions).unwrap_or_default());

    let id = columns
        .id
        .and_then(|idx| record.get(idx))
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map_or_else(|| row_number.to_string(), str::to_string);

    let count = |idx: usize, name: &'static str| -> std::result::Result<u64, RecordErrorKind> {
        let raw = field(idx, name)?;
        raw.parse().map_err(|_| RecordErrorKind::Number {
            field: name,
            value: raw.to_string(),
        })
    };

    Ok(Post {
        id,
        created_at,
        text: text.to_string(),
        sentiment_score,
        mentions,
        retweet_count: count(columns.retweet_count, "retweet_count")?,
        reply_count: count(columns.reply_count, "reply_count")?,
        like_count: count(columns.like_count, "like_count")?,
        quote_count: count(columns.quote_count, "quote_count")?,
    })
}

/// Parses a `created_at` value.
///
/// Accepted forms:
/// - RFC 3339 (`2024-01-01T10:00:00Z`, `2024-01-01T10:00:00+02:00`)
/// - `YYYY-MM-DD HH:MM:SS[.f]` with optional `+HH:MM` offset
/// - `YYYY-MM-DDTHH:MM:SS[.f]`, and both layouts without seconds
/// - bare `YYYY-MM-DD` (midnight)
///
/// Values with an offset keep their local wall-clock time and the offset is
/// dropped, so a post is bucketed under the calendar day it was written on.
///
/// ```
/// use sentiview::loader::parse_timestamp;
///
/// let ts = parse_timestamp("2024-01-01T23:30:00-02:00").unwrap();
/// assert_eq!(ts.to_string(), "2024-01-01 23:30:00");
/// assert!(parse_timestamp("01/02/2024").is_none());
/// ```
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }

    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(value, fmt) {
            return Some(dt.naive_local());
        }
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

fn serialize_display<S: serde::Serializer>(
    value: &RecordErrorKind,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "created_at,text,sentiment_score,mentions,retweet_count,reply_count,like_count,quote_count";

    fn csv_of(rows: &[&str]) -> String {
        let mut out = String::from(HEADER);
        for row in rows {
            out.push('\n');
            out.push_str(row);
        }
        out
    }

    #[test]
    fn test_load_basic() {
        let csv = csv_of(&[
            r#"2024-01-01 10:00:00,I love climate policy,0.5,"['alice', 'bob']",1,2,3,4"#,
            "2024-01-02 11:00:00,I love dogs,-0.2,[],0,0,9,0",
        ]);
        let report = load_from_str(&csv, &LoaderConfig::new()).unwrap();

        assert_eq!(report.posts.len(), 2);
        assert!(report.is_clean());
        let first = &report.posts[0];
        assert_eq!(first.id, "1");
        assert_eq!(first.text, "I love climate policy");
        assert_eq!(first.handles().unwrap(), ["alice", "bob"]);
        assert_eq!(first.quote_count, 4);
        assert_eq!(report.posts[1].id, "2");
        assert_eq!(report.posts[1].like_count, 9);
    }

    #[test]
    fn test_load_uses_id_column() {
        let csv = "id,created_at,text,sentiment_score,mentions,retweet_count,reply_count,like_count,quote_count\n\
                   abc,2024-01-01,Hi,0,[],0,0,0,0";
        let report = load_from_str(csv, &LoaderConfig::new()).unwrap();
        assert_eq!(report.posts[0].id, "abc");
    }

    #[test]
    fn test_load_skips_bad_records() {
        let csv = csv_of(&[
            "yesterday,Bad date,0.1,[],0,0,0,0",
            "2024-01-01,Bad score,abc,[],0,0,0,0",
            "2024-01-01,Negative likes,0.1,[],0,0,-1,0",
            "2024-01-01,Infinite,inf,[],0,0,0,0",
            ",No date,0.1,[],0,0,0,0",
            "2024-01-01,Good,0.1,[],0,0,0,0",
        ]);
        let report = load_from_str(&csv, &LoaderConfig::new()).unwrap();

        assert_eq!(report.posts.len(), 1);
        assert_eq!(report.posts[0].text, "Good");
        assert_eq!(report.total_rows(), 6);

        let lines: Vec<u64> = report.skipped.iter().map(|s| s.line).collect();
        assert_eq!(lines, vec![2, 3, 4, 5, 6]);
        assert_eq!(
            report.skipped[0].reason,
            RecordErrorKind::Timestamp("yesterday".into())
        );
        assert!(matches!(
            report.skipped[2].reason,
            RecordErrorKind::Number { field: "like_count", .. }
        ));
        assert!(matches!(
            report.skipped[3].reason,
            RecordErrorKind::NonFiniteScore(_)
        ));
        assert_eq!(
            report.skipped[4].reason,
            RecordErrorKind::MissingField("created_at")
        );
    }

    #[test]
    fn test_load_short_row_is_skipped() {
        let csv = csv_of(&["2024-01-01,Too short,0.1"]);
        let report = load_from_str(&csv, &LoaderConfig::new()).unwrap();
        assert!(report.posts.is_empty());
        assert_eq!(report.skipped.len(), 1);
    }

    #[test]
    fn test_load_strict_fails_on_bad_record() {
        let csv = csv_of(&["2024-01-01,Good,0.1,[],0,0,0,0", "bad,Bad,0.1,[],0,0,0,0"]);
        let err = load_from_str(&csv, &LoaderConfig::strict()).unwrap_err();
        assert!(err.is_record());
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_malformed_mentions_kept() {
        let csv = csv_of(&[
            "2024-01-01,Broken mentions,0.1,alice;bob,0,0,5,0",
            "2024-01-01,Empty mentions,0.1,,0,0,1,0",
        ]);
        let report = load_from_str(&csv, &LoaderConfig::new()).unwrap();
        assert_eq!(report.posts.len(), 2);
        assert_eq!(report.malformed_mentions, 2);
        assert!(report.posts[0].mentions.is_malformed());
        assert!(!report.is_clean());
    }

    #[test]
    fn test_missing_column() {
        let csv = "created_at,text,sentiment_score\n2024-01-01,Hi,0.1";
        let err = load_from_str(csv, &LoaderConfig::new()).unwrap_err();
        assert!(matches!(
            err,
            SentiviewError::MissingColumn { column: "mentions" }
        ));
    }

    #[test]
    fn test_custom_delimiter() {
        let csv = "created_at;text;sentiment_score;mentions;retweet_count;reply_count;like_count;quote_count\n\
                   2024-01-01;a, b, c;0.3;['x'];0;0;0;0";
        let report = load_from_str(csv, &LoaderConfig::new().with_delimiter(b';')).unwrap();
        assert_eq!(report.posts[0].text, "a, b, c");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_posts(Path::new("/definitely/not/here.csv"), &LoaderConfig::new())
            .unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        assert_eq!(parse_timestamp("2024-01-15 10:30:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-15T10:30:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-15 10:30"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-15T10:30:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-15 10:30:00+00:00"), Some(expected));
        assert_eq!(parse_timestamp(" 2024-01-15 10:30:00.000 "), Some(expected));
        assert_eq!(
            parse_timestamp("2024-01-15"),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(0, 0, 0)
        );
        assert_eq!(parse_timestamp("15/01/2024"), None);
        assert_eq!(parse_timestamp(""), None);
    }

    #[test]
    fn test_parse_timestamp_keeps_local_time() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(23, 30, 0)
            .unwrap();
        assert_eq!(parse_timestamp("2024-01-01T23:30:00-02:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-01 23:30:00+05:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-01 23:30:00+0530"), Some(expected));
    }
}

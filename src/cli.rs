//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options
//!
//! Filter resolution lives here too, so the rules for defaulting the date
//! window are testable without spawning the binary.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{AnalysisConfig, LoaderConfig};
use crate::core::analysis::MAX_TOP_USERS;
use crate::core::filter::{DateRange, FilterParams, parse_date};
use crate::error::{Result, SentiviewError};

/// Filter a social-media post dataset by date and keyword and report
/// sentiment, mentions, terms and engagement.
#[derive(Parser, Debug, Clone)]
#[command(name = "sentiview")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    sentiview posts.csv
    sentiview posts.csv --from 2024-01-01 --to 2024-01-31 -k climate
    sentiview posts.csv -f json > views.json
    sentiview posts.csv -o engagement.csv")]
pub struct Args {
    /// Path to the posts CSV file
    pub input: PathBuf,

    /// First day to include (YYYY-MM-DD). Defaults to the earliest post
    #[arg(long, value_name = "DATE")]
    pub from: Option<String>,

    /// Last day to include (YYYY-MM-DD). Defaults to the latest post
    #[arg(long, value_name = "DATE")]
    pub to: Option<String>,

    /// Only keep posts containing this text (case-insensitive)
    #[arg(short, long, default_value = "")]
    pub keyword: String,

    /// Output format. Defaults to the output file's extension, else text
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Number of mentioned users to rank (at most 10)
    #[arg(long, default_value_t = 10, value_name = "N", value_parser = parse_top)]
    pub top: usize,

    /// Extra words to leave out of the term counts (comma-separated)
    #[arg(long, value_delimiter = ',', value_name = "WORDS")]
    pub stop_words: Vec<String>,

    /// CSV field delimiter of the input
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,

    /// Fail on the first bad record instead of skipping it
    #[arg(long)]
    pub strict: bool,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(long)]
    pub debug: bool,
}

fn parse_top(value: &str) -> std::result::Result<usize, String> {
    let n: usize = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    if n > MAX_TOP_USERS {
        return Err(format!("at most {MAX_TOP_USERS} users can be ranked"));
    }
    Ok(n)
}

impl Args {
    /// Loader settings from `--delimiter` and `--strict`.
    pub fn loader_config(&self) -> Result<LoaderConfig> {
        let delimiter = Some(self.delimiter)
            .filter(char::is_ascii)
            .and_then(|c| u8::try_from(c).ok())
            .ok_or_else(|| {
                SentiviewError::invalid_format(
                    "delimiter",
                    format!("'{}' is not an ASCII character", self.delimiter),
                )
            })?;
        Ok(LoaderConfig::new()
            .with_delimiter(delimiter)
            .with_skip_invalid(!self.strict))
    }

    /// Analysis settings from `--top` and `--stop-words`.
    pub fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig::default()
            .with_top_users(self.top)
            .with_extra_stop_words(&self.stop_words)
    }

    /// Builds the filter from `--from`, `--to` and `--keyword`.
    ///
    /// A missing bound falls back to `bounds` (the dataset's own range). When
    /// the dataset is empty, a missing bound copies the other one, or today's
    /// date if neither was given.
    pub fn filter_params(&self, bounds: Option<DateRange>) -> Result<FilterParams> {
        let from = self.from.as_deref().map(parse_date).transpose()?;
        let to = self.to.as_deref().map(parse_date).transpose()?;

        let (start, end) = match (from, to, bounds) {
            (Some(start), Some(end), _) => (start, end),
            (from, to, Some(bounds)) => (from.unwrap_or(bounds.start()), to.unwrap_or(bounds.end())),
            (Some(day), None, None) | (None, Some(day), None) => (day, day),
            (None, None, None) => {
                let today = chrono::Local::now().date_naive();
                (today, today)
            }
        };

        FilterParams::from_parts(start, end, self.keyword.clone())
    }

    /// Explicit `--format`, else the output file's extension, else text.
    ///
    /// An output file whose extension names no format is rejected rather
    /// than silently written as text.
    pub fn output_format(&self) -> Result<crate::format::OutputFormat> {
        match (self.format, self.output.as_deref()) {
            (Some(format), _) => Ok(format.into()),
            (None, Some(path)) => crate::format::OutputFormat::from_path(path),
            (None, None) => Ok(crate::format::OutputFormat::default()),
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain-text report of every view (default)
    #[default]
    Text,

    /// All views as one JSON document
    Json,

    /// Engagement table as CSV
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&crate::format::OutputFormat::from(*self), f)
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

//! Output format selection.
//!
//! These types don't depend on CLI frameworks, so library callers can pick a
//! writer by name or by file extension the same way the binary does.
//!
//! # Example
//!
//! ```rust
//! use sentiview::format::OutputFormat;
//!
//! let format = OutputFormat::from_path("report.json").unwrap();
//! assert_eq!(format, OutputFormat::Json);
//! assert_eq!(format.extension(), "json");
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::processor::Rendered;
use crate::error::{Result, SentiviewError};

/// Output format for the derived views.
///
/// - [`Text`](OutputFormat::Text) - human-readable report of every view
/// - [`Json`](OutputFormat::Json) - every view as one JSON document
/// - [`Csv`](OutputFormat::Csv) - the engagement table
///
/// # Example
///
/// ```rust
/// use sentiview::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("csv").unwrap();
/// assert_eq!(format, OutputFormat::Csv);
/// assert_eq!(format.to_string(), "CSV");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Plain-text report (default)
    #[default]
    Text,

    /// JSON document with all five views
    Json,

    /// CSV engagement table
    Csv,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "json", "csv"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Text, OutputFormat::Json, OutputFormat::Csv]
    }

    /// Detects format from a file path based on extension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sentiview::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::from_path("out/views.TXT").unwrap(), OutputFormat::Text);
    /// assert!(OutputFormat::from_path("views.xlsx").is_err());
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "txt" | "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(SentiviewError::invalid_format(
                "output",
                format!("Unknown file extension: '.{ext}'. Expected one of: txt, json, csv"),
            )),
        }
    }

    /// Cargo feature this format needs, if any.
    pub fn required_feature(&self) -> Option<&'static str> {
        match self {
            OutputFormat::Text => None,
            OutputFormat::Json => Some("json-output"),
            OutputFormat::Csv => Some("csv-output"),
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

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes a rendered pass to a file in the given format.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
pub fn write_to_format(
    rendered: &Rendered,
    path: impl AsRef<Path>,
    format: OutputFormat,
) -> Result<()> {
    let path = path.as_ref();
    match format {
        OutputFormat::Text => crate::core::output::write_text(rendered, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(&rendered.views, path),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(&rendered.views.engagement, path),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}

/// Renders a pass to a string in the given format.
pub fn to_format_string(rendered: &Rendered, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(crate::core::output::to_text(rendered)),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(&rendered.views),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(&rendered.views.engagement),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}

#[allow(dead_code)]
fn feature_disabled(format: OutputFormat) -> SentiviewError {
    SentiviewError::invalid_format(
        "output",
        format!(
            "Output format {format} requires the '{}' feature to be enabled",
            format.required_feature().unwrap_or("default")
        ),
    )
}

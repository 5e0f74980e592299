//! Output writers for the derived views.
//!
//! - [`write_text`] / [`to_text`] - human-readable report of every view
//! - [`write_json`] / [`to_json`] - all views as one JSON document - requires `json-output` feature
//! - [`write_csv`] / [`to_csv`] - engagement table as CSV - requires `csv-output` feature
//!
//! # Choosing a Format
//!
//! | Format | Contents | Use Case |
//! |--------|----------|----------|
//! | Text | Every view, truncated lists | Terminal, quick look |
//! | JSON | Every view, complete | Charting front-ends, APIs |
//! | CSV | Engagement table only | Spreadsheets |
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> sentiview::Result<()> {
//! use sentiview::config::AnalysisConfig;
//! use sentiview::core::output::{to_text, write_csv, write_json};
//! use sentiview::core::{FilterParams, render};
//! use sentiview::Post;
//!
//! # let posts: Vec<Post> = Vec::new();
//! let params = FilterParams::spanning(&posts).expect("non-empty dataset");
//! let rendered = render(&posts, &params, &AnalysisConfig::default());
//!
//! write_json(&rendered.views, "views.json")?;
//! write_csv(&rendered.views.engagement, "engagement.csv")?;
//! println!("{}", to_text(&rendered));
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
mod text_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
pub use text_writer::{to_text, write_text};

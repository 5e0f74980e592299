//! # Sentiview
//!
//! Core of a sentiment dashboard for social-media posts: load a CSV of
//! posts once, then filter it by date range and keyword and derive the views
//! a dashboard shows.
//!
//! ## Overview
//!
//! Every interaction is one pure pass over an immutable record set:
//!
//! 1. **Filter** the posts by an inclusive calendar-date range and an
//!    optional case-insensitive keyword ([`core::filter`])
//! 2. **Aggregate** the filtered posts into five views ([`core::analysis`]):
//!    - sentiment distribution (Positive / Neutral / Negative shares)
//!    - mean sentiment per day
//!    - the ten most-mentioned user handles
//!    - term frequencies for a word cloud
//!    - posts ranked by likes
//! 3. **Write** the views as a text report, JSON or CSV ([`core::output`])
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sentiview::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let dataset = Dataset::load("posts.csv".as_ref(), &LoaderConfig::default())?;
//!
//!     let params = FilterParams::new(DateRange::parse("2024-01-01", "2024-01-31")?)
//!         .with_keyword("climate");
//!     let rendered = render(dataset.posts(), &params, &AnalysisConfig::default());
//!
//!     println!("{} posts matched", rendered.stats.filtered_posts);
//!     for user in &rendered.views.top_users.users {
//!         println!("@{} {}", user.handle, user.count);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`post`] - [`Post`] and [`Sentiment`]
//! - [`mentions`] - decoder for the serialized mentions list
//! - [`loader`] - CSV loading with per-row recovery
//! - [`dataset`] - process-wide, load-once record set
//! - [`config`] - [`LoaderConfig`](config::LoaderConfig), [`AnalysisConfig`](config::AnalysisConfig)
//! - [`core`] - filtering, aggregation, the render pipeline and writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat) selection
//! - [`error`] - Unified error types ([`SentiviewError`], [`Result`])
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod dataset;
pub mod error;
pub mod format;
pub mod loader;
#[cfg(feature = "cli")]
pub mod logging;
pub mod mentions;
pub mod post;

// Re-export the main types at the crate root for convenience
pub use error::{Result, SentiviewError};
pub use post::{Post, Sentiment};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use sentiview::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Result, SentiviewError};
    pub use crate::mentions::Mentions;
    pub use crate::{Post, Sentiment};

    pub use crate::config::{AnalysisConfig, LoaderConfig};
    pub use crate::dataset::Dataset;
    pub use crate::loader::{LoadReport, load_posts};

    pub use crate::core::analysis::DerivedViews;
    pub use crate::core::filter::{DateRange, FilterParams, filter_posts};
    pub use crate::core::processor::{PipelineStats, Rendered, render};

    pub use crate::core::output::{to_text, write_text};
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, write_json};

    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
}

//! Core processing logic for sentiview.
//!
//! This module contains:
//! - [`filter`] - Post filtering by date range and keyword
//! - [`analysis`] - The five derived views
//! - [`processor`] - One full filter + aggregate pass
//! - [`output`] - Format writers (text, JSON, CSV)
//!
//! # Quick Start
//!
//! ```rust
//! use sentiview::core::{DateRange, FilterParams, filter_posts, render};
//! use sentiview::core::analysis::{sentiment_distribution, top_mentioned_users};
//! ```

pub mod analysis;
pub mod filter;
pub mod output;
pub mod processor;

// Re-export main types for convenience
pub use analysis::DerivedViews;
pub use filter::{DateRange, FilterParams, filter_posts, parse_date};
pub use processor::{PipelineStats, Rendered, render};

pub use output::{to_text, write_text};
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, write_json};

//! Full filter + aggregate pass.
//!
//! [`render`] is the single entry point a presentation layer calls on every
//! interaction: it filters the immutable record set with fresh parameters and
//! recomputes all derived views. Nothing is cached between calls, so the same
//! inputs always give the same [`Rendered`] output.
//!
//! # Example
//!
//! ```
//! use sentiview::config::AnalysisConfig;
//! use sentiview::core::{FilterParams, render};
//! use sentiview::Post;
//! use chrono::NaiveDate;
//!
//! let at = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(8, 0, 0).unwrap();
//! let posts = vec![
//!     Post::new("1", at, "good news").with_sentiment(0.5),
//!     Post::new("2", at, "bad news").with_sentiment(-0.5),
//! ];
//!
//! let params = FilterParams::spanning(&posts).unwrap();
//! let rendered = render(&posts, &params, &AnalysisConfig::default());
//!
//! assert_eq!(rendered.stats.filtered_posts, 2);
//! assert_eq!(rendered.views.trend[0].mean_score, 0.0);
//! ```

use std::time::Instant;

use serde::Serialize;

use super::analysis::DerivedViews;
use super::filter::{FilterParams, filter_posts};
use crate::Post;
use crate::config::AnalysisConfig;

/// Counters describing one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PipelineStats {
    /// Posts in the record set before filtering
    pub total_posts: usize,
    /// Posts that passed the filter
    pub filtered_posts: usize,
    /// Filtered posts left out of the top-users view
    pub malformed_mentions: usize,
}

impl PipelineStats {
    pub fn new(total_posts: usize, filtered_posts: usize) -> Self {
        Self {
            total_posts,
            filtered_posts,
            malformed_mentions: 0,
        }
    }

    /// Percentage of posts kept by the filter.
    pub fn selectivity(&self) -> f64 {
        if self.total_posts == 0 {
            return 0.0;
        }
        self.filtered_posts as f64 / self.total_posts as f64 * 100.0
    }
}

/// Output of one pass: the derived views and how they were obtained.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rendered {
    pub params: FilterParams,
    pub stats: PipelineStats,
    pub views: DerivedViews,
}

/// Filters `posts` with `params` and computes every derived view.
///
/// `params` is valid by construction (see
/// [`DateRange`](super::filter::DateRange)), so a pass always completes.
pub fn render(posts: &[Post], params: &FilterParams, config: &AnalysisConfig) -> Rendered {
    let start = Instant::now();

    let filtered = filter_posts(posts, params);
    let views = DerivedViews::compute(&filtered, config);

    let stats = PipelineStats {
        malformed_mentions: views.top_users.skipped_posts,
        ..PipelineStats::new(posts.len(), filtered.len())
    };

    tracing::debug!(
        start = %params.date_range.start(),
        end = %params.date_range.end(),
        keyword = %params.keyword,
        total = stats.total_posts,
        filtered = stats.filtered_posts,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Rendered derived views"
    );

    Rendered {
        params: params.clone(),
        stats,
        views,
    }
}

//! Filter posts by date range and keyword.
//!
//! This module provides [`DateRange`] and [`FilterParams`] for defining
//! filter criteria and [`filter_posts`] for selecting the matching posts.
//!
//! # Filter Types
//!
//! | Filter | Field | Description |
//! |--------|-------|-------------|
//! | Date range | [`date_range`](FilterParams::date_range) | Calendar date within `start..=end` |
//! | Keyword | [`keyword`](FilterParams::keyword) | Case-insensitive literal substring of the text |
//!
//! # Examples
//!
//! ```
//! use sentiview::core::filter::{DateRange, FilterParams, filter_posts};
//! use sentiview::Post;
//! use chrono::NaiveDate;
//!
//! # fn main() -> sentiview::Result<()> {
//! let at = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap().and_hms_opt(12, 0, 0).unwrap();
//! let posts = vec![
//!     Post::new("1", at(1), "I love climate policy"),
//!     Post::new("2", at(1), "I love dogs"),
//!     Post::new("3", at(9), "Climate again"),
//! ];
//!
//! let params = FilterParams::new(DateRange::parse("2024-01-01", "2024-01-05")?)
//!     .with_keyword("Climate");
//! let filtered = filter_posts(&posts, &params);
//!
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].id, "1");
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Both date bounds are inclusive and compare calendar dates only
//! - The keyword is matched literally; `.`, `*`, `(` have no special meaning
//! - An empty keyword matches every post
//! - Filters are combined with AND logic and input order is preserved

use chrono::NaiveDate;
use serde::Serialize;

use crate::Post;
use crate::error::{Result, SentiviewError};

/// Inclusive calendar-date window.
///
/// A `DateRange` always satisfies `start <= end`; the constructors reject
/// anything else, so an invalid range never reaches the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting `start > end`.
    ///
    /// # Errors
    ///
    /// Returns [`SentiviewError::InvalidDateRange`] if `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(SentiviewError::invalid_range(start, end));
        }
        Ok(Self { start, end })
    }

    /// Parses both bounds from `YYYY-MM-DD` strings.
    ///
    /// # Errors
    ///
    /// Returns [`SentiviewError::InvalidDate`] for a malformed date and
    /// [`SentiviewError::InvalidDateRange`] if `start` is after `end`.
    ///
    /// ```
    /// use sentiview::core::filter::DateRange;
    ///
    /// assert!(DateRange::parse("2024-01-01", "2024-12-31").is_ok());
    /// assert!(DateRange::parse("2024-12-31", "2024-01-01").is_err());
    /// assert!(DateRange::parse("01-01-2024", "2024-12-31").is_err());
    /// ```
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Self::new(parse_date(start)?, parse_date(end)?)
    }

    /// A one-day window.
    pub fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// First day of the window.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the window.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Smallest range containing every post's date; `None` for no posts.
    pub fn spanning(posts: &[Post]) -> Option<Self> {
        let mut dates = posts.iter().map(Post::date);
        let first = dates.next()?;
        let (start, end) = dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));
        Some(Self { start, end })
    }

    /// Returns `true` if `date` lies inside the window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| SentiviewError::invalid_date(value))
}

/// User-chosen filter parameters for one query.
///
/// Built fresh for every interaction; there is no state carried between
/// queries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterParams {
    /// Posts must fall on a date inside this window.
    pub date_range: DateRange,

    /// Posts must contain this text (case-insensitive). Empty = no filter.
    pub keyword: String,
}

impl FilterParams {
    /// Creates parameters for a date window with no keyword.
    pub fn new(date_range: DateRange) -> Self {
        Self {
            date_range,
            keyword: String::new(),
        }
    }

    /// Creates parameters from raw dates and keyword.
    ///
    /// # Errors
    ///
    /// Returns [`SentiviewError::InvalidDateRange`] if `start` is after `end`.
    pub fn from_parts(start: NaiveDate, end: NaiveDate, keyword: impl Into<String>) -> Result<Self> {
        Ok(Self::new(DateRange::new(start, end)?).with_keyword(keyword))
    }

    /// Parameters covering every post in `posts`, with no keyword.
    ///
    /// This is the initial dashboard state. Returns `None` for an empty slice.
    pub fn spanning(posts: &[Post]) -> Option<Self> {
        DateRange::spanning(posts).map(Self::new)
    }

    /// Sets the keyword.
    #[must_use]
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = keyword.into();
        self
    }

    /// Returns `true` if the keyword filter is active.
    pub fn is_keyword_active(&self) -> bool {
        !self.keyword.is_empty()
    }
}

/// Selects the posts matching `params`.
///
/// Returns references into `posts`, in their original order. Applying the
/// same parameters to the result again returns it unchanged.
pub fn filter_posts<'a>(posts: &'a [Post], params: &FilterParams) -> Vec<&'a Post> {
    let needle = params.keyword.to_lowercase();

    posts
        .iter()
        .filter(|post| matches_all(post, params, &needle))
        .collect()
}

/// Check if a single post matches every active filter.
fn matches_all(post: &Post, params: &FilterParams, needle: &str) -> bool {
    if !params.date_range.contains(post.date()) {
        return false;
    }

    needle.is_empty() || post.text.to_lowercase().contains(needle)
}

//! Post record type shared by every stage of the pipeline.
//!
//! This module provides [`Post`], one raw social-media record, and
//! [`Sentiment`], the polarity class derived from its score. The loader
//! produces posts, the filter selects them and the analysis views read them;
//! nothing mutates a post after it is loaded.
//!
//! # Examples
//!
//! ## Builder Pattern
//!
//! ```
//! use sentiview::{Post, Sentiment};
//! use chrono::NaiveDate;
//!
//! let created = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(9, 30, 0).unwrap();
//! let post = Post::new("1", created, "I love climate policy")
//!     .with_sentiment(0.8)
//!     .with_mentions(vec!["alice".into()])
//!     .with_likes(12);
//!
//! assert_eq!(post.sentiment(), Sentiment::Positive);
//! assert_eq!(post.date(), created.date());
//! ```
//!
//! ## Serialization
//!
//! ```
//! use sentiview::Post;
//! use chrono::NaiveDate;
//!
//! let created = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let post = Post::new("7", created, "Hello!");
//! let json = serde_json::to_string(&post)?;
//! let parsed: Post = serde_json::from_str(&json)?;
//!
//! assert_eq!(post, parsed);
//! # Ok::<(), serde_json::Error>(())
//! ```

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::mentions::Mentions;

/// Polarity class of a post, decided by the sign of its sentiment score.
///
/// | Score | Class |
/// |-------|-------|
/// | `> 0` | [`Positive`](Sentiment::Positive) |
/// | `== 0` | [`Neutral`](Sentiment::Neutral) |
/// | `< 0` | [`Negative`](Sentiment::Negative) |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Classifies a score.
    ///
    /// ```
    /// use sentiview::Sentiment;
    ///
    /// assert_eq!(Sentiment::from_score(0.1), Sentiment::Positive);
    /// assert_eq!(Sentiment::from_score(0.0), Sentiment::Neutral);
    /// assert_eq!(Sentiment::from_score(-0.0), Sentiment::Neutral);
    /// assert_eq!(Sentiment::from_score(-2.5), Sentiment::Negative);
    /// ```
    pub fn from_score(score: f64) -> Self {
        if score > 0.0 {
            Sentiment::Positive
        } else if score < 0.0 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    /// All classes in display order.
    pub fn all() -> [Sentiment; 3] {
        [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative]
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One raw social-media record.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `id` | `String` | Opaque identifier, unique per post |
/// | `created_at` | `NaiveDateTime` | Creation time, timezone-naive |
/// | `text` | `String` | Post body |
/// | `sentiment_score` | `f64` | Finite score; sign gives polarity |
/// | `mentions` | [`Mentions`] | Decoded handles, or the raw field if malformed |
/// | `retweet_count` .. `quote_count` | `u64` | Engagement counters |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,

    pub created_at: NaiveDateTime,

    pub text: String,

    pub sentiment_score: f64,

    #[serde(default)]
    pub mentions: Mentions,

    #[serde(default)]
    pub retweet_count: u64,

    #[serde(default)]
    pub reply_count: u64,

    #[serde(default)]
    pub like_count: u64,

    #[serde(default)]
    pub quote_count: u64,
}

impl Post {
    /// Creates a neutral post with no mentions and zero engagement.
    pub fn new(id: impl Into<String>, created_at: NaiveDateTime, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            created_at,
            text: text.into(),
            sentiment_score: 0.0,
            mentions: Mentions::default(),
            retweet_count: 0,
            reply_count: 0,
            like_count: 0,
            quote_count: 0,
        }
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Builder method to set the sentiment score.
    #[must_use]
    pub fn with_sentiment(mut self, score: f64) -> Self {
        self.sentiment_score = score;
        self
    }

    /// Builder method to set decoded mentions.
    #[must_use]
    pub fn with_mentions(mut self, handles: Vec<String>) -> Self {
        self.mentions = Mentions::Decoded(handles);
        self
    }

    /// Builder method to set the mentions field from its serialized form.
    ///
    /// A malformed value is kept as [`Mentions::Malformed`].
    #[must_use]
    pub fn with_raw_mentions(mut self, raw: &str) -> Self {
        self.mentions = Mentions::from_raw(raw);
        self
    }

    /// Builder method to set all four engagement counters at once.
    #[must_use]
    pub fn with_engagement(mut self, retweets: u64, replies: u64, likes: u64, quotes: u64) -> Self {
        self.retweet_count = retweets;
        self.reply_count = replies;
        self.like_count = likes;
        self.quote_count = quotes;
        self
    }

    /// Builder method to set the like count.
    #[must_use]
    pub fn with_likes(mut self, likes: u64) -> Self {
        self.like_count = likes;
        self
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Calendar date of `created_at`; the bucket key for trends and the
    /// value compared against date-range bounds.
    pub fn date(&self) -> NaiveDate {
        self.created_at.date()
    }

    /// Polarity class of this post.
    pub fn sentiment(&self) -> Sentiment {
        Sentiment::from_score(self.sentiment_score)
    }

    /// Decoded handles, or `None` if the mentions field was malformed.
    pub fn handles(&self) -> Option<&[String]> {
        self.mentions.handles()
    }
}

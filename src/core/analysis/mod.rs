//! The five derived views computed over a filtered post set.
//!
//! Each view is an independent pure function of the filtered posts:
//!
//! | View | Function | Result |
//! |------|----------|--------|
//! | Sentiment distribution | [`sentiment_distribution`] | [`SentimentDistribution`] |
//! | Sentiment trend | [`sentiment_trend`] | `Vec<`[`TrendPoint`]`>` |
//! | Top mentioned users | [`top_mentioned_users`] | [`TopUsers`] |
//! | Term frequencies | [`term_frequencies`] | [`TermFrequencies`] |
//! | Engagement ranking | [`engagement_ranking`] | `Vec<`[`EngagementRow`]`>` |
//!
//! None of them fail. On an empty input each returns its empty/zero state, so
//! a consumer can render "no data" uniformly.
//!
//! # Tie-breaking
//!
//! Ranked views break count ties by **first-seen order**: the handle or term
//! that appears earliest in the filtered sequence ranks first. The engagement
//! table is a stable sort, so equal like counts keep their input order.
//!
//! # Example
//!
//! ```
//! use sentiview::core::analysis::DerivedViews;
//! use sentiview::config::AnalysisConfig;
//!
//! let views = DerivedViews::compute(&[], &AnalysisConfig::default());
//! assert!(views.is_empty());
//! assert!(views.trend.is_empty());
//! assert_eq!(views.distribution.total, 0);
//! ```

mod engagement;
mod sentiment;
mod terms;
mod top_users;

use std::collections::HashMap;
use std::hash::Hash;

use serde::Serialize;

pub use engagement::{EngagementRow, engagement_ranking};
pub use sentiment::{
    ClassShare, SentimentDistribution, TrendPoint, sentiment_distribution, sentiment_trend,
};
pub use terms::{TermFrequencies, TermWeight, corpus_text, is_stop_word, term_frequencies};
pub use top_users::{MAX_TOP_USERS, TopUsers, UserCount, top_mentioned_users};

use crate::Post;
use crate::config::AnalysisConfig;

/// All five views for one filtered set.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DerivedViews {
    pub distribution: SentimentDistribution,
    pub trend: Vec<TrendPoint>,
    pub top_users: TopUsers,
    pub terms: TermFrequencies,
    pub engagement: Vec<EngagementRow>,
}

impl DerivedViews {
    /// Computes every view over `posts`.
    pub fn compute(posts: &[&Post], config: &AnalysisConfig) -> Self {
        Self {
            distribution: sentiment_distribution(posts),
            trend: sentiment_trend(posts),
            top_users: top_mentioned_users(posts, config.top_users),
            terms: term_frequencies(posts, config),
            engagement: engagement_ranking(posts),
        }
    }

    /// Returns `true` if the views were computed over zero posts.
    pub fn is_empty(&self) -> bool {
        self.distribution.is_empty()
    }
}

/// Counts occurrences and orders them by descending count, first-seen first
/// among equals.
pub(crate) fn count_first_seen<K, I>(items: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();

    for item in items {
        if let Some(&i) = index.get(&item) {
            counts[i].1 += 1;
        } else {
            index.insert(item.clone(), counts.len());
            counts.push((item, 1));
        }
    }

    // Stable: equal counts keep first-seen order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

//! Engagement table sorted by likes.

use serde::Serialize;

use crate::Post;

/// Projection of a post onto its engagement counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngagementRow {
    pub text: String,
    pub retweet_count: u64,
    pub reply_count: u64,
    pub like_count: u64,
    pub quote_count: u64,
}

impl From<&Post> for EngagementRow {
    fn from(post: &Post) -> Self {
        Self {
            text: post.text.clone(),
            retweet_count: post.retweet_count,
            reply_count: post.reply_count,
            like_count: post.like_count,
            quote_count: post.quote_count,
        }
    }
}

/// Projects `posts` and sorts them by `like_count`, highest first.
///
/// The sort is stable and has no secondary key: rows with equal likes keep
/// their input order.
pub fn engagement_ranking(posts: &[&Post]) -> Vec<EngagementRow> {
    let mut rows: Vec<EngagementRow> = posts.iter().map(|p| EngagementRow::from(*p)).collect();
    rows.sort_by(|a, b| b.like_count.cmp(&a.like_count));
    rows
}

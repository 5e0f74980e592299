//! Most-mentioned user handles.

use serde::Serialize;

use super::count_first_seen;
use crate::Post;

/// Upper bound on the top-users view, whatever limit is asked for.
pub const MAX_TOP_USERS: usize = 10;

/// One handle and how often it was mentioned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserCount {
    pub handle: String,
    pub count: usize,
}

/// Ranked handles plus the posts left out because their mentions field was
/// malformed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TopUsers {
    /// At most `limit` (and never more than [`MAX_TOP_USERS`]) entries,
    /// descending by count
    pub users: Vec<UserCount>,
    /// Posts excluded from the count (malformed mentions)
    pub skipped_posts: usize,
}

impl TopUsers {
    /// Returns `true` if no handle was mentioned.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

/// Counts every mention across `posts` and keeps the `limit` most frequent,
/// capped at [`MAX_TOP_USERS`].
///
/// Ties keep first-seen order. Empty handles are ignored. Posts whose
/// mentions did not decode are skipped, not treated as zero-mention posts.
pub fn top_mentioned_users(posts: &[&Post], limit: usize) -> TopUsers {
    let mut skipped_posts = 0;

    let handles = posts.iter().filter_map(|post| {
        let handles = post.handles();
        if handles.is_none() {
            skipped_posts += 1;
        }
        handles
    });

    let mut users: Vec<UserCount> = count_first_seen(
        handles
            .flatten()
            .map(String::as_str)
            .filter(|h| !h.trim().is_empty()),
    )
    .into_iter()
    .map(|(handle, count)| UserCount {
        handle: handle.to_string(),
        count,
    })
    .collect();
    users.truncate(limit.min(MAX_TOP_USERS));

    TopUsers {
        users,
        skipped_posts,
    }
}

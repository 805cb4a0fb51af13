//! Posts and comments as returned by the per-user listing endpoints.

use serde::{Deserialize, Serialize};

/// A submission made by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostItem {
    pub title: String,
    /// Community (subreddit) the post was made in.
    pub community: String,
    pub score: i64,
    pub comment_count: u64,
    /// Epoch seconds; `0.0` when the listing omitted it.
    pub created_utc: f64,
    /// Self-text body; empty for link posts.
    pub body: String,
    /// Link target, or the post's own URL for self posts.
    pub url: String,
    /// Site-relative path, e.g. `/r/rust/comments/abc123/title/`.
    pub permalink: String,
}

/// A comment written by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommentItem {
    pub body: String,
    pub community: String,
    pub score: i64,
    pub created_utc: f64,
    pub permalink: String,
    /// Title of the post the comment was left on.
    pub parent_title: String,
}

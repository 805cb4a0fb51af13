//! The assembled per-user result and its degraded counterpart.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::activity::{CommentItem, PostItem};
use crate::profile::{ProfileRecord, UserIdentifier};

/// Outcome of one listing fetch.
///
/// Lets callers tell an account with no posts apart from a posts request
/// that failed; both leave the item list empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CollectionStatus {
    Fetched,
    Failed { reason: String },
}

impl CollectionStatus {
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, CollectionStatus::Failed { .. })
    }
}

/// Everything collected for one account in a single run.
///
/// Fields are public for serde and for callers that post-process a result.
/// Use [`AggregateResult::assemble`] to construct one: it derives the
/// community set and totals from the item lists, and code that edits
/// `posts` or `comments` afterwards is responsible for keeping them in step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    #[serde(flatten)]
    pub profile: ProfileRecord,
    pub posts: Vec<PostItem>,
    pub comments: Vec<CommentItem>,
    pub posts_status: CollectionStatus,
    pub comments_status: CollectionStatus,
    pub communities: BTreeSet<String>,
    pub total_posts: usize,
    pub total_comments: usize,
    pub total_communities: usize,
    pub collected_at: DateTime<Utc>,
}

impl AggregateResult {
    #[must_use]
    pub fn assemble(
        profile: ProfileRecord,
        posts: Vec<PostItem>,
        posts_status: CollectionStatus,
        comments: Vec<CommentItem>,
        comments_status: CollectionStatus,
    ) -> Self {
        let communities = distinct_communities(&posts, &comments);
        Self {
            profile,
            total_posts: posts.len(),
            total_comments: comments.len(),
            total_communities: communities.len(),
            posts,
            comments,
            posts_status,
            comments_status,
            communities,
            collected_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn identifier(&self) -> &UserIdentifier {
        &self.profile.identifier
    }
}

/// Union of the non-empty community names across posts and comments.
#[must_use]
pub fn distinct_communities(posts: &[PostItem], comments: &[CommentItem]) -> BTreeSet<String> {
    posts
        .iter()
        .map(|p| p.community.as_str())
        .chain(comments.iter().map(|c| c.community.as_str()))
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Result shape when the profile page itself could not be fetched.
///
/// Carries no karma, posts, or comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegradedResult {
    pub identifier: UserIdentifier,
    pub error: String,
}

/// What a collection run returns once the identifier is known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserReport {
    Complete(Box<AggregateResult>),
    Degraded(DegradedResult),
}

impl UserReport {
    #[must_use]
    pub fn identifier(&self) -> &UserIdentifier {
        match self {
            UserReport::Complete(result) => result.identifier(),
            UserReport::Degraded(degraded) => &degraded.identifier,
        }
    }

    #[must_use]
    pub fn as_complete(&self) -> Option<&AggregateResult> {
        match self {
            UserReport::Complete(result) => Some(result.as_ref()),
            UserReport::Degraded(_) => None,
        }
    }

    #[must_use]
    pub fn is_degraded(&self) -> bool {
        matches!(self, UserReport::Degraded(_))
    }
}

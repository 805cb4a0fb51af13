//! Per-user listing payloads (`submitted.json`, `comments.json`).
//!
//! Both endpoints return the same envelope:
//!
//! ```text
//! { "kind": "Listing", "data": { "children": [ { "kind": "t3", "data": {...} }, ... ], "after": "t3_x" } }
//! ```
//!
//! Children are mapped field by field from raw JSON so a missing or
//! mistyped field falls back to its zero value instead of failing the page.

use serde::Deserialize;
use serde_json::Value;

use crate::error::ScraperError;
use uprofile_core::{CommentItem, PostItem};

/// The two listings fetched per user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    Posts,
    Comments,
}

impl CollectionKind {
    /// Path segment after `/user/<name>/`.
    #[must_use]
    pub fn endpoint(self) -> &'static str {
        match self {
            CollectionKind::Posts => "submitted.json",
            CollectionKind::Comments => "comments.json",
        }
    }
}

impl std::fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectionKind::Posts => write!(f, "posts"),
            CollectionKind::Comments => write!(f, "comments"),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ListingData {
    children: Vec<ListingChild>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ListingChild {
    data: Value,
}

/// An item type that can be read from one listing child's `data` object.
pub trait ListingItem: Sized {
    const KIND: CollectionKind;

    fn from_listing_data(data: &Value) -> Self;
}

impl ListingItem for PostItem {
    const KIND: CollectionKind = CollectionKind::Posts;

    fn from_listing_data(data: &Value) -> Self {
        PostItem {
            title: str_field(data, "title"),
            community: str_field(data, "subreddit"),
            score: i64_field(data, "score"),
            comment_count: u64_field(data, "num_comments"),
            created_utc: f64_field(data, "created_utc"),
            body: str_field(data, "selftext"),
            url: str_field(data, "url"),
            permalink: str_field(data, "permalink"),
        }
    }
}

impl ListingItem for CommentItem {
    const KIND: CollectionKind = CollectionKind::Comments;

    fn from_listing_data(data: &Value) -> Self {
        CommentItem {
            body: str_field(data, "body"),
            community: str_field(data, "subreddit"),
            score: i64_field(data, "score"),
            created_utc: f64_field(data, "created_utc"),
            permalink: str_field(data, "permalink"),
            parent_title: str_field(data, "link_title"),
        }
    }
}

/// Decodes a listing body and maps each child in payload order.
///
/// # Errors
///
/// Returns [`ScraperError::Deserialize`] if `body` is not JSON or the
/// envelope has the wrong type at `data` / `children`.
pub fn parse_listing<T: ListingItem>(body: &str) -> Result<Vec<T>, ScraperError> {
    let listing: Listing = serde_json::from_str(body).map_err(|e| ScraperError::Deserialize {
        context: format!("{} listing", T::KIND),
        source: e,
    })?;
    Ok(listing
        .data
        .children
        .iter()
        .map(|child| T::from_listing_data(&child.data))
        .collect())
}

fn str_field(data: &Value, key: &str) -> String {
    data.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

#[allow(clippy::cast_possible_truncation)]
fn i64_field(data: &Value, key: &str) -> i64 {
    data.get(key)
        .and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|f| f as i64)))
        .unwrap_or(0)
}

fn u64_field(data: &Value, key: &str) -> u64 {
    data.get(key).and_then(Value::as_u64).unwrap_or(0)
}

fn f64_field(data: &Value, key: &str) -> f64 {
    data.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}

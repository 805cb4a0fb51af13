//! Collects a user's public profile, posts, and comments.
//!
//! [`ProfileCollector::collect_user_data`] runs the whole pipeline: parse the
//! account name from a profile URL, read the profile page (embedded JSON
//! state first, rendered markup as fallback), pull one page each of posts
//! and comments, and merge the lot into a [`UserReport`].

pub mod client;
pub mod collector;
pub mod embedded;
pub mod error;
pub mod events;
pub mod identifier;
pub mod listing;
pub mod markup;
mod pacing;

pub use client::ProfileClient;
pub use collector::ProfileCollector;
pub use embedded::try_parse_embedded;
pub use error::ScraperError;
pub use events::{CollectionEvent, CollectionKind, DiagnosticSink, NullSink, TracingSink};
pub use identifier::extract_identifier;
pub use markup::parse_markup;
pub use uprofile_core::{
    AggregateResult, CollectionStatus, CommentItem, DegradedResult, Karma, PostItem,
    ProfileRecord, ProfileSource, UserIdentifier, UserReport,
};

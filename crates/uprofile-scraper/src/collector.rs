//! The end-to-end collection pipeline for one profile URL.

use crate::client::{ProfileClient, DEFAULT_COMMENTS_LIMIT, DEFAULT_POSTS_LIMIT};
use crate::embedded::try_parse_embedded;
use crate::error::ScraperError;
use crate::events::{CollectionEvent, CollectionKind, DiagnosticSink, TracingSink};
use crate::identifier::extract_identifier;
use crate::markup::parse_markup;
use uprofile_core::{
    AggregateResult, AppConfig, CollectionStatus, DegradedResult, ProfileRecord, UserIdentifier,
    UserReport,
};

/// Runs identifier extraction, the profile fetch, and both listing fetches
/// in that fixed order, then merges the outputs.
///
/// Each step runs once; nothing is retried and nothing runs in parallel.
pub struct ProfileCollector {
    client: ProfileClient,
    posts_limit: u32,
    comments_limit: u32,
    sink: Box<dyn DiagnosticSink>,
}

impl ProfileCollector {
    /// Wraps `client` with the default listing limits (50 posts, 100
    /// comments) and a [`TracingSink`].
    #[must_use]
    pub fn new(client: ProfileClient) -> Self {
        Self {
            client,
            posts_limit: DEFAULT_POSTS_LIMIT,
            comments_limit: DEFAULT_COMMENTS_LIMIT,
            sink: Box::new(TracingSink),
        }
    }

    /// Builds the client and limits from the `UPROFILE_*` settings.
    ///
    /// # Errors
    ///
    /// Returns the [`ProfileClient::from_config`] error if the client cannot
    /// be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, ScraperError> {
        Ok(Self::new(ProfileClient::from_config(config)?)
            .with_limits(config.posts_limit, config.comments_limit))
    }

    #[must_use]
    pub fn with_limits(mut self, posts_limit: u32, comments_limit: u32) -> Self {
        self.posts_limit = posts_limit;
        self.comments_limit = comments_limit;
        self
    }

    /// Routes diagnostic events to `sink` instead of `tracing`.
    #[must_use]
    pub fn with_sink(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Collects everything available for the account named in `profile_url`.
    ///
    /// A listing failure leaves that list empty with a
    /// [`CollectionStatus::Failed`] and does not stop the other listing.
    /// A profile page failure ends the run early with
    /// [`UserReport::Degraded`], which carries only the name and the error.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidProfileUrl`] if `profile_url` has no
    /// `/user/<name>` segment. No request is made in that case.
    pub async fn collect_user_data(&self, profile_url: &str) -> Result<UserReport, ScraperError> {
        let identifier = match extract_identifier(profile_url) {
            Ok(identifier) => identifier,
            Err(e) => {
                self.sink.emit(CollectionEvent::InvalidProfileUrl {
                    url: profile_url.to_owned(),
                });
                return Err(e);
            }
        };
        self.sink.emit(CollectionEvent::IdentifierExtracted {
            identifier: identifier.clone(),
        });

        let profile = match self.fetch_profile(&identifier).await {
            Ok(profile) => profile,
            Err(e) => {
                let error = e.to_string();
                self.sink.emit(CollectionEvent::ProfileFailed {
                    identifier: identifier.clone(),
                    error: error.clone(),
                });
                return Ok(UserReport::Degraded(DegradedResult { identifier, error }));
            }
        };

        let posts = self
            .client
            .fetch_posts(&identifier, self.posts_limit)
            .await;
        let (posts, posts_status) = self.settle(&identifier, CollectionKind::Posts, posts);

        let comments = self
            .client
            .fetch_comments(&identifier, self.comments_limit)
            .await;
        let (comments, comments_status) =
            self.settle(&identifier, CollectionKind::Comments, comments);

        Ok(UserReport::Complete(Box::new(AggregateResult::assemble(
            profile,
            posts,
            posts_status,
            comments,
            comments_status,
        ))))
    }

    /// Fetches the profile page and parses it, embedded state first and
    /// markup second. Parsing itself never fails.
    ///
    /// # Errors
    ///
    /// Returns the [`ProfileClient::fetch_profile_page`] error when the page
    /// cannot be fetched.
    pub async fn fetch_profile(
        &self,
        identifier: &UserIdentifier,
    ) -> Result<ProfileRecord, ScraperError> {
        let body = self.client.fetch_profile_page(identifier).await?;
        let record = try_parse_embedded(&body, identifier)
            .unwrap_or_else(|| parse_markup(&body, identifier));
        self.sink.emit(CollectionEvent::ProfileParsed {
            identifier: identifier.clone(),
            source: record.source,
        });
        Ok(record)
    }

    /// Turns one listing result into items plus a status, reporting both.
    fn settle<T>(
        &self,
        identifier: &UserIdentifier,
        kind: CollectionKind,
        result: Result<Vec<T>, ScraperError>,
    ) -> (Vec<T>, CollectionStatus) {
        let settled = match result {
            Ok(items) => {
                self.sink.emit(CollectionEvent::CollectionFetched {
                    identifier: identifier.clone(),
                    kind,
                    items: items.len(),
                });
                (items, CollectionStatus::Fetched)
            }
            Err(e) => {
                let reason = e.to_string();
                self.sink.emit(CollectionEvent::CollectionFailed {
                    identifier: identifier.clone(),
                    kind,
                    error: reason.clone(),
                });
                (Vec::new(), CollectionStatus::Failed { reason })
            }
        };

        let pause = self.client.pause();
        if !pause.is_zero() {
            self.sink.emit(CollectionEvent::Paused { kind, pause });
        }
        settled
    }
}

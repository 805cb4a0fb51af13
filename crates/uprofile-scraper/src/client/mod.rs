//! HTTP client for a user's profile page and per-user listings.

mod urls;

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::ScraperError;
use crate::listing::{parse_listing, ListingItem};
use crate::pacing::paced;
use uprofile_core::{AppConfig, CommentItem, PostItem, UserIdentifier};

/// Default `limit` for the posts listing.
pub const DEFAULT_POSTS_LIMIT: u32 = 50;
/// Default `limit` for the comments listing.
pub const DEFAULT_COMMENTS_LIMIT: u32 = 100;

/// Shared HTTP client for one collection run.
///
/// Every request carries the configured `User-Agent`. Listing fetches are
/// followed by a fixed pause (see [`ProfileClient::pause`]); the profile
/// page request is not.
pub struct ProfileClient {
    client: Client,
    base_url: Url,
    pause: Duration,
}

impl ProfileClient {
    /// Creates a client against `base_url` (e.g. `https://www.reddit.com`).
    ///
    /// `timeout_secs` must be non-zero; config loading rejects `0` before it
    /// gets here.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidBaseUrl`] if `base_url` is not an
    /// http(s) origin, or [`ScraperError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(
        base_url: &str,
        user_agent: &str,
        timeout_secs: u64,
        pause: Duration,
    ) -> Result<Self, ScraperError> {
        let base_url = urls::parse_base_url(base_url)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url,
            pause,
        })
    }

    /// Creates a client from the `UPROFILE_*` settings.
    ///
    /// # Errors
    ///
    /// Same as [`ProfileClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ScraperError> {
        Self::new(
            &config.base_url,
            &config.user_agent,
            config.request_timeout_secs,
            Duration::from_millis(config.request_pause_ms),
        )
    }

    /// Pause applied after every listing fetch.
    #[must_use]
    pub fn pause(&self) -> Duration {
        self.pause
    }

    /// Fetches the raw HTML of `/user/<name>`.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::NotFound`] on HTTP 404.
    /// - [`ScraperError::UnexpectedStatus`] on any other non-2xx status.
    /// - [`ScraperError::Http`] on network, TLS, or timeout failure.
    pub async fn fetch_profile_page(
        &self,
        identifier: &UserIdentifier,
    ) -> Result<String, ScraperError> {
        let url = self.profile_url(identifier)?;
        self.get_text(url, "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8")
            .await
    }

    /// Fetches up to `limit` of the user's posts, in listing order.
    ///
    /// Pauses for [`ProfileClient::pause`] afterwards, success or not.
    ///
    /// # Errors
    ///
    /// Any of the [`ProfileClient::fetch_profile_page`] errors, plus
    /// [`ScraperError::Deserialize`] if the body is not a listing.
    pub async fn fetch_posts(
        &self,
        identifier: &UserIdentifier,
        limit: u32,
    ) -> Result<Vec<PostItem>, ScraperError> {
        paced(self.pause, self.fetch_listing::<PostItem>(identifier, limit)).await
    }

    /// Fetches up to `limit` of the user's comments, in listing order.
    ///
    /// Pauses for [`ProfileClient::pause`] afterwards, success or not.
    ///
    /// # Errors
    ///
    /// Same as [`ProfileClient::fetch_posts`].
    pub async fn fetch_comments(
        &self,
        identifier: &UserIdentifier,
        limit: u32,
    ) -> Result<Vec<CommentItem>, ScraperError> {
        paced(
            self.pause,
            self.fetch_listing::<CommentItem>(identifier, limit),
        )
        .await
    }

    async fn fetch_listing<T: ListingItem>(
        &self,
        identifier: &UserIdentifier,
        limit: u32,
    ) -> Result<Vec<T>, ScraperError> {
        let url = self.listing_url(identifier, T::KIND.endpoint(), limit)?;
        let body = self.get_text(url, "application/json").await?;
        parse_listing::<T>(&body)
    }

    fn profile_url(&self, identifier: &UserIdentifier) -> Result<Url, ScraperError> {
        urls::user_url(&self.base_url, identifier, None)
    }

    fn listing_url(
        &self,
        identifier: &UserIdentifier,
        endpoint: &str,
        limit: u32,
    ) -> Result<Url, ScraperError> {
        let mut url = urls::user_url(&self.base_url, identifier, Some(endpoint))?;
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string());
        Ok(url)
    }

    /// Sends a GET, maps non-2xx statuses to typed errors, and returns the body.
    async fn get_text(&self, url: Url, accept: &str) -> Result<String, ScraperError> {
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, accept)
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .send()
            .await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ScraperError::NotFound {
                url: url.to_string(),
            });
        }

        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;

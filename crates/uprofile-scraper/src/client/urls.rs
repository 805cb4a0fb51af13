//! Request URL construction for the profile client.

use reqwest::Url;

use crate::error::ScraperError;
use uprofile_core::UserIdentifier;

/// Parses `base_url` as an http(s) origin, normalised to end with one `/`.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidBaseUrl`] if the URL does not parse, is not
/// http(s), or cannot carry path segments.
pub(super) fn parse_base_url(base_url: &str) -> Result<Url, ScraperError> {
    let invalid = |reason: String| ScraperError::InvalidBaseUrl {
        base_url: base_url.to_owned(),
        reason,
    };

    let normalised = format!("{}/", base_url.trim_end_matches('/'));
    let url = Url::parse(&normalised).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme \"{}\"", url.scheme())));
    }
    if url.cannot_be_a_base() {
        return Err(invalid("URL cannot carry a path".to_owned()));
    }
    Ok(url)
}

/// Builds `<base>/user/<name>[/<tail>]`, percent-encoding the name.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidBaseUrl`] if `base` cannot carry path
/// segments.
pub(super) fn user_url(
    base: &Url,
    identifier: &UserIdentifier,
    tail: Option<&str>,
) -> Result<Url, ScraperError> {
    let mut url = base.clone();
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|()| ScraperError::InvalidBaseUrl {
                base_url: base.to_string(),
                reason: "URL cannot carry a path".to_owned(),
            })?;
        segments.pop_if_empty().push("user").push(identifier.as_str());
        if let Some(tail) = tail {
            segments.push(tail);
        }
    }
    Ok(url)
}

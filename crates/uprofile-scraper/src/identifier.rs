//! Account-name extraction from profile URLs.

use std::sync::LazyLock;

use percent_encoding::percent_decode_str;
use regex::Regex;

use crate::error::ScraperError;
use uprofile_core::UserIdentifier;

static USER_SEGMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/user/([^/]+)").expect("valid regex"));

/// Returns the `<name>` from the first `/user/<name>` segment in `profile_url`.
///
/// Anything after the name's trailing slash is ignored, so
/// `https://www.reddit.com/user/alice/comments/` yields `alice`.
///
/// The name is percent-decoded (`a%5Fb` yields `a_b`) because request paths
/// encode it again. A name that does not decode to UTF-8 is kept as written.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidProfileUrl`] when no such segment exists.
pub fn extract_identifier(profile_url: &str) -> Result<UserIdentifier, ScraperError> {
    USER_SEGMENT_RE
        .captures(profile_url)
        .and_then(|cap| cap.get(1))
        .map(|m| {
            let raw = m.as_str();
            match percent_decode_str(raw).decode_utf8() {
                Ok(decoded) => UserIdentifier::new(decoded),
                Err(_) => UserIdentifier::new(raw),
            }
        })
        .ok_or_else(|| ScraperError::InvalidProfileUrl {
            url: profile_url.to_owned(),
        })
}

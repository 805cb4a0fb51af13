//! Profile extraction from the JSON state the page assigns to `window.__r`.
//!
//! Newer page renders ship the client-side store inline as
//! `window.__r = {...};`. The user lives at `users.models[<name>]`:
//!
//! ```text
//! { "users": { "models": { "alice": {
//!     "linkKarma": 10, "commentKarma": 3, "createdUtc": 1000,
//!     "subreddit": { "publicDescription": "hi" } } } } }
//! ```
//!
//! Every lookup below is optional; any miss means "not this format" and the
//! caller falls back to [`crate::markup`].

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use uprofile_core::{Karma, ProfileRecord, ProfileSource, UserIdentifier};

static STATE_ASSIGNMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"window\.__r\s*=\s*").expect("valid regex"));

/// Reads the profile for `identifier` from the embedded store, if present.
///
/// Returns `None` when the assignment is missing, the literal is not valid
/// JSON, or any level of `users.models[identifier]` is absent.
#[must_use]
pub fn try_parse_embedded(body: &str, identifier: &UserIdentifier) -> Option<ProfileRecord> {
    let state = extract_embedded_state(body)?;
    profile_from_state(&state, identifier)
}

/// Finds `window.__r = {...};` and decodes the object literal.
///
/// The literal must be followed by `;` to count as a complete statement.
pub(crate) fn extract_embedded_state(body: &str) -> Option<Value> {
    for m in STATE_ASSIGNMENT_RE.find_iter(body) {
        let rest = &body[m.end()..];
        let Some(literal) = extract_balanced_object(rest) else {
            continue;
        };
        if !rest[literal.len()..].trim_start().starts_with(';') {
            continue;
        }
        if let Ok(state @ Value::Object(_)) = serde_json::from_str::<Value>(literal) {
            return Some(state);
        }
    }
    None
}

/// Returns the shortest prefix of `s` that is a brace-balanced `{...}`.
///
/// Tracks string literals and escapes so braces inside strings do not count.
/// Returns `None` if `s` does not start with `{` or the object never closes.
pub(crate) fn extract_balanced_object(s: &str) -> Option<&str> {
    if !s.starts_with('{') {
        return None;
    }
    let mut depth: i32 = 0;
    let mut in_string = false;
    let mut escape = false;
    for (i, c) in s.char_indices() {
        if escape {
            escape = false;
            continue;
        }
        if in_string {
            match c {
                '\\' => escape = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' | '[' => depth += 1,
            ']' => depth -= 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&s[..=i]);
                }
            }
            _ => {}
        }
    }
    None
}

fn profile_from_state(state: &Value, identifier: &UserIdentifier) -> Option<ProfileRecord> {
    let user = state
        .get("users")?
        .get("models")?
        .get(identifier.as_str())?
        .as_object()?;

    let karma = Karma {
        post: user.get("linkKarma").and_then(Value::as_u64).unwrap_or(0),
        comment: user.get("commentKarma").and_then(Value::as_u64).unwrap_or(0),
        total: None,
    };

    let description = user
        .get("subreddit")
        .and_then(|s| s.get("publicDescription"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    Some(ProfileRecord {
        identifier: identifier.clone(),
        karma,
        account_created_utc: user.get("createdUtc").and_then(Value::as_f64),
        description,
        source: ProfileSource::Embedded,
    })
}

#[cfg(test)]
#[path = "embedded_test.rs"]
mod tests;

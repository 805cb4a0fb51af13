//! Best-effort profile extraction from rendered HTML.
//!
//! Used only when the page carries no embedded store. The old layout shows
//! a single figure like `1,234 karma` and nothing else of use, so this
//! yields at most a combined karma total.

use std::sync::LazyLock;

use regex::Regex;

use uprofile_core::{ProfileRecord, ProfileSource, UserIdentifier};

static NON_TEXT_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(script|style|noscript)\b[^>]*>.*?</(script|style|noscript)\s*>")
        .expect("valid regex")
});
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("valid regex"));
static KARMA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d[\d,]*)\s+karma\b").expect("valid regex"));

/// Builds a profile record from page markup. Never fails.
///
/// Only `karma.total` is ever filled, from the first text node reading
/// `<number> karma`. With no match every field stays at its default.
#[must_use]
pub fn parse_markup(body: &str, identifier: &UserIdentifier) -> ProfileRecord {
    let mut record = ProfileRecord::empty(identifier.clone(), ProfileSource::Markup);
    record.karma.total = text_nodes(body)
        .iter()
        .find_map(|node| karma_in_text(node));
    record
}

/// Visible text runs between tags, whitespace-trimmed, empty runs dropped.
fn text_nodes(html: &str) -> Vec<String> {
    let visible = NON_TEXT_BLOCK_RE.replace_all(html, "<>");
    TAG_RE
        .split(&visible)
        .map(decode_spaces)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn decode_spaces(text: &str) -> String {
    text.replace("&nbsp;", " ").replace("&#160;", " ")
}

fn karma_in_text(text: &str) -> Option<u64> {
    KARMA_RE.captures_iter(text).find_map(|cap| {
        let digits: String = cap.get(1)?.as_str().chars().filter(char::is_ascii_digit).collect();
        digits.parse::<u64>().ok()
    })
}

use serde::{Deserialize, Serialize};

/// Account name on the platform, as taken from a `/user/<name>` URL path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserIdentifier(String);

impl UserIdentifier {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Karma figures for an account.
///
/// The embedded-payload parser fills `post` and `comment`. The markup
/// parser can only see a single combined figure and stores it in `total`,
/// leaving the per-kind fields at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Karma {
    pub post: u64,
    pub comment: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

/// Which page representation a [`ProfileRecord`] was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileSource {
    /// JSON state assigned to a script variable in the page.
    Embedded,
    /// Rendered HTML text.
    Markup,
}

/// Profile-level facts about one account.
///
/// Missing data is represented by defaults (zero karma, no creation time,
/// empty description), never by an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub identifier: UserIdentifier,
    pub karma: Karma,
    /// Account creation time in epoch seconds.
    pub account_created_utc: Option<f64>,
    pub description: String,
    pub source: ProfileSource,
}

impl ProfileRecord {
    /// A record with every field at its default, attributed to `source`.
    #[must_use]
    pub fn empty(identifier: UserIdentifier, source: ProfileSource) -> Self {
        Self {
            identifier,
            karma: Karma::default(),
            account_created_utc: None,
            description: String::new(),
            source,
        }
    }
}

//! Channel identifiers and normalized upload records.

use chrono::{DateTime, Utc};

const CHANNEL_ID_PREFIX: &str = "UC";
const CHANNEL_ID_BODY_LEN: usize = 22;

/// Canonical channel identifier (`UC` followed by 22 `[0-9A-Za-z_-]` characters).
///
/// IDs returned by the upstream API are trusted as-is; [`ChannelId::parse`]
/// is for user input, where the shape must be checked before skipping lookups.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChannelId(String);

impl ChannelId {
    /// Wraps an ID reported by the upstream API.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns `Some` only when `s` has the canonical shape.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::is_canonical(s).then(|| Self(s.to_owned()))
    }

    #[must_use]
    pub fn is_canonical(s: &str) -> bool {
        s.strip_prefix(CHANNEL_ID_PREFIX).is_some_and(|body| {
            body.len() == CHANNEL_ID_BODY_LEN
                && body
                    .bytes()
                    .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ChannelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single upload with the engagement fields the dashboard reports on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoRecord {
    pub id: String,
    pub title: String,
    pub published_at: Option<DateTime<Utc>>,
    pub duration_seconds: u64,
    pub likes: u64,
    pub comments: u64,
    pub thumbnail: Option<String>,
}

impl VideoRecord {
    /// Canonical watch URL. Always embeds [`VideoRecord::id`] verbatim.
    #[must_use]
    pub fn url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.id)
    }

    /// Short-form iff the duration is at or below `threshold_secs`.
    #[must_use]
    pub fn is_short(&self, threshold_secs: u64) -> bool {
        self.duration_seconds <= threshold_secs
    }
}

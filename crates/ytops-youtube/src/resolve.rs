//! Channel identifier resolution.
//!
//! User input (a raw channel ID, an `@handle`, a legacy username, or a
//! channel URL in any of its shapes) is first classified into a [`Lookup`]
//! by an ordered list of pure strategies, then executed against the API.
//! Only execution touches the network, and a canonical ID never does.
//!
//! Strategy order, first match wins:
//!
//! | Input                           | Lookup                        |
//! |---------------------------------|-------------------------------|
//! | `UC` + 22 chars                 | used as-is                    |
//! | URL with `/channel/<ID>`        | used as-is                    |
//! | URL with `/@<handle>`           | handle lookup                 |
//! | URL with `/user/<name>`         | username lookup, then search  |
//! | URL with `/c/<name>`            | search                        |
//! | any other URL                   | search for last path segment  |
//! | `@<handle>`                     | handle lookup                 |
//! | anything else                   | username lookup, then search  |

use std::sync::LazyLock;

use regex::Regex;
use reqwest::Url;
use ytops_core::ChannelId;

use crate::client::YoutubeClient;
use crate::error::YoutubeError;

static CHANNEL_PATH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/channel/(UC[0-9A-Za-z_-]{22})(?:/|$)").expect("valid channel path regex")
});
static HANDLE_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/@([A-Za-z0-9_.-]+)").expect("valid handle path regex"));
static USER_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/user/([A-Za-z0-9]+)").expect("valid user path regex"));
static CUSTOM_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/c/([A-Za-z0-9_.-]+)").expect("valid custom path regex"));

/// How a piece of user input should be turned into a channel ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// Already canonical; no request needed.
    Direct(ChannelId),
    /// `channels?forHandle=`; fails if unknown.
    Handle(String),
    /// `channels?forUsername=`; falls back to [`Lookup::Search`] if unknown.
    Username(String),
    /// `search?type=channel`, top hit.
    Search(String),
}

type Strategy = fn(&str) -> Option<Lookup>;

const STRATEGIES: &[Strategy] = &[
    canonical_id,
    channel_url,
    handle_url,
    user_url,
    custom_url,
    url_tail,
    bare_handle,
];

/// Classifies user input without touching the network.
///
/// # Errors
///
/// Returns [`YoutubeError::Resolution`] for blank input and for URLs that
/// carry no path to resolve.
pub fn classify(input: &str) -> Result<Lookup, YoutubeError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(YoutubeError::Resolution("empty input".to_owned()));
    }

    if let Some(lookup) = STRATEGIES.iter().find_map(|strategy| strategy(s)) {
        return Ok(lookup);
    }

    if is_absolute_url(s) {
        return Err(YoutubeError::Resolution(format!(
            "URL has no channel path: {s}"
        )));
    }
    Ok(Lookup::Username(s.to_owned()))
}

impl YoutubeClient {
    /// Resolves arbitrary user input to a canonical channel ID.
    ///
    /// # Errors
    ///
    /// - [`YoutubeError::Resolution`] if the input is blank, the handle is
    ///   unknown, or search finds nothing.
    /// - [`YoutubeError::Api`] / [`YoutubeError::Http`] /
    ///   [`YoutubeError::Deserialize`] from any lookup request.
    pub async fn resolve_channel_id(&self, input: &str) -> Result<ChannelId, YoutubeError> {
        let lookup = classify(input)?;
        tracing::debug!(?lookup, "classified channel input");

        let id = match lookup {
            Lookup::Direct(id) => id,
            Lookup::Handle(handle) => self.resolve_handle(&handle).await?,
            Lookup::Username(name) => self.resolve_username(&name).await?,
            Lookup::Search(query) => self.resolve_search(&query).await?,
        };

        tracing::info!(channel_id = %id, "resolved channel");
        Ok(id)
    }

    async fn resolve_handle(&self, handle: &str) -> Result<ChannelId, YoutubeError> {
        self.channel_id_for_handle(handle)
            .await?
            .ok_or_else(|| YoutubeError::Resolution(format!("handle not found: {handle}")))
    }

    async fn resolve_username(&self, username: &str) -> Result<ChannelId, YoutubeError> {
        if let Some(id) = self.channel_id_for_username(username).await? {
            return Ok(id);
        }
        tracing::debug!(username, "legacy username unknown, falling back to search");
        self.resolve_search(username).await
    }

    async fn resolve_search(&self, query: &str) -> Result<ChannelId, YoutubeError> {
        self.search_channel_id(query)
            .await?
            .ok_or_else(|| YoutubeError::Resolution(format!("no channel found for query: {query}")))
    }
}

fn is_absolute_url(s: &str) -> bool {
    let lower = s.get(..8).unwrap_or(s).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Path of an absolute `http(s)` URL; `None` for anything else.
fn url_path(s: &str) -> Option<String> {
    if !is_absolute_url(s) {
        return None;
    }
    Url::parse(s).ok().map(|url| url.path().to_owned())
}

fn first_capture(re: &Regex, haystack: &str) -> Option<String> {
    re.captures(haystack)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_owned())
}

fn canonical_id(s: &str) -> Option<Lookup> {
    ChannelId::parse(s).map(Lookup::Direct)
}

fn channel_url(s: &str) -> Option<Lookup> {
    let path = url_path(s)?;
    first_capture(&CHANNEL_PATH_RE, &path).map(|id| Lookup::Direct(ChannelId::new(id)))
}

fn handle_url(s: &str) -> Option<Lookup> {
    let path = url_path(s)?;
    first_capture(&HANDLE_PATH_RE, &path).map(|handle| Lookup::Handle(format!("@{handle}")))
}

fn user_url(s: &str) -> Option<Lookup> {
    let path = url_path(s)?;
    first_capture(&USER_PATH_RE, &path).map(Lookup::Username)
}

fn custom_url(s: &str) -> Option<Lookup> {
    let path = url_path(s)?;
    first_capture(&CUSTOM_PATH_RE, &path).map(Lookup::Search)
}

fn url_tail(s: &str) -> Option<Lookup> {
    let path = url_path(s)?;
    path.split('/')
        .rfind(|segment| !segment.is_empty())
        .map(|segment| Lookup::Search(segment.to_owned()))
}

fn bare_handle(s: &str) -> Option<Lookup> {
    s.starts_with('@').then(|| Lookup::Handle(s.to_owned()))
}

//! HTTP client for the `YouTube` Data API v3.
//!
//! Wraps `reqwest` with API-key management, an explicit per-request timeout,
//! and typed response deserialization. Every non-2xx answer is surfaced as
//! [`YoutubeError::Api`] carrying the status and body; nothing is retried.

mod channels;
mod uploads;

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use ytops_core::AppConfig;

use crate::error::YoutubeError;

pub use uploads::{MAX_BATCH_SIZE, MAX_PAGES, MAX_PAGE_SIZE};

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3/";
const DEFAULT_USER_AGENT: &str = "ytops/0.1 (channel-analytics)";

/// Client for the `YouTube` Data API.
///
/// Use [`YoutubeClient::new`] for production or
/// [`YoutubeClient::with_base_url`] to point at a mock server in tests.
pub struct YoutubeClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl YoutubeClient {
    /// Creates a client pointed at the production Data API.
    ///
    /// # Errors
    ///
    /// Returns [`YoutubeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, YoutubeError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_USER_AGENT, DEFAULT_BASE_URL)
    }

    /// Creates a client from loaded application config.
    ///
    /// # Errors
    ///
    /// Same as [`YoutubeClient::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, YoutubeError> {
        Self::with_base_url(
            &config.youtube_api_key,
            config.request_timeout_secs,
            &config.user_agent,
            &config.api_base_url,
        )
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`YoutubeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`YoutubeError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, YoutubeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, so `Url::join` appends the endpoint
        // instead of replacing the last path segment (`/youtube/v3`).
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| YoutubeError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(YoutubeError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: "URL cannot be used as a base".to_owned(),
            });
        }

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url: parsed,
        })
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Builds the request URL for `endpoint` with percent-encoded query
    /// parameters. The API key is always the first parameter.
    fn build_url(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Url, YoutubeError> {
        let mut url = self
            .base_url
            .join(endpoint)
            .map_err(|e| YoutubeError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: format!("cannot append endpoint {endpoint}: {e}"),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("key", &self.api_key);
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    /// Sends a GET request, asserts a 2xx status, and deserializes the body.
    ///
    /// URLs are stripped from transport errors because they carry the key.
    ///
    /// # Errors
    ///
    /// - [`YoutubeError::Api`] on a non-2xx status.
    /// - [`YoutubeError::Http`] on network failure or timeout.
    /// - [`YoutubeError::Deserialize`] if the body does not match `T`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        params: &[(&str, &str)],
    ) -> Result<T, YoutubeError> {
        let url = self.build_url(endpoint, params)?;
        tracing::debug!(endpoint, ?params, "data api request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(endpoint, status = status.as_u16(), "data api request failed");
            return Err(YoutubeError::Api {
                endpoint,
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.map_err(reqwest::Error::without_url)?;
        serde_json::from_str(&body).map_err(|e| YoutubeError::Deserialize {
            context: format!("{endpoint} response"),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;

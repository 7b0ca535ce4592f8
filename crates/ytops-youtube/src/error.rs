use thiserror::Error;

/// Errors returned by the Data API client, resolver, and fetch pipeline.
#[derive(Debug, Error)]
pub enum YoutubeError {
    /// No channel could be determined from the user's input.
    #[error("could not resolve channel: {0}")]
    Resolution(String),

    /// The channel ID does not exist, or the credentials cannot see it.
    #[error("channel not found or API key/channel ID invalid: {channel_id}")]
    ChannelNotFound { channel_id: String },

    /// The API answered with a non-2xx status.
    #[error("{endpoint} request failed with HTTP {status}: {body}")]
    Api {
        endpoint: &'static str,
        status: u16,
        body: String,
    },

    /// A duration or timestamp in an otherwise well-formed response could
    /// not be decoded.
    #[error("cannot decode {field} {value:?} for video {video_id}")]
    Decode {
        video_id: String,
        field: &'static str,
        value: String,
    },

    /// Network, TLS, or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("pagination limit reached for playlist {playlist_id}: exceeded {max_pages} pages")]
    PaginationLimit {
        playlist_id: String,
        max_pages: usize,
    },

    #[error("invalid API base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

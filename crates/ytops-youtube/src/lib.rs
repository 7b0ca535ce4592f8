//! `YouTube` Data API v3 client for channel analytics.
//!
//! Resolves free-form channel input to a canonical ID, walks the uploads
//! playlist, and normalizes video details into [`ytops_core::VideoRecord`]s.

pub mod cache;
pub mod client;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod resolve;
pub mod types;

pub use cache::{CacheKey, CachedVideos, NoCache, TtlCache, VideoCache};
pub use client::YoutubeClient;
pub use error::YoutubeError;
pub use normalize::{normalize_video, parse_iso8601_duration, parse_published_at};
pub use resolve::{classify, Lookup};

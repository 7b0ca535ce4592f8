//! Expiring read-through cache for fetched upload lists.
//!
//! The cache is injected rather than global: callers pass a `&dyn VideoCache`
//! to [`YoutubeClient::load_channel_videos`](crate::YoutubeClient::load_channel_videos)
//! and can swap in [`NoCache`] to disable it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use sha2::{Digest, Sha256};
use ytops_core::{AppConfig, ChannelId, VideoRecord};

/// Shared, immutable upload list as stored in and returned from a cache.
pub type CachedVideos = Arc<Vec<VideoRecord>>;

/// Identity of one fetch: credential, channel, and item cap.
///
/// The credential is kept only as a SHA-256 digest.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    credential_digest: [u8; 32],
    channel_id: ChannelId,
    max_items: usize,
}

impl CacheKey {
    #[must_use]
    pub fn new(api_key: &str, channel_id: &ChannelId, max_items: usize) -> Self {
        Self {
            credential_digest: Sha256::digest(api_key.as_bytes()).into(),
            channel_id: channel_id.clone(),
            max_items,
        }
    }

    #[must_use]
    pub fn channel_id(&self) -> &ChannelId {
        &self.channel_id
    }

    #[must_use]
    pub fn max_items(&self) -> usize {
        self.max_items
    }
}

pub trait VideoCache: Send + Sync {
    /// Returns the cached list for `key` if present and not expired.
    fn get(&self, key: &CacheKey) -> Option<CachedVideos>;

    /// Stores `videos` under `key`, replacing any previous entry.
    fn put(&self, key: CacheKey, videos: CachedVideos);
}

/// Cache that never stores anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCache;

impl VideoCache for NoCache {
    fn get(&self, _key: &CacheKey) -> Option<CachedVideos> {
        None
    }

    fn put(&self, _key: CacheKey, _videos: CachedVideos) {}
}

/// In-memory cache where each entry expires `ttl` after insertion.
#[derive(Debug)]
pub struct TtlCache {
    ttl: Duration,
    entries: Mutex<HashMap<CacheKey, (Instant, CachedVideos)>>,
}

impl TtlCache {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Cache with the TTL from `YTOPS_CACHE_TTL_SECS`.
    ///
    /// Entries only outlive a single fetch when the same cache is reused, so
    /// this is for long-lived callers; a one-shot process gains nothing.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(Duration::from_secs(config.cache_ttl_secs))
    }

    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Number of live (unexpired) entries.
    #[must_use]
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.lock()
            .values()
            .filter(|(inserted, _)| !self.is_expired(*inserted, now))
            .count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_expired(&self, inserted: Instant, now: Instant) -> bool {
        now.saturating_duration_since(inserted) >= self.ttl
    }

    // A panic while holding the lock cannot leave the map half-written.
    fn lock(&self) -> MutexGuard<'_, HashMap<CacheKey, (Instant, CachedVideos)>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl VideoCache for TtlCache {
    fn get(&self, key: &CacheKey) -> Option<CachedVideos> {
        let now = Instant::now();
        let mut entries = self.lock();
        match entries.get(key) {
            Some((inserted, videos)) if !self.is_expired(*inserted, now) => {
                Some(Arc::clone(videos))
            }
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    fn put(&self, key: CacheKey, videos: CachedVideos) {
        let now = Instant::now();
        let mut entries = self.lock();
        entries.retain(|_, (inserted, _)| !self.is_expired(*inserted, now));
        entries.insert(key, (now, videos));
    }
}

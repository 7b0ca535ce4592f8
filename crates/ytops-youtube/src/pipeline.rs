//! Channel-to-records pipeline: uploads playlist, ID pagination, batched
//! details, normalization, and ordering.

use std::sync::Arc;

use ytops_core::{ChannelId, VideoRecord};

use crate::cache::{CacheKey, CachedVideos, VideoCache};
use crate::client::YoutubeClient;
use crate::error::YoutubeError;

impl YoutubeClient {
    /// Fetches up to `max_items` of the channel's most recent uploads as
    /// normalized records, newest first. Undated records sort last.
    ///
    /// Requests run strictly in sequence:
    /// 1. one `channels` call for the uploads playlist
    /// 2. `ceil(max_items / 50)` `playlistItems` pages at most
    /// 3. one `videos` call per 50 collected IDs
    ///
    /// # Errors
    ///
    /// Any failing stage aborts the whole fetch; no partial list is returned.
    /// See [`YoutubeClient::uploads_playlist_id`],
    /// [`YoutubeClient::list_upload_video_ids`] and
    /// [`YoutubeClient::video_details`].
    pub async fn fetch_channel_videos(
        &self,
        channel_id: &ChannelId,
        max_items: usize,
    ) -> Result<Vec<VideoRecord>, YoutubeError> {
        let playlist_id = self.uploads_playlist_id(channel_id).await?;
        if max_items == 0 {
            return Ok(Vec::new());
        }

        let ids = self.list_upload_video_ids(&playlist_id, max_items).await?;
        let mut records = self.video_details(&ids).await?;
        sort_newest_first(&mut records);

        tracing::info!(
            channel_id = %channel_id,
            playlist_id,
            ids = ids.len(),
            records = records.len(),
            "fetched channel uploads"
        );
        Ok(records)
    }

    /// [`YoutubeClient::fetch_channel_videos`] behind a read-through cache.
    ///
    /// Hits skip the network entirely. Failed fetches are not cached.
    ///
    /// # Errors
    ///
    /// Same as [`YoutubeClient::fetch_channel_videos`].
    pub async fn load_channel_videos(
        &self,
        cache: &dyn VideoCache,
        channel_id: &ChannelId,
        max_items: usize,
    ) -> Result<CachedVideos, YoutubeError> {
        let key = CacheKey::new(self.api_key(), channel_id, max_items);
        if let Some(hit) = cache.get(&key) {
            tracing::debug!(
                channel_id = %key.channel_id(),
                max_items = key.max_items(),
                "upload cache hit"
            );
            return Ok(hit);
        }

        let videos = Arc::new(self.fetch_channel_videos(channel_id, max_items).await?);
        cache.put(key, Arc::clone(&videos));
        Ok(videos)
    }
}

/// Stable sort by `published_at` descending; `None` compares lowest so
/// undated records end up last.
fn sort_newest_first(records: &mut [VideoRecord]) {
    records.sort_by(|a, b| b.published_at.cmp(&a.published_at));
}

//! Uploads playlist pagination and batched video-detail lookups.

use ytops_core::VideoRecord;

use crate::error::YoutubeError;
use crate::normalize::normalize_video;
use crate::types::{ListResponse, PlaylistItem, VideoItem};

use super::YoutubeClient;

/// Largest `maxResults` the `playlistItems` endpoint accepts.
pub const MAX_PAGE_SIZE: usize = 50;

/// Largest number of IDs the `videos` endpoint accepts per call.
pub const MAX_BATCH_SIZE: usize = 50;

/// Page budget for a single playlist walk. Guards against a cursor that
/// keeps returning empty pages.
pub const MAX_PAGES: usize = 1_000;

impl YoutubeClient {
    /// Collects up to `max_items` video IDs from an uploads playlist, newest
    /// first.
    ///
    /// Each page asks for `min(50, remaining)` items and the walk stops as
    /// soon as `max_items` IDs are in hand or the API stops returning a
    /// `nextPageToken`. `max_items == 0` issues no request.
    ///
    /// **All-or-nothing**: any failing page discards the IDs collected so far.
    ///
    /// # Errors
    ///
    /// - [`YoutubeError::Api`] / [`YoutubeError::Http`] /
    ///   [`YoutubeError::Deserialize`] from any page request.
    /// - [`YoutubeError::PaginationLimit`] after [`MAX_PAGES`] pages.
    pub async fn list_upload_video_ids(
        &self,
        playlist_id: &str,
        max_items: usize,
    ) -> Result<Vec<String>, YoutubeError> {
        let mut ids: Vec<String> = Vec::with_capacity(max_items.min(MAX_PAGE_SIZE * 20));
        let mut page_token: Option<String> = None;
        let mut page_count = 0usize;

        while ids.len() < max_items {
            page_count += 1;
            if page_count > MAX_PAGES {
                return Err(YoutubeError::PaginationLimit {
                    playlist_id: playlist_id.to_owned(),
                    max_pages: MAX_PAGES,
                });
            }

            let page_size = (max_items - ids.len()).min(MAX_PAGE_SIZE).to_string();
            let mut params = vec![
                ("part", "contentDetails"),
                ("playlistId", playlist_id),
                ("maxResults", page_size.as_str()),
            ];
            if let Some(token) = page_token.as_deref() {
                params.push(("pageToken", token));
            }

            let page: ListResponse<PlaylistItem> = self.get_json("playlistItems", &params).await?;
            let received = page.items.len();
            ids.extend(page.items.into_iter().map(|it| it.content_details.video_id));
            tracing::debug!(
                playlist_id,
                page = page_count,
                received,
                collected = ids.len(),
                "fetched uploads page"
            );

            page_token = page.next_page_token;
            if page_token.is_none() {
                break;
            }
        }

        ids.truncate(max_items);
        Ok(ids)
    }

    /// Fetches snippet, duration, and statistics for `video_ids`, issuing one
    /// request per batch of at most [`MAX_BATCH_SIZE`] IDs.
    ///
    /// IDs the API no longer knows about (deleted or private uploads) are
    /// silently absent from the result.
    ///
    /// # Errors
    ///
    /// - [`YoutubeError::Api`] / [`YoutubeError::Http`] /
    ///   [`YoutubeError::Deserialize`] from any batch request.
    /// - [`YoutubeError::Decode`] if any item has a malformed duration or
    ///   publish timestamp.
    pub async fn video_details(
        &self,
        video_ids: &[String],
    ) -> Result<Vec<VideoRecord>, YoutubeError> {
        let mut records = Vec::with_capacity(video_ids.len());

        for batch in video_ids.chunks(MAX_BATCH_SIZE) {
            let joined = batch.join(",");
            let page: ListResponse<VideoItem> = self
                .get_json(
                    "videos",
                    &[
                        ("part", "snippet,contentDetails,statistics"),
                        ("id", joined.as_str()),
                    ],
                )
                .await?;

            tracing::debug!(
                requested = batch.len(),
                received = page.items.len(),
                "fetched video details batch"
            );

            for item in page.items {
                records.push(normalize_video(item)?);
            }
        }

        Ok(records)
    }
}

//! `channels` and `search` endpoints.

use ytops_core::ChannelId;

use crate::error::YoutubeError;
use crate::types::{ChannelItem, ListResponse, SearchItem};

use super::YoutubeClient;

impl YoutubeClient {
    /// Looks up a channel by `@handle`.
    ///
    /// Returns `Ok(None)` when the API reports no matching channel.
    ///
    /// # Errors
    ///
    /// - [`YoutubeError::Api`] on a non-2xx status.
    /// - [`YoutubeError::Http`] on network failure.
    /// - [`YoutubeError::Deserialize`] if the response shape is unexpected.
    pub async fn channel_id_for_handle(
        &self,
        handle: &str,
    ) -> Result<Option<ChannelId>, YoutubeError> {
        let page: ListResponse<ChannelItem> = self
            .get_json("channels", &[("part", "id"), ("forHandle", handle)])
            .await?;
        Ok(page.items.into_iter().next().map(|c| ChannelId::new(c.id)))
    }

    /// Looks up a channel by legacy username.
    ///
    /// # Errors
    ///
    /// Same as [`YoutubeClient::channel_id_for_handle`].
    pub async fn channel_id_for_username(
        &self,
        username: &str,
    ) -> Result<Option<ChannelId>, YoutubeError> {
        let page: ListResponse<ChannelItem> = self
            .get_json("channels", &[("part", "id"), ("forUsername", username)])
            .await?;
        Ok(page.items.into_iter().next().map(|c| ChannelId::new(c.id)))
    }

    /// Returns the top-ranked channel for a free-text query.
    ///
    /// Best effort: the top hit is not guaranteed to be the channel the
    /// user meant.
    ///
    /// # Errors
    ///
    /// Same as [`YoutubeClient::channel_id_for_handle`].
    pub async fn search_channel_id(&self, query: &str) -> Result<Option<ChannelId>, YoutubeError> {
        let page: ListResponse<SearchItem> = self
            .get_json(
                "search",
                &[
                    ("part", "snippet"),
                    ("type", "channel"),
                    ("q", query),
                    ("maxResults", "1"),
                ],
            )
            .await?;
        Ok(page
            .items
            .into_iter()
            .find_map(|hit| hit.id.channel_id)
            .map(ChannelId::new))
    }

    /// Returns the ID of the channel's uploads playlist.
    ///
    /// # Errors
    ///
    /// - [`YoutubeError::ChannelNotFound`] if the channel does not exist or
    ///   exposes no uploads playlist.
    /// - [`YoutubeError::Api`] on a non-2xx status (e.g. invalid key).
    /// - [`YoutubeError::Http`] on network failure.
    /// - [`YoutubeError::Deserialize`] if the response shape is unexpected.
    pub async fn uploads_playlist_id(
        &self,
        channel_id: &ChannelId,
    ) -> Result<String, YoutubeError> {
        let page: ListResponse<ChannelItem> = self
            .get_json(
                "channels",
                &[("part", "contentDetails"), ("id", channel_id.as_str())],
            )
            .await?;

        page.items
            .into_iter()
            .next()
            .and_then(|c| c.content_details)
            .and_then(|details| details.related_playlists.uploads)
            .ok_or_else(|| YoutubeError::ChannelNotFound {
                channel_id: channel_id.to_string(),
            })
    }
}

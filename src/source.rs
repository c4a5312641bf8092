use async_trait::async_trait;

use crate::error::Result;
use crate::uploads::VideoRecord;

/// Upstream video platform calls the pipeline depends on.
///
/// Every pipeline stage takes the source as an explicit parameter, so a
/// test double can stand in for [`crate::youtube::YouTubeClient`].
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Search channel-type results only, returning their channel ids in rank order
    async fn search_channels(&self, query: &str, max_results: u32) -> Result<Vec<String>>;

    /// Id of the channel's "uploads" playlist, or `None` if the channel has none
    async fn uploads_playlist(&self, channel_id: &str) -> Result<Option<String>>;

    /// Up to `limit` videos from a playlist, in the order the platform returns them
    async fn playlist_videos(&self, playlist_id: &str, limit: u32) -> Result<Vec<VideoRecord>>;

    /// Up to `limit` top-level comments rendered as plain text.
    /// Disabled comments come back as an empty list.
    async fn comment_threads(&self, video_id: &str, limit: u32) -> Result<Vec<String>>;
}

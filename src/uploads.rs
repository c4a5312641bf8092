use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::Result;
use crate::resolver::ChannelId;
use crate::source::DataSource;

/// Largest `limit` the interactive front end offers
pub const MAX_VIDEOS: u32 = 10;

/// One upload, as listed by the channel's uploads playlist
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoRecord {
    pub video_id: String,
    pub title: String,
    pub published_at: DateTime<Utc>,
}

/// List the `limit` most recent uploads of a channel, newest first.
///
/// Callers keep `limit` within `1..=MAX_VIDEOS`. A channel without an uploads
/// playlist, or with an empty one, yields an empty list rather than an error.
pub async fn list_recent_uploads(
    source: &dyn DataSource,
    channel_id: &ChannelId,
    limit: u32,
) -> Result<Vec<VideoRecord>> {
    let Some(playlist_id) = source.uploads_playlist(channel_id.as_str()).await? else {
        warn!(channel_id = %channel_id, "Channel has no uploads playlist");
        return Ok(Vec::new());
    };

    debug!(channel_id = %channel_id, %playlist_id, limit, "Listing uploads");
    let mut videos = source.playlist_videos(&playlist_id, limit).await?;
    videos.truncate(limit as usize);
    Ok(videos)
}

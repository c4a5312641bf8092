use tracing::debug;

use crate::error::Result;
use crate::source::DataSource;

/// Comments fetched per upload
pub const COMMENTS_PER_VIDEO: u32 = 50;

/// Fetch up to `limit` top-level comments for one upload, as plain text.
///
/// A single page is requested; replies are never traversed. Disabled or
/// absent comments yield an empty list.
pub async fn fetch_top_level_comments(
    source: &dyn DataSource,
    video_id: &str,
    limit: u32,
) -> Result<Vec<String>> {
    let mut comments = source.comment_threads(video_id, limit).await?;
    comments.truncate(limit as usize);
    debug!(video_id, count = comments.len(), "Fetched comments");
    Ok(comments)
}

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::{youtube_api_base_url, youtube_api_key};
use crate::error::{Error, Result};
use crate::source::DataSource;
use crate::uploads::VideoRecord;

/// Error envelope returned by Google APIs on non-2xx responses
#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: Option<u16>,
    message: Option<String>,
    #[serde(default)]
    errors: Vec<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    snippet: SearchSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchSnippet {
    channel_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChannelItem {
    content_details: Option<ChannelContentDetails>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChannelContentDetails {
    related_playlists: Option<RelatedPlaylists>,
}

#[derive(Debug, Deserialize)]
struct RelatedPlaylists {
    uploads: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaylistItem {
    snippet: PlaylistItemSnippet,
    content_details: PlaylistItemContentDetails,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaylistItemSnippet {
    title: String,
    published_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaylistItemContentDetails {
    video_id: String,
}

#[derive(Debug, Deserialize)]
struct CommentThreadItem {
    snippet: CommentThreadSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentThreadSnippet {
    top_level_comment: TopLevelComment,
}

#[derive(Debug, Deserialize)]
struct TopLevelComment {
    snippet: CommentSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentSnippet {
    text_display: String,
}

/// YouTube Data API v3 client
pub struct YouTubeClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl YouTubeClient {
    /// Build a client from `YOUTUBE_API_KEY` and `YOUTUBE_API_BASE_URL`
    pub fn new() -> Result<Self> {
        let api_key = youtube_api_key().ok_or(Error::ApiKeyMissing)?;
        Self::with_base_url(api_key, youtube_api_base_url())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Result<Self> {
        let mut builder = Client::builder().timeout(Duration::from_secs(30));
        // Local mock servers must not be routed through HTTP(S)_PROXY
        if is_loopback(&base_url) {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            api_key,
            base_url,
        })
    }

    /// Issue a GET against one API resource and decode the JSON body
    async fn get<T: DeserializeOwned>(&self, resource: &str, query: &[(&str, String)]) -> Result<T> {
        debug!(resource, ?query, "YouTube API request");

        let response = self
            .client
            .get(format!("{}/{}", self.base_url, resource))
            .query(query)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        let response = check_status(response).await?;
        Ok(response.json().await?)
    }
}

fn is_loopback(base_url: &str) -> bool {
    let host = base_url
        .split("://")
        .nth(1)
        .unwrap_or(base_url)
        .split(['/', ':'])
        .next()
        .unwrap_or("");
    matches!(host, "localhost" | "127.0.0.1")
}

async fn check_status(response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    Err(api_error(status, &body))
}

/// Decode a Google error envelope, falling back to the raw body
fn api_error(status: u16, body: &str) -> Error {
    match serde_json::from_str::<ApiErrorEnvelope>(body) {
        Ok(envelope) => Error::Api {
            status: envelope.error.code.unwrap_or(status),
            reason: envelope.error.errors.into_iter().find_map(|e| e.reason),
            message: envelope
                .error
                .message
                .unwrap_or_else(|| "Unknown error".to_string()),
        },
        Err(_) => Error::Api {
            status,
            reason: None,
            message: body.trim().to_string(),
        },
    }
}

fn has_reason(err: &Error, expected: &str) -> bool {
    matches!(err, Error::Api { reason: Some(reason), .. } if reason == expected)
}

#[async_trait]
impl DataSource for YouTubeClient {
    async fn search_channels(&self, query: &str, max_results: u32) -> Result<Vec<String>> {
        let response: ListResponse<SearchItem> = self
            .get(
                "search",
                &[
                    ("part", "snippet".to_string()),
                    ("q", query.to_string()),
                    ("type", "channel".to_string()),
                    ("maxResults", max_results.to_string()),
                ],
            )
            .await?;

        Ok(response
            .items
            .into_iter()
            .map(|item| item.snippet.channel_id)
            .collect())
    }

    async fn uploads_playlist(&self, channel_id: &str) -> Result<Option<String>> {
        let response: ListResponse<ChannelItem> = self
            .get(
                "channels",
                &[
                    ("part", "contentDetails".to_string()),
                    ("id", channel_id.to_string()),
                ],
            )
            .await?;

        Ok(response
            .items
            .into_iter()
            .next()
            .and_then(|item| item.content_details)
            .and_then(|details| details.related_playlists)
            .and_then(|playlists| playlists.uploads))
    }

    async fn playlist_videos(&self, playlist_id: &str, limit: u32) -> Result<Vec<VideoRecord>> {
        let result: Result<ListResponse<PlaylistItem>> = self
            .get(
                "playlistItems",
                &[
                    ("part", "snippet,contentDetails".to_string()),
                    ("playlistId", playlist_id.to_string()),
                    ("maxResults", limit.to_string()),
                ],
            )
            .await;

        let response = match result {
            Ok(response) => response,
            // Channels that never uploaded have a dangling uploads playlist
            Err(e) if has_reason(&e, "playlistNotFound") => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        Ok(response
            .items
            .into_iter()
            .map(|item| VideoRecord {
                video_id: item.content_details.video_id,
                title: item.snippet.title,
                published_at: item.snippet.published_at,
            })
            .collect())
    }

    async fn comment_threads(&self, video_id: &str, limit: u32) -> Result<Vec<String>> {
        let result: Result<ListResponse<CommentThreadItem>> = self
            .get(
                "commentThreads",
                &[
                    ("part", "snippet".to_string()),
                    ("videoId", video_id.to_string()),
                    ("maxResults", limit.to_string()),
                    ("textFormat", "plainText".to_string()),
                ],
            )
            .await;

        let response = match result {
            Ok(response) => response,
            Err(e) if has_reason(&e, "commentsDisabled") => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        Ok(response
            .items
            .into_iter()
            .map(|item| item.snippet.top_level_comment.snippet.text_display)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve exactly one HTTP response on a loopback port and return its base URL
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = vec![0u8; 8192];
            let _ = socket.read(&mut request).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        format!("http://{}", addr)
    }

    fn client_for(base_url: String) -> YouTubeClient {
        YouTubeClient::with_base_url("test-key".to_string(), base_url).unwrap()
    }

    const COMMENTS_DISABLED: &str = r#"{"error": {"code": 403, "message": "The video has disabled comments.", "errors": [{"reason": "commentsDisabled"}]}}"#;
    const PLAYLIST_NOT_FOUND: &str = r#"{"error": {"code": 404, "message": "The playlist cannot be found.", "errors": [{"reason": "playlistNotFound"}]}}"#;
    const QUOTA_EXCEEDED: &str = r#"{"error": {"code": 403, "message": "quota", "errors": [{"reason": "quotaExceeded"}]}}"#;

    #[tokio::test]
    async fn test_comments_disabled_is_empty() {
        let client = client_for(serve_once("403 Forbidden", COMMENTS_DISABLED).await);
        let comments = client.comment_threads("vid1", 50).await.unwrap();
        assert!(comments.is_empty());
    }

    #[tokio::test]
    async fn test_playlist_not_found_is_empty() {
        let client = client_for(serve_once("404 Not Found", PLAYLIST_NOT_FOUND).await);
        let videos = client.playlist_videos("UUgone", 5).await.unwrap();
        assert!(videos.is_empty());
    }

    #[tokio::test]
    async fn test_channel_without_items_has_no_uploads() {
        let client = client_for(serve_once("200 OK", r#"{"kind": "youtube#channelListResponse", "items": []}"#).await);
        let uploads = client.uploads_playlist("UCmissing").await.unwrap();
        assert!(uploads.is_none());
    }

    #[tokio::test]
    async fn test_quota_exceeded_is_an_error() {
        let client = client_for(serve_once("403 Forbidden", QUOTA_EXCEEDED).await);
        let err = client.comment_threads("vid1", 50).await.unwrap_err();
        assert!(matches!(err, Error::Api { status: 403, .. }));
        assert!(has_reason(&err, "quotaExceeded"));
    }

    #[tokio::test]
    async fn test_comment_threads_over_http() {
        let body = r#"{"items": [{"snippet": {"topLevelComment": {"snippet": {"textDisplay": "great video!"}}}}]}"#;
        let client = client_for(serve_once("200 OK", body).await);
        let comments = client.comment_threads("vid1", 50).await.unwrap();
        assert_eq!(comments, vec!["great video!"]);
    }

    #[test]
    fn test_is_loopback() {
        assert!(is_loopback("http://127.0.0.1:8080"));
        assert!(is_loopback("http://localhost:3000/youtube/v3"));
        assert!(!is_loopback(crate::config::DEFAULT_API_BASE_URL));
    }

    #[test]
    fn test_api_error_reads_reason() {
        let body = r#"{
            "error": {
                "code": 403,
                "message": "The video identified by the videoId parameter has disabled comments.",
                "errors": [{"domain": "youtube.commentThread", "reason": "commentsDisabled"}]
            }
        }"#;

        let err = api_error(403, body);
        assert!(has_reason(&err, "commentsDisabled"));
        match err {
            Error::Api { status, message, .. } => {
                assert_eq!(status, 403);
                assert!(message.contains("disabled comments"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_api_error_falls_back_to_raw_body() {
        let err = api_error(502, "Bad Gateway\n");
        match err {
            Error::Api {
                status,
                reason,
                message,
            } => {
                assert_eq!(status, 502);
                assert!(reason.is_none());
                assert_eq!(message, "Bad Gateway");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_decode_playlist_items() {
        let body = r#"{
            "kind": "youtube#playlistItemListResponse",
            "items": [{
                "snippet": {"title": "Launch day", "publishedAt": "2024-03-01T12:00:00Z"},
                "contentDetails": {"videoId": "abc123", "videoPublishedAt": "2024-03-01T12:00:00Z"}
            }]
        }"#;

        let response: ListResponse<PlaylistItem> = serde_json::from_str(body).unwrap();
        assert_eq!(response.items.len(), 1);
        let item = &response.items[0];
        assert_eq!(item.content_details.video_id, "abc123");
        assert_eq!(item.snippet.title, "Launch day");
        assert_eq!(item.snippet.published_at.to_rfc3339(), "2024-03-01T12:00:00+00:00");
    }

    #[test]
    fn test_decode_comment_threads() {
        let body = r#"{
            "items": [
                {"snippet": {"topLevelComment": {"snippet": {"textDisplay": "great video!"}}}},
                {"snippet": {"topLevelComment": {"snippet": {"textDisplay": "Tom & Jerry"}}}}
            ]
        }"#;

        let response: ListResponse<CommentThreadItem> = serde_json::from_str(body).unwrap();
        let texts: Vec<_> = response
            .items
            .into_iter()
            .map(|item| item.snippet.top_level_comment.snippet.text_display)
            .collect();
        assert_eq!(texts, vec!["great video!", "Tom & Jerry"]);
    }

    #[test]
    fn test_decode_missing_items_is_empty() {
        let response: ListResponse<SearchItem> =
            serde_json::from_str(r#"{"kind": "youtube#searchListResponse"}"#).unwrap();
        assert!(response.items.is_empty());
    }

    #[test]
    fn test_decode_channel_uploads_playlist() {
        let body = r#"{
            "items": [{"contentDetails": {"relatedPlaylists": {"likes": "", "uploads": "UUabc"}}}]
        }"#;
        let response: ListResponse<ChannelItem> = serde_json::from_str(body).unwrap();
        let uploads = response
            .items
            .into_iter()
            .next()
            .and_then(|item| item.content_details)
            .and_then(|details| details.related_playlists)
            .and_then(|playlists| playlists.uploads);
        assert_eq!(uploads.as_deref(), Some("UUabc"));
    }
}

use serde::Serialize;
use tracing::{info, warn};

use crate::comments::{COMMENTS_PER_VIDEO, fetch_top_level_comments};
use crate::error::{Error, Result};
use crate::report::{ChannelSentimentReport, VideoSentimentSummary, summarize_channel, summarize_video};
use crate::resolver::{ChannelId, resolve};
use crate::sentiment::{PolarityModel, ScoredComment, score};
use crate::source::DataSource;
use crate::uploads::{MAX_VIDEOS, VideoRecord, list_recent_uploads};

pub const DEFAULT_MAX_VIDEOS: u32 = 5;
pub const DEFAULT_SAMPLE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy)]
pub struct AnalysisOptions {
    /// Uploads per channel, 1..=10
    pub max_videos: u32,
    pub comments_per_video: u32,
    /// Scored comments kept as a sample for display
    pub sample_size: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            max_videos: DEFAULT_MAX_VIDEOS,
            comments_per_video: COMMENTS_PER_VIDEO,
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }
}

impl AnalysisOptions {
    pub fn with_max_videos(max_videos: u32) -> Result<Self> {
        if !(1..=MAX_VIDEOS).contains(&max_videos) {
            return Err(Error::Config(format!(
                "max videos must be between 1 and {}, got {}",
                MAX_VIDEOS, max_videos
            )));
        }
        Ok(Self {
            max_videos,
            ..Self::default()
        })
    }
}

/// Per-upload result: the summary plus whether its comments could be fetched
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoAnalysis {
    #[serde(flatten)]
    pub summary: VideoSentimentSummary,
    /// Fetching failed upstream; the zero counts mean "unknown", not "no comments"
    pub comments_unavailable: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChannelAnalysis {
    pub reference: String,
    pub channel_id: ChannelId,
    pub videos: Vec<VideoRecord>,
    pub video_summaries: Vec<VideoAnalysis>,
    pub sample: Vec<ScoredComment>,
    /// Raw pooled comment text, the input for word-frequency views
    #[serde(skip)]
    pub pooled_comments: Vec<String>,
    pub report: ChannelSentimentReport,
}

impl ChannelAnalysis {
    pub fn has_videos(&self) -> bool {
        !self.videos.is_empty()
    }

    pub fn has_comments(&self) -> bool {
        self.report.total_comments > 0
    }
}

/// Outcome for one reference in a batch
pub struct ChannelOutcome {
    pub reference: String,
    pub result: Result<ChannelAnalysis>,
}

/// Split a comma-separated field into trimmed, non-empty references
pub fn split_references(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Run the whole chain for one channel reference.
///
/// Resolution and upload listing failures abort this reference. A comment
/// fetch failure only blanks the affected upload.
pub async fn analyze_channel(
    source: &dyn DataSource,
    model: &dyn PolarityModel,
    reference: &str,
    options: &AnalysisOptions,
) -> Result<ChannelAnalysis> {
    let channel_id = resolve(source, reference).await?;

    info!(
        channel_id = %channel_id,
        "Fetching latest {} videos for channel: {}", options.max_videos, reference
    );
    let videos = list_recent_uploads(source, &channel_id, options.max_videos).await?;
    if videos.is_empty() {
        warn!(channel_id = %channel_id, "No videos found");
    }

    let mut pooled_comments = Vec::new();
    let mut pooled: Vec<ScoredComment> = Vec::new();
    let mut video_summaries = Vec::with_capacity(videos.len());

    for video in &videos {
        let (comments, comments_unavailable) =
            match fetch_top_level_comments(source, &video.video_id, options.comments_per_video).await {
                Ok(comments) => (comments, false),
                Err(e) => {
                    warn!(video_id = %video.video_id, "Could not fetch comments: {}", e);
                    (Vec::new(), true)
                }
            };

        let scored = score(model, &comments);
        video_summaries.push(VideoAnalysis {
            summary: summarize_video(&video.video_id, &video.title, &scored),
            comments_unavailable,
        });
        pooled_comments.extend(comments);
        pooled.extend(scored);
    }

    let report = summarize_channel(&pooled);
    if pooled.is_empty() && !videos.is_empty() {
        warn!(channel_id = %channel_id, "No comments found");
    }

    let sample = pooled.into_iter().take(options.sample_size).collect();

    Ok(ChannelAnalysis {
        reference: reference.to_string(),
        channel_id,
        videos,
        video_summaries,
        sample,
        pooled_comments,
        report,
    })
}

/// Analyze each reference in turn. A failing reference never stops the batch.
pub async fn analyze_batch(
    source: &dyn DataSource,
    model: &dyn PolarityModel,
    references: &[String],
    options: &AnalysisOptions,
) -> Vec<ChannelOutcome> {
    let mut outcomes = Vec::with_capacity(references.len());
    for reference in references {
        let result = analyze_channel(source, model, reference, options).await;
        match &result {
            Err(e) if e.is_resolution_failure() => {
                warn!(reference = %reference, "Skipping unresolvable channel: {}", e)
            }
            Err(e) => warn!(reference = %reference, "Skipping channel after upstream failure: {}", e),
            Ok(_) => {}
        }
        outcomes.push(ChannelOutcome {
            reference: reference.clone(),
            result,
        });
    }
    outcomes
}

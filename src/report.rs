use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::lexicon::STOP_WORDS;
use crate::sentiment::{Label, ScoredComment};

/// Overall score above which a channel counts as Strong
pub const STRONG_THRESHOLD: f64 = 30.0;
/// Overall score below which a channel counts as Declining
pub const DECLINING_THRESHOLD: f64 = -10.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LabelCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl LabelCounts {
    pub fn tally(comments: &[ScoredComment]) -> Self {
        comments.iter().fold(Self::default(), |mut counts, comment| {
            match comment.label {
                Label::Positive => counts.positive += 1,
                Label::Negative => counts.negative += 1,
                Label::Neutral => counts.neutral += 1,
            }
            counts
        })
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    /// (positive - negative) / total * 100, or 0 when there is nothing to count
    pub fn net_score(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        (self.positive as f64 - self.negative as f64) / total as f64 * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoSentimentSummary {
    pub video_id: String,
    pub title: String,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub score: f64,
}

impl VideoSentimentSummary {
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Strong,
    Declining,
    Mixed,
}

impl Status {
    pub fn from_score(overall_score: f64) -> Self {
        if overall_score > STRONG_THRESHOLD {
            Status::Strong
        } else if overall_score < DECLINING_THRESHOLD {
            Status::Declining
        } else {
            Status::Mixed
        }
    }

    pub fn sentence(&self) -> &'static str {
        match self {
            Status::Strong => "Channel is performing well: strong positive audience response!",
            Status::Declining => "Channel performance is declining: many negative comments.",
            Status::Mixed => "Channel has mixed audience feedback.",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Strong => "Strong",
            Status::Declining => "Declining",
            Status::Mixed => "Mixed",
        };
        f.pad(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelSentimentReport {
    pub total_comments: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub overall_score: f64,
    pub status: Status,
}

/// Tally one upload's scored comments. An upload without comments scores 0.
pub fn summarize_video(video_id: &str, title: &str, comments: &[ScoredComment]) -> VideoSentimentSummary {
    let counts = LabelCounts::tally(comments);
    VideoSentimentSummary {
        video_id: video_id.to_string(),
        title: title.to_string(),
        positive: counts.positive,
        negative: counts.negative,
        neutral: counts.neutral,
        score: counts.net_score(),
    }
}

/// Fold the channel's pooled comments into one report.
///
/// The score is recomputed from the pooled set, not averaged over videos.
/// An empty pool reports an overall score of 0, which classifies as Mixed.
pub fn summarize_channel(pooled: &[ScoredComment]) -> ChannelSentimentReport {
    let counts = LabelCounts::tally(pooled);
    let overall_score = counts.net_score();
    ChannelSentimentReport {
        total_comments: counts.total(),
        positive: counts.positive,
        negative: counts.negative,
        neutral: counts.neutral,
        overall_score,
        status: Status::from_score(overall_score),
    }
}

/// Most frequent words across the pooled comment text, ties broken alphabetically
pub fn top_terms(comments: &[String], limit: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for comment in comments {
        for word in comment.split_whitespace() {
            let word = word
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase();
            if word.chars().count() < 3 || STOP_WORDS.contains(&word.as_str()) {
                continue;
            }
            *counts.entry(word).or_default() += 1;
        }
    }

    let mut terms: Vec<_> = counts.into_iter().collect();
    terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    terms.truncate(limit);
    terms
}

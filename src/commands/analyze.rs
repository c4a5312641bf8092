use serde_json::{Value, json};

use crate::config::validate_config;
use crate::error::{Error, Result};
use crate::pipeline::{AnalysisOptions, ChannelAnalysis, ChannelOutcome, analyze_batch, split_references};
use crate::report::top_terms;
use crate::sentiment::Lexicon;
use crate::youtube::YouTubeClient;

pub async fn run(channels: &str, max_videos: u32, json: bool, terms: usize) -> Result<()> {
    let references = split_references(channels);
    if references.is_empty() {
        return Err(Error::Config(
            "Please enter at least one channel link.".to_string(),
        ));
    }

    validate_config()?;
    let options = AnalysisOptions::with_max_videos(max_videos)?;
    let client = YouTubeClient::new()?;
    let lexicon = Lexicon::new();

    let outcomes = analyze_batch(&client, &lexicon, &references, &options).await;

    if json {
        print_json(&outcomes, terms)?;
    } else {
        for outcome in &outcomes {
            match &outcome.result {
                Ok(analysis) => print_analysis(analysis, terms),
                Err(e) => eprintln!("Error for {}: {}\n", outcome.reference, e),
            }
        }
    }

    ensure_any_analyzed(&outcomes)
}

/// Fail the command only when every reference in the batch failed
fn ensure_any_analyzed(outcomes: &[ChannelOutcome]) -> Result<()> {
    if !outcomes.is_empty() && outcomes.iter().all(|o| o.result.is_err()) {
        return Err(Error::NoChannelAnalyzed(outcomes.len()));
    }
    Ok(())
}

fn outcome_json(outcome: &ChannelOutcome, terms: usize) -> Value {
    match &outcome.result {
        Ok(analysis) => json!({
            "reference": outcome.reference,
            "analysis": analysis,
            "status_sentence": analysis.report.status.sentence(),
            "top_terms": top_terms(&analysis.pooled_comments, terms),
        }),
        Err(e) => json!({
            "reference": outcome.reference,
            "error": e.to_string(),
            "resolution_failure": e.is_resolution_failure(),
        }),
    }
}

fn print_json(outcomes: &[ChannelOutcome], terms: usize) -> Result<()> {
    let values: Vec<_> = outcomes
        .iter()
        .map(|outcome| outcome_json(outcome, terms))
        .collect();

    println!("{}", serde_json::to_string_pretty(&values)?);
    Ok(())
}

fn truncate(text: &str, max_chars: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() > max_chars {
        let cut: String = flat.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", cut)
    } else {
        flat
    }
}

fn print_analysis(analysis: &ChannelAnalysis, terms: usize) {
    println!("=== {} ({}) ===\n", analysis.reference, analysis.channel_id);

    if !analysis.has_videos() {
        println!("No videos found.\n");
        return;
    }

    println!("Recent videos:");
    for video in &analysis.videos {
        println!(
            "  {}  {}  {}",
            video.published_at.format("%Y-%m-%d"),
            video.video_id,
            truncate(&video.title, 60)
        );
    }
    println!();

    if !analysis.has_comments() {
        println!("No comments found.\n");
        return;
    }

    println!("Sample comments:");
    for comment in &analysis.sample {
        println!(
            "  {:>+7.4}  {:<8}  {}",
            comment.compound,
            comment.label,
            truncate(&comment.text, 70)
        );
    }
    println!();

    let top = top_terms(&analysis.pooled_comments, terms);
    if !top.is_empty() {
        let line = top
            .iter()
            .map(|(word, count)| format!("{} ({})", word, count))
            .collect::<Vec<_>>()
            .join(", ");
        println!("Top terms: {}\n", line);
    }

    println!("Video-level sentiment:");
    println!("  {:>4} {:>4} {:>4} {:>8}  Title", "Pos", "Neg", "Neu", "Score");
    for video in &analysis.video_summaries {
        let summary = &video.summary;
        let note = if video.comments_unavailable {
            "  [comments unavailable]"
        } else {
            ""
        };
        println!(
            "  {:>4} {:>4} {:>4} {:>7.2}%  {}{}",
            summary.positive,
            summary.negative,
            summary.neutral,
            summary.score,
            truncate(&summary.title, 50),
            note
        );
    }
    println!();

    let report = &analysis.report;
    println!("Channel performance report:");
    println!("  - Total comments analyzed: {}", report.total_comments);
    println!("  - Positive: {}", report.positive);
    println!("  - Negative: {}", report.negative);
    println!("  - Neutral: {}", report.neutral);
    println!("  - Overall sentiment score: {:.2}%", report.overall_score);
    println!("  - Status: {}", report.status.sentence());
    println!();
}

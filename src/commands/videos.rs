use crate::config::validate_config;
use crate::error::Result;
use crate::resolver::resolve;
use crate::uploads::{VideoRecord, list_recent_uploads};
use crate::youtube::YouTubeClient;

pub async fn run(channel: &str, limit: u32) -> Result<()> {
    validate_config()?;
    let client = YouTubeClient::new()?;

    eprintln!("Resolving channel...");
    let channel_id = resolve(&client, channel).await?;

    let videos = list_recent_uploads(&client, &channel_id, limit).await?;

    if videos.is_empty() {
        println!("No videos found for channel: {}", channel);
        return Ok(());
    }

    println!("Found {} video(s) for {}:\n", videos.len(), channel_id);

    for (i, video) in videos.iter().enumerate() {
        print_video_entry(i + 1, video);
    }

    println!("To analyze comment sentiment, run:");
    println!("  yt-sentiment analyze {}", channel);

    Ok(())
}

fn print_video_entry(index: usize, video: &VideoRecord) {
    println!("{}. {}", index, video.title);
    println!("   {}", video.published_at.format("%Y-%m-%d %H:%M UTC"));
    println!("   https://www.youtube.com/watch?v={}", video.video_id);
    println!();
}

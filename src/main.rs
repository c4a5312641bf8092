use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use yt_sentiment::commands;
use yt_sentiment::config::load_env;

#[derive(Parser)]
#[command(name = "yt-sentiment")]
#[command(about = "Score the sentiment of recent YouTube comments and summarize audience reception per channel")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze comment sentiment for one or more channels
    Analyze {
        /// Channel links, comma-separated (e.g., "https://youtube.com/@CHANNEL, https://youtube.com/channel/UC...")
        channels: String,

        /// Number of recent videos per channel (1-10)
        #[arg(short = 'n', long, default_value = "5", value_parser = clap::value_parser!(u32).range(1..=10))]
        max_videos: u32,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,

        /// Number of most frequent words to show (default: 15)
        #[arg(short, long, default_value = "15")]
        terms: usize,
    },

    /// List latest videos from a YouTube channel
    Videos {
        /// Channel URL (e.g., https://youtube.com/@CHANNEL or channel ID)
        channel: String,

        /// Maximum number of videos to show (1-10)
        #[arg(short = 'n', long, default_value = "5", value_parser = clap::value_parser!(u32).range(1..=10))]
        limit: u32,
    },

    /// Score arbitrary texts offline
    Score {
        /// Texts to score
        #[arg(required = true)]
        texts: Vec<String>,
    },

    /// Initialize with a YouTube Data API key
    Init {
        /// YouTube Data API key
        #[arg(short = 'k', long)]
        api_key: Option<String>,

        /// API base URL, for pointing at a local mock server
        #[arg(short = 'u', long)]
        base_url: Option<String>,

        /// Overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() {
    // Load environment variables
    load_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("yt_sentiment=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            channels,
            max_videos,
            json,
            terms,
        } => commands::analyze::run(&channels, max_videos, json, terms).await,
        Commands::Videos { channel, limit } => commands::videos::run(&channel, limit).await,
        Commands::Score { texts } => commands::score::run(&texts),
        Commands::Init {
            api_key,
            base_url,
            force,
        } => commands::init::run(api_key, base_url, force),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("API key not set. Run `yt-sentiment init` to configure.")]
    ApiKeyMissing,

    #[error("Invalid channel reference: {0}. Use a /channel/ link or an @handle.")]
    InvalidReference(String),

    #[error("Could not resolve handle @{0}. Try a /channel/ link.")]
    HandleNotFound(String),

    #[error("No channel could be analyzed ({0} failed)")]
    NoChannelAnalyzed(usize),

    #[error("YouTube API error ({status}): {message}")]
    Api {
        status: u16,
        reason: Option<String>,
        message: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// True when the reference itself could not be mapped to a channel id
    pub fn is_resolution_failure(&self) -> bool {
        matches!(self, Error::InvalidReference(_) | Error::HandleNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

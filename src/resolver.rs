use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::source::DataSource;

static BARE_CHANNEL_ID: OnceLock<Regex> = OnceLock::new();

fn bare_channel_id() -> &'static Regex {
    BARE_CHANNEL_ID.get_or_init(|| Regex::new(r"^UC[0-9A-Za-z_-]{22}$").expect("valid regex"))
}

/// Canonical channel identifier (never empty)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ChannelId(String);

impl ChannelId {
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            None
        } else {
            Some(Self(id))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a user-supplied channel reference turned out to be
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelReference {
    DirectId(String),
    Handle(String),
    Invalid,
}

/// Cut a URL fragment at the first path separator or query string
fn first_segment(s: &str) -> &str {
    let s = s.trim_matches('/');
    let end = s.find(['/', '?', '#']).unwrap_or(s.len());
    s[..end].trim()
}

impl ChannelReference {
    /// Classify a reference by the markers it embeds. Makes no network calls.
    pub fn parse(reference: &str) -> Self {
        let reference = reference.trim();

        if let Some(pos) = reference.rfind("channel/") {
            let id = first_segment(&reference[pos + "channel/".len()..]);
            return if id.is_empty() {
                Self::Invalid
            } else {
                Self::DirectId(id.to_string())
            };
        }

        if let Some(pos) = reference.rfind('@') {
            let handle = first_segment(&reference[pos + 1..]);
            return if handle.is_empty() {
                Self::Invalid
            } else {
                Self::Handle(handle.to_string())
            };
        }

        if bare_channel_id().is_match(reference) {
            return Self::DirectId(reference.to_string());
        }

        Self::Invalid
    }
}

/// Map a channel reference to its canonical id.
///
/// Direct ids resolve locally. Handles cost one channel search with a single
/// result requested. Nothing is cached: repeated references are looked up again.
pub async fn resolve(source: &dyn DataSource, reference: &str) -> Result<ChannelId> {
    match ChannelReference::parse(reference) {
        ChannelReference::DirectId(id) => {
            ChannelId::new(id).ok_or_else(|| Error::InvalidReference(reference.to_string()))
        }
        ChannelReference::Handle(handle) => {
            debug!(%handle, "Searching for channel handle");
            let results = source.search_channels(&format!("@{}", handle), 1).await?;
            results
                .into_iter()
                .next()
                .and_then(ChannelId::new)
                .ok_or(Error::HandleNotFound(handle))
        }
        ChannelReference::Invalid => Err(Error::InvalidReference(reference.to_string())),
    }
}

//! Types for the content API and the episode listing.

use crate::error::Result;
use crate::format::{format_duration, format_published_at};
use podcaster_playback::Episode;
use serde::{Deserialize, Serialize};

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// API base URL (e.g., `http://localhost:3333`)
    pub base_url: String,

    /// Number of episodes requested for the home page
    pub limit: usize,

    /// How many of the newest episodes are shown as latest releases
    pub latest_count: usize,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl CatalogConfig {
    /// Create a config for the given API URL with default limits.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3333".to_string(),
            limit: 12,
            latest_count: 2,
            timeout_secs: 30,
        }
    }
}

/// Episode as returned by the content API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEpisode {
    pub id: String,
    pub title: String,
    pub members: String,
    pub published_at: String,
    pub thumbnail: String,
    #[serde(default)]
    pub description: String,
    pub file: ApiFile,
}

/// Audio file attached to an API episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiFile {
    pub url: String,
    #[serde(rename = "type", default)]
    pub mime_type: String,
    /// Length in seconds
    pub duration: u64,
}

/// Episode prepared for display and playback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeSummary {
    pub id: String,
    pub title: String,
    pub members: String,
    pub thumbnail: String,
    /// Display date, `d MMM yy` in pt-BR
    pub published_at: String,
    /// Length in seconds
    pub duration: u64,
    /// Length as `HH:MM:SS`
    pub duration_as_string: String,
    pub url: String,
}

impl EpisodeSummary {
    /// Map an API payload to its display form.
    pub fn from_api(episode: ApiEpisode) -> Result<Self> {
        Ok(Self {
            published_at: format_published_at(&episode.published_at)?,
            duration_as_string: format_duration(episode.file.duration),
            duration: episode.file.duration,
            url: episode.file.url,
            id: episode.id,
            title: episode.title,
            members: episode.members,
            thumbnail: episode.thumbnail,
        })
    }

    /// Playback value handed to the player.
    pub fn to_episode(&self) -> Episode {
        Episode {
            title: self.title.clone(),
            members: self.members.clone(),
            thumbnail: self.thumbnail.clone(),
            duration: self.duration,
            url: self.url.clone(),
        }
    }
}

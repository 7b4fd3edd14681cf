//! Core types for playback management

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Episode information for queue management
///
/// Immutable value handed over by the catalog. The queue holds episodes
/// behind `Arc` so loading a playlist never copies episode metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// Episode title
    pub title: String,

    /// Credited people/roles
    pub members: String,

    /// Thumbnail image URL
    pub thumbnail: String,

    /// Length in whole seconds
    pub duration: u64,

    /// Audio resource locator handed to the audio engine
    pub url: String,
}

impl Episode {
    /// Episode length as a `Duration`
    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.duration)
    }
}

/// Configuration for playback manager
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Initial loop flag (default: false)
    pub looping: bool,

    /// Initial shuffle flag (default: false)
    pub shuffling: bool,

    /// Seed for the shuffle picker; `None` seeds from OS entropy
    pub shuffle_seed: Option<u64>,
}

/// Owned copy of the full playback state vector
///
/// Published to subscribers after every state change and returned by
/// `PlaybackManager::snapshot`. Derived flags are computed at capture time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackSnapshot {
    pub queue: Vec<Arc<Episode>>,
    pub current_index: usize,
    pub is_playing: bool,
    pub is_looping: bool,
    pub is_shuffling: bool,
    pub has_next: bool,
    pub has_previous: bool,
}

impl PlaybackSnapshot {
    /// Episode under the cursor, `None` when the queue is empty
    pub fn current_episode(&self) -> Option<&Arc<Episode>> {
        self.queue.get(self.current_index)
    }
}

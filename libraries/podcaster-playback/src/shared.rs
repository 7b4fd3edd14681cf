//! Thread-safe handle to the playback manager
//!
//! Collaborators on other threads (an audio decoding thread, a UI thread)
//! go through this handle. Every call takes the lock, applies one command
//! completely and publishes to listeners before releasing it, so no
//! collaborator can observe a half-applied command.
//!
//! Listeners run while the lock is held and must not call back into the
//! same handle.

use crate::{
    engine::{on_track_ended, TrackEndAction},
    error::{PlaybackError, Result},
    events::{PlaybackEvent, SubscriptionId},
    manager::PlaybackManager,
    types::{Episode, PlaybackSnapshot},
};
use std::sync::{Arc, Mutex};

/// Cloneable, mutex-guarded playback manager
#[derive(Clone)]
pub struct SharedPlaybackManager {
    inner: Arc<Mutex<PlaybackManager>>,
}

impl SharedPlaybackManager {
    pub fn new(manager: PlaybackManager) -> Self {
        Self {
            inner: Arc::new(Mutex::new(manager)),
        }
    }

    /// Run `f` with exclusive access to the manager
    pub fn with<R>(&self, f: impl FnOnce(&mut PlaybackManager) -> R) -> Result<R> {
        let mut manager = self
            .inner
            .lock()
            .map_err(|_| PlaybackError::LockPoisoned)?;
        Ok(f(&mut *manager))
    }

    pub fn play(&self, episode: impl Into<Arc<Episode>>) -> Result<()> {
        self.with(|m| m.play(episode))
    }

    pub fn play_list<I, E>(&self, episodes: I, index: usize) -> Result<()>
    where
        I: IntoIterator<Item = E>,
        E: Into<Arc<Episode>>,
    {
        self.with(|m| m.play_list(episodes, index))?
    }

    pub fn toggle_play(&self) -> Result<()> {
        self.with(PlaybackManager::toggle_play)
    }

    pub fn toggle_loop(&self) -> Result<()> {
        self.with(PlaybackManager::toggle_loop)
    }

    pub fn toggle_shuffle(&self) -> Result<()> {
        self.with(PlaybackManager::toggle_shuffle)
    }

    pub fn set_playing_state(&self, playing: bool) -> Result<()> {
        self.with(|m| m.set_playing_state(playing))
    }

    pub fn play_next(&self) -> Result<()> {
        self.with(PlaybackManager::play_next)
    }

    pub fn play_previous(&self) -> Result<()> {
        self.with(PlaybackManager::play_previous)
    }

    pub fn clear_player_state(&self) -> Result<()> {
        self.with(PlaybackManager::clear_player_state)
    }

    /// Apply the end-of-track policy atomically
    pub fn on_track_ended(&self) -> Result<TrackEndAction> {
        self.with(on_track_ended)
    }

    pub fn snapshot(&self) -> Result<PlaybackSnapshot> {
        self.with(|m| m.snapshot())
    }

    pub fn subscribe<F>(&self, listener: F) -> Result<SubscriptionId>
    where
        F: FnMut(&PlaybackEvent, &PlaybackSnapshot) + Send + 'static,
    {
        self.with(|m| m.subscribe(listener))
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> Result<bool> {
        self.with(|m| m.unsubscribe(id))
    }
}

impl From<PlaybackManager> for SharedPlaybackManager {
    fn from(manager: PlaybackManager) -> Self {
        Self::new(manager)
    }
}

impl Default for SharedPlaybackManager {
    fn default() -> Self {
        Self::new(PlaybackManager::default())
    }
}

//! Audio engine integration
//!
//! The engine that actually decodes `Episode::url` lives in platform code.
//! This module defines what the manager expects from it and the glue in
//! both directions:
//! - `EngineDriver` turns published events into engine calls
//! - `on_track_ended` is the policy the engine invokes when audio runs out

use crate::{
    events::{PlaybackEvent, SubscriptionId},
    manager::PlaybackManager,
    types::{Episode, PlaybackSnapshot},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Platform audio output for a single episode at a time
pub trait AudioEngine: Send {
    /// Load an episode, replacing whatever was loaded before
    fn load(&mut self, episode: &Episode);

    /// Start or pause rendering of the loaded episode
    fn set_playing(&mut self, playing: bool);

    /// Restart the loaded episode when it reaches its end
    fn set_looping(&mut self, looping: bool);

    /// Unload the current episode (player closed)
    fn stop(&mut self);
}

/// Drives an `AudioEngine` from manager events
pub struct EngineDriver<E: AudioEngine> {
    engine: E,
}

impl<E: AudioEngine> EngineDriver<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Apply one published change to the engine
    pub fn handle(&mut self, event: &PlaybackEvent, snapshot: &PlaybackSnapshot) {
        match *event {
            PlaybackEvent::QueueLoaded { .. } | PlaybackEvent::EpisodeChanged { .. } => {
                if let Some(episode) = snapshot.current_episode() {
                    debug!(title = %episode.title, "Loading episode into engine");
                    self.engine.load(episode);
                    self.engine.set_looping(snapshot.is_looping);
                    self.engine.set_playing(snapshot.is_playing);
                }
            }
            PlaybackEvent::PlayingChanged { is_playing } => self.engine.set_playing(is_playing),
            PlaybackEvent::LoopingChanged { is_looping } => self.engine.set_looping(is_looping),
            PlaybackEvent::ShufflingChanged { .. } => {}
            PlaybackEvent::Cleared => self.engine.stop(),
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn into_inner(self) -> E {
        self.engine
    }
}

impl<E: AudioEngine + 'static> EngineDriver<E> {
    /// Subscribe this driver to `manager`, handing over ownership
    pub fn attach(mut self, manager: &mut PlaybackManager) -> SubscriptionId {
        manager.subscribe(move |event, snapshot| self.handle(event, snapshot))
    }
}

/// What the engine should do after the current episode ran out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackEndAction {
    /// Replay the same episode from the start; manager state unchanged
    Restart,

    /// Cursor moved to `index`; the driver loads the new episode
    Advanced { index: usize },

    /// Nothing left to play; play intent dropped
    Stopped,
}

/// End-of-track policy
///
/// - Looping: the engine restarts the same episode
/// - Next available: advance (shuffle picks may land on the same episode,
///   which is reported as a restart since no new episode gets loaded)
/// - Otherwise: `set_playing_state(false)`
pub fn on_track_ended(manager: &mut PlaybackManager) -> TrackEndAction {
    if manager.is_empty() {
        manager.set_playing_state(false);
        return TrackEndAction::Stopped;
    }

    if manager.is_looping() {
        debug!(index = manager.current_index(), "Track ended, looping");
        return TrackEndAction::Restart;
    }

    if manager.has_next() {
        let before = manager.current_index();
        manager.play_next();
        let index = manager.current_index();

        debug!(before, index, "Track ended, advancing");
        return if index == before {
            TrackEndAction::Restart
        } else {
            TrackEndAction::Advanced { index }
        };
    }

    debug!("Track ended, end of queue");
    manager.set_playing_state(false);
    TrackEndAction::Stopped
}

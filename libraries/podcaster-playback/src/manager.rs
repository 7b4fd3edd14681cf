//! Playback manager - queue and transport state
//!
//! Owns the episode queue, the cursor and the three transport flags, and
//! publishes every change to subscribed collaborators.

use crate::{
    error::{PlaybackError, Result},
    events::{PlaybackEvent, Subscribers, SubscriptionId},
    shuffle::ShufflePicker,
    types::{Episode, PlaybackConfig, PlaybackSnapshot},
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Central playback state container
///
/// State vector:
/// - Queue of episodes (insertion order = play order)
/// - Cursor into the queue (valid whenever the queue is non-empty)
/// - Transport flags: playing, looping, shuffling
///
/// All commands are total: navigation past either end of the queue is a
/// no-op, never an error. The only fallible command is `play_list`, which
/// rejects a start index that does not address an episode.
pub struct PlaybackManager {
    // State
    queue: Vec<Arc<Episode>>,
    current_index: usize,

    // Transport flags
    is_playing: bool,
    is_looping: bool,
    is_shuffling: bool,

    shuffle: ShufflePicker,
    subscribers: Subscribers,
}

impl PlaybackManager {
    /// Create new playback manager with an empty queue
    pub fn new(config: PlaybackConfig) -> Self {
        Self {
            queue: Vec::new(),
            current_index: 0,
            is_playing: false,
            is_looping: config.looping,
            is_shuffling: config.shuffling,
            shuffle: ShufflePicker::new(config.shuffle_seed),
            subscribers: Subscribers::default(),
        }
    }

    // ===== Queue Loading =====

    /// Replace the queue with a single episode and start playing it
    pub fn play(&mut self, episode: impl Into<Arc<Episode>>) {
        let episode = episode.into();
        debug!(title = %episode.title, "Playing single episode");

        self.queue = vec![episode];
        self.current_index = 0;
        self.is_playing = true;

        self.publish(PlaybackEvent::QueueLoaded {
            length: 1,
            index: 0,
        });
    }

    /// Replace the queue with `episodes` and start playing at `index`
    ///
    /// Fails with `IndexOutOfBounds` when `index` does not address an
    /// episode in the list (this includes any index into an empty list).
    /// On failure the current state is left untouched.
    pub fn play_list<I, E>(&mut self, episodes: I, index: usize) -> Result<()>
    where
        I: IntoIterator<Item = E>,
        E: Into<Arc<Episode>>,
    {
        let episodes: Vec<Arc<Episode>> = episodes.into_iter().map(Into::into).collect();
        let len = episodes.len();

        if index >= len {
            warn!(index, len, "Rejected playlist with out-of-range start index");
            return Err(PlaybackError::IndexOutOfBounds { index, len });
        }

        debug!(index, len, "Playing episode list");

        self.queue = episodes;
        self.current_index = index;
        self.is_playing = true;

        self.publish(PlaybackEvent::QueueLoaded { length: len, index });
        Ok(())
    }

    /// Empty the queue and reset the cursor (player closed)
    ///
    /// Also drops play intent since nothing is left to play. Loop and
    /// shuffle preferences are kept.
    pub fn clear_player_state(&mut self) {
        if self.queue.is_empty() && self.current_index == 0 && !self.is_playing {
            return;
        }

        debug!(cleared = self.queue.len(), "Clearing player state");

        self.queue.clear();
        self.current_index = 0;
        self.is_playing = false;

        self.publish(PlaybackEvent::Cleared);
    }

    // ===== Transport Flags =====

    /// Flip play intent
    pub fn toggle_play(&mut self) {
        self.is_playing = !self.is_playing;
        debug!(is_playing = self.is_playing, "Toggled play");
        self.publish(PlaybackEvent::PlayingChanged {
            is_playing: self.is_playing,
        });
    }

    /// Flip loop flag
    pub fn toggle_loop(&mut self) {
        self.is_looping = !self.is_looping;
        debug!(is_looping = self.is_looping, "Toggled loop");
        self.publish(PlaybackEvent::LoopingChanged {
            is_looping: self.is_looping,
        });
    }

    /// Flip shuffle flag
    pub fn toggle_shuffle(&mut self) {
        self.is_shuffling = !self.is_shuffling;
        debug!(is_shuffling = self.is_shuffling, "Toggled shuffle");
        self.publish(PlaybackEvent::ShufflingChanged {
            is_shuffling: self.is_shuffling,
        });
    }

    /// Set play intent explicitly
    ///
    /// Used by the audio engine to report that the current episode finished
    /// or failed, independent of what the user last asked for.
    pub fn set_playing_state(&mut self, playing: bool) {
        if self.is_playing == playing {
            return;
        }

        self.is_playing = playing;
        debug!(is_playing = playing, "Playing state set");
        self.publish(PlaybackEvent::PlayingChanged {
            is_playing: playing,
        });
    }

    // ===== Navigation =====

    /// Advance the cursor
    ///
    /// - Shuffling: uniform random pick over the whole queue (may repeat
    ///   the current episode)
    /// - Otherwise: next position if there is one, else no-op
    ///
    /// There is no wraparound to the start of the queue.
    pub fn play_next(&mut self) {
        let target = if self.is_shuffling {
            self.shuffle.pick(self.queue.len())
        } else if self.has_next() {
            Some(self.current_index + 1)
        } else {
            None
        };

        match target {
            Some(index) => self.move_cursor(index),
            None => debug!(index = self.current_index, "No next episode"),
        }
    }

    /// Step the cursor back, no-op at the start of the queue
    pub fn play_previous(&mut self) {
        if self.has_previous() {
            self.move_cursor(self.current_index - 1);
        } else {
            debug!("No previous episode");
        }
    }

    fn move_cursor(&mut self, index: usize) {
        if index == self.current_index {
            return;
        }

        let previous_index = self.current_index;
        self.current_index = index;
        debug!(previous_index, index, "Cursor moved");

        self.publish(PlaybackEvent::EpisodeChanged {
            previous_index,
            index,
        });
    }

    // ===== Derived State =====

    /// Check if there's a next episode
    pub fn has_next(&self) -> bool {
        self.is_shuffling || self.current_index + 1 < self.queue.len()
    }

    /// Check if there's a previous episode
    pub fn has_previous(&self) -> bool {
        self.current_index > 0
    }

    // ===== State Queries =====

    /// Get the queue in play order
    pub fn queue(&self) -> &[Arc<Episode>] {
        &self.queue
    }

    /// Get cursor position (meaningless when the queue is empty)
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Get episode under the cursor
    pub fn current_episode(&self) -> Option<&Arc<Episode>> {
        self.queue.get(self.current_index)
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_looping(&self) -> bool {
        self.is_looping
    }

    pub fn is_shuffling(&self) -> bool {
        self.is_shuffling
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Capture the full state vector plus derived flags
    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            queue: self.queue.clone(),
            current_index: self.current_index,
            is_playing: self.is_playing,
            is_looping: self.is_looping,
            is_shuffling: self.is_shuffling,
            has_next: self.has_next(),
            has_previous: self.has_previous(),
        }
    }

    // ===== Subscriptions =====

    /// Register a listener called synchronously after every state change
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&PlaybackEvent, &PlaybackSnapshot) + Send + 'static,
    {
        self.subscribers.subscribe(listener)
    }

    /// Remove a listener, returns false if it was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// Number of registered listeners
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn publish(&mut self, event: PlaybackEvent) {
        if self.subscribers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        self.subscribers.publish(&event, &snapshot);
    }
}

impl Default for PlaybackManager {
    fn default() -> Self {
        Self::new(PlaybackConfig::default())
    }
}

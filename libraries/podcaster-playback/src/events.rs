//! Playback Events
//!
//! Synchronous change notification for UI and audio engine collaborators.
//! Every command that changes the state vector publishes one event together
//! with a fresh snapshot, before the command returns.

use crate::types::PlaybackSnapshot;
use serde::{Deserialize, Serialize};

/// Events emitted by the playback manager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// A new queue was loaded (`play` / `play_list`)
    QueueLoaded {
        /// New queue length
        length: usize,
        /// Cursor position in the new queue
        index: usize,
    },

    /// Cursor moved to another episode (next/previous/shuffle pick)
    EpisodeChanged {
        /// Cursor before the move
        previous_index: usize,
        /// Cursor after the move
        index: usize,
    },

    /// Play intent changed
    PlayingChanged { is_playing: bool },

    /// Loop flag changed
    LoopingChanged { is_looping: bool },

    /// Shuffle flag changed
    ShufflingChanged { is_shuffling: bool },

    /// Queue emptied (player closed)
    Cleared,
}

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&PlaybackEvent, &PlaybackSnapshot) + Send>;

/// Registered listeners, invoked in registration order
#[derive(Default)]
pub(crate) struct Subscribers {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl Subscribers {
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&PlaybackEvent, &PlaybackSnapshot) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn publish(&mut self, event: &PlaybackEvent, snapshot: &PlaybackSnapshot) {
        for (_, listener) in &mut self.listeners {
            listener(event, snapshot);
        }
    }
}

//! Podcaster - Playback Management
//!
//! Episode queue and transport state for the Podcaster player.
//!
//! This crate provides:
//! - Queue loading (single episode or a list starting at an index)
//! - Cursor navigation (next/previous, no wraparound)
//! - Transport flags (playing, looping, shuffling)
//! - Derived navigation flags (`has_next`, `has_previous`)
//! - Synchronous change notification for UI and audio engine
//! - A mutex-guarded handle for multi-threaded collaborators
//!
//! # Architecture
//!
//! `podcaster-playback` does no I/O and decodes no audio. The platform audio
//! engine implements [`AudioEngine`] and follows the manager through an
//! [`EngineDriver`] subscription; when an episode runs out it calls
//! [`on_track_ended`].
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use podcaster_playback::{Episode, PlaybackManager};
//!
//! let mut manager = PlaybackManager::default();
//!
//! let episode = |title: &str| Episode {
//!     title: title.to_string(),
//!     members: "Diego Fernandes".to_string(),
//!     thumbnail: String::new(),
//!     duration: 3600,
//!     url: format!("https://cdn.example.com/{}.m4a", title),
//! };
//!
//! manager.play_list(vec![episode("a"), episode("b")], 0).unwrap();
//! assert!(manager.is_playing());
//! assert!(manager.has_next());
//!
//! manager.play_next();
//! assert_eq!(manager.current_index(), 1);
//! assert!(!manager.has_next());
//! ```
//!
//! # Example: Observing Changes
//!
//! ```rust
//! use podcaster_playback::{PlaybackEvent, PlaybackManager};
//!
//! let mut manager = PlaybackManager::default();
//! manager.subscribe(|event, snapshot| {
//!     if let PlaybackEvent::PlayingChanged { is_playing } = event {
//!         assert_eq!(*is_playing, snapshot.is_playing);
//!     }
//! });
//!
//! manager.toggle_play();
//! ```

mod engine;
mod error;
mod events;
mod manager;
mod shared;
mod shuffle;
pub mod types;

// Public exports
pub use engine::{on_track_ended, AudioEngine, EngineDriver, TrackEndAction};
pub use error::{PlaybackError, Result};
pub use events::{PlaybackEvent, SubscriptionId};
pub use manager::PlaybackManager;
pub use shared::SharedPlaybackManager;
pub use types::{Episode, PlaybackConfig, PlaybackSnapshot};

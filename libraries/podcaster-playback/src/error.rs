//! Error types for playback management

use thiserror::Error;

/// Playback errors
///
/// Navigation never fails; only queue loading and the shared handle can.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    /// Requested start index does not address an episode in the list
    #[error("Index out of bounds: {index} (queue length {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A thread panicked while holding the shared manager
    #[error("Playback state lock poisoned")]
    LockPoisoned,
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;

//! Error types shared by the queue, the transport and the audio backend.
//!
//! A cancelled prompt is not an error: prompt answers are `Option`s and the
//! app treats `None` as "do nothing". Likewise, stepping past either end of
//! the queue is reported as `Navigation::Stayed`, not as an error.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by `QueueStore` operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueueError {
    #[error("position {index} is out of range for a queue of {len} track(s)")]
    OutOfRange { index: usize, len: usize },

    #[error("'{name}' is not in the queue")]
    NotFound { name: String },
}

/// Errors raised by a `PlaybackBackend`.
#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to decode {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },

    #[error("no audio output device: {0}")]
    NoOutputDevice(String),

    #[error("audio thread is not running")]
    Disconnected,
}

/// Errors raised by `TransportController` operations.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("the queue is empty")]
    EmptyQueue,

    #[error("no track is selected")]
    NothingSelected,

    #[error(transparent)]
    Queue(#[from] QueueError),

    #[error(transparent)]
    Playback(#[from] PlaybackError),
}

//! Messages exchanged with the audio thread.

use std::path::PathBuf;
use std::sync::mpsc::Sender;

use crate::error::PlaybackError;

#[derive(Debug)]
pub enum AudioCmd {
    /// Open and decode `path`, then report the outcome on `reply`.
    Load {
        path: PathBuf,
        reply: Sender<Result<(), PlaybackError>>,
    },
    /// Start the most recently loaded track.
    Play { looped: bool },
    Pause,
    Unpause,
    /// Stop playback immediately.
    Stop,
    /// Quit the audio thread, fading out over `fade_out_ms` milliseconds.
    Quit { fade_out_ms: u64 },
}

use std::path::Path;

use crate::error::PlaybackError;

/// Commands the transport issues to whatever actually produces sound.
///
/// Every call is synchronous from the caller's point of view: `load` either
/// succeeds or reports why the file cannot be played.
pub trait PlaybackBackend {
    /// Prepare `path` for playback, replacing whatever was loaded before.
    fn load(&mut self, path: &Path) -> Result<(), PlaybackError>;

    /// Start the loaded track from the beginning. With `looped` set the
    /// track repeats until something else is played or playback stops.
    fn play(&mut self, looped: bool);

    fn pause(&mut self);

    fn unpause(&mut self);

    /// Silence output and drop the current track.
    fn stop(&mut self);
}

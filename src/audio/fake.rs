//! Test double for `PlaybackBackend`.

use std::path::{Path, PathBuf};

use crate::error::PlaybackError;

use super::backend::PlaybackBackend;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Load(PathBuf),
    Play { looped: bool },
    Pause,
    Unpause,
    Stop,
}

/// Records every backend call; loads of paths in `unreadable` fail.
#[derive(Debug, Default)]
pub(crate) struct RecordingBackend {
    pub calls: Vec<Call>,
    pub unreadable: Vec<PathBuf>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(path: impl Into<PathBuf>) -> Self {
        Self {
            calls: Vec::new(),
            unreadable: vec![path.into()],
        }
    }

    pub fn take_calls(&mut self) -> Vec<Call> {
        std::mem::take(&mut self.calls)
    }
}

impl PlaybackBackend for RecordingBackend {
    fn load(&mut self, path: &Path) -> Result<(), PlaybackError> {
        self.calls.push(Call::Load(path.to_path_buf()));
        if self.unreadable.iter().any(|p| p == path) {
            return Err(PlaybackError::Open {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
            });
        }
        Ok(())
    }

    fn play(&mut self, looped: bool) {
        self.calls.push(Call::Play { looped });
    }

    fn pause(&mut self) {
        self.calls.push(Call::Pause);
    }

    fn unpause(&mut self) {
        self.calls.push(Call::Unpause);
    }

    fn stop(&mut self) {
        self.calls.push(Call::Stop);
    }
}

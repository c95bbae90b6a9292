use std::fmt;
use std::path::{Path, PathBuf};

/// One playable item in the queue.
///
/// `name` is the file name including its extension (`song.mp3`). It is what
/// the queue shows and what name search compares against. `path` is what the
/// playback backend loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub name: String,
    pub path: PathBuf,
}

impl Track {
    /// Build a track from a file path. Returns `None` when the path has no
    /// UTF-8 file name.
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let name = path.file_name()?.to_str()?.to_string();
        Some(Self { name, path })
    }

    /// The extension of the file name, without the dot.
    pub fn extension(&self) -> Option<&str> {
        Path::new(&self.name).extension().and_then(|e| e.to_str())
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

use std::path::PathBuf;

use crate::error::QueueError;
use crate::library::Track;

/// Ordered, 0-indexed sequence of tracks. Duplicates are allowed.
///
/// The store only knows about positions. Keeping the transport's current
/// position consistent after a mutation is the caller's job (see
/// `TransportController::on_removed` and friends).
#[derive(Debug, Clone)]
pub struct QueueStore {
    tracks: Vec<Track>,
    extension: String,
}

impl QueueStore {
    /// Create an empty queue that accepts files ending in `.{extension}`.
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            tracks: Vec::new(),
            extension: extension.into(),
        }
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// The audio extension this queue accepts, without the dot.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Whether `track`'s file name carries the accepted extension.
    /// Matching is exact and case-sensitive.
    pub fn accepts(&self, track: &Track) -> bool {
        track.extension() == Some(self.extension.as_str())
    }

    /// Replace the whole queue with the audio files among `entries`.
    ///
    /// Input order is preserved. Returns the number of tracks loaded.
    pub fn load_directory<I>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let tracks: Vec<Track> = entries
            .into_iter()
            .filter_map(Track::from_path)
            .filter(|t| self.accepts(t))
            .collect();

        self.tracks = tracks;
        tracing::debug!(count = self.tracks.len(), "queue replaced");
        self.tracks.len()
    }

    /// Insert `track` at a 1-based `position`, shifting later tracks right.
    ///
    /// The position is clamped to `1..=len+1`; `None` appends. Returns the
    /// 0-based slot the track landed in.
    pub fn insert_at(&mut self, track: Track, position: Option<usize>) -> usize {
        let last = self.tracks.len() + 1;
        let position = position.unwrap_or(last).clamp(1, last);
        let slot = position - 1;

        tracing::debug!(track = %track, slot, "queue insert");
        self.tracks.insert(slot, track);
        slot
    }

    /// Remove and return the track at `index`.
    pub fn remove(&mut self, index: usize) -> Result<Track, QueueError> {
        self.check_index(index)?;
        let track = self.tracks.remove(index);
        tracing::debug!(track = %track, index, "queue remove");
        Ok(track)
    }

    /// Take the track at `from` out and put it back at `to`, where `to` is a
    /// position in the sequence left after the removal.
    pub fn move_track(&mut self, from: usize, to: usize) -> Result<(), QueueError> {
        self.check_index(from)?;
        self.check_index(to)?;
        if from == to {
            return Ok(());
        }

        let track = self.tracks.remove(from);
        self.tracks.insert(to, track);
        tracing::debug!(from, to, "queue move");
        Ok(())
    }

    /// Find the 1-based position of the first track named `name`.
    ///
    /// `name` must be given WITHOUT its extension: the lookup compares
    /// `"{name}.{extension}"` against stored file names, so searching for
    /// `"song"` finds `song.mp3` while searching for `"song.mp3"` looks for
    /// `song.mp3.mp3` and misses.
    pub fn find_by_name(&self, name: &str) -> Result<usize, QueueError> {
        let wanted = format!("{}.{}", name, self.extension);
        self.tracks
            .iter()
            .position(|t| t.name == wanted)
            .map(|i| i + 1)
            .ok_or(QueueError::NotFound { name: wanted })
    }

    fn check_index(&self, index: usize) -> Result<(), QueueError> {
        if index < self.tracks.len() {
            Ok(())
        } else {
            Err(QueueError::OutOfRange {
                index,
                len: self.tracks.len(),
            })
        }
    }
}

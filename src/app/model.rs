//! Application model types: `App` and the status line.

use std::fmt::Display;
use std::path::{Path, PathBuf};

use crate::audio::PlaybackBackend;
use crate::config::{LibrarySettings, Settings};
use crate::error::{QueueError, TransportError};
use crate::library::{Track, read_directory};
use crate::queue::QueueStore;
use crate::transport::{Navigation, PlaybackState, TransportController};

use super::prompt::{Prompt, PromptKind};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// One-line message shown under the header until the next one replaces it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Status {
    pub level: StatusLevel,
    pub text: String,
}

/// The main application model.
pub struct App<B: PlaybackBackend> {
    pub queue: QueueStore,
    pub transport: TransportController,
    backend: B,

    /// Cursor row in the queue list.
    pub selected: usize,
    /// Source row of a move that has been started but not completed.
    pub pending_move: Option<usize>,
    pub prompt: Option<Prompt>,
    pub status: Option<Status>,
    pub current_dir: Option<PathBuf>,
    pub guide_window: bool,

    library: LibrarySettings,
    confirm_remove: bool,
}

impl<B: PlaybackBackend> App<B> {
    /// Create an empty `App` playing through `backend`.
    pub fn new(backend: B, settings: &Settings) -> Self {
        Self {
            queue: QueueStore::new(settings.library.extension.clone()),
            transport: TransportController::new(settings.playback.loop_on_start),
            backend,

            selected: 0,
            pending_move: None,
            prompt: None,
            status: None,
            current_dir: None,
            guide_window: false,

            library: settings.library.clone(),
            confirm_remove: settings.ui.confirm_remove,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[cfg(test)]
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Return true if the queue contains any tracks.
    pub fn has_tracks(&self) -> bool {
        !self.queue.is_empty()
    }

    pub fn playback(&self) -> PlaybackState {
        self.transport.state()
    }

    // ---- cursor -------------------------------------------------------

    /// Set the cursor, clamped to the queue.
    pub fn set_selected(&mut self, idx: usize) {
        self.selected = idx.min(self.queue.len().saturating_sub(1));
    }

    /// Move the cursor down one row, wrapping to the top.
    pub fn next_row(&mut self) {
        let len = self.queue.len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    /// Move the cursor up one row, wrapping to the bottom.
    pub fn prev_row(&mut self) {
        let len = self.queue.len();
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.set_selected(self.queue.len().saturating_sub(1));
    }

    pub fn toggle_guide_window(&mut self) {
        self.guide_window = !self.guide_window;
    }

    // ---- status line --------------------------------------------------

    pub fn info(&mut self, text: impl Into<String>) {
        self.status = Some(Status {
            level: StatusLevel::Info,
            text: text.into(),
        });
    }

    pub fn warn(&mut self, text: impl Into<String>) {
        let text = text.into();
        tracing::warn!("{text}");
        self.status = Some(Status {
            level: StatusLevel::Warning,
            text,
        });
    }

    /// Surface an error on the status line and hand back the success value.
    pub fn report<T, E: Display>(&mut self, result: Result<T, E>) -> Option<T> {
        match result {
            Ok(v) => Some(v),
            Err(e) => {
                self.warn(e.to_string());
                None
            }
        }
    }

    // ---- queue operations ---------------------------------------------

    /// Replace the queue with the audio files found directly inside `dir`.
    pub fn load_directory(&mut self, dir: &Path) -> Result<usize, walkdir::Error> {
        let entries = read_directory(dir, &self.library)?;
        let count = self.queue.load_directory(entries);

        self.transport.on_replaced(count, &mut self.backend);
        self.pending_move = None;
        self.selected = 0;
        self.current_dir = Some(dir.to_path_buf());

        tracing::info!(dir = %dir.display(), count, "loaded folder");
        self.info(format!(
            "Loaded {count} .{} track(s) from {}",
            self.queue.extension(),
            dir.display()
        ));
        Ok(count)
    }

    /// Check that `path` names an existing file the queue can hold.
    pub fn track_for_path(&self, path: &Path) -> Result<Track, String> {
        let track = Track::from_path(path)
            .ok_or_else(|| format!("'{}' is not a file name", path.display()))?;
        if !self.queue.accepts(&track) {
            return Err(format!(
                "'{}' is not a .{} file",
                track.name,
                self.queue.extension()
            ));
        }
        if !path.is_file() {
            return Err(format!("'{}' does not exist", path.display()));
        }
        Ok(track)
    }

    /// Insert `track` at 1-based `position` (`None` = end) and select it.
    pub fn insert_track(&mut self, track: Track, position: Option<usize>) -> usize {
        let name = track.name.clone();
        let slot = self.queue.insert_at(track, position);
        self.transport.on_inserted(slot);
        if let Some(from) = self.pending_move {
            if slot <= from {
                self.pending_move = Some(from + 1);
            }
        }
        self.selected = slot;
        self.info(format!("Added '{name}' at position {}", slot + 1));
        slot
    }

    /// Remove the track at `index`, keeping the transport position valid.
    pub fn remove_track(&mut self, index: usize) -> Result<Track, QueueError> {
        let track = self.queue.remove(index)?;
        self.transport
            .on_removed(index, self.queue.len(), &mut self.backend);
        self.pending_move = None;
        self.set_selected(self.selected);
        self.info(format!("Removed '{}'", track.name));
        Ok(track)
    }

    /// Ask for confirmation (if configured) before removing the track at `index`.
    pub fn request_remove(&mut self, index: usize) {
        let Some(track) = self.queue.get(index) else {
            return;
        };
        if self.confirm_remove {
            let name = track.name.clone();
            self.open_prompt(PromptKind::ConfirmRemove { index, name });
        } else {
            let r = self.remove_track(index);
            self.report(r);
        }
    }

    /// First half of a drag: remember which row is being moved.
    pub fn begin_move(&mut self, source: usize) -> Result<(), QueueError> {
        if source >= self.queue.len() {
            return Err(QueueError::OutOfRange {
                index: source,
                len: self.queue.len(),
            });
        }
        self.pending_move = Some(source);
        Ok(())
    }

    /// Second half of a drag: drop the remembered row at `target`.
    ///
    /// Without a matching `begin_move` this does nothing.
    pub fn complete_move(&mut self, target: usize) -> Result<(), QueueError> {
        let Some(source) = self.pending_move.take() else {
            return Ok(());
        };
        self.queue.move_track(source, target)?;
        self.transport.on_moved(source, target);
        self.selected = target;
        Ok(())
    }

    /// Abandon a drag; the queue is left as it was.
    pub fn cancel_move(&mut self) {
        self.pending_move = None;
    }

    /// Look a track up by name (without extension) and select it.
    pub fn find_by_name(&mut self, name: &str) -> Result<usize, QueueError> {
        let position = self.queue.find_by_name(name)?;
        self.selected = position - 1;
        self.info(format!(
            "'{}.{}' is at position {position} in the queue",
            name,
            self.queue.extension()
        ));
        Ok(position)
    }

    // ---- transport ----------------------------------------------------

    /// Play the track under the cursor.
    pub fn play_selected(&mut self) -> Result<(), TransportError> {
        self.transport
            .play(&self.queue, &mut self.backend, Some(self.selected))
    }

    /// The play button: resume when paused, otherwise (re)start the current
    /// track, or the track under the cursor when nothing is current yet.
    pub fn play(&mut self) -> Result<(), TransportError> {
        let index = match (self.transport.state(), self.transport.current()) {
            (PlaybackState::Paused, _) | (_, Some(_)) => None,
            (_, None) if self.has_tracks() => Some(self.selected),
            (_, None) => return Err(TransportError::EmptyQueue),
        };
        self.transport.play(&self.queue, &mut self.backend, index)?;
        self.follow_current();
        Ok(())
    }

    pub fn pause(&mut self) {
        self.transport.pause(&mut self.backend);
    }

    pub fn toggle_play_pause(&mut self) -> Result<(), TransportError> {
        if self.transport.state() == PlaybackState::Playing {
            self.pause();
            Ok(())
        } else {
            self.play()
        }
    }

    pub fn next(&mut self) -> Result<Navigation, TransportError> {
        let nav = self.transport.next(&self.queue, &mut self.backend)?;
        self.follow_current();
        Ok(nav)
    }

    pub fn prev(&mut self) -> Result<Navigation, TransportError> {
        let nav = self.transport.prev(&self.queue, &mut self.backend)?;
        self.follow_current();
        Ok(nav)
    }

    pub fn toggle_loop(&mut self) -> bool {
        let looped = self.transport.toggle_loop();
        self.info(if looped { "Loop: on" } else { "Loop: off" });
        looped
    }

    fn follow_current(&mut self) {
        if let Some(c) = self.transport.current() {
            self.selected = c;
        }
    }

    // ---- prompts ------------------------------------------------------

    pub fn open_prompt(&mut self, kind: PromptKind) {
        self.prompt = Some(Prompt::new(kind));
    }

    pub fn push_prompt_char(&mut self, c: char) {
        if let Some(p) = self.prompt.as_mut() {
            p.input.push(c);
        }
    }

    pub fn pop_prompt_char(&mut self) {
        if let Some(p) = self.prompt.as_mut() {
            p.input.pop();
        }
    }

    /// Submit the typed text of the active prompt.
    pub fn submit_prompt(&mut self) {
        let answer = self.prompt.as_ref().map(|p| p.input.clone());
        self.answer_prompt(answer);
    }

    /// Dismiss the active prompt.
    pub fn cancel_prompt(&mut self) {
        self.answer_prompt(None);
    }

    /// Resolve the active prompt with `answer` (`None` = cancelled).
    pub fn answer_prompt(&mut self, answer: Option<String>) {
        let Some(prompt) = self.prompt.take() else {
            return;
        };

        match prompt.kind {
            PromptKind::OpenFolder => {
                let Some(dir) = answer.filter(|s| !s.trim().is_empty()) else {
                    return;
                };
                let r = self.load_directory(Path::new(dir.trim()));
                self.report(r);
            }
            PromptKind::AddTrack => {
                let Some(path) = answer.filter(|s| !s.trim().is_empty()) else {
                    return;
                };
                match self.track_for_path(Path::new(path.trim())) {
                    Ok(track) => self.open_prompt(PromptKind::Position { track }),
                    Err(msg) => self.warn(msg),
                }
            }
            PromptKind::Position { track } => {
                let text = answer.unwrap_or_default();
                let text = text.trim();
                if text.is_empty() {
                    self.insert_track(track, None);
                    return;
                }
                match text.parse::<usize>() {
                    Ok(position) => {
                        self.insert_track(track, Some(position));
                    }
                    Err(_) => {
                        self.warn(format!("'{text}' is not a position"));
                        self.prompt = Some(Prompt {
                            kind: PromptKind::Position { track },
                            input: String::new(),
                        });
                    }
                }
            }
            PromptKind::Search => {
                let Some(name) = answer else {
                    return;
                };
                let r = self.find_by_name(&name);
                self.report(r);
            }
            PromptKind::ConfirmRemove { index, .. } => {
                let confirmed = answer
                    .map(|a| matches!(a.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
                    .unwrap_or(false);
                if confirmed {
                    let r = self.remove_track(index);
                    self.report(r);
                }
            }
        }
    }
}

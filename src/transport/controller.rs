use crate::audio::PlaybackBackend;
use crate::error::{QueueError, TransportError};
use crate::queue::QueueStore;

/// The playback state of the transport.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Outcome of a `next`/`prev` request.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    /// Playback moved to this queue index.
    Moved(usize),
    /// There was nothing in that direction; nothing changed.
    Stayed,
}

/// Play/pause/navigate state machine over a `QueueStore`.
///
/// Invariants kept by every method:
/// - `current` is `Some(i)` only while `i < queue.len()`;
/// - `state` is `Stopped` whenever the queue is empty.
///
/// The controller holds a position, not a track, so every queue mutation
/// must be reported through one of the `on_*` hooks.
#[derive(Debug, Default)]
pub struct TransportController {
    current: Option<usize>,
    state: PlaybackState,
    looped: bool,
}

impl TransportController {
    pub fn new(looped: bool) -> Self {
        Self {
            looped,
            ..Self::default()
        }
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn looped(&self) -> bool {
        self.looped
    }

    /// Start or resume playback.
    ///
    /// - `Some(i)` loads and plays track `i` from any state.
    /// - `None` while paused resumes without reloading.
    /// - `None` otherwise (re)starts the current track.
    ///
    /// A failed load leaves position and state untouched.
    pub fn play<B>(
        &mut self,
        queue: &QueueStore,
        backend: &mut B,
        index: Option<usize>,
    ) -> Result<(), TransportError>
    where
        B: PlaybackBackend + ?Sized,
    {
        let index = match index {
            Some(i) => i,
            None if self.state == PlaybackState::Paused => {
                backend.unpause();
                self.state = PlaybackState::Playing;
                tracing::info!(index = ?self.current, "resumed");
                return Ok(());
            }
            None => self.current.ok_or(TransportError::NothingSelected)?,
        };
        self.start(queue, backend, index)
    }

    /// Pause if playing. Returns whether anything changed.
    pub fn pause<B>(&mut self, backend: &mut B) -> bool
    where
        B: PlaybackBackend + ?Sized,
    {
        if self.state != PlaybackState::Playing {
            return false;
        }
        backend.pause();
        self.state = PlaybackState::Paused;
        tracing::info!(index = ?self.current, "paused");
        true
    }

    /// Play the track after the current one.
    ///
    /// At the end of the queue, or with no current track, this is a no-op
    /// reported as `Navigation::Stayed`. It never wraps around.
    pub fn next<B>(
        &mut self,
        queue: &QueueStore,
        backend: &mut B,
    ) -> Result<Navigation, TransportError>
    where
        B: PlaybackBackend + ?Sized,
    {
        let target = self.current.map(|c| c + 1);
        self.step_to(queue, backend, target)
    }

    /// Play the track before the current one. Same boundary rules as `next`.
    pub fn prev<B>(
        &mut self,
        queue: &QueueStore,
        backend: &mut B,
    ) -> Result<Navigation, TransportError>
    where
        B: PlaybackBackend + ?Sized,
    {
        let target = self.current.and_then(|c| c.checked_sub(1));
        self.step_to(queue, backend, target)
    }

    /// Flip the loop flag and return the new value. Only later plays are
    /// affected; a track that is already playing keeps its mode.
    pub fn toggle_loop(&mut self) -> bool {
        self.looped = !self.looped;
        tracing::info!(looped = self.looped, "loop toggled");
        self.looped
    }

    /// The queue was replaced wholesale with `len` tracks.
    ///
    /// Playback stops and the first track (if any) becomes current.
    pub fn on_replaced<B>(&mut self, len: usize, backend: &mut B)
    where
        B: PlaybackBackend + ?Sized,
    {
        self.halt(backend);
        self.current = if len > 0 { Some(0) } else { None };
    }

    /// A track was inserted at 0-based `slot`.
    pub fn on_inserted(&mut self, slot: usize) {
        if let Some(c) = self.current {
            if slot <= c {
                self.current = Some(c + 1);
            }
        }
    }

    /// The track at `removed` was taken out, leaving `new_len` tracks.
    ///
    /// Removing the current track keeps the same index when it still
    /// exists (it now names the following track), otherwise falls back to
    /// the new last track. An empty queue clears the position and stops.
    pub fn on_removed<B>(&mut self, removed: usize, new_len: usize, backend: &mut B)
    where
        B: PlaybackBackend + ?Sized,
    {
        if new_len == 0 {
            self.halt(backend);
            self.current = None;
            return;
        }

        let Some(c) = self.current else {
            return;
        };
        if removed < c {
            self.current = Some(c - 1);
        } else if removed == c {
            self.current = Some(c.min(new_len - 1));
        }
    }

    /// The track at `from` was moved to `to`; the position follows the
    /// track it referred to.
    pub fn on_moved(&mut self, from: usize, to: usize) {
        let Some(c) = self.current else {
            return;
        };
        let c = if c == from {
            to
        } else if from < c && c <= to {
            c - 1
        } else if to <= c && c < from {
            c + 1
        } else {
            c
        };
        self.current = Some(c);
    }

    fn step_to<B>(
        &mut self,
        queue: &QueueStore,
        backend: &mut B,
        target: Option<usize>,
    ) -> Result<Navigation, TransportError>
    where
        B: PlaybackBackend + ?Sized,
    {
        match target {
            Some(i) if i < queue.len() => {
                self.start(queue, backend, i)?;
                Ok(Navigation::Moved(i))
            }
            _ => {
                tracing::debug!(current = ?self.current, "navigation at boundary");
                Ok(Navigation::Stayed)
            }
        }
    }

    fn start<B>(
        &mut self,
        queue: &QueueStore,
        backend: &mut B,
        index: usize,
    ) -> Result<(), TransportError>
    where
        B: PlaybackBackend + ?Sized,
    {
        if queue.is_empty() {
            return Err(TransportError::EmptyQueue);
        }
        let track = queue.get(index).ok_or(QueueError::OutOfRange {
            index,
            len: queue.len(),
        })?;

        backend.load(&track.path)?;
        backend.play(self.looped);

        self.current = Some(index);
        self.state = PlaybackState::Playing;
        tracing::info!(track = %track, index, looped = self.looped, "playing");
        Ok(())
    }

    fn halt<B>(&mut self, backend: &mut B)
    where
        B: PlaybackBackend + ?Sized,
    {
        if self.state != PlaybackState::Stopped {
            backend.stop();
            self.state = PlaybackState::Stopped;
            tracing::info!("stopped");
        }
    }
}

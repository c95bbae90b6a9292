use std::path::Path;
use std::sync::Mutex;
use std::sync::mpsc::{self, Sender};
use std::thread::JoinHandle;

use crate::config::AudioSettings;
use crate::error::PlaybackError;

use super::backend::PlaybackBackend;
use super::thread::spawn_audio_thread;
use super::types::AudioCmd;

/// `PlaybackBackend` backed by a `rodio` output stream on its own thread.
pub struct AudioPlayer {
    tx: Sender<AudioCmd>,
    join: Mutex<Option<JoinHandle<()>>>,
    settings: AudioSettings,
}

impl AudioPlayer {
    /// Start the audio thread and wait until the output device is open.
    pub fn new(settings: AudioSettings) -> Result<Self, PlaybackError> {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let (ready_tx, ready_rx) = mpsc::channel();

        let handle = spawn_audio_thread(rx, ready_tx);
        ready_rx.recv().map_err(|_| PlaybackError::Disconnected)??;

        Ok(Self {
            tx,
            join: Mutex::new(Some(handle)),
            settings,
        })
    }

    fn send(&self, cmd: AudioCmd) {
        if self.tx.send(cmd).is_err() {
            tracing::warn!("audio thread has gone away");
        }
    }

    /// Fade out, stop the audio thread and wait for it to finish.
    pub fn quit_softly(&self) {
        self.send(AudioCmd::Quit {
            fade_out_ms: self.settings.quit_fade_out_ms,
        });

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                if h.join().is_err() {
                    tracing::warn!("audio thread panicked");
                }
            }
        }
    }
}

impl PlaybackBackend for AudioPlayer {
    fn load(&mut self, path: &Path) -> Result<(), PlaybackError> {
        let (reply, outcome) = mpsc::channel();
        self.tx
            .send(AudioCmd::Load {
                path: path.to_path_buf(),
                reply,
            })
            .map_err(|_| PlaybackError::Disconnected)?;
        outcome.recv().map_err(|_| PlaybackError::Disconnected)?
    }

    fn play(&mut self, looped: bool) {
        self.send(AudioCmd::Play { looped });
    }

    fn pause(&mut self) {
        self.send(AudioCmd::Pause);
    }

    fn unpause(&mut self) {
        self.send(AudioCmd::Unpause);
    }

    fn stop(&mut self) {
        self.send(AudioCmd::Stop);
    }
}

use std::sync::mpsc::{Receiver, Sender};
use std::thread;
use std::thread::JoinHandle;

use rodio::{OutputStreamBuilder, Sink};

use crate::error::PlaybackError;

use super::sink::{FileSource, fade_out_sink, open_source, start_sink};
use super::types::AudioCmd;

/// Spawn the thread that owns the output stream.
///
/// Whether the output device could be opened is reported once on `ready`
/// before any command is processed.
pub(super) fn spawn_audio_thread(
    rx: Receiver<AudioCmd>,
    ready: Sender<Result<(), PlaybackError>>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut stream = match OutputStreamBuilder::open_default_stream() {
            Ok(stream) => stream,
            Err(e) => {
                let _ = ready.send(Err(PlaybackError::NoOutputDevice(e.to_string())));
                return;
            }
        };
        // rodio logs to stderr when the stream is dropped, which would land on
        // top of the TUI.
        stream.log_on_drop(false);
        let _ = ready.send(Ok(()));

        let mut loaded: Option<FileSource> = None;
        let mut sink: Option<Sink> = None;

        while let Ok(cmd) = rx.recv() {
            match cmd {
                AudioCmd::Load { path, reply } => {
                    let outcome = open_source(&path).map(|source| {
                        loaded = Some(source);
                    });
                    if let Err(e) = &outcome {
                        tracing::warn!(error = %e, "audio load failed");
                    }
                    let _ = reply.send(outcome);
                }
                AudioCmd::Play { looped } => {
                    let Some(source) = loaded.take() else {
                        tracing::debug!("play requested with nothing loaded");
                        continue;
                    };
                    if let Some(old) = sink.take() {
                        old.stop();
                    }
                    sink = Some(start_sink(&stream, source, looped));
                }
                AudioCmd::Pause => {
                    if let Some(s) = sink.as_ref() {
                        s.pause();
                    }
                }
                AudioCmd::Unpause => {
                    if let Some(s) = sink.as_ref() {
                        s.play();
                    }
                }
                AudioCmd::Stop => {
                    if let Some(s) = sink.take() {
                        s.stop();
                    }
                    loaded = None;
                }
                AudioCmd::Quit { fade_out_ms } => {
                    if let Some(s) = sink.take() {
                        if !s.is_paused() {
                            fade_out_sink(&s, fade_out_ms);
                        }
                        s.stop();
                    }
                    break;
                }
            }
        }
    })
}

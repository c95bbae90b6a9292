//! Audio playback.
//!
//! `PlaybackBackend` is the seam the transport drives. `AudioPlayer` is the
//! real implementation: a `rodio` sink owned by a dedicated audio thread
//! that receives `AudioCmd`s over a channel.

mod backend;
mod player;
mod sink;
mod thread;
mod types;

#[cfg(test)]
pub(crate) mod fake;

pub use backend::PlaybackBackend;
pub use player::AudioPlayer;

#[cfg(test)]
mod tests;

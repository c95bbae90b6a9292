//! Playback transport: current position, play/pause state and loop flag.

mod controller;

pub use controller::*;

#[cfg(test)]
mod tests;

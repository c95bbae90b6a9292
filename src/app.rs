//! Application module: the model the terminal runtime drives.
//!
//! `App` owns the queue, the transport and the playback backend, plus the
//! bits of UI state (cursor, active prompt, pending move, status line) the
//! renderer needs.

mod model;
mod prompt;

pub use model::*;
pub use prompt::*;

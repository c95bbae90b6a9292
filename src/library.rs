//! Library module: the `Track` value type and folder listing.
//!
//! Listing a folder only enumerates its entries; deciding which of them
//! become tracks is the queue's job (see `QueueStore::load_directory`).

mod model;
mod scan;

pub use model::*;
pub use scan::*;

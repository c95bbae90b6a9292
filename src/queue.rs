//! The ordered play queue.

mod store;

pub use store::*;

//! The generic search layer: the [`Searchable`] contract a puzzle state
//! exposes, plus the drivers that explore it.

pub mod driver;
pub mod searchable;
pub mod stats;

pub use driver::{best_first, depth_first, SearchStats};
pub use searchable::Searchable;

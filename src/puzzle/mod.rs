//! The puzzle layer: candidate domains, grid geometry, constraint
//! propagation, and the [`Searchable`](crate::search::Searchable) state.

pub mod candidate_set;
pub mod grid;
pub mod propagate;
pub mod state;

pub use candidate_set::CandidateSet;
pub use grid::Grid;
pub use state::PuzzleState;

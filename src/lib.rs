//! Propago is a constraint-propagation search engine for grid-based
//! assignment puzzles (the Sudoku family).
//!
//! The crate is built around a two-layered architecture: a puzzle layer that
//! knows about grids, candidate domains, and the uniqueness constraint, and
//! a generic search layer that explores any state space through the
//! [`Searchable`] contract.
//!
//! # Core Concepts
//!
//! - **[`CandidateSet`]**: a bit-mask domain holding the values still
//!   possible for one cell, with a cached cardinality for O(1) "solved /
//!   open / contradictory" decisions.
//! - **[`Grid`]**: an N×N matrix of candidate sets (N a perfect square)
//!   plus the row/column/box peer geometry. Assigning a value eliminates it
//!   from every peer and cascades further forced assignments until a fixed
//!   point or a [`Contradiction`].
//! - **[`PuzzleState`]**: a grid wrapped as a [`Searchable`] state; its
//!   successors are the contradiction-free branches of the first open cell.
//! - **[`search::driver`]**: depth-first and best-first drivers that consume
//!   any [`Searchable`] and report [`SearchStats`].
//!
//! # Example: solving a 4×4 puzzle
//!
//! ```
//! use propago::puzzle::PuzzleState;
//! use propago::search::{driver, Searchable};
//!
//! // A 4x4 grid has 2x2 boxes. Two givens are enough to start.
//! let start = PuzzleState::new(4, &[((0, 0), 1), ((1, 1), 2)]).unwrap();
//!
//! let (solution, stats) = driver::depth_first(start);
//! let solution = solution.expect("a sparsely constrained 4x4 grid is solvable");
//!
//! assert!(solution.is_terminal());
//! assert!(stats.nodes_visited >= 1);
//!
//! // Terminal states render as pure digits, one row per line.
//! println!("{solution}");
//! ```
//!
//! Contradictory puzzles are rejected while the givens are applied, through
//! the same propagation path the search itself uses:
//!
//! ```
//! use propago::error::Error;
//! use propago::puzzle::PuzzleState;
//!
//! // The same value twice in one row can never be completed.
//! let result = PuzzleState::new(4, &[((0, 0), 3), ((0, 2), 3)]);
//! assert!(matches!(result, Err(Error::Contradiction(_))));
//! ```
//!
//! [`CandidateSet`]: puzzle::CandidateSet
//! [`Grid`]: puzzle::Grid
//! [`PuzzleState`]: puzzle::PuzzleState
//! [`Searchable`]: search::Searchable
//! [`SearchStats`]: search::SearchStats
//! [`Contradiction`]: error::Contradiction
pub mod error;
pub mod puzzle;
pub mod search;

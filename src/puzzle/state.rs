use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    error::Result,
    puzzle::grid::Grid,
    search::searchable::Searchable,
};

/// A grid wrapped as a [`Searchable`] search state.
///
/// Each state owns its grid outright; successor states clone it, so sibling
/// branches share nothing and a discarded branch leaves no trace. A state
/// is *terminal* when every cell is a singleton — constraint validity needs
/// no separate check there, because any branch that violated the uniqueness
/// constraint was already discarded during propagation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleState {
    grid: Grid,
}

impl PuzzleState {
    /// Builds the starting state for a puzzle.
    ///
    /// The givens are applied one by one through the same assignment and
    /// propagation path the search uses, so a contradictory puzzle is
    /// rejected here rather than silently accepted and searched forever.
    pub fn new(size: usize, givens: &[((usize, usize), u8)]) -> Result<Self> {
        let mut grid = Grid::new(size)?;
        for &((row, col), value) in givens {
            grid.assign(row, col, value)?;
        }
        Ok(Self { grid })
    }

    /// The underlying grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    fn branch_with(&self, row: usize, col: usize, value: u8) -> Option<Self> {
        let mut branch = self.grid.clone();
        match branch.force(row, col, value) {
            Ok(()) => Some(Self { grid: branch }),
            Err(contradiction) => {
                trace!(value, %contradiction, "branch discarded");
                None
            }
        }
    }

    /// Like [`Searchable::successors`], with the candidate trials spread
    /// across the rayon pool.
    ///
    /// Each trial owns its clone of the grid, so the trials are independent
    /// and the surviving successors come back in the same ascending
    /// candidate order as the sequential version.
    #[cfg(feature = "parallel")]
    pub fn par_successors(&self) -> Vec<Self> {
        use rayon::prelude::*;

        let Some((row, col)) = self.grid.first_open_cell() else {
            return Vec::new();
        };
        let candidates: Vec<u8> = self.grid.candidates(row, col).iter().collect();
        candidates
            .into_par_iter()
            .filter_map(|value| self.branch_with(row, col, value))
            .collect()
    }
}

impl Searchable for PuzzleState {
    fn is_terminal(&self) -> bool {
        self.grid.is_complete()
    }

    fn successors(&self) -> Vec<Self> {
        let Some((row, col)) = self.grid.first_open_cell() else {
            return Vec::new();
        };
        let candidates = self.grid.candidates(row, col);
        let mut successors = Vec::with_capacity(candidates.len());
        for value in candidates.iter() {
            if let Some(branch) = self.branch_with(row, col, value) {
                successors.push(branch);
            }
        }
        successors
    }

    fn rank(&self) -> u64 {
        // Uninformed baseline: every state ranks equally. Exploration order
        // then comes entirely from the drivers' tie-breaking.
        0
    }

    fn render(&self, sink: &mut dyn fmt::Write) -> fmt::Result {
        for row in 0..self.grid.size() {
            for col in 0..self.grid.size() {
                let domain = self.grid.candidates(row, col);
                match domain.solo() {
                    Some(value) => write!(sink, "{value}")?,
                    // `X` marks an empty domain. It never appears in a
                    // state the search holds; seeing one means a
                    // contradicted branch escaped its discard.
                    None if domain.is_empty() => sink.write_char('X')?,
                    None => sink.write_char('?')?,
                }
            }
            sink.write_char('\n')?;
        }
        Ok(())
    }
}

impl fmt::Display for PuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn rendered(state: &PuzzleState) -> String {
        let mut out = String::new();
        state.render(&mut out).unwrap();
        out
    }

    #[test]
    fn construction_rejects_contradictory_givens() {
        let result = PuzzleState::new(4, &[((0, 0), 1), ((0, 3), 1)]);
        assert!(matches!(
            result,
            Err(crate::error::Error::Contradiction(_))
        ));
    }

    #[test]
    fn successors_branch_on_the_first_open_cell() {
        let state = PuzzleState::new(4, &[((0, 0), 1), ((0, 1), 2)]).unwrap();
        // First open cell is (0, 2) with candidates {3, 4}.
        let successors = state.successors();
        assert_eq!(successors.len(), 2);

        // Candidates are tried in ascending order.
        assert_eq!(successors[0].grid().value(0, 2), Some(3));
        assert_eq!(successors[1].grid().value(0, 2), Some(4));

        // The parent is untouched.
        assert_eq!(state.grid().value(0, 2), None);
    }

    #[test]
    fn successors_never_contain_an_empty_domain() {
        let state = PuzzleState::new(4, &[((0, 0), 1), ((1, 1), 2)]).unwrap();
        let mut frontier = vec![state];
        let mut inspected = 0;
        while let Some(state) = frontier.pop() {
            if inspected > 200 {
                break;
            }
            for successor in state.successors() {
                inspected += 1;
                let grid = successor.grid();
                for row in 0..4 {
                    for col in 0..4 {
                        assert!(!grid.candidates(row, col).is_empty());
                    }
                }
                assert!(!rendered(&successor).contains('X'));
                frontier.push(successor);
            }
        }
        assert!(inspected > 0);
    }

    #[test]
    fn terminal_states_have_no_successors_and_render_as_digits() {
        // Three givens in a row plus propagation solve this row; finish the
        // grid by search to obtain a terminal state.
        let state = PuzzleState::new(4, &[((0, 0), 1), ((0, 1), 2), ((0, 2), 3)]).unwrap();
        let mut current = state;
        while !current.is_terminal() {
            let mut successors = current.successors();
            assert!(!successors.is_empty(), "solvable state hit a dead end");
            current = successors.remove(0);
        }

        assert!(current.successors().is_empty());
        let text = rendered(&current);
        assert_eq!(text.lines().count(), 4);
        assert!(text.chars().all(|c| c.is_ascii_digit() || c == '\n'));
        assert!(text.starts_with("1234\n"));
    }

    #[test]
    fn open_cells_render_as_question_marks() {
        let state = PuzzleState::new(4, &[((0, 0), 1)]).unwrap();
        let text = rendered(&state);
        assert!(text.starts_with('1'));
        assert!(text.contains('?'));
        assert!(!text.contains('X'));
    }

    #[test]
    fn baseline_rank_is_flat() {
        let state = PuzzleState::new(4, &[]).unwrap();
        let successors = state.successors();
        assert!(successors.iter().all(|s| s.rank() == state.rank()));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_successors_match_the_sequential_contract() {
        let state = PuzzleState::new(4, &[((0, 0), 1), ((1, 1), 2)]).unwrap();
        assert_eq!(state.par_successors(), state.successors());
    }
}

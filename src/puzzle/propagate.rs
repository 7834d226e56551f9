//! Constraint propagation over a [`Grid`].
//!
//! Forcing a cell to a single value eliminates that value from every peer.
//! A peer narrowed to a fresh singleton is itself forced, so one assignment
//! can deterministically cascade through the grid. A peer narrowed to the
//! empty domain is a [`Contradiction`]: the whole cascade aborts and the
//! grid, now partially mutated, must be discarded by the caller.

use tracing::{debug, trace};

use crate::{
    error::{Contradiction, Error, Result},
    puzzle::{candidate_set::CandidateSet, grid::Grid},
};

impl Grid {
    /// Assigns `value` to a cell and propagates the consequences.
    ///
    /// This is the range-checked public entry point, used both for the
    /// initial givens of a puzzle and for direct experimentation. Bounds or
    /// value violations are [`Error::OutOfRangeAssignment`] (caller bug);
    /// an emptied peer domain surfaces as [`Error::Contradiction`], after
    /// which the grid must be discarded.
    pub fn assign(&mut self, row: usize, col: usize, value: u8) -> Result<()> {
        if row >= self.size() || col >= self.size() || value == 0 || value as usize > self.size() {
            return Err(Error::OutOfRangeAssignment {
                row,
                col,
                value,
                size: self.size(),
            });
        }
        self.force(row, col, value)?;
        Ok(())
    }

    /// Unchecked assignment used by successor generation, where `value` is
    /// drawn from the cell's live domain and is in range by construction.
    pub(crate) fn force(
        &mut self,
        row: usize,
        col: usize,
        value: u8,
    ) -> Result<(), Contradiction> {
        let index = self.index(row, col);
        self.cells[index] = CandidateSet::singleton(value);
        self.propagate_from(row, col, value)
    }

    /// Eliminates `value` from every peer of `(row, col)` and cascades.
    ///
    /// The cascade runs over an explicit work list of newly forced cells
    /// instead of recursing, which keeps the stack flat on large grids; the
    /// list is popped LIFO so each forced cell's consequences play out
    /// before older ones resume. The fixed point is the same under any
    /// processing order; only which contradiction is reported first can
    /// differ.
    fn propagate_from(&mut self, row: usize, col: usize, value: u8) -> Result<(), Contradiction> {
        let mut forced = vec![(row, col, value)];
        while let Some((row, col, value)) = forced.pop() {
            for (peer_row, peer_col) in self.peers_of(row, col) {
                let index = self.index(peer_row, peer_col);
                let peer = &mut self.cells[index];
                if !peer.contains(value) {
                    continue;
                }
                let was_singleton = peer.len() == 1;
                peer.remove(value);
                if peer.is_empty() {
                    let contradiction = Contradiction {
                        row: peer_row,
                        col: peer_col,
                    };
                    debug!(%contradiction, "propagation aborted");
                    return Err(contradiction);
                }
                if !was_singleton {
                    if let Some(forced_value) = peer.solo() {
                        trace!(
                            row = peer_row,
                            col = peer_col,
                            value = forced_value,
                            "cell forced by elimination"
                        );
                        forced.push((peer_row, peer_col, forced_value));
                    }
                }
            }
        }
        Ok(())
    }
}

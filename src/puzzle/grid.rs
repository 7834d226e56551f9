use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    puzzle::candidate_set::CandidateSet,
};

/// A square matrix of candidate domains plus its peer-group geometry.
///
/// The side length must be a perfect square so the grid divides into
/// `box_size` × `box_size` boxes. Every cell starts with the full domain
/// `{1, ..., size}` and is narrowed exclusively through the assignment and
/// propagation paths in [`propagate`](crate::puzzle::propagate).
///
/// `Clone` produces a deep, independent copy; search branches clone the
/// grid rather than undoing mutations, so sibling branches never alias.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    box_size: usize,
    pub(crate) cells: Vec<CandidateSet>,
}

impl Grid {
    /// Creates a fully open grid.
    ///
    /// Fails with [`Error::InvalidSize`] when `size` is zero, not a perfect
    /// square, or larger than the domain alphabet a [`CandidateSet`] can
    /// hold.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 || size > CandidateSet::MAX_VALUE as usize {
            return Err(Error::InvalidSize(size));
        }
        let box_size = (size as f64).sqrt() as usize;
        if box_size * box_size != size {
            return Err(Error::InvalidSize(size));
        }
        Ok(Self {
            size,
            box_size,
            cells: vec![CandidateSet::full(size as u8); size * size],
        })
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Side length of one box (`sqrt(size)`).
    pub fn box_size(&self) -> usize {
        self.box_size
    }

    /// The determined value of a cell, or `None` while the cell is still
    /// open (or, in a discarded branch, empty).
    pub fn value(&self, row: usize, col: usize) -> Option<u8> {
        self.cells[self.index(row, col)].solo()
    }

    /// A copy of the cell's current domain.
    pub fn candidates(&self, row: usize, col: usize) -> CandidateSet {
        self.cells[self.index(row, col)]
    }

    /// True iff every cell is a singleton.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|cell| cell.len() == 1)
    }

    /// The first cell in row-major order with more than one candidate.
    ///
    /// This is the deterministic branch-point selection: earliest row, then
    /// earliest column. A most-constrained-cell policy would also be sound,
    /// but the fixed order keeps branch exploration reproducible.
    pub fn first_open_cell(&self) -> Option<(usize, usize)> {
        self.cells
            .iter()
            .position(|cell| cell.len() > 1)
            .map(|i| (i / self.size, i % self.size))
    }

    /// The peers of a cell: every other cell in its row, column, or box.
    ///
    /// The order is fixed for a given geometry: row peers, then column
    /// peers, then the remaining box peers, each in index order. The box
    /// loop skips cells sharing the row or column, so the union carries no
    /// duplicates.
    pub fn peers_of(&self, row: usize, col: usize) -> Vec<(usize, usize)> {
        let mut peers = Vec::with_capacity(2 * (self.size - 1) + (self.box_size - 1).pow(2));
        for c in 0..self.size {
            if c != col {
                peers.push((row, c));
            }
        }
        for r in 0..self.size {
            if r != row {
                peers.push((r, col));
            }
        }
        let box_row = row - row % self.box_size;
        let box_col = col - col % self.box_size;
        for r in box_row..box_row + self.box_size {
            for c in box_col..box_col + self.box_size {
                if r != row && c != col {
                    peers.push((r, c));
                }
            }
        }
        peers
    }

    pub(crate) fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }
}

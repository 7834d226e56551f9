pub type Result<T, E = Error> = core::result::Result<T, E>;

/// A cell's domain was driven empty during propagation.
///
/// This is the normal pruning signal of the engine, not a failure: it is
/// raised constantly while exploring a puzzle, and the caller recovers by
/// discarding the grid branch in which it occurred. A grid that produced a
/// `Contradiction` is left partially mutated and must not be reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("domain of cell ({row}, {col}) was driven empty")]
pub struct Contradiction {
    /// Row of the cell whose domain emptied.
    pub row: usize,
    /// Column of the cell whose domain emptied.
    pub col: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested grid size cannot host box peer groups: it is not a
    /// perfect square, is zero, or exceeds the 32-value domain alphabet.
    #[error("grid size {0} is not a supported perfect square")]
    InvalidSize(usize),

    /// An assignment targeted a cell outside the grid or a value outside
    /// `1..=size`. This is a caller programming error and fails loudly
    /// rather than being absorbed into the search.
    #[error("assignment of {value} to ({row}, {col}) is out of range for a {size}x{size} grid")]
    OutOfRangeAssignment {
        row: usize,
        col: usize,
        value: u8,
        size: usize,
    },

    /// The initial givens of a puzzle contradict each other.
    #[error("givens are contradictory: {0}")]
    Contradiction(#[from] Contradiction),
}

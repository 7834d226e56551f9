use std::fmt;

/// The capability contract a puzzle state exposes to a search driver.
///
/// A driver holds a frontier of states, asks each for its successors, and
/// stops when a terminal state surfaces or the frontier runs dry. Drivers
/// never mutate a state they hold; ownership of each produced successor
/// passes to the caller, and sibling states share nothing.
///
/// Implementations must uphold two guarantees the drivers rely on:
///
/// - every state returned by [`successors`](Self::successors) is free of
///   contradictions (internally inconsistent branches are pruned before
///   they are ever returned), and
/// - a terminal state returns no successors.
pub trait Searchable: Sized {
    /// True iff this state is a completed solution.
    fn is_terminal(&self) -> bool;

    /// The contradiction-free branches reachable from this state, in a
    /// deterministic order. An empty result on a non-terminal state means
    /// every branch contradicted: the state is a dead end.
    fn successors(&self) -> Vec<Self>;

    /// Priority signal for best-first exploration; lower ranks are explored
    /// first. The default is flat (uninformed search).
    fn rank(&self) -> u64 {
        0
    }

    /// Serializes the state for diagnostics.
    fn render(&self, sink: &mut dyn fmt::Write) -> fmt::Result;
}

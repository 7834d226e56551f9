//! Drivers that explore a [`Searchable`] state space.
//!
//! Both drivers stop at the first terminal state they pop; cancellation
//! beyond that (deadlines, solution limits) is the caller's job, by simply
//! not calling again.

use std::collections::BinaryHeap;

use tracing::debug;

use crate::search::searchable::Searchable;

/// Counters accumulated over one driver run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchStats {
    /// States popped from the frontier and examined.
    pub nodes_visited: u64,
    /// Successor states produced across all expansions.
    pub successors_generated: u64,
    /// Non-terminal states whose every branch contradicted.
    pub dead_ends: u64,
}

/// Depth-first search with backtracking by exhaustion.
///
/// Successors are explored in the order the state produced them; a dead end
/// simply falls back to the most recent unexplored sibling. Returns the
/// first terminal state found, or `None` once the frontier is exhausted.
pub fn depth_first<S: Searchable>(start: S) -> (Option<S>, SearchStats) {
    let mut stats = SearchStats::default();
    let mut frontier = vec![start];

    while let Some(state) = frontier.pop() {
        stats.nodes_visited += 1;
        if state.is_terminal() {
            debug!(?stats, "terminal state found");
            return (Some(state), stats);
        }
        let successors = state.successors();
        if successors.is_empty() {
            stats.dead_ends += 1;
            continue;
        }
        stats.successors_generated += successors.len() as u64;
        // Reversed so the first successor is popped first.
        frontier.extend(successors.into_iter().rev());
    }

    debug!(?stats, "frontier exhausted");
    (None, stats)
}

/// Best-first search ordered by ascending [`Searchable::rank`].
///
/// Ties are broken toward the most recently pushed state, so the flat
/// baseline rank behaves like depth-first exploration instead of flooding
/// the frontier breadth-first.
pub fn best_first<S: Searchable>(start: S) -> (Option<S>, SearchStats) {
    let mut stats = SearchStats::default();
    let mut sequence = 0u64;
    let mut frontier = BinaryHeap::new();
    frontier.push(Entry {
        rank: start.rank(),
        sequence,
        state: start,
    });

    while let Some(Entry { state, .. }) = frontier.pop() {
        stats.nodes_visited += 1;
        if state.is_terminal() {
            debug!(?stats, "terminal state found");
            return (Some(state), stats);
        }
        let successors = state.successors();
        if successors.is_empty() {
            stats.dead_ends += 1;
            continue;
        }
        stats.successors_generated += successors.len() as u64;
        for successor in successors {
            sequence += 1;
            frontier.push(Entry {
                rank: successor.rank(),
                sequence,
                state: successor,
            });
        }
    }

    debug!(?stats, "frontier exhausted");
    (None, stats)
}

/// Heap entry ordering: lowest rank first, then newest entry first. The
/// state itself takes no part in the ordering.
struct Entry<S> {
    rank: u64,
    sequence: u64,
    state: S,
}

impl<S> PartialEq for Entry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.sequence == other.sequence
    }
}

impl<S> Eq for Entry<S> {}

impl<S> Ord for Entry<S> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .rank
            .cmp(&self.rank)
            .then(self.sequence.cmp(&other.sequence))
    }
}

impl<S> PartialOrd for Entry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // A toy state space: a state is a path of small integers; appending a
    // digit produces a successor. Terminal at a target path, dead end on a
    // poisoned prefix.
    #[derive(Debug, Clone, PartialEq)]
    struct Toy {
        path: Vec<u8>,
        target: &'static [u8],
        poisoned: &'static [u8],
    }

    impl Toy {
        fn new(target: &'static [u8], poisoned: &'static [u8]) -> Self {
            Self {
                path: Vec::new(),
                target,
                poisoned,
            }
        }
    }

    impl Searchable for Toy {
        fn is_terminal(&self) -> bool {
            self.path == self.target
        }

        fn successors(&self) -> Vec<Self> {
            if self.path.len() >= self.target.len() || self.path == self.poisoned {
                return Vec::new();
            }
            (0..2)
                .map(|digit| {
                    let mut path = self.path.clone();
                    path.push(digit);
                    Self {
                        path,
                        target: self.target,
                        poisoned: self.poisoned,
                    }
                })
                .collect()
        }

        fn rank(&self) -> u64 {
            // Prefer longer paths: more of the target is pinned down.
            (self.target.len() - self.path.len()) as u64
        }

        fn render(&self, sink: &mut dyn std::fmt::Write) -> std::fmt::Result {
            write!(sink, "{:?}", self.path)
        }
    }

    #[test]
    fn depth_first_finds_the_target_and_counts_dead_ends() {
        let _ = tracing_subscriber::fmt::try_init();
        let (found, stats) = depth_first(Toy::new(&[1, 0], &[0]));
        assert_eq!(found.unwrap().path, vec![1, 0]);
        // Prefix [0] is poisoned and explored first, so at least one dead end.
        assert!(stats.dead_ends >= 1);
        assert!(stats.nodes_visited >= 3);
    }

    #[test]
    fn depth_first_explores_first_successor_first() {
        let (found, stats) = depth_first(Toy::new(&[0, 0], &[1]));
        assert_eq!(found.unwrap().path, vec![0, 0]);
        // Straight-line descent: root, [0], [0, 0].
        assert_eq!(stats.nodes_visited, 3);
        assert_eq!(stats.dead_ends, 0);
    }

    #[test]
    fn exhausted_frontier_reports_no_solution() {
        // Target unreachable: every successor appends 0 or 1, target wants 7.
        let (found, stats) = depth_first(Toy::new(&[7], &[9]));
        assert_eq!(found, None);
        assert!(stats.dead_ends > 0);
    }

    #[test]
    fn best_first_follows_the_rank_signal() {
        let (found, stats) = best_first(Toy::new(&[1, 1], &[0]));
        assert_eq!(found.unwrap().path, vec![1, 1]);
        assert!(stats.nodes_visited >= 3);
    }

    #[test]
    fn best_first_breaks_rank_ties_toward_newest() {
        // With a flat rank the heap must not degenerate to FIFO; the newest
        // push wins, giving depth-first behaviour on the toy space.
        #[derive(Debug, Clone, PartialEq)]
        struct Flat(Toy);
        impl Searchable for Flat {
            fn is_terminal(&self) -> bool {
                self.0.is_terminal()
            }
            fn successors(&self) -> Vec<Self> {
                self.0.successors().into_iter().map(Flat).collect()
            }
            fn render(&self, sink: &mut dyn std::fmt::Write) -> std::fmt::Result {
                self.0.render(sink)
            }
        }

        // Newest wins each tie, so the walk descends root -> [1] -> [1, 1]
        // without ever revisiting the older frontier entries.
        let (found, stats) = best_first(Flat(Toy::new(&[1, 1], &[9])));
        assert_eq!(found.unwrap().0.path, vec![1, 1]);
        assert_eq!(stats.nodes_visited, 3);
    }
}

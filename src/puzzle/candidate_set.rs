use serde::{Deserialize, Serialize};

/// The set of values still possible for one cell, for values in `1..=32`.
///
/// The representation is a `u32` bit-mask (bit `v - 1` set iff `v` is
/// present) paired with a cached cardinality. The cache is what downstream
/// code reads to decide whether a cell is solved (`len() == 1`), open
/// (`len() > 1`), or contradictory (`is_empty()`), so every mutation path
/// must update mask and cache together. Within one search branch a domain
/// only ever narrows; eliminated values are never reinstated.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateSet {
    mask: u32,
    len: u8,
}

impl CandidateSet {
    /// Largest value the bit-mask can host.
    pub const MAX_VALUE: u8 = 32;

    /// Creates an empty set.
    pub fn new() -> Self {
        Self { mask: 0, len: 0 }
    }

    /// Creates the full domain `{1, ..., n}`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is 0 or greater than [`Self::MAX_VALUE`]. Grid
    /// construction validates sizes before ever reaching this point.
    pub fn full(n: u8) -> Self {
        assert!(
            n >= 1 && n <= Self::MAX_VALUE,
            "domain alphabet must lie in 1..={}",
            Self::MAX_VALUE
        );
        Self {
            mask: if n == 32 { u32::MAX } else { (1 << n) - 1 },
            len: n,
        }
    }

    /// Creates a singleton set `{value}`.
    pub fn singleton(value: u8) -> Self {
        let mut set = Self::new();
        set.insert(value);
        set
    }

    /// Cached cardinality, O(1).
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// True iff no candidate remains.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every candidate.
    pub fn clear(&mut self) {
        self.mask = 0;
        self.len = 0;
    }

    /// Membership test.
    pub fn contains(&self, value: u8) -> bool {
        Self::in_alphabet(value) && self.mask & Self::bit(value) != 0
    }

    /// Adds a candidate. Inserting a value already present is a no-op.
    pub fn insert(&mut self, value: u8) {
        if Self::in_alphabet(value) && !self.contains(value) {
            self.mask |= Self::bit(value);
            self.len += 1;
        }
    }

    /// Eliminates a candidate. Removing an absent value is a no-op.
    pub fn remove(&mut self, value: u8) {
        if self.contains(value) {
            self.mask &= !Self::bit(value);
            self.len -= 1;
        }
    }

    /// The single remaining value, if the set is a singleton.
    pub fn solo(&self) -> Option<u8> {
        if self.len == 1 {
            Some(self.mask.trailing_zeros() as u8 + 1)
        } else {
            None
        }
    }

    /// Iterates the present values in ascending order.
    ///
    /// The iterator is restartable: each call reads the set as it is now.
    pub fn iter(&self) -> Iter {
        Iter { mask: self.mask }
    }

    fn in_alphabet(value: u8) -> bool {
        (1..=Self::MAX_VALUE).contains(&value)
    }

    fn bit(value: u8) -> u32 {
        1 << (value - 1)
    }
}

impl Default for CandidateSet {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CandidateSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<u8> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = u8>>(values: I) -> Self {
        let mut set = Self::new();
        for value in values {
            set.insert(value);
        }
        set
    }
}

impl IntoIterator for CandidateSet {
    type Item = u8;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl IntoIterator for &CandidateSet {
    type Item = u8;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Ascending iterator over the values of a [`CandidateSet`].
#[derive(Debug, Clone)]
pub struct Iter {
    mask: u32,
}

impl Iterator for Iter {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.mask == 0 {
            return None;
        }
        let value = self.mask.trailing_zeros() as u8 + 1;
        // Clear the lowest set bit.
        self.mask &= self.mask - 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.mask.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Iter {}

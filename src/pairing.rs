//! Pairing policies for ranked breeding parents.
//!
//! After truncation selection, parents are paired in ranked order and
//! each pair contributes two children. The policy decides how many pairs
//! a ranked slice yields, which in turn decides whether the population
//! keeps its size across generations.

/// Pairing policy over a ranked parent slice.
///
/// # Examples
///
/// ```
/// use evo_linfit::Pairing;
///
/// assert_eq!(Pairing::Adjacent.pairs(4), vec![(0, 1), (1, 2), (2, 3)]);
/// assert_eq!(Pairing::Circular.pairs(3), vec![(0, 1), (1, 2), (2, 0)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Pairing {
    /// Consecutive ranked parents: `(k, k + 1)` for `k = 0..n − 1`.
    ///
    /// Yields `n − 1` pairs, so a population of size `N` shrinks to
    /// `2·(⌊N/2⌋ − 1)` children per generation and eventually collapses.
    Adjacent,

    /// Wrap-around pairing: `(k, (k + 1) mod n)` for `k = 0..n`.
    ///
    /// Yields `n` pairs, so an even-sized population keeps its size
    /// across generations. The last pair recombines the worst selected
    /// parent with the best.
    Circular,
}

impl Default for Pairing {
    fn default() -> Self {
        Pairing::Circular
    }
}

impl Pairing {
    /// Pair indices into a ranked slice of `n` parents.
    ///
    /// Returns an empty vector when `n < 2`: a lone parent has no mate,
    /// and the caller is expected to produce an empty generation.
    pub fn pairs(&self, n: usize) -> Vec<(usize, usize)> {
        if n < 2 {
            return Vec::new();
        }
        match self {
            Pairing::Adjacent => (1..n).map(|k| (k - 1, k)).collect(),
            Pairing::Circular => (0..n).map(|k| (k, (k + 1) % n)).collect(),
        }
    }
}

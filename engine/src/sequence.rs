//! Sequence definitions for the end-picking game
//!
//! This module defines the immutable number sequence the game is played on,
//! the score type, and the prefix-sum table used for O(1) subrange totals.
//! Sequences are separate from solver state (caches, rows), which each
//! evaluator allocates for the duration of a single solve.

/// Score type for game values and totals.
///
/// Elements are `i32`; accumulating in `i64` keeps any realistic sum exact.
pub type Score = i64;

/// An ordered, non-empty sequence of integers.
///
/// Non-emptiness is guaranteed by construction, so every evaluator can assume
/// `len() >= 1` and that the root subrange `(0, len - 1)` is valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence(Vec<i32>);

impl Sequence {
    /// Create a sequence, returning `None` when `values` is empty
    pub fn new(values: Vec<i32>) -> Option<Self> {
        if values.is_empty() {
            None
        } else {
            Some(Sequence(values))
        }
    }

    /// Wrap values already known to be non-empty
    pub(crate) fn from_nonempty(values: Vec<i32>) -> Self {
        debug_assert!(!values.is_empty(), "sequence must not be empty");
        Sequence(values)
    }

    /// Number of elements (always at least 1)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API symmetry with slices
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Borrow the underlying values
    pub fn values(&self) -> &[i32] {
        &self.0
    }

    /// Sum of every element
    pub fn total(&self) -> Score {
        self.0.iter().map(|&v| v as Score).sum()
    }

    /// Sum of the inclusive subrange `[start, end]`, computed element by element.
    ///
    /// Returns 0 for the empty subrange `start > end`.
    pub fn range_sum(&self, start: usize, end: usize) -> Score {
        if start > end {
            return 0;
        }
        self.0[start..=end].iter().map(|&v| v as Score).sum()
    }
}

/// Prefix sums over a sequence: `prefix[i]` is the sum of the first `i` elements.
///
/// Holds `len + 1` entries so that every inclusive subrange sum is a single
/// subtraction.
#[derive(Debug, Clone)]
pub struct PrefixSums {
    prefix: Vec<Score>,
}

impl PrefixSums {
    pub fn new(sequence: &Sequence) -> Self {
        let mut prefix = Vec::with_capacity(sequence.len() + 1);
        let mut running: Score = 0;
        prefix.push(running);
        for &v in sequence.values() {
            running += v as Score;
            prefix.push(running);
        }
        PrefixSums { prefix }
    }

    /// Sum of the inclusive subrange `[start, end]` in O(1); 0 when `start > end`.
    #[inline]
    pub fn range_sum(&self, start: usize, end: usize) -> Score {
        if start > end {
            return 0;
        }
        self.prefix[end + 1] - self.prefix[start]
    }
}

/// Final scores of both players under optimal play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// Guaranteed score of the player who moves first
    pub first: Score,
    /// Score left to the second player
    pub second: Score,
    /// Sum of the whole sequence (`first + second`)
    pub total: Score,
}

impl Outcome {
    /// Derive both scores from the first player's game value.
    pub fn from_first(sequence: &Sequence, first: Score) -> Self {
        let total = sequence.total();
        Outcome {
            first,
            second: total - first,
            total,
        }
    }
}

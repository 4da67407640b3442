//! Memoized evaluator: subrange cache and top-down traversal
//!
//! Same recurrence as the naive evaluator, but each subrange `(start, end)` is
//! computed at most once and stored in a dense `n × n` table. Subrange totals
//! come from a prefix-sum table, so a solve costs O(n²) time and O(n²) space.
//!
//! Cache entries are `Option<Score>`: absence is tracked separately from the
//! value, so any integer (including `-1`) can be cached.

use crate::sequence::{PrefixSums, Score, Sequence};

/// Dense `n × n` cache of subrange game values, indexed `start * n + end`.
///
/// Only the `start <= end` half is ever written. Owned by a single solve call.
pub struct MemoTable {
    n: usize,
    /// entries[start * n + end]: `None` until that subrange is evaluated
    entries: Vec<Option<Score>>,
}

impl MemoTable {
    /// Allocate a table for a sequence of length `n` with every entry absent.
    pub fn new(n: usize) -> Self {
        MemoTable {
            n,
            entries: vec![None; n * n],
        }
    }

    #[inline]
    fn index(&self, start: usize, end: usize) -> usize {
        debug_assert!(start <= end && end < self.n, "subrange ({}, {}) out of bounds", start, end);
        start * self.n + end
    }

    /// Cached value for `(start, end)`, if it has been computed.
    #[inline]
    pub fn get(&self, start: usize, end: usize) -> Option<Score> {
        self.entries[self.index(start, end)]
    }

    /// Store the value for `(start, end)`.
    #[inline]
    pub fn insert(&mut self, start: usize, end: usize, value: Score) {
        let idx = self.index(start, end);
        self.entries[idx] = Some(value);
    }

    /// Number of subranges evaluated so far.
    pub fn populated(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }
}

/// Guaranteed score of the first player, computed with a per-call cache.
pub fn solve_memoized(sequence: &Sequence) -> Score {
    let n = sequence.len();
    let prefix = PrefixSums::new(sequence);
    let mut memo = MemoTable::new(n);
    value(sequence, &prefix, &mut memo, 0, n - 1)
}

/// Cached game value of `[start, end]`.
fn value(
    sequence: &Sequence,
    prefix: &PrefixSums,
    memo: &mut MemoTable,
    start: usize,
    end: usize,
) -> Score {
    if start > end {
        return 0;
    }
    if let Some(cached) = memo.get(start, end) {
        return cached;
    }

    let best = if start == end {
        sequence.values()[start] as Score
    } else {
        let total = prefix.range_sum(start, end);
        let choose_first = total - value(sequence, prefix, memo, start + 1, end);
        let choose_last = total - value(sequence, prefix, memo, start, end - 1);
        choose_first.max(choose_last)
    };

    memo.insert(start, end, best);
    best
}

//! Naive recursive evaluator
//!
//! Direct expansion of the game-value recurrence with no caching:
//!
//!   value(start, end) = 0                                  if start > end
//!   value(start, end) = total - min(value(start+1, end),
//!                                   value(start, end-1))   otherwise
//!
//! where `total` is the sum of `[start, end]`. Every call re-sums its subrange
//! and re-expands both branches, so the run time is exponential in `n` while
//! the stack depth stays at `n`.

use crate::sequence::{Score, Sequence};

/// Longest sequence the naive evaluator finishes on in reasonable time.
///
/// The call tree has roughly `2^n` nodes and each call re-sums its subrange in
/// O(n), so total work is about `n·2^n`. At `n = 30` a release build takes
/// around 6 s; a debug build takes many times longer. Stack depth is only `n`,
/// so the practical limit is run time, not stack space.
pub const NAIVE_PRACTICAL_LIMIT: usize = 30;

/// Guaranteed score of the first player, computed without memoization.
pub fn solve_naive(sequence: &Sequence) -> Score {
    value(sequence, 0, sequence.len() - 1)
}

/// Game value of the inclusive subrange `[start, end]`.
///
/// `end` is never below `start` when this is entered from `solve_naive`; the
/// width-one case stops the descent so `end - 1` cannot underflow.
fn value(sequence: &Sequence, start: usize, end: usize) -> Score {
    if start > end {
        return 0;
    }
    if start == end {
        return sequence.values()[start] as Score;
    }

    let total = sequence.range_sum(start, end);
    let choose_first = total - value(sequence, start + 1, end);
    let choose_last = total - value(sequence, start, end - 1);
    choose_first.max(choose_last)
}

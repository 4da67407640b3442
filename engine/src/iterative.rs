//! Bottom-up evaluator
//!
//! Evaluates the recurrence over increasing subrange widths instead of
//! recursing. `row[start]` holds the game value of the subrange of the current
//! width beginning at `start`; widening by one reads the two narrower values
//! that share its endpoints:
//!
//!   next[start] = total(start, end) - min(row[start + 1], row[start])
//!
//! with `end = start + width - 1`. One row of `n` values is enough because
//! `row[start]` is read before it is overwritten.

use crate::sequence::{PrefixSums, Score, Sequence};

/// Guaranteed score of the first player, computed without recursion.
pub fn solve_iterative(sequence: &Sequence) -> Score {
    let n = sequence.len();
    let prefix = PrefixSums::new(sequence);

    // Width 1: each element is its own value
    let mut row: Vec<Score> = sequence.values().iter().map(|&v| v as Score).collect();

    for width in 2..=n {
        for start in 0..=(n - width) {
            let end = start + width - 1;
            let total = prefix.range_sum(start, end);
            let choose_first = total - row[start + 1]; // opponent plays [start+1, end]
            let choose_last = total - row[start]; // opponent plays [start, end-1]
            row[start] = choose_first.max(choose_last);
        }
    }

    row[0]
}

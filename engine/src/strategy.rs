//! Strategy selection and batch solving
//!
//! All evaluators share one contract (`&Sequence -> Score`). `Strategy` picks
//! one at run time; `solve_batch` fans independent sequences out over Rayon.
//! Each solve owns its own cache, so the only shared data are the immutable
//! input sequences.

use std::fmt;
use std::str::FromStr;

use rayon::prelude::*;

use crate::iterative::solve_iterative;
use crate::memo::solve_memoized;
use crate::naive::solve_naive;
use crate::sequence::{Outcome, Score, Sequence};

/// Which evaluator to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Exponential recursion, no cache
    Naive,
    /// Top-down recursion with an `n × n` cache
    Memoized,
    /// Bottom-up over subrange widths, one row of state
    Iterative,
}

impl Strategy {
    /// Every strategy, in the order `compare` runs them
    pub const ALL: [Strategy; 3] = [Strategy::Naive, Strategy::Memoized, Strategy::Iterative];

    /// Stable lowercase label
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Naive => "naive",
            Strategy::Memoized => "memoized",
            Strategy::Iterative => "iterative",
        }
    }

    /// Run this strategy on one sequence.
    pub fn solve(self, sequence: &Sequence) -> Score {
        match self {
            Strategy::Naive => solve_naive(sequence),
            Strategy::Memoized => solve_memoized(sequence),
            Strategy::Iterative => solve_iterative(sequence),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown strategy name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStrategy(pub String);

impl fmt::Display for UnknownStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown strategy '{}' (expected naive, memoized or iterative)",
            self.0
        )
    }
}

impl std::error::Error for UnknownStrategy {}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "naive" | "recursive" => Ok(Strategy::Naive),
            "memoized" | "memo" => Ok(Strategy::Memoized),
            "iterative" | "bottom-up" => Ok(Strategy::Iterative),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}

/// Solve one sequence and split the total between both players.
pub fn solve_outcome(strategy: Strategy, sequence: &Sequence) -> Outcome {
    let first = strategy.solve(sequence);
    Outcome::from_first(sequence, first)
}

/// Solve independent sequences in parallel. Results follow input order.
pub fn solve_batch(strategy: Strategy, sequences: &[Sequence]) -> Vec<Score> {
    log::debug!(
        "solving batch of {} sequences with {} strategy",
        sequences.len(),
        strategy
    );
    sequences
        .par_iter()
        .map(|sequence| strategy.solve(sequence))
        .collect()
}

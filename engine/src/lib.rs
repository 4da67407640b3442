//! endpick Engine - Core solver for the end-picking game
//!
//! Two players alternately remove the first or last element of a number
//! sequence and add it to their score. This crate computes the score the first
//! player can guarantee under optimal play by both sides.
//!
//! Evaluators:
//! - `naive`: direct recursion, exponential time
//! - `memo`: top-down recursion with a subrange cache, O(n²)
//! - `iterative`: bottom-up over subrange widths, O(n²) time, O(n) space
//!
//! The engine is pure computation: no file, console or environment access.

pub mod iterative;
pub mod memo;
pub mod naive;
pub mod sample;
pub mod sequence;
pub mod strategy;

pub use iterative::solve_iterative;
pub use memo::{solve_memoized, MemoTable};
pub use naive::{solve_naive, NAIVE_PRACTICAL_LIMIT};
pub use sample::{benchmark_throughput, SequenceSampler};
pub use sequence::{Outcome, PrefixSums, Score, Sequence};
pub use strategy::{solve_batch, solve_outcome, Strategy, UnknownStrategy};

//! Deterministic sequence generation and throughput measurement
//!
//! Used by the `bench` command, the criterion benchmarks and the tests. The
//! generator is a plain LCG so a seed always reproduces the same sequences on
//! every platform.

use std::ops::RangeInclusive;
use std::time::Instant;

use crate::sequence::Sequence;
use crate::strategy::{solve_batch, Strategy};

/// Seed used by `benchmark_throughput`
pub const BENCH_SEED: u64 = 12345;

/// Value range used by `benchmark_throughput`
pub const BENCH_VALUES: RangeInclusive<i32> = -100..=100;

/// Simple LCG producing pseudo-random sequences
pub struct SequenceSampler {
    state: u64,
}

impl SequenceSampler {
    pub fn new(seed: u64) -> Self {
        SequenceSampler { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = (self.state.wrapping_mul(1103515245).wrapping_add(12345)) & 0x7fffffff;
        self.state
    }

    /// Next value in `values` (inclusive on both ends)
    pub fn next_value(&mut self, values: &RangeInclusive<i32>) -> i32 {
        let lo = *values.start() as i64;
        let hi = *values.end() as i64;
        if hi <= lo {
            return lo as i32;
        }
        let span = (hi - lo + 1) as u64;
        (lo + (self.next() % span) as i64) as i32
    }

    /// Sequence of `length` values; `length` is clamped to at least 1.
    pub fn next_sequence(&mut self, length: usize, values: &RangeInclusive<i32>) -> Sequence {
        let values: Vec<i32> = (0..length.max(1)).map(|_| self.next_value(values)).collect();
        Sequence::from_nonempty(values)
    }

    /// `count` sequences of the same length
    pub fn sequences(
        &mut self,
        count: usize,
        length: usize,
        values: &RangeInclusive<i32>,
    ) -> Vec<Sequence> {
        (0..count).map(|_| self.next_sequence(length, values)).collect()
    }
}

/// Solve `sample_size` generated sequences of `length` elements.
///
/// Returns `(solves_per_sec, duration_ms)`.
pub fn benchmark_throughput(strategy: Strategy, sample_size: usize, length: usize) -> (f64, u64) {
    let mut sampler = SequenceSampler::new(BENCH_SEED);
    let sequences = sampler.sequences(sample_size, length, &BENCH_VALUES);

    let start = Instant::now();
    let results = solve_batch(strategy, &sequences);
    let elapsed = start.elapsed();

    let duration_ms = elapsed.as_millis() as u64;
    let secs = elapsed.as_secs_f64();
    let solves_per_sec = if secs > 0.0 {
        results.len() as f64 / secs
    } else {
        f64::INFINITY
    };

    log::info!(
        "{} strategy: {} sequences of length {} in {} ms",
        strategy,
        results.len(),
        length,
        duration_ms
    );

    (solves_per_sec, duration_ms)
}

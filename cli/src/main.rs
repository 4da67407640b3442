//! endpick CLI - Command-line interface for the end-picking solver
//!
//! Loads a sequence from a file, runs the chosen evaluator and reports both
//! players' scores together with the elapsed wall-clock time.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use endpick_engine::{benchmark_throughput, solve_outcome, Sequence, Strategy};
use endpick_input::load_sequence;

/// Default ceiling for the exponential evaluator
const DEFAULT_MAX_NAIVE_LEN: usize = endpick_engine::NAIVE_PRACTICAL_LIMIT;

#[derive(Parser)]
#[command(name = "endpick")]
#[command(version)]
#[command(about = "Optimal first-player score when both players pick from either end")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve one sequence file
    Solve {
        /// File whose first line holds whitespace-separated integers
        file: PathBuf,

        /// Evaluator: naive, memoized or iterative
        #[arg(short, long, default_value = "naive", conflicts_with = "memo")]
        strategy: Strategy,

        /// Shorthand for --strategy memoized
        #[arg(short, long)]
        memo: bool,

        /// Refuse the naive evaluator above this many elements
        #[arg(long, default_value_t = DEFAULT_MAX_NAIVE_LEN)]
        max_naive_len: usize,
    },

    /// Run every evaluator on one file and check that they agree
    Compare {
        /// File whose first line holds whitespace-separated integers
        file: PathBuf,

        /// Skip the naive evaluator above this many elements
        #[arg(long, default_value_t = DEFAULT_MAX_NAIVE_LEN)]
        max_naive_len: usize,
    },

    /// Measure throughput on generated sequences
    Bench {
        /// Evaluator: naive, memoized or iterative
        #[arg(short, long, default_value = "iterative")]
        strategy: Strategy,

        /// Number of sequences to solve
        #[arg(long, default_value_t = 10_000)]
        samples: usize,

        /// Elements per sequence
        #[arg(long, default_value_t = 64)]
        length: usize,

        /// Refuse the naive evaluator above this many elements
        #[arg(long, default_value_t = DEFAULT_MAX_NAIVE_LEN)]
        max_naive_len: usize,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            file,
            strategy,
            memo,
            max_naive_len,
        } => {
            let strategy = if memo { Strategy::Memoized } else { strategy };
            solve(&file, strategy, max_naive_len)
        }
        Commands::Compare {
            file,
            max_naive_len,
        } => compare(&file, max_naive_len),
        Commands::Bench {
            strategy,
            samples,
            length,
            max_naive_len,
        } => bench(strategy, samples, length, max_naive_len),
    }
}

fn load(file: &Path) -> Result<Sequence> {
    load_sequence(file).with_context(|| format!("failed to load sequence from {}", file.display()))
}

/// Naive run time grows as n·2^n; stop before starting an unfinishable run.
fn check_naive_ceiling(strategy: Strategy, length: usize, max_naive_len: usize) -> Result<()> {
    if strategy == Strategy::Naive && length > max_naive_len {
        bail!(
            "sequence has {} elements; the naive evaluator is limited to {} (use another strategy or raise --max-naive-len)",
            length,
            max_naive_len
        );
    }
    Ok(())
}

fn solve(file: &Path, strategy: Strategy, max_naive_len: usize) -> Result<()> {
    let start = Instant::now();
    let sequence = load(file)?;
    check_naive_ceiling(strategy, sequence.len(), max_naive_len)?;

    log::info!("solving {} values with {} strategy", sequence.len(), strategy);
    let outcome = solve_outcome(strategy, &sequence);
    let elapsed = start.elapsed();

    println!("Maximum points for first player ({}): {}", strategy, outcome.first);
    println!("Points left for second player: {}", outcome.second);
    println!("Elapsed time: {} ms", elapsed.as_millis());
    Ok(())
}

fn compare(file: &Path, max_naive_len: usize) -> Result<()> {
    let sequence = load(file)?;
    let mut results = Vec::with_capacity(Strategy::ALL.len());

    for strategy in Strategy::ALL {
        if strategy == Strategy::Naive && sequence.len() > max_naive_len {
            println!(
                "{:>10}: skipped ({} elements > {})",
                strategy,
                sequence.len(),
                max_naive_len
            );
            continue;
        }
        let start = Instant::now();
        let score = strategy.solve(&sequence);
        let elapsed = start.elapsed();
        println!("{:>10}: {} ({} ms)", strategy, score, elapsed.as_millis());
        results.push((strategy, score));
    }

    if let Some(&(reference, expected)) = results.first() {
        for &(strategy, score) in &results[1..] {
            if score != expected {
                bail!(
                    "{} returned {} but {} returned {}",
                    strategy,
                    score,
                    reference,
                    expected
                );
            }
        }
    }
    println!("All evaluators agree.");
    Ok(())
}

fn bench(strategy: Strategy, samples: usize, length: usize, max_naive_len: usize) -> Result<()> {
    check_naive_ceiling(strategy, length, max_naive_len)?;

    println!("Running {} evaluator benchmark...", strategy);
    println!("Sample size: {} sequences of length {}", samples, length);
    let (solves_per_sec, duration_ms) = benchmark_throughput(strategy, samples, length);

    println!("Results:");
    println!("  Duration: {} ms", duration_ms);
    println!("  Throughput: {:.2} solves/sec", solves_per_sec);
    Ok(())
}

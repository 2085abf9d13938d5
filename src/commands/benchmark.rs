//! Benchmark command
//!
//! Auto-plays a round for every word in a list and reports how often the
//! solver survives.

use super::solve::{SolveConfig, solve_word};
use crate::core::SecretWord;
use crate::solver::{Solver, Strategy};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::warn;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub won: usize,
    pub lost: usize,
    pub win_rate: f64,
    pub average_misses: f64,
    /// Misses per round → number of rounds
    pub miss_distribution: HashMap<usize, usize>,
    /// Lost words, alphabetically
    pub lost_words: Vec<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Run benchmark on a set of target words
///
/// Rounds are independent and run in parallel.
pub fn run_benchmark<S: Strategy + Sync>(
    solver: &Solver<S>,
    target_words: &[SecretWord],
    lives: u32,
    show_progress: bool,
) -> BenchmarkResult {
    let start = Instant::now();

    let pb = if show_progress {
        ProgressBar::new(target_words.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let outcomes: Vec<(String, bool, usize)> = target_words
        .par_iter()
        .filter_map(|target| {
            let config = SolveConfig {
                target: target.text().to_string(),
                lives,
            };
            let result = match solve_word(config, solver) {
                Ok(result) => result,
                Err(e) => {
                    warn!(word = target.text(), error = %e, "skipping benchmark word");
                    pb.inc(1);
                    return None;
                }
            };
            pb.inc(1);
            Some((result.target.clone(), result.success(), result.misses()))
        })
        .collect();

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let total_words = outcomes.len();
    let won = outcomes.iter().filter(|(_, success, _)| *success).count();
    let total_misses: usize = outcomes.iter().map(|(_, _, misses)| misses).sum();

    let mut miss_distribution: HashMap<usize, usize> = HashMap::new();
    for (_, _, misses) in &outcomes {
        *miss_distribution.entry(*misses).or_insert(0) += 1;
    }

    let mut lost_words: Vec<String> = outcomes
        .into_iter()
        .filter(|(_, success, _)| !success)
        .map(|(word, _, _)| word)
        .collect();
    lost_words.sort_unstable();

    let ratio = |n: f64| {
        if total_words == 0 {
            0.0
        } else {
            n / total_words as f64
        }
    };

    BenchmarkResult {
        total_words,
        won,
        lost: total_words - won,
        win_rate: ratio(won as f64),
        average_misses: ratio(total_misses as f64),
        miss_distribution,
        lost_words,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

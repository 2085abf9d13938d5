//! Command implementations

pub mod benchmark;
pub mod simple;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use simple::{RoundSummary, SessionStats, play_round, run_session, run_simple};
pub use solve::{SolveConfig, SolveResult, SolveStep, solve_word};

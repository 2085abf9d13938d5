//! Hangman solving algorithms
//!
//! Narrows the word list to the words still consistent with a round and picks
//! the next letter with a pluggable strategy.

pub mod candidates;
mod engine;
pub mod scoring;
pub mod strategy;

pub use engine::{ENGLISH_FREQUENCY_ORDER, Solver};
pub use strategy::{EntropyStrategy, FrequencyStrategy, RandomStrategy, Strategy, StrategyType};

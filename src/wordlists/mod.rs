//! Word lists for Hangman
//!
//! Provides the embedded word list compiled into the binary and loaders for
//! custom lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

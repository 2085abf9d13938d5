//! Core domain types for Hangman
//!
//! The round state machine and its inputs. Nothing here performs I/O, so every
//! rule can be tested by submitting letters directly.

mod config;
mod error;
mod round;
mod word;

pub use config::{DEFAULT_LIVES, GameConfig, MAX_LIVES};
pub use error::GameError;
pub use round::{GuessOutcome, PLACEHOLDER, Round, RoundState, parse_guess};
pub use word::{SecretWord, WordError};

//! Hangman
//!
//! A console word-guessing game: a pure round state machine, a line-based
//! adapter, a terminal UI and a letter-guessing solver.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{GuessOutcome, Round, RoundState, SecretWord};
//!
//! let mut round = Round::new(SecretWord::new("owl").unwrap(), 6).unwrap();
//!
//! assert!(matches!(round.submit_guess('z'), Ok(GuessOutcome::Miss { lives_left: 5, .. })));
//! assert!(matches!(round.submit_guess('z'), Ok(GuessOutcome::AlreadyGuessed { .. })));
//!
//! for letter in ['o', 'w', 'l'] {
//!     round.submit_guess(letter).unwrap();
//! }
//! assert_eq!(round.state(), RoundState::Won);
//! assert_eq!(round.lives(), 5);
//! ```

// Core domain types
pub mod core;

// Gallows drawings and banner
pub mod art;

// Auto-solver
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

//! Formatting utilities for terminal output

use crate::core::{GuessOutcome, MAX_LIVES, Round, RoundState};
use colored::Colorize;

/// Message shown after a letter was accepted
#[must_use]
pub fn outcome_message(outcome: &GuessOutcome) -> String {
    match outcome {
        GuessOutcome::Hit { letter, positions } => {
            let times = if positions.len() == 1 {
                String::new()
            } else {
                format!(" ({} times)", positions.len())
            };
            format!("Good guess, '{letter}' is in the word{times}.")
                .green()
                .to_string()
        }
        GuessOutcome::Miss { letter, .. } => {
            format!("'{letter}' is not in the word. You lose a life.")
                .red()
                .to_string()
        }
        GuessOutcome::AlreadyGuessed { letter } => {
            format!("You've already guessed '{letter}'.").yellow().to_string()
        }
    }
}

/// Final message for a finished round, revealing the word
#[must_use]
pub fn end_message(round: &Round) -> String {
    let word = round.secret().text().to_uppercase();
    match round.state() {
        RoundState::Won => format!("🎉 You win! The word was {word}.")
            .bright_green()
            .bold()
            .to_string(),
        RoundState::Lost => format!("💀 You lose. The word was {word}.")
            .bright_red()
            .bold()
            .to_string(),
        RoundState::InProgress => String::new(),
    }
}

/// Hearts for remaining lives, hollow ones for lost lives
///
/// At most [`MAX_LIVES`] hearts are drawn; the count is always exact.
#[must_use]
pub fn lives_bar(lives: u32, max: u32) -> String {
    let shown = lives.min(MAX_LIVES);
    let lost = max.saturating_sub(lives).min(MAX_LIVES - shown);
    format!(
        "{}{} {lives}/{max}",
        "♥".repeat(shown as usize),
        "♡".repeat(lost as usize)
    )
}

/// Tried letters as a comma-separated list, e.g. `a, e, z`
#[must_use]
pub fn letter_list(letters: &[char]) -> String {
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

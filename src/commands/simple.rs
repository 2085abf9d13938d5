//! Simple interactive CLI mode
//!
//! Line-based game without TUI. The round logic lives in `core::Round`; this
//! module only reads letters and prints outcomes, so it works over any reader
//! and writer pair.

use crate::art::{LOGO, LifeArt};
use crate::core::{GameConfig, GameError, Round, RoundState, parse_guess};
use crate::output::formatters::{end_message, letter_list, lives_bar, outcome_message};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// What happened in one round played through the line adapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    pub word: String,
    /// `InProgress` when input ran out before the round ended
    pub state: RoundState,
    pub lives_left: u32,
    pub guesses: usize,
    pub misses: usize,
}

/// Totals across rounds of one session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionStats {
    pub played: usize,
    pub won: usize,
    pub lost: usize,
}

impl SessionStats {
    fn record(&mut self, summary: &RoundSummary) {
        match summary.state {
            RoundState::Won => {
                self.played += 1;
                self.won += 1;
            }
            RoundState::Lost => {
                self.played += 1;
                self.lost += 1;
            }
            RoundState::InProgress => {}
        }
    }
}

/// Play one round to completion over `reader` and `writer`
///
/// Invalid and repeated input is reported and re-prompted without touching
/// the round. Reaching end of input returns an unfinished summary.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play_round<R: BufRead, W: Write>(
    mut round: Round,
    art: &LifeArt,
    reader: &mut R,
    writer: &mut W,
) -> io::Result<RoundSummary> {
    writeln!(writer, "{}", round.display_string())?;

    let mut line = String::new();
    while !round.is_terminal() {
        write!(writer, "Guess a letter: ")?;
        writer.flush()?;

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            writeln!(writer)?;
            debug!("input closed before round ended");
            break;
        }

        let outcome = match parse_guess(&line).and_then(|c| round.submit_guess(c)) {
            Ok(outcome) => outcome,
            Err(e @ GameError::InvalidInput(_)) => {
                writeln!(writer, "{}", format!("{e}, try again.").yellow())?;
                continue;
            }
            Err(e) => {
                writeln!(writer, "{e}")?;
                break;
            }
        };

        writeln!(writer, "{}", outcome_message(&outcome))?;
        writeln!(writer, "\n{}", round.display_string().bold())?;
        writeln!(
            writer,
            "Lives: {}",
            lives_bar(round.lives(), round.initial_lives())
        )?;
        writeln!(writer, "Tried: {}", letter_list(round.guessed()))?;
        writeln!(
            writer,
            "{}",
            art.stage_for(round.lives(), round.initial_lives())
        )?;
    }

    if round.is_terminal() {
        writeln!(writer, "\n{}", end_message(&round))?;
    }

    Ok(RoundSummary {
        word: round.secret().text().to_string(),
        state: round.state(),
        lives_left: round.lives(),
        guesses: round.guessed().len(),
        misses: round.misses().len(),
    })
}

/// Play rounds until the player declines another one or input ends
///
/// With `reveal` set the secret word is printed up front, which helps when
/// trying out a custom word list.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_session<G: Rng + ?Sized, R: BufRead, W: Write>(
    config: &GameConfig,
    rng: &mut G,
    reveal: bool,
    reader: &mut R,
    writer: &mut W,
) -> Result<SessionStats> {
    let mut stats = SessionStats::default();

    loop {
        let round = Round::start(config, rng)?;

        writeln!(writer, "{}", LOGO.bright_cyan())?;
        if reveal {
            writeln!(
                writer,
                "Pssst, the solution is {}.",
                round.secret().text().bright_black()
            )?;
        }

        let summary = play_round(round, config.life_art(), reader, writer)?;
        stats.record(&summary);

        if summary.state == RoundState::InProgress {
            break;
        }

        write!(writer, "\nPlay again? (yes/no): ")?;
        writer.flush()?;
        let mut answer = String::new();
        if reader.read_line(&mut answer)? == 0 {
            writeln!(writer)?;
            break;
        }
        if !matches!(answer.trim().to_lowercase().as_str(), "yes" | "y") {
            break;
        }
    }

    writeln!(
        writer,
        "\n👋 Thanks for playing! Won {} of {} rounds.\n",
        stats.won, stats.played
    )?;

    Ok(stats)
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if the word list is empty or on I/O failure.
pub fn run_simple<G: Rng + ?Sized>(config: &GameConfig, rng: &mut G, reveal: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut writer = io::stdout().lock();

    run_session(config, rng, reveal, &mut reader, &mut writer).map(|_| ())
}

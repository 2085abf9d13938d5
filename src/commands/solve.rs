//! Word solving command
//!
//! Auto-plays a round on a specific secret word and returns the solution path.

use crate::core::{DEFAULT_LIVES, GameError, GuessOutcome, Round, RoundState, SecretWord};
use crate::solver::{Solver, Strategy};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub lives: u32,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            lives: DEFAULT_LIVES,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub target: String,
    pub state: RoundState,
    pub steps: Vec<SolveStep>,
    pub lives_left: u32,
    pub initial_lives: u32,
}

impl SolveResult {
    #[must_use]
    pub fn success(&self) -> bool {
        self.state == RoundState::Won
    }

    /// Number of letters that missed
    #[must_use]
    pub fn misses(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s.outcome, GuessOutcome::Miss { .. }))
            .count()
    }
}

/// A single guessed letter in the solution
pub struct SolveStep {
    pub letter: char,
    pub outcome: GuessOutcome,
    /// Display state after the guess, e.g. `"_ a _"`
    pub display: String,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a specific word using the given solver and strategy
///
/// The target does not have to be in the solver's word list.
///
/// # Errors
///
/// Returns an error if the target word is invalid or `lives` is outside
/// `1..=MAX_LIVES`.
pub fn solve_word<S: Strategy>(
    config: SolveConfig,
    solver: &Solver<S>,
) -> Result<SolveResult, GameError> {
    let secret = SecretWord::new(&config.target)?;
    let mut round = Round::new(secret, config.lives)?;
    let mut steps: Vec<SolveStep> = Vec::new();

    while let Some(letter) = solver.next_letter(&round) {
        let candidates_before = solver.count_candidates(&round);
        let outcome = round.submit_guess(letter)?;
        let candidates_after = solver.count_candidates(&round);

        steps.push(SolveStep {
            letter,
            outcome,
            display: round.display_string(),
            candidates_before,
            candidates_after,
        });
    }

    Ok(SolveResult {
        target: round.secret().text().to_string(),
        state: round.state(),
        steps,
        lives_left: round.lives(),
        initial_lives: round.initial_lives(),
    })
}

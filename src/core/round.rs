//! A single round of Hangman
//!
//! `Round` is a pure state machine: it never reads input or prints. Adapters
//! feed it letters through [`Round::submit_guess`] and render the outcome.

use super::config::{GameConfig, MAX_LIVES};
use super::error::GameError;
use super::word::SecretWord;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use tracing::{debug, info, trace};

/// Symbol shown for an unrevealed letter position
pub const PLACEHOLDER: char = '_';

/// Round lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundState {
    InProgress,
    Won,
    Lost,
}

impl RoundState {
    /// True for `Won` and `Lost`
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Result of submitting a letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Letter is in the word; `positions` were revealed
    Hit { letter: char, positions: Vec<usize> },
    /// Letter is not in the word; one life was lost
    Miss { letter: char, lives_left: u32 },
    /// Letter was tried before; nothing changed
    AlreadyGuessed { letter: char },
}

impl GuessOutcome {
    /// The normalized letter this outcome refers to
    #[must_use]
    pub const fn letter(&self) -> char {
        match self {
            Self::Hit { letter, .. } | Self::Miss { letter, .. } | Self::AlreadyGuessed { letter } => {
                *letter
            }
        }
    }
}

/// State of one play-through from word selection to WIN/LOSS
#[derive(Debug, Clone)]
pub struct Round {
    secret: SecretWord,
    display: Vec<char>,
    lives: u32,
    initial_lives: u32,
    tried: FxHashSet<char>,
    history: Vec<char>,
    state: RoundState,
}

impl Round {
    /// Start a round on a known secret word
    ///
    /// # Errors
    /// Returns `GameError::NoLives` if `initial_lives` is zero, or
    /// `GameError::TooManyLives` above [`MAX_LIVES`].
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{GuessOutcome, Round, RoundState, SecretWord};
    ///
    /// let mut round = Round::new(SecretWord::new("cat").unwrap(), 6).unwrap();
    /// for letter in ['c', 'a', 't'] {
    ///     assert!(matches!(round.submit_guess(letter), Ok(GuessOutcome::Hit { .. })));
    /// }
    /// assert_eq!(round.display(), &['c', 'a', 't']);
    /// assert_eq!(round.state(), RoundState::Won);
    /// ```
    pub fn new(secret: SecretWord, initial_lives: u32) -> Result<Self, GameError> {
        if initial_lives == 0 {
            return Err(GameError::NoLives);
        }
        if initial_lives > MAX_LIVES {
            return Err(GameError::TooManyLives(initial_lives));
        }

        debug!(length = secret.len(), lives = initial_lives, "round started");
        trace!(secret = secret.text(), "secret word chosen");

        Ok(Self {
            display: vec![PLACEHOLDER; secret.len()],
            secret,
            lives: initial_lives,
            initial_lives,
            tried: FxHashSet::default(),
            history: Vec::new(),
            state: RoundState::InProgress,
        })
    }

    /// Start a round on a word chosen uniformly at random from `word_list`
    ///
    /// # Errors
    /// Returns `GameError::EmptyWordList` if there is nothing to choose from,
    /// or `GameError::NoLives` if `initial_lives` is zero.
    pub fn start_round<R: Rng + ?Sized>(
        word_list: &[SecretWord],
        initial_lives: u32,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let secret = word_list.choose(rng).ok_or(GameError::EmptyWordList)?;
        Self::new(secret.clone(), initial_lives)
    }

    /// Start a round from a game configuration
    ///
    /// # Errors
    /// Same as [`Round::start_round`].
    pub fn start<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Self, GameError> {
        Self::start_round(config.word_list(), config.initial_lives(), rng)
    }

    /// Submit one letter
    ///
    /// Upper-case letters are normalized. A letter that was already tried,
    /// whether it hit or missed, yields `AlreadyGuessed` and costs nothing.
    ///
    /// # Errors
    /// - `GameError::RoundAlreadyOver` once the round is won or lost
    /// - `GameError::InvalidInput` if `letter` is not an ASCII letter
    ///
    /// Neither error changes the round.
    pub fn submit_guess(&mut self, letter: char) -> Result<GuessOutcome, GameError> {
        if self.state.is_terminal() {
            return Err(GameError::RoundAlreadyOver);
        }

        if !letter.is_ascii_alphabetic() {
            return Err(GameError::InvalidInput(letter.to_string()));
        }

        let letter = letter.to_ascii_lowercase();

        if !self.tried.insert(letter) {
            debug!(%letter, "repeated guess");
            return Ok(GuessOutcome::AlreadyGuessed { letter });
        }
        self.history.push(letter);

        let positions = self.secret.positions_of(letter).to_vec();
        let outcome = if positions.is_empty() {
            self.lives = self.lives.saturating_sub(1);
            if self.lives == 0 {
                self.state = RoundState::Lost;
            }
            debug!(%letter, lives = self.lives, "miss");
            GuessOutcome::Miss {
                letter,
                lives_left: self.lives,
            }
        } else {
            for &i in &positions {
                self.display[i] = letter;
            }
            debug!(%letter, revealed = positions.len(), "hit");
            GuessOutcome::Hit { letter, positions }
        };

        if self.is_revealed() {
            self.state = RoundState::Won;
        }

        if self.state.is_terminal() {
            info!(
                state = ?self.state,
                lives = self.lives,
                guesses = self.history.len(),
                "round over"
            );
        }

        Ok(outcome)
    }

    /// True once WON or LOST has been reached
    #[inline]
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Current lifecycle state
    #[inline]
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Display state: one entry per position, revealed letter or `PLACEHOLDER`
    #[inline]
    #[must_use]
    pub fn display(&self) -> &[char] {
        &self.display
    }

    /// Display state joined with spaces, e.g. `"c _ t"`
    #[must_use]
    pub fn display_string(&self) -> String {
        let mut out = String::with_capacity(self.display.len() * 2);
        for (i, ch) in self.display.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(*ch);
        }
        out
    }

    /// True when no placeholder remains
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        !self.display.contains(&PLACEHOLDER)
    }

    #[inline]
    #[must_use]
    pub const fn lives(&self) -> u32 {
        self.lives
    }

    #[inline]
    #[must_use]
    pub const fn initial_lives(&self) -> u32 {
        self.initial_lives
    }

    /// Letters tried so far, in guess order, without repeats
    #[inline]
    #[must_use]
    pub fn guessed(&self) -> &[char] {
        &self.history
    }

    /// Check whether a letter was already tried
    #[inline]
    #[must_use]
    pub fn was_tried(&self, letter: char) -> bool {
        self.tried.contains(&letter.to_ascii_lowercase())
    }

    /// Tried letters that are not in the word, in guess order
    #[must_use]
    pub fn misses(&self) -> Vec<char> {
        self.history
            .iter()
            .copied()
            .filter(|&c| !self.secret.has_letter(c))
            .collect()
    }

    /// The secret word, for revealing at the end of a round
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &SecretWord {
        &self.secret
    }
}

/// Parse a raw input line into a single guessed letter
///
/// Surrounding whitespace is ignored and the letter is lowercased.
///
/// # Errors
/// Returns `GameError::InvalidInput` unless the trimmed input is exactly one
/// ASCII letter.
///
/// # Examples
/// ```
/// use hangman::core::parse_guess;
///
/// assert_eq!(parse_guess(" Q\n"), Ok('q'));
/// assert!(parse_guess("qu").is_err());
/// assert!(parse_guess("7").is_err());
/// ```
pub fn parse_guess(input: &str) -> Result<char, GameError> {
    let trimmed = input.trim();
    let mut chars = trimmed.chars();

    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Ok(c.to_ascii_lowercase()),
        _ => Err(GameError::InvalidInput(trimmed.to_string())),
    }
}

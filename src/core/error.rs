//! Errors raised while configuring or playing a round

use super::config::MAX_LIVES;
use super::word::WordError;
use std::fmt;

/// Error type for round setup and guess submission
///
/// All variants are local to a single round. `EmptyWordList`, `NoLives` and
/// `TooManyLives` prevent a round from starting; `InvalidInput` and
/// `RoundAlreadyOver` leave the round untouched so the caller can re-prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// No word to choose from
    EmptyWordList,
    /// A round needs at least one life
    NoLives,
    /// More lives than there are letters to guess
    TooManyLives(u32),
    /// Guess was not a single alphabetic character
    InvalidInput(String),
    /// Guess submitted after the round reached WON or LOST
    RoundAlreadyOver,
    /// Secret word failed validation
    InvalidWord(WordError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordList => write!(f, "Word list is empty, cannot start a round"),
            Self::NoLives => write!(f, "A round needs at least one life"),
            Self::TooManyLives(lives) => write!(
                f,
                "{lives} lives is too many, a round allows at most {MAX_LIVES}"
            ),
            Self::InvalidInput(input) => {
                write!(f, "'{input}' is not a single letter")
            }
            Self::RoundAlreadyOver => write!(f, "The round is already over"),
            Self::InvalidWord(e) => write!(f, "Invalid secret word: {e}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWord(e) => Some(e),
            _ => None,
        }
    }
}

impl From<WordError> for GameError {
    fn from(e: WordError) -> Self {
        Self::InvalidWord(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            GameError::InvalidInput("ab".to_string()).to_string(),
            "'ab' is not a single letter"
        );
        assert_eq!(
            GameError::RoundAlreadyOver.to_string(),
            "The round is already over"
        );
        assert_eq!(
            GameError::TooManyLives(27).to_string(),
            "27 lives is too many, a round allows at most 26"
        );
        assert_eq!(
            GameError::from(WordError::Empty).to_string(),
            "Invalid secret word: Word must contain at least one letter"
        );
    }

    #[test]
    fn source_chains_word_error() {
        use std::error::Error;

        assert!(GameError::InvalidWord(WordError::NonAscii).source().is_some());
        assert!(GameError::EmptyWordList.source().is_none());
    }
}

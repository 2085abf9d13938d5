//! Game configuration passed into each round

use super::error::GameError;
use super::word::SecretWord;
use crate::art::LifeArt;
use crate::wordlists::WORDS;
use crate::wordlists::loader::words_from_slice;

/// Lives a round starts with unless configured otherwise
pub const DEFAULT_LIVES: u32 = 6;

/// One life per letter of the alphabet; past that no round can be lost
pub const MAX_LIVES: u32 = 26;

/// Everything a round needs from the outside world
#[derive(Debug, Clone)]
pub struct GameConfig {
    word_list: Vec<SecretWord>,
    life_art: LifeArt,
    initial_lives: u32,
}

impl GameConfig {
    /// Create a validated configuration
    ///
    /// # Errors
    /// - `GameError::EmptyWordList` if `word_list` is empty
    /// - `GameError::NoLives` if `initial_lives` is zero
    /// - `GameError::TooManyLives` if `initial_lives` exceeds [`MAX_LIVES`]
    pub fn new(
        word_list: Vec<SecretWord>,
        life_art: LifeArt,
        initial_lives: u32,
    ) -> Result<Self, GameError> {
        if word_list.is_empty() {
            return Err(GameError::EmptyWordList);
        }
        if initial_lives == 0 {
            return Err(GameError::NoLives);
        }
        if initial_lives > MAX_LIVES {
            return Err(GameError::TooManyLives(initial_lives));
        }

        Ok(Self {
            word_list,
            life_art,
            initial_lives,
        })
    }

    #[inline]
    #[must_use]
    pub fn word_list(&self) -> &[SecretWord] {
        &self.word_list
    }

    #[inline]
    #[must_use]
    pub const fn life_art(&self) -> &LifeArt {
        &self.life_art
    }

    #[inline]
    #[must_use]
    pub const fn initial_lives(&self) -> u32 {
        self.initial_lives
    }
}

impl Default for GameConfig {
    /// Embedded word list, default gallows and six lives
    fn default() -> Self {
        Self {
            word_list: words_from_slice(WORDS),
            life_art: LifeArt::default(),
            initial_lives: DEFAULT_LIVES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = GameConfig::default();
        assert_eq!(config.initial_lives(), DEFAULT_LIVES);
        assert_eq!(config.word_list().len(), WORDS.len());
        assert_eq!(config.life_art().max_lives(), DEFAULT_LIVES);
    }

    #[test]
    fn empty_word_list_rejected() {
        let result = GameConfig::new(Vec::new(), LifeArt::default(), 6);
        assert_eq!(result.err(), Some(GameError::EmptyWordList));
    }

    #[test]
    fn zero_lives_rejected() {
        let result = GameConfig::new(words_from_slice(&["cat"]), LifeArt::default(), 0);
        assert_eq!(result.err(), Some(GameError::NoLives));
    }

    #[test]
    fn lives_capped_at_alphabet_size() {
        let words = words_from_slice(&["cat"]);
        assert!(GameConfig::new(words.clone(), LifeArt::default(), MAX_LIVES).is_ok());

        let result = GameConfig::new(words.clone(), LifeArt::default(), MAX_LIVES + 1);
        assert_eq!(result.err(), Some(GameError::TooManyLives(MAX_LIVES + 1)));

        let result = GameConfig::new(words, LifeArt::default(), u32::MAX);
        assert_eq!(result.err(), Some(GameError::TooManyLives(u32::MAX)));
    }

    #[test]
    fn custom_config() {
        let config = GameConfig::new(words_from_slice(&["cat", "dog"]), LifeArt::default(), 3)
            .unwrap();
        assert_eq!(config.word_list().len(), 2);
        assert_eq!(config.initial_lives(), 3);
    }
}

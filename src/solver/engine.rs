//! Main Hangman solver interface

use super::candidates::consistent_words;
use super::strategy::{Strategy, untried_letters};
use crate::core::{Round, SecretWord};

/// English letters from most to least common
///
/// Used when the secret is not in the word list and no candidate remains.
pub const ENGLISH_FREQUENCY_ORDER: &str = "etaoinshrdlcumwfgypbvkjxqz";

/// Main Hangman solver
///
/// Coordinates letter selection using a given strategy over a word list.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    words: &'a [SecretWord],
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver with the given strategy and word list
    pub const fn new(strategy: S, words: &'a [SecretWord]) -> Self {
        Self { strategy, words }
    }

    /// Words from the list that could still be the secret
    pub fn candidates(&self, round: &Round) -> Vec<&'a SecretWord> {
        consistent_words(self.words, round)
    }

    /// Number of words that could still be the secret
    pub fn count_candidates(&self, round: &Round) -> usize {
        self.candidates(round).len()
    }

    /// Get the next letter to guess
    ///
    /// Returns `None` only when the round is over or every letter was tried.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{Round, SecretWord};
    /// use hangman::solver::{FrequencyStrategy, Solver};
    /// use hangman::wordlists::loader::words_from_slice;
    ///
    /// let words = words_from_slice(&["cat", "cot", "cut"]);
    /// let solver = Solver::new(FrequencyStrategy, &words);
    /// let round = Round::new(SecretWord::new("cot").unwrap(), 6).unwrap();
    ///
    /// assert_eq!(solver.next_letter(&round), Some('c'));
    /// ```
    pub fn next_letter(&self, round: &Round) -> Option<char> {
        if round.is_terminal() {
            return None;
        }

        let candidates = self.candidates(round);
        self.strategy
            .select_letter(&candidates, round)
            .or_else(|| {
                ENGLISH_FREQUENCY_ORDER
                    .chars()
                    .find(|&c| !round.was_tried(c))
            })
            .or_else(|| untried_letters(round).next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RoundState;
    use crate::solver::{EntropyStrategy, FrequencyStrategy};
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    fn play_out<S: Strategy>(solver: &Solver<S>, word: &str, lives: u32) -> Round {
        let mut round = Round::new(SecretWord::new(word).unwrap(), lives).unwrap();
        while let Some(letter) = solver.next_letter(&round) {
            round.submit_guess(letter).unwrap();
        }
        round
    }

    #[test]
    fn solves_word_in_list() {
        let words = words_from_slice(WORDS);
        let solver = Solver::new(FrequencyStrategy, &words);

        let round = play_out(&solver, "giraffe", 6);
        assert_eq!(round.state(), RoundState::Won);
    }

    #[test]
    fn entropy_solver_solves_word_in_list() {
        let words = words_from_slice(WORDS);
        let solver = Solver::new(EntropyStrategy, &words);

        let round = play_out(&solver, "octopus", 6);
        assert_eq!(round.state(), RoundState::Won);
    }

    #[test]
    fn word_outside_list_still_terminates() {
        let words = words_from_slice(&["cat", "dog"]);
        let solver = Solver::new(FrequencyStrategy, &words);

        let round = play_out(&solver, "quokka", 26);
        assert!(round.is_terminal());
    }

    #[test]
    fn candidates_shrink_as_letters_are_tried() {
        let words = words_from_slice(&["cat", "cot", "cut", "dog"]);
        let solver = Solver::new(FrequencyStrategy, &words);
        let mut round = Round::new(SecretWord::new("cut").unwrap(), 6).unwrap();

        assert_eq!(solver.count_candidates(&round), 4);
        round.submit_guess('c').unwrap();
        assert_eq!(solver.count_candidates(&round), 3);
        round.submit_guess('o').unwrap();
        assert_eq!(solver.count_candidates(&round), 2);
    }

    #[test]
    fn no_letter_after_round_over() {
        let words = words_from_slice(&["ox"]);
        let solver = Solver::new(FrequencyStrategy, &words);
        let round = play_out(&solver, "ox", 6);

        assert_eq!(round.state(), RoundState::Won);
        assert_eq!(solver.next_letter(&round), None);
    }

    #[test]
    fn frequency_order_covers_alphabet() {
        let mut letters: Vec<char> = ENGLISH_FREQUENCY_ORDER.chars().collect();
        letters.sort_unstable();
        assert_eq!(letters, ('a'..='z').collect::<Vec<_>>());
    }
}

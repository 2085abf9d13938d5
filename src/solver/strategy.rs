//! Letter selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::scoring::{letter_entropy, letter_frequency};
use crate::core::{Round, SecretWord};

/// A strategy for selecting the next letter to guess
pub trait Strategy {
    /// Select the best untried letter given the remaining candidates
    ///
    /// Returns `None` if no untried letter appears in any candidate.
    fn select_letter(&self, candidates: &[&SecretWord], round: &Round) -> Option<char>;
}

/// Letters not yet tried in this round, alphabetically
pub fn untried_letters(round: &Round) -> impl Iterator<Item = char> + '_ {
    ('a'..='z').filter(|&c| !round.was_tried(c))
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Most common letter among candidates (default)
    Frequency(FrequencyStrategy),
    /// Letter with the most informative reveal pattern
    Entropy(EntropyStrategy),
    /// Random letter that appears in some candidate
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_letter(&self, candidates: &[&SecretWord], round: &Round) -> Option<char> {
        match self {
            Self::Frequency(s) => s.select_letter(candidates, round),
            Self::Entropy(s) => s.select_letter(candidates, round),
            Self::Random(s) => s.select_letter(candidates, round),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "frequency", "entropy", "random".
    /// Defaults to frequency if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "entropy" => Self::Entropy(EntropyStrategy),
            "random" => Self::Random(RandomStrategy),
            _ => Self::Frequency(FrequencyStrategy),
        }
    }

    /// Canonical name of the strategy
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Frequency(_) => "frequency",
            Self::Entropy(_) => "entropy",
            Self::Random(_) => "random",
        }
    }
}

/// Frequency strategy
///
/// Picks the letter contained in the most candidates. Ties go to the
/// alphabetically first letter.
pub struct FrequencyStrategy;

impl Strategy for FrequencyStrategy {
    fn select_letter(&self, candidates: &[&SecretWord], round: &Round) -> Option<char> {
        let mut best: Option<(char, usize)> = None;

        for letter in untried_letters(round) {
            let count = letter_frequency(letter, candidates);
            if count > 0 && best.is_none_or(|(_, c)| count > c) {
                best = Some((letter, count));
            }
        }

        best.map(|(letter, _)| letter)
    }
}

/// Pure entropy maximization strategy
///
/// Picks the letter whose reveal pattern splits the candidates most evenly.
/// Near-equal entropies fall back to frequency, which matters once a single
/// candidate remains and every letter carries zero information.
pub struct EntropyStrategy;

impl Strategy for EntropyStrategy {
    fn select_letter(&self, candidates: &[&SecretWord], round: &Round) -> Option<char> {
        const EPSILON: f64 = 1e-9;
        let mut best: Option<(char, f64, usize)> = None;

        for letter in untried_letters(round) {
            let count = letter_frequency(letter, candidates);
            if count == 0 {
                continue;
            }
            let entropy = letter_entropy(letter, candidates);

            let better = match best {
                None => true,
                Some((_, best_entropy, best_count)) => {
                    entropy > best_entropy + EPSILON
                        || ((entropy - best_entropy).abs() <= EPSILON && count > best_count)
                }
            };
            if better {
                best = Some((letter, entropy, count));
            }
        }

        best.map(|(letter, _, _)| letter)
    }
}

/// Random strategy
///
/// Randomly selects among untried letters present in at least one candidate.
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_letter(&self, candidates: &[&SecretWord], round: &Round) -> Option<char> {
        use rand::prelude::IndexedRandom;

        let useful: Vec<char> = untried_letters(round)
            .filter(|&c| candidates.iter().any(|w| w.has_letter(c)))
            .collect();

        useful.choose(&mut rand::rng()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn fresh(word: &str) -> Round {
        Round::new(SecretWord::new(word).unwrap(), 6).unwrap()
    }

    #[test]
    fn frequency_picks_most_common_letter() {
        let words = words_from_slice(&["cat", "bat", "rat", "dog"]);
        let refs: Vec<&SecretWord> = words.iter().collect();

        // 'a' and 't' both appear in three words, 'a' wins the tie
        assert_eq!(
            FrequencyStrategy.select_letter(&refs, &fresh("cat")),
            Some('a')
        );
    }

    #[test]
    fn frequency_skips_tried_letters() {
        let words = words_from_slice(&["cat", "bat", "rat", "dog"]);
        let refs: Vec<&SecretWord> = words.iter().collect();
        let mut round = fresh("cat");
        round.submit_guess('a').unwrap();

        assert_eq!(FrequencyStrategy.select_letter(&refs, &round), Some('t'));
    }

    #[test]
    fn no_candidates_yields_none() {
        let round = fresh("cat");
        assert_eq!(FrequencyStrategy.select_letter(&[], &round), None);
        assert_eq!(EntropyStrategy.select_letter(&[], &round), None);
        assert_eq!(RandomStrategy.select_letter(&[], &round), None);
    }

    #[test]
    fn entropy_prefers_splitting_letter() {
        // 'a' is in every word at the same spot: no information
        let words = words_from_slice(&["cat", "bat", "cab", "bar"]);
        let refs: Vec<&SecretWord> = words.iter().collect();

        let letter = EntropyStrategy.select_letter(&refs, &fresh("cat")).unwrap();
        assert_ne!(letter, 'a');
    }

    #[test]
    fn entropy_with_single_candidate_picks_its_letter() {
        let words = words_from_slice(&["yak"]);
        let refs: Vec<&SecretWord> = words.iter().collect();

        let letter = EntropyStrategy.select_letter(&refs, &fresh("yak")).unwrap();
        assert!(words[0].has_letter(letter));
    }

    #[test]
    fn random_picks_useful_letter() {
        let words = words_from_slice(&["ox"]);
        let refs: Vec<&SecretWord> = words.iter().collect();

        for _ in 0..10 {
            let letter = RandomStrategy.select_letter(&refs, &fresh("ox")).unwrap();
            assert!(letter == 'o' || letter == 'x');
        }
    }

    #[test]
    fn strategy_from_name() {
        assert_eq!(StrategyType::from_name("entropy").name(), "entropy");
        assert_eq!(StrategyType::from_name("random").name(), "random");
        assert_eq!(StrategyType::from_name("frequency").name(), "frequency");
        assert_eq!(StrategyType::from_name("bogus").name(), "frequency");
    }
}

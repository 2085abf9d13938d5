//! Letter scoring against the remaining candidates
//!
//! Guessing a letter splits the candidates by where that letter would appear
//! (no positions at all being one of the outcomes). The spread of that split
//! is measured with Shannon entropy.

use crate::core::SecretWord;
use rustc_hash::FxHashMap;

/// Metrics for evaluating a letter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterMetrics {
    pub letter: char,
    /// Number of candidates containing the letter
    pub frequency: usize,
    /// Share of candidates containing the letter (0.0 - 1.0)
    pub hit_probability: f64,
    /// Expected information gain in bits
    pub entropy: f64,
    /// Largest group of candidates sharing one outcome
    pub max_partition: usize,
}

/// Number of candidates containing `letter`
#[must_use]
pub fn letter_frequency(letter: char, candidates: &[&SecretWord]) -> usize {
    candidates.iter().filter(|w| w.has_letter(letter)).count()
}

/// Group candidates by the positions `letter` would reveal
fn group_by_positions<'a>(
    letter: char,
    candidates: &[&'a SecretWord],
) -> FxHashMap<&'a [usize], usize> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        *counts.entry(candidate.positions_of(letter)).or_insert(0) += 1;
    }

    counts
}

/// Calculate Shannon entropy from an outcome distribution
///
/// H = -Σ p * log₂(p)
///
/// # Examples
/// ```
/// use hangman::solver::scoring::shannon_entropy;
///
/// let entropy = shannon_entropy([25, 25, 25, 25]);
/// assert!((entropy - 2.0).abs() < 0.001);
/// assert_eq!(shannon_entropy([10]), 0.0);
/// ```
#[must_use]
pub fn shannon_entropy<I>(counts: I) -> f64
where
    I: IntoIterator<Item = usize>,
    I::IntoIter: Clone,
{
    let iter = counts.into_iter();
    let total = iter.clone().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    let entropy: f64 = iter
        .filter(|&count| count > 0)
        .map(|count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum();

    // -0.0 for a single certain outcome
    entropy.max(0.0)
}

/// Expected information gain from guessing `letter`
#[must_use]
pub fn letter_entropy(letter: char, candidates: &[&SecretWord]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }
    shannon_entropy(group_by_positions(letter, candidates).into_values().collect::<Vec<_>>())
}

/// Calculate all metrics for a letter
#[must_use]
pub fn calculate_metrics(letter: char, candidates: &[&SecretWord]) -> LetterMetrics {
    if candidates.is_empty() {
        return LetterMetrics {
            letter,
            frequency: 0,
            hit_probability: 0.0,
            entropy: 0.0,
            max_partition: 0,
        };
    }

    let groups = group_by_positions(letter, candidates);
    let sizes: Vec<usize> = groups.into_values().collect();
    let frequency = letter_frequency(letter, candidates);

    LetterMetrics {
        letter,
        frequency,
        hit_probability: frequency as f64 / candidates.len() as f64,
        entropy: shannon_entropy(sizes.iter().copied()),
        max_partition: sizes.iter().copied().max().unwrap_or(0),
    }
}

//! Candidate filtering
//!
//! A word is still possible when it agrees with every revealed position and
//! none of its hidden positions holds a letter that was already tried.

use crate::core::{PLACEHOLDER, Round, SecretWord};

/// Check a single word against the round's revealed letters and tries
#[must_use]
pub fn is_consistent(word: &SecretWord, round: &Round) -> bool {
    let display = round.display();

    if word.len() != display.len() {
        return false;
    }

    word.letters()
        .iter()
        .zip(display)
        .all(|(&actual, &shown)| {
            if shown == PLACEHOLDER {
                // A tried letter would have been revealed here
                !round.was_tried(actual)
            } else {
                actual == shown
            }
        })
}

/// All words from `words` that could still be the secret
#[must_use]
pub fn consistent_words<'a>(words: &'a [SecretWord], round: &Round) -> Vec<&'a SecretWord> {
    words.iter().filter(|w| is_consistent(w, round)).collect()
}

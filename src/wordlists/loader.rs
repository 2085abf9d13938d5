//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::SecretWord;
use std::fs;
use std::io;
use std::path::Path;
use tracing::warn;

/// Load words from a file
///
/// One word per line. Blank lines are ignored; entries that are not plain
/// letters are skipped with a warning.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<SecretWord>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_word_lines(&content))
}

/// Parse newline-separated words, skipping blanks and invalid entries
#[must_use]
pub fn parse_word_lines(content: &str) -> Vec<SecretWord> {
    content
        .lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match SecretWord::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    warn!(line = i + 1, entry = trimmed, error = %e, "skipping word list entry");
                    None
                }
            }
        })
        .collect()
}

/// Convert embedded string slice to `SecretWord` vector
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::words_from_slice;
/// use hangman::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<SecretWord> {
    slice
        .iter()
        .filter_map(|&s| SecretWord::new(s).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["cat", "Giraffe", "ox"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "cat");
        assert_eq!(words[1].text(), "giraffe");
        assert_eq!(words[2].text(), "ox");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["cat", "sea lion", "", "t-rex", "owl"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "cat");
        assert_eq!(words[1].text(), "owl");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn parse_word_lines_trims_and_skips() {
        let words = parse_word_lines("  koala \n\n emu\nkiwi2\r\nnewt\n");
        let texts: Vec<&str> = words.iter().map(SecretWord::text).collect();
        assert_eq!(texts, vec!["koala", "emu", "newt"]);
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("/definitely/not/here/words.txt").is_err());
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir().join(format!("hangman-words-{}.txt", std::process::id()));
        fs::write(&path, "heron\nibis\n\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "ibis");
    }

    #[test]
    fn load_from_embedded_words() {
        use crate::wordlists::WORDS;

        let words = words_from_slice(WORDS);
        assert_eq!(words.len(), WORDS.len());
    }
}

//! Word list loading utilities
//!
//! Provides functions to load word pools from files or the embedded
//! constant, filtered to the configured word length.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words of the given length from a file
///
/// Returns a vector of valid Word instances, skipping blank lines, invalid
/// entries, and words of a different length.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use rabble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, word_length: usize) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .filter(|word| word.len() == word_length)
        .collect();

    Ok(words)
}

/// Convert a string slice to a Word pool of the given length
///
/// # Examples
/// ```
/// use rabble::wordlists::loader::words_from_slice;
/// use rabble::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS, 5);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], word_length: usize) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|&s| Word::new(s).ok())
        .filter(|word| word.len() == word_length)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_filters_by_length() {
        let input = &["crane", "bigger", "abc", "slate"];

        let five = words_from_slice(input, 5);
        assert_eq!(five.len(), 2);
        assert_eq!(five[0].text(), "crane");
        assert_eq!(five[1].text(), "slate");

        let six = words_from_slice(input, 6);
        assert_eq!(six.len(), 1);
        assert_eq!(six[0].text(), "bigger");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "cra_e", "sl8te", "slate"];
        let words = words_from_slice(input, 5);

        assert_eq!(words.len(), 2);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input, 5).is_empty());
    }

    #[test]
    fn embedded_words_all_load_at_length_five() {
        use crate::wordlists::WORDS;

        let words = words_from_slice(WORDS, 5);
        assert_eq!(words.len(), WORDS.len());
    }
}

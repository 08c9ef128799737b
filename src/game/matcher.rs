//! Letter matching
//!
//! Scores one guess against the solution, one verdict per position, with
//! Wordle's duplicate-letter rules: exact-position matches claim their share
//! of the solution's letters first, then misplaced letters compete
//! left-to-right for whatever occurrences remain.

use crate::core::{ScoreRow, Verdict, Word};
use std::fmt;

/// How a size mismatch between guess and solution is treated
///
/// The mode is a caller decision: submissions are scored `Strict`, text that
/// is still being typed is scored `Lenient` so a partial row stays
/// renderable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Guess length must equal solution length, else the match fails
    Strict,
    /// A short guess is padded with blanks scored `Empty`; an over-long
    /// guess is truncated to solution length
    Lenient,
}

/// Error type for failed matches
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, actual } => {
                write!(f, "Guess must be exactly {expected} letters, got {actual}")
            }
        }
    }
}

impl std::error::Error for MatchError {}

/// Score `guess` against `solution`
///
/// Two passes over the guess positions, left to right, sharing a
/// remaining-count multiset of the solution's letters that is rebuilt fresh
/// on every call:
///
/// 1. Correct pass: exact-position matches become `Correct` and decrement
///    their letter's remaining count; everything else is provisionally
///    `Absent` (`Empty` for a lenient blank).
/// 2. Present pass: positions not already `Correct` become `Present` while
///    their letter still has remaining count, decrementing it.
///
/// Ties between duplicate non-correct positions resolve to the lower index.
///
/// # Errors
/// In `Strict` mode, returns `MatchError::LengthMismatch` when the guess
/// length differs from the solution length. `Lenient` mode never fails.
///
/// # Examples
/// ```
/// use rabble::core::{Verdict, Word};
/// use rabble::game::{score, MatchMode};
///
/// let solution = Word::new("ssa").unwrap();
/// let row = score(&solution, "sam", MatchMode::Strict).unwrap();
/// assert_eq!(row, vec![Verdict::Correct, Verdict::Present, Verdict::Absent]);
/// ```
pub fn score(solution: &Word, guess: &str, mode: MatchMode) -> Result<ScoreRow, MatchError> {
    let expected = solution.len();
    let guess = guess.to_lowercase();

    if mode == MatchMode::Strict && guess.len() != expected {
        return Err(MatchError::LengthMismatch {
            expected,
            actual: guess.len(),
        });
    }

    let guess_bytes = guess.as_bytes();
    let solution_bytes = solution.bytes();
    let mut remaining = solution.letter_counts();
    let mut row = vec![Verdict::Empty; expected];

    // Correct pass: exact matches claim their multiset share first
    // Allow: index needed to compare guess[i] with solution[i] and set row[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..expected {
        match guess_bytes.get(i) {
            Some(&ch) if ch == solution_bytes[i] => {
                row[i] = Verdict::Correct;
                if let Some(count) = remaining.get_mut(&ch) {
                    *count = count.saturating_sub(1);
                }
            }
            Some(_) => row[i] = Verdict::Absent,
            None => row[i] = Verdict::Empty, // lenient blank
        }
    }

    // Present pass: unresolved positions compete for the remaining counts.
    // Blanks stay Empty; they never consume an occurrence.
    #[allow(clippy::needless_range_loop)]
    for i in 0..expected {
        if row[i] == Verdict::Absent {
            let ch = guess_bytes[i];
            if let Some(count) = remaining.get_mut(&ch)
                && *count > 0
            {
                row[i] = Verdict::Present;
                *count -= 1;
            }
        }
    }

    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Verdict::{Absent, Correct, Empty, Present};

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn row_length_equals_solution_length() {
        for (solution, guess) in [("a", "b"), ("abc", "cab"), ("crane", "slate")] {
            let row = score(&word(solution), guess, MatchMode::Strict).unwrap();
            assert_eq!(row.len(), solution.len());
        }
    }

    #[test]
    fn identity_is_all_correct() {
        for text in ["a", "eli", "crane", "aaaaa"] {
            let row = score(&word(text), text, MatchMode::Strict).unwrap();
            assert!(row.iter().all(|&v| v == Correct));
        }
    }

    #[test]
    fn disjoint_alphabets_all_absent() {
        let row = score(&word("abc"), "xyz", MatchMode::Strict).unwrap();
        assert_eq!(row, vec![Absent, Absent, Absent]);
    }

    #[test]
    fn anagram_no_shared_position_all_present() {
        let row = score(&word("eli"), "lie", MatchMode::Strict).unwrap();
        assert_eq!(row, vec![Present, Present, Present]);
    }

    #[test]
    fn duplicate_in_solution_single_in_guess() {
        let row = score(&word("ssa"), "sam", MatchMode::Strict).unwrap();
        assert_eq!(row, vec![Correct, Present, Absent]);
    }

    #[test]
    fn duplicate_in_guess_correct_claims_first() {
        // One 's' in the solution; the exact-position match takes it, the
        // other two get nothing
        let row = score(&word("sam"), "sss", MatchMode::Strict).unwrap();
        assert_eq!(row, vec![Correct, Absent, Absent]);

        let row = score(&word("sam"), "aaa", MatchMode::Strict).unwrap();
        assert_eq!(row, vec![Absent, Correct, Absent]);
    }

    #[test]
    fn duplicate_present_letters_credited_while_supply_lasts() {
        let row = score(&word("ssam"), "mass", MatchMode::Strict).unwrap();
        assert_eq!(row, vec![Present, Present, Present, Present]);
    }

    #[test]
    fn duplicate_present_ties_resolve_to_lower_index() {
        // Solution has one 'a'; both guess 'a's are misplaced, the first
        // one gets the credit
        let row = score(&word("dab"), "aca", MatchMode::Strict).unwrap();
        assert_eq!(row, vec![Present, Absent, Absent]);
    }

    #[test]
    fn lenient_short_guess_pads_with_empty() {
        let row = score(&word("bigger"), "big", MatchMode::Lenient).unwrap();
        assert_eq!(row, vec![Correct, Correct, Correct, Empty, Empty, Empty]);
    }

    #[test]
    fn lenient_empty_guess_all_empty() {
        let row = score(&word("abc"), "", MatchMode::Lenient).unwrap();
        assert_eq!(row, vec![Empty, Empty, Empty]);
    }

    #[test]
    fn lenient_over_long_guess_truncates() {
        let row = score(&word("big"), "bigger", MatchMode::Lenient).unwrap();
        assert_eq!(row, vec![Correct, Correct, Correct]);
    }

    #[test]
    fn lenient_blank_does_not_consume_remaining_count() {
        // 'a' remains available to the typed positions even though the
        // solution is longer than the guess
        let row = score(&word("dba"), "ad", MatchMode::Lenient).unwrap();
        assert_eq!(row, vec![Present, Present, Empty]);
    }

    #[test]
    fn strict_size_mismatch_fails() {
        let err = score(&word("small"), "big", MatchMode::Strict).unwrap_err();
        assert_eq!(
            err,
            MatchError::LengthMismatch {
                expected: 5,
                actual: 3
            }
        );
    }

    #[test]
    fn guess_is_case_insensitive() {
        let row = score(&word("crane"), "CRANE", MatchMode::Strict).unwrap();
        assert!(row.iter().all(|&v| v == Correct));
    }

    #[test]
    fn repeated_calls_are_pure() {
        // The remaining-count map is rebuilt per call; results never drift
        let solution = word("ssam");
        let first = score(&solution, "mass", MatchMode::Strict).unwrap();
        let second = score(&solution, "mass", MatchMode::Strict).unwrap();
        assert_eq!(first, second);
    }
}

//! Per-letter verdicts for a scored guess
//!
//! Each position of a guess is classified as one of four states. The derived
//! ordering (`Correct > Present > Absent > Empty`) is what lets two scoring
//! passes be combined by taking the higher-ranked verdict per position.

use std::fmt;

/// Classification of a single letter position in a guess
///
/// `Empty` marks a position that has not been filled in yet; it only appears
/// while a guess is partially typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verdict {
    /// Position not yet filled in (partially typed guess)
    Empty,
    /// Letter does not occur in the solution (or its occurrences are used up)
    Absent,
    /// Letter occurs in the solution at a different position
    Present,
    /// Letter matches the solution at this exact position
    Correct,
}

/// Verdicts for one guess, one per letter position
///
/// Length always equals the solution's word length.
pub type ScoreRow = Vec<Verdict>;

impl Verdict {
    /// Single-character tag used in compact debug output
    #[must_use]
    pub const fn tag(self) -> char {
        match self {
            Self::Correct => 'C',
            Self::Present => 'P',
            Self::Absent => 'A',
            Self::Empty => '.',
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Check whether a row is a winning row (every position `Correct`)
///
/// An empty row is not a win.
#[must_use]
pub fn is_winning_row(row: &[Verdict]) -> bool {
    !row.is_empty() && row.iter().all(|&v| v == Verdict::Correct)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_ordering_ranks_correct_highest() {
        assert!(Verdict::Correct > Verdict::Present);
        assert!(Verdict::Present > Verdict::Absent);
        assert!(Verdict::Absent > Verdict::Empty);
    }

    #[test]
    fn verdict_max_combines_passes() {
        // Combining two passes takes the higher-ranked verdict
        assert_eq!(Verdict::Correct.max(Verdict::Absent), Verdict::Correct);
        assert_eq!(Verdict::Absent.max(Verdict::Present), Verdict::Present);
        assert_eq!(Verdict::Empty.max(Verdict::Empty), Verdict::Empty);
    }

    #[test]
    fn verdict_tags() {
        assert_eq!(Verdict::Correct.tag(), 'C');
        assert_eq!(Verdict::Present.tag(), 'P');
        assert_eq!(Verdict::Absent.tag(), 'A');
        assert_eq!(Verdict::Empty.tag(), '.');
    }

    #[test]
    fn winning_row_all_correct() {
        assert!(is_winning_row(&[Verdict::Correct; 5]));
    }

    #[test]
    fn winning_row_rejects_partial() {
        assert!(!is_winning_row(&[
            Verdict::Correct,
            Verdict::Correct,
            Verdict::Present,
        ]));
        assert!(!is_winning_row(&[]));
    }
}

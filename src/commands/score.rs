//! One-shot scoring command
//!
//! Scores a list of guesses against a given solution without any
//! interaction; useful for scripting and for checking the matcher by hand.

use crate::core::{ScoreRow, Word, is_winning_row};
use crate::game::{MatchMode, score};

/// One scored guess
#[derive(Debug, Clone)]
pub struct ScoredGuess {
    pub text: String,
    pub row: ScoreRow,
}

/// Result of scoring a batch of guesses
#[derive(Debug, Clone)]
pub struct ScoreReport {
    pub solution: String,
    pub guesses: Vec<ScoredGuess>,
    pub solved: bool,
}

/// Score `guesses` against `solution` in strict mode
///
/// # Errors
///
/// Returns an error string if the solution is not a valid word or a guess
/// has the wrong length.
pub fn score_guesses(solution: &str, guesses: &[String]) -> Result<ScoreReport, String> {
    let solution = Word::new(solution).map_err(|e| e.to_string())?;

    let mut scored = Vec::with_capacity(guesses.len());
    for guess in guesses {
        let row = score(&solution, guess, MatchMode::Strict).map_err(|e| e.to_string())?;
        scored.push(ScoredGuess {
            text: guess.to_lowercase(),
            row,
        });
    }

    let solved = scored.iter().any(|g| is_winning_row(&g.row));

    Ok(ScoreReport {
        solution: solution.text().to_string(),
        guesses: scored,
        solved,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict::{Absent, Correct, Present};

    #[test]
    fn scores_each_guess_in_order() {
        let report =
            score_guesses("ssa", &["sam".to_string(), "ssa".to_string()]).unwrap();

        assert_eq!(report.solution, "ssa");
        assert_eq!(report.guesses.len(), 2);
        assert_eq!(report.guesses[0].row, vec![Correct, Present, Absent]);
        assert_eq!(report.guesses[1].row, vec![Correct, Correct, Correct]);
        assert!(report.solved);
    }

    #[test]
    fn unsolved_when_no_guess_matches() {
        let report = score_guesses("sam", &["sat".to_string()]).unwrap();
        assert!(!report.solved);
    }

    #[test]
    fn rejects_wrong_length_guess() {
        let err = score_guesses("small", &["big".to_string()]).unwrap_err();
        assert!(err.contains("5 letters"));
    }

    #[test]
    fn rejects_invalid_solution() {
        assert!(score_guesses("sh0rt", &[]).is_err());
    }
}

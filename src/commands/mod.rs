//! Command implementations

pub mod score;
pub mod simple;

pub use score::{ScoreReport, ScoredGuess, score_guesses};
pub use simple::run_simple;

//! rabble
//!
//! A terminal word-guessing game. A secret word is compared against
//! successive guesses, each scored letter-by-letter with proper handling of
//! duplicate letters; the game phase is re-derived from the full input text
//! on every update.
//!
//! # Quick Start
//!
//! ```rust
//! use rabble::core::{Verdict, Word};
//! use rabble::game::{score, MatchMode};
//!
//! let solution = Word::new("ssa").unwrap();
//! let row = score(&solution, "sam", MatchMode::Strict).unwrap();
//!
//! assert_eq!(row, vec![Verdict::Correct, Verdict::Present, Verdict::Absent]);
//! ```

// Core domain types
pub mod core;

// Game rules: matching and progression
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

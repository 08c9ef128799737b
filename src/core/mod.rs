//! Core domain types
//!
//! This module contains the fundamental domain types with zero external
//! dependencies beyond hashing. All types here are pure, testable, and have
//! clear mathematical properties.

mod verdict;
mod word;

pub use verdict::{Verdict, ScoreRow, is_winning_row};
pub use word::{Word, WordError};

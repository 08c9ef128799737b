//! Word list for secret-word selection
//!
//! Provides an embedded word list compiled into the binary, plus a loader
//! for custom lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

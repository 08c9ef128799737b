//! Game configuration
//!
//! Supplied once per session and immutable for its duration.

/// Attempt and word-length limits for one game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Maximum number of submitted guesses; reaching it ends the game
    pub max_attempts: usize,
    /// Number of letters per guess and per secret word
    pub word_length: usize,
}

impl GameConfig {
    /// Six attempts at a five-letter word
    pub const CLASSIC: Self = Self {
        max_attempts: 6,
        word_length: 5,
    };

    /// Create a configuration
    ///
    /// Zero values are representable but invalid; `Game::evaluate` rejects
    /// them before looking at any input.
    #[must_use]
    pub const fn new(max_attempts: usize, word_length: usize) -> Self {
        Self {
            max_attempts,
            word_length,
        }
    }

    /// Whether both limits are usable
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.max_attempts > 0 && self.word_length > 0
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::CLASSIC
    }
}

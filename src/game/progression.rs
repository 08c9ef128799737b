//! Game progression
//!
//! Derives the current game phase from the full input text, the session
//! configuration, and the provider's secret word. The phase is recomputed
//! from scratch on every call — there is no incremental mutation and no
//! hidden history, so the same call is safe on every keystroke and every
//! submit without drift or rollback.

use super::config::GameConfig;
use super::matcher::{MatchError, MatchMode, score};
use super::provider::WordProvider;
use crate::core::{ScoreRow, Word};
use std::fmt;

/// Raw player input, tagged with whether it has been committed
///
/// Both variants carry the *entire* text typed so far, not a delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayInput<'a> {
    /// Text still being typed; the trailing partial guess is scored lenient
    Typing(&'a str),
    /// Text the player committed; every guess must be complete
    Submit(&'a str),
}

/// Why a submission was rejected
///
/// Rejections are data inside the phase, never a propagated error; the next
/// evaluation starts clean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    InvalidConfiguration {
        max_attempts: usize,
        word_length: usize,
    },
    WrongWordLength {
        word_length: usize,
    },
    TooManyAttempts {
        max_attempts: usize,
    },
    /// The matcher failed despite the length pre-checks. An
    /// internal-consistency guard; reachable only when the provider hands
    /// back a secret of the wrong length.
    MatchFailure(MatchError),
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration {
                max_attempts,
                word_length,
            } => {
                write!(
                    f,
                    "Invalid game config: {max_attempts} attempts, word length {word_length}"
                )
            }
            Self::WrongWordLength { word_length } => {
                write!(f, "Attempts must be of length {word_length}")
            }
            Self::TooManyAttempts { max_attempts } => {
                write!(f, "Too many attempts. Max attempts is {max_attempts}")
            }
            Self::MatchFailure(err) => write!(f, "Word matching failed: {err}"),
        }
    }
}

/// Overall game state derived from all guesses so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Nothing submitted yet
    NotStarted,
    /// Guesses remain; one scored row per guess so far
    InProgress(Vec<ScoreRow>),
    /// The attempt budget is used up
    Finished(Vec<ScoreRow>),
    /// The input (or configuration) was unusable this call
    Rejected(RejectReason),
}

impl Phase {
    /// Scored rows carried by this phase; empty for `NotStarted`/`Rejected`
    #[must_use]
    pub fn rows(&self) -> &[ScoreRow] {
        match self {
            Self::InProgress(rows) | Self::Finished(rows) => rows,
            Self::NotStarted | Self::Rejected(_) => &[],
        }
    }

    /// Whether play can continue from this phase
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::NotStarted | Self::InProgress(_))
    }
}

/// One game session: configuration plus the secret-word source
///
/// `evaluate` is a pure function of `(config, secret, input)`; the struct
/// only bundles the two session-stable collaborators.
pub struct Game<P> {
    provider: P,
    config: GameConfig,
}

impl<P: WordProvider> Game<P> {
    #[must_use]
    pub const fn new(provider: P, config: GameConfig) -> Self {
        Self { provider, config }
    }

    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    /// The session's secret word, straight from the provider
    ///
    /// For end-of-game display; scoring fetches its own copy per call.
    #[must_use]
    pub fn solution(&self) -> Word {
        self.provider.get()
    }

    /// Derive the phase for the given input
    ///
    /// Checks run in priority order: configuration errors pre-empt all input
    /// errors, then the typing/submit split applies. The secret word is
    /// fetched once per call, before any scoring.
    pub fn evaluate(&self, input: PlayInput<'_>) -> Phase {
        if !self.config.is_valid() {
            return Phase::Rejected(RejectReason::InvalidConfiguration {
                max_attempts: self.config.max_attempts,
                word_length: self.config.word_length,
            });
        }

        let secret = self.provider.get();
        match input {
            PlayInput::Typing(text) => self.evaluate_typing(&secret, text),
            PlayInput::Submit(text) => self.evaluate_submit(&secret, text),
        }
    }

    /// Typing never fails validation: complete guesses score strict, the
    /// trailing partial guess scores lenient, and the result is always
    /// renderable.
    fn evaluate_typing(&self, secret: &Word, text: &str) -> Phase {
        let mut rows = Vec::new();
        for chunk in chunked(text, self.config.word_length) {
            let mode = if chunk.chars().count() == self.config.word_length {
                MatchMode::Strict
            } else {
                MatchMode::Lenient
            };
            match score(secret, &chunk, mode) {
                Ok(row) => rows.push(row),
                Err(err) => return Phase::Rejected(RejectReason::MatchFailure(err)),
            }
        }
        Phase::InProgress(rows)
    }

    fn evaluate_submit(&self, secret: &Word, text: &str) -> Phase {
        let len = text.chars().count();
        if len == 0 {
            return Phase::NotStarted;
        }
        if len % self.config.word_length != 0 {
            return Phase::Rejected(RejectReason::WrongWordLength {
                word_length: self.config.word_length,
            });
        }
        if len / self.config.word_length > self.config.max_attempts {
            return Phase::Rejected(RejectReason::TooManyAttempts {
                max_attempts: self.config.max_attempts,
            });
        }

        let mut rows = Vec::new();
        for chunk in chunked(text, self.config.word_length) {
            match score(secret, &chunk, MatchMode::Strict) {
                Ok(row) => rows.push(row),
                Err(err) => return Phase::Rejected(RejectReason::MatchFailure(err)),
            }
        }

        if rows.len() < self.config.max_attempts {
            Phase::InProgress(rows)
        } else {
            Phase::Finished(rows)
        }
    }
}

/// Split `text` into guesses of `size` characters; the last may be shorter
fn chunked(text: &str, size: usize) -> Vec<String> {
    text.chars()
        .collect::<Vec<_>>()
        .chunks(size)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

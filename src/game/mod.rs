//! Game rules
//!
//! The matcher scores one guess against the secret word; the progression
//! state machine validates accumulated input and folds scored rows into a
//! single phase value. Both are pure computations over immutable inputs.

mod config;
mod matcher;
mod progression;
mod provider;

pub use config::GameConfig;
pub use matcher::{MatchError, MatchMode, score};
pub use progression::{Game, Phase, PlayInput, RejectReason};
pub use provider::{FixedWordProvider, RandomWordProvider, WordProvider};

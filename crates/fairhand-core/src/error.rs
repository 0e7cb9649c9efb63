//! Error types for the game core.

use crate::round::RoundPhase;
use thiserror::Error;

/// Errors from game operations
#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid move set: {0}")]
    InvalidMoveSet(String),

    #[error("unknown move: {0}")]
    UnknownMove(String),

    #[error("invalid choice: {0}")]
    InvalidChoice(String),

    #[error("malformed key: {0}")]
    MalformedKey(String),

    #[error("entropy source unavailable: {0}")]
    EntropyUnavailable(#[from] rand::Error),

    #[error("operation not valid in phase {actual:?}, expected {expected:?}")]
    WrongPhase {
        expected: RoundPhase,
        actual: RoundPhase,
    },
}

impl GameError {
    /// Whether the caller can recover by asking for another selection.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GameError::InvalidChoice(_))
    }
}

//! Fairhand Core Library
//!
//! This crate provides the commit-reveal primitives and circular win rules
//! for a provably fair two-party move-selection game: the computer's move
//! is committed to (HMAC-SHA-256) before the human chooses, and the key is
//! disclosed afterwards so anyone can check the commitment.

pub mod crypto;
pub mod error;
pub mod round;
pub mod rules;

pub use crypto::{Commitment, KeyProvider, OsKeyProvider, SecretKey};
pub use error::GameError;
pub use round::{GameRound, RoundOutcome, RoundPhase};
pub use rules::{determine_winner, win_window, MoveSet, OutcomeMatrix, Verdict};

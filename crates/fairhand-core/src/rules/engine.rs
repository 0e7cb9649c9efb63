//! Circular win-window rule resolution.

use super::move_set::MoveSet;
use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Verdict of a single round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Draw,
    FirstWins,
    SecondWins,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Draw => "Draw",
            Verdict::FirstWins => "First wins",
            Verdict::SecondWins => "Second wins",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Indices of the moves that the move at `index` beats.
///
/// For an odd-length circle of `n` moves these are the `floor(n/2)`
/// slots immediately after `index` in circular order; the remaining
/// `floor(n/2)` slots beat it.
pub fn win_window(n: usize, index: usize) -> impl Iterator<Item = usize> {
    (0..n / 2).map(move |k| (index + k + 1) % n)
}

/// Resolve two moves against the circular order of `moves`.
///
/// `FirstWins` iff `second` falls inside `first`'s win window. Names
/// absent from the set fail with [`GameError::UnknownMove`].
pub fn determine_winner(moves: &MoveSet, first: &str, second: &str) -> Result<Verdict, GameError> {
    let ia = moves
        .index_of(first)
        .ok_or_else(|| GameError::UnknownMove(first.to_string()))?;
    let ib = moves
        .index_of(second)
        .ok_or_else(|| GameError::UnknownMove(second.to_string()))?;

    if ia == ib {
        return Ok(Verdict::Draw);
    }

    if win_window(moves.len(), ia).any(|j| j == ib) {
        Ok(Verdict::FirstWins)
    } else {
        Ok(Verdict::SecondWins)
    }
}

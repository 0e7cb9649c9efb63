//! Ordered move list with validity checks.

use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ordered, duplicate-free, odd-length list of move names.
///
/// Order is load-bearing: it defines circular adjacency for win
/// resolution, so the list is kept exactly as supplied and never
/// re-sorted. A value of this type is valid by construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>")]
pub struct MoveSet(Vec<String>);

impl MoveSet {
    /// Validate and wrap a list of move names.
    ///
    /// Rejects lists shorter than 3, of even length, or containing
    /// duplicate entries.
    pub fn new(moves: Vec<String>) -> Result<Self, GameError> {
        if moves.len() < 3 {
            return Err(GameError::InvalidMoveSet(format!(
                "need at least 3 moves, got {}",
                moves.len()
            )));
        }
        if moves.len() % 2 == 0 {
            return Err(GameError::InvalidMoveSet(format!(
                "need an odd number of moves, got {}",
                moves.len()
            )));
        }
        let mut seen = HashSet::new();
        for name in &moves {
            if !seen.insert(name.as_str()) {
                return Err(GameError::InvalidMoveSet(format!("duplicate move: {name}")));
            }
        }
        Ok(Self(moves))
    }

    /// Number of moves; always odd and at least 3.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Move name at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Position of `name` in the circular order.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|m| m == name)
    }

    /// All move names in their supplied order.
    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl TryFrom<Vec<String>> for MoveSet {
    type Error = GameError;

    fn try_from(moves: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(moves)
    }
}

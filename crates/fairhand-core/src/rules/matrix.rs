//! Outcome matrix derived from the win rules.

use super::engine::{determine_winner, Verdict};
use super::move_set::MoveSet;
use crate::error::GameError;
use serde::Serialize;

/// Verdict for every ordered pair of moves.
///
/// Row is the first move, column the second. Built by applying the rule
/// engine pairwise, so the help display can never disagree with a live
/// round.
#[derive(Clone, Debug, Serialize)]
pub struct OutcomeMatrix {
    moves: MoveSet,
    cells: Vec<Vec<Verdict>>,
}

impl OutcomeMatrix {
    pub fn build(moves: &MoveSet) -> Result<Self, GameError> {
        let mut cells = Vec::with_capacity(moves.len());
        for first in moves.iter() {
            let mut row = Vec::with_capacity(moves.len());
            for second in moves.iter() {
                row.push(determine_winner(moves, first, second)?);
            }
            cells.push(row);
        }
        Ok(Self {
            moves: moves.clone(),
            cells,
        })
    }

    /// Number of rows (and columns).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Verdict for (row, column), if in range.
    pub fn verdict(&self, row: usize, column: usize) -> Option<Verdict> {
        self.cells.get(row)?.get(column).copied()
    }

    /// Rows paired with their move names, in supplied order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[Verdict])> {
        self.moves
            .iter()
            .zip(self.cells.iter().map(Vec::as_slice))
    }

    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }
}

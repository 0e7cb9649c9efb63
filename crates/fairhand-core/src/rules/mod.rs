//! Win rules: move sets, circular-window resolution, and the derived
//! outcome matrix.

mod engine;
mod matrix;
mod move_set;

pub use engine::{determine_winner, win_window, Verdict};
pub use matrix::OutcomeMatrix;
pub use move_set::MoveSet;

//! Position evaluation for the Gobang opponent
//!
//! The opponent rates every empty cell by pattern-matching fixed
//! length-5 windows along all eight directions and summing the window
//! scores into the cells they cover.

pub mod heuristic;
pub mod patterns;

// Re-exports
pub use heuristic::evaluate;
pub use patterns::{window_score, WindowScore};

use crate::board::{Pos, TOTAL_CELLS};

/// Per-cell desirability scores, same shape as the padded board.
///
/// Positive favors the human, negative favors the opponent. Only empty
/// interior cells receive contributions; occupied and padding cells stay
/// at zero. Rebuilt from scratch on every opponent turn.
#[derive(Debug)]
pub struct ScoreMatrix {
    cells: [i32; TOTAL_CELLS],
}

impl ScoreMatrix {
    pub fn new() -> Self {
        Self {
            cells: [0; TOTAL_CELLS],
        }
    }

    #[inline]
    pub fn get(&self, pos: Pos) -> i32 {
        self.cells[pos.to_index()]
    }

    #[inline]
    pub fn add(&mut self, pos: Pos, score: i32) {
        self.cells[pos.to_index()] += score;
    }
}

impl Default for ScoreMatrix {
    fn default() -> Self {
        Self::new()
    }
}

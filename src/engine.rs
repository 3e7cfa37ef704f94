//! Opponent move selection
//!
//! The opponent has no lookahead. Each turn it rebuilds the evaluation
//! matrix and plays the cell carrying the most extreme score. A cell's
//! magnitude is the severity of the strongest line through it, whichever
//! side owns that line, so the same scan either blocks the human's most
//! urgent threat or extends the opponent's own, whichever is larger.
//! The very first move of a game carries no information and is chosen
//! uniformly at random instead.

use crate::board::{self, Board, Pos, BOARD_SIZE, PADDING};
use crate::eval::evaluate;

/// Move selector for the heuristic opponent.
///
/// Owns the rng used for the opening move so that games can be made
/// deterministic by seeding.
pub struct Engine {
    rng: fastrand::Rng,
}

impl Engine {
    /// Engine with an entropy-seeded rng
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// Engine with a fixed seed, for reproducible games and tests
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Choose the opponent's next cell.
    ///
    /// `opening` marks the first move of a fresh game, which is random;
    /// every later move comes from the evaluation matrix. The caller
    /// places the stone.
    pub fn choose_move(&mut self, board: &Board, opening: bool) -> Pos {
        if opening {
            self.opening_move()
        } else {
            best_move(board)
        }
    }

    /// Uniformly random interior cell
    fn opening_move(&mut self) -> Pos {
        let lo = PADDING;
        let hi = PADDING + BOARD_SIZE;
        Pos::new(
            self.rng.usize(lo..hi) as u8,
            self.rng.usize(lo..hi) as u8,
        )
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Scan the evaluation matrix for the most urgent cell.
///
/// Row-major over empty interior cells, keeping the cell with the
/// greatest absolute score. The comparison is `>=`, so among equally
/// extreme cells the last one in scan order wins.
fn best_move(board: &Board) -> Pos {
    let scores = evaluate(board);

    let mut best = Pos::new(PADDING as u8, PADDING as u8);
    let mut best_magnitude = -1;

    for pos in board::interior() {
        if board.occupied(pos) {
            continue;
        }
        let magnitude = scores.get(pos).abs();
        if magnitude >= best_magnitude {
            best_magnitude = magnitude;
            best = pos;
        }
    }

    best
}

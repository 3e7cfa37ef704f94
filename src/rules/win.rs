//! Win condition checking
//!
//! A move wins when a run of five or more same-colored stones passes
//! through it. Only the just-placed stone needs to be checked, so the
//! scan is local: four axes, both ways from the move.

use crate::board::{Board, Pos};

/// Axis vectors for line checking (4 axes).
///
/// Each axis is scanned in both signs from the starting stone, which
/// covers the full line; the opposite four vectors would double-count.
const AXES: [(i32, i32); 4] = [
    (-1, -1), // Diagonal
    (-1, 0),  // Vertical
    (-1, 1),  // Anti-diagonal
    (0, -1),  // Horizontal
];

/// Check whether the stone at `pos` completes five-or-more in a row.
///
/// Derives the color from the board, then counts consecutive same-color
/// cells forward and backward along each axis. The walk stops on any
/// non-matching cell; at the board edge that is the `OutOfBounds`
/// sentinel, so no range checks are needed. Short-circuits on the first
/// winning axis.
///
/// Returns false if `pos` holds no stone.
pub fn has_five_at(board: &Board, pos: Pos) -> bool {
    let color = board.get(pos);
    if !color.is_stone() {
        return false;
    }

    for (dr, dc) in AXES {
        let mut count = 1;

        let mut p = pos.step(dr, dc);
        while board.get(p) == color {
            count += 1;
            p = p.step(dr, dc);
        }

        p = pos.step(-dr, -dc);
        while board.get(p) == color {
            count += 1;
            p = p.step(-dr, -dc);
        }

        if count >= 5 {
            return true;
        }
    }
    false
}

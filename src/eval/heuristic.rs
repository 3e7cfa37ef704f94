//! Full-board heuristic evaluation
//!
//! Scans every possible length-5 window on the board: for each of the
//! eight unit directions, every interior cell starts one window. The
//! window's score is then credited to every empty cell it covers, so a
//! cell that sits on many overlapping threats accumulates their sum.
//!
//! Unlike win checking, all eight directions matter here: a window
//! starting at a cell going right is a different window from the one
//! starting a step left and going right, so the signed directions place
//! distinct windows.

use crate::board::{self, Board, Cell, Pos};

use super::patterns::window_score;
use super::ScoreMatrix;

/// Unit direction vectors for window placement (8 directions)
const DIRECTIONS: [(i32, i32); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Window length: five cells, one potential five-in-a-row
const WINDOW: usize = 5;

/// Build the desirability matrix for the current position.
///
/// Positive entries favor the human, negative entries the opponent.
/// Occupied cells are never credited and stay at zero. The matrix is a
/// throwaway: callers recompute it every opponent turn.
#[must_use]
pub fn evaluate(board: &Board) -> ScoreMatrix {
    let mut scores = ScoreMatrix::new();

    for (dr, dc) in DIRECTIONS {
        for start in board::interior() {
            accumulate_window(board, &mut scores, start, dr, dc);
        }
    }

    scores
}

/// Score one window and distribute it into the window's empty cells.
///
/// The walk stops early on the `OutOfBounds` sentinel, truncating
/// windows that would run off the edge.
fn accumulate_window(board: &Board, scores: &mut ScoreMatrix, start: Pos, dr: i32, dc: i32) {
    let mut human = 0u32;
    let mut ai = 0u32;

    let mut pos = start;
    for _ in 0..WINDOW {
        match board.get(pos) {
            Cell::OutOfBounds => break,
            Cell::Human => human += 1,
            Cell::Ai => ai += 1,
            Cell::Empty => {}
        }
        pos = pos.step(dr, dc);
    }

    let score = window_score(human, ai);
    if score == 0 {
        return;
    }

    let mut pos = start;
    for _ in 0..WINDOW {
        match board.get(pos) {
            Cell::OutOfBounds => break,
            Cell::Empty => scores.add(pos, score),
            _ => {}
        }
        pos = pos.step(dr, dc);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Player;
    use crate::eval::WindowScore;

    #[test]
    fn test_empty_board_is_all_zeros() {
        let scores = evaluate(&Board::new());
        for pos in board::interior() {
            assert_eq!(scores.get(pos), 0);
        }
    }

    #[test]
    fn test_lone_ai_stone_marks_reachable_cells_negative() {
        let mut board = Board::new();
        board.place(Pos::new(8, 8), Player::Ai);
        let scores = evaluate(&board);

        // Every empty cell within 4 steps along some line through the
        // stone sits in at least one ai-only window
        for (dr, dc) in DIRECTIONS {
            let mut pos = Pos::new(8, 8);
            for _ in 0..4 {
                pos = pos.step(dr, dc);
                assert!(scores.get(pos) <= -WindowScore::ONE, "{pos:?}");
            }
        }
        // Cells out of reach of any window through the stone stay zero
        assert_eq!(scores.get(Pos::new(1, 2)), 0);
        assert_eq!(scores.get(Pos::new(15, 2)), 0);
    }

    #[test]
    fn test_alignment_worsens_scores() {
        let mut one = Board::new();
        one.place(Pos::new(8, 8), Player::Ai);

        let mut two = one.clone();
        two.place(Pos::new(8, 9), Player::Ai);

        // The shared extension cell gets strictly worse with a second
        // aligned stone
        let probe = Pos::new(8, 10);
        assert!(evaluate(&two).get(probe) < evaluate(&one).get(probe));
    }

    #[test]
    fn test_blocking_stone_voids_mixed_windows() {
        let mut board = Board::new();
        board.place(Pos::new(5, 5), Player::Human);
        board.place(Pos::new(5, 6), Player::Human);
        let open = evaluate(&board).get(Pos::new(5, 7));

        board.place(Pos::new(5, 4), Player::Ai);
        let blocked = evaluate(&board).get(Pos::new(5, 7));

        // Exactly four row windows cover both (5,4) and (5,7); each held
        // the human pair (+TWO) and is now mixed, scoring zero. No
        // ai-only window covers (5,7), so nothing else moves.
        assert_eq!(open - blocked, 4 * WindowScore::TWO);
    }

    #[test]
    fn test_occupied_cells_stay_zero() {
        let mut board = Board::new();
        board.place(Pos::new(8, 8), Player::Human);
        board.place(Pos::new(3, 3), Player::Ai);
        let scores = evaluate(&board);
        assert_eq!(scores.get(Pos::new(8, 8)), 0);
        assert_eq!(scores.get(Pos::new(3, 3)), 0);
    }

    #[test]
    fn test_open_four_endpoints_reach_the_four_tier() {
        let mut board = Board::new();
        for c in 5..9 {
            board.place(Pos::new(5, c), Player::Human);
        }
        let scores = evaluate(&board);

        // Both completing cells sit in a human-only window of four
        assert!(scores.get(Pos::new(5, 4)) >= WindowScore::FOUR);
        assert!(scores.get(Pos::new(5, 9)) >= WindowScore::FOUR);
        // And dominate everything further from the line
        assert!(scores.get(Pos::new(5, 4)) > scores.get(Pos::new(5, 3)));
        assert!(scores.get(Pos::new(5, 9)) > scores.get(Pos::new(5, 10)));
    }

    #[test]
    fn test_truncated_edge_windows() {
        // A stone in the corner still scores: windows toward the edge
        // are cut short by the sentinel rather than read out of range
        let mut board = Board::new();
        board.place(Pos::new(1, 1), Player::Ai);
        let scores = evaluate(&board);
        assert!(scores.get(Pos::new(1, 2)) < 0);
        assert!(scores.get(Pos::new(2, 2)) < 0);
    }
}

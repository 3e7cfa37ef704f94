//! Board structure with move history

use super::{Cell, Player, Pos, TOTAL_CELLS};

/// Game board: padded grid plus append-only move history.
///
/// The first and last row and column hold the `OutOfBounds` sentinel for
/// the whole lifetime of the board; only interior cells ever change.
#[derive(Debug, Clone)]
pub struct Board {
    cells: [Cell; TOTAL_CELLS],
    /// Placed stones in play order, for undo and rendering
    history: Vec<(Pos, Player)>,
}

impl Board {
    pub fn new() -> Self {
        let mut cells = [Cell::OutOfBounds; TOTAL_CELLS];
        for pos in super::interior() {
            cells[pos.to_index()] = Cell::Empty;
        }
        Self {
            cells,
            history: Vec::with_capacity(TOTAL_CELLS),
        }
    }

    /// Get cell at position. Valid for the full padded extent, padding
    /// included; scans rely on the sentinel instead of bounds checks.
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Check if position holds a stone
    #[inline]
    pub fn occupied(&self, pos: Pos) -> bool {
        self.get(pos) != Cell::Empty
    }

    /// Place a stone and record it in the history.
    ///
    /// The caller must have checked `!occupied(pos)`; placing on a
    /// non-empty cell is a contract violation.
    #[inline]
    pub fn place(&mut self, pos: Pos, player: Player) {
        debug_assert!(pos.is_interior());
        debug_assert!(!self.occupied(pos));
        self.cells[pos.to_index()] = player.cell();
        self.history.push((pos, player));
    }

    /// Take back the last full turn: the most recent move and its reply.
    ///
    /// Pops two history entries and clears their cells. With a single
    /// entry only that one is removed; with no history this is a no-op.
    pub fn undo(&mut self) {
        for _ in 0..2 {
            if let Some((pos, _)) = self.history.pop() {
                self.cells[pos.to_index()] = Cell::Empty;
            }
        }
    }

    /// Placed stones in play order
    #[inline]
    pub fn history(&self) -> &[(Pos, Player)] {
        &self.history
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.history.len()
    }

    /// Check if no stone has been placed
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.history.is_empty()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

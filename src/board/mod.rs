//! Board representation for Gobang

pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;

/// Playing area size (15x15)
pub const BOARD_SIZE: usize = 15;
/// Sentinel padding on every edge
pub const PADDING: usize = 1;
/// Full grid size including the padding ring (17x17)
pub const GRID_SIZE: usize = BOARD_SIZE + 2 * PADDING;
pub const TOTAL_CELLS: usize = GRID_SIZE * GRID_SIZE; // 289

/// Cell contents on the padded grid.
///
/// The padding ring is permanently `OutOfBounds`, so directional scans
/// terminate on the sentinel instead of range-checking every step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    OutOfBounds,
    Human,
    Ai,
}

impl Cell {
    /// True if the cell holds a placed stone
    #[inline]
    pub fn is_stone(self) -> bool {
        matches!(self, Cell::Human | Cell::Ai)
    }
}

/// The two sides of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Human,
    Ai,
}

impl Player {
    /// Cell value this side's stones occupy
    #[inline]
    pub fn cell(self) -> Cell {
        match self {
            Player::Human => Cell::Human,
            Player::Ai => Cell::Ai,
        }
    }

    /// Get the other side
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Human => Player::Ai,
            Player::Ai => Player::Human,
        }
    }
}

/// Position on the padded grid (interior is 1..=15, 0 and 16 are padding)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < GRID_SIZE as u8 && col < GRID_SIZE as u8);
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * GRID_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / GRID_SIZE) as u8,
            col: (idx % GRID_SIZE) as u8,
        }
    }

    /// One step along a direction vector.
    ///
    /// Callers stop on the `OutOfBounds` sentinel, so a step taken from a
    /// scanned cell never leaves the padded grid.
    #[inline]
    pub fn step(self, dr: i32, dc: i32) -> Pos {
        Pos {
            row: (i32::from(self.row) + dr) as u8,
            col: (i32::from(self.col) + dc) as u8,
        }
    }

    /// True if the position is inside the 15x15 playing area
    #[inline]
    pub fn is_interior(self) -> bool {
        let lo = PADDING as u8;
        let hi = (PADDING + BOARD_SIZE) as u8;
        self.row >= lo && self.row < hi && self.col >= lo && self.col < hi
    }
}

/// Iterate the playing area in row-major order.
///
/// The order matters: the move selector's tie-break keeps the last extreme
/// cell it sees, so every scan goes through this single iterator.
pub fn interior() -> impl Iterator<Item = Pos> {
    (PADDING..PADDING + BOARD_SIZE)
        .flat_map(|r| (PADDING..PADDING + BOARD_SIZE).map(move |c| Pos::new(r as u8, c as u8)))
}

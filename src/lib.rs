//! Gobang engine with a heuristic opponent
//!
//! A 15x15 five-in-a-row game played against a pattern-matching
//! opponent. The opponent has no lookahead: every turn it scores each
//! empty cell by scanning fixed length-5 windows along eight directions
//! and plays the cell under the most severe threat, its own or the
//! human's.
//!
//! # Architecture
//!
//! - [`board`]: Padded board representation and move history
//! - [`rules`]: Five-in-a-row win detection
//! - [`eval`]: Window-based position evaluation
//! - [`engine`]: Move selection for the opponent
//! - [`ui`]: egui/eframe shell
//!
//! The board carries a one-cell `OutOfBounds` ring around the playing
//! area, so every directional scan terminates on the sentinel instead of
//! range-checking each step.
//!
//! # Quick Start
//!
//! ```
//! use gobang::{Board, Engine, Player};
//! use gobang::rules::has_five_at;
//!
//! let mut board = Board::new();
//! let mut engine = Engine::with_seed(42);
//!
//! // Opponent opens on a random cell
//! let opening = engine.choose_move(&board, true);
//! board.place(opening, Player::Ai);
//!
//! // Human replies; the opponent answers from the evaluation matrix
//! let human = gobang::board::interior().find(|&p| !board.occupied(p)).unwrap();
//! board.place(human, Player::Human);
//! assert!(!has_five_at(&board, human));
//!
//! let reply = engine.choose_move(&board, false);
//! board.place(reply, Player::Ai);
//! ```

pub mod board;
pub mod engine;
pub mod eval;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Player, Pos, BOARD_SIZE, GRID_SIZE};
pub use engine::Engine;

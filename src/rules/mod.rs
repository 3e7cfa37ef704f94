//! Game rules for Gobang
//!
//! Plain five-in-a-row: the first side to line up five or more stones
//! horizontally, vertically or diagonally wins.

pub mod win;

// Re-exports for convenient access
pub use win::has_five_at;

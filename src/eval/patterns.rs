//! Window score tiers for Gobang evaluation
//!
//! Each length-5 window is scored by how many stones of a single side it
//! contains. The magnitudes encode a strict dominance ordering: any four
//! outweighs any number of threes, any three outweighs any number of
//! twos, and so on.

/// Score tiers for single-colored windows
pub struct WindowScore;

impl WindowScore {
    /// One stone in the window
    pub const ONE: i32 = 15;
    /// Two stones
    pub const TWO: i32 = 400;
    /// Three stones: a live threat
    pub const THREE: i32 = 1_800;
    /// Four stones: completing the window wins next move
    pub const FOUR: i32 = 100_000;
    /// Five stones: the game is already decided on this line
    pub const FIVE: i32 = 1_000_000;
}

/// Classify a window by its stone counts.
///
/// A window containing both colors can never become a five for either
/// side, so it scores 0, as does an empty window. Human-only windows are
/// positive, opponent-only windows negative, by the tier table.
#[inline]
pub fn window_score(human: u32, ai: u32) -> i32 {
    match (human, ai) {
        (0, 0) => 0,
        (_, 0) => tier(human),
        (0, _) => -tier(ai),
        _ => 0,
    }
}

#[inline]
fn tier(count: u32) -> i32 {
    match count {
        1 => WindowScore::ONE,
        2 => WindowScore::TWO,
        3 => WindowScore::THREE,
        4 => WindowScore::FOUR,
        _ => WindowScore::FIVE,
    }
}

//! Theme constants for the Gobang GUI

use egui::Color32;

// Board colors - plain white board with black grid lines
pub const BACKGROUND: Color32 = Color32::from_rgb(255, 255, 255);
pub const GRID_LINE: Color32 = Color32::from_rgb(0, 0, 0);

// Stone colors: solid disc plus a thin outline ring
pub const HUMAN_STONE: Color32 = Color32::from_rgb(0, 0, 0);
pub const AI_STONE: Color32 = Color32::from_rgb(255, 0, 0);
pub const STONE_OUTLINE: Color32 = Color32::from_rgb(0, 0, 0);

// Text colors
pub const TITLE_TEXT: Color32 = Color32::from_rgb(131, 139, 139);
pub const HINT_TEXT: Color32 = Color32::from_rgb(108, 123, 139);
pub const WIN_TEXT: Color32 = Color32::from_rgb(72, 118, 255);
pub const LOSE_TEXT: Color32 = Color32::from_rgb(255, 0, 0);

pub fn hover_preview() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 100)
}

// Sizes (pixel geometry of the original board)
pub const SQUARE_SIZE: f32 = 45.0;
pub const BOARD_MARGIN: f32 = 30.0;
pub const STONE_RADIUS: f32 = 15.0;
pub const STONE_OUTLINE_WIDTH: f32 = 1.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;

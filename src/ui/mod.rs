//! GUI module for the Gobang game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod session;
mod theme;

pub use app::GobangApp;
pub use session::{GameSession, Page};

/// Pixel size of the fixed board window
pub fn board_pixel_size() -> egui::Vec2 {
    board_view::BoardView::widget_size()
}

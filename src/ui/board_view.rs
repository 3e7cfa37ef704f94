//! Board rendering for the Gobang GUI

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Board, Player, Pos, BOARD_SIZE, PADDING};

use super::theme::*;

/// What the user did on the board this frame
pub enum BoardAction {
    /// Primary click on an intersection
    Place(Pos),
    /// Secondary click anywhere on the board
    Undo,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Pixel size of the full board widget
    pub fn widget_size() -> Vec2 {
        let extent = SQUARE_SIZE * (BOARD_SIZE as f32 - 1.0) + 2.0 * BOARD_MARGIN;
        Vec2::new(extent, extent)
    }

    /// Render the board and report the click action, if any
    pub fn show(&mut self, ui: &mut egui::Ui, board: &Board) -> Option<BoardAction> {
        let (response, painter) = ui.allocate_painter(Self::widget_size(), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::ZERO, BACKGROUND);
        self.draw_grid(&painter);
        self.draw_stones(&painter, board);

        if response.secondary_clicked() {
            return Some(BoardAction::Undo);
        }

        if let Some(pointer) = response.hover_pos() {
            if let Some(pos) = self.screen_to_board(pointer) {
                if !board.occupied(pos) {
                    let center = self.board_to_screen(pos);
                    painter.circle_filled(center, STONE_RADIUS, hover_preview());
                    if response.clicked() {
                        return Some(BoardAction::Place(pos));
                    }
                }
            }
        }

        None
    }

    /// Draw the 15x15 grid lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let extent = SQUARE_SIZE * (BOARD_SIZE as f32 - 1.0);

        for i in 0..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * SQUARE_SIZE;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + extent);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + extent, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Draw placed stones from the move history
    fn draw_stones(&self, painter: &Painter, board: &Board) {
        for &(pos, player) in board.history() {
            let center = self.board_to_screen(pos);
            let fill = match player {
                Player::Human => HUMAN_STONE,
                Player::Ai => AI_STONE,
            };
            painter.circle_filled(center, STONE_RADIUS, fill);
            painter.circle_stroke(
                center,
                STONE_RADIUS,
                Stroke::new(STONE_OUTLINE_WIDTH, STONE_OUTLINE),
            );
        }
    }

    /// Convert a padded-grid position to screen coordinates
    fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let col = (pos.col as usize - PADDING) as f32;
        let row = (pos.row as usize - PADDING) as f32;
        Pos2::new(
            self.board_rect.min.x + BOARD_MARGIN + col * SQUARE_SIZE,
            self.board_rect.min.y + BOARD_MARGIN + row * SQUARE_SIZE,
        )
    }

    /// Convert screen coordinates to the nearest intersection, if any
    fn screen_to_board(&self, screen: Pos2) -> Option<Pos> {
        let col = ((screen.x - self.board_rect.min.x - BOARD_MARGIN) / SQUARE_SIZE).round();
        let row = ((screen.y - self.board_rect.min.y - BOARD_MARGIN) / SQUARE_SIZE).round();

        if row < 0.0 || col < 0.0 || row >= BOARD_SIZE as f32 || col >= BOARD_SIZE as f32 {
            return None;
        }

        Some(Pos::new(
            (row as usize + PADDING) as u8,
            (col as usize + PADDING) as u8,
        ))
    }
}

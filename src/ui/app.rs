//! Main application for the Gobang GUI

use eframe::egui;
use egui::{Align2, CentralPanel, Context, CornerRadius, FontId, Sense};

use super::board_view::{BoardAction, BoardView};
use super::session::{GameSession, Page};
use super::theme::*;

/// Main Gobang application
pub struct GobangApp {
    session: GameSession,
    board_view: BoardView,
}

impl Default for GobangApp {
    fn default() -> Self {
        Self {
            session: GameSession::new(),
            board_view: BoardView::default(),
        }
    }
}

impl GobangApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Welcome page: title plus a hint, any click enters the game
    fn show_welcome(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(BoardView::widget_size(), Sense::click());
        let rect = response.rect;

        painter.rect_filled(rect, CornerRadius::ZERO, BACKGROUND);
        painter.text(
            rect.center() - egui::Vec2::new(0.0, rect.height() * 0.1),
            Align2::CENTER_CENTER,
            "Gobang",
            FontId::proportional(50.0),
            TITLE_TEXT,
        );
        painter.text(
            egui::Pos2::new(rect.center().x, rect.min.y + rect.height() * 0.8),
            Align2::CENTER_CENTER,
            "just use mouse buttons, right button to undo.",
            FontId::proportional(20.0),
            HINT_TEXT,
        );

        if response.clicked() {
            self.session.page = Page::Board;
        }
    }

    /// Board page: forward clicks to the session
    fn show_board(&mut self, ui: &mut egui::Ui) {
        match self.board_view.show(ui, &self.session.board) {
            Some(BoardAction::Place(pos)) => self.session.play_human(pos),
            Some(BoardAction::Undo) => self.session.undo(),
            None => {}
        }
    }

    /// Game-over page: any click starts over
    fn show_game_over(&mut self, ui: &mut egui::Ui, won: bool) {
        let (response, painter) =
            ui.allocate_painter(BoardView::widget_size(), Sense::click());
        let rect = response.rect;

        let (text, color) = if won {
            ("You Win!", WIN_TEXT)
        } else {
            ("You Lose!", LOSE_TEXT)
        };

        painter.rect_filled(rect, CornerRadius::ZERO, BACKGROUND);
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(50.0),
            color,
        );

        if response.clicked() {
            self.session.rematch();
        }
    }
}

impl eframe::App for GobangApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        CentralPanel::default()
            .frame(egui::Frame::new().fill(BACKGROUND))
            .show(ctx, |ui| match self.session.page {
                Page::Welcome => self.show_welcome(ui),
                Page::Board => self.show_board(ui),
                Page::YouWin => self.show_game_over(ui, true),
                Page::YouLose => self.show_game_over(ui, false),
            });
    }
}

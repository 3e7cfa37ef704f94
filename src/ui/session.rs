//! Game session state for the Gobang GUI

use crate::board::{Board, Player, Pos};
use crate::engine::Engine;
use crate::rules::has_five_at;

/// Which page the shell is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Welcome,
    Board,
    YouWin,
    YouLose,
}

/// One playing session: the board, the opponent engine and the page
/// state machine. Owned by the app; the core components hold no state
/// of their own beyond the board passed to them.
pub struct GameSession {
    pub board: Board,
    pub page: Page,
    engine: Engine,
}

impl GameSession {
    pub fn new() -> Self {
        let mut session = Self {
            board: Board::new(),
            page: Page::Welcome,
            engine: Engine::new(),
        };
        session.opening_move();
        session
    }

    /// Session with a seeded engine, for deterministic tests
    pub fn with_seed(seed: u64) -> Self {
        let mut session = Self {
            board: Board::new(),
            page: Page::Welcome,
            engine: Engine::with_seed(seed),
        };
        session.opening_move();
        session
    }

    /// Fresh board for a rematch; the opponent opens again
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.opening_move();
    }

    /// The opponent moves first, on a random cell
    fn opening_move(&mut self) {
        let pos = self.engine.choose_move(&self.board, true);
        self.board.place(pos, Player::Ai);
    }

    /// Handle a human click on a board cell.
    ///
    /// Occupied cells are ignored. Otherwise the human stone is placed,
    /// the win check runs, and if the game goes on the opponent replies
    /// synchronously before control returns.
    pub fn play_human(&mut self, pos: Pos) {
        if self.page != Page::Board || self.board.occupied(pos) {
            return;
        }

        self.board.place(pos, Player::Human);
        if has_five_at(&self.board, pos) {
            self.page = Page::YouWin;
            return;
        }

        let reply = self.engine.choose_move(&self.board, false);
        self.board.place(reply, Player::Ai);
        if has_five_at(&self.board, reply) {
            self.page = Page::YouLose;
        }
    }

    /// Take back the human's last move together with the opponent's reply
    pub fn undo(&mut self) {
        if self.page == Page::Board {
            self.board.undo();
        }
    }

    /// Leave a finished game: back to the welcome page with a fresh board
    pub fn rematch(&mut self) {
        self.reset();
        self.page = Page::Welcome;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

//! The machine player facade handed to a game harness
//!
//! Keeps track of moves made by both players and can select a move for
//! itself; each player owns its board exclusively.

use crate::board::{Board, Color, Move};
use crate::searcher::Searcher;

const DEFAULT_DEPTH: u32 = 3;

/// An automatic Network player wrapping a [`Board`] and a [`Searcher`]
///
/// [`Board`]: ../board/struct.Board.html
/// [`Searcher`]: ../searcher/struct.Searcher.html
pub struct MachinePlayer {
    board: Board,
    color: Color,
    search_depth: u32,
}

impl MachinePlayer {
    /// Creates a machine player of the given color with the default search depth
    pub fn new(color: Color) -> Self {
        Self::with_depth(color, DEFAULT_DEPTH)
    }

    /// Creates a machine player of the given color and search depth
    pub fn with_depth(color: Color, search_depth: u32) -> Self {
        Self {
            board: Board::new(),
            color,
            search_depth,
        }
    }

    /// Picks the strongest move for this player and records it internally
    pub fn choose_move(&mut self) -> Move {
        let mut searcher = Searcher::new(self.color, self.search_depth);
        let mv = searcher.best_move(&mut self.board);
        self.board.apply_move(self.color, mv);
        mv
    }

    /// Records a move by the opponent, returning whether it was legal
    ///
    /// An illegal move changes nothing.
    pub fn opponent_move(&mut self, mv: Move) -> bool {
        self.board.apply_move(self.color.opponent(), mv)
    }

    /// Records a move by this player without consulting the search,
    /// returning whether it was legal
    ///
    /// Used by harnesses to set up positions for the player to solve.
    pub fn force_move(&mut self, mv: Move) -> bool {
        self.board.apply_move(self.color, mv)
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
}

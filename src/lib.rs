//! An agent for playing the board game 'Network'
//!
//! Network is a two-player connection game on an 8x8 grid: a player wins by
//! building a chain of at least 6 of their own pieces linking their two goal
//! edges, where consecutive links never run in the same compass direction.
//! This agent models the full move-legality and network-detection rules and
//! picks moves with a depth-limited minimax search with alpha-beta pruning.
//!
//! # Basic Usage
//!
//! ```
//! use network_ai::{Board, Color, Move, Searcher};
//!
//! let mut board = Board::new();
//! let mut searcher = Searcher::new(Color::White, 2);
//! let best = searcher.best_move(&mut board);
//!
//! // the opening move is forced to the centre
//! assert_eq!(best, Move::Add { x: 3, y: 3 });
//! assert!(board.apply_move(Color::White, best));
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod evaluator;

pub mod searcher;

pub mod player;

mod test;

pub use board::{Board, Cell, Color, Move};
pub use evaluator::{evaluate, Weights};
pub use player::MachinePlayer;
pub use searcher::Searcher;

/// The width and height of the square game board in cells
pub const SIZE: usize = 8;

/// The maximum number of pieces a player may have on the board
pub const MAX_PIECES: usize = 10;

/// The minimum number of pieces in a winning network
pub const MIN_NETWORK_LEN: usize = 6;

// a winning chain can never need more pieces than a player owns
const_assert!(MIN_NETWORK_LEN <= MAX_PIECES);
// goal edges must leave non-corner cells between the corners
const_assert!(SIZE >= 3);

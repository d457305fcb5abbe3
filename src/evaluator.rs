//! Heuristic scoring of positions for one player's perspective

use crate::board::{Board, Color};
use crate::SIZE;

/// The score of a position the evaluated player has already won
pub const WIN_SCORE: f64 = f64::MAX;
/// The score of a position the evaluated player has already lost
pub const LOSS_SCORE: f64 = f64::MIN;

// per-signal divisors bringing each raw differential to a comparable scale
const CONNECTIVITY_SCALE: f64 = 32.0;
const MOBILITY_SCALE: f64 = 64.0;
const PATH_SCALE: f64 = 10.0;
const CENTRALITY_SCALE: f64 = 7.0;

const CENTER: f64 = (SIZE as f64 - 1.0) / 2.0;

/// Relative weights of the four positional signals
///
/// The weights should sum to 1.0 so that scores from differently tuned
/// evaluators stay comparable. `Default` is the tuned starting point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Weights {
    pub connectivity: f64,
    pub mobility: f64,
    pub path: f64,
    pub centrality: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            connectivity: 0.40,
            mobility: 0.35,
            path: 0.15,
            centrality: 0.10,
        }
    }
}

/// Scores the position for `color`, higher being better
///
/// A position with a finished network for either side evaluates to the
/// win/loss sentinel, which dominates every heuristic score. Otherwise the
/// score is the weighted sum of connectivity, mobility, longest-path and
/// centrality differentials. The board is only read, never modified.
pub fn evaluate(color: Color, board: &Board, weights: &Weights) -> f64 {
    if board.has_network(color) {
        return WIN_SCORE;
    }
    let opponent = color.opponent();
    if board.has_network(opponent) {
        return LOSS_SCORE;
    }

    // undirected connections are counted once from each end
    let connectivity = (connection_count(board, color) as f64
        - connection_count(board, opponent) as f64)
        / 2.0
        / CONNECTIVITY_SCALE;

    let mobility = (board.legal_moves(color).len() as f64
        - board.legal_moves(opponent).len() as f64)
        / MOBILITY_SCALE;

    let path = (board.longest_path(color) as f64 - board.longest_path(opponent) as f64)
        / PATH_SCALE;

    // central pieces see more of the board, so smaller distances are better
    let centrality =
        (center_distance(board, opponent) - center_distance(board, color)) / CENTRALITY_SCALE;

    weights.connectivity * connectivity
        + weights.mobility * mobility
        + weights.path * path
        + weights.centrality * centrality
}

fn connection_count(board: &Board, color: Color) -> usize {
    board
        .pieces_of(color)
        .iter()
        .map(|&(x, y)| board.connected(x, y).len())
        .sum()
}

// mean Manhattan distance of the player's pieces from the board centre
fn center_distance(board: &Board, color: Color) -> f64 {
    let pieces = board.pieces_of(color);
    if pieces.is_empty() {
        return 0.0;
    }
    let total: f64 = pieces
        .iter()
        .map(|&(x, y)| (x as f64 - CENTER).abs() + (y as f64 - CENTER).abs())
        .sum();
    total / pieces.len() as f64
}

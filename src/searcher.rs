//! Depth-limited minimax move selection with alpha-beta pruning

use crate::board::{Board, Color, Move};
use crate::evaluator::{evaluate, Weights};

// the forced opening placement, with a fallback if the centre is taken
const OPENING: Move = Move::Add { x: 3, y: 3 };
const OPENING_FALLBACK: Move = Move::Add { x: 3, y: 4 };

/// An agent choosing the strongest move for one fixed "root" color
///
/// # Notes
/// The search explores the game tree in place: each candidate move is
/// applied, searched and then reversed, so the board handed to
/// [`best_move`] is restored exactly before it returns. Leaf positions are
/// always evaluated from the root color's perspective; nodes where the root
/// color moves maximize and opponent nodes minimize, with a cutoff once
/// `beta <= alpha`. Among equally scored root moves the first one found
/// wins, so a pruned sibling whose score is only a bound can never displace
/// an exactly scored best move.
///
/// [`best_move`]: #method.best_move
pub struct Searcher {
    root_color: Color,
    depth: u32,
    weights: Weights,

    /// The number of nodes searched by this `Searcher` so far (for diagnostics only)
    pub node_count: usize,
}

impl Searcher {
    /// Creates a searcher for the given color and search depth
    pub fn new(root_color: Color, depth: u32) -> Self {
        Self {
            root_color,
            depth,
            weights: Weights::default(),
            node_count: 0,
        }
    }

    /// Replaces the default evaluation weights
    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    /// Returns the strongest move found for the root color
    ///
    /// The very first placement of a game is forced to the centre without
    /// searching; it breaks the symmetry of the empty board and no search
    /// depth is worth spending on it. If no legal move exists at all the
    /// centre placement doubles as a neutral sentinel.
    pub fn best_move(&mut self, board: &mut Board) -> Move {
        if board.piece_count(self.root_color) == 0 {
            for &mv in [OPENING, OPENING_FALLBACK].iter() {
                if board.is_valid(self.root_color, mv) {
                    return mv;
                }
            }
            // both centre cells are unavailable; search like any other ply
        }

        let (_score, best) = self.top_level_search(board, f64::NEG_INFINITY, f64::INFINITY);
        best.unwrap_or(OPENING)
    }

    /// Searches the root moves, keeping track of which one was best
    fn top_level_search(
        &mut self,
        board: &mut Board,
        mut alpha: f64,
        beta: f64,
    ) -> (f64, Option<Move>) {
        self.node_count += 1;

        let depth = self.depth.saturating_sub(1);
        let mut best_score = f64::NEG_INFINITY;
        let mut best_move = None;

        for mv in board.legal_moves(self.root_color) {
            board.apply_move(self.root_color, mv);
            let score = self.alpha_beta(board, self.root_color.opponent(), depth, alpha, beta);
            board.reverse_move(self.root_color, mv);

            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            if score > alpha {
                alpha = score;
            }
            if beta <= alpha {
                break;
            }
        }
        (best_score, best_move)
    }

    /// Scores one node of the game tree from the root color's perspective
    fn alpha_beta(
        &mut self,
        board: &mut Board,
        to_move: Color,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
    ) -> f64 {
        self.node_count += 1;

        // the frontier: out of depth, or the game is already decided
        if depth == 0
            || board.has_network(self.root_color)
            || board.has_network(self.root_color.opponent())
        {
            return evaluate(self.root_color, board, &self.weights);
        }

        // a side yet to place its first piece plays the trivial forced
        // opening; score it neutrally instead of searching it
        if board.piece_count(to_move) == 0 {
            return 0.0;
        }

        let moves = board.legal_moves(to_move);
        if moves.is_empty() {
            // cannot happen under the rules, but a stuck node is neutral
            return 0.0;
        }

        if to_move == self.root_color {
            let mut best = f64::NEG_INFINITY;
            for mv in moves {
                board.apply_move(to_move, mv);
                let score = self.alpha_beta(board, to_move.opponent(), depth - 1, alpha, beta);
                board.reverse_move(to_move, mv);

                best = best.max(score);
                if score > alpha {
                    alpha = score;
                }
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = f64::INFINITY;
            for mv in moves {
                board.apply_move(to_move, mv);
                let score = self.alpha_beta(board, to_move.opponent(), depth - 1, alpha, beta);
                board.reverse_move(to_move, mv);

                best = best.min(score);
                if score < beta {
                    beta = score;
                }
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}

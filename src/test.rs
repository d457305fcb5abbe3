#[cfg(test)]
pub mod test {
    use crate::evaluator::{evaluate, Weights, LOSS_SCORE, WIN_SCORE};
    use crate::{Board, Cell, Color, MachinePlayer, Move, Searcher, MAX_PIECES, SIZE};

    fn board_with(black: &[(usize, usize)], white: &[(usize, usize)]) -> Board {
        let mut grid = [[Cell::Empty; SIZE]; SIZE];
        for &(x, y) in black {
            grid[x][y] = Cell::Black;
        }
        for &(x, y) in white {
            grid[x][y] = Cell::White;
        }
        Board::from_grid(grid)
    }

    // ten black pieces, pairwise non-adjacent, so every step move is
    // decided by the destination rules alone
    const TEN_BLACK: [(usize, usize); 10] = [
        (1, 1),
        (3, 1),
        (5, 1),
        (1, 3),
        (3, 3),
        (6, 3),
        (1, 5),
        (3, 5),
        (1, 7),
        (6, 7),
    ];

    #[test]
    fn corners_always_invalid() {
        let empty = Board::new();
        let stepping = board_with(&TEN_BLACK, &[]);
        for &(x, y) in [(0, 0), (0, SIZE - 1), (SIZE - 1, 0), (SIZE - 1, SIZE - 1)].iter() {
            for &color in [Color::Black, Color::White].iter() {
                assert!(!empty.is_valid(color, Move::Add { x, y }));
                assert!(!stepping.is_valid(
                    color,
                    Move::Step { x, y, from_x: 1, from_y: 1 }
                ));
            }
        }
    }

    #[test]
    fn opponent_goal_edges_invalid() {
        let board = Board::new();
        for i in 0..SIZE {
            // White's goals are the x == 0 and x == 7 columns
            assert!(!board.is_valid(Color::Black, Move::Add { x: 0, y: i }));
            assert!(!board.is_valid(Color::Black, Move::Add { x: SIZE - 1, y: i }));
            // Black's goals are the y == 0 and y == 7 rows
            assert!(!board.is_valid(Color::White, Move::Add { x: i, y: 0 }));
            assert!(!board.is_valid(Color::White, Move::Add { x: i, y: SIZE - 1 }));
        }
        // each side may play in its own goals
        assert!(board.is_valid(Color::Black, Move::Add { x: 3, y: 0 }));
        assert!(board.is_valid(Color::White, Move::Add { x: 0, y: 3 }));
    }

    #[test]
    fn occupied_cells_invalid() {
        let board = board_with(&[(3, 3)], &[(4, 5)]);
        for &color in [Color::Black, Color::White].iter() {
            assert!(!board.is_valid(color, Move::Add { x: 3, y: 3 }));
            assert!(!board.is_valid(color, Move::Add { x: 4, y: 5 }));
        }
    }

    #[test]
    fn clusters_of_three_rejected() {
        // two black pieces already touch; any third black piece next to
        // either of them would form a group of three
        let board = board_with(&[(2, 2), (2, 3)], &[]);
        for x in 1..=3 {
            for y in 1..=4 {
                if board.cell(x, y).is_empty() {
                    assert!(
                        !board.is_valid(Color::Black, Move::Add { x, y }),
                        "({}, {}) should be rejected",
                        x,
                        y
                    );
                }
            }
        }
        // far away, and next to the pair for the other color, is fine
        assert!(board.is_valid(Color::Black, Move::Add { x: 5, y: 5 }));
        assert!(board.is_valid(Color::White, Move::Add { x: 3, y: 2 }));
    }

    #[test]
    fn step_rules() {
        let board = board_with(&TEN_BLACK, &[]);
        assert_eq!(board.piece_count(Color::Black), MAX_PIECES);

        // no more adds once all ten pieces are down
        assert!(!board.is_valid(Color::Black, Move::Add { x: 4, y: 6 }));
        // the source must hold the mover's own piece
        assert!(!board.is_valid(
            Color::Black,
            Move::Step { x: 4, y: 6, from_x: 2, from_y: 2 }
        ));
        // the destination may touch a friend only because the source is
        // vacated first: (4, 4) touches (3, 3) and the departing (3, 5)
        assert!(board.is_valid(
            Color::Black,
            Move::Step { x: 4, y: 4, from_x: 3, from_y: 5 }
        ));
        // moving any other piece there leaves both neighbors in place
        assert!(!board.is_valid(
            Color::Black,
            Move::Step { x: 4, y: 4, from_x: 1, from_y: 1 }
        ));

        // with a piece still in hand, steps are not available yet
        let nine: Vec<_> = TEN_BLACK[..9].to_vec();
        let board = board_with(&nine, &[]);
        assert!(!board.is_valid(
            Color::Black,
            Move::Step { x: 4, y: 4, from_x: 3, from_y: 5 }
        ));
        assert!(board.is_valid(Color::Black, Move::Add { x: 4, y: 6 }));
    }

    #[test]
    fn legal_move_phases() {
        // 6 columns x 8 rows are open to each color on an empty board
        let board = Board::new();
        let adds = board.legal_moves(Color::Black);
        assert_eq!(adds.len(), 48);
        assert!(adds.iter().all(|mv| matches!(mv, Move::Add { .. })));
        assert_eq!(board.legal_moves(Color::White).len(), 48);

        let board = board_with(&TEN_BLACK, &[]);
        let steps = board.legal_moves(Color::Black);
        assert!(!steps.is_empty());
        assert!(steps.iter().all(|mv| matches!(mv, Move::Step { .. })));
    }

    #[test]
    fn apply_reverse_round_trip() {
        // add phase
        let board = board_with(&[(2, 2), (4, 4)], &[(5, 1)]);
        for &color in [Color::Black, Color::White].iter() {
            for mv in board.legal_moves(color) {
                let mut trial = board.clone();
                assert!(trial.apply_move(color, mv));
                trial.reverse_move(color, mv);
                assert!(trial == board, "{} did not reverse cleanly", mv);
            }
        }

        // step phase
        let board = board_with(&TEN_BLACK, &[]);
        for mv in board.legal_moves(Color::Black) {
            let mut trial = board.clone();
            assert!(trial.apply_move(Color::Black, mv));
            trial.reverse_move(Color::Black, mv);
            assert!(trial == board, "{} did not reverse cleanly", mv);
        }
    }

    #[test]
    fn rejected_moves_change_nothing() {
        let mut board = board_with(&[(3, 3)], &[]);
        let before = board.clone();
        assert!(!board.apply_move(Color::Black, Move::Add { x: 3, y: 3 }));
        assert!(!board.apply_move(Color::Black, Move::Add { x: 0, y: 0 }));
        assert!(!board.apply_move(
            Color::Black,
            Move::Step { x: 4, y: 4, from_x: 3, from_y: 3 }
        ));
        assert!(board == before);
    }

    #[test]
    fn connected_chips() {
        let board = board_with(&[(2, 2), (2, 5), (5, 2), (4, 4)], &[(2, 3)]);
        // the white piece at (2, 3) blocks the ray towards (2, 5)
        assert_eq!(board.connected(2, 2), vec![(5, 2), (4, 4)]);
        // (2, 5) only sees (5, 2) down the diagonal
        assert_eq!(board.connected(2, 5), vec![(5, 2)]);
        // empty cells have no connections
        assert!(board.connected(0, 0).is_empty());
    }

    #[test]
    fn network_detected() {
        let board = board_with(&[(2, 0), (2, 3), (3, 2), (6, 5), (3, 5), (3, 7)], &[]);
        assert!(board.has_network(Color::Black));
        assert!(!board.has_network(Color::White));

        let board = board_with(&[(6, 0), (6, 5), (5, 5), (3, 3), (3, 5), (5, 7)], &[]);
        assert!(board.has_network(Color::Black));

        // longer than six pieces is fine too
        let board = board_with(
            &[(2, 0), (2, 5), (3, 5), (1, 3), (3, 3), (5, 5), (5, 7)],
            &[],
        );
        assert!(board.has_network(Color::Black));
    }

    #[test]
    fn network_rejected() {
        // the only goal-to-goal chain would carry through a second piece
        // sitting in the starting goal edge, which only endpoints may touch
        let board = board_with(&[(6, 0), (2, 0), (4, 2), (3, 3), (3, 5), (5, 7)], &[]);
        assert!(!board.has_network(Color::Black));

        // an opposing piece breaks the only link to the far goal
        let board = board_with(
            &[(2, 0), (2, 5), (3, 5), (3, 3), (5, 5), (5, 7)],
            &[(5, 6)],
        );
        assert!(!board.has_network(Color::Black));

        // a straight line is a single segment, not a chain of six
        let board = board_with(&[(2, 0), (2, 1), (2, 2), (2, 3), (2, 4), (2, 7)], &[]);
        assert!(!board.has_network(Color::Black));
    }

    #[test]
    fn longest_path_lengths() {
        let board = board_with(&[(2, 0), (2, 3), (3, 2), (6, 5), (3, 5), (3, 7)], &[]);
        assert_eq!(board.longest_path(Color::Black), 6);
        assert_eq!(board.longest_path(Color::White), 0);

        let board = board_with(&[(6, 0), (2, 0), (4, 2), (3, 3), (3, 5), (5, 7)], &[]);
        assert_eq!(board.longest_path(Color::Black), 5);
    }

    #[test]
    fn win_scores_dominate() {
        let won = board_with(&[(2, 0), (2, 3), (3, 2), (6, 5), (3, 5), (3, 7)], &[]);
        let weights = Weights::default();
        assert_eq!(evaluate(Color::Black, &won, &weights), WIN_SCORE);
        assert_eq!(evaluate(Color::White, &won, &weights), LOSS_SCORE);

        let ongoing = board_with(&[(2, 3), (4, 5)], &[(5, 2), (3, 6)]);
        let score = evaluate(Color::Black, &ongoing, &weights);
        assert!(score < WIN_SCORE && score > LOSS_SCORE);
    }

    #[test]
    fn empty_board_is_neutral() {
        let board = Board::new();
        let weights = Weights::default();
        assert_eq!(evaluate(Color::Black, &board, &weights), 0.0);
        assert_eq!(evaluate(Color::White, &board, &weights), 0.0);
    }

    #[test]
    fn forced_opening_move() {
        let mut board = Board::new();
        let mut searcher = Searcher::new(Color::White, 3);
        assert_eq!(searcher.best_move(&mut board), Move::Add { x: 3, y: 3 });

        // the centre is taken, fall back to its neighbor
        let mut board = board_with(&[], &[(3, 3)]);
        let mut searcher = Searcher::new(Color::Black, 3);
        assert_eq!(searcher.best_move(&mut board), Move::Add { x: 3, y: 4 });

        // with both centre cells taken the first ply is searched like any
        // other, and the chosen move must still be legal
        let mut board = board_with(&[], &[(3, 3), (3, 4)]);
        let mut searcher = Searcher::new(Color::Black, 1);
        let best = searcher.best_move(&mut board);
        assert!(matches!(best, Move::Add { .. }));
        assert!(board.is_valid(Color::Black, best));
    }

    #[test]
    fn search_leaves_board_untouched() {
        let mut board = board_with(&[(2, 3), (4, 5)], &[(5, 2), (3, 6)]);
        let before = board.clone();
        let mut searcher = Searcher::new(Color::White, 2);
        let best = searcher.best_move(&mut board);
        assert!(board == before);
        assert!(board.is_valid(Color::White, best));
        assert!(searcher.node_count > 0);
    }

    // full-width minimax over the same conventions as the searcher, used
    // to show pruning does not change the chosen value
    fn minimax(board: &mut Board, root: Color, to_move: Color, depth: u32, weights: &Weights) -> f64 {
        if depth == 0 || board.has_network(root) || board.has_network(root.opponent()) {
            return evaluate(root, board, weights);
        }
        if board.piece_count(to_move) == 0 {
            return 0.0;
        }
        let moves = board.legal_moves(to_move);
        if moves.is_empty() {
            return 0.0;
        }
        let maximizing = to_move == root;
        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        for mv in moves {
            board.apply_move(to_move, mv);
            let score = minimax(board, root, to_move.opponent(), depth - 1, weights);
            board.reverse_move(to_move, mv);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        best
    }

    #[test]
    fn pruning_preserves_the_minimax_value() {
        let weights = Weights::default();
        let mut board = board_with(&[(2, 3), (4, 5)], &[(5, 2), (3, 6)]);

        let full_width = minimax(&mut board, Color::White, Color::White, 2, &weights);

        let mut searcher = Searcher::new(Color::White, 2);
        let best = searcher.best_move(&mut board);

        // score the pruned search's choice with the exhaustive search
        assert!(board.apply_move(Color::White, best));
        let chosen = minimax(&mut board, Color::White, Color::Black, 1, &weights);
        board.reverse_move(Color::White, best);

        assert_eq!(chosen, full_width);
    }

    #[test]
    fn machine_player_game_flow() {
        let mut player = MachinePlayer::with_depth(Color::White, 2);
        let first = player.choose_move();
        assert_eq!(first, Move::Add { x: 3, y: 3 });
        assert_eq!(player.board().cell(3, 3), Cell::White);

        // opponent moves are validated before being recorded
        assert!(player.opponent_move(Move::Add { x: 2, y: 2 }));
        assert!(!player.opponent_move(Move::Add { x: 2, y: 2 }));
        assert!(!player.opponent_move(Move::Add { x: 0, y: 0 }));

        // forced moves set up positions for the player itself
        assert!(player.force_move(Move::Add { x: 5, y: 4 }));
        assert_eq!(player.board().piece_count(Color::White), 2);

        let second = player.choose_move();
        assert!(matches!(second, Move::Add { .. }));
        assert_eq!(player.board().piece_count(Color::White), 3);
    }
}

use super::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// A legal 42-move game from an A start that fills the board without either
/// side ever completing four in a row.
const DRAWN_GAME: [usize; CELLS] = [
    3, 5, 6, 4, 3, 1, 2, 0, 0, 1, 3, 1, 2, 6, 4, 6, 2, 4, 6, 5, 4, 5, 6, 4, 6, 2, 2, 0, 2, 4, 5,
    5, 0, 5, 1, 3, 1, 0, 3, 3, 1, 0,
];

/// Play moves one at a time and return the index of the first winning move.
fn first_win(starting: Player, moves: &[usize]) -> Option<(usize, Player)> {
    let mut board = Board::new(Some(starting));
    for (i, &col) in moves.iter().enumerate() {
        let mover = board.turn();
        board.make_move(col);
        if board.check_win(mover) {
            return Some((i, mover));
        }
    }
    None
}

#[test]
fn test_initial_state() {
    let board = Board::new(Some(Player::A));
    assert_eq!(board.cells(), &[[EMPTY; COLUMNS]; ROWS]);
    assert_eq!(board.column_heights(), &[0; COLUMNS]);
    assert_eq!(board.turn(), Player::A);
    assert_eq!(board.move_count(), 0);
    assert_eq!(board.last_mover(), None);
    assert!(!board.is_full());
    assert!(!board.is_terminal());
}

#[test]
fn test_random_starting_player() {
    let mut seen = [false; 2];
    for _ in 0..200 {
        match Board::new(None).turn() {
            Player::A => seen[0] = true,
            Player::B => seen[1] = true,
        }
    }
    assert_eq!(seen, [true, true]);
}

#[test]
fn test_legal_moves() {
    let board = Board::new(Some(Player::A));
    assert_eq!(board.legal_moves(), (0..COLUMNS).collect::<Vec<_>>());

    let board = Board::from_moves(Player::A, &[3, 3, 3, 3, 3, 3]);
    assert_eq!(board.legal_moves(), vec![0, 1, 2, 4, 5, 6]);
}

#[test]
fn test_make_move() {
    let mut board = Board::new(Some(Player::B));
    board.make_move(3);

    assert_eq!(board.cell(0, 3), Player::B.value());
    assert_eq!(board.column_heights()[3], 1);
    assert_eq!(board.history(), &[(0, 3)]);
    assert_eq!(board.turn(), Player::A);
    assert_eq!(board.last_mover(), Some(Player::B));
}

#[test]
fn test_stacking_pieces() {
    let mut board = Board::new(Some(Player::A));

    for i in 0..ROWS {
        board.make_move(0);
        assert_eq!(board.column_heights()[0], i + 1);
        let expected = if i % 2 == 0 { Player::A } else { Player::B };
        assert_eq!(board.cell(i, 0), expected.value());
    }

    assert!(!board.legal_moves().contains(&0));
    assert_eq!(board.validate_move(0), Err(MoveError::ColumnFull(0)));
}

#[test]
fn test_validate_move() {
    let board = Board::new(Some(Player::A));
    assert_eq!(board.validate_move(6), Ok(()));
    assert_eq!(
        board.validate_move(COLUMNS),
        Err(MoveError::ColumnOutOfRange {
            column: COLUMNS,
            columns: COLUMNS
        })
    );
}

#[test]
#[should_panic]
fn test_full_column_is_contract_violation() {
    let mut board = Board::from_moves(Player::A, &[2, 2, 2, 2, 2, 2]);
    board.make_move(2);
}

#[test]
fn test_unmove_on_empty_history_is_noop() {
    let mut board = Board::new(Some(Player::A));
    board.unmove();
    assert_eq!(board, Board::new(Some(Player::A)));
}

#[test]
fn test_move_unmove_inverse_on_random_games() {
    for seed in 0..20 {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut board = Board::new(Some(Player::A));

        while !board.is_terminal() {
            // Every legal column must round-trip from this position
            for col in board.legal_moves() {
                let before = board.clone();
                board.make_move(col);
                assert_eq!(board.turn(), before.turn().opponent());
                board.unmove();
                assert_eq!(board, before, "seed={seed} col={col}");
            }

            let legal = board.legal_moves();
            board.make_move(legal[rng.gen_range(0..legal.len())]);
        }
    }
}

#[test]
fn test_history_matches_discs() {
    let board = Board::from_moves(Player::B, &[3, 2, 4, 4, 2, 1, 5]);
    let discs = board
        .cells()
        .iter()
        .flatten()
        .filter(|&&cell| cell != EMPTY)
        .count();
    assert_eq!(board.history().len(), discs);

    for col in 0..COLUMNS {
        for row in 0..ROWS {
            let occupied = board.cell(row, col) != EMPTY;
            assert_eq!(occupied, row < board.column_heights()[col]);
        }
    }
}

#[test]
fn test_alternating_center_column_never_wins() {
    let mut board = Board::new(Some(Player::A));
    for _ in 0..ROWS {
        let mover = board.turn();
        board.make_move(3);
        assert!(!board.check_win(mover));
        assert!(!board.check_win(mover.opponent()));
    }
    assert_eq!(board.column_heights()[3], ROWS);
}

#[test]
fn test_vertical_win_fires_on_fourth_disc() {
    // A stacks column 3, B stacks column 4
    let mut board = Board::new(Some(Player::A));
    for i in 0..4 {
        board.make_move(3);
        assert_eq!(board.check_win(Player::A), i == 3, "after A disc {}", i + 1);
        assert!(!board.check_win(Player::B));
        if i < 3 {
            board.make_move(4);
            assert!(!board.check_win(Player::B));
        }
    }
    assert!(board.last_move_won());
    assert!(board.is_terminal());

    // Undoing the winning disc clears the win
    board.unmove();
    assert!(!board.check_win(Player::A));
}

#[test]
fn test_horizontal_win() {
    assert_eq!(
        first_win(Player::A, &[0, 0, 1, 1, 2, 2, 3]),
        Some((6, Player::A))
    );
    assert_eq!(
        first_win(Player::B, &[0, 0, 1, 1, 2, 2, 3]),
        Some((6, Player::B))
    );
}

#[test]
fn test_diagonal_win_ascending() {
    // A at (0,0), (1,1), (2,2), (3,3)
    let moves = [0, 1, 1, 2, 2, 3, 2, 3, 3, 6, 3];
    assert_eq!(first_win(Player::A, &moves), Some((10, Player::A)));
}

#[test]
fn test_diagonal_win_descending() {
    // A at (0,3), (1,2), (2,1), (3,0)
    let moves = [3, 2, 2, 1, 1, 0, 1, 0, 0, 4, 0];
    assert_eq!(first_win(Player::A, &moves), Some((10, Player::A)));
}

#[test]
fn test_win_detection_is_per_player() {
    let board = Board::from_moves(Player::A, &[0, 1, 0, 1, 0, 1, 0]);
    assert!(board.check_win(Player::A));
    assert!(!board.check_win(Player::B));
}

#[test]
fn test_full_board_draw() {
    let mut board = Board::new(Some(Player::A));
    for &col in DRAWN_GAME.iter() {
        assert!(!board.is_full());
        board.make_move(col);
        assert!(!board.check_win(Player::A));
        assert!(!board.check_win(Player::B));
    }

    assert!(board.is_full());
    assert!(board.legal_moves().is_empty());
    assert_eq!(board.move_count(), CELLS);
    assert!(board.is_terminal());
    assert!(!board.last_move_won());
}

#[test]
fn test_display() {
    let board = Board::from_moves(Player::A, &[3, 3, 0]);
    let rendered = board.to_string();
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines.len(), ROWS + 1);
    assert_eq!(lines[ROWS - 1], "X . . X . . .");
    assert_eq!(lines[ROWS - 2], ". . . O . . .");
    assert_eq!(lines[ROWS], "0 1 2 3 4 5 6");
}

#[test]
fn test_random_games_invariants() {
    for seed in 0..20 {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut board = Board::new(Some(if seed % 2 == 0 { Player::A } else { Player::B }));
        let mut move_count = 0;

        loop {
            let legal = board.legal_moves();
            assert!(
                !legal.is_empty(),
                "Non-full board must have legal moves (seed={}, moves={})",
                seed,
                move_count
            );

            let col = legal[rng.gen_range(0..legal.len())];
            let mover = board.turn();
            board.make_move(col);
            move_count += 1;

            assert_eq!(board.turn(), mover.opponent(), "seed={}", seed);
            assert_eq!(board.move_count(), move_count, "seed={}", seed);

            if board.check_win(mover) {
                // The opponent cannot have won on the same move
                assert!(!board.check_win(mover.opponent()), "seed={}", seed);
                break;
            }
            if board.is_full() {
                break;
            }
        }

        assert!(
            move_count <= CELLS,
            "Game should finish within {} moves (seed={})",
            CELLS,
            seed
        );
        assert!(board.is_terminal(), "seed={}", seed);
    }
}

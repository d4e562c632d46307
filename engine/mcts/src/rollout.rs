//! Uniformly random playouts.

use games_connect4::Board;
use rand::Rng;

use crate::node::{DRAW, LOSS, WIN};

/// Play random legal moves until someone wins or the board fills.
///
/// Returns the outcome for the player to move when the rollout started:
/// [`WIN`], [`DRAW`] or [`LOSS`]. Every move is undone before returning.
/// `board` must not be terminal.
pub fn rollout<R: Rng>(board: &mut Board, rng: &mut R) -> f64 {
    let player = board.turn();
    let mut scope = board.scoped();

    loop {
        let legal = scope.legal_moves();
        debug_assert!(!legal.is_empty(), "rollout from a full board");
        let column = legal[rng.gen_range(0..legal.len())];

        let mover = scope.turn();
        scope.make_move(column);
        if scope.check_win(mover) {
            return if mover == player { WIN } else { LOSS };
        }
        if scope.is_full() {
            return DRAW;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use games_connect4::Player;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_rollout_restores_board() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let mut board = Board::from_moves(Player::B, &[3, 3, 2, 4]);
        let before = board.clone();

        for _ in 0..50 {
            let outcome = rollout(&mut board, &mut rng);
            assert!([WIN, DRAW, LOSS].contains(&outcome));
            assert_eq!(board, before);
        }
    }

    #[test]
    fn test_rollout_last_cell_is_draw() {
        const DRAWN_GAME: [usize; 42] = [
            3, 5, 6, 4, 3, 1, 2, 0, 0, 1, 3, 1, 2, 6, 4, 6, 2, 4, 6, 5, 4, 5, 6, 4, 6, 2, 2, 0, 2,
            4, 5, 5, 0, 5, 1, 3, 1, 0, 3, 3, 1, 0,
        ];
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        let mut board = Board::from_moves(Player::A, &DRAWN_GAME[..41]);
        assert_eq!(rollout(&mut board, &mut rng), DRAW);
    }

    #[test]
    fn test_rollout_is_reproducible() {
        let board = Board::new(Some(Player::A));
        let outcomes = |seed| {
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            let mut board = board.clone();
            (0..20)
                .map(|_| rollout(&mut board, &mut rng))
                .collect::<Vec<_>>()
        };
        assert_eq!(outcomes(9), outcomes(9));
    }

    fn mean_outcome(moves: &[usize], seed: u64) -> f64 {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut board = Board::from_moves(Player::A, moves);
        let total: f64 = (0..2000).map(|_| rollout(&mut board, &mut rng)).sum();
        total / 2000.0
    }

    #[test]
    fn test_rollout_reports_for_player_to_move() {
        // A to move with a vertical four available in column 0
        let attacker = mean_outcome(&[0, 1, 0, 1, 0, 6], 5);
        assert!(attacker > 0.6, "attacker mean={attacker}");

        // B to move and only column 0 stops A's vertical four
        let defender = mean_outcome(&[0, 1, 0, 1, 0], 5);
        assert!(defender < 0.45, "defender mean={defender}");
    }
}

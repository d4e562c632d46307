//! Depth-limited alpha-beta evaluators.
//!
//! [`AlphaBeta::evaluate_max`] scores a position where the searching player
//! is to move; [`AlphaBeta::evaluate_min`] scores one where the opponent is.
//! Each tries every legal move through a [`Board::play`] guard, so the board
//! is back in its original state whenever an evaluator returns, early exits
//! included.
//!
//! The `cutoff` argument is the best value the caller has already secured.
//! Pruning is strict: a MAX level stops once it exceeds its cutoff and a MIN
//! level once it drops below it, so equal values are still explored.

use games_connect4::{Board, HeuristicVariant, Player};
use tracing::trace;

use crate::score::{decay_loss, decay_win, DRAW_SCORE, LOSS_SCORE, WIN_SCORE};

/// Recursive evaluator bound to one root position.
#[derive(Debug, Clone)]
pub struct AlphaBeta {
    /// +1.0 when the searching player is A, -1.0 when it is B. The heuristic
    /// is A-positive, so this orients leaf values toward the searcher.
    perspective: f64,
    heuristic: HeuristicVariant,
    nodes: u64,
}

impl AlphaBeta {
    /// Create an evaluator searching on behalf of `player`.
    pub fn new(player: Player, heuristic: HeuristicVariant) -> Self {
        let perspective = match player {
            Player::A => 1.0,
            Player::B => -1.0,
        };
        Self {
            perspective,
            heuristic,
            nodes: 0,
        }
    }

    /// Positions visited so far.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Heuristic value of `board` from the searching player's side.
    #[inline]
    pub fn leaf_value(&self, board: &Board) -> f64 {
        self.perspective * board.heuristic(self.heuristic)
    }

    /// Best value the searching player can force from `board`, looking
    /// `depth_remaining` further plies below the moves tried here.
    ///
    /// Returns as soon as the running best exceeds `cutoff`.
    pub fn evaluate_max(&mut self, board: &mut Board, cutoff: f64, depth_remaining: u32) -> f64 {
        let mut best = LOSS_SCORE;

        for column in board.legal_moves() {
            let mover = board.turn();
            let mut child = board.play(column);
            self.nodes += 1;

            if child.check_win(mover) {
                return WIN_SCORE;
            }
            if child.is_full() {
                return DRAW_SCORE;
            }

            let value = if depth_remaining == 0 {
                self.leaf_value(&child)
            } else {
                decay_win(self.evaluate_min(&mut child, best, depth_remaining - 1))
            };
            drop(child);

            best = best.max(value);
            if best > cutoff {
                trace!(column, best, cutoff, "max cutoff");
                return best;
            }
        }

        best
    }

    /// Worst value the opponent can force on the searching player from
    /// `board`. Mirror image of [`AlphaBeta::evaluate_max`].
    ///
    /// Returns as soon as the running best drops below `cutoff`.
    pub fn evaluate_min(&mut self, board: &mut Board, cutoff: f64, depth_remaining: u32) -> f64 {
        let mut best = WIN_SCORE;

        for column in board.legal_moves() {
            let mover = board.turn();
            let mut child = board.play(column);
            self.nodes += 1;

            if child.check_win(mover) {
                return LOSS_SCORE;
            }
            if child.is_full() {
                return DRAW_SCORE;
            }

            let value = if depth_remaining == 0 {
                self.leaf_value(&child)
            } else {
                decay_loss(self.evaluate_max(&mut child, best, depth_remaining - 1))
            };
            drop(child);

            best = best.min(value);
            if best < cutoff {
                trace!(column, best, cutoff, "min cutoff");
                return best;
            }
        }

        best
    }
}

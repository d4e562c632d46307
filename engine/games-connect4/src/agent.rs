//! Move-selection contract shared by every strategy.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::board::Board;

/// Something that picks a column to play.
///
/// Implementations may mutate the board while thinking but must hand it back
/// exactly as they received it.
pub trait Agent {
    /// Short name used in logs and battle summaries.
    fn name(&self) -> &str;

    /// Choose a legal column for [`Board::turn`].
    ///
    /// # Panics
    /// Calling this on a finished game (won or full board) is a caller
    /// contract violation.
    fn select_move(&mut self, board: &mut Board) -> usize;
}

impl<A: Agent + ?Sized> Agent for Box<A> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn select_move(&mut self, board: &mut Board) -> usize {
        (**self).select_move(board)
    }
}

/// Plays a uniformly random legal column.
#[derive(Debug)]
pub struct RandomAgent {
    rng: ChaCha20Rng,
}

impl RandomAgent {
    pub fn new() -> Self {
        Self {
            rng: ChaCha20Rng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str {
        "random"
    }

    fn select_move(&mut self, board: &mut Board) -> usize {
        assert!(
            !board.is_terminal(),
            "select_move called on a finished game"
        );
        *board
            .legal_moves()
            .choose(&mut self.rng)
            .expect("non-terminal board has a legal move")
    }
}

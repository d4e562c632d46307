//! Scoped move guard.
//!
//! Search code plays a move, recurses, and must undo the move before
//! returning, including on pruning and early-win paths. [`Scoped`] records the
//! history length when it is created and rewinds the board back to it on drop,
//! so the undo cannot be forgotten.

use std::ops::{Deref, DerefMut};

use crate::board::Board;

/// Exclusive borrow of a [`Board`] that restores the board on drop.
///
/// Moves made through the guard are undone when it drops. Calling
/// [`Board::unmove`] through the guard past its checkpoint is allowed but
/// leaves those earlier moves undone.
#[derive(Debug)]
pub struct Scoped<'a> {
    board: &'a mut Board,
    checkpoint: usize,
}

impl<'a> Scoped<'a> {
    pub(crate) fn new(board: &'a mut Board) -> Self {
        let checkpoint = board.move_count();
        Self { board, checkpoint }
    }

    /// Number of moves made through this guard that are still on the board.
    pub fn depth(&self) -> usize {
        self.board.move_count().saturating_sub(self.checkpoint)
    }
}

impl Deref for Scoped<'_> {
    type Target = Board;

    #[inline]
    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Scoped<'_> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Scoped<'_> {
    #[inline]
    fn drop(&mut self) {
        self.board.rewind_to(self.checkpoint);
    }
}

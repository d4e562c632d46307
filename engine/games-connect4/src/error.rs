//! Validation errors for input coming from outside the search core.
//!
//! The search itself never produces these: it only plays columns returned by
//! [`Board::legal_moves`](crate::Board::legal_moves). They exist so front ends
//! can reject bad user input before calling into the board.

use thiserror::Error;

/// Why a requested column cannot be played.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("Column {column} is out of range (board has {columns} columns)")]
    ColumnOutOfRange { column: usize, columns: usize },

    #[error("Column {0} is full")]
    ColumnFull(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    #[error("Invalid player value: {0} (expected -1 or 1)")]
    Invalid(i8),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeuristicError {
    #[error("Unknown heuristic variant: {0} (expected 0, 1 or 2)")]
    UnknownVariant(u8),
}

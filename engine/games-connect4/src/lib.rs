//! Connect 4 board for game-tree search.
//!
//! Connect 4 is a two-player connection game where players drop discs into a
//! 7-column, 6-row vertically suspended grid. The first player to form a
//! horizontal, vertical, or diagonal line of four discs wins.
//!
//! Unlike a copy-on-step game state, the [`Board`] here is mutated in place and
//! undone with [`Board::unmove`], so search code can walk millions of positions
//! without cloning. [`Board::play`] wraps a move in a [`Scoped`] guard that
//! undoes it on drop, which keeps every recursive caller balanced even along
//! early-return paths.
//!
//! # Board Layout
//!
//! The grid is indexed `[row][column]`, with row 0 at the bottom:
//! ```text
//! Row 5: [ ][ ][ ][ ][ ][ ][ ]  <- Top
//! Row 4: [ ][ ][ ][ ][ ][ ][ ]
//! Row 3: [ ][ ][ ][ ][ ][ ][ ]
//! Row 2: [ ][ ][ ][ ][ ][ ][ ]
//! Row 1: [ ][ ][ ][ ][ ][ ][ ]
//! Row 0: [ ][ ][ ][ ][ ][ ][ ]  <- Bottom
//!  Col    0  1  2  3  4  5  6
//! ```
//!
//! # Usage
//!
//! ```rust
//! use games_connect4::{Board, Player};
//!
//! let mut board = Board::new(Some(Player::A));
//! board.make_move(3);
//! assert_eq!(board.turn(), Player::B);
//!
//! {
//!     let probe = board.play(3);
//!     assert_eq!(probe.move_count(), 2);
//! } // the probe move is undone here
//!
//! assert_eq!(board.move_count(), 1);
//! ```

pub mod agent;
pub mod board;
pub mod error;
pub mod heuristic;
pub mod player;
pub mod scoped;

pub use agent::{Agent, RandomAgent};
pub use board::{Board, CELLS, CENTER_COLUMN, COLUMNS, EMPTY, ROWS};
pub use error::{HeuristicError, MoveError, PlayerError};
pub use heuristic::HeuristicVariant;
pub use player::Player;
pub use scoped::Scoped;

#[cfg(test)]
mod tests;

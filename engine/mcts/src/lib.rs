//! Monte Carlo Tree Search player for Connect 4.
//!
//! The search grows a tree of positions rooted at the current board. Each
//! iteration walks down the tree by UCB, expands the leaf it reaches, plays a
//! uniformly random game from one of the new children and records the result
//! on every node along the way. After the iteration budget is spent the root
//! child with the best average result is played.
//!
//! Nodes live in an arena ([`MctsTree`]) and children are indexed by column.
//! The tree never copies the board: positions are reached by replaying the
//! path's columns on the caller's board, which is restored after each
//! iteration.
//!
//! # Usage
//!
//! ```rust
//! use games_connect4::{Board, Player};
//! use mcts::MctsAgent;
//!
//! let mut board = Board::new(Some(Player::A));
//! let mut agent = MctsAgent::new(std::f64::consts::SQRT_2).with_seed(42);
//! let column = agent.choose_move(&mut board, 500);
//! assert!(board.validate_move(column).is_ok());
//! ```
//!
//! # Scores
//!
//! Outcomes are 1 for a win, 0.5 for a draw and 0 for a loss. A node stores
//! them for the player who moved into it, so selection and the final choice
//! both maximize directly, and back-propagation flips `x` to `1 - x` at each
//! level.

pub mod agent;
pub mod config;
pub mod node;
pub mod rollout;
pub mod search;
pub mod tree;

// Re-export main types
pub use agent::MctsAgent;
pub use config::MctsConfig;
pub use node::{MctsNode, NodeId, Terminal};
pub use rollout::rollout;
pub use search::{run_mcts, MctsSearch, SearchResult};
pub use tree::{MctsTree, TreeStats};

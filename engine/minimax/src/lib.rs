//! Alpha-beta minimax search for Connect 4.
//!
//! The agent explores the game tree depth-first on a single mutable
//! [`Board`](games_connect4::Board), playing and undoing moves instead of
//! copying positions. Each level alternates between a MAX evaluator (the
//! searching player) and a MIN evaluator (the opponent) until one of:
//!
//! 1. the move just played wins, returning a sentinel score,
//! 2. the move just played fills the board, scoring a draw,
//! 3. the configured depth runs out, applying the static heuristic.
//!
//! Branches that cannot change the parent's decision are pruned.
//!
//! # Usage
//!
//! ```rust
//! use games_connect4::{Board, HeuristicVariant, Player};
//! use minimax::MinimaxAgent;
//!
//! let mut board = Board::new(Some(Player::A));
//! let agent = MinimaxAgent::new(3, HeuristicVariant::CenterColumn);
//! let column = agent.choose_move(&mut board);
//! assert_eq!(column, 3);
//! ```
//!
//! # Scores
//!
//! Wins and losses use a large finite magnitude rather than infinity. Each ply
//! a forced result travels back up the tree it loses [`score::DECAY_STEP`], so a
//! quicker win outranks a slower one and a slower loss outranks a quicker one.

pub mod agent;
pub mod config;
pub mod score;
pub mod search;

pub use agent::{preference_rank, MinimaxAgent, SearchResult, SearchStats};
pub use config::MinimaxConfig;
pub use search::AlphaBeta;

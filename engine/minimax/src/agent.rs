//! Root driver for alpha-beta search.

use std::time::{Duration, Instant};

use games_connect4::{Agent, Board, HeuristicVariant, CENTER_COLUMN};
use tracing::{debug, trace};

use crate::config::MinimaxConfig;
use crate::score::{decay_steps, decay_win, DRAW_SCORE, LOSS_SCORE, WIN_SCORE};
use crate::search::AlphaBeta;

/// Position of `column` in the tie-break order: center first, then
/// alternating left and right moving outward (3, 2, 4, 1, 5, 0, 6).
pub fn preference_rank(column: usize) -> usize {
    if column < CENTER_COLUMN {
        2 * (CENTER_COLUMN - column) - 1
    } else {
        2 * (column - CENTER_COLUMN)
    }
}

/// Counters from one root search.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SearchStats {
    /// Positions reached by playing a move
    pub nodes: u64,
    pub elapsed: Duration,
}

/// Outcome of [`MinimaxAgent::search`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    pub column: usize,
    /// Value of `column` from the searching player's side
    pub value: f64,
    pub stats: SearchStats,
}

/// Depth-limited alpha-beta player.
#[derive(Debug, Clone)]
pub struct MinimaxAgent {
    config: MinimaxConfig,
    name: String,
}

impl MinimaxAgent {
    pub fn new(depth: u32, heuristic: HeuristicVariant) -> Self {
        Self::with_config(
            MinimaxConfig::default()
                .with_depth(depth)
                .with_heuristic(heuristic),
        )
    }

    pub fn with_config(config: MinimaxConfig) -> Self {
        let name = format!("minimax(d={}, h={})", config.depth, config.heuristic.index());
        Self { config, name }
    }

    pub fn config(&self) -> &MinimaxConfig {
        &self.config
    }

    /// Pick a column for the player to move.
    ///
    /// # Panics
    /// Panics if the game is already over.
    pub fn choose_move(&self, board: &mut Board) -> usize {
        self.search(board).column
    }

    /// Evaluate every root move and return the best one with its value.
    ///
    /// A move that wins or fills the board is returned as soon as it is
    /// seen. Equal values go to the column earlier in [`preference_rank`]
    /// order. The board is unchanged on return.
    ///
    /// # Panics
    /// Panics if the game is already over.
    pub fn search(&self, board: &mut Board) -> SearchResult {
        assert!(
            !board.is_terminal(),
            "choose_move called on a finished game"
        );

        let start = Instant::now();
        let depth = self.config.depth;
        let mut search = AlphaBeta::new(board.turn(), self.config.heuristic);
        let mut best: Option<(usize, f64)> = None;

        for column in board.legal_moves() {
            let mover = board.turn();
            let mut child = board.play(column);

            let immediate = if child.check_win(mover) {
                Some(WIN_SCORE)
            } else if child.is_full() {
                Some(DRAW_SCORE)
            } else {
                None
            };
            if let Some(value) = immediate {
                trace!(column, value, "root move ends the game");
                return self.finish(column, value, search.nodes() + 1, start);
            }

            let value = if depth == 0 {
                search.leaf_value(&child)
            } else {
                let floor = best.map_or(LOSS_SCORE, |(_, value)| value);
                decay_win(search.evaluate_min(&mut child, floor, depth - 1))
            };
            drop(child);
            trace!(column, value, "root move evaluated");

            best = match best {
                None => Some((column, value)),
                Some((_, best_value)) if value > best_value => Some((column, value)),
                Some((best_column, best_value))
                    if value == best_value
                        && preference_rank(column) < preference_rank(best_column) =>
                {
                    Some((column, value))
                }
                keep => keep,
            };
        }

        match best {
            Some((column, value)) => self.finish(column, value, search.nodes(), start),
            None => unreachable!("non-terminal board has a legal move"),
        }
    }

    fn finish(&self, column: usize, value: f64, nodes: u64, start: Instant) -> SearchResult {
        let stats = SearchStats {
            nodes,
            elapsed: start.elapsed(),
        };
        debug!(
            column,
            value,
            forced_in = ?decay_steps(value),
            nodes = stats.nodes,
            elapsed_ms = stats.elapsed.as_millis() as u64,
            "minimax search complete"
        );
        SearchResult {
            column,
            value,
            stats,
        }
    }
}

impl Default for MinimaxAgent {
    fn default() -> Self {
        Self::with_config(MinimaxConfig::default())
    }
}

impl Agent for MinimaxAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn select_move(&mut self, board: &mut Board) -> usize {
        self.choose_move(board)
    }
}

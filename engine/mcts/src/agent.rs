//! Agent wrapper that owns the random number generator.

use std::time::Instant;

use games_connect4::{Agent, Board};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::config::MctsConfig;
use crate::search::{MctsSearch, SearchResult};
use crate::tree::TreeStats;

/// Monte Carlo Tree Search player.
///
/// Every call builds a fresh tree; nothing is reused between moves.
#[derive(Debug)]
pub struct MctsAgent {
    config: MctsConfig,
    rng: ChaCha20Rng,
    name: String,
    last_stats: Option<TreeStats>,
}

impl MctsAgent {
    /// Create an agent with the given exploration constant and default
    /// iteration budget, seeded from the OS.
    pub fn new(exploration: f64) -> Self {
        Self::with_config(MctsConfig::default().with_exploration(exploration))
    }

    pub fn with_config(config: MctsConfig) -> Self {
        let name = format!("mcts(n={}, c={:.2})", config.iterations, config.exploration);
        Self {
            config,
            rng: ChaCha20Rng::from_entropy(),
            name,
            last_stats: None,
        }
    }

    /// Builder pattern: make rollouts reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = ChaCha20Rng::seed_from_u64(seed);
        self
    }

    pub fn config(&self) -> &MctsConfig {
        &self.config
    }

    /// Tree statistics from the most recent search.
    pub fn last_stats(&self) -> Option<TreeStats> {
        self.last_stats
    }

    /// Run `iterations` simulations and return the column to play.
    ///
    /// # Panics
    /// Panics if the game is already over.
    pub fn choose_move(&mut self, board: &mut Board, iterations: u32) -> usize {
        self.search(board, iterations).column
    }

    /// Like [`MctsAgent::choose_move`] but returns the full result.
    pub fn search(&mut self, board: &mut Board, iterations: u32) -> SearchResult {
        let start = Instant::now();
        let mut search = MctsSearch::new(board, self.config.exploration);
        let result = search.run(board, &mut self.rng, iterations);

        debug!(
            column = result.column,
            value = result.value,
            iterations,
            nodes = result.stats.total_nodes,
            max_depth = result.stats.max_depth,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "MCTS search complete"
        );
        self.last_stats = Some(result.stats);
        result
    }
}

impl Default for MctsAgent {
    fn default() -> Self {
        Self::with_config(MctsConfig::default())
    }
}

impl Agent for MctsAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn select_move(&mut self, board: &mut Board) -> usize {
        let iterations = self.config.iterations;
        self.choose_move(board, iterations)
    }
}

//! MCTS search implementation.
//!
//! Each iteration runs four phases on the caller's board:
//! 1. Selection: descend from the root by UCB, replaying each column
//! 2. Expansion: give the reached leaf one child per legal move
//! 3. Simulation: pick one of the new children and play randomly to the end
//! 4. Backpropagation: record the outcome on every node of the path
//!
//! All moves of an iteration are made through one checkpoint guard, so the
//! board is back in its starting position when the iteration ends.

use games_connect4::Board;
use rand::Rng;
use tracing::trace;

use crate::node::NodeId;
use crate::rollout::rollout;
use crate::tree::{MctsTree, TreeStats};

/// Result of an MCTS search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    /// Column to play
    pub column: usize,

    /// Expected outcome of `column` for the player to move, in [0, 1]
    pub value: f64,

    /// Number of iterations performed
    pub iterations: u32,

    pub stats: TreeStats,
}

/// MCTS search state for one root position.
#[derive(Debug)]
pub struct MctsSearch {
    tree: MctsTree,
    exploration: f64,
}

impl MctsSearch {
    /// Create a search rooted at `board` and expand the root.
    ///
    /// # Panics
    /// Panics if the game is already over.
    pub fn new(board: &mut Board, exploration: f64) -> Self {
        assert!(
            !board.is_terminal(),
            "choose_move called on a finished game"
        );

        let mut tree = MctsTree::new();
        tree.expand(tree.root(), board);
        Self { tree, exploration }
    }

    pub fn tree(&self) -> &MctsTree {
        &self.tree
    }

    /// Run `iterations` simulations, then pick the move to play.
    pub fn run<R: Rng>(&mut self, board: &mut Board, rng: &mut R, iterations: u32) -> SearchResult {
        for _ in 0..iterations {
            self.simulate(board, rng);
        }

        let root = self.tree.get(self.tree.root());
        let (column, value) = match self.tree.best_column() {
            Some(column) => {
                let value = root.children[column]
                    .map_or(0.0, |id| self.tree.get(id).expected_score());
                (column, value)
            }
            None => unreachable!("expanded root of a live game has children"),
        };

        SearchResult {
            column,
            value,
            iterations,
            stats: self.tree.stats(),
        }
    }

    /// Run a single simulation (select -> expand -> roll out -> backpropagate).
    pub fn simulate<R: Rng>(&mut self, board: &mut Board, rng: &mut R) {
        let mut scope = board.scoped();

        // Selection: traverse to a leaf
        let leaf_id = self.select(&mut scope);
        let leaf = self.tree.get(leaf_id);

        // If terminal, backpropagate the terminal value
        if let Some(terminal) = leaf.terminal {
            self.tree.backpropagate(leaf_id, terminal.value());
            trace!(leaf = leaf_id.0, depth = scope.depth(), "terminal leaf revisited");
            return;
        }

        // Expansion: the root is expanded up front, so this is a fresh leaf
        if !leaf.is_expanded() {
            self.tree.expand(leaf_id, &mut scope);
        }

        // Only a full board has no moves, and that is always flagged terminal
        let Some(child_id) = self.tree.select_child(leaf_id, self.exploration) else {
            return;
        };
        let child = self.tree.get(child_id);
        scope.make_move(child.column as usize);

        // Simulation: the rollout reports for the player to move at the
        // child, which is the opponent of the player who moved into it
        let outcome = match child.terminal {
            Some(terminal) => terminal.value(),
            None => 1.0 - rollout(&mut scope, rng),
        };

        // Backpropagation
        self.tree.backpropagate(child_id, outcome);

        trace!(
            leaf = child_id.0,
            depth = scope.depth(),
            outcome,
            "MCTS simulation complete"
        );
    }

    /// Descend by UCB from the root to a terminal or unexpanded node,
    /// playing each selected column on `board`.
    fn select(&self, board: &mut Board) -> NodeId {
        let mut current = self.tree.root();

        loop {
            let node = self.tree.get(current);

            // Stop at terminal or unexpanded nodes
            if node.terminal.is_some() || !node.is_expanded() {
                return current;
            }

            match self.tree.select_child(current, self.exploration) {
                Some(child_id) => {
                    board.make_move(self.tree.get(child_id).column as usize);
                    current = child_id;
                }
                None => return current,
            }
        }
    }
}

/// Run a complete search and return the chosen move.
pub fn run_mcts<R: Rng>(
    board: &mut Board,
    exploration: f64,
    iterations: u32,
    rng: &mut R,
) -> SearchResult {
    let mut search = MctsSearch::new(board, exploration);
    search.run(board, rng, iterations)
}

//! MCTS tree node representation.
//!
//! Each node is the position reached by playing `column` from its parent.
//! Statistics are kept from the point of view of the player who made that
//! move, so a parent picks the child with the highest score directly.

use games_connect4::COLUMNS;

/// Index into the node arena. Using a newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const NONE: NodeId = NodeId(u32::MAX);

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    pub fn is_some(self) -> bool {
        !self.is_none()
    }
}

/// Game result fixed at a node by the move that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminal {
    /// The player who moved into the node completed four in a row.
    Win,
    /// The move filled the board without a winner.
    Draw,
}

impl Terminal {
    /// Outcome for the player who moved into the node.
    #[inline]
    pub fn value(self) -> f64 {
        match self {
            Terminal::Win => WIN,
            Terminal::Draw => DRAW,
        }
    }
}

/// Outcome values, from the point of view of the player they are reported for.
pub const WIN: f64 = 1.0;
pub const DRAW: f64 = 0.5;
pub const LOSS: f64 = 0.0;

/// A node in the MCTS tree.
#[derive(Debug, Clone)]
pub struct MctsNode {
    /// Parent node index (NONE for root)
    pub parent: NodeId,

    /// Column played from the parent to reach this node
    pub column: u8,

    /// Number of simulations routed through this node
    pub visit_count: u32,

    /// Sum of simulation outcomes for the player who moved into this node
    pub score: f64,

    /// Set when the move into this node ended the game
    pub terminal: Option<Terminal>,

    /// One slot per column, filled for every legal move on expansion
    pub children: [Option<NodeId>; COLUMNS],
}

impl MctsNode {
    /// Create a new root node.
    pub fn new_root() -> Self {
        Self::new_child(NodeId::NONE, 0, None)
    }

    /// Create a new child node.
    pub fn new_child(parent: NodeId, column: u8, terminal: Option<Terminal>) -> Self {
        Self {
            parent,
            column,
            visit_count: 0,
            score: 0.0,
            terminal,
            children: [None; COLUMNS],
        }
    }

    /// Average outcome, 0.0 if never visited.
    #[inline]
    pub fn mean_score(&self) -> f64 {
        if self.visit_count == 0 {
            0.0
        } else {
            self.score / self.visit_count as f64
        }
    }

    /// Value used to pick the final move: exact for terminal nodes,
    /// the observed average otherwise.
    #[inline]
    pub fn expected_score(&self) -> f64 {
        match self.terminal {
            Some(terminal) => terminal.value(),
            None => self.mean_score(),
        }
    }

    /// Selection priority of this node as seen from its parent.
    ///
    /// UCB(n) = mean + c * sqrt(ln(N_parent) / N)
    ///
    /// Ranking: a winning move is always taken, an unvisited node comes next,
    /// and a drawn position scores a flat 0.5 that never gains an exploration
    /// bonus. Takes pre-computed ln(parent_visits) so siblings share it.
    #[inline]
    pub fn ucb_score(&self, parent_visits_ln: f64, exploration: f64) -> f64 {
        match self.terminal {
            Some(Terminal::Win) => f64::INFINITY,
            Some(Terminal::Draw) => DRAW,
            None if self.visit_count == 0 => f64::MAX,
            None => {
                let visits = self.visit_count as f64;
                self.mean_score() + exploration * (parent_visits_ln / visits).sqrt()
            }
        }
    }

    /// Record one simulation outcome.
    #[inline]
    pub fn record(&mut self, outcome: f64) {
        self.visit_count += 1;
        self.score += outcome;
    }

    /// Check if this node has been expanded (has children).
    #[inline]
    pub fn is_expanded(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }

    /// Existing children as `(column, id)` pairs in column order.
    pub fn child_ids(&self) -> impl Iterator<Item = (usize, NodeId)> + '_ {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(column, child)| child.map(|id| (column, id)))
    }
}

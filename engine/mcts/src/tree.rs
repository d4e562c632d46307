//! MCTS tree structure with arena allocation.
//!
//! Nodes are stored in a contiguous Vec and referenced by NodeId indices.
//! The tree never holds a board: a node's position is implied by the
//! columns on the path from the root, replayed on the caller's board.

use games_connect4::Board;

use crate::node::{MctsNode, NodeId, Terminal};

/// MCTS tree with arena-based node storage.
#[derive(Debug)]
pub struct MctsTree {
    /// Arena storing all nodes
    nodes: Vec<MctsNode>,

    /// Root node index (always 0 after initialization)
    root: NodeId,
}

impl MctsTree {
    /// Create a tree holding only an unexpanded root.
    pub fn new() -> Self {
        Self {
            nodes: vec![MctsNode::new_root()],
            root: NodeId(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a reference to a node by ID.
    #[inline]
    pub fn get(&self, id: NodeId) -> &MctsNode {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable reference to a node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MctsNode {
        &mut self.nodes[id.0 as usize]
    }

    /// Allocate a new node and return its ID.
    pub fn allocate(&mut self, node: MctsNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Get the total number of nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty (should never be true after construction).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the arena slice for read access.
    #[inline]
    pub fn arena(&self) -> &[MctsNode] {
        &self.nodes
    }

    /// Add a child to a parent node.
    /// Returns the new child's NodeId.
    pub fn add_child(
        &mut self,
        parent_id: NodeId,
        column: usize,
        terminal: Option<Terminal>,
    ) -> NodeId {
        let child_id = self.allocate(MctsNode::new_child(parent_id, column as u8, terminal));
        self.get_mut(parent_id).children[column] = Some(child_id);
        child_id
    }

    /// Create one child per legal move of `board`, which must be the
    /// position at `node_id`. Each child is flagged if its move ends the game.
    pub fn expand(&mut self, node_id: NodeId, board: &mut Board) {
        debug_assert!(!self.get(node_id).is_expanded(), "node expanded twice");

        for column in board.legal_moves() {
            let mover = board.turn();
            let child = board.play(column);
            let terminal = if child.check_win(mover) {
                Some(Terminal::Win)
            } else if child.is_full() {
                Some(Terminal::Draw)
            } else {
                None
            };
            drop(child);
            self.add_child(node_id, column, terminal);
        }
    }

    /// Select the child to descend into.
    ///
    /// Highest [`MctsNode::ucb_score`] wins; equal scores go to the lowest
    /// column. Returns None for a node with no children.
    pub fn select_child(&self, node_id: NodeId, exploration: f64) -> Option<NodeId> {
        let node = self.get(node_id);
        // Pre-compute ln once instead of per-child comparison
        let parent_visits_ln = (node.visit_count as f64).ln();

        let mut best: Option<(NodeId, f64)> = None;
        for (_, id) in node.child_ids() {
            let score = self.get(id).ucb_score(parent_visits_ln, exploration);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((id, score));
            }
        }
        best.map(|(id, _)| id)
    }

    /// Backpropagate an outcome from a node to the root.
    ///
    /// `outcome` is for the player who moved into `node_id`; it flips to
    /// `1 - outcome` at each level up since plies alternate players.
    pub fn backpropagate(&mut self, node_id: NodeId, outcome: f64) {
        let mut current_id = node_id;
        let mut current_outcome = outcome;

        while current_id.is_some() {
            let node = self.get_mut(current_id);
            node.record(current_outcome);
            current_outcome = 1.0 - current_outcome;
            current_id = node.parent;
        }
    }

    /// Column to play from the root once the search is done.
    ///
    /// A child whose move wins outright is taken first. Otherwise the child
    /// with the highest [`MctsNode::expected_score`] wins, ties going to the
    /// lowest column.
    pub fn best_column(&self) -> Option<usize> {
        let root = self.get(self.root);

        if let Some((column, _)) = root
            .child_ids()
            .find(|&(_, id)| self.get(id).terminal == Some(Terminal::Win))
        {
            return Some(column);
        }

        let mut best: Option<(usize, f64)> = None;
        for (column, id) in root.child_ids() {
            let score = self.get(id).expected_score();
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((column, score));
            }
        }
        best.map(|(column, _)| column)
    }

    /// Get statistics about the tree for debugging.
    pub fn stats(&self) -> TreeStats {
        let root = self.get(self.root);
        TreeStats {
            total_nodes: self.nodes.len(),
            root_visits: root.visit_count,
            max_depth: self.compute_max_depth(self.root, 0),
        }
    }

    fn compute_max_depth(&self, node_id: NodeId, current_depth: u32) -> u32 {
        self.get(node_id)
            .child_ids()
            .map(|(_, id)| self.compute_max_depth(id, current_depth + 1))
            .max()
            .unwrap_or(current_depth)
    }
}

impl Default for MctsTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics about an MCTS tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeStats {
    pub total_nodes: usize,
    pub root_visits: u32,
    pub max_depth: u32,
}

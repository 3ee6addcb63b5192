use std::time::Duration;

use othello_core::{Board, Color, Move};

use crate::config::SearchPolicy;

/// Result of one MCTS decision
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Move chosen for the side to move, or None when it must pass
    pub best_move: Option<Move>,

    /// Board after the chosen move (unchanged on a pass)
    pub board: Board,

    /// Side the decision was made for
    pub color: Color,

    /// Policy the graph was built with
    pub policy: SearchPolicy,

    /// Simulations backed up through the root
    pub simulations: u32,

    /// Win rate of `color` at the chosen child, if it was ever visited
    pub best_win_rate: Option<f64>,

    /// Number of distinct root edges
    pub root_children: usize,

    /// Per root edge: (move, visits, wins for `color`)
    pub root_visit_counts: Vec<(Move, u32, u32)>,

    /// Nodes in the arena when the search stopped
    pub graph_size: usize,

    /// Edges that point at a node reached through another parent
    pub merged_edges: usize,

    /// Longest path from the root to a leaf
    pub depth: usize,

    pub elapsed: Duration,
}

impl SearchResult {
    /// Result for a side without legal moves
    pub fn pass(board: Board, color: Color, policy: SearchPolicy, elapsed: Duration) -> Self {
        Self {
            best_move: None,
            board,
            color,
            policy,
            simulations: 0,
            best_win_rate: None,
            root_children: 0,
            root_visit_counts: Vec::new(),
            graph_size: 0,
            merged_edges: 0,
            depth: 0,
            elapsed,
        }
    }

    pub fn is_pass(&self) -> bool {
        self.best_move.is_none()
    }

    /// Get the visit count for a specific move
    pub fn visit_count_for_move(&self, mv: Move) -> u32 {
        self.root_visit_counts
            .iter()
            .find(|(m, _, _)| *m == mv)
            .map(|&(_, v, _)| v)
            .unwrap_or(0)
    }

    /// Sum of visits over the root edges
    pub fn total_visits(&self) -> u32 {
        self.root_visit_counts.iter().map(|(_, v, _)| v).sum()
    }
}

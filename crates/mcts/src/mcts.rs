use std::time::Instant;

use othello_core::{Board, Color};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::{debug, trace};

use crate::backup::backup;
use crate::config::{MctsConfig, SearchPolicy};
use crate::error::Result;
use crate::expansion::{Expansion, expand};
use crate::rollout::rollout;
use crate::search_result::SearchResult;
use crate::selection::{most_winning_child, select, select_best_child};
use crate::transposition::TranspositionTable;
use crate::tree::{MctsTree, NodeId};

/// Monte Carlo Tree Search for Othello with random rollouts.
///
/// The graph and transposition table are rebuilt for every decision; only
/// the RNG carries over between calls.
pub struct Mcts {
    tree: MctsTree,
    table: TranspositionTable,
    rng: ChaCha20Rng,
}

impl Mcts {
    /// Create a new MCTS instance seeded from OS entropy
    pub fn new() -> Self {
        Self {
            tree: MctsTree::new(),
            table: TranspositionTable::new(),
            rng: ChaCha20Rng::from_entropy(),
        }
    }

    /// Choose a move for `color` on `board`
    pub fn search(
        &mut self,
        board: &Board,
        color: Color,
        config: &MctsConfig,
    ) -> Result<SearchResult> {
        config.validate()?;
        Ok(self.run(board, color, config))
    }

    fn run(&mut self, board: &Board, color: Color, config: &MctsConfig) -> SearchResult {
        let start = Instant::now();
        if let Some(seed) = config.seed {
            self.rng = ChaCha20Rng::seed_from_u64(seed);
        }

        if !board.has_legal_moves(color) {
            self.tree.clear();
            self.table = TranspositionTable::new();
            debug!(policy = %config.policy, %color, "no legal move, passing");
            return SearchResult::pass(*board, color, config.policy, start.elapsed());
        }

        // 1. Fresh graph for this decision, root expanded up front
        self.table = TranspositionTable::new();
        let root_id = self.tree.initialize_root(*board, color);
        if config.policy == SearchPolicy::Smart {
            self.table.insert(board, color, root_id);
        }
        let mut merged_edges = self.expand_leaf(root_id, config.policy);

        // 2. Run simulations until either cap is hit
        let budget = config.time_budget_for(color);
        if self.tree.nodes[root_id].children.len() > 1 {
            while start.elapsed() < budget
                && self.tree.nodes[root_id].total_simulations < config.simulation_ceiling
            {
                merged_edges += self.simulate(root_id, config);
            }
        }

        // 3. Extract results
        self.create_search_result(root_id, board, color, config.policy, merged_edges, start)
    }

    /// One selection, expansion, rollout and backup step.
    ///
    /// Returns the number of edges merged by the expansion, if any.
    fn simulate(&mut self, root_id: NodeId, config: &MctsConfig) -> usize {
        let leaf_id = select(&self.tree, root_id, config.exploration);
        let leaf = &self.tree.nodes[leaf_id];
        let (state, to_move) = (leaf.state, leaf.to_move);

        let mut merged = 0;
        let (rollout_id, result) = if leaf.total_simulations == 0 {
            (leaf_id, rollout(&state, to_move, &mut self.rng))
        } else {
            match expand(&mut self.tree, leaf_id, table_for(&mut self.table, config.policy)) {
                Expansion::Terminal(result) => (leaf_id, result),
                Expansion::Expanded { merged: m, .. } => {
                    merged = m;
                    match select_best_child(&self.tree, leaf_id, config.exploration) {
                        Some(edge) => {
                            let child = &self.tree.nodes[edge.node];
                            (edge.node, rollout(&child.state, child.to_move, &mut self.rng))
                        }
                        None => (leaf_id, rollout(&state, to_move, &mut self.rng)),
                    }
                }
            }
        };

        let updated = backup(&mut self.tree, rollout_id, result);
        trace!(leaf = leaf_id, node = rollout_id, ?result, updated, "simulation");
        merged
    }

    fn expand_leaf(&mut self, node_id: NodeId, policy: SearchPolicy) -> usize {
        match expand(&mut self.tree, node_id, table_for(&mut self.table, policy)) {
            Expansion::Expanded { merged, .. } => merged,
            Expansion::Terminal(_) => 0,
        }
    }

    /// Create search result from root node statistics
    fn create_search_result(
        &self,
        root_id: NodeId,
        board: &Board,
        color: Color,
        policy: SearchPolicy,
        merged_edges: usize,
        start: Instant,
    ) -> SearchResult {
        let root = &self.tree.nodes[root_id];

        let root_visit_counts: Vec<_> = root
            .children
            .iter()
            .map(|edge| {
                let child = &self.tree.nodes[edge.node];
                (edge.mv, child.total_simulations, child.wins_for(color))
            })
            .collect();

        // Nothing visited (empty budget or a single forced move): first legal move
        let chosen =
            most_winning_child(&self.tree, root_id).or_else(|| root.children.first().copied());

        let mut next = *board;
        let (best_move, best_win_rate) = match chosen {
            Some(edge) => {
                next.apply_move(edge.mv, color);
                let child = &self.tree.nodes[edge.node];
                let rate = (child.total_simulations > 0).then(|| child.win_rate(color));
                (Some(edge.mv), rate)
            }
            None => (None, None),
        };

        let result = SearchResult {
            best_move,
            board: next,
            color,
            policy,
            simulations: root.total_simulations,
            best_win_rate,
            root_children: root.children.len(),
            root_visit_counts,
            graph_size: self.tree.size(),
            merged_edges,
            depth: self.tree.depth(root_id),
            elapsed: start.elapsed(),
        };

        debug!(
            %policy,
            %color,
            best_move = ?result.best_move.map(|mv| mv.to_string()),
            simulations = result.simulations,
            root_children = result.root_children,
            win_rate = ?result.best_win_rate,
            graph_size = result.graph_size,
            merged_edges = result.merged_edges,
            elapsed_ms = result.elapsed.as_millis() as u64,
            "decision"
        );
        result
    }

    /// Get the number of nodes in the graph of the last decision
    pub fn tree_size(&self) -> usize {
        self.tree.size()
    }
}

impl Default for Mcts {
    fn default() -> Self {
        Self::new()
    }
}

/// Only smart search merges positions through the table
fn table_for(
    table: &mut TranspositionTable,
    policy: SearchPolicy,
) -> Option<&mut TranspositionTable> {
    match policy {
        SearchPolicy::Naive => None,
        SearchPolicy::Smart => Some(table),
    }
}

/// Pick a move for `color` and return the board after it.
///
/// Stops when `time_budget_ms` has elapsed or the root has seen
/// `simulation_ceiling` simulations, whichever comes first. A side without a
/// legal move gets the board back unchanged.
pub fn decide_move(
    board: &Board,
    color: Color,
    policy: SearchPolicy,
    time_budget_ms: u64,
    simulation_ceiling: u32,
) -> Board {
    let config = MctsConfig::default()
        .with_policy(policy)
        .with_time_budget_ms(time_budget_ms)
        .with_simulation_ceiling(simulation_ceiling);
    Mcts::new().run(board, color, &config).board
}

use crate::tree::{Edge, MctsTree, NodeId};

/// Descend from `root_id` by UCT until reaching a node without children
pub fn select(tree: &MctsTree, root_id: NodeId, exploration: f64) -> NodeId {
    let mut current_id = root_id;

    while let Some(edge) = select_best_child(tree, current_id, exploration) {
        current_id = edge.node;
    }
    current_id
}

/// Child with the highest UCT score.
///
/// Unvisited children score infinity, so they are tried first. Ties keep the
/// earliest edge, which makes selection deterministic for a given graph.
pub fn select_best_child(tree: &MctsTree, node_id: NodeId, exploration: f64) -> Option<Edge> {
    let mut best: Option<(Edge, f64)> = None;
    for &edge in &tree.nodes[node_id].children {
        let score = uct_value(tree, node_id, edge.node, exploration);
        if best.is_none_or(|(_, s)| score > s) {
            best = Some((edge, score));
        }
    }
    best.map(|(edge, _)| edge)
}

/// Calculate the UCT value of `child_id` as seen from `parent_id`
///
/// UCT = W(c) / N(c) + C * sqrt(ln N(p) / N(c))
///
/// Where:
/// - W(c) is the child's win count for the color choosing at the parent
/// - N(c) is the child's simulation count
/// - N(p) is the parent's simulation count
/// - C is the exploration constant
pub fn uct_value(tree: &MctsTree, parent_id: NodeId, child_id: NodeId, exploration: f64) -> f64 {
    let parent = &tree.nodes[parent_id];
    let child = &tree.nodes[child_id];

    if child.total_simulations == 0 {
        return f64::INFINITY;
    }

    let visits = child.total_simulations as f64;
    let exploit = child.wins_for(parent.chooser) as f64 / visits;

    // a shared child can be ahead of a freshly linked parent
    let parent_visits = parent.total_simulations.max(1) as f64;
    let explore = exploration * (parent_visits.ln() / visits).sqrt();

    exploit + explore
}

/// Child with the best raw win rate for the color choosing at `node_id`.
///
/// Children without simulations are skipped; `None` if no child was visited.
pub fn most_winning_child(tree: &MctsTree, node_id: NodeId) -> Option<Edge> {
    let node = &tree.nodes[node_id];
    let mut best: Option<(Edge, f64)> = None;
    for &edge in &node.children {
        let child = &tree.nodes[edge.node];
        if child.total_simulations == 0 {
            continue;
        }
        let rate = child.win_rate(node.chooser);
        if best.is_none_or(|(_, r)| rate > r) {
            best = Some((edge, rate));
        }
    }
    best.map(|(edge, _)| edge)
}

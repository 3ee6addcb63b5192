use std::collections::VecDeque;

use othello_core::GameResult;

use crate::tree::{MctsTree, NodeId};

/// Backup one simulation result from `leaf_id` to the root
///
/// The graph may be a DAG: a shared node has several parents and an ancestor
/// can be reachable along more than one chain. Ancestors are walked breadth
/// first and each distinct node receives the (1 simulation, <=1 win) delta
/// exactly once per call. Returns the number of nodes updated.
pub fn backup(tree: &mut MctsTree, leaf_id: NodeId, result: GameResult) -> usize {
    let epoch = tree.next_backup_epoch();
    let winner = result.winner();

    let mut queue = VecDeque::new();
    tree.nodes[leaf_id].last_backup = epoch;
    queue.push_back(leaf_id);
    let mut updated = 0;

    while let Some(node_id) = queue.pop_front() {
        let node = &mut tree.nodes[node_id];

        // Update statistics
        node.total_simulations += 1;
        if let Some(color) = winner {
            node.wins[color.index()] += 1;
        }
        updated += 1;

        // Enqueue parents not yet reached in this pass
        for i in 0..tree.nodes[node_id].parents.len() {
            let parent_id = tree.nodes[node_id].parents[i];
            let parent = &mut tree.nodes[parent_id];
            if parent.last_backup != epoch {
                parent.last_backup = epoch;
                queue.push_back(parent_id);
            }
        }
    }

    updated
}

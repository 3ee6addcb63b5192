use othello_core::GameResult;

use crate::transposition::TranspositionTable;
use crate::tree::{MctsTree, NodeId};

/// What expanding a leaf produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expansion {
    /// Children were attached; `merged` of them are existing nodes shared with
    /// another parent
    Expanded { created: usize, merged: usize },
    /// Neither side can move; the game result is final
    Terminal(GameResult),
}

/// Expand a leaf with one child per legal move.
///
/// If the side to move has no move, the children are the opponent's moves and
/// the turn comes back to the same side (forced pass). With a transposition
/// table every resulting position is first looked up, up to symmetry, and an
/// existing node is linked instead of creating a duplicate.
pub fn expand(
    tree: &mut MctsTree,
    leaf_id: NodeId,
    mut table: Option<&mut TranspositionTable>,
) -> Expansion {
    let leaf = &tree.nodes[leaf_id];
    if let Some(result) = leaf.terminal {
        return Expansion::Terminal(result);
    }
    debug_assert!(leaf.is_leaf(), "expanding node {leaf_id} twice");

    let state = leaf.state;
    let to_move = leaf.to_move;

    // Pass handling: the opponent moves and the turn returns to `to_move`
    let (mover, next_to_move, moves) = match state.legal_moves(to_move) {
        moves if !moves.is_empty() => (to_move, to_move.opponent(), moves),
        _ => {
            let replies = state.legal_moves(to_move.opponent());
            if replies.is_empty() {
                let result = state.winner();
                tree.nodes[leaf_id].terminal = Some(result);
                return Expansion::Terminal(result);
            }
            (to_move.opponent(), to_move, replies)
        }
    };
    tree.nodes[leaf_id].chooser = mover;

    let mut created = 0;
    let mut merged = 0;
    for mv in moves {
        let mut child_state = state;
        child_state.apply_move(mv, mover);

        match table.as_deref_mut() {
            Some(table) => match table.lookup(&child_state, next_to_move) {
                Some(existing) => {
                    // siblings that are mirror images collapse into one edge
                    if tree.link_child(leaf_id, mv, existing) {
                        merged += 1;
                    }
                }
                None => {
                    let child = tree.add_child(leaf_id, mv, child_state, next_to_move);
                    table.insert(&child_state, next_to_move, child);
                    created += 1;
                }
            },
            None => {
                tree.add_child(leaf_id, mv, child_state, next_to_move);
                created += 1;
            }
        }
    }

    Expansion::Expanded { created, merged }
}

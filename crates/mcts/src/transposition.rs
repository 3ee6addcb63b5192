use std::collections::HashMap;

use othello_core::{Board, CanonicalKey, Color, canonical_key};

use crate::tree::NodeId;

/// Maps a position, up to board symmetry, to the node that represents it.
///
/// Keys combine the canonical board encoding with the color to move, so a
/// probe with any of the 8 orientations of a board finds the same entry.
/// A table lives for exactly one decision, alongside the graph it indexes.
#[derive(Debug, Default)]
pub struct TranspositionTable {
    entries: HashMap<(CanonicalKey, Color), NodeId>,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, board: &Board, to_move: Color) -> Option<NodeId> {
        self.entries.get(&(canonical_key(board), to_move)).copied()
    }

    /// Register `node` for `board`; an existing entry is kept
    pub fn insert(&mut self, board: &Board, to_move: Color, node: NodeId) -> NodeId {
        *self
            .entries
            .entry((canonical_key(board), to_move))
            .or_insert(node)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

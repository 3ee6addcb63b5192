use othello_core::{Board, Color, GameResult, Move};

/// Node ID in the arena-style graph
pub type NodeId = usize;

/// Parent-to-child link, labelled with the move played from the parent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub mv: Move,
    pub node: NodeId,
}

/// A single node in the search graph
#[derive(Debug, Clone)]
pub struct MctsNode {
    /// Board state at this node
    pub state: Board,

    /// Color whose turn it is
    pub to_move: Color,

    /// Color that picks among the children; differs from `to_move` only after
    /// a forced pass was found during expansion
    pub chooser: Color,

    /// Nodes that link to this one (empty for the root)
    pub parents: Vec<NodeId>,

    /// Outgoing edges in creation order
    pub children: Vec<Edge>,

    /// Number of simulations backed up through this node
    pub total_simulations: u32,

    /// Simulation wins per color, indexed by [`Color::index`]
    pub wins: [u32; 2],

    /// Final result once expansion found that neither side can move
    pub terminal: Option<GameResult>,

    /// Backup pass that last touched this node
    pub(crate) last_backup: u64,
}

impl MctsNode {
    /// Create a new root node
    pub fn new_root(state: Board, to_move: Color) -> Self {
        Self {
            state,
            to_move,
            chooser: to_move,
            parents: Vec::new(),
            children: Vec::new(),
            total_simulations: 0,
            wins: [0; 2],
            terminal: None,
            last_backup: 0,
        }
    }

    /// Create a new child node linked to `parent`
    pub fn new_child(state: Board, to_move: Color, parent: NodeId) -> Self {
        let mut node = Self::new_root(state, to_move);
        node.parents.push(parent);
        node
    }

    pub fn wins_for(&self, color: Color) -> u32 {
        self.wins[color.index()]
    }

    /// Fraction of simulations won by `color` (0 when unvisited)
    pub fn win_rate(&self, color: Color) -> f64 {
        if self.total_simulations == 0 {
            0.0
        } else {
            self.wins_for(color) as f64 / self.total_simulations as f64
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn has_child(&self, node: NodeId) -> bool {
        self.children.iter().any(|e| e.node == node)
    }
}

/// Search graph using arena allocation.
///
/// Parent and child relations are index lists into `nodes`; nodes are never
/// removed individually, the whole arena is dropped with the decision.
pub struct MctsTree {
    /// Arena of all nodes
    pub nodes: Vec<MctsNode>,

    /// Root node ID (usually 0)
    pub root_id: NodeId,

    backup_epoch: u64,
}

impl MctsTree {
    /// Create a new empty tree
    pub fn new() -> Self {
        Self {
            nodes: Vec::with_capacity(10000),
            root_id: 0,
            backup_epoch: 0,
        }
    }

    /// Initialize the tree with a root node
    pub fn initialize_root(&mut self, board: Board, to_move: Color) -> NodeId {
        self.nodes.clear();
        self.backup_epoch = 0;
        self.nodes.push(MctsNode::new_root(board, to_move));
        self.root_id = 0;
        self.root_id
    }

    /// Clear all nodes from the tree
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root_id = 0;
        self.backup_epoch = 0;
    }

    /// Add a new node and return its ID
    pub fn add_node(&mut self, node: MctsNode) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(node);
        id
    }

    /// Create a fresh child owned by `parent`
    pub fn add_child(&mut self, parent: NodeId, mv: Move, state: Board, to_move: Color) -> NodeId {
        let child = self.add_node(MctsNode::new_child(state, to_move, parent));
        self.nodes[parent].children.push(Edge { mv, node: child });
        child
    }

    /// Link an existing node below `parent`.
    ///
    /// Returns `false` without changes if `parent` already points to it.
    pub fn link_child(&mut self, parent: NodeId, mv: Move, child: NodeId) -> bool {
        if self.nodes[parent].has_child(child) {
            return false;
        }
        self.nodes[parent].children.push(Edge { mv, node: child });
        self.nodes[child].parents.push(parent);
        true
    }

    /// Start a new backup pass and return its marker
    pub(crate) fn next_backup_epoch(&mut self) -> u64 {
        self.backup_epoch += 1;
        self.backup_epoch
    }

    /// Longest path (in edges) from `node_id` to a leaf
    pub fn depth(&self, node_id: NodeId) -> usize {
        let mut memo = vec![None; self.nodes.len()];
        self.depth_memo(node_id, &mut memo)
    }

    fn depth_memo(&self, node_id: NodeId, memo: &mut [Option<usize>]) -> usize {
        if let Some(d) = memo[node_id] {
            return d;
        }
        let d = self.nodes[node_id]
            .children
            .iter()
            .map(|e| 1 + self.depth_memo(e.node, memo))
            .max()
            .unwrap_or(0);
        memo[node_id] = Some(d);
        d
    }

    /// Get the number of nodes in the tree
    pub fn size(&self) -> usize {
        self.nodes.len()
    }
}

impl Default for MctsTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_child_links_both_ways() {
        let mut tree = MctsTree::new();
        let board = Board::new();
        let root = tree.initialize_root(board, Color::Black);
        let child = tree.add_child(root, Move::new(3, 4), board, Color::White);

        assert_eq!(tree.size(), 2);
        assert_eq!(tree.nodes[root].children, vec![Edge { mv: Move::new(3, 4), node: child }]);
        assert_eq!(tree.nodes[child].parents, vec![root]);
        assert!(tree.nodes[root].parents.is_empty());
    }

    #[test]
    fn test_link_child_is_idempotent() {
        let mut tree = MctsTree::new();
        let board = Board::new();
        let root = tree.initialize_root(board, Color::Black);
        let a = tree.add_child(root, Move::new(3, 4), board, Color::White);
        let b = tree.add_child(root, Move::new(4, 3), board, Color::White);
        let shared = tree.add_child(a, Move::new(3, 3), board, Color::Black);

        assert!(tree.link_child(b, Move::new(3, 5), shared));
        assert!(!tree.link_child(b, Move::new(3, 5), shared));
        assert_eq!(tree.nodes[shared].parents, vec![a, b]);
        assert_eq!(tree.nodes[b].children.len(), 1);
    }

    #[test]
    fn test_depth() {
        let mut tree = MctsTree::new();
        let board = Board::new();
        let root = tree.initialize_root(board, Color::Black);
        assert_eq!(tree.depth(root), 0);

        let a = tree.add_child(root, Move::new(3, 4), board, Color::White);
        let b = tree.add_child(root, Move::new(4, 3), board, Color::White);
        let c = tree.add_child(a, Move::new(3, 3), board, Color::Black);
        tree.add_child(c, Move::new(2, 2), board, Color::White);
        tree.link_child(b, Move::new(3, 5), c);

        assert_eq!(tree.depth(root), 3);
        assert_eq!(tree.depth(b), 2);
        assert_eq!(tree.depth(c), 1);
    }

    #[test]
    fn test_clear() {
        let mut tree = MctsTree::new();
        let board = Board::new();
        let root = tree.initialize_root(board, Color::Black);
        tree.add_child(root, Move::new(3, 4), board, Color::White);

        tree.clear();
        assert_eq!(tree.size(), 0);
        assert_eq!(tree.root_id, 0);
    }

    #[test]
    fn test_win_rate() {
        let mut node = MctsNode::new_root(Board::new(), Color::Black);
        assert_eq!(node.win_rate(Color::Black), 0.0);
        node.total_simulations = 4;
        node.wins = [3, 1];
        assert_eq!(node.win_rate(Color::Black), 0.75);
        assert_eq!(node.win_rate(Color::White), 0.25);
    }
}

//! Monte Carlo Tree Search over Othello positions.
//!
//! Two policies share one engine: `Naive` grows a plain tree, `Smart` merges
//! positions that are equal up to board symmetry into a single node, turning
//! the tree into a DAG. Nodes live in an arena and are dropped with the
//! decision.

// Module declarations
mod backup;
mod config;
mod error;
mod expansion;
mod mcts;
mod rollout;
mod search_result;
mod selection;
mod transposition;
mod tree;

// Public exports
pub use backup::backup;
pub use config::{MctsConfig, SearchPolicy};
pub use error::{MctsError, Result};
pub use expansion::{Expansion, expand};
pub use mcts::{Mcts, decide_move};
pub use rollout::rollout;
pub use search_result::SearchResult;
pub use selection::{most_winning_child, select, select_best_child, uct_value};
pub use transposition::TranspositionTable;
pub use tree::{Edge, MctsNode, MctsTree, NodeId};

//! Game driver and batch runner for MCTS Othello players
//!
//! This crate provides functionality for:
//! - Playing full games between two MCTS configurations
//! - Recording every board, move and search diagnostics per turn
//! - Tallying wins, ties and runtime over a batch of games
//!
//! # Example
//!
//! ```no_run
//! use othello_mcts::{MctsConfig, SearchPolicy};
//! use othello_selfplay::play_match;
//!
//! # fn main() -> anyhow::Result<()> {
//! let black = MctsConfig::default().with_policy(SearchPolicy::Smart);
//! let white = MctsConfig::default().with_policy(SearchPolicy::Naive);
//!
//! let summary = play_match(10, &black, &white)?;
//! println!("{summary}");
//! # Ok(())
//! # }
//! ```

mod data;
mod game;

// Re-export public API
pub use data::{GameRecord, MatchSummary, MoveStats};
pub use game::{play_game, play_match};

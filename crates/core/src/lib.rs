//! Othello rules on a 10x10 sentinel-bordered board.
//!
//! The outer ring of the grid is permanently [`Cell::OffBoard`], so direction
//! scans stop on their own without explicit bounds checks. Playable cells are
//! addressed by `(row, col)` in `1..=8`.

mod board;
mod error;
pub mod symmetry;

pub use board::{BOARD_SIZE, Board, Cell, Color, GRID_SIZE, GameResult, Move};
pub use error::{BoardError, Result};
pub use symmetry::{CanonicalKey, Orientation, all_orientations, canonical_key};

use thiserror::Error;

use crate::board::{Color, Move};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Illegal move {mv} for {color}")]
    IllegalMove { mv: Move, color: Color },

    #[error("Square ({row}, {col}) is outside the playable area")]
    OutOfRange { row: usize, col: usize },

    #[error("Expected 64 cells, got {0}")]
    InvalidLength(usize),

    #[error("Invalid cell character {0:?}")]
    InvalidChar(char),
}

pub type Result<T> = std::result::Result<T, BoardError>;

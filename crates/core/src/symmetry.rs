//! Dihedral (D4) symmetries of the board for transposition matching.
//!
//! Othello is invariant under the eight symmetries of the square: four
//! rotations, each optionally mirrored. Two positions related by one of them
//! have the same value, so the search can share a node between them.

use crate::board::{BOARD_SIZE, Board, Cell, GRID_SIZE};

/// Packed board encoding, 2 bits per playable cell
pub type CanonicalKey = u128;

const LAST: usize = GRID_SIZE - 1;

/// One symmetry of the square: `quarter_turns` rotations, then an optional mirror
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Orientation {
    pub quarter_turns: u8,
    pub mirrored: bool,
}

impl Orientation {
    pub const IDENTITY: Orientation = Orientation {
        quarter_turns: 0,
        mirrored: false,
    };

    /// The 4 rotations followed by the mirror image of each
    pub fn all() -> [Orientation; 8] {
        let mut all = [Self::IDENTITY; 8];
        for (i, o) in all.iter_mut().enumerate() {
            o.quarter_turns = (i % 4) as u8;
            o.mirrored = i >= 4;
        }
        all
    }

    /// Map grid coordinates to their image under this symmetry.
    ///
    /// Works on the full 10x10 grid, so the border maps onto itself.
    pub(crate) fn transform(self, row: usize, col: usize) -> (usize, usize) {
        debug_assert!(
            row < GRID_SIZE && col < GRID_SIZE,
            "({row}, {col}) is outside the grid"
        );
        let (mut row, mut col) = (row, col);
        for _ in 0..self.quarter_turns {
            (row, col) = (col, LAST - row);
        }
        if self.mirrored {
            row = LAST - row;
        }
        (row, col)
    }

    /// Apply this symmetry to a whole board
    pub fn apply(self, board: &Board) -> Board {
        let mut out = Board::empty();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let (r, c) = self.transform(row, col);
                out.cells[r][c] = board.cells[row][col];
            }
        }
        out
    }
}

/// The board itself, its 90/180/270 degree rotations, and the mirror of each
pub fn all_orientations(board: &Board) -> [Board; 8] {
    Orientation::all().map(|o| o.apply(board))
}

/// Row-major packing of the playable cells (Empty 0, Black 1, White 2)
pub fn encode(board: &Board) -> CanonicalKey {
    let mut key: CanonicalKey = 0;
    for row in 1..=BOARD_SIZE {
        for col in 1..=BOARD_SIZE {
            let bits = match board.cells[row][col] {
                Cell::Empty | Cell::OffBoard => 0,
                Cell::Black => 1,
                Cell::White => 2,
            };
            key = (key << 2) | bits;
        }
    }
    key
}

/// Smallest encoding among the 8 orientations.
///
/// Equal for two boards iff one is a symmetry image of the other.
pub fn canonical_key(board: &Board) -> CanonicalKey {
    all_orientations(board)
        .iter()
        .map(encode)
        .min()
        .unwrap_or_else(|| encode(board))
}

impl Board {
    pub fn orientations(&self) -> [Board; 8] {
        all_orientations(self)
    }

    pub fn canonical_key(&self) -> CanonicalKey {
        canonical_key(self)
    }
}

use std::fmt;
use std::str::FromStr;

use crate::error::{BoardError, Result};

/// Side length of the playable area
pub const BOARD_SIZE: usize = 8;

/// Side length of the grid including the sentinel border
pub const GRID_SIZE: usize = BOARD_SIZE + 2;

const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Disc color, also used as "side to move"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Index into per-color arrays (Black = 0, White = 1)
    pub fn index(self) -> usize {
        match self {
            Color::Black => 0,
            Color::White => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => f.write_str("Black"),
            Color::White => f.write_str("White"),
        }
    }
}

/// State of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    OffBoard,
    Empty,
    Black,
    White,
}

impl Cell {
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Black => Some(Color::Black),
            Cell::White => Some(Color::White),
            Cell::OffBoard | Cell::Empty => None,
        }
    }

    fn to_char(self) -> char {
        match self {
            Cell::Black => 'X',
            Cell::White => 'O',
            Cell::Empty => '-',
            Cell::OffBoard => '#',
        }
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

/// A square on the playable area, `row` and `col` in `1..=8`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether the square lies inside the playable 8x8 area
    pub fn is_on_board(self) -> bool {
        (1..=BOARD_SIZE).contains(&self.row) && (1..=BOARD_SIZE).contains(&self.col)
    }
}

impl fmt::Display for Move {
    /// Algebraic notation: column letter then row number, e.g. `d3`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            let file = (b'a' + (self.col - 1) as u8) as char;
            write!(f, "{}{}", file, self.row)
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    BlackWin,
    WhiteWin,
    Draw,
}

impl GameResult {
    /// Winning color, `None` for a draw
    pub fn winner(self) -> Option<Color> {
        match self {
            GameResult::BlackWin => Some(Color::Black),
            GameResult::WhiteWin => Some(Color::White),
            GameResult::Draw => None,
        }
    }

    pub fn from_counts(black: usize, white: usize) -> Self {
        if black > white {
            GameResult::BlackWin
        } else if white > black {
            GameResult::WhiteWin
        } else {
            GameResult::Draw
        }
    }
}

/// Othello board with a one-cell sentinel border.
///
/// Exactly the border cells are [`Cell::OffBoard`]. Boards are only built by
/// [`Board::new`], parsing, or symmetry transforms, so the invariant holds by
/// construction.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl Board {
    /// Standard starting position
    pub fn new() -> Self {
        let mut board = Self::empty();
        let mid = GRID_SIZE / 2;
        board.cells[mid - 1][mid - 1] = Cell::White;
        board.cells[mid][mid - 1] = Cell::Black;
        board.cells[mid - 1][mid] = Cell::Black;
        board.cells[mid][mid] = Cell::White;
        board
    }

    /// Border of `OffBoard` cells around an empty interior
    pub(crate) fn empty() -> Self {
        let mut cells = [[Cell::OffBoard; GRID_SIZE]; GRID_SIZE];
        for row in cells.iter_mut().take(BOARD_SIZE + 1).skip(1) {
            for cell in row.iter_mut().take(BOARD_SIZE + 1).skip(1) {
                *cell = Cell::Empty;
            }
        }
        Self { cells }
    }

    /// Cell at grid coordinates `0..GRID_SIZE` (border included)
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check legality of `mv` for `color` without touching the board
    pub fn is_legal_move(&self, mv: Move, color: Color) -> bool {
        if !mv.is_on_board() || self.cells[mv.row][mv.col] != Cell::Empty {
            return false;
        }
        DIRECTIONS
            .iter()
            .any(|&dir| self.run_length(mv, color, dir) > 0)
    }

    /// Place a disc and flip every bracketed run.
    ///
    /// The move must be legal; this is only checked in debug builds. Use
    /// [`Board::play`] for unchecked input.
    pub fn apply_move(&mut self, mv: Move, color: Color) {
        debug_assert!(
            self.is_legal_move(mv, color),
            "apply_move called with illegal move {mv} for {color}"
        );
        self.place(mv, color);
    }

    /// Checked variant of [`Board::apply_move`]; returns the number of flipped discs
    pub fn play(&mut self, mv: Move, color: Color) -> Result<usize> {
        if !mv.is_on_board() {
            return Err(BoardError::OutOfRange {
                row: mv.row,
                col: mv.col,
            });
        }
        if !self.is_legal_move(mv, color) {
            return Err(BoardError::IllegalMove { mv, color });
        }
        Ok(self.place(mv, color))
    }

    /// All legal moves for `color` in row-major order
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        for row in 1..=BOARD_SIZE {
            for col in 1..=BOARD_SIZE {
                let mv = Move::new(row, col);
                if self.is_legal_move(mv, color) {
                    moves.push(mv);
                }
            }
        }
        moves
    }

    pub fn has_legal_moves(&self, color: Color) -> bool {
        (1..=BOARD_SIZE)
            .flat_map(|row| (1..=BOARD_SIZE).map(move |col| Move::new(row, col)))
            .any(|mv| self.is_legal_move(mv, color))
    }

    /// Neither side can move
    pub fn is_terminal(&self) -> bool {
        !self.has_legal_moves(Color::Black) && !self.has_legal_moves(Color::White)
    }

    /// `(black, white)` disc counts
    pub fn disk_counts(&self) -> (usize, usize) {
        let mut black = 0;
        let mut white = 0;
        for row in &self.cells[1..=BOARD_SIZE] {
            for cell in &row[1..=BOARD_SIZE] {
                match cell {
                    Cell::Black => black += 1,
                    Cell::White => white += 1,
                    Cell::Empty | Cell::OffBoard => {}
                }
            }
        }
        (black, white)
    }

    /// Side with strictly more discs, or a draw
    pub fn winner(&self) -> GameResult {
        let (black, white) = self.disk_counts();
        GameResult::from_counts(black, white)
    }

    fn place(&mut self, mv: Move, color: Color) -> usize {
        let own = Cell::from(color);
        let mut flipped = 0;
        for &(dr, dc) in &DIRECTIONS {
            let run = self.run_length(mv, color, (dr, dc));
            let (mut row, mut col) = (mv.row, mv.col);
            for _ in 0..run {
                (row, col) = step(row, col, dr, dc);
                self.cells[row][col] = own;
            }
            flipped += run;
        }
        self.cells[mv.row][mv.col] = own;
        flipped
    }

    /// Length of the opponent run starting next to `mv` in direction `dir`,
    /// or 0 when it is not closed by a disc of `color`
    fn run_length(&self, mv: Move, color: Color, (dr, dc): (isize, isize)) -> usize {
        let own = Cell::from(color);
        let theirs = Cell::from(color.opponent());
        let (mut row, mut col) = step(mv.row, mv.col, dr, dc);
        let mut run = 0;
        // the border stops the scan before it can leave the grid
        while self.cells[row][col] == theirs {
            run += 1;
            (row, col) = step(row, col, dr, dc);
        }
        if run > 0 && self.cells[row][col] == own { run } else { 0 }
    }
}

fn step(row: usize, col: usize, dr: isize, dc: isize) -> (usize, usize) {
    (row.wrapping_add_signed(dr), col.wrapping_add_signed(dc))
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 1..=BOARD_SIZE {
            let line: String = (1..=BOARD_SIZE)
                .map(|col| self.cells[row][col].to_char())
                .collect();
            if row < BOARD_SIZE {
                writeln!(f, "{line}")?;
            } else {
                write!(f, "{line}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        writeln!(f, "{self}")?;
        write!(f, "}}")
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parse 64 cells of `X` (black), `O` (white) or `-` (empty), whitespace ignored
    fn from_str(s: &str) -> Result<Self> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != BOARD_SIZE * BOARD_SIZE {
            return Err(BoardError::InvalidLength(chars.len()));
        }
        let mut board = Self::empty();
        for (i, ch) in chars.into_iter().enumerate() {
            let cell = match ch {
                'X' => Cell::Black,
                'O' => Cell::White,
                '-' => Cell::Empty,
                other => return Err(BoardError::InvalidChar(other)),
            };
            board.cells[i / BOARD_SIZE + 1][i % BOARD_SIZE + 1] = cell;
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moves(list: &[(usize, usize)]) -> Vec<Move> {
        list.iter().map(|&(r, c)| Move::new(r, c)).collect()
    }

    #[test]
    fn test_initial_setup() {
        let board = Board::new();
        assert_eq!(board.cell(4, 4), Cell::White);
        assert_eq!(board.cell(4, 5), Cell::Black);
        assert_eq!(board.cell(5, 4), Cell::Black);
        assert_eq!(board.cell(5, 5), Cell::White);
        assert_eq!(board.disk_counts(), (2, 2));

        for i in 0..GRID_SIZE {
            assert_eq!(board.cell(0, i), Cell::OffBoard);
            assert_eq!(board.cell(GRID_SIZE - 1, i), Cell::OffBoard);
            assert_eq!(board.cell(i, 0), Cell::OffBoard);
            assert_eq!(board.cell(i, GRID_SIZE - 1), Cell::OffBoard);
        }
    }

    #[test]
    fn test_opening_moves() {
        let board = Board::new();
        assert_eq!(
            board.legal_moves(Color::Black),
            moves(&[(3, 4), (4, 3), (5, 6), (6, 5)])
        );
        assert_eq!(
            board.legal_moves(Color::White),
            moves(&[(3, 5), (4, 6), (5, 3), (6, 4)])
        );
        assert!(!board.is_terminal());
    }

    #[test]
    fn test_occupied_and_border_squares_are_illegal() {
        let board = Board::new();
        assert!(!board.is_legal_move(Move::new(4, 4), Color::Black));
        assert!(!board.is_legal_move(Move::new(0, 4), Color::Black));
        assert!(!board.is_legal_move(Move::new(9, 9), Color::White));
        assert!(!board.is_legal_move(Move::new(1, 1), Color::Black));
    }

    #[test]
    fn test_apply_move_flips_single_run() {
        let mut board = Board::new();
        board.apply_move(Move::new(3, 4), Color::Black);
        assert_eq!(board.cell(3, 4), Cell::Black);
        assert_eq!(board.cell(4, 4), Cell::Black);
        assert_eq!(board.disk_counts(), (4, 1));
    }

    #[test]
    fn test_apply_move_flips_multiple_directions() {
        let mut board: Board = "\
            --------\
            -XXX----\
            -XOO----\
            -XO-----\
            --------\
            --------\
            --------\
            --------"
            .parse()
            .unwrap();
        let flipped = board.play(Move::new(4, 4), Color::Black).unwrap();
        // one disc each going up, left and up-left
        assert_eq!(flipped, 3);
        assert_eq!(board.cell(3, 4), Cell::Black);
        assert_eq!(board.cell(4, 3), Cell::Black);
        assert_eq!(board.cell(3, 3), Cell::Black);
        assert_eq!(board.disk_counts(), (9, 0));
    }

    #[test]
    fn test_run_touching_border_is_not_flipped() {
        let mut board: Board = "\
            OO-X----\
            --------\
            --------\
            --------\
            --------\
            --------\
            --------\
            --------"
            .parse()
            .unwrap();
        // the white run ends at the border, nothing brackets it
        assert!(!board.is_legal_move(Move::new(1, 3), Color::Black));
        let err = board.play(Move::new(1, 3), Color::Black).unwrap_err();
        assert_eq!(
            err,
            BoardError::IllegalMove {
                mv: Move::new(1, 3),
                color: Color::Black
            }
        );
        assert_eq!(board.disk_counts(), (1, 2));
    }

    #[test]
    fn test_play_out_of_range() {
        let mut board = Board::new();
        let err = board.play(Move::new(0, 3), Color::Black).unwrap_err();
        assert_eq!(err, BoardError::OutOfRange { row: 0, col: 3 });
    }

    #[test]
    fn test_full_board_is_terminal() {
        let mut s = String::new();
        s.extend(std::iter::repeat_n('X', 40));
        s.extend(std::iter::repeat_n('O', 24));
        let board: Board = s.parse().unwrap();
        assert!(board.is_terminal());
        assert!(board.legal_moves(Color::Black).is_empty());
        assert!(board.legal_moves(Color::White).is_empty());
        assert_eq!(board.disk_counts(), (40, 24));
        assert_eq!(board.winner(), GameResult::BlackWin);
    }

    #[test]
    fn test_winner_draw_and_white() {
        let mut s = String::new();
        s.extend(std::iter::repeat_n('X', 32));
        s.extend(std::iter::repeat_n('O', 32));
        let board: Board = s.parse().unwrap();
        assert_eq!(board.winner(), GameResult::Draw);
        assert_eq!(board.winner().winner(), None);

        let mut s = String::new();
        s.extend(std::iter::repeat_n('O', 63));
        s.push('X');
        let board: Board = s.parse().unwrap();
        assert_eq!(board.winner(), GameResult::WhiteWin);
    }

    #[test]
    fn test_one_side_blocked_is_not_terminal() {
        // black cannot move, white can capture at c1
        let board: Board = "\
            OX------\
            --------\
            --------\
            --------\
            --------\
            --------\
            --------\
            --------"
            .parse()
            .unwrap();
        assert!(!board.has_legal_moves(Color::Black));
        assert!(board.has_legal_moves(Color::White));
        assert_eq!(board.legal_moves(Color::White), moves(&[(1, 3)]));
        assert!(!board.is_terminal());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "X-O".parse::<Board>().unwrap_err(),
            BoardError::InvalidLength(3)
        );
        let mut s = "-".repeat(63);
        s.push('Z');
        assert_eq!(s.parse::<Board>().unwrap_err(), BoardError::InvalidChar('Z'));
    }

    #[test]
    fn test_display_matches_parse_format() {
        let board = Board::new();
        let text = board.to_string();
        assert_eq!(text.lines().count(), 8);
        assert_eq!(text.lines().nth(3), Some("---OX---"));
        assert_eq!(text.parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_move_display() {
        assert_eq!(Move::new(3, 4).to_string(), "d3");
        assert_eq!(Move::new(8, 1).to_string(), "a8");
    }
}

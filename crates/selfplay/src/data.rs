use std::fmt;
use std::time::Duration;

use othello_core::{Board, Color, GameResult, Move};
use othello_mcts::{SearchPolicy, SearchResult};

/// Search diagnostics for one decision
#[derive(Debug, Clone, PartialEq)]
pub struct MoveStats {
    pub policy: SearchPolicy,
    pub simulations: u32,
    /// Branching factor seen at the root
    pub root_children: usize,
    pub depth: usize,
    pub best_win_rate: Option<f64>,
}

impl From<&SearchResult> for MoveStats {
    fn from(result: &SearchResult) -> Self {
        Self {
            policy: result.policy,
            simulations: result.simulations,
            root_children: result.root_children,
            depth: result.depth,
            best_win_rate: result.best_win_rate,
        }
    }
}

/// Record of a single game
#[derive(Debug, Clone)]
pub struct GameRecord {
    /// Board before each turn
    pub states: Vec<Board>,
    /// Move played at each turn (None for pass)
    pub moves: Vec<Option<Move>>,
    /// Side to move at each turn
    pub movers: Vec<Color>,
    /// Search diagnostics at each turn
    pub stats: Vec<MoveStats>,
    /// Final position
    pub final_board: Board,
    /// Final result of the game
    pub winner: GameResult,
}

impl GameRecord {
    /// Create a new empty game record
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            moves: Vec::new(),
            movers: Vec::new(),
            stats: Vec::new(),
            final_board: Board::new(),
            winner: GameResult::Draw,
        }
    }

    /// Add a turn to the record
    pub fn add_move(&mut self, state: Board, mover: Color, result: &SearchResult) {
        self.states.push(state);
        self.moves.push(result.best_move);
        self.movers.push(mover);
        self.stats.push(MoveStats::from(result));
    }

    /// Close the record with the final position
    pub fn finish(&mut self, board: Board) {
        self.final_board = board;
        self.winner = board.winner();
    }

    /// (black, white) disc counts of the final position
    pub fn final_counts(&self) -> (usize, usize) {
        self.final_board.disk_counts()
    }

    pub fn passes(&self) -> usize {
        self.moves.iter().filter(|mv| mv.is_none()).count()
    }

    /// Get the number of turns in this game
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Check if the record is empty
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl Default for GameRecord {
    fn default() -> Self {
        Self::new()
    }
}

/// Tally of a batch of games
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSummary {
    pub games: usize,
    pub black_wins: usize,
    pub white_wins: usize,
    pub ties: usize,
    pub runtime: Duration,
}

impl MatchSummary {
    pub fn record(&mut self, result: GameResult) {
        self.games += 1;
        match result {
            GameResult::BlackWin => self.black_wins += 1,
            GameResult::WhiteWin => self.white_wins += 1,
            GameResult::Draw => self.ties += 1,
        }
    }
}

impl fmt::Display for MatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===========================")?;
        writeln!(f, "Total number of games = {}", self.games)?;
        writeln!(f, "White won {} times", self.white_wins)?;
        writeln!(f, "Black won {} times", self.black_wins)?;
        writeln!(f, "Number of tied games = {}", self.ties)?;
        writeln!(
            f,
            "Runtime for {} games = {} milliseconds",
            self.games,
            self.runtime.as_millis()
        )?;
        write!(f, "===========================")
    }
}

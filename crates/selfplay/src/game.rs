use std::time::Instant;

use anyhow::{Result, ensure};
use othello_core::{Board, Color};
use othello_mcts::{Mcts, MctsConfig};
use tracing::{debug, info};

use crate::data::{GameRecord, MatchSummary};

/// Play one game from the initial position.
///
/// Black moves first and the sides alternate; a side without a legal move
/// passes. Each color searches with its own configuration.
pub fn play_game(black: &MctsConfig, white: &MctsConfig) -> Result<GameRecord> {
    let mut board = Board::new();
    let mut mcts = Mcts::new();
    let mut record = GameRecord::new();
    let mut turn = Color::Black;

    while !board.is_terminal() {
        let config = match turn {
            Color::Black => black,
            Color::White => white,
        };
        let result = mcts.search(&board, turn, config)?;

        if let Some(mv) = result.best_move {
            ensure!(
                board.is_legal_move(mv, turn),
                "search returned illegal move {mv} for {turn}"
            );
        }
        debug!(
            ply = record.len(),
            %turn,
            mv = %result.best_move.map_or_else(|| "pass".to_string(), |mv| mv.to_string()),
            simulations = result.simulations,
            win_rate = ?result.best_win_rate,
            "move"
        );

        record.add_move(board, turn, &result);
        board = result.board;
        turn = turn.opponent();
    }

    record.finish(board);
    let (black_discs, white_discs) = record.final_counts();
    info!(
        turns = record.len(),
        passes = record.passes(),
        black_discs,
        white_discs,
        winner = ?record.winner,
        "game finished"
    );

    Ok(record)
}

/// Play `games` games with fixed sides and tally the results
pub fn play_match(games: usize, black: &MctsConfig, white: &MctsConfig) -> Result<MatchSummary> {
    let start = Instant::now();
    let mut summary = MatchSummary::default();

    for _ in 0..games {
        let record = play_game(black, white)?;
        summary.record(record.winner);
    }

    summary.runtime = start.elapsed();
    Ok(summary)
}

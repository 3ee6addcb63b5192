use othello_core::{Board, Color, GameResult};
use rand::Rng;
use rand::seq::SliceRandom;

/// Play uniformly random legal moves from `board` until neither side can move.
///
/// A side without a legal move passes. The input board is not modified.
pub fn rollout<R: Rng + ?Sized>(board: &Board, to_move: Color, rng: &mut R) -> GameResult {
    let mut board = *board;
    let mut player = to_move;

    loop {
        let moves = board.legal_moves(player);
        if let Some(&mv) = moves.choose(rng) {
            board.apply_move(mv, player);
        } else if !board.has_legal_moves(player.opponent()) {
            return board.winner();
        }
        player = player.opponent();
    }
}

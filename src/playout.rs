//! Random playouts (uniform random self-play).
//!
//! A playout plays random legal moves until both sides pass in a row, then
//! reports the final piece counts. Moves stay on the undo history, so the
//! caller can inspect the final position and [`rewind`] afterwards.

use tracing::debug;

use crate::board::PieceCount;
use crate::position::GameState;

/// Outcome of a finished playout.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PlayoutResult {
    pub count: PieceCount,
    /// Plies played, passes included.
    pub plies: usize,
    /// `evaluate()` of the final position.
    pub score: i32,
}

/// Play uniformly random legal moves from `game` until the game ends.
pub fn random_playout(game: &mut GameState, rng: &mut fastrand::Rng) -> PlayoutResult {
    let mut plies = 0;
    let mut passes = 0;

    while passes < 2 {
        let moves = game.legal_moves();
        let mv = moves[rng.usize(..moves.len())];
        if mv.is_pass() {
            passes += 1;
        } else {
            passes = 0;
        }
        game.apply_move(mv);
        plies += 1;
    }

    let result = PlayoutResult {
        count: game.piece_count(),
        plies,
        score: game.evaluate(),
    };
    debug!(
        plies,
        black = result.count.black,
        white = result.count.white,
        "playout finished"
    );
    result
}

/// Undo every applied move, returning how many were undone.
pub fn rewind(game: &mut GameState) -> usize {
    let n = game.history_len();
    for _ in 0..n {
        game.undo_last_move();
    }
    n
}

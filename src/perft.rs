//! "Perft" move-path enumeration: count the leaves at a given depth.
//!
//! Walks the game tree with apply/undo only, so it checks move generation
//! and undo together. A pass counts as a ply; two passes in a row end the
//! game and the position is a leaf.
//! See: http://www.aartbik.com/MISC/reversi.html

use tracing::debug;

use crate::search::Searchable;

/// Number of leaves `depth` plies below `game`.
///
/// `game` is returned to its starting position before this returns.
pub fn perft<G: Searchable>(game: &mut G, depth: u32) -> u64 {
    let leaves = leaves_below(game, depth, false);
    debug!(depth, leaves, "perft");
    leaves
}

fn leaves_below<G: Searchable>(game: &mut G, depth: u32, passed: bool) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = game.legal_moves();
    if moves.len() == 1 && moves[0].is_pass() && passed {
        // Both players passed: game is over
        return 1;
    }

    let mut total = 0;
    for mv in moves {
        game.apply_move(mv);
        total += leaves_below(game, depth - 1, mv.is_pass());
        game.undo_last_move();
    }
    total
}

//! Capability interface for an external two-player search.
//!
//! A generic minimax/negamax driver needs only a handful of operations from
//! a game. [`Searchable`] names them; [`GameState`] implements it. The
//! search itself lives outside this crate.

use crate::board::Color;
use crate::constants::{DIFF_MODIFIER, INITIAL_DIFF};
use crate::error::Result;
use crate::moves::Move;
use crate::position::GameState;

/// Tuning values a negamax driver may use for this game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchHints {
    pub initial_diff: i32,
    pub diff_modifier: i32,
}

impl Default for SearchHints {
    fn default() -> Self {
        Self {
            initial_diff: INITIAL_DIFF,
            diff_modifier: DIFF_MODIFIER,
        }
    }
}

/// A game position a search can walk with apply/undo.
///
/// Implementations mutate in place. Searching branches in parallel must go
/// through [`Searchable::clone_position`], never a shared instance.
pub trait Searchable: Sized {
    /// Standard starting position on a `size`x`size` board.
    fn initial_position(size: usize) -> Result<Self>;

    /// Legal moves for the side to move; never empty.
    fn legal_moves(&self) -> Vec<Move>;

    fn apply_move(&mut self, mv: Move);

    /// Reverse the last applied move. Panics on empty history.
    fn undo_last_move(&mut self);

    /// Static score, positive favors White.
    fn evaluate(&self) -> i32;

    /// Snapshot of the position with an empty undo history.
    fn clone_position(&self) -> Self;

    fn parse_move(&self, text: &str) -> Result<Move>;

    fn color_to_move(&self) -> Color;

    fn search_hints(&self) -> SearchHints {
        SearchHints::default()
    }
}

impl Searchable for GameState {
    fn initial_position(size: usize) -> Result<Self> {
        GameState::new(size)
    }

    fn legal_moves(&self) -> Vec<Move> {
        GameState::legal_moves(self)
    }

    fn apply_move(&mut self, mv: Move) {
        GameState::apply_move(self, mv)
    }

    fn undo_last_move(&mut self) {
        GameState::undo_last_move(self)
    }

    fn evaluate(&self) -> i32 {
        GameState::evaluate(self)
    }

    fn clone_position(&self) -> Self {
        GameState::clone_position(self)
    }

    fn parse_move(&self, text: &str) -> Result<Move> {
        GameState::parse_move(self, text)
    }

    fn color_to_move(&self) -> Color {
        GameState::color_to_move(self)
    }
}

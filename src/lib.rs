//! Reversi-Rust: a Reversi (Othello) rule engine.
//!
//! This crate tracks board state, enumerates legal moves, applies a move's
//! flips and undoes moves exactly. It is meant to be driven by an external
//! minimax/negamax search through the [`search::Searchable`] trait.
//!
//! ## Modules
//!
//! - [`constants`] - Board limits, evaluation scale and search hints
//! - [`board`] - Square graph with per-square neighbor tables
//! - [`moves`] - Drop/pass moves and square designator parsing
//! - [`position`] - Game rules: flips, move generation, apply/undo, evaluation
//! - [`search`] - Capability interface for an external search
//! - [`perft`] - Leaf counting for verifying move generation
//! - [`playout`] - Random self-play
//! - [`error`] - Recoverable error type
//!
//! ## Example
//!
//! ```
//! use reversi_rust::position::GameState;
//!
//! let mut game = GameState::new(8).unwrap();
//! let mv = game.parse_move("c4").unwrap();
//! game.apply_move(mv);
//! assert_eq!(game.evaluate(), -300);
//!
//! game.undo_last_move();
//! assert_eq!(game.evaluate(), 0);
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod moves;
pub mod perft;
pub mod playout;
pub mod position;
pub mod search;

pub use error::{Result, ReversiError};

//! Error types for the Reversi rule engine.
//!
//! Only recoverable failures are modeled here: bad board sizes at
//! construction time and malformed square designators. Contract violations
//! such as undoing with an empty history panic instead.

use thiserror::Error;

/// Recoverable errors surfaced by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReversiError {
    /// Board size is odd or below the minimum.
    #[error("invalid board size {0}: must be even and at least 2")]
    InvalidBoardSize(usize),

    /// Text is not a square designator like `d3` or `pass`.
    #[error("malformed move {0:?}: expected file letters followed by a rank number")]
    MalformedMove(String),

    /// Designator is well-formed but lies outside the board.
    #[error("move {text:?} is off a {size}x{size} board")]
    OutOfBounds { text: String, size: usize },
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, ReversiError>;

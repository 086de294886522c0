//! Move model and square designator parsing.
//!
//! Designators are file letters followed by a 1-based rank number
//! (`a1` is the lower-left corner), or `pass`. Files past `z` continue
//! as `aa`, `ab`, ... so any board size can be named.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::board::{Color, Coord};
use crate::constants::{FILE_LETTERS, PASS_TEXT};
use crate::error::{Result, ReversiError};

/// A Reversi move: drop a piece of `color` on `to`, or pass.
///
/// Equality and hashing ignore `color`, so two drops on the same square
/// compare equal whoever makes them. Move generation relies on this to
/// deduplicate destinations reached along several lines.
#[derive(Copy, Clone, Debug)]
pub enum Move {
    Drop { color: Color, to: Coord },
    Pass,
}

impl Move {
    pub fn drop(color: Color, to: Coord) -> Self {
        Move::Drop { color, to }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Move::Pass)
    }

    /// Destination square, `None` for a pass.
    pub fn to(&self) -> Option<Coord> {
        match self {
            Move::Drop { to, .. } => Some(*to),
            Move::Pass => None,
        }
    }

    /// Mover's color, `None` for a pass.
    pub fn color(&self) -> Option<Color> {
        match self {
            Move::Drop { color, .. } => Some(*color),
            Move::Pass => None,
        }
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.to() == other.to()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to().hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Drop { to, .. } => write!(f, "{to}"),
            Move::Pass => f.write_str(PASS_TEXT),
        }
    }
}

/// Parse a square designator such as `d3` or `ab28` (case-insensitive) on a
/// board of side `size`.
///
/// # Errors
/// - [`ReversiError::MalformedMove`] if the text is not file letters followed
///   by a positive decimal number.
/// - [`ReversiError::OutOfBounds`] if the square is not on the board,
///   including ranks or files too large to represent.
pub fn parse_coord(text: &str, size: usize) -> Result<Coord> {
    let trimmed = text.trim();
    let malformed = || ReversiError::MalformedMove(text.to_string());
    let out_of_bounds = || ReversiError::OutOfBounds {
        text: text.to_string(),
        size,
    };

    let split = trimmed
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(trimmed.len());
    let (letters, digits) = trimmed.split_at(split);
    if letters.is_empty() || digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }

    // Only digits remain, so a parse failure is overflow.
    let rank: usize = digits.parse().map_err(|_| out_of_bounds())?;
    if rank == 0 {
        return Err(malformed());
    }

    // Bijective base 26: a=1 .. z=26, aa=27, ...
    let file = letters
        .bytes()
        .map(|b| (b.to_ascii_lowercase() - b'a') as usize + 1)
        .try_fold(0usize, |acc, d| acc.checked_mul(FILE_LETTERS)?.checked_add(d))
        .ok_or_else(out_of_bounds)?
        - 1;
    let rank = rank - 1;
    if file >= size || rank >= size {
        return Err(out_of_bounds());
    }

    Ok(Coord::new(file, rank))
}

/// Parse a designator into a move for `color`. `pass` yields [`Move::Pass`].
pub fn parse_move(text: &str, color: Color, size: usize) -> Result<Move> {
    if text.trim().eq_ignore_ascii_case(PASS_TEXT) {
        return Ok(Move::Pass);
    }
    parse_coord(text, size).map(|to| Move::drop(color, to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_equality_ignores_color() {
        let c = Coord::new(2, 3);
        assert_eq!(Move::drop(Color::Black, c), Move::drop(Color::White, c));
        assert_ne!(Move::drop(Color::Black, c), Move::drop(Color::Black, Coord::new(3, 2)));
        assert_ne!(Move::drop(Color::Black, c), Move::Pass);
        assert_eq!(Move::Pass, Move::Pass);
    }

    #[test]
    fn test_hash_dedups_by_destination() {
        let c = Coord::new(4, 4);
        let set: HashSet<Move> = [
            Move::drop(Color::Black, c),
            Move::drop(Color::White, c),
            Move::Pass,
            Move::Pass,
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_parse_coord() {
        assert_eq!(parse_coord("a1", 8), Ok(Coord::new(0, 0)));
        assert_eq!(parse_coord("D3", 8), Ok(Coord::new(3, 2)));
        assert_eq!(parse_coord(" h8 ", 8), Ok(Coord::new(7, 7)));
        assert_eq!(parse_coord("j10", 10), Ok(Coord::new(9, 9)));
    }

    #[test]
    fn test_parse_coord_malformed() {
        for text in ["", "d", "3d", "dd", "d-1", "d0", "d3x", "?4", "d3d"] {
            assert_eq!(
                parse_coord(text, 8),
                Err(ReversiError::MalformedMove(text.to_string())),
                "{text:?} should be malformed"
            );
        }
    }

    #[test]
    fn test_parse_coord_out_of_bounds() {
        assert!(matches!(parse_coord("i1", 8), Err(ReversiError::OutOfBounds { .. })));
        assert!(matches!(parse_coord("a9", 8), Err(ReversiError::OutOfBounds { .. })));
        assert!(matches!(parse_coord("e5", 4), Err(ReversiError::OutOfBounds { size: 4, .. })));
        assert!(matches!(parse_coord("aa1", 26), Err(ReversiError::OutOfBounds { .. })));
        assert_eq!(
            parse_coord("a99999999999999999999999", 8),
            Err(ReversiError::OutOfBounds {
                text: "a99999999999999999999999".to_string(),
                size: 8
            })
        );
        assert!(matches!(
            parse_coord("zzzzzzzzzzzzzzzzzzzz1", 8),
            Err(ReversiError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_parse_multi_letter_files() {
        assert_eq!(parse_coord("z1", 28), Ok(Coord::new(25, 0)));
        assert_eq!(parse_coord("aa1", 28), Ok(Coord::new(26, 0)));
        assert_eq!(parse_coord("AB28", 28), Ok(Coord::new(27, 27)));

        let mv = Move::drop(Color::White, Coord::new(27, 27));
        assert_eq!(mv.to_string(), "ab28");
        assert_eq!(parse_move("ab28", Color::White, 28), Ok(mv));
    }

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_move("PASS", Color::White, 8), Ok(Move::Pass));
        let mv = parse_move("c4", Color::White, 8).unwrap();
        assert_eq!(mv.to(), Some(Coord::new(2, 3)));
        assert_eq!(mv.color(), Some(Color::White));
    }

    #[test]
    fn test_display_roundtrip() {
        let mv = Move::drop(Color::Black, Coord::new(5, 6));
        assert_eq!(mv.to_string(), "f7");
        assert_eq!(parse_move(&mv.to_string(), Color::Black, 8), Ok(mv));
        assert_eq!(Move::Pass.to_string(), "pass");
    }
}

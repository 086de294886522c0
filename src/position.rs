//! Reversi position: board, side to move, and undo history.
//!
//! This module holds the rules of the game:
//! - Flip resolution (the sandwich rule) for a freshly dropped piece
//! - Legal move generation, falling back to a single pass
//! - Applying moves and undoing them exactly, in LIFO order
//! - A piece-differential evaluation for an external search
//!
//! Flipped pieces are recorded by square id. Flips mutate the piece in its
//! square rather than replacing it, so an id names the same piece from the
//! moment it is flipped until it is flipped back by undo.

use std::collections::HashSet;
use std::fmt;

use tracing::trace;

use crate::board::{Board, Color, Coord, Direction, Piece, PieceCount, SquareId};
use crate::constants::{DEFAULT_BOARD_SIZE, EVAL_SCALE};
use crate::error::Result;
use crate::moves::{self, Move};

/// What it takes to reverse one applied move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UndoMove {
    pub mv: Move,
    /// Squares whose pieces were flipped, in flip order. Empty for a pass.
    pub flipped: Vec<SquareId>,
}

/// Board, color to move, and the history of applied moves.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    to_move: Color,
    history: Vec<UndoMove>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE).expect("default board size is valid")
    }
}

impl GameState {
    /// Standard starting position on a `size`x`size` board, Black to move.
    ///
    /// # Errors
    /// [`crate::ReversiError::InvalidBoardSize`] if `size` is odd or below 2.
    pub fn new(size: usize) -> Result<Self> {
        let mut state = Self {
            board: Board::new(size)?,
            to_move: Color::Black,
            history: Vec::new(),
        };
        state.init_game();
        Ok(state)
    }

    /// Place the starting cross around the center.
    fn init_game(&mut self) {
        let m = self.board.size() / 2;
        let setup = [
            (m - 1, m - 1, Color::White),
            (m, m, Color::White),
            (m - 1, m, Color::Black),
            (m, m - 1, Color::Black),
        ];
        for (file, rank, color) in setup {
            let id = self.id(Coord::new(file, rank));
            self.board.set_piece(id, Piece::new(color));
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn color_to_move(&self) -> Color {
        self.to_move
    }

    /// Number of applied moves not yet undone.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Most recently applied move, if any.
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(|u| u.mv)
    }

    pub fn piece_count(&self) -> PieceCount {
        self.board.piece_count()
    }

    fn id(&self, coord: Coord) -> SquareId {
        match self.board.id_of(coord) {
            Some(id) => id,
            None => panic!("{coord} is off a {0}x{0} board", self.board.size()),
        }
    }

    /// Pieces that flip when the piece just placed on `to` is resolved.
    ///
    /// For each direction, walk outward collecting the run of opposite-color
    /// pieces; keep the run only if it ends on a piece of the placed color.
    /// Runs ending at an empty square or the edge flip nothing.
    ///
    /// # Panics
    /// If `to` is off the board or empty.
    pub fn pieces_to_flip(&self, to: Coord) -> Vec<SquareId> {
        let origin = self.id(to);
        let color = match self.board.color_at(origin) {
            Some(color) => color,
            None => panic!("no piece to resolve flips for at {to}"),
        };
        self.flips_from(origin, color)
    }

    fn flips_from(&self, origin: SquareId, color: Color) -> Vec<SquareId> {
        let mut flips = Vec::new();
        let mut candidates = Vec::new();

        for dir in Direction::ALL {
            candidates.clear();
            let mut cur = self.board.neighbor(origin, dir);
            while let Some(id) = cur {
                if self.board.color_at(id) != Some(color.opposite()) {
                    break;
                }
                candidates.push(id);
                cur = self.board.neighbor(id, dir);
            }
            let anchored = cur.is_some_and(|id| self.board.color_at(id) == Some(color));
            if anchored {
                flips.extend_from_slice(&candidates);
            }
        }
        flips
    }

    /// Destination of a move starting from the mover's piece at `from`
    /// going in `dir`, if any.
    ///
    /// The immediate neighbor must be an opponent piece; the first square
    /// past the opponent run must be empty and on the board.
    fn find_move_in_direction(&self, from: SquareId, dir: Direction) -> Option<SquareId> {
        let opponent = Some(self.to_move.opposite());

        let mut look = self.board.neighbor(from, dir)?;
        if self.board.color_at(look) != opponent {
            return None;
        }
        look = self.board.neighbor(look, dir)?;
        while self.board.color_at(look) == opponent {
            look = self.board.neighbor(look, dir)?;
        }
        self.board.square(look).is_empty().then_some(look)
    }

    /// All legal moves for the side to move, one per destination square.
    ///
    /// Never empty: when no drop is legal the only move is [`Move::Pass`].
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut seen = HashSet::new();
        let mut moves = Vec::new();

        for (from, square) in self.board.squares().enumerate() {
            if square.color() != Some(self.to_move) {
                continue;
            }
            for dir in Direction::ALL {
                if let Some(to) = self.find_move_in_direction(from, dir) {
                    let mv = Move::drop(self.to_move, self.board.square(to).coord());
                    if seen.insert(mv) {
                        moves.push(mv);
                    }
                }
            }
        }

        if moves.is_empty() {
            moves.push(Move::Pass);
        }
        moves
    }

    /// Whether the side to move has any legal drop.
    pub fn has_legal_drop(&self) -> bool {
        self.board
            .squares()
            .enumerate()
            .filter(|(_, sq)| sq.color() == Some(self.to_move))
            .any(|(from, _)| {
                Direction::ALL
                    .iter()
                    .any(|&dir| self.find_move_in_direction(from, dir).is_some())
            })
    }

    /// Neither side can drop a piece. The core never ends a game on its own;
    /// this is the double-pass signal for whoever drives play.
    pub fn is_game_over(&self) -> bool {
        if self.has_legal_drop() {
            return false;
        }
        let mut other = self.clone_position();
        other.to_move = other.to_move.opposite();
        !other.has_legal_drop()
    }

    /// Apply `mv`, record how to undo it, and hand the turn over.
    ///
    /// Drops must come from [`GameState::legal_moves`]; the flip set is
    /// resolved from the board as it stands, so a drop that sandwiches
    /// nothing is still placed.
    ///
    /// # Panics
    /// If a drop targets an occupied or off-board square.
    pub fn apply_move(&mut self, mv: Move) {
        let flipped = match mv {
            Move::Drop { color, to } => {
                let id = self.id(to);
                if let Some(prev) = self.board.set_piece(id, Piece::new(color)) {
                    panic!("drop on occupied square {to} (held {:?})", prev.color());
                }
                let flipped = self.flips_from(id, color);
                for &f in &flipped {
                    self.board.flip_piece(f);
                }
                flipped
            }
            Move::Pass => Vec::new(),
        };

        trace!(%mv, flips = flipped.len(), "apply");
        self.history.push(UndoMove { mv, flipped });
        self.to_move = self.to_move.opposite();
    }

    /// Reverse the most recently applied move.
    ///
    /// # Panics
    /// If there is nothing to undo.
    pub fn undo_last_move(&mut self) {
        let Some(undo) = self.history.pop() else {
            panic!("undo_last_move called with empty history");
        };

        if let Move::Drop { to, .. } = undo.mv {
            let id = self.id(to);
            self.board.pickup_piece(id);
            for &f in &undo.flipped {
                self.board.flip_piece(f);
            }
        }

        trace!(mv = %undo.mv, "undo");
        self.to_move = self.to_move.opposite();
    }

    /// `(white - black) * EVAL_SCALE`; positive favors White.
    pub fn evaluate(&self) -> i32 {
        let count = self.board.piece_count();
        (count.white as i32 - count.black as i32) * EVAL_SCALE
    }

    /// Snapshot of occupancy and color to move, with an empty history.
    ///
    /// The copy gets a freshly built board with the pieces copied over.
    pub fn clone_position(&self) -> Self {
        let mut board = Board::new(self.board.size()).expect("size of a live board is valid");
        board.copy_pieces_from(&self.board);
        Self {
            board,
            to_move: self.to_move,
            history: Vec::new(),
        }
    }

    /// Parse a designator like `d3` into a drop for the side to move.
    /// `pass` is accepted too.
    pub fn parse_move(&self, text: &str) -> Result<Move> {
        moves::parse_move(text, self.to_move, self.board.size())
    }

    /// Build a position from explicit piece lists, clearing the starting cross.
    pub fn from_pieces(size: usize, black: &[Coord], white: &[Coord], to_move: Color) -> Result<Self> {
        let mut state = Self {
            board: Board::new(size)?,
            to_move,
            history: Vec::new(),
        };
        for (coords, color) in [(black, Color::Black), (white, Color::White)] {
            for &c in coords {
                let id = state.id(c);
                state.board.set_piece(id, Piece::new(color));
            }
        }
        Ok(state)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)?;
        writeln!(f, "{} to move", self.to_move)
    }
}

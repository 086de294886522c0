//! Square-graph board representation.
//!
//! The board is an NxN grid of [`Square`]s stored row-major in a `Vec`.
//! Each square knows the id of its neighbor in every [`Direction`]; the
//! table is built once in [`Board::new`] and never changes afterwards, so
//! walking a line is a chain of lookups with `None` marking the edge.

use std::fmt;

use crate::constants::{DELTA, FILE_LETTERS, MIN_BOARD_SIZE, NUM_DIRECTIONS};
use crate::error::{Result, ReversiError};

/// Index of a square in the board's square list (`rank * size + file`).
pub type SquareId = usize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The other side.
    pub fn opposite(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => f.write_str("black"),
            Color::White => f.write_str("white"),
        }
    }
}

/// A zero-based (file, rank) pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub file: usize,
    pub rank: usize,
}

impl Coord {
    pub const fn new(file: usize, rank: usize) -> Self {
        Self { file, rank }
    }
}

/// Writes the square designator, e.g. `d3` for file 3, rank 2.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", file_name(self.file), self.rank + 1)
    }
}

/// Letters naming a zero-based file: `a..z`, then `aa`, `ab`, ... `zz`, `aaa`.
pub fn file_name(file: usize) -> String {
    let mut letters = Vec::new();
    let mut n = file;
    loop {
        letters.push((b'a' + (n % FILE_LETTERS) as u8) as char);
        if n < FILE_LETTERS {
            break;
        }
        n = n / FILE_LETTERS - 1;
    }
    letters.iter().rev().collect()
}

/// The eight compass directions, in the same order as [`DELTA`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; NUM_DIRECTIONS] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];
}

/// A piece on the board. Flipping mutates its color in place.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    color: Color,
}

impl Piece {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn flip(&mut self) {
        self.color = self.color.opposite();
    }
}

/// One cell of the board: its coordinate, optional piece, and neighbor table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Square {
    coord: Coord,
    piece: Option<Piece>,
    neighbors: [Option<SquareId>; NUM_DIRECTIONS],
}

impl Square {
    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn is_empty(&self) -> bool {
        self.piece.is_none()
    }

    /// Color of the piece on this square, if any.
    pub fn color(&self) -> Option<Color> {
        self.piece.map(|p| p.color())
    }

    /// Neighboring square in `dir`, or `None` at the edge.
    #[inline]
    pub fn neighbor(&self, dir: Direction) -> Option<SquareId> {
        self.neighbors[dir as usize]
    }
}

/// Piece totals per color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PieceCount {
    pub black: usize,
    pub white: usize,
}

impl PieceCount {
    pub fn total(&self) -> usize {
        self.black + self.white
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    squares: Vec<Square>,
}

impl Board {
    /// Build an empty board and its neighbor tables.
    ///
    /// # Errors
    /// [`ReversiError::InvalidBoardSize`] if `size` is odd or below
    /// `MIN_BOARD_SIZE`.
    pub fn new(size: usize) -> Result<Self> {
        if size < MIN_BOARD_SIZE || size % 2 != 0 {
            return Err(ReversiError::InvalidBoardSize(size));
        }

        let mut squares = Vec::with_capacity(size * size);
        for rank in 0..size {
            for file in 0..size {
                let neighbors = std::array::from_fn(|d| {
                    let (df, dr) = DELTA[d];
                    let f = file.checked_add_signed(df).filter(|&f| f < size)?;
                    let r = rank.checked_add_signed(dr).filter(|&r| r < size)?;
                    Some(r * size + f)
                });
                squares.push(Square {
                    coord: Coord::new(file, rank),
                    piece: None,
                    neighbors,
                });
            }
        }

        Ok(Self { size, squares })
    }

    /// Length of one side.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Id of the square at `coord`, or `None` if it is off the board.
    pub fn id_of(&self, coord: Coord) -> Option<SquareId> {
        (coord.file < self.size && coord.rank < self.size).then(|| coord.rank * self.size + coord.file)
    }

    /// Square by id. Ids always come from this board, so out of range is a bug.
    #[inline]
    pub fn square(&self, id: SquareId) -> &Square {
        &self.squares[id]
    }

    pub fn square_at(&self, coord: Coord) -> Option<&Square> {
        self.id_of(coord).map(|id| &self.squares[id])
    }

    pub fn squares(&self) -> impl Iterator<Item = &Square> + '_ {
        self.squares.iter()
    }

    /// Id of the neighbor of `id` in `dir`.
    #[inline]
    pub fn neighbor(&self, id: SquareId, dir: Direction) -> Option<SquareId> {
        self.squares[id].neighbor(dir)
    }

    /// Color of the piece on square `id`, if any.
    #[inline]
    pub fn color_at(&self, id: SquareId) -> Option<Color> {
        self.squares[id].color()
    }

    /// Put `piece` on square `id`, returning whatever was there before.
    pub fn set_piece(&mut self, id: SquareId, piece: Piece) -> Option<Piece> {
        self.squares[id].piece.replace(piece)
    }

    /// Remove and return the piece on square `id`.
    pub fn pickup_piece(&mut self, id: SquareId) -> Option<Piece> {
        self.squares[id].piece.take()
    }

    /// Flip the piece on square `id` in place.
    ///
    /// # Panics
    /// If the square is empty.
    pub fn flip_piece(&mut self, id: SquareId) {
        let square = &mut self.squares[id];
        match square.piece.as_mut() {
            Some(piece) => piece.flip(),
            None => panic!("flip on empty square {}", square.coord),
        }
    }

    pub fn piece_count(&self) -> PieceCount {
        self.squares
            .iter()
            .filter_map(Square::color)
            .fold(PieceCount::default(), |mut count, color| {
                match color {
                    Color::Black => count.black += 1,
                    Color::White => count.white += 1,
                }
                count
            })
    }

    /// Copy piece occupancy from `other`, leaving the neighbor tables alone.
    ///
    /// # Panics
    /// If the boards differ in size.
    pub fn copy_pieces_from(&mut self, other: &Board) {
        assert_eq!(self.size, other.size, "cannot copy pieces between board sizes");
        for (dst, src) in self.squares.iter_mut().zip(&other.squares) {
            dst.piece = src.piece;
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = file_name(self.size - 1).len();
        write!(f, "   ")?;
        for file in 0..self.size {
            write!(f, " {:>width$}", file_name(file))?;
        }
        writeln!(f)?;
        for rank in (0..self.size).rev() {
            write!(f, "{:>3}", rank + 1)?;
            for file in 0..self.size {
                let ch = match self.squares[rank * self.size + file].color() {
                    Some(Color::Black) => 'X',
                    Some(Color::White) => 'O',
                    None => '.',
                };
                write!(f, " {ch:>width$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_sizes() {
        assert_eq!(Board::new(0), Err(ReversiError::InvalidBoardSize(0)));
        assert_eq!(Board::new(7), Err(ReversiError::InvalidBoardSize(7)));
        assert_eq!(Board::new(1), Err(ReversiError::InvalidBoardSize(1)));
        assert!(Board::new(2).is_ok());
        assert!(Board::new(28).is_ok());
    }

    #[test]
    fn test_corner_neighbors() {
        let board = Board::new(8).unwrap();
        let a1 = board.square_at(Coord::new(0, 0)).unwrap();

        assert_eq!(a1.neighbor(Direction::South), None);
        assert_eq!(a1.neighbor(Direction::West), None);
        assert_eq!(a1.neighbor(Direction::SouthWest), None);
        assert_eq!(a1.neighbor(Direction::NorthWest), None);
        assert_eq!(a1.neighbor(Direction::SouthEast), None);

        assert_eq!(a1.neighbor(Direction::North), board.id_of(Coord::new(0, 1)));
        assert_eq!(a1.neighbor(Direction::East), board.id_of(Coord::new(1, 0)));
        assert_eq!(a1.neighbor(Direction::NorthEast), board.id_of(Coord::new(1, 1)));
    }

    #[test]
    fn test_neighbor_tables_are_symmetric() {
        let board = Board::new(6).unwrap();
        for (id, square) in board.squares().enumerate() {
            for dir in Direction::ALL {
                if let Some(n) = square.neighbor(dir) {
                    let back = Direction::ALL[(dir as usize + NUM_DIRECTIONS / 2) % NUM_DIRECTIONS];
                    assert_eq!(board.neighbor(n, back), Some(id));
                }
            }
        }
    }

    #[test]
    fn test_center_square_has_eight_neighbors() {
        let board = Board::new(4).unwrap();
        let sq = board.square_at(Coord::new(1, 1)).unwrap();
        assert!(Direction::ALL.iter().all(|&d| sq.neighbor(d).is_some()));
    }

    #[test]
    fn test_flip_preserves_piece() {
        let mut board = Board::new(4).unwrap();
        let id = board.id_of(Coord::new(2, 2)).unwrap();
        board.set_piece(id, Piece::new(Color::Black));
        board.flip_piece(id);
        assert_eq!(board.color_at(id), Some(Color::White));
        board.flip_piece(id);
        assert_eq!(board.color_at(id), Some(Color::Black));
    }

    #[test]
    fn test_piece_count_and_pickup() {
        let mut board = Board::new(4).unwrap();
        board.set_piece(0, Piece::new(Color::Black));
        board.set_piece(5, Piece::new(Color::White));
        board.set_piece(6, Piece::new(Color::White));
        assert_eq!(board.piece_count(), PieceCount { black: 1, white: 2 });

        assert_eq!(board.pickup_piece(5), Some(Piece::new(Color::White)));
        assert!(board.square(5).is_empty());
        assert_eq!(board.piece_count().total(), 2);
    }

    #[test]
    fn test_copy_pieces_from() {
        let mut src = Board::new(4).unwrap();
        src.set_piece(3, Piece::new(Color::White));
        let mut dst = Board::new(4).unwrap();
        dst.set_piece(0, Piece::new(Color::Black));

        dst.copy_pieces_from(&src);
        assert_eq!(dst, src);
    }

    #[test]
    fn test_coord_display() {
        assert_eq!(Coord::new(0, 0).to_string(), "a1");
        assert_eq!(Coord::new(3, 2).to_string(), "d3");
        assert_eq!(Coord::new(25, 25).to_string(), "z26");
        assert_eq!(Coord::new(27, 27).to_string(), "ab28");
    }

    #[test]
    fn test_file_names() {
        assert_eq!(file_name(0), "a");
        assert_eq!(file_name(25), "z");
        assert_eq!(file_name(26), "aa");
        assert_eq!(file_name(27), "ab");
        assert_eq!(file_name(701), "zz");
        assert_eq!(file_name(702), "aaa");
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(2).unwrap();
        board.set_piece(0, Piece::new(Color::Black));
        board.set_piece(3, Piece::new(Color::White));
        assert_eq!(board.to_string(), "    a b\n  2 . O\n  1 X .\n");
    }

    #[test]
    fn test_display_wide_board_aligns_columns() {
        let board = Board::new(28).unwrap();
        let text = board.to_string();
        let mut lines = text.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("     a  b"));
        assert!(header.ends_with(" aa ab"));
        assert!(lines.all(|line| line.len() == header.len()));
    }
}

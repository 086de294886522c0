//! Constants for board geometry, evaluation scale and search tuning.
//!
//! The board size is chosen at runtime (see [`crate::board::Board::new`]);
//! everything else that the engine treats as fixed lives here.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN) used when no size is given. Standard Reversi is 8x8.
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// Smallest playable board: the starting cross needs a 2x2 center.
pub const MIN_BOARD_SIZE: usize = 2;

/// Letters available per designator position; files past `z` use `aa`, `ab`, ...
pub const FILE_LETTERS: usize = 26;

/// Number of compass directions around a square.
pub const NUM_DIRECTIONS: usize = 8;

// =============================================================================
// Evaluation
// =============================================================================

/// Scale applied to the piece differential by `evaluate`.
///
/// Keeps scores in a range where the search's depth/diff heuristics work
/// with integers of useful magnitude.
pub const EVAL_SCALE: i32 = 100;

// =============================================================================
// Search Hints
// =============================================================================

/// Initial aspiration difference suggested to an external negamax search.
pub const INITIAL_DIFF: i32 = 1;

/// Factor by which an external negamax search widens its difference per ply.
pub const DIFF_MODIFIER: i32 = 3;

// =============================================================================
// Special Move Designators
// =============================================================================

/// Text designator for a pass move.
pub const PASS_TEXT: &str = "pass";

// =============================================================================
// Neighbor Offsets
// =============================================================================

/// (file, rank) offsets to neighboring squares.
/// Order: North, NE, East, SE, South, SW, West, NW.
/// Rank grows northwards, so North is `+1` rank.
pub const DELTA: [(isize, isize); NUM_DIRECTIONS] = [
    (0, 1),   // North
    (1, 1),   // NE
    (1, 0),   // East
    (1, -1),  // SE
    (0, -1),  // South
    (-1, -1), // SW
    (-1, 0),  // West
    (-1, 1),  // NW
];

//! Shared types and board constants.
//!
//! Pure data definitions used by both the core engine and the wire protocol:
//! piece identifiers, occupancy cells, and session status.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 14 rows of visible grid; `y = 0` is the floor and rows grow
//!   upward. The height is a rendering capacity, not an engine limit - the
//!   move executor reports a landing above it as an overflow instead of
//!   truncating it.
//!
//! # Examples
//!
//! ```
//! use tetris_sim::types::{Cell, PieceKind, BOARD_WIDTH};
//!
//! // Parse a piece letter (case-insensitive)
//! let piece = PieceKind::from_char('q').unwrap();
//! assert_eq!(piece, PieceKind::Q);
//! assert_eq!(piece.as_char(), 'Q');
//!
//! // Cells order by (x, y) for deterministic grids
//! assert!(Cell::new(0, 5) < Cell::new(1, 0));
//! assert_eq!(BOARD_WIDTH, 10);
//! ```

use serde::{Deserialize, Serialize};

/// Board width in columns (10, indexed 0-9)
pub const BOARD_WIDTH: u8 = 10;

/// Visible board height in rows (14); landings above it overflow
pub const BOARD_HEIGHT: u16 = 14;

/// The seven piece kinds, each with a single fixed orientation
///
/// - **Q**: 2x2 square
/// - **I**: horizontal line of four
/// - **T**: three across with a center stem below
/// - **S** / **Z**: the two staircase shapes
/// - **L** / **J**: three tall with a foot at the base
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Q,
    I,
    T,
    S,
    Z,
    L,
    J,
}

impl PieceKind {
    /// All piece kinds, in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::Q,
        PieceKind::I,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::L,
        PieceKind::J,
    ];

    /// Parse a piece kind from its letter (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_sim::types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_char('I'), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_char('z'), Some(PieceKind::Z));
    /// assert_eq!(PieceKind::from_char('X'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'Q' => Some(PieceKind::Q),
            'I' => Some(PieceKind::I),
            'T' => Some(PieceKind::T),
            'S' => Some(PieceKind::S),
            'Z' => Some(PieceKind::Z),
            'L' => Some(PieceKind::L),
            'J' => Some(PieceKind::J),
            _ => None,
        }
    }

    /// The uppercase letter used on the wire and in sequence strings
    pub fn as_char(&self) -> char {
        match self {
            PieceKind::Q => 'Q',
            PieceKind::I => 'I',
            PieceKind::T => 'T',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
            PieceKind::L => 'L',
            PieceKind::J => 'J',
        }
    }
}

/// One occupied board position
///
/// `x` is the column (`0 <= x < BOARD_WIDTH`), `y` the row with the floor at
/// zero. Boards hold cells with set semantics - a cell never appears twice.
/// Ordering is by `(x, y)` so sorted grids serialize deterministically.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Cell {
    pub x: u8,
    pub y: u16,
}

impl Cell {
    pub fn new(x: u8, y: u16) -> Self {
        Self { x, y }
    }
}

/// Session lifecycle status
///
/// Transitions are monotonic: a session never leaves `Completed`, and the
/// executor refuses to advance one that has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Pending,
    InProgress,
    Completed,
}

impl GameStatus {
    /// The wire string for this status
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Pending => "pending",
            GameStatus::InProgress => "in_progress",
            GameStatus::Completed => "completed",
        }
    }
}

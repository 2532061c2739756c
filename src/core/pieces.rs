//! Shape catalog - fixed footprints for the seven drop pieces.
//!
//! Each piece has exactly one orientation. Offsets are relative to the
//! anchor column, `(0, 0)` at the bottom-left, `dy` growing upward. Every
//! shape includes at least one `dy = 0` offset, so a piece always has a
//! bottom profile for the drop resolver to rest on.

use crate::types::PieceKind;

/// Offset of a single mino relative to the piece anchor
pub type MinoOffset = (u8, u8);

/// Shape of a piece - 4 mino offsets
pub type PieceShape = [MinoOffset; 4];

/// Get the footprint for a piece kind
pub fn shape(kind: PieceKind) -> PieceShape {
    match kind {
        PieceKind::Q => [(0, 0), (1, 0), (0, 1), (1, 1)],
        PieceKind::I => [(0, 0), (1, 0), (2, 0), (3, 0)],
        PieceKind::T => [(0, 1), (1, 1), (2, 1), (1, 0)],
        PieceKind::S => [(1, 1), (2, 1), (0, 0), (1, 0)],
        PieceKind::Z => [(0, 1), (1, 1), (1, 0), (2, 0)],
        PieceKind::L => [(0, 0), (0, 1), (0, 2), (1, 0)],
        PieceKind::J => [(1, 0), (1, 1), (1, 2), (0, 0)],
    }
}

/// Horizontal extent of a piece (1 + max dx)
pub fn width(kind: PieceKind) -> u8 {
    1 + shape(kind).iter().map(|&(dx, _)| dx).max().unwrap_or(0)
}

/// Vertical extent of a piece (1 + max dy)
pub fn height(kind: PieceKind) -> u8 {
    1 + shape(kind).iter().map(|&(_, dy)| dy).max().unwrap_or(0)
}

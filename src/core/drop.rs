//! Drop resolver - computes where a dropped piece comes to rest.
//!
//! A piece dropped into a column falls until some column of its footprint
//! meets that column's stack top. The resting row is the maximum, across
//! the piece's offsets, of `column_top(column + dx) - dy`; the piece rests
//! on whichever touched column is tallest relative to the piece's own
//! profile there. The bottom-profile guarantee (every shape has a `dy = 0`
//! offset) keeps the result non-negative, and the floor at zero bounds it
//! from below regardless.

use crate::core::board::Board;
use crate::core::pieces;
use crate::error::EngineError;
use crate::types::{Cell, PieceKind, BOARD_WIDTH};

/// Resolve the resting row for `kind` dropped into `column`
///
/// Fails with `OutOfBounds` when the footprint would leave `[0, BOARD_WIDTH)`.
pub fn resolve_drop(board: &Board, kind: PieceKind, column: u8) -> Result<u16, EngineError> {
    if column >= BOARD_WIDTH || column + pieces::width(kind) > BOARD_WIDTH {
        return Err(EngineError::OutOfBounds { column });
    }

    let mut rest: i32 = 0;
    for (dx, dy) in pieces::shape(kind) {
        let top = board.column_top(column + dx) as i32;
        rest = rest.max(top - dy as i32);
    }
    Ok(rest as u16)
}

/// Materialize the footprint of `kind` anchored at (`column`, `row`)
pub fn landing_cells(kind: PieceKind, column: u8, row: u16) -> [Cell; 4] {
    pieces::shape(kind).map(|(dx, dy)| Cell::new(column + dx, row + dy as u16))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_rests_on_the_floor_then_on_itself() {
        let mut board = Board::new();

        let row = resolve_drop(&board, PieceKind::Q, 0).unwrap();
        assert_eq!(row, 0);
        board.place(&landing_cells(PieceKind::Q, 0, row));

        let row = resolve_drop(&board, PieceKind::Q, 0).unwrap();
        assert_eq!(row, 2);
    }

    #[test]
    fn piece_rests_on_the_tallest_touched_column() {
        let mut board = Board::new();
        // Column 4 is three tall; columns 2 and 3 empty.
        board.place(&[Cell::new(4, 0), Cell::new(4, 1), Cell::new(4, 2)]);

        // T touches column 4 only with its dy = 1 arm, so it rests at row 2.
        let row = resolve_drop(&board, PieceKind::T, 2).unwrap();
        assert_eq!(row, 2);
    }

    #[test]
    fn overhang_rests_without_filling_the_gap() {
        let mut board = Board::new();
        board.place(&[Cell::new(1, 0)]);

        // S at column 0: bottom profile occupies columns 0 and 1, upper arm
        // columns 1 and 2. Column 1 is one tall, so the piece rests at row 1
        // and leaves (0, 0) empty underneath.
        let row = resolve_drop(&board, PieceKind::S, 0).unwrap();
        assert_eq!(row, 1);
        board.place(&landing_cells(PieceKind::S, 0, row));
        assert!(!board.is_occupied(0, 0));
        assert!(board.is_occupied(0, 1));
        assert!(board.is_occupied(2, 2));
    }

    #[test]
    fn footprint_must_stay_on_the_board() {
        let board = Board::new();

        // I is four wide; column 6 is the last legal anchor.
        assert_eq!(resolve_drop(&board, PieceKind::I, 6).unwrap(), 0);
        assert_eq!(
            resolve_drop(&board, PieceKind::I, 7),
            Err(EngineError::OutOfBounds { column: 7 })
        );
        assert_eq!(
            resolve_drop(&board, PieceKind::Q, 9),
            Err(EngineError::OutOfBounds { column: 9 })
        );
        assert_eq!(
            resolve_drop(&board, PieceKind::T, 12),
            Err(EngineError::OutOfBounds { column: 12 })
        );
    }
}

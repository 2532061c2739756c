//! Sequence parser - turns `"Q0,I4,T2"` into validated drop requests.
//!
//! Validation is total and up-front: a session is never created from a
//! sequence that could fail with a syntax error mid-playback. Tokens are
//! comma-separated, whitespace-tolerant, a case-insensitive piece letter
//! followed by a bare decimal column below the board width.

use crate::error::EngineError;
use crate::types::{PieceKind, BOARD_WIDTH};

/// One parsed move request: drop `piece` into `column`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceDrop {
    pub piece: PieceKind,
    pub column: u8,
}

/// Parse a full move sequence, rejecting it on the first bad token
pub fn parse_sequence(input: &str) -> Result<Vec<PieceDrop>, EngineError> {
    if input.trim().is_empty() {
        return Err(EngineError::MalformedSequence {
            token: String::new(),
            position: 0,
            reason: "empty sequence",
        });
    }

    let mut moves = Vec::new();
    for (position, raw) in input.split(',').enumerate() {
        let token = raw.trim();
        let malformed = |reason: &'static str| EngineError::MalformedSequence {
            token: token.to_string(),
            position,
            reason,
        };

        let mut chars = token.chars();
        let letter = chars.next().ok_or_else(|| malformed("empty token"))?;
        let piece =
            PieceKind::from_char(letter).ok_or_else(|| malformed("unknown piece letter"))?;

        let digits = chars.as_str();
        if digits.is_empty() {
            return Err(malformed("missing column"));
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed("column is not an unsigned integer"));
        }
        let column: u32 = digits
            .parse()
            .map_err(|_| malformed("column is not an unsigned integer"))?;
        if column >= BOARD_WIDTH as u32 {
            return Err(malformed("column outside the board"));
        }

        moves.push(PieceDrop {
            piece,
            column: column as u8,
        });
    }
    Ok(moves)
}

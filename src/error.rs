//! Engine error taxonomy.
//!
//! Every failure is local to the operation that raised it: a failed parse
//! creates no session, and a failed advance leaves board, history, and
//! cursor untouched. Variants carry the offending data and map to stable
//! string codes for the transport layer.

use std::fmt;

/// Errors raised by the core engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Sequence text rejected during up-front validation
    MalformedSequence {
        /// The offending token, as written (trimmed)
        token: String,
        /// 0-based position of the token in the sequence
        position: usize,
        reason: &'static str,
    },
    /// A move's footprint would leave the board horizontally
    ///
    /// The parser bounds every column, so reaching this from a parsed
    /// sequence indicates an internal invariant violation.
    OutOfBounds { column: u8 },
    /// `advance` was called on a session that already finished its sequence
    GameAlreadyCompleted,
    /// The resolved landing reaches rows the visible board cannot hold
    ///
    /// Reported before any mutation; `height` is the height the stack would
    /// have reached. The session stays valid - the caller decides whether
    /// this ends the game.
    BoardOverflow { height: u16 },
}

impl EngineError {
    /// Stable code string for the transport layer
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::MalformedSequence { .. } => "malformed_sequence",
            EngineError::OutOfBounds { .. } => "out_of_bounds",
            EngineError::GameAlreadyCompleted => "game_already_completed",
            EngineError::BoardOverflow { .. } => "board_overflow",
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::MalformedSequence {
                token,
                position,
                reason,
            } => write!(
                f,
                "malformed sequence: token {token:?} at position {position}: {reason}"
            ),
            EngineError::OutOfBounds { column } => {
                write!(f, "piece at column {column} extends beyond the board")
            }
            EngineError::GameAlreadyCompleted => write!(f, "game is already completed"),
            EngineError::BoardOverflow { height } => write!(
                f,
                "piece would land above the visible board (stack height {height})"
            ),
        }
    }
}

impl std::error::Error for EngineError {}

//! Wire contract types for the transport layer.
//!
//! These are the JSON shapes the (out-of-scope) transport exchanges with
//! clients. Field names are the contract; conversions from core state are
//! one-way and lossless, so consumers never re-derive engine facts from
//! display strings. Grids serialize sorted by `(x, y)`, which keeps
//! repeated reads of the same state byte-identical.

use serde::{Deserialize, Serialize};

use crate::core::game::{GameSession, MoveRecord};
use crate::types::{Cell, GameStatus, PieceKind};

/// One executed move as reported outward
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub piece_type: PieceKind,
    pub column: u8,
    pub height_after: u16,
    pub rows_cleared: Vec<u16>,
}

impl From<&MoveRecord> for Move {
    fn from(record: &MoveRecord) -> Self {
        Self {
            piece_type: record.piece,
            column: record.column,
            height_after: record.height_after,
            rows_cleared: record.rows_cleared.clone(),
        }
    }
}

/// Full session state as reported outward
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub sequence: String,
    pub current_step: usize,
    pub grid: Vec<Cell>,
    pub moves_history: Vec<Move>,
    pub current_height: u16,
    pub status: GameStatus,
}

impl GameState {
    /// Snapshot a session into its wire form
    pub fn from_session(session: &GameSession) -> Self {
        Self {
            sequence: session.sequence().to_string(),
            current_step: session.current_step(),
            grid: session.board().sorted_cells(),
            moves_history: session.history().iter().map(Move::from).collect(),
            current_height: session.current_height(),
            status: session.status(),
        }
    }
}

/// Descriptive metadata for one predefined sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceInfo {
    pub sequence: String,
    pub expected_height: u16,
    pub piece_count: usize,
}

/// Response body for the predefined-sequence listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequencesResponse {
    pub sequences: Vec<SequenceInfo>,
}

/// Response body for game creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGameResponse {
    pub game_id: String,
    pub state: GameState,
}

/// Response body for an advance or a state fetch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateResponse {
    pub state: GameState,
}

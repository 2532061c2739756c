//! Core engine - pure, deterministic, and synchronous.
//!
//! No I/O, no clocks, no randomness: replaying the same sequence from a
//! fresh session always reproduces the same board, history, and height.
//!
//! # Module Structure
//!
//! - [`pieces`]: shape catalog, one fixed orientation per piece
//! - [`board`]: sparse occupancy grid with full-row clearing
//! - [`drop`]: resting-row resolution for column drops
//! - [`sequence`]: up-front validation of textual move sequences
//! - [`game`]: session state and the advance executor

pub mod board;
pub mod drop;
pub mod game;
pub mod pieces;
pub mod sequence;

// Re-export commonly used types for convenience
pub use board::Board;
pub use drop::{landing_cells, resolve_drop};
pub use game::{GameSession, MoveRecord};
pub use sequence::{parse_sequence, PieceDrop};

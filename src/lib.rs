//! Deterministic drop-stack tetromino engine.
//!
//! Pieces from a validated move sequence are dropped one at a time into
//! fixed columns of a 10-wide board; full rows clear and the stack above
//! compacts downward. There is no rotation and no user-driven movement -
//! each piece has a single orientation and falls to its lowest legal
//! resting position.
//!
//! The engine is pure and synchronous: distinct sessions share nothing,
//! and a session mutates only through [`core::GameSession::advance`].
//! Replaying a sequence therefore always reproduces the same history,
//! grid, and height.
//!
//! The [`adapter`] module holds the transport-facing surface: serde wire
//! types matching the JSON contract, a keyed session registry, and the
//! predefined-sequence catalog.
//!
//! # Example
//!
//! ```
//! use tetris_sim::core::GameSession;
//!
//! let mut session = GameSession::create("Q0,Q1").unwrap();
//! while !session.is_completed() {
//!     session.advance().unwrap();
//! }
//! assert_eq!(session.current_height(), 4);
//! ```

pub mod adapter;
pub mod core;
pub mod error;
pub mod types;

pub use error::EngineError;

//! Transport-facing surface: wire types, session registry, sequence catalog.
//!
//! The transport itself (HTTP routing, persistence, auth) lives outside
//! this crate; everything it needs from the engine is here.

pub mod protocol;
pub mod registry;
pub mod sequences;

pub use protocol::{
    CreateGameResponse, GameState, Move, SequenceInfo, SequencesResponse, StateResponse,
};
pub use registry::{GameRegistry, RegistryError};
pub use sequences::{load_catalog, sequence_info, CatalogConfig};

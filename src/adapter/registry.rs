//! Session registry - keyed store of live game sessions.
//!
//! The capability interface the surrounding service consumes: create, get,
//! advance. Ids are opaque strings allocated from a monotonic counter, so
//! they stay unique however the map grows and shrinks. The registry is
//! synchronous; the caller serializes access per session.

use std::collections::HashMap;
use std::fmt;

use crate::adapter::protocol::GameState;
use crate::core::game::GameSession;
use crate::error::EngineError;

/// Errors raised by the registry surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No session is registered under the given id
    UnknownGame(String),
    /// An engine failure from the underlying session
    Engine(EngineError),
}

impl RegistryError {
    /// Stable code string for the transport layer
    pub fn code(&self) -> &'static str {
        match self {
            RegistryError::UnknownGame(_) => "unknown_game",
            RegistryError::Engine(err) => err.code(),
        }
    }
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::UnknownGame(game_id) => write!(f, "unknown game id {game_id:?}"),
            RegistryError::Engine(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for RegistryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RegistryError::Engine(err) => Some(err),
            RegistryError::UnknownGame(_) => None,
        }
    }
}

impl From<EngineError> for RegistryError {
    fn from(err: EngineError) -> Self {
        RegistryError::Engine(err)
    }
}

/// Keyed store of independent game sessions
#[derive(Debug, Default)]
pub struct GameRegistry {
    games: HashMap<String, GameSession>,
    next_id: u64,
}

impl GameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session from `sequence` and register it under a fresh id
    pub fn create(&mut self, sequence: &str) -> Result<(String, GameState), RegistryError> {
        let session = GameSession::create(sequence)?;
        let game_id = format!("game_{}", self.next_id);
        self.next_id += 1;

        let state = GameState::from_session(&session);
        self.games.insert(game_id.clone(), session);
        Ok((game_id, state))
    }

    /// Execute the next move of the identified session
    pub fn advance(&mut self, game_id: &str) -> Result<GameState, RegistryError> {
        let session = self
            .games
            .get_mut(game_id)
            .ok_or_else(|| RegistryError::UnknownGame(game_id.to_string()))?;
        session.advance()?;
        Ok(GameState::from_session(session))
    }

    /// Snapshot the identified session without mutating it
    pub fn state(&self, game_id: &str) -> Result<GameState, RegistryError> {
        let session = self
            .games
            .get(game_id)
            .ok_or_else(|| RegistryError::UnknownGame(game_id.to_string()))?;
        Ok(GameState::from_session(session))
    }

    /// Borrow the identified session directly
    pub fn session(&self, game_id: &str) -> Option<&GameSession> {
        self.games.get(game_id)
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GameStatus;

    #[test]
    fn create_advance_fetch_flow() {
        let mut registry = GameRegistry::new();
        let (game_id, state) = registry.create("Q0,I4").unwrap();
        assert_eq!(game_id, "game_0");
        assert_eq!(state.current_step, 0);
        assert_eq!(state.status, GameStatus::InProgress);
        assert!(state.grid.is_empty());

        let state = registry.advance(&game_id).unwrap();
        assert_eq!(state.current_step, 1);
        assert_eq!(state.current_height, 2);
        assert_eq!(state.moves_history.len(), 1);

        let fetched = registry.state(&game_id).unwrap();
        assert_eq!(fetched, state);
    }

    #[test]
    fn ids_stay_unique_and_monotonic() {
        let mut registry = GameRegistry::new();
        let (first, _) = registry.create("Q0").unwrap();
        let (second, _) = registry.create("Q0").unwrap();
        assert_eq!(first, "game_0");
        assert_eq!(second, "game_1");
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn unknown_game_is_reported() {
        let mut registry = GameRegistry::new();
        let err = registry.advance("game_42").unwrap_err();
        assert_eq!(err, RegistryError::UnknownGame("game_42".to_string()));
        assert_eq!(err.code(), "unknown_game");
        assert!(registry.state("game_42").is_err());
    }

    #[test]
    fn malformed_sequence_creates_nothing() {
        let mut registry = GameRegistry::new();
        let err = registry.create("Q0,Q").unwrap_err();
        assert_eq!(err.code(), "malformed_sequence");
        assert!(registry.is_empty());
    }

    #[test]
    fn advance_failure_leaves_the_stored_state_intact() {
        let mut registry = GameRegistry::new();
        let (game_id, _) = registry.create("I0").unwrap();
        registry.advance(&game_id).unwrap();

        let before = registry.state(&game_id).unwrap();
        let err = registry.advance(&game_id).unwrap_err();
        assert_eq!(err.code(), "game_already_completed");
        assert_eq!(registry.state(&game_id).unwrap(), before);
    }
}

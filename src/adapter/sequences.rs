//! Predefined-sequence catalog.
//!
//! Sequences ship as configuration: one per line in a text file, `#`
//! comments and blank lines ignored, with the path taken from the
//! environment and a built-in fallback list. `expected_height` is never
//! hand-authored - each sequence is fully simulated once at load time, so
//! the advertised value is exactly what playback will produce.

use std::fs;
use std::path::PathBuf;

use crate::adapter::protocol::SequenceInfo;
use crate::core::game::GameSession;
use crate::error::EngineError;

/// Environment variable naming the sequence file
pub const SEQUENCES_PATH_ENV: &str = "TETRIS_SEQUENCES_PATH";

/// Fallback catalog used when no file is configured or readable
pub const DEFAULT_SEQUENCES: &[&str] = &[
    "Q0",
    "Q0,Q1",
    "I0,I4",
    "Q0,Q2,Q4,Q6,Q8",
    "Q0,Q1,Q2,Q3,Q4,Q5,Q6,Q7,Q8,Q9",
];

/// Catalog configuration
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    /// Optional path to the sequence file; `None` means built-in defaults
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    /// Read configuration from the environment
    pub fn from_env() -> Self {
        let path = std::env::var(SEQUENCES_PATH_ENV)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);
        Self { path }
    }
}

/// Compute `SequenceInfo` for one sequence by simulating it fully
pub fn sequence_info(sequence: &str) -> Result<SequenceInfo, EngineError> {
    let mut session = GameSession::create(sequence)?;
    let expected_height = session.play_to_end()?;
    Ok(SequenceInfo {
        sequence: sequence.to_string(),
        expected_height,
        piece_count: session.piece_count(),
    })
}

/// Build a catalog from newline-separated sequence text
///
/// Lines that fail validation or overflow the board are skipped rather than
/// failing the whole catalog.
pub fn catalog_from_text(text: &str) -> Vec<SequenceInfo> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| sequence_info(line).ok())
        .collect()
}

/// Load the catalog: the configured file when readable, built-in defaults
/// otherwise
pub fn load_catalog(config: &CatalogConfig) -> Vec<SequenceInfo> {
    match &config.path {
        Some(path) => match fs::read_to_string(path) {
            Ok(text) => catalog_from_text(&text),
            Err(_) => default_catalog(),
        },
        None => default_catalog(),
    }
}

fn default_catalog() -> Vec<SequenceInfo> {
    DEFAULT_SEQUENCES
        .iter()
        .filter_map(|sequence| sequence_info(sequence).ok())
        .collect()
}

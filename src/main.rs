//! Sequence playback runner (default binary).
//!
//! With a sequence argument, plays it move by move and prints each record.
//! Without arguments, prints the predefined catalog; `--json` emits the
//! catalog in its wire form.

use anyhow::{Context, Result};

use tetris_sim::adapter::protocol::SequencesResponse;
use tetris_sim::adapter::sequences::{load_catalog, CatalogConfig};
use tetris_sim::core::GameSession;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("--json") => print_catalog_json(),
        Some(sequence) => play(sequence),
        None => print_catalog(),
    }
}

fn play(sequence: &str) -> Result<()> {
    let mut session = GameSession::create(sequence)
        .with_context(|| format!("invalid sequence {sequence:?}"))?;

    while !session.is_completed() {
        let record = session.advance().context("playback failed")?;
        if record.rows_cleared.is_empty() {
            println!(
                "{}{} -> height {}",
                record.piece.as_char(),
                record.column,
                record.height_after
            );
        } else {
            println!(
                "{}{} -> height {} (cleared rows {:?})",
                record.piece.as_char(),
                record.column,
                record.height_after,
                record.rows_cleared
            );
        }
    }

    println!("final height: {}", session.current_height());
    Ok(())
}

fn print_catalog() -> Result<()> {
    let catalog = load_catalog(&CatalogConfig::from_env());
    for info in &catalog {
        println!(
            "{:<40} pieces {:>3}  expected height {:>2}",
            info.sequence, info.piece_count, info.expected_height
        );
    }
    Ok(())
}

fn print_catalog_json() -> Result<()> {
    let catalog = load_catalog(&CatalogConfig::from_env());
    let body = SequencesResponse { sequences: catalog };
    let json = serde_json::to_string_pretty(&body).context("serialize catalog")?;
    println!("{json}");
    Ok(())
}

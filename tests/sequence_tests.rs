//! Sequence parser tests - total up-front validation

use tetris_sim::core::{parse_sequence, GameSession, PieceDrop};
use tetris_sim::types::PieceKind;
use tetris_sim::EngineError;

fn malformed(input: &str) -> (String, usize) {
    match parse_sequence(input) {
        Err(EngineError::MalformedSequence {
            token, position, ..
        }) => (token, position),
        other => panic!("expected MalformedSequence for {input:?}, got {other:?}"),
    }
}

#[test]
fn test_parses_every_piece_letter() {
    let moves = parse_sequence("Q0,I1,T2,S3,Z4,L5,J6").unwrap();
    let pieces: Vec<PieceKind> = moves.iter().map(|m| m.piece).collect();
    assert_eq!(
        pieces,
        vec![
            PieceKind::Q,
            PieceKind::I,
            PieceKind::T,
            PieceKind::S,
            PieceKind::Z,
            PieceKind::L,
            PieceKind::J,
        ]
    );
    let columns: Vec<u8> = moves.iter().map(|m| m.column).collect();
    assert_eq!(columns, vec![0, 1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_whitespace_and_lowercase_are_fine() {
    assert_eq!(
        parse_sequence(" q0 ,  i4 ").unwrap(),
        vec![
            PieceDrop { piece: PieceKind::Q, column: 0 },
            PieceDrop { piece: PieceKind::I, column: 4 },
        ]
    );
}

#[test]
fn test_rejects_empty_and_blank_input() {
    assert_eq!(malformed(""), (String::new(), 0));
    assert_eq!(malformed("  \t "), (String::new(), 0));
}

#[test]
fn test_reports_token_and_position() {
    assert_eq!(malformed("Q0,,I4"), ("".to_string(), 1));
    assert_eq!(malformed("Q0,I4,X2"), ("X2".to_string(), 2));
    assert_eq!(malformed("Q0,T10"), ("T10".to_string(), 1));
}

#[test]
fn test_rejects_non_integer_columns() {
    malformed("Q");
    malformed("Q-1");
    malformed("Q+1");
    malformed("Q1.5");
    malformed("Qx");
    malformed("Q 1,I4"); // inner whitespace is not a digit
}

#[test]
fn test_rejects_columns_at_or_beyond_width() {
    malformed("Q10");
    malformed("I99");
    // Column 9 itself is a valid anchor.
    assert!(parse_sequence("T9").is_ok());
}

#[test]
fn test_session_creation_propagates_parse_errors() {
    let err = GameSession::create("Q0,T10").unwrap_err();
    assert_eq!(err.code(), "malformed_sequence");
}

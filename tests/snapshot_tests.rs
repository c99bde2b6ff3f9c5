//! Snapshot tests - what renderers and logs see

use frametris::core::{ActiveSnapshot, GameSnapshot, GameState, Piece, SequencePieces};
use frametris::types::{FrameInput, GameAction, PieceKind, Rotation};

#[test]
fn test_snapshot_reflects_state() {
    let mut game = GameState::with_source(SequencePieces::new([PieceKind::L, PieceKind::Z]));
    game.step(&FrameInput::from_action(GameAction::MoveRight));

    let snap = game.snapshot();
    assert_eq!(
        snap.active,
        ActiveSnapshot {
            kind: PieceKind::L,
            rotation: Rotation::North,
            x: 4,
            y: 0
        }
    );
    assert_eq!(snap.next, PieceKind::Z);
    assert_eq!(snap.frame, 1);
    assert_eq!(snap.score, 0);
    assert!(snap.playable());
    assert_eq!(snap.active_cells(), game.active().cells());
}

#[test]
fn test_snapshot_into_overwrites_previous() {
    let game = GameState::with_source(SequencePieces::new([PieceKind::S]));
    let mut snap = GameSnapshot::default();
    snap.board[0][0] = Some(PieceKind::O);
    snap.cleared_rows.push(3);
    snap.game_over = true;

    game.snapshot_into(&mut snap);
    assert_eq!(snap, game.snapshot());
    assert_eq!(snap.board[0][0], None);
    assert!(snap.cleared_rows.is_empty());
}

#[test]
fn test_active_snapshot_round_trips_piece() {
    let piece = Piece::new(PieceKind::J, Rotation::West, -1, 7);
    assert_eq!(Piece::from(ActiveSnapshot::from(piece)), piece);
}

#[test]
fn test_snapshot_serializes_to_json() {
    let mut game = GameState::with_source(SequencePieces::new([PieceKind::T, PieceKind::I]));
    game.step(&FrameInput::NONE);

    let value = serde_json::to_value(game.snapshot()).unwrap();
    assert_eq!(value["next"], "i");
    assert_eq!(value["active"]["kind"], "t");
    assert_eq!(value["active"]["rotation"], "north");
    assert_eq!(value["frame"], 1);
    assert_eq!(value["board"].as_array().unwrap().len(), 20);
    assert_eq!(value["board"][0].as_array().unwrap().len(), 10);
    assert!(value["board"][19][0].is_null());
}

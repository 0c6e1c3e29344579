//! Apply/undo tests.

use super::{lone, sq};
use crate::board::{Board, Color, GameState, Move, MoveError, Occupant, PieceKind};
use rand::prelude::*;

fn find_move(state: &GameState, notation: &str) -> Move {
    let candidate = Move::parse(notation, state.board()).expect("bad test notation");
    state
        .generate_moves()
        .find(&candidate)
        .unwrap_or_else(|| panic!("Expected move {notation} not found"))
}

#[test]
fn test_apply_moves_piece_and_flips_turn() {
    let mut state = GameState::new();
    let mv = find_move(&state, "e2e4");
    state.apply(mv);

    assert!(state.piece_at(sq(6, 4)).is_empty());
    assert_eq!(
        state.piece_at(sq(4, 4)),
        Occupant::Piece(Color::White, PieceKind::Pawn)
    );
    assert_eq!(state.side_to_move(), Color::Black);
    assert_eq!(state.history(), &[mv]);
}

#[test]
fn test_every_initial_move_round_trips() {
    let mut state = GameState::new();
    let original = state.board().clone();

    for mv in state.generate_moves() {
        state.apply(mv);
        let undone = state.undo();
        assert_eq!(undone, Some(mv));
        assert_eq!(state.board(), &original);
        assert!(state.white_to_move());
        assert_eq!(state.history_len(), 0);
    }
}

#[test]
fn test_undo_restores_captured_piece() {
    let mut state = GameState::new();
    for notation in ["e2e4", "d7d5"] {
        state.play_notation(notation).unwrap();
    }
    let before = state.board().clone();

    let capture = state.play_notation("e4d5").unwrap();
    assert_eq!(
        capture.piece_captured(),
        Occupant::Piece(Color::Black, PieceKind::Pawn)
    );
    assert_eq!(state.board().count(Color::Black), 15);

    state.undo();
    assert_eq!(state.board(), &before);
    assert_eq!(state.board().count(Color::Black), 16);
    assert_eq!(state.side_to_move(), Color::White);
}

#[test]
fn test_undo_on_empty_history_is_noop() {
    let mut state = GameState::new();
    assert_eq!(state.undo(), None);
    assert_eq!(state.board(), &Board::standard());
    assert!(state.white_to_move());
    assert_eq!(state.history_len(), 0);
}

#[test]
fn test_turn_alternation() {
    let mut state = GameState::new();
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let (mut applied, mut undone) = (0usize, 0usize);

    for _ in 0..120 {
        if state.history_len() > 0 && rng.gen_bool(0.3) {
            state.undo();
            undone += 1;
        } else {
            let moves = state.generate_moves();
            if moves.is_empty() {
                break;
            }
            state.apply(moves[rng.gen_range(0..moves.len())]);
            applied += 1;
        }
        let odd = (applied - undone) % 2 == 1;
        assert_eq!(state.white_to_move(), !odd);
        assert_eq!(state.history_len(), applied - undone);
    }
}

#[test]
fn test_apply_is_unconditional() {
    let mut state = GameState::new();
    let illegal = Move::parse("e2e5", state.board()).unwrap();
    assert!(!state.generate_moves().contains(&illegal));

    state.apply(illegal);
    assert_eq!(
        state.piece_at(sq(3, 4)),
        Occupant::Piece(Color::White, PieceKind::Pawn)
    );
    state.undo();
    assert_eq!(state.board(), &Board::standard());
}

#[test]
fn test_try_apply_rejects_moves_outside_set() {
    let mut state = GameState::new();
    let illegal = Move::parse("e2e5", state.board()).unwrap();

    assert_eq!(
        state.try_apply(&illegal),
        Err(MoveError::NotInMoveSet {
            notation: "e2e5".to_string()
        })
    );
    assert_eq!(state.board(), &Board::standard());
    assert_eq!(state.history_len(), 0);
}

#[test]
fn test_try_apply_uses_enumerated_instance() {
    let mut state = GameState::new();
    // Built against an empty board, so it records no mover.
    let candidate = Move::parse("g1f3", &Board::empty()).unwrap();
    assert!(candidate.piece_moved().is_empty());

    let played = state.try_apply(&candidate).unwrap();
    assert_eq!(
        played.piece_moved(),
        Occupant::Piece(Color::White, PieceKind::Knight)
    );
    assert_eq!(
        state.piece_at(sq(5, 5)),
        Occupant::Piece(Color::White, PieceKind::Knight)
    );
}

#[test]
fn test_play_notation_errors() {
    let mut state = GameState::new();
    assert!(matches!(
        state.play_notation("e2"),
        Err(MoveError::InvalidLength { len: 2 })
    ));
    assert!(matches!(
        state.play_notation("e9e4"),
        Err(MoveError::InvalidSquare(_))
    ));
    assert!(matches!(
        state.play_notation("e7e5"),
        Err(MoveError::NotInMoveSet { .. })
    ));
    assert_eq!(state.history_len(), 0);
}

#[test]
fn test_recorded_move_survives_board_changes() {
    let mut state = lone(sq(4, 4), Color::White, PieceKind::Knight)
        .piece(sq(2, 5), Color::Black, PieceKind::Rook)
        .build();
    let capture = find_move(&state, "e4f6");
    state.apply(capture);
    state.apply(Move::new(sq(2, 5), sq(4, 4), state.board()));

    let recorded = state.history()[0];
    assert_eq!(
        recorded.piece_moved(),
        Occupant::Piece(Color::White, PieceKind::Knight)
    );
    assert_eq!(
        recorded.piece_captured(),
        Occupant::Piece(Color::Black, PieceKind::Rook)
    );

    state.undo();
    state.undo();
    assert_eq!(
        state.piece_at(sq(2, 5)),
        Occupant::Piece(Color::Black, PieceKind::Rook)
    );
    assert_eq!(
        state.piece_at(sq(4, 4)),
        Occupant::Piece(Color::White, PieceKind::Knight)
    );
}

#[test]
fn test_random_playout_round_trip_state() {
    let mut state = GameState::new();
    let initial_fen = state.to_fen();
    let mut rng = StdRng::seed_from_u64(0x5EED);

    for _ in 0..200 {
        let moves = state.generate_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        state.apply(mv);
    }

    while state.undo().is_some() {}

    assert_eq!(state.to_fen(), initial_fen);
    assert_eq!(state.board(), &Board::standard());
}

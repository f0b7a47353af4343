//! Game module unit tests
//!
//! Covers the domain value types, the demo engine's rules and the call-order
//! contract enforced by [`GuardedEngine`]. None of these tests need an ECS
//! world.

use super::*;
use crate::view::ViewError;
use assert_matches::assert_matches;

fn invalid_reason(result: &MoveResult) -> Option<&str> {
    match result {
        MoveResult::InvalidMove { reason } => Some(reason),
        _ => None,
    }
}

// ============================================================================
// Domain Types
// ============================================================================

#[test]
fn test_position_parity() {
    assert!(Position::new(1, 1).is_even());
    assert!(!Position::new(1, 2).is_even());
    assert!(Position::new(2, 4).is_even());
    assert!(!Position::new(6, 3).is_even());
}

#[test]
fn test_position_parse() {
    //! Positions are written `row,column` on the command line
    assert_eq!("2,1".parse::<Position>(), Ok(Position::new(2, 1)));
    assert_eq!(" 6 , 4 ".parse::<Position>(), Ok(Position::new(6, 4)));

    for bad in ["", "3", "a,b", "0,1", "1,0", "-1,2"] {
        assert!(bad.parse::<Position>().is_err(), "'{}' should not parse", bad);
    }
}

#[test]
fn test_board_contains_and_positions() {
    let board = BoardSize::new(4, 6);

    assert!(board.contains(Position::new(6, 4)));
    assert!(!board.contains(Position::new(7, 1)));
    assert!(!board.contains(Position::new(1, 5)));
    assert!(!BoardSize::new(0, 6).is_valid());

    let positions: Vec<_> = board.positions().collect();
    assert_eq!(positions.len(), 24);
    assert_eq!(positions[0], Position::new(1, 1));
    assert_eq!(positions[1], Position::new(2, 1), "column-major order");
}

#[test]
fn test_player_labels() {
    assert_eq!(PlayerColor::White.display_name(), "White");
    assert_eq!(PlayerColor::Black.asset_name(), "black");
    assert_eq!(PlayerColor::White.opponent(), PlayerColor::Black);
}

#[test]
fn test_piece_image_id_and_key() {
    let queen = ChessPiece::new("7", PlayerColor::Black, Position::new(6, 3), "queen");
    assert_eq!(queen.image_id(), "queen_black");
    assert_eq!(queen.key(), PieceKey::Stable("7".into()));
    assert_eq!(queen.moved_to(Position::new(1, 1)).key(), queen.key());

    let rook = ChessPiece::anonymous(PlayerColor::White, Position::new(1, 1), "rook");
    assert_matches!(rook.key(), PieceKey::Structural { .. });
    assert_ne!(rook.key(), rook.moved_to(Position::new(2, 1)).key());
}

#[test]
fn test_move_result_json_shape() {
    //! Engines written outside this crate can exchange results as JSON
    let json = r#"{
        "NewGameState": {
            "pieces": [
                {"id": "1", "color": "White", "position": {"row": 2, "column": 1}, "piece_id": "king"},
                {"color": "Black", "position": {"row": 6, "column": 4}, "piece_id": "king"}
            ],
            "current_player": "Black"
        }
    }"#;

    let result: MoveResult = serde_json::from_str(json).unwrap();
    let MoveResult::NewGameState { pieces, current_player } = result else {
        panic!("expected NewGameState");
    };
    assert_eq!(current_player, PlayerColor::Black);
    assert_eq!(pieces[0].id.as_deref(), Some("1"));
    assert_eq!(pieces[1].id, None);
}

// ============================================================================
// SimpleGameEngine
// ============================================================================

#[test]
fn test_simple_engine_initial_layout() {
    let mut engine = SimpleGameEngine::new();
    let state = engine.init();

    assert_eq!(state.board_size, BoardSize::new(4, 6));
    assert_eq!(state.current_player, PlayerColor::White);
    assert_eq!(state.pieces.len(), 8);

    let white_back_row: Vec<_> = state
        .pieces
        .iter()
        .filter(|p| p.color == PlayerColor::White)
        .map(|p| (p.position, p.piece_id.as_str()))
        .collect();
    assert_eq!(
        white_back_row,
        vec![
            (Position::new(1, 1), "rook"),
            (Position::new(1, 2), "king"),
            (Position::new(1, 3), "queen"),
            (Position::new(1, 4), "rook"),
        ]
    );
    assert!(state
        .pieces
        .iter()
        .filter(|p| p.color == PlayerColor::Black)
        .all(|p| p.position.row == 6));
}

#[test]
fn test_simple_engine_rejections() {
    let state = SimpleEngineState::default();

    let (_, empty) = state.apply(&Move::relocate(Position::new(3, 3), Position::new(4, 3)));
    assert_eq!(invalid_reason(&empty), Some("No piece in (3, 3)"));

    let (_, foreign) = state.apply(&Move::relocate(Position::new(6, 1), Position::new(5, 1)));
    assert_eq!(invalid_reason(&foreign), Some("Piece does not belong to current player"));

    let (_, blocked) = state.apply(&Move::relocate(Position::new(1, 1), Position::new(1, 2)));
    assert_eq!(invalid_reason(&blocked), Some("There is a piece in (1, 2)"));

    let (next, castle) = state.apply(&Move::Castle {
        side: CastleSide::KingSide,
        player: PlayerColor::White,
    });
    assert_eq!(invalid_reason(&castle), Some("Castling is not supported"));
    assert_eq!(next, state, "rejected moves leave the state alone");
}

#[test]
fn test_simple_engine_move_passes_turn() {
    let state = SimpleEngineState::default();
    let (next, result) = state.apply(&Move::relocate(Position::new(1, 1), Position::new(3, 1)));

    assert_matches!(
        result,
        MoveResult::NewGameState { current_player: PlayerColor::Black, ref pieces } if pieces.len() == 8
    );
    assert_eq!(
        next.piece_at(Position::new(3, 1)).and_then(|p| p.id.as_deref()),
        Some("1")
    );
    assert!(next.piece_at(Position::new(1, 1)).is_none());
}

#[test]
fn test_simple_engine_capture_and_promotion() {
    //! White rook captures on the far row and becomes a queen.
    let state = SimpleEngineState::default();
    let (next, result) = state.apply(&Move::relocate(Position::new(1, 1), Position::new(6, 1)));

    let MoveResult::NewGameState { pieces, .. } = result else {
        panic!("expected NewGameState, got {:?}", result);
    };
    assert_eq!(pieces.len(), 7);
    let promoted = next.piece_at(Position::new(6, 1)).unwrap();
    assert_eq!(promoted.piece_id, "queen");
    assert_eq!(promoted.id.as_deref(), Some("1"));
    assert_eq!(promoted.color, PlayerColor::White);
}

#[test]
fn test_simple_engine_last_piece_wins() {
    let state = SimpleEngineState::new(
        BoardSize::new(4, 6),
        vec![
            ChessPiece::new("1", PlayerColor::White, Position::new(1, 1), "king"),
            ChessPiece::new("2", PlayerColor::Black, Position::new(6, 4), "king"),
        ],
        PlayerColor::Black,
    );

    let (_, result) = state.apply(&Move::relocate(Position::new(6, 4), Position::new(1, 1)));
    assert_eq!(result, MoveResult::GameOver { winner: PlayerColor::Black });
}

// ============================================================================
// GuardedEngine
// ============================================================================

#[test]
fn test_guarded_engine_rejects_move_before_init() {
    let mut engine = GuardedEngine::new(SimpleGameEngine::new());
    let mv = Move::relocate(Position::new(1, 1), Position::new(2, 1));

    assert_eq!(engine.apply_move(&mv), Err(ViewError::EngineNotInitialized));
    assert_eq!(engine.inner().state(), &SimpleEngineState::default());
}

#[test]
fn test_guarded_engine_rejects_second_init() {
    let mut engine = GuardedEngine::new(SimpleGameEngine::new());

    assert!(engine.init().is_ok());
    assert!(engine.is_initialized());
    assert_eq!(engine.init(), Err(ViewError::EngineInitializedTwice));
}

#[test]
fn test_guarded_engine_rejects_empty_board() {
    let state = SimpleEngineState::new(BoardSize::new(0, 0), Vec::new(), PlayerColor::White);
    let mut engine = GuardedEngine::new(SimpleGameEngine::with_state(state));

    assert_eq!(
        engine.init(),
        Err(ViewError::InvalidBoardSize { columns: 0, rows: 0 })
    );
}

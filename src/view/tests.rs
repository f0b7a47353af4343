//! View module unit tests
//!
//! Exercises the composer and the session adapter end to end without Bevy:
//! engine results go in, displayed pieces, status texts and render
//! instructions come out.

use super::*;
use crate::game::{
    BoardSize, CastleSide, ChessPiece, GameEngine, GameEventListener, GameStateListener,
    InitialState, Move, MoveResult, PieceKey, PlayerColor, Position, SimpleEngineState,
    SimpleGameEngine,
};
use assert_matches::assert_matches;
use bevy::math::Vec2;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Engine replaying a fixed list of results
struct ScriptedEngine {
    initial: InitialState,
    results: VecDeque<MoveResult>,
    received: Arc<Mutex<Vec<Move>>>,
}

impl ScriptedEngine {
    fn new(initial: InitialState, results: Vec<MoveResult>) -> Self {
        Self {
            initial,
            results: results.into(),
            received: Arc::default(),
        }
    }
}

impl GameEngine for ScriptedEngine {
    fn init(&mut self) -> InitialState {
        self.initial.clone()
    }

    fn apply_move(&mut self, mv: &Move) -> MoveResult {
        self.received.lock().unwrap().push(mv.clone());
        self.results
            .pop_front()
            .expect("scripted engine ran out of results")
    }
}

/// Listener recording moves into shared storage
#[derive(Clone, Default)]
struct RecordingListener(Arc<Mutex<Vec<Move>>>);

impl GameEventListener for RecordingListener {
    fn handle_move(&mut self, mv: &Move) {
        self.0.lock().unwrap().push(mv.clone());
    }
}

fn white_king() -> ChessPiece {
    ChessPiece::new("1", PlayerColor::White, Position::new(1, 1), "king")
}

fn black_king() -> ChessPiece {
    ChessPiece::new("2", PlayerColor::Black, Position::new(6, 4), "king")
}

fn two_kings() -> InitialState {
    InitialState {
        board_size: BoardSize::new(4, 6),
        pieces: vec![white_king(), black_king()],
        current_player: PlayerColor::White,
    }
}

fn started_view() -> GameView {
    let mut view = GameView::default();
    view.handle_initial_state(two_kings()).unwrap();
    view.drain_render_ops();
    view
}

fn snapshot(view: &GameView) -> Vec<ChessPiece> {
    view.displayed().iter().cloned().collect()
}

// ============================================================================
// Composer: initial state
// ============================================================================

#[test]
fn test_initial_state_seeds_display_and_texts() {
    let mut view = GameView::default();
    view.handle_initial_state(two_kings()).unwrap();

    assert_eq!(view.phase(), ViewPhase::Playing);
    assert_eq!(view.displayed().len(), 2);
    assert_eq!(view.current_player_text().as_deref(), Some("Current player: White"));
    assert_eq!(view.message(), None);

    let ops = view.drain_render_ops();
    let spawned: Vec<_> = ops
        .iter()
        .filter_map(|op| match op {
            RenderOp::Spawn { image_id, at, .. } => Some((image_id.clone(), *at)),
            _ => None,
        })
        .collect();
    assert_eq!(
        spawned,
        vec![
            ("king_white".to_string(), Vec2::new(0.0, 0.0)),
            ("king_black".to_string(), Vec2::new(210.0, 350.0)),
        ]
    );
    assert!(ops.contains(&RenderOp::Text {
        slot: TextSlot::CurrentPlayer,
        text: Some("Current player: White".into()),
    }));
}

#[test]
fn test_second_initial_state_is_rejected() {
    let mut view = started_view();
    assert_eq!(
        view.handle_initial_state(two_kings()),
        Err(ViewError::AlreadyInitialized)
    );
    assert_eq!(view.displayed().len(), 2);
}

#[test]
fn test_result_before_initial_state_is_rejected() {
    let mut view = GameView::default();
    assert_eq!(
        view.handle_move_result(MoveResult::InvalidMove { reason: "x".into() }),
        Err(ViewError::NotInitialized)
    );
    assert_eq!(view.click(Position::new(1, 1)), None, "clicks are inert before init");
}

#[test]
fn test_duplicate_identity_in_initial_state_fails_loudly() {
    let mut state = two_kings();
    state.pieces.push(white_king().moved_to(Position::new(3, 3)));

    let mut view = GameView::default();
    assert_matches!(
        view.handle_initial_state(state),
        Err(ViewError::DuplicateIdentity { .. })
    );
    assert!(view.displayed().is_empty());
    assert_eq!(view.phase(), ViewPhase::AwaitingInitialState);
}

// ============================================================================
// Composer: move results
// ============================================================================

#[test]
fn test_new_state_reconciles_and_clears_message() {
    let mut view = started_view();
    view.handle_move_result(MoveResult::InvalidMove { reason: "nope".into() })
        .unwrap();
    assert_eq!(view.message(), Some("Invalid move: nope"));

    let moved = white_king().moved_to(Position::new(2, 1));
    view.handle_move_result(MoveResult::NewGameState {
        pieces: vec![moved.clone(), black_king()],
        current_player: PlayerColor::Black,
    })
    .unwrap();

    assert_eq!(view.message(), None);
    assert_eq!(view.current_player(), Some(PlayerColor::Black));
    assert_eq!(
        view.displayed().get(&PieceKey::Stable("1".into())),
        Some(&moved)
    );

    let ops = view.drain_render_ops();
    let node = view.displayed().node_of(&PieceKey::Stable("1".into())).unwrap();
    assert!(ops.contains(&RenderOp::Retarget {
        node,
        piece: moved,
        image_id: "king_white".into(),
        to: Vec2::new(0.0, 70.0),
    }));
    assert!(!ops.iter().any(|op| matches!(op, RenderOp::Spawn { .. } | RenderOp::Remove { .. })));
}

#[test]
fn test_invalid_move_leaves_pieces_and_player_untouched() {
    //! InvalidMove only changes the message line.
    let mut view = started_view();
    let before = snapshot(&view);

    view.handle_move_result(MoveResult::InvalidMove {
        reason: "No piece in (3,3)".into(),
    })
    .unwrap();

    assert_eq!(view.message(), Some("Invalid move: No piece in (3,3)"));
    assert_eq!(snapshot(&view), before);
    assert_eq!(view.current_player(), Some(PlayerColor::White));
    assert_eq!(
        view.drain_render_ops(),
        vec![RenderOp::Text {
            slot: TextSlot::Message,
            text: Some("Invalid move: No piece in (3,3)".into()),
        }]
    );
}

#[test]
fn test_capture_removes_node_and_readd_gets_fresh_node() {
    let mut view = started_view();
    let key = PieceKey::Stable("2".into());
    let old_node = view.displayed().node_of(&key).unwrap();

    view.handle_move_result(MoveResult::NewGameState {
        pieces: vec![white_king()],
        current_player: PlayerColor::Black,
    })
    .unwrap();
    assert_eq!(view.displayed().len(), 1);
    assert!(view
        .drain_render_ops()
        .contains(&RenderOp::Remove { node: old_node }));

    view.handle_move_result(MoveResult::NewGameState {
        pieces: vec![white_king(), black_king()],
        current_player: PlayerColor::White,
    })
    .unwrap();
    let new_node = view.displayed().node_of(&key).unwrap();
    assert_ne!(new_node, old_node, "identity re-used after removal is a fresh addition");
}

#[test]
fn test_game_over_is_absorbing() {
    let mut view = started_view();
    view.click(Position::new(1, 1));

    view.handle_move_result(MoveResult::GameOver {
        winner: PlayerColor::Black,
    })
    .unwrap();

    assert_eq!(view.phase(), ViewPhase::Finished { winner: PlayerColor::Black });
    assert_eq!(view.winner_text().as_deref(), Some("Black Won!!"));
    assert_eq!(view.selection(), Selection::Idle);
    let ops = view.drain_render_ops();
    assert!(ops.contains(&RenderOp::ShowWinner { winner: PlayerColor::Black }));
    assert!(ops.contains(&RenderOp::Highlight(None)));

    assert_eq!(view.click(Position::new(1, 1)), None);
    assert_eq!(view.click(Position::new(2, 1)), None);
    assert_eq!(view.castle(CastleSide::KingSide), None);
    assert_eq!(
        view.handle_move_result(MoveResult::InvalidMove { reason: "late".into() }),
        Err(ViewError::ResultAfterGameOver { winner: PlayerColor::Black })
    );
    assert!(view.is_finished());
}

#[test]
fn test_click_emits_highlight_instructions() {
    let mut view = started_view();

    assert_eq!(view.click(Position::new(1, 1)), None);
    assert_eq!(
        view.drain_render_ops(),
        vec![RenderOp::Highlight(Some(Position::new(1, 1)))]
    );

    assert_eq!(
        view.click(Position::new(2, 1)),
        Some(Move::relocate(Position::new(1, 1), Position::new(2, 1)))
    );
    assert_eq!(view.drain_render_ops(), vec![RenderOp::Highlight(None)]);
}

#[test]
fn test_castle_uses_current_player_and_drops_selection() {
    let mut view = started_view();
    view.click(Position::new(1, 1));

    assert_eq!(
        view.castle(CastleSide::QueenSide),
        Some(Move::Castle {
            side: CastleSide::QueenSide,
            player: PlayerColor::White
        })
    );
    assert_eq!(view.selection(), Selection::Idle);
}

// ============================================================================
// Session: engine ⇄ view dispatch
// ============================================================================

#[test]
fn test_session_two_kings_scenario() {
    //! White king at (1,1), black king at (6,4). Clicking (1,1) then (2,1)
    //! moves the white king: one update, nothing added or removed.
    let state = SimpleEngineState::new(
        BoardSize::new(4, 6),
        vec![white_king(), black_king()],
        PlayerColor::White,
    );
    let mut session =
        ChessSession::new(SimpleGameEngine::with_state(state), BoardGeometry::default()).unwrap();
    session.view_mut().drain_render_ops();

    assert_eq!(session.click(Position::new(1, 1)).unwrap(), None);
    let mv = session.click(Position::new(2, 1)).unwrap();
    assert_eq!(mv, Some(Move::relocate(Position::new(1, 1), Position::new(2, 1))));

    let view = session.view();
    assert_eq!(view.displayed().len(), 2);
    assert_eq!(
        view.displayed()
            .get(&PieceKey::Stable("1".into()))
            .map(|p| p.position),
        Some(Position::new(2, 1))
    );
    assert_eq!(view.current_player(), Some(PlayerColor::Black));

    let ops = session.view_mut().drain_render_ops();
    let retargets = ops.iter().filter(|op| matches!(op, RenderOp::Retarget { .. })).count();
    let spawns = ops.iter().filter(|op| matches!(op, RenderOp::Spawn { .. })).count();
    let removes = ops.iter().filter(|op| matches!(op, RenderOp::Remove { .. })).count();
    assert_eq!((retargets, spawns, removes), (1, 0, 0));
}

#[test]
fn test_session_invalid_move_scenario() {
    let engine = ScriptedEngine::new(
        two_kings(),
        vec![MoveResult::InvalidMove {
            reason: "No piece in (3,3)".into(),
        }],
    );
    let mut session = ChessSession::new(engine, BoardGeometry::default()).unwrap();
    let before = snapshot(session.view());

    session.click(Position::new(1, 1)).unwrap();
    session.click(Position::new(3, 3)).unwrap();

    assert_eq!(session.view().message(), Some("Invalid move: No piece in (3,3)"));
    assert_eq!(snapshot(session.view()), before);
    assert_eq!(session.view().selection(), Selection::Idle);
}

#[test]
fn test_session_notifies_listeners_before_engine() {
    let engine = ScriptedEngine::new(
        two_kings(),
        vec![MoveResult::InvalidMove { reason: "r".into() }],
    );
    let received = engine.received.clone();
    let listener = RecordingListener::default();
    let heard = listener.0.clone();
    let mut session = ChessSession::new(engine, BoardGeometry::default())
        .unwrap()
        .with_listener(listener);

    session.click(Position::new(1, 1)).unwrap();
    session.click(Position::new(1, 1)).unwrap();

    let expected = vec![Move::relocate(Position::new(1, 1), Position::new(1, 1))];
    assert_eq!(*heard.lock().unwrap(), expected);
    assert_eq!(*received.lock().unwrap(), expected);
}

#[test]
fn test_session_three_clicks_send_one_move() {
    let engine = ScriptedEngine::new(
        two_kings(),
        vec![MoveResult::InvalidMove { reason: "r".into() }],
    );
    let received = engine.received.clone();
    let mut session = ChessSession::new(engine, BoardGeometry::default()).unwrap();

    for position in [Position::new(1, 1), Position::new(2, 2), Position::new(3, 3)] {
        session.click(position).unwrap();
    }

    assert_eq!(received.lock().unwrap().len(), 1);
    assert_eq!(
        session.view().selection(),
        Selection::Selected(Position::new(3, 3))
    );
}

#[test]
fn test_session_game_over_stops_dispatch() {
    let engine = ScriptedEngine::new(
        two_kings(),
        vec![MoveResult::GameOver {
            winner: PlayerColor::White,
        }],
    );
    let received = engine.received.clone();
    let mut session = ChessSession::new(engine, BoardGeometry::default()).unwrap();

    session.click(Position::new(1, 1)).unwrap();
    session.click(Position::new(6, 4)).unwrap();
    assert!(session.view().is_finished());

    for position in [Position::new(2, 2), Position::new(3, 3)] {
        assert_eq!(session.click(position).unwrap(), None);
    }
    assert_eq!(received.lock().unwrap().len(), 1);
}

#[test]
fn test_session_surfaces_duplicate_identity_from_engine() {
    let engine = ScriptedEngine::new(
        two_kings(),
        vec![MoveResult::NewGameState {
            pieces: vec![white_king(), white_king()],
            current_player: PlayerColor::Black,
        }],
    );
    let mut session = ChessSession::new(engine, BoardGeometry::default()).unwrap();

    session.click(Position::new(1, 1)).unwrap();
    assert_matches!(
        session.click(Position::new(2, 1)),
        Err(ViewError::DuplicateIdentity { .. })
    );
    assert_eq!(session.view().displayed().len(), 2);
}

//! Dispatch protocol between the view and whoever drives the engine
//!
//! Moves flow out of the view through [`GameEventListener`]; engine output
//! flows back in through [`GameStateListener`]. [`crate::view::ChessSession`]
//! is the adapter that connects the two around a [`super::GameEngine`].

use super::types::{InitialState, Move, MoveResult};
use crate::view::ViewResult;
use tracing::info;

/// Receives every move the view emits
pub trait GameEventListener {
    fn handle_move(&mut self, mv: &Move);
}

/// Receives engine output
pub trait GameStateListener {
    fn handle_initial_state(&mut self, state: InitialState) -> ViewResult<()>;

    fn handle_move_result(&mut self, result: MoveResult) -> ViewResult<()>;
}

/// Logs each emitted move
#[derive(Debug, Default, Clone, Copy)]
pub struct MoveLogger;

impl GameEventListener for MoveLogger {
    fn handle_move(&mut self, mv: &Move) {
        info!("[MOVE] {}", mv);
    }
}

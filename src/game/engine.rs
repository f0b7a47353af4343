//! Engine port
//!
//! The view depends only on [`GameEngine`]. Rules, turn order and end-of-game
//! detection all live behind it.

use super::types::{InitialState, Move, MoveResult};
use crate::view::{ViewError, ViewResult};
use tracing::{debug, error};

/// Contract implemented by game engines
///
/// `init` is called exactly once, before any move. `apply_move` is called once
/// per completed two-click gesture and blocks until the engine has decided.
pub trait GameEngine {
    fn init(&mut self) -> InitialState;

    fn apply_move(&mut self, mv: &Move) -> MoveResult;
}

impl<E: GameEngine + ?Sized> GameEngine for Box<E> {
    fn init(&mut self) -> InitialState {
        (**self).init()
    }

    fn apply_move(&mut self, mv: &Move) -> MoveResult {
        (**self).apply_move(mv)
    }
}

/// Wraps an engine and enforces the call order of its contract
///
/// A second `init` or an `apply_move` before `init` is reported as a
/// [`ViewError`] instead of reaching the engine.
pub struct GuardedEngine<E> {
    inner: E,
    initialized: bool,
}

impl<E: GameEngine> GuardedEngine<E> {
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            initialized: false,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn init(&mut self) -> ViewResult<InitialState> {
        if self.initialized {
            error!("[ENGINE] init() called twice");
            return Err(ViewError::EngineInitializedTwice);
        }
        self.initialized = true;
        let state = self.inner.init();
        if !state.board_size.is_valid() {
            return Err(ViewError::InvalidBoardSize {
                columns: state.board_size.columns,
                rows: state.board_size.rows,
            });
        }
        debug!(
            "[ENGINE] Initial state: {}x{} board, {} pieces, {} to move",
            state.board_size.columns,
            state.board_size.rows,
            state.pieces.len(),
            state.current_player
        );
        Ok(state)
    }

    pub fn apply_move(&mut self, mv: &Move) -> ViewResult<MoveResult> {
        if !self.initialized {
            error!("[ENGINE] apply_move({}) before init()", mv);
            return Err(ViewError::EngineNotInitialized);
        }
        Ok(self.inner.apply_move(mv))
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }
}

//! Session adapter wiring an engine to a view
//!
//! [`ChessSession`] owns the engine (behind [`GuardedEngine`]), the
//! [`GameView`] and any number of [`GameEventListener`]s. It is the only place
//! where the two halves of the dispatch protocol meet:
//!
//! ```text
//! click ─▶ GameView::click ─▶ Move ─▶ listeners ─▶ engine.apply_move ─▶ MoveResult ─▶ GameView
//! ```
//!
//! `apply_move` blocks, so every click is fully processed before the next one.

use super::composer::GameView;
use super::error::ViewResult;
use super::render_ops::BoardGeometry;
use crate::game::{
    CastleSide, GameEngine, GameEventListener, GameStateListener, GuardedEngine, Move, Position,
};
use bevy::prelude::Resource;
use tracing::{debug, info};

type BoxedEngine = Box<dyn GameEngine + Send + Sync>;
type BoxedListener = Box<dyn GameEventListener + Send + Sync>;

#[derive(Resource)]
pub struct ChessSession {
    engine: GuardedEngine<BoxedEngine>,
    view: GameView,
    listeners: Vec<BoxedListener>,
}

impl ChessSession {
    /// Initialises `engine` exactly once and seeds a fresh view with its state
    pub fn new<E>(engine: E, geometry: BoardGeometry) -> ViewResult<Self>
    where
        E: GameEngine + Send + Sync + 'static,
    {
        let mut engine = GuardedEngine::new(Box::new(engine) as BoxedEngine);
        let mut view = GameView::new(geometry);
        view.handle_initial_state(engine.init()?)?;
        info!("[SESSION] Engine initialised");

        Ok(Self {
            engine,
            view,
            listeners: Vec::new(),
        })
    }

    pub fn with_listener<L>(mut self, listener: L) -> Self
    where
        L: GameEventListener + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
        self
    }

    pub fn add_listener<L>(&mut self, listener: L)
    where
        L: GameEventListener + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn view(&self) -> &GameView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut GameView {
        &mut self.view
    }

    /// Feeds a board click; returns the move dispatched because of it, if any
    pub fn click(&mut self, position: Position) -> ViewResult<Option<Move>> {
        let Some(mv) = self.view.click(position) else {
            return Ok(None);
        };
        self.dispatch(&mv)?;
        Ok(Some(mv))
    }

    /// Requests castling for the player to move
    pub fn castle(&mut self, side: CastleSide) -> ViewResult<Option<Move>> {
        let Some(mv) = self.view.castle(side) else {
            return Ok(None);
        };
        self.dispatch(&mv)?;
        Ok(Some(mv))
    }

    fn dispatch(&mut self, mv: &Move) -> ViewResult<()> {
        for listener in self.listeners.iter_mut() {
            listener.handle_move(mv);
        }
        let result = self.engine.apply_move(mv)?;
        debug!("[SESSION] {} -> {:?}", mv, result);
        self.view.handle_move_result(result)
    }
}

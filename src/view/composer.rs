//! View composer
//!
//! [`GameView`] is the single stateful object of the view. It owns the
//! displayed piece set, the current-player indicator, the last error message
//! and the two-click [`Selection`], and turns engine output into
//! [`RenderOp`]s for whatever render layer drains its outbox.
//!
//! # Phases
//!
//! ```text
//! AwaitingInitialState → Playing ⟲ (NewGameState / InvalidMove)
//!                        Playing → Finished(winner)   (GameOver, absorbing)
//! ```
//!
//! # Per-result behaviour
//!
//! - `NewGameState`: reconcile pieces, set current player, clear the message
//! - `InvalidMove`: message becomes `"Invalid move: {reason}"`, nothing else
//!   changes
//! - `GameOver`: board replaced by the winner display, clicks become inert

use super::error::{ViewError, ViewResult};
use super::reconcile::{reconcile, ReconcileOps};
use super::render_ops::{BoardGeometry, NodeId, RenderOp, TextSlot};
use super::selection::Selection;
use crate::game::{
    BoardSize, CastleSide, ChessPiece, GameStateListener, InitialState, Move, MoveResult, PieceKey,
    PlayerColor, Position,
};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    AwaitingInitialState,
    Playing,
    Finished { winner: PlayerColor },
}

/// Pieces currently on display and the render node bound to each identity
#[derive(Debug, Clone, Default)]
pub struct DisplayedPieces {
    pieces: BTreeMap<PieceKey, ChessPiece>,
    nodes: BTreeMap<PieceKey, NodeId>,
}

impl DisplayedPieces {
    pub fn pieces(&self) -> &BTreeMap<PieceKey, ChessPiece> {
        &self.pieces
    }

    pub fn node_of(&self, key: &PieceKey) -> Option<NodeId> {
        self.nodes.get(key).copied()
    }

    pub fn get(&self, key: &PieceKey) -> Option<&ChessPiece> {
        self.pieces.get(key)
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChessPiece> {
        self.pieces.values()
    }
}

/// State container of the chess view
#[derive(Debug, Clone)]
pub struct GameView {
    geometry: BoardGeometry,
    board_size: Option<BoardSize>,
    displayed: DisplayedPieces,
    current_player: Option<PlayerColor>,
    message: Option<String>,
    phase: ViewPhase,
    selection: Selection,
    next_node: u64,
    outbox: Vec<RenderOp>,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(BoardGeometry::default())
    }
}

impl GameView {
    pub fn new(geometry: BoardGeometry) -> Self {
        Self {
            geometry,
            board_size: None,
            displayed: DisplayedPieces::default(),
            current_player: None,
            message: None,
            phase: ViewPhase::AwaitingInitialState,
            selection: Selection::Idle,
            next_node: 0,
            outbox: Vec::new(),
        }
    }

    // === Read access ===

    pub fn geometry(&self) -> BoardGeometry {
        self.geometry
    }

    pub fn board_size(&self) -> Option<BoardSize> {
        self.board_size
    }

    pub fn phase(&self) -> ViewPhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, ViewPhase::Finished { .. })
    }

    pub fn displayed(&self) -> &DisplayedPieces {
        &self.displayed
    }

    pub fn current_player(&self) -> Option<PlayerColor> {
        self.current_player
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn current_player_text(&self) -> Option<String> {
        self.current_player
            .map(|player| format!("Current player: {}", player.display_name()))
    }

    pub fn winner_text(&self) -> Option<String> {
        match self.phase {
            ViewPhase::Finished { winner } => Some(format!("{} Won!!", winner.display_name())),
            _ => None,
        }
    }

    /// Takes every render instruction emitted since the last drain
    pub fn drain_render_ops(&mut self) -> Vec<RenderOp> {
        std::mem::take(&mut self.outbox)
    }

    pub fn pending_render_ops(&self) -> &[RenderOp] {
        &self.outbox
    }

    // === Input ===

    /// Feeds a board click into the selection machine
    ///
    /// Returns the move completed by this click. Clicks before the initial
    /// state or after the game finished are ignored.
    pub fn click(&mut self, position: Position) -> Option<Move> {
        if self.phase != ViewPhase::Playing {
            debug!("[VIEW] Ignoring click at {} in phase {:?}", position, self.phase);
            return None;
        }

        let mv = self.selection.click(position);
        let highlighted = self.selection.selected();
        self.outbox.push(RenderOp::Highlight(highlighted));
        if let Some(mv) = &mv {
            debug!("[VIEW] Move requested: {}", mv);
        }
        mv
    }

    /// Requests castling for the current player
    pub fn castle(&mut self, side: CastleSide) -> Option<Move> {
        if self.phase != ViewPhase::Playing {
            return None;
        }
        let player = self.current_player?;
        if self.selection.is_selected() {
            self.selection.reset();
            self.outbox.push(RenderOp::Highlight(None));
        }
        Some(Move::Castle { side, player })
    }

    // === Engine output ===

    fn allocate_node(&mut self) -> NodeId {
        self.next_node += 1;
        NodeId(self.next_node)
    }

    /// Reconciles the displayed set with `pieces` and emits node instructions
    ///
    /// On a duplicate identity the displayed set is left untouched.
    fn set_pieces(&mut self, pieces: &[ChessPiece]) -> ViewResult<ReconcileOps> {
        let ops = reconcile(&self.displayed.pieces, pieces)?;

        for addition in &ops.additions {
            let node = self.allocate_node();
            let at = self.geometry.origin_of(addition.piece.position);
            self.displayed.pieces.insert(addition.key.clone(), addition.piece.clone());
            self.displayed.nodes.insert(addition.key.clone(), node);
            self.outbox.push(RenderOp::Spawn {
                node,
                piece: addition.piece.clone(),
                image_id: addition.piece.image_id(),
                at,
            });
        }

        for update in &ops.updates {
            self.displayed.pieces.insert(update.key.clone(), update.current.clone());
            let Some(node) = self.displayed.nodes.get(&update.key).copied() else {
                // Unreachable while pieces and nodes are updated together.
                warn!("[VIEW] No node for updated piece {}", update.key);
                continue;
            };
            let to = self.geometry.origin_of(update.current.position);
            self.outbox.push(RenderOp::Retarget {
                node,
                piece: update.current.clone(),
                image_id: update.current.image_id(),
                to,
            });
        }

        for removal in &ops.removals {
            self.displayed.pieces.remove(&removal.key);
            if let Some(node) = self.displayed.nodes.remove(&removal.key) {
                self.outbox.push(RenderOp::Remove { node });
            }
        }

        Ok(ops)
    }

    fn set_current_player(&mut self, player: PlayerColor) {
        self.current_player = Some(player);
        let text = self.current_player_text();
        self.outbox.push(RenderOp::Text {
            slot: TextSlot::CurrentPlayer,
            text,
        });
    }

    fn set_message(&mut self, message: Option<String>) {
        self.message = message.clone();
        self.outbox.push(RenderOp::Text {
            slot: TextSlot::Message,
            text: message,
        });
    }

    fn reset_selection(&mut self) {
        if self.selection.is_selected() {
            self.selection.reset();
            self.outbox.push(RenderOp::Highlight(None));
        }
    }

    fn ensure_playing(&self) -> ViewResult<()> {
        match self.phase {
            ViewPhase::Playing => Ok(()),
            ViewPhase::AwaitingInitialState => Err(ViewError::NotInitialized),
            ViewPhase::Finished { winner } => Err(ViewError::ResultAfterGameOver { winner }),
        }
    }
}

impl GameStateListener for GameView {
    fn handle_initial_state(&mut self, state: InitialState) -> ViewResult<()> {
        if self.phase != ViewPhase::AwaitingInitialState {
            return Err(ViewError::AlreadyInitialized);
        }
        if !state.board_size.is_valid() {
            return Err(ViewError::InvalidBoardSize {
                columns: state.board_size.columns,
                rows: state.board_size.rows,
            });
        }

        self.set_pieces(&state.pieces)?;
        self.board_size = Some(state.board_size);
        self.set_current_player(state.current_player);
        self.set_message(None);
        self.phase = ViewPhase::Playing;

        info!(
            "[VIEW] Game started on {}x{} board with {} pieces",
            state.board_size.columns,
            state.board_size.rows,
            self.displayed.len()
        );
        Ok(())
    }

    fn handle_move_result(&mut self, result: MoveResult) -> ViewResult<()> {
        self.ensure_playing()?;

        match result {
            MoveResult::NewGameState {
                pieces,
                current_player,
            } => {
                self.set_pieces(&pieces)?;
                self.set_current_player(current_player);
                self.set_message(None);
            }
            MoveResult::InvalidMove { reason } => {
                debug!("[VIEW] Invalid move: {}", reason);
                self.set_message(Some(format!("Invalid move: {}", reason)));
            }
            MoveResult::GameOver { winner } => {
                info!("[VIEW] Game over, {} won", winner);
                self.reset_selection();
                self.phase = ViewPhase::Finished { winner };
                let text = self.winner_text();
                self.outbox.push(RenderOp::ShowWinner { winner });
                self.outbox.push(RenderOp::Text {
                    slot: TextSlot::Winner,
                    text,
                });
            }
        }
        Ok(())
    }
}

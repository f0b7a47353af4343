//! Demo engine used by the binary and by tests
//!
//! Not a chess rules engine. Any piece may move to any square that is empty or
//! holds an opponent piece; the mover's turn then passes. A piece reaching the
//! far row becomes a queen and the last piece standing wins.
//!
//! The whole engine state is an explicit [`SimpleEngineState`] value and
//! [`SimpleEngineState::apply`] is a pure function of it.

use super::engine::GameEngine;
use super::types::{BoardSize, ChessPiece, InitialState, Move, MoveResult, PlayerColor, Position};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleEngineState {
    pub board_size: BoardSize,
    pub pieces: Vec<ChessPiece>,
    pub current_player: PlayerColor,
}

impl Default for SimpleEngineState {
    /// 4 columns by 6 rows, rook/king/queen/rook on the first and last rows
    fn default() -> Self {
        use PlayerColor::{Black, White};

        const BACK_ROW: [&str; 4] = ["rook", "king", "queen", "rook"];

        let white = BACK_ROW
            .iter()
            .enumerate()
            .map(|(i, kind)| ChessPiece::new((i + 1).to_string(), White, Position::new(1, i as u32 + 1), *kind));
        let black = BACK_ROW
            .iter()
            .enumerate()
            .map(|(i, kind)| ChessPiece::new((i + 5).to_string(), Black, Position::new(6, i as u32 + 1), *kind));

        Self {
            board_size: BoardSize::new(4, 6),
            pieces: white.chain(black).collect(),
            current_player: White,
        }
    }
}

impl SimpleEngineState {
    pub fn new(board_size: BoardSize, pieces: Vec<ChessPiece>, current_player: PlayerColor) -> Self {
        Self {
            board_size,
            pieces,
            current_player,
        }
    }

    pub fn piece_at(&self, position: Position) -> Option<&ChessPiece> {
        self.pieces.iter().find(|p| p.position == position)
    }

    /// Row on which pieces of `color` are promoted
    fn promotion_row(&self, color: PlayerColor) -> u32 {
        match color {
            PlayerColor::White => self.board_size.rows,
            PlayerColor::Black => 1,
        }
    }

    /// Applies `mv`, returning the next state and the engine's answer
    ///
    /// Rejected moves return an unchanged copy of the state.
    pub fn apply(&self, mv: &Move) -> (Self, MoveResult) {
        let (from, to) = match *mv {
            Move::Relocate { from, to } => (from, to),
            Move::Castle { .. } => {
                return (self.clone(), invalid("Castling is not supported"));
            }
        };

        let Some(moving) = self.piece_at(from).cloned() else {
            return (
                self.clone(),
                invalid(format!("No piece in ({}, {})", from.row, from.column)),
            );
        };
        if moving.color != self.current_player {
            return (self.clone(), invalid("Piece does not belong to current player"));
        }
        let target = self.piece_at(to).cloned();
        if matches!(&target, Some(t) if t.color == self.current_player) {
            return (
                self.clone(),
                invalid(format!("There is a piece in ({}, {})", to.row, to.column)),
            );
        }

        let mut pieces: Vec<ChessPiece> = self
            .pieces
            .iter()
            .filter(|p| **p != moving && Some(*p) != target.as_ref())
            .cloned()
            .collect();
        pieces.push(moving.moved_to(to));

        let mut next = Self {
            board_size: self.board_size,
            pieces,
            current_player: self.current_player.opponent(),
        };

        if next.pieces.len() == 1 {
            let winner = next.pieces[0].color;
            debug!("[SIMPLE_ENGINE] {} wins", winner);
            return (next, MoveResult::GameOver { winner });
        }

        next.pieces = next
            .pieces
            .iter()
            .map(|p| {
                if p.position.row == next.promotion_row(p.color) {
                    p.promoted_to("queen")
                } else {
                    p.clone()
                }
            })
            .collect();

        let result = MoveResult::NewGameState {
            pieces: next.pieces.clone(),
            current_player: next.current_player,
        };
        (next, result)
    }
}

fn invalid(reason: impl Into<String>) -> MoveResult {
    MoveResult::InvalidMove {
        reason: reason.into(),
    }
}

/// [`GameEngine`] backed by a [`SimpleEngineState`]
#[derive(Debug, Clone, Default)]
pub struct SimpleGameEngine {
    state: SimpleEngineState,
}

impl SimpleGameEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: SimpleEngineState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &SimpleEngineState {
        &self.state
    }
}

impl GameEngine for SimpleGameEngine {
    fn init(&mut self) -> InitialState {
        InitialState {
            board_size: self.state.board_size,
            pieces: self.state.pieces.clone(),
            current_player: self.state.current_player,
        }
    }

    fn apply_move(&mut self, mv: &Move) -> MoveResult {
        let (next, result) = self.state.apply(mv);
        self.state = next;
        result
    }
}

//! Declarative instructions emitted by the composer for the render layer
//!
//! The composer never touches a widget. It appends [`RenderOp`]s to an outbox
//! and whichever render layer is attached (the Bevy one in
//! [`crate::rendering`], or a test) drains and realises them.
//!
//! Piece nodes are addressed by [`NodeId`], not by piece identity: a removed
//! piece keeps its node until the removal transition ends, while a piece
//! re-using that identity gets a fresh node.

use crate::game::{BoardSize, ChessPiece, PlayerColor, Position};
use bevy::math::Vec2;

/// Handle of one piece node in the render tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

/// Text regions bound to view state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextSlot {
    /// Header, "Current player: White"
    CurrentPlayer,
    /// Footer, last error message or empty
    Message,
    /// Terminal display, "White Won!!"
    Winner,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderOp {
    /// Create a piece node at rest
    Spawn {
        node: NodeId,
        piece: ChessPiece,
        image_id: String,
        at: Vec2,
    },
    /// Move and/or morph an existing node; the image is swapped on arrival
    Retarget {
        node: NodeId,
        piece: ChessPiece,
        image_id: String,
        to: Vec2,
    },
    /// Play the removal transition, then purge the node
    Remove { node: NodeId },
    /// Square highlighted as the pending selection
    Highlight(Option<Position>),
    Text { slot: TextSlot, text: Option<String> },
    /// Replace the interactive board with the terminal winner display
    ShowWinner { winner: PlayerColor },
}

/// Pixel layout of the board, origin at the top-left corner of square (1, 1)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardGeometry {
    pub square_size: f32,
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self { square_size: 70.0 }
    }
}

impl BoardGeometry {
    pub fn new(square_size: f32) -> Self {
        Self { square_size }
    }

    /// Top-left pixel of the square at `position`
    pub fn origin_of(&self, position: Position) -> Vec2 {
        Vec2::new(
            self.square_size * (position.column as f32 - 1.0),
            self.square_size * (position.row as f32 - 1.0),
        )
    }

    /// Pixel size of the whole board
    pub fn extent(&self, board_size: BoardSize) -> Vec2 {
        Vec2::new(
            self.square_size * board_size.columns as f32,
            self.square_size * board_size.rows as f32,
        )
    }
}

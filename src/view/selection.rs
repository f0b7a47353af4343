//! Two-click move input
//!
//! The first click selects a square, the second emits a move from the selected
//! square to the clicked one and always returns to [`Selection::Idle`]. There is
//! no deselect click and no legal-move filtering: clicking the selected square
//! again emits a move onto itself, which the engine rejects.

use crate::game::{Move, Position};

/// Pending "from" square awaiting its pairing click
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Idle,
    Selected(Position),
}

impl Selection {
    /// Feeds one click into the state machine
    ///
    /// Returns the move completed by this click, if any.
    pub fn click(&mut self, position: Position) -> Option<Move> {
        match *self {
            Selection::Idle => {
                *self = Selection::Selected(position);
                None
            }
            Selection::Selected(from) => {
                *self = Selection::Idle;
                Some(Move::relocate(from, position))
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Selection::Idle;
    }

    pub fn selected(&self) -> Option<Position> {
        match self {
            Selection::Idle => None,
            Selection::Selected(position) => Some(*position),
        }
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, Selection::Selected(_))
    }
}

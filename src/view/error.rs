//! Error types for the view layer
//!
//! Everything the engine reports through [`MoveResult`](crate::game::MoveResult)
//! is handled inside the view. The variants here are engine contract
//! violations and misuse of the view protocol: programming errors that must
//! reach the caller instead of being swallowed.

use crate::game::{PieceKey, PlayerColor};

/// Errors raised by the engine guard, the reconciler and the composer
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    /// `init()` was called a second time
    #[error("Engine contract violated: init() called more than once")]
    EngineInitializedTwice,

    /// `apply_move()` was called before `init()`
    #[error("Engine contract violated: apply_move() called before init()")]
    EngineNotInitialized,

    /// Two pieces in one snapshot share an identity
    #[error("Engine contract violated: duplicate piece identity {key}")]
    DuplicateIdentity { key: PieceKey },

    /// The engine reported a board with a zero dimension
    #[error("Engine contract violated: invalid board size {columns}x{rows}")]
    InvalidBoardSize { columns: u32, rows: u32 },

    /// The view was handed a second initial state
    #[error("View already received its initial state")]
    AlreadyInitialized,

    /// A move result arrived before the initial state
    #[error("View received a move result before the initial state")]
    NotInitialized,

    /// A move result arrived after the game ended
    #[error("View received a move result after the game finished ({winner} won)")]
    ResultAfterGameOver { winner: PlayerColor },
}

/// Result type alias for view operations
pub type ViewResult<T> = Result<T, ViewError>;

//! Domain value types exchanged between the view and the game engine
//!
//! Every type here is an immutable value produced by the engine (or, for
//! [`Move`], by the view). The view never mutates a [`ChessPiece`]; a moved or
//! promoted piece arrives as a new value carrying the same identity.
//!
//! # Coordinates
//!
//! Positions are 1-based `(row, column)` pairs. Row 1 is drawn at the top of
//! the board, column 1 on the left.
//!
//! # Identity
//!
//! Pieces are matched across snapshots by [`PieceKey`]: the engine-assigned
//! id when present, otherwise the full structural value of the piece.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Board dimensions, fixed for the lifetime of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardSize {
    pub columns: u32,
    pub rows: u32,
}

impl BoardSize {
    pub fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    /// Both dimensions must be positive
    pub fn is_valid(&self) -> bool {
        self.columns > 0 && self.rows > 0
    }

    /// Whether `position` lies on this board
    pub fn contains(&self, position: Position) -> bool {
        (1..=self.rows).contains(&position.row) && (1..=self.columns).contains(&position.column)
    }

    /// All board positions, column-major (column 1 rows 1..=n, then column 2, ...)
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (1..=self.columns)
            .flat_map(move |column| (1..=self.rows).map(move |row| Position::new(row, column)))
    }
}

/// A 1-based board coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: u32,
    pub column: u32,
}

impl Position {
    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// Checkerboard parity, used only to colour squares
    pub fn is_even(&self) -> bool {
        (self.row + self.column) % 2 == 0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Error returned when a `row,column` string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid position '{input}': expected 'row,column' with positive integers")]
pub struct ParsePositionError {
    pub input: String,
}

impl FromStr for Position {
    type Err = ParsePositionError;

    /// Parses `"row,column"`, e.g. `"2,1"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePositionError {
            input: s.to_string(),
        };
        let (row, column) = s.trim().split_once(',').ok_or_else(err)?;
        let row: u32 = row.trim().parse().map_err(|_| err())?;
        let column: u32 = column.trim().parse().map_err(|_| err())?;
        if row == 0 || column == 0 {
            return Err(err());
        }
        Ok(Position::new(row, column))
    }
}

/// The two sides of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerColor {
    White,
    Black,
}

impl PlayerColor {
    /// Human-readable label shown in status text
    pub fn display_name(self) -> &'static str {
        match self {
            PlayerColor::White => "White",
            PlayerColor::Black => "Black",
        }
    }

    /// Lowercase name used to build image ids (`"king_white"`)
    pub fn asset_name(self) -> &'static str {
        match self {
            PlayerColor::White => "white",
            PlayerColor::Black => "black",
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            PlayerColor::White => PlayerColor::Black,
            PlayerColor::Black => PlayerColor::White,
        }
    }
}

impl fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A piece as reported by the engine
///
/// `piece_id` is the logical kind ("king", "queen", "rook", ...). It is kept
/// as a string because the engine, not the view, decides which kinds exist.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChessPiece {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub color: PlayerColor,
    pub position: Position,
    pub piece_id: String,
}

impl ChessPiece {
    /// A piece with a stable engine-assigned identity
    pub fn new(
        id: impl Into<String>,
        color: PlayerColor,
        position: Position,
        piece_id: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            color,
            position,
            piece_id: piece_id.into(),
        }
    }

    /// A piece without an id; its identity is its structural value
    pub fn anonymous(color: PlayerColor, position: Position, piece_id: impl Into<String>) -> Self {
        Self {
            id: None,
            color,
            position,
            piece_id: piece_id.into(),
        }
    }

    /// Key used to match this piece across snapshots
    pub fn key(&self) -> PieceKey {
        match &self.id {
            Some(id) => PieceKey::Stable(id.clone()),
            None => PieceKey::Structural {
                color: self.color,
                position: self.position,
                piece_id: self.piece_id.clone(),
            },
        }
    }

    /// Image asset id, e.g. `"queen_black"`
    pub fn image_id(&self) -> String {
        format!("{}_{}", self.piece_id, self.color.asset_name())
    }

    /// Same piece, new square
    pub fn moved_to(&self, position: Position) -> Self {
        Self {
            position,
            ..self.clone()
        }
    }

    /// Same piece, new kind (promotion)
    pub fn promoted_to(&self, piece_id: impl Into<String>) -> Self {
        Self {
            piece_id: piece_id.into(),
            ..self.clone()
        }
    }
}

/// Identity of a displayed piece
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PieceKey {
    /// Engine-assigned id
    Stable(String),
    /// Fallback when the engine does not assign ids
    Structural {
        color: PlayerColor,
        position: Position,
        piece_id: String,
    },
}

impl fmt::Display for PieceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceKey::Stable(id) => write!(f, "#{}", id),
            PieceKey::Structural {
                color,
                position,
                piece_id,
            } => write!(f, "{} {} at {}", color, piece_id, position),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

/// A move request sent to the engine
///
/// The view builds these from user input and never validates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    Relocate { from: Position, to: Position },
    Castle { side: CastleSide, player: PlayerColor },
}

impl Move {
    pub fn relocate(from: Position, to: Position) -> Self {
        Move::Relocate { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Relocate { from, to } => write!(f, "from {} to {}", from, to),
            Move::Castle { side, player } => write!(f, "{} castles {:?}", player, side),
        }
    }
}

/// Engine reply to a single `apply_move` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveResult {
    NewGameState {
        pieces: Vec<ChessPiece>,
        current_player: PlayerColor,
    },
    InvalidMove {
        reason: String,
    },
    GameOver {
        winner: PlayerColor,
    },
}

/// Produced once by `init`, before any move
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitialState {
    pub board_size: BoardSize,
    pub pieces: Vec<ChessPiece>,
    pub current_player: PlayerColor,
}

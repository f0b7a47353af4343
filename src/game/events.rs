//! Messages flowing from input systems into the session

use super::types::{CastleSide, Position};
use bevy::prelude::*;

/// A board square (or the piece standing on it) was clicked
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareClicked(pub Position);

/// Castling requested for the player to move
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastleRequested(pub CastleSide);

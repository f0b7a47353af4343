use crate::game::events::{CastleRequested, SquareClicked};
use crate::game::types::CastleSide;
use crate::rendering::board::BoardSquare;
use crate::rendering::pieces::PieceNode;
use bevy::picking::events::{Click, Pointer};
use bevy::picking::pointer::PointerButton;
use bevy::prelude::*;

fn is_primary(button: PointerButton) -> bool {
    matches!(button, PointerButton::Primary)
}

// === Observers ===

/// Handle click on an empty part of a square
pub fn on_square_click(
    click: On<Pointer<Click>>,
    squares: Query<&BoardSquare>,
    mut clicks: MessageWriter<SquareClicked>,
) {
    if !is_primary(click.event.button) {
        return;
    }
    let Ok(square) = squares.get(click.entity) else {
        warn!("[INPUT] Clicked entity {:?} has no BoardSquare", click.entity);
        return;
    };
    debug!("[INPUT] Square clicked at {}", square.position);
    clicks.write(SquareClicked(square.position));
}

/// Handle click on a piece; selects the square it stands on
pub fn on_piece_click(
    click: On<Pointer<Click>>,
    pieces: Query<&PieceNode>,
    mut clicks: MessageWriter<SquareClicked>,
) {
    if !is_primary(click.event.button) {
        return;
    }
    let Ok(piece) = pieces.get(click.entity) else {
        warn!("[INPUT] Clicked entity {:?} has no PieceNode", click.entity);
        return;
    };
    debug!("[INPUT] Piece clicked at {}", piece.position);
    clicks.write(SquareClicked(piece.position));
}

// === Keyboard ===

/// `K` castles king side, `Q` queen side
pub fn castle_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut castles: MessageWriter<CastleRequested>,
) {
    if keyboard.just_pressed(KeyCode::KeyK) {
        castles.write(CastleRequested(CastleSide::KingSide));
    }
    if keyboard.just_pressed(KeyCode::KeyQ) {
        castles.write(CastleRequested(CastleSide::QueenSide));
    }
}

//! Session dispatch
//!
//! A [`ViewError`] means the engine or the view broke its contract. Nothing
//! sensible can be drawn after that, so the error is logged and the app asked
//! to exit with a failure code.

use crate::game::events::{CastleRequested, SquareClicked};
use crate::view::{ChessSession, ViewError};
use bevy::prelude::*;

fn fail(err: &ViewError, exit: &mut MessageWriter<AppExit>) {
    error!("[DISPATCH] {}", err);
    exit.write(AppExit::error());
}

pub fn dispatch_clicks(
    mut clicks: MessageReader<SquareClicked>,
    mut session: ResMut<ChessSession>,
    mut exit: MessageWriter<AppExit>,
) {
    for SquareClicked(position) in clicks.read() {
        if let Err(err) = session.click(*position) {
            fail(&err, &mut exit);
            return;
        }
    }
}

pub fn dispatch_castles(
    mut castles: MessageReader<CastleRequested>,
    mut session: ResMut<ChessSession>,
    mut exit: MessageWriter<AppExit>,
) {
    for CastleRequested(side) in castles.read() {
        if let Err(err) = session.castle(*side) {
            fail(&err, &mut exit);
            return;
        }
    }
}

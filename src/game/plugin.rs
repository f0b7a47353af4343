//! Session plugin - routes input messages through the [`ChessSession`]
//!
//! Registers the input messages and the frame ordering in [`ViewSystems`].
//! The dispatch systems only run once a [`ChessSession`] resource has been
//! inserted, which lets the binary (or a test) decide which engine to use.
//!
//! This plugin has no rendering dependency and works under `MinimalPlugins`.
//! Keyboard shortcuts are added only when `ButtonInput<KeyCode>` exists.

use super::events::{CastleRequested, SquareClicked};
use super::system_sets::ViewSystems;
use super::systems::*;
use crate::view::ChessSession;
use bevy::prelude::*;

pub struct ChessSessionPlugin;

impl Plugin for ChessSessionPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<SquareClicked>()
            .add_message::<CastleRequested>();

        // Input → Dispatch → Visual
        app.configure_sets(
            Update,
            (ViewSystems::Input, ViewSystems::Dispatch, ViewSystems::Visual).chain(),
        );

        app.add_systems(
            Update,
            castle_shortcuts
                .in_set(ViewSystems::Input)
                .run_if(resource_exists::<ButtonInput<KeyCode>>),
        );

        app.add_systems(
            Update,
            (dispatch_clicks, dispatch_castles)
                .chain()
                .in_set(ViewSystems::Dispatch)
                .run_if(resource_exists::<ChessSession>),
        );
    }
}

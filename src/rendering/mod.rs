//! Rendering module - 2D board and piece sprites driven by render ops
//!
//! # Architecture
//!
//! - `board` - Square grid, frame, highlight colours and pixel → world mapping
//! - `pieces` - Piece entities and [`pieces::apply_render_ops`]
//! - `animation` - Per-frame transition driving
//! - `images` - Asset-server backed image resolver
//!
//! Nothing here decides game state. Every change on screen starts as a
//! [`crate::view::RenderOp`] drained from the session.

pub mod animation;
pub mod board;
pub mod images;
pub mod pieces;

use crate::core::ViewConfig;
use crate::game::ViewSystems;
use crate::ui::StatusText;
use crate::view::{ChessSession, Transitions};
use animation::drive_transitions;
use bevy::prelude::*;
use bevy::sprite::{SpritePickingMode, SpritePickingSettings};
use board::{refresh_square_colors, spawn_board, BoardHighlight, BoardLayout};
use images::{setup_piece_images, PieceImages};
use pieces::{apply_render_ops, PieceNodes};

pub struct ChessRenderPlugin;

impl Plugin for ChessRenderPlugin {
    fn build(&self, app: &mut App) {
        let timing = app
            .world()
            .get_resource::<ViewConfig>()
            .map(ViewConfig::timing)
            .unwrap_or_default();

        app.insert_resource(Transitions::new(timing))
            .init_resource::<PieceNodes>()
            .init_resource::<BoardHighlight>()
            .init_resource::<StatusText>()
            // Squares are plain colour sprites; pick on their bounds.
            .insert_resource(SpritePickingSettings {
                require_markers: false,
                picking_mode: SpritePickingMode::BoundingBox,
            });

        app.add_systems(
            Startup,
            (
                setup_camera,
                setup_piece_images,
                spawn_board.run_if(resource_exists::<ChessSession>),
            ),
        );

        app.add_systems(
            Update,
            (
                apply_render_ops,
                drive_transitions,
                refresh_square_colors.run_if(resource_changed::<BoardHighlight>),
            )
                .chain()
                .in_set(ViewSystems::Visual)
                .run_if(resource_exists::<BoardLayout>)
                .run_if(resource_exists::<PieceImages>)
                .run_if(resource_exists::<ChessSession>),
        );
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((Name::new("Board camera"), Camera2d));
}

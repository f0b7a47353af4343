//! Piece nodes and render-op application
//!
//! [`apply_render_ops`] drains the session's outbox once per frame and turns
//! each [`RenderOp`] into ECS changes:
//!
//! | Op          | Effect                                                   |
//! |-------------|----------------------------------------------------------|
//! | `Spawn`     | sprite entity under the board root, placed at rest       |
//! | `Retarget`  | transition towards the new square, image swapped later   |
//! | `Remove`    | wobble transition, node stops receiving clicks           |
//! | `Highlight` | [`BoardHighlight`] updated                               |
//! | `Text`      | [`StatusText`] slot updated                              |
//! | `ShowWinner`| board hidden, winner text takes over                     |

use super::board::{BoardHighlight, BoardLayout, BoardRoot};
use super::images::PieceImages;
use crate::game::systems::input::on_piece_click;
use crate::game::Position;
use crate::ui::StatusText;
use crate::view::{ChessSession, NodeId, RenderOp, Transitions};
use bevy::picking::Pickable;
use bevy::prelude::*;
use std::collections::BTreeMap;

/// Z layer of piece sprites, above the squares
pub const PIECE_Z: f32 = 1.0;

/// A rendered piece
///
/// `position` is the square the piece belongs to, updated as soon as a move
/// is accepted so clicks during the animation target the new square.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceNode {
    pub node: NodeId,
    pub position: Position,
}

/// Entities backing each live node
#[derive(Resource, Debug, Default)]
pub struct PieceNodes(pub BTreeMap<NodeId, Entity>);

impl PieceNodes {
    pub fn get(&self, node: NodeId) -> Option<Entity> {
        self.0.get(&node).copied()
    }
}

#[allow(clippy::too_many_arguments)]
pub fn apply_render_ops(
    mut commands: Commands,
    mut session: ResMut<ChessSession>,
    layout: Res<BoardLayout>,
    mut images: ResMut<PieceImages>,
    mut transitions: ResMut<Transitions>,
    mut nodes: ResMut<PieceNodes>,
    mut highlight: ResMut<BoardHighlight>,
    mut status: ResMut<StatusText>,
    mut pieces: Query<&mut PieceNode>,
    mut board: Query<(Entity, &mut Visibility), With<BoardRoot>>,
) {
    if session.view().pending_render_ops().is_empty() {
        return;
    }
    let ops = session.view_mut().drain_render_ops();
    let square = layout.geometry.square_size;
    let Ok((root, mut board_visibility)) = board.single_mut() else {
        warn!("[PIECES] No board root, dropping {} render ops", ops.len());
        return;
    };

    for op in ops {
        match op {
            RenderOp::Spawn {
                node,
                piece,
                image_id,
                at,
            } => {
                let center = layout.node_center(at);
                let entity = commands
                    .spawn((
                        Name::new(format!("Piece {}", piece.key())),
                        PieceNode {
                            node,
                            position: piece.position,
                        },
                        Sprite {
                            image: images.square(&image_id, square),
                            custom_size: Some(Vec2::splat(square)),
                            ..default()
                        },
                        Transform::from_xyz(center.x, center.y, PIECE_Z),
                        ChildOf(root),
                    ))
                    .observe(on_piece_click)
                    .id();
                nodes.0.insert(node, entity);
                transitions.place(node, at);
            }
            RenderOp::Retarget {
                node,
                piece,
                image_id,
                to,
            } => {
                transitions.move_to(node, to, Some(image_id));
                let Some(entity) = nodes.get(node) else {
                    continue;
                };
                if let Ok(mut piece_node) = pieces.get_mut(entity) {
                    piece_node.position = piece.position;
                }
            }
            RenderOp::Remove { node } => {
                transitions.remove(node);
                if let Some(entity) = nodes.get(node) {
                    commands.entity(entity).insert(Pickable::IGNORE);
                }
            }
            RenderOp::Highlight(position) => {
                highlight.0 = position;
            }
            RenderOp::Text { slot, text } => {
                status.set(slot, text);
            }
            RenderOp::ShowWinner { winner } => {
                info!("[PIECES] Showing winner {}", winner);
                *board_visibility = Visibility::Hidden;
            }
        }
    }
}

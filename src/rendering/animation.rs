//! Drives piece transitions each frame
//!
//! Ticks [`Transitions`] with the frame delta, writes sampled frames into
//! piece transforms, swaps images of arrived moves and despawns purged nodes.

use super::board::BoardLayout;
use super::images::PieceImages;
use super::pieces::{PieceNode, PieceNodes, PIECE_Z};
use crate::view::{TransitionEvent, Transitions};
use bevy::prelude::*;

pub fn drive_transitions(
    mut commands: Commands,
    time: Res<Time>,
    layout: Res<BoardLayout>,
    mut transitions: ResMut<Transitions>,
    mut nodes: ResMut<PieceNodes>,
    mut images: ResMut<PieceImages>,
    mut pieces: Query<(&PieceNode, &mut Transform, &mut Sprite)>,
) {
    let square = layout.geometry.square_size;

    for event in transitions.tick(time.delta_secs()) {
        match event {
            TransitionEvent::Arrived {
                node,
                image_id: Some(image_id),
            } => {
                let Some(entity) = nodes.get(node) else {
                    continue;
                };
                if let Ok((_, _, mut sprite)) = pieces.get_mut(entity) {
                    sprite.image = images.square(&image_id, square);
                }
            }
            TransitionEvent::Arrived { image_id: None, .. } => {}
            TransitionEvent::Purged { node } => {
                if let Some(entity) = nodes.0.remove(&node) {
                    debug!("[ANIMATION] Purging node {:?}", node);
                    commands.entity(entity).despawn();
                }
            }
        }
    }

    for (piece, mut transform, _) in pieces.iter_mut() {
        let Some(frame) = transitions.frame(piece.node) else {
            continue;
        };
        let center = layout.node_center(frame.translation);
        transform.translation = center.extend(PIECE_Z);
        // Board y points down, world y up.
        transform.rotation = Quat::from_rotation_z(-frame.angle_degrees.to_radians());
    }
}

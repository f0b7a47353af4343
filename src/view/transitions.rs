//! Transition scheduling for piece nodes
//!
//! Consumes the node-level instructions produced by the composer and turns them
//! into time-driven motion, independent of any renderer:
//!
//! - a move eases the node from its *current* sampled position to the target,
//!   so a new target issued mid-flight supersedes the old one without a jump
//! - the pending image of a move is reported on arrival, matching the way a
//!   promoted piece only changes its look once it lands
//! - a removal wobbles the node around its position, then reports it purged
//!
//! The render layer calls [`Transitions::tick`] once per frame and samples
//! [`Transitions::frame`] for every live node.

use super::render_ops::NodeId;
use bevy::math::Vec2;
use bevy::prelude::Resource;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Durations and shape of the built-in transitions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionTiming {
    /// Seconds for a move transition
    pub move_secs: f32,
    /// Base seconds of one wobble cycle before `wobble_rate` is applied
    pub wobble_secs: f32,
    /// Playback speed multiplier of the wobble
    pub wobble_rate: f32,
    /// Number of half swings; consecutive cycles reverse direction
    pub wobble_cycles: u32,
    /// Wobble swings between `-angle` and `+angle`
    pub wobble_angle_degrees: f32,
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self {
            move_secs: 0.5,
            wobble_secs: 0.5,
            wobble_rate: 3.0,
            wobble_cycles: 3,
            wobble_angle_degrees: 10.0,
        }
    }
}

impl TransitionTiming {
    fn wobble_cycle_secs(&self) -> f32 {
        self.wobble_secs / self.wobble_rate
    }

    /// Total time from removal to purge
    pub fn removal_secs(&self) -> f32 {
        self.wobble_cycle_secs() * self.wobble_cycles as f32
    }

    /// Wobble angle in degrees, `elapsed` seconds into a removal
    fn wobble_angle(&self, elapsed: f32) -> f32 {
        let cycle = self.wobble_cycle_secs();
        if cycle <= 0.0 {
            return 0.0;
        }
        let index = (elapsed / cycle).floor();
        let local = ease_in_out((elapsed - index * cycle) / cycle);
        let swing = -self.wobble_angle_degrees + 2.0 * self.wobble_angle_degrees * local;
        if index as u32 % 2 == 0 {
            swing
        } else {
            -swing
        }
    }
}

/// Smoothstep easing on `[0, 1]`
fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[derive(Debug, Clone, PartialEq)]
enum Motion {
    Resting,
    Moving {
        from: Vec2,
        to: Vec2,
        elapsed: f32,
        image_id: Option<String>,
    },
    Removing {
        elapsed: f32,
    },
}

#[derive(Debug, Clone, PartialEq)]
struct NodeMotion {
    translation: Vec2,
    motion: Motion,
}

/// Sampled visual state of one node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeFrame {
    /// Top-left pixel position on the board
    pub translation: Vec2,
    /// Rotation in degrees
    pub angle_degrees: f32,
}

/// Notifications produced by [`Transitions::tick`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionEvent {
    /// A move finished; `image_id` is the image to show from now on
    Arrived {
        node: NodeId,
        image_id: Option<String>,
    },
    /// A removal finished; the node must be dropped from the render tree
    Purged { node: NodeId },
}

/// Per-node transition state
#[derive(Resource, Debug, Clone, Default)]
pub struct Transitions {
    timing: TransitionTiming,
    nodes: BTreeMap<NodeId, NodeMotion>,
}

impl Transitions {
    pub fn new(timing: TransitionTiming) -> Self {
        Self {
            timing,
            nodes: BTreeMap::new(),
        }
    }

    pub fn timing(&self) -> TransitionTiming {
        self.timing
    }

    /// Registers a node at rest
    pub fn place(&mut self, node: NodeId, at: Vec2) {
        self.nodes.insert(
            node,
            NodeMotion {
                translation: at,
                motion: Motion::Resting,
            },
        );
    }

    /// Starts (or retargets) a move towards `to`
    ///
    /// Nodes being removed ignore further moves.
    pub fn move_to(&mut self, node: NodeId, to: Vec2, image_id: Option<String>) {
        let Some(state) = self.nodes.get_mut(&node) else {
            warn!("[TRANSITION] Move for unknown node {:?}, placing it at rest", node);
            self.place(node, to);
            return;
        };

        match &state.motion {
            Motion::Removing { .. } => {
                debug!("[TRANSITION] Ignoring move for node {:?} being removed", node);
            }
            Motion::Moving { image_id: pending, .. } => {
                // A newer image wins, otherwise keep the one still in flight.
                let image_id = image_id.or_else(|| pending.clone());
                state.motion = Motion::Moving {
                    from: state.translation,
                    to,
                    elapsed: 0.0,
                    image_id,
                };
            }
            Motion::Resting => {
                state.motion = Motion::Moving {
                    from: state.translation,
                    to,
                    elapsed: 0.0,
                    image_id,
                };
            }
        }
    }

    /// Starts the removal transition of `node`
    pub fn remove(&mut self, node: NodeId) {
        match self.nodes.get_mut(&node) {
            Some(state) => {
                if !matches!(state.motion, Motion::Removing { .. }) {
                    state.motion = Motion::Removing { elapsed: 0.0 };
                }
            }
            None => warn!("[TRANSITION] Removal for unknown node {:?}", node),
        }
    }

    /// Advances every transition by `dt` seconds
    pub fn tick(&mut self, dt: f32) -> Vec<TransitionEvent> {
        let timing = self.timing;
        let mut events = Vec::new();
        let mut purged = Vec::new();

        for (node, state) in self.nodes.iter_mut() {
            match &mut state.motion {
                Motion::Resting => {}
                Motion::Moving {
                    from,
                    to,
                    elapsed,
                    image_id,
                } => {
                    *elapsed += dt;
                    let t = if timing.move_secs > 0.0 {
                        *elapsed / timing.move_secs
                    } else {
                        1.0
                    };
                    if t >= 1.0 {
                        let arrived = TransitionEvent::Arrived {
                            node: *node,
                            image_id: image_id.take(),
                        };
                        state.translation = *to;
                        state.motion = Motion::Resting;
                        events.push(arrived);
                    } else {
                        state.translation = from.lerp(*to, ease_in_out(t));
                    }
                }
                Motion::Removing { elapsed } => {
                    *elapsed += dt;
                    if *elapsed >= timing.removal_secs() {
                        purged.push(*node);
                    }
                }
            }
        }

        for node in purged {
            self.nodes.remove(&node);
            events.push(TransitionEvent::Purged { node });
        }
        events
    }

    /// Current translation and rotation of `node`
    pub fn frame(&self, node: NodeId) -> Option<NodeFrame> {
        self.nodes.get(&node).map(|state| NodeFrame {
            translation: state.translation,
            angle_degrees: match state.motion {
                Motion::Removing { elapsed } => self.timing.wobble_angle(elapsed),
                _ => 0.0,
            },
        })
    }

    pub fn is_animating(&self, node: NodeId) -> bool {
        self.nodes
            .get(&node)
            .is_some_and(|state| state.motion != Motion::Resting)
    }

    pub fn is_removing(&self, node: NodeId) -> bool {
        self.nodes
            .get(&node)
            .is_some_and(|state| matches!(state.motion, Motion::Removing { .. }))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

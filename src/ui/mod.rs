//! UI module - egui status bars around the board
//!
//! The text shown here is never computed by the UI. [`StatusText`] is filled
//! from `RenderOp::Text` instructions by the render layer and only drawn here.

pub mod game_ui;

use crate::view::TextSlot;
use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub use game_ui::status_panels;

/// Text currently bound to each [`TextSlot`]
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusText {
    pub current_player: Option<String>,
    pub message: Option<String>,
    pub winner: Option<String>,
}

impl StatusText {
    pub fn set(&mut self, slot: TextSlot, text: Option<String>) {
        *self.slot_mut(slot) = text;
    }

    pub fn get(&self, slot: TextSlot) -> Option<&str> {
        match slot {
            TextSlot::CurrentPlayer => self.current_player.as_deref(),
            TextSlot::Message => self.message.as_deref(),
            TextSlot::Winner => self.winner.as_deref(),
        }
    }

    fn slot_mut(&mut self, slot: TextSlot) -> &mut Option<String> {
        match slot {
            TextSlot::CurrentPlayer => &mut self.current_player,
            TextSlot::Message => &mut self.message,
            TextSlot::Winner => &mut self.winner,
        }
    }
}

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<StatusText>()
            .add_systems(EguiPrimaryContextPass, status_panels);
    }
}

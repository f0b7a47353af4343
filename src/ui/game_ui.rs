//! In-game status display
//!
//! - Top bar: current player
//! - Bottom bar: last invalid-move message, empty otherwise
//! - Once the game is over: the winner line, large and centred, in place of
//!   the board
//!
//! Runs in `EguiPrimaryContextPass`.

use super::StatusText;
use crate::core::{ViewConfig, STATUS_BAR_HEIGHT};
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

const BAR_TEXT_SIZE: f32 = 18.0;
const TEXT_COLOR: egui::Color32 = egui::Color32::from_rgb(20, 20, 25);
const MESSAGE_COLOR: egui::Color32 = egui::Color32::from_rgb(220, 50, 50);

pub fn status_panels(mut contexts: EguiContexts, status: Res<StatusText>, config: Res<ViewConfig>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    let bar_frame = egui::Frame::NONE
        .fill(egui::Color32::WHITE)
        .inner_margin(egui::Margin::symmetric(config.padding as i8, 6));

    egui::TopBottomPanel::top("status_header")
        .exact_height(STATUS_BAR_HEIGHT)
        .frame(bar_frame)
        .show(ctx, |ui| {
            if let Some(text) = &status.current_player {
                ui.label(egui::RichText::new(text).size(BAR_TEXT_SIZE).color(TEXT_COLOR));
            }
        });

    egui::TopBottomPanel::bottom("status_footer")
        .exact_height(STATUS_BAR_HEIGHT)
        .frame(bar_frame)
        .show(ctx, |ui| {
            if let Some(text) = &status.message {
                ui.label(egui::RichText::new(text).size(BAR_TEXT_SIZE).color(MESSAGE_COLOR));
            }
        });

    let Some(winner) = &status.winner else {
        return;
    };
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(egui::Color32::WHITE))
        .show(ctx, |ui| {
            ui.centered_and_justified(|ui| {
                ui.label(
                    egui::RichText::new(winner)
                        .size(config.winner_font_size)
                        .strong()
                        .color(TEXT_COLOR),
                );
            });
        });
}

//! Core plugin
//!
//! Makes sure a [`ViewConfig`] resource exists and registers it for
//! reflection. The binary normally inserts the config it loaded before adding
//! this plugin; `init_resource` then leaves it untouched.

use super::config::{AnimationConfig, ViewConfig};
use bevy::prelude::*;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewConfig>();

        app.register_type::<ViewConfig>()
            .register_type::<AnimationConfig>();
    }
}

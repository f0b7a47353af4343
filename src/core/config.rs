//! View configuration
//!
//! [`ViewConfig`] holds every tunable of the chess window: layout sizes,
//! animation timing and where piece images live. It is stored as
//! `view_config.json` in the platform config directory, e.g.
//! `~/.config/chess_view/view_config.json` on Linux.
//!
//! # Loading rules
//!
//! - A missing file means defaults, wherever it was looked for
//! - An unreadable or invalid file passed explicitly with `--config` is an error
//! - The same problem at the default location is logged and defaults are used
//!
//! Every field has a serde default, so a file may set only what it changes.

use super::error::{ConfigError, ConfigResult};
use crate::game::BoardSize;
use crate::view::{BoardGeometry, TransitionTiming};
use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config filename
const CONFIG_FILENAME: &str = "view_config.json";

/// Height reserved for each of the header and footer status bars
pub const STATUS_BAR_HEIGHT: f32 = 36.0;

/// Resolves the default config path
///
/// Falls back to a local `view_config.json` if the system config dir cannot
/// be found.
pub fn default_config_path() -> PathBuf {
    match ProjectDirs::from("org", "chess_view", "chess_view") {
        Some(dirs) => dirs.config_dir().join(CONFIG_FILENAME),
        None => PathBuf::from(CONFIG_FILENAME),
    }
}

/// Timing of piece transitions, in milliseconds where durations are concerned
#[derive(Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub move_ms: u32,
    pub wobble_ms: u32,
    pub wobble_rate: f32,
    pub wobble_cycles: u32,
    pub wobble_angle_degrees: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            move_ms: 500,
            wobble_ms: 500,
            wobble_rate: 3.0,
            wobble_cycles: 3,
            wobble_angle_degrees: 10.0,
        }
    }
}

impl From<&AnimationConfig> for TransitionTiming {
    fn from(config: &AnimationConfig) -> Self {
        TransitionTiming {
            move_secs: config.move_ms as f32 / 1000.0,
            wobble_secs: config.wobble_ms as f32 / 1000.0,
            wobble_rate: config.wobble_rate,
            wobble_cycles: config.wobble_cycles,
            wobble_angle_degrees: config.wobble_angle_degrees,
        }
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Resource)]
#[serde(default)]
pub struct ViewConfig {
    /// Window title
    pub title: String,
    /// Side of one board square in logical pixels
    pub square_size: f32,
    /// Space around the board
    pub padding: f32,
    /// Width of the dark frame drawn around the board
    pub stroke_width: f32,
    /// Font size of the winner announcement
    pub winner_font_size: f32,
    /// Asset directory holding `<image_id>.png` files
    pub images_dir: String,
    pub animation: AnimationConfig,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            title: "Chess".to_string(),
            square_size: 70.0,
            padding: 20.0,
            stroke_width: 3.0,
            winner_font_size: 40.0,
            images_dir: "images".to_string(),
            animation: AnimationConfig::default(),
        }
    }
}

impl ViewConfig {
    /// Loads and validates the config at `path`
    ///
    /// A missing file yields defaults.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            info!("[CONFIG] No config file at {:?}. Using defaults.", path);
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: ViewConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        info!("[CONFIG] Loaded config from {:?}", path);
        Ok(config)
    }

    /// Loads from the platform config dir, logging any problem
    pub fn load_or_default() -> Self {
        let path = default_config_path();
        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("[CONFIG] Failed to load {:?}: {}. Using defaults.", path, e);
                Self::default()
            }
        }
    }

    /// Writes the config as pretty JSON, creating parent directories
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!("[CONFIG] Saved config to {:?}", path);
        Ok(())
    }

    pub fn validate(&self) -> ConfigResult<()> {
        fn invalid(field: &'static str, message: &str) -> ConfigError {
            ConfigError::Invalid {
                field,
                message: message.to_string(),
            }
        }

        if !(self.square_size.is_finite() && self.square_size > 0.0) {
            return Err(invalid("square_size", "must be a positive number"));
        }
        if !(self.padding.is_finite() && self.padding >= 0.0) {
            return Err(invalid("padding", "must not be negative"));
        }
        if !(self.stroke_width.is_finite() && self.stroke_width >= 0.0) {
            return Err(invalid("stroke_width", "must not be negative"));
        }
        if !(self.winner_font_size.is_finite() && self.winner_font_size > 0.0) {
            return Err(invalid("winner_font_size", "must be a positive number"));
        }
        if self.images_dir.trim().is_empty() {
            return Err(invalid("images_dir", "must not be empty"));
        }
        if !(self.animation.wobble_rate.is_finite() && self.animation.wobble_rate > 0.0) {
            return Err(invalid("animation.wobble_rate", "must be a positive number"));
        }
        Ok(())
    }

    pub fn geometry(&self) -> BoardGeometry {
        BoardGeometry::new(self.square_size)
    }

    pub fn timing(&self) -> TransitionTiming {
        TransitionTiming::from(&self.animation)
    }

    /// Logical window size fitting the board, padding and both status bars
    pub fn window_size(&self, board_size: BoardSize) -> Vec2 {
        let board = self.geometry().extent(board_size);
        Vec2::new(
            board.x + 2.0 * self.padding,
            board.y + 2.0 * self.padding + 2.0 * STATUS_BAR_HEIGHT,
        )
    }

    /// Create a Bevy Window sized for `board_size`
    pub fn to_window(&self, board_size: BoardSize) -> Window {
        let size = self.window_size(board_size);
        Window {
            title: self.title.clone(),
            resolution: WindowResolution::new(size.x.ceil() as u32, size.y.ceil() as u32),
            resizable: false,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}

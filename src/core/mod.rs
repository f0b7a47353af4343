//! Core module - configuration, errors and logging shared by every layer
//!
//! # Module Organization
//!
//! - `config` - [`ViewConfig`] loading, validation and window sizing
//! - `error` - [`ConfigError`] and [`ConfigResult`]
//! - `logging` - [`init_tracing`] for runs without Bevy's `LogPlugin`
//! - `plugin` - [`CorePlugin`]

pub mod config;
pub mod error;
pub mod logging;
pub mod plugin;

pub use config::{default_config_path, AnimationConfig, ViewConfig, STATUS_BAR_HEIGHT};
pub use error::{ConfigError, ConfigResult};
pub use logging::init_tracing;
pub use plugin::CorePlugin;

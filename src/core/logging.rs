//! Headless logging setup
//!
//! The windowed binary gets its subscriber from Bevy's `LogPlugin`. Anything
//! running without `DefaultPlugins` calls [`init_tracing`] instead.

use tracing_subscriber::{fmt, EnvFilter};

/// Default filter when `RUST_LOG` is unset
const DEFAULT_FILTER: &str = "info,chess_view=debug";

/// Installs a global `tracing` subscriber honouring `RUST_LOG`
///
/// Calling it more than once is harmless; later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}

//! Game-facing side of the view: domain values, the engine port and the ECS glue
//!
//! The view never decides whether a move is legal. It sends [`Move`] values to
//! a [`GameEngine`] and renders whatever [`MoveResult`] comes back.
//!
//! # Module Organization
//!
//! - `types` - Immutable domain values (positions, pieces, moves, results)
//! - `events` - Input messages consumed by the dispatch systems
//! - `engine` - [`GameEngine`] port and the [`GuardedEngine`] contract check
//! - `listener` - Dispatch protocol traits between view and engine driver
//! - `simple_engine` - Small demo engine with explicit state
//! - `plugin` - [`ChessSessionPlugin`], the Bevy entry point for input dispatch
//! - `system_sets` - Frame ordering (Input → Dispatch → Visual)
//! - `systems` - ECS systems that feed clicks into the session

pub mod engine;
pub mod events;
pub mod listener;
pub mod plugin;
pub mod simple_engine;
pub mod system_sets;
pub mod systems;
pub mod types;

#[cfg(test)]
mod tests;

pub use engine::{GameEngine, GuardedEngine};
pub use events::{CastleRequested, SquareClicked};
pub use listener::{GameEventListener, GameStateListener, MoveLogger};
pub use plugin::ChessSessionPlugin;
pub use simple_engine::{SimpleEngineState, SimpleGameEngine};
pub use system_sets::ViewSystems;
pub use types::*;

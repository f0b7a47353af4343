//! View layer - synchronises engine snapshots with an incrementally updated board
//!
//! Everything in this module is renderer-agnostic and runs synchronously on
//! one logical thread. The Bevy render layer in [`crate::rendering`] consumes
//! the [`RenderOp`]s produced here.
//!
//! # Module Organization
//!
//! - `reconcile` - Diffs the displayed piece set against an incoming snapshot
//! - `selection` - Two-click input state machine
//! - `composer` - [`GameView`], the state container dispatching engine results
//! - `render_ops` - Declarative render instructions and board geometry
//! - `transitions` - Time-driven move and removal animations per node
//! - `image` - Image resolver trait and caching decorator
//! - `session` - [`ChessSession`], the engine ⇄ view adapter
//! - `error` - [`ViewError`] for contract violations

pub mod composer;
pub mod error;
pub mod image;
pub mod reconcile;
pub mod render_ops;
pub mod selection;
pub mod session;
pub mod transitions;

#[cfg(test)]
mod tests;

pub use composer::{DisplayedPieces, GameView, ViewPhase};
pub use error::{ViewError, ViewResult};
pub use image::{CachedImageResolver, ImageResolver};
pub use reconcile::{reconcile, PieceAddition, PieceRemoval, PieceUpdate, ReconcileOps};
pub use render_ops::{BoardGeometry, NodeId, RenderOp, TextSlot};
pub use selection::Selection;
pub use session::ChessSession;
pub use transitions::{NodeFrame, TransitionEvent, TransitionTiming, Transitions};

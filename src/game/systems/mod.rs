//! ECS systems feeding user input into the [`crate::view::ChessSession`]
//!
//! ```text
//! Pointer<Click> ──observer──▶ SquareClicked ─┐
//! KeyK / KeyQ ───────────────▶ CastleRequested ┴─▶ dispatch ─▶ session ─▶ RenderOps
//! ```
//!
//! - [`input`] - Picking observers and keyboard shortcuts
//! - [`dispatch`] - Message consumers that drive the session

pub mod dispatch;
pub mod input;

pub use dispatch::{dispatch_castles, dispatch_clicks};
pub use input::{castle_shortcuts, on_piece_click, on_square_click};

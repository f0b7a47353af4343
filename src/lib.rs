//! Reactive chess view
//!
//! A rules-agnostic chess UI shell: a [`game::GameEngine`] decides everything,
//! the [`view::GameView`] mirrors what it reports onto an incrementally
//! updated board, and the Bevy layers in [`rendering`] and [`ui`] draw it.

pub mod core;
pub mod game;
pub mod rendering;
pub mod ui;
pub mod view;

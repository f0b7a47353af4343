//! System organization using SystemSets
//!
//! Systems run in this order each frame:
//! 1. **Input** - Keyboard shortcuts turned into view messages
//! 2. **Dispatch** - Clicks and castle requests fed through the session
//! 3. **Visual** - Render instructions applied, transitions advanced
//!
//! Pointer clicks arrive through observers and are buffered as messages, so
//! they are picked up by `Dispatch` in the same frame they are written.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SystemSet)]
pub enum ViewSystems {
    /// Systems: castle shortcuts
    Input,

    /// Systems: click dispatch, castle dispatch
    Dispatch,

    /// Systems: render op application, transitions, square colours
    Visual,
}

//! Terminal UI for coolmenu.
//!
//! [render] draws one frame from the current [crate::app::AppState]. It reads the menu
//! state and reports the list height back as the viewport height, but owns no logic.

pub mod render;

pub use render::render;

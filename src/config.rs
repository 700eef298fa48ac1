//! Configuration module for coolmenu.
//!
//! Loads `coolmenu.toml` through the [load] submodule and exposes the sections:
//! - [general]: matcher strategy, ranking and cache behavior
//! - [display]: layout options such as borders, prompt and footer
//! - [theme]: colors and the selection marker
//! - [input]: key bindings for every menu action

pub mod display;
pub mod general;
pub mod input;
pub mod load;
pub mod theme;

pub use display::{BorderShape, Display};
pub use general::General;
pub use input::Keys;
pub use load::Config;
pub use theme::{ColorPair, Theme};

//! Application layer of coolmenu.
//!
//! - [menu]: the filter-and-select state machine ([MenuState]).
//! - [keymap]: decoding key events into [MenuEvent]s.
//! - [state]: [AppState], which ties the menu, the keymap and the refresh worker together.

pub mod keymap;
pub mod menu;
pub mod state;

pub use keymap::Keymap;
pub use menu::{MenuEvent, MenuState, Outcome, Step};
pub use state::{AppState, KeypressResult};

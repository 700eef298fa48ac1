//! Miscellaneous utility functions for coolmenu.
//!
//! - [helpers]: color parsing, home directory lookup and width-aware truncation
//! - [cli]: command-line argument parsing and help output
//! - [logging]: opt-in file logging through tracing

pub mod cli;
pub mod helpers;
pub mod logging;

pub use helpers::{get_home, parse_color, truncate_to_width};

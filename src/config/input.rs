//! Input configuration options for coolmenu
//!
//! This module defines the `[keys]` table of coolmenu.toml. Each action takes a list of
//! key strings, see [crate::app::keymap] for the accepted syntax.

use serde::Deserialize;

/// Input configuration options of all actions
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Keys {
    up: Vec<String>,
    down: Vec<String>,
    page_up: Vec<String>,
    page_down: Vec<String>,
    first: Vec<String>,
    last: Vec<String>,
    confirm: Vec<String>,
    cancel: Vec<String>,
    clear: Vec<String>,
    backspace: Vec<String>,
}

macro_rules! accessor {
    ($($name:ident),+ $(,)?) => {
        impl Keys {
            $(
                #[inline]
                pub fn $name(&self) -> &[String] {
                    &self.$name
                }
            )+
        }
    };
}

accessor!(
    up, down, page_up, page_down, first, last, confirm, cancel, clear, backspace,
);

/// Default input configuration options
impl Default for Keys {
    fn default() -> Self {
        Keys {
            up: vec!["up".into(), "<c-k>".into()],
            down: vec!["down".into(), "<c-j>".into()],
            page_up: vec!["pageup".into()],
            page_down: vec!["pagedown".into()],
            first: vec!["home".into()],
            last: vec!["end".into()],
            confirm: vec!["enter".into()],
            cancel: vec!["esc".into(), "<c-c>".into()],
            clear: vec!["<c-u>".into()],
            backspace: vec!["backspace".into(), "<c-h>".into()],
        }
    }
}

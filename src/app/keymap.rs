//! Key mapping for coolmenu
//!
//! Turns raw crossterm key events into [MenuEvent]s. Bound keys come from the `[keys]`
//! table of the config; any other printable character is typed into the query.
//!
//! Key string syntax:
//! - Modifiers: `<c-x>` (Ctrl), `<m-x>`/`<a-x>` (Alt/Meta), `<s-x>` (Shift)
//! - Standard: `ctrl+x`, `alt+x`, `shift+x`, `meta+x`
//! - Named: `up`, `down`, `left`, `right`, `enter`, `esc`, `tab`, `backspace`/`back`,
//!   `home`, `end`, `pageup`, `pagedown`, `delete`, `space`, `f1`..`f12`

use crate::app::menu::MenuEvent;
use crate::config::Keys;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Menu actions a key can be bound to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Up,
    Down,
    PageUp,
    PageDown,
    First,
    Last,
    Confirm,
    Cancel,
    Clear,
    Backspace,
}

impl Action {
    pub fn event(self) -> MenuEvent {
        match self {
            Action::Up => MenuEvent::Move(-1),
            Action::Down => MenuEvent::Move(1),
            Action::PageUp => MenuEvent::PageUp,
            Action::PageDown => MenuEvent::PageDown,
            Action::First => MenuEvent::First,
            Action::Last => MenuEvent::Last,
            Action::Confirm => MenuEvent::Confirm,
            Action::Cancel => MenuEvent::Cancel,
            Action::Clear => MenuEvent::Clear,
            Action::Backspace => MenuEvent::Backspace,
        }
    }
}

/// Key + modifiers as used in keybind/keymap
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub struct Key {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

/// Stores the mapping from Key to action, which is built from the config
pub struct Keymap {
    map: HashMap<Key, Action>,
}

impl Keymap {
    /// Builds the keymap from the `[keys]` config table
    #[rustfmt::skip]
    pub fn from_keys(keys: &Keys) -> Self {
        let mut map = HashMap::new();

        bind(keys.up(),         Action::Up,         &mut map);
        bind(keys.down(),       Action::Down,       &mut map);
        bind(keys.page_up(),    Action::PageUp,     &mut map);
        bind(keys.page_down(),  Action::PageDown,   &mut map);
        bind(keys.first(),      Action::First,      &mut map);
        bind(keys.last(),       Action::Last,       &mut map);
        bind(keys.confirm(),    Action::Confirm,    &mut map);
        bind(keys.cancel(),     Action::Cancel,     &mut map);
        bind(keys.clear(),      Action::Clear,      &mut map);
        bind(keys.backspace(),  Action::Backspace,  &mut map);

        Keymap { map }
    }

    /// Looks up the bound action for a given key event
    pub fn lookup(&self, key: KeyEvent) -> Option<Action> {
        let k = Key {
            code: key.code,
            modifiers: key.modifiers,
        };

        if let Some(action) = self.map.get(&k).copied() {
            return Some(action);
        }

        if matches!(key.code, KeyCode::Char(_)) && key.modifiers.contains(KeyModifiers::SHIFT) {
            let k2 = Key {
                code: key.code,
                modifiers: key.modifiers - KeyModifiers::SHIFT,
            };
            return self.map.get(&k2).copied();
        }
        None
    }

    /// Decodes a key event into a menu event.
    ///
    /// Bound keys win. Unbound printable characters typed without Ctrl/Alt are inserted
    /// into the query, everything else is [MenuEvent::Ignore].
    pub fn event_for(&self, key: KeyEvent) -> MenuEvent {
        if let Some(action) = self.lookup(key) {
            return action.event();
        }
        match key.code {
            KeyCode::Char(c)
                if !c.is_control()
                    && !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                MenuEvent::Insert(c)
            }
            _ => MenuEvent::Ignore,
        }
    }
}

pub fn parse_key(s: &str) -> Option<Key> {
    let mut modifiers = KeyModifiers::NONE;
    let mut code: Option<KeyCode> = None;

    let is_bracketed = s.starts_with('<') && s.ends_with('>');
    let mut input = s.trim_start_matches('<').trim_end_matches('>').to_string();

    if is_bracketed && input.contains('-') {
        let parts: Vec<&str> = input.split('-').collect();

        for &prefix in parts.iter().take(parts.len().saturating_sub(1)) {
            match prefix.to_lowercase().as_str() {
                "c" | "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "a" | "m" | "alt" => modifiers |= KeyModifiers::ALT,
                "s" | "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }
        input = parts.last()?.to_string();
    }

    for part in input.split('+') {
        let p_low = part.to_lowercase();
        match p_low.as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "alt" | "meta" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,

            "up" => code = Some(KeyCode::Up),
            "down" => code = Some(KeyCode::Down),
            "left" => code = Some(KeyCode::Left),
            "right" => code = Some(KeyCode::Right),
            "enter" | "return" => code = Some(KeyCode::Enter),
            "esc" | "escape" => code = Some(KeyCode::Esc),
            "backspace" | "back" => code = Some(KeyCode::Backspace),
            "tab" => code = Some(KeyCode::Tab),
            "home" => code = Some(KeyCode::Home),
            "end" => code = Some(KeyCode::End),
            "pageup" | "pgup" => code = Some(KeyCode::PageUp),
            "pagedown" | "pgdn" => code = Some(KeyCode::PageDown),
            "delete" | "del" => code = Some(KeyCode::Delete),
            "space" | "spc" => code = Some(KeyCode::Char(' ')),

            _ => {
                if part.chars().count() == 1 {
                    let mut c = part.chars().next()?;
                    if modifiers.contains(KeyModifiers::SHIFT) {
                        c = c.to_ascii_uppercase();
                    }
                    code = Some(KeyCode::Char(c));
                } else if p_low.starts_with('f')
                    && p_low.len() > 1
                    && p_low[1..].chars().all(|c| c.is_ascii_digit())
                {
                    let n = p_low[1..].parse().ok()?;
                    code = Some(KeyCode::F(n));
                } else if part.is_empty() {
                    continue;
                } else {
                    return None;
                }
            }
        }
    }

    Some(Key {
        code: code?,
        modifiers,
    })
}

fn bind(key_list: &[String], action: Action, map: &mut HashMap<Key, Action>) {
    for k in key_list {
        match parse_key(k) {
            Some(key) => {
                map.insert(key, action);
            }
            None => tracing::warn!(key = %k, ?action, "ignoring unparsable key binding"),
        }
    }
}

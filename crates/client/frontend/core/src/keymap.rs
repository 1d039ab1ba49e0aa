//! Key bindings for the main play mode.

use crate::input::{KeyCode, KeyInput};

/// What a key means in the main play mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Intent {
    Move { dx: i32, dy: i32 },
    Wait,
    PickUp,
    OpenInventory,
    OpenDrop,
    OpenHistory,
    Exit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub intent: Intent,
}

const fn bind(code: KeyCode, intent: Intent) -> KeyBinding {
    KeyBinding { code, intent }
}

const fn step(code: KeyCode, dx: i32, dy: i32) -> KeyBinding {
    bind(code, Intent::Move { dx, dy })
}

/// Arrow keys, the home-block diagonals, the keypad, and vi keys.
const DEFAULT_BINDINGS: &[KeyBinding] = &[
    step(KeyCode::Up, 0, -1),
    step(KeyCode::Down, 0, 1),
    step(KeyCode::Left, -1, 0),
    step(KeyCode::Right, 1, 0),
    step(KeyCode::Home, -1, -1),
    step(KeyCode::End, -1, 1),
    step(KeyCode::PageUp, 1, -1),
    step(KeyCode::PageDown, 1, 1),
    step(KeyCode::Numpad(1), -1, 1),
    step(KeyCode::Numpad(2), 0, 1),
    step(KeyCode::Numpad(3), 1, 1),
    step(KeyCode::Numpad(4), -1, 0),
    step(KeyCode::Numpad(6), 1, 0),
    step(KeyCode::Numpad(7), -1, -1),
    step(KeyCode::Numpad(8), 0, -1),
    step(KeyCode::Numpad(9), 1, -1),
    step(KeyCode::Char('h'), -1, 0),
    step(KeyCode::Char('j'), 0, 1),
    step(KeyCode::Char('k'), 0, -1),
    step(KeyCode::Char('l'), 1, 0),
    step(KeyCode::Char('y'), -1, -1),
    step(KeyCode::Char('u'), 1, -1),
    step(KeyCode::Char('b'), -1, 1),
    step(KeyCode::Char('n'), 1, 1),
    bind(KeyCode::Char('.'), Intent::Wait),
    bind(KeyCode::Numpad(5), Intent::Wait),
    bind(KeyCode::Clear, Intent::Wait),
    bind(KeyCode::Escape, Intent::Exit),
    bind(KeyCode::Char('v'), Intent::OpenHistory),
    bind(KeyCode::Char('g'), Intent::PickUp),
    bind(KeyCode::Char('i'), Intent::OpenInventory),
    bind(KeyCode::Char('d'), Intent::OpenDrop),
];

/// Ordered key bindings. The first binding for a key wins.
#[derive(Clone, Debug)]
pub struct KeyMap {
    bindings: Vec<KeyBinding>,
}

impl KeyMap {
    pub fn empty() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Binds `code` to `intent`, replacing any earlier binding for it.
    pub fn bind(&mut self, code: KeyCode, intent: Intent) {
        let code = normalize(code);
        self.bindings.retain(|binding| binding.code != code);
        self.bindings.push(KeyBinding { code, intent });
    }

    pub fn bindings(&self) -> &[KeyBinding] {
        &self.bindings
    }

    /// Looks up a key. Letters match regardless of case; modifiers are
    /// otherwise ignored.
    pub fn lookup(&self, key: &KeyInput) -> Option<Intent> {
        let code = normalize(key.code);
        self.bindings
            .iter()
            .find(|binding| binding.code == code)
            .map(|binding| binding.intent)
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            bindings: DEFAULT_BINDINGS.to_vec(),
        }
    }
}

fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(ch) => KeyCode::Char(ch.to_ascii_lowercase()),
        other => other,
    }
}

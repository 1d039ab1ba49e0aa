//! Device-agnostic input events.
//!
//! Concrete frontends translate their native events (crossterm, winit, ...)
//! into these types so the mode machine never sees a backend type.

use bitflags::bitflags;
use game_core::Position;

bitflags! {
    /// Modifier keys held while a key was pressed.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct KeyModifiers: u8 {
        const SHIFT   = 1 << 0;
        const CONTROL = 1 << 1;
        const ALT     = 1 << 2;
    }
}

/// A modifier key reported on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModifierKey {
    LeftShift,
    RightShift,
    LeftControl,
    RightControl,
    LeftAlt,
    RightAlt,
}

/// Physical key identity, independent of the input backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Enter,
    Escape,
    /// Keypad center with num lock off.
    Clear,
    /// Keypad digit `0..=9`.
    Numpad(u8),
    Modifier(ModifierKey),
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyInput {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyInput {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::empty())
    }

    /// True for a press of shift, control, or alt on its own.
    pub fn is_modifier_only(&self) -> bool {
        matches!(self.code, KeyCode::Modifier(_))
    }

    /// Lowercase letter `a..=z`, if this key is one.
    pub fn letter(&self) -> Option<char> {
        match self.code {
            KeyCode::Char(ch) if ch.is_ascii_alphabetic() => Some(ch.to_ascii_lowercase()),
            _ => None,
        }
    }
}

/// One discrete input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyInput),
    /// Pointer moved over the given map cell.
    MouseMotion(Position),
    /// Pointer clicked on the given map cell.
    MouseButton(Position),
    /// The window or terminal asked the session to close.
    Quit,
}

impl From<KeyInput> for InputEvent {
    fn from(key: KeyInput) -> Self {
        Self::Key(key)
    }
}

impl From<KeyCode> for InputEvent {
    fn from(code: KeyCode) -> Self {
        Self::Key(KeyInput::plain(code))
    }
}

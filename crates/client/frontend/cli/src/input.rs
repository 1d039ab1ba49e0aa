//! Translation from crossterm events to frontend input events.
//!
//! Only key presses count; repeats and releases are dropped. Mouse
//! coordinates map one-to-one onto map cells because the map is drawn at
//! the top-left corner of the screen without a border.

use client_frontend_core::{InputEvent, KeyCode, KeyInput, KeyModifiers, ModifierKey};
use crossterm::event::{
    Event, KeyCode as TermKey, KeyEvent, KeyEventKind, KeyEventState,
    KeyModifiers as TermModifiers, ModifierKeyCode, MouseEvent, MouseEventKind,
};
use game_core::Position;

/// Converts one terminal event, or `None` when the session ignores it.
pub fn translate(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(translate_key(key)),
        Event::Mouse(mouse) => translate_mouse(mouse),
        _ => None,
    }
}

fn translate_key(key: &KeyEvent) -> InputEvent {
    // Raw mode swallows SIGINT; treat Ctrl-C as the window close request.
    if key.modifiers.contains(TermModifiers::CONTROL) && key.code == TermKey::Char('c') {
        return InputEvent::Quit;
    }

    let keypad = key.state.contains(KeyEventState::KEYPAD);
    let code = match key.code {
        TermKey::Char(ch) if keypad && ch.is_ascii_digit() => KeyCode::Numpad(ch as u8 - b'0'),
        TermKey::Char(ch) => KeyCode::Char(ch),
        TermKey::Up => KeyCode::Up,
        TermKey::Down => KeyCode::Down,
        TermKey::Left => KeyCode::Left,
        TermKey::Right => KeyCode::Right,
        TermKey::Home => KeyCode::Home,
        TermKey::End => KeyCode::End,
        TermKey::PageUp => KeyCode::PageUp,
        TermKey::PageDown => KeyCode::PageDown,
        TermKey::Enter => KeyCode::Enter,
        TermKey::Esc => KeyCode::Escape,
        TermKey::KeypadBegin => KeyCode::Clear,
        TermKey::Modifier(modifier) => {
            modifier_key(modifier).map_or(KeyCode::Other, KeyCode::Modifier)
        }
        _ => KeyCode::Other,
    };

    InputEvent::Key(KeyInput::new(code, modifiers(key.modifiers)))
}

fn modifier_key(code: ModifierKeyCode) -> Option<ModifierKey> {
    Some(match code {
        ModifierKeyCode::LeftShift => ModifierKey::LeftShift,
        ModifierKeyCode::RightShift => ModifierKey::RightShift,
        ModifierKeyCode::LeftControl => ModifierKey::LeftControl,
        ModifierKeyCode::RightControl => ModifierKey::RightControl,
        ModifierKeyCode::LeftAlt => ModifierKey::LeftAlt,
        ModifierKeyCode::RightAlt => ModifierKey::RightAlt,
        _ => return None,
    })
}

fn modifiers(raw: TermModifiers) -> KeyModifiers {
    let mut modifiers = KeyModifiers::empty();
    modifiers.set(KeyModifiers::SHIFT, raw.contains(TermModifiers::SHIFT));
    modifiers.set(KeyModifiers::CONTROL, raw.contains(TermModifiers::CONTROL));
    modifiers.set(KeyModifiers::ALT, raw.contains(TermModifiers::ALT));
    modifiers
}

fn translate_mouse(mouse: &MouseEvent) -> Option<InputEvent> {
    let cell = Position::new(i32::from(mouse.column), i32::from(mouse.row));
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(InputEvent::MouseMotion(cell)),
        MouseEventKind::Down(_) => Some(InputEvent::MouseButton(cell)),
        _ => None,
    }
}

//! Adapter to convert winit input events to the control event types.
//!
//! The host's event loop stays on winit types; this module is the one place
//! that knows both vocabularies. Keys with no control-side meaning map to
//! `None` and should be left to the host's own shortcut handling.

use winit::event::MouseButton;
use winit::keyboard::{Key as WinitKey, ModifiersState, NamedKey};

use crate::event::{Key, KeyEvent, Modifiers, PointerButton};

/// Convert winit modifier state to control modifiers.
pub fn modifiers_from_winit(state: ModifiersState) -> Modifiers {
    Modifiers::new(
        state.control_key(),
        state.shift_key(),
        state.alt_key(),
        state.super_key(),
    )
}

/// Convert a winit logical key to a control key event.
///
/// Returns None if the key has no mapping (function keys, media keys, ...).
/// Character keys keep their case: the text box inserts them verbatim.
pub fn key_event_from_winit(logical_key: &WinitKey, modifiers: Modifiers) -> Option<KeyEvent> {
    let key = match logical_key {
        WinitKey::Named(named) => match named {
            NamedKey::ArrowLeft => Some(Key::Left),
            NamedKey::ArrowRight => Some(Key::Right),
            NamedKey::ArrowUp => Some(Key::Up),
            NamedKey::ArrowDown => Some(Key::Down),
            NamedKey::Enter => Some(Key::Enter),
            NamedKey::Backspace => Some(Key::Backspace),
            NamedKey::Delete => Some(Key::Delete),
            NamedKey::Escape => Some(Key::Escape),
            NamedKey::Space => Some(Key::Char(' ')),
            _ => None,
        },
        WinitKey::Character(s) => s.chars().next().map(Key::Char),
        _ => None,
    }?;

    Some(KeyEvent::new(key, modifiers))
}

/// Convert a winit mouse button to a pointer button.
pub fn pointer_button_from_winit(button: MouseButton) -> Option<PointerButton> {
    match button {
        MouseButton::Left => Some(PointerButton::Primary),
        MouseButton::Right => Some(PointerButton::Secondary),
        MouseButton::Middle => Some(PointerButton::Middle),
        _ => None,
    }
}

//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::rc::Rc;

use gadget::{Control, EventCtx, FixedMetrics, Key, KeyEvent, Modifiers, TextBox, Theme};

/// Glyph advance used by all tests: every character is exactly 10px wide.
pub const ADVANCE: i32 = 10;

/// A focused text box over fixed 10px metrics and the default theme.
///
/// With the default theme's 4px side margin, character boundary `c` sits at
/// local x = `4 + 10*c - scroll`.
pub fn test_text_box(text: &str, width: i32) -> TextBox {
    let metrics = Rc::new(FixedMetrics::new(ADVANCE));
    let theme = Rc::new(Theme::default());
    let mut text_box = TextBox::new(text, metrics, theme);
    text_box.set_size(width, 24);
    text_box.set_focused(true);
    text_box
}

/// Press a key without modifiers, returning the host requests it produced.
pub fn press(text_box: &mut TextBox, key: Key) -> EventCtx {
    press_with(text_box, key, Modifiers::NONE)
}

/// Press a key with modifiers, returning the host requests it produced.
pub fn press_with(text_box: &mut TextBox, key: Key, modifiers: Modifiers) -> EventCtx {
    let mut ctx = EventCtx::new();
    text_box.on_key_down(&mut ctx, &KeyEvent::new(key, modifiers));
    ctx
}

/// Type a string one printable key at a time.
pub fn type_str(text_box: &mut TextBox, s: &str) {
    for ch in s.chars() {
        press(text_box, Key::Char(ch));
    }
}

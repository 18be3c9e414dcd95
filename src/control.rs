//! The widget base contract shared by every control.
//!
//! A control owns a bounding size plus enabled/focused flags, reacts to
//! already-routed input events, ticks once per frame, and renders into a
//! [`CommandList`]. Observable state changes raise a dirty flag; the host
//! polls it and schedules a redraw. Marking dirty never renders
//! synchronously.
//!
//! The per-frame ordering the host must uphold: input events in arrival
//! order, then `tick`, then `render`. Everything is single-threaded.

use crate::command::CommandList;
use crate::event::{EventCtx, KeyEvent, PointerButton, PointerEvent};

/// Shared state embedded in every concrete control.
#[derive(Debug, Clone)]
pub struct ControlBase {
    pub width: i32,
    pub height: i32,
    /// Whether this control accepts input.
    pub enabled: bool,
    /// Whether the owning container currently routes keyboard input here.
    /// Granted and revoked externally; controls only read it.
    pub focused: bool,
    dirty: bool,
}

impl ControlBase {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            enabled: true,
            focused: false,
            dirty: true,
        }
    }

    /// Request a redraw. Decoupled from rendering: the host polls
    /// [`ControlBase::take_dirty`] once per frame.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Read and clear the dirty flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}

/// Assign `value` to `slot` only if it differs, marking the control dirty on
/// change. Returns whether the value changed.
///
/// This compare-and-set-with-notify is used pervasively: hover flags, caret
/// blink visibility, scroll offsets, checkbox state.
pub fn set_and_mark_dirty<T: PartialEq>(base: &mut ControlBase, slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    base.mark_dirty();
    true
}

/// The base trait for all controls.
///
/// Event hooks default to no-ops; each control overrides the ones relevant to
/// its behavior. Hooks receive an [`EventCtx`] to enqueue host requests
/// (pointer capture, focus release, cursor hints) — they never call into the
/// host directly.
pub trait Control {
    /// Access the shared base fields.
    fn base(&self) -> &ControlBase;
    /// Mutable access to the shared base fields.
    fn base_mut(&mut self) -> &mut ControlBase;

    /// Pointer button pressed inside this control.
    fn on_pointer_down(&mut self, _ctx: &mut EventCtx, _ev: &PointerEvent) {}

    /// Pointer moved over this control (or anywhere, while captured).
    fn on_pointer_move(&mut self, _ctx: &mut EventCtx, _x: i32, _y: i32) {}

    /// Pointer button released.
    fn on_pointer_up(&mut self, _ctx: &mut EventCtx, _button: PointerButton) {}

    /// Pointer left this control's bounds.
    fn on_pointer_leave(&mut self, _ctx: &mut EventCtx) {}

    /// Second click of a double-click gesture.
    fn on_double_click(&mut self, _ctx: &mut EventCtx, _ev: &PointerEvent) {}

    /// Key pressed while this control has focus. One discrete press per call;
    /// key repeat, if any, is synthesized by the host event source.
    fn on_key_down(&mut self, _ctx: &mut EventCtx, _ev: &KeyEvent) {}

    /// Key released while this control has focus.
    fn on_key_up(&mut self, _ctx: &mut EventCtx, _ev: &KeyEvent) {}

    /// Advance time-dependent state (caret blink). Runs once per frame,
    /// before `render`.
    fn tick(&mut self, _dt: f32) {}

    /// Append this control's draw primitives for the current frame.
    /// Reads state only; no side effects.
    fn render(&self, list: &mut CommandList);

    // ── Default property accessors (delegate to ControlBase) ────────

    fn size(&self) -> (i32, i32) {
        (self.base().width, self.base().height)
    }

    fn set_size(&mut self, width: i32, height: i32) {
        let b = self.base_mut();
        if b.width != width || b.height != height {
            b.width = width;
            b.height = height;
            b.mark_dirty();
        }
    }

    fn is_enabled(&self) -> bool {
        self.base().enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        let b = self.base_mut();
        if b.enabled != enabled {
            b.enabled = enabled;
            b.mark_dirty();
        }
    }

    fn is_focused(&self) -> bool {
        self.base().focused
    }

    /// Focus grant/revocation from the owning container.
    fn set_focused(&mut self, focused: bool) {
        let b = self.base_mut();
        if b.focused != focused {
            b.focused = focused;
            b.mark_dirty();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirty_starts_set_and_clears() {
        let mut base = ControlBase::new(10, 10);
        assert!(base.take_dirty());
        assert!(!base.is_dirty());
        assert!(!base.take_dirty());
    }

    #[test]
    fn test_set_and_mark_dirty_only_on_change() {
        let mut base = ControlBase::new(10, 10);
        base.take_dirty();

        let mut hover = false;
        assert!(set_and_mark_dirty(&mut base, &mut hover, true));
        assert!(hover);
        assert!(base.take_dirty());

        // Same value again: no change, no dirty
        assert!(!set_and_mark_dirty(&mut base, &mut hover, true));
        assert!(!base.is_dirty());
    }
}

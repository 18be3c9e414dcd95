//! Boolean checkbox.
//!
//! Toggles on pointer-down (and double-click, which the host may route when
//! the user clicks fast). Change observers fire only when the value actually
//! changes — setting the same value twice is silent.

use std::rc::Rc;

use crate::command::CommandList;
use crate::control::{set_and_mark_dirty, Control, ControlBase};
use crate::event::{EventCtx, PointerButton, PointerEvent};
use crate::geometry::{Point, Rect};
use crate::theme::Theme;

type ChangedObserver = Box<dyn FnMut(bool)>;

pub struct Checkbox {
    base: ControlBase,
    checked: bool,
    hover: bool,
    observers: Vec<ChangedObserver>,
    theme: Rc<Theme>,
}

impl Checkbox {
    pub fn new(checked: bool, theme: Rc<Theme>) -> Self {
        let size = theme.metrics.checkbox_size;
        Self {
            base: ControlBase::new(size, size),
            checked,
            hover: false,
            observers: Vec::new(),
            theme,
        }
    }

    pub fn checked(&self) -> bool {
        self.checked
    }

    /// Set the value, notifying observers only on an actual change.
    pub fn set_checked(&mut self, checked: bool) {
        if set_and_mark_dirty(&mut self.base, &mut self.checked, checked) {
            for observer in &mut self.observers {
                observer(checked);
            }
        }
    }

    /// Register a change observer. Observers are called in registration order.
    pub fn on_changed(&mut self, observer: impl FnMut(bool) + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn toggle(&mut self) {
        self.set_checked(!self.checked);
    }
}

impl Control for Checkbox {
    fn base(&self) -> &ControlBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ControlBase {
        &mut self.base
    }

    fn on_pointer_down(&mut self, _ctx: &mut EventCtx, ev: &PointerEvent) {
        if ev.button == PointerButton::Primary {
            self.toggle();
        }
    }

    fn on_double_click(&mut self, ctx: &mut EventCtx, ev: &PointerEvent) {
        // A fast second click toggles again rather than being swallowed.
        self.on_pointer_down(ctx, ev);
    }

    fn on_pointer_move(&mut self, _ctx: &mut EventCtx, _x: i32, _y: i32) {
        set_and_mark_dirty(&mut self.base, &mut self.hover, true);
    }

    fn on_pointer_leave(&mut self, _ctx: &mut EventCtx) {
        set_and_mark_dirty(&mut self.base, &mut self.hover, false);
    }

    fn render(&self, list: &mut CommandList) {
        let w = self.base.width;
        let h = self.base.height;
        let border = if self.hover && self.base.enabled {
            self.theme.accent
        } else {
            self.theme.border
        };

        list.fill_rect(Rect::from_size(w, h), self.theme.background);
        list.stroke_rect(Rect::from_size(w, h), border);

        if self.checked {
            list.fill_rect(
                Rect::new(2, 2, w - 4, h - 4),
                self.theme.accent,
            );
            // Checkmark: short leg up to the midpoint, long leg to the corner
            let color = self.theme.foreground.lighten(40);
            list.draw_line(
                Point::new(3, h / 2),
                Point::new(w / 2 - 1, h - 5),
                color,
            );
            list.draw_line(
                Point::new(w / 2 - 1, h - 5),
                Point::new(w - 4, 4),
                color,
            );
        }
    }
}

//! Hyperlink label.
//!
//! Static underlined text; clicking it asks the host to open an external URI.
//! Hover only swaps the brush and the cursor shape.

use std::rc::Rc;

use crate::command::CommandList;
use crate::control::{set_and_mark_dirty, Control, ControlBase};
use crate::event::{CursorIcon, EventCtx, PointerButton, PointerEvent};
use crate::font::FontMetrics;
use crate::geometry::{Point, Rect};
use crate::theme::Theme;

pub struct LinkLabel {
    base: ControlBase,
    text: String,
    uri: String,
    hover: bool,
    metrics: Rc<dyn FontMetrics>,
    theme: Rc<Theme>,
}

impl LinkLabel {
    pub fn new(text: &str, uri: &str, metrics: Rc<dyn FontMetrics>, theme: Rc<Theme>) -> Self {
        let height = theme.metrics.control_height;
        Self {
            base: ControlBase::new(0, height),
            text: text.to_string(),
            uri: uri.to_string(),
            hover: false,
            metrics,
            theme,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    fn text_width(&self) -> i32 {
        self.metrics.measure_width(&self.text)
    }
}

impl Control for LinkLabel {
    fn base(&self) -> &ControlBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ControlBase {
        &mut self.base
    }

    fn on_pointer_move(&mut self, ctx: &mut EventCtx, x: i32, _y: i32) {
        // Hover tracks the text itself, not the control's full bounds.
        let inside_text = x >= 0 && x < self.text_width();
        ctx.set_cursor(if inside_text {
            CursorIcon::Hand
        } else {
            CursorIcon::Default
        });
        set_and_mark_dirty(&mut self.base, &mut self.hover, inside_text);
    }

    fn on_pointer_leave(&mut self, ctx: &mut EventCtx) {
        ctx.set_cursor(CursorIcon::Default);
        set_and_mark_dirty(&mut self.base, &mut self.hover, false);
    }

    fn on_pointer_down(&mut self, ctx: &mut EventCtx, ev: &PointerEvent) {
        if ev.button == PointerButton::Primary {
            ctx.open_uri(&self.uri);
        }
    }

    fn render(&self, list: &mut CommandList) {
        // TODO: render a dimmed variant once the theme grows a disabled style.
        debug_assert!(self.base.enabled);

        let width = self.text_width();
        let h = self.base.height;
        let brush = if self.hover {
            self.theme.link.lighten(30)
        } else {
            self.theme.link
        };

        list.clipped_text(&self.text, 0, brush, Rect::new(0, 0, width, h));

        let underline_y = h - self.theme.metrics.link_underline_offset;
        list.draw_line(
            Point::new(0, underline_y),
            Point::new(width, underline_y),
            brush,
        );
    }
}

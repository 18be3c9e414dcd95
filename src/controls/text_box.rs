//! Single-line text box.
//!
//! Wires pointer and keyboard events into the [`EditState`] machine and adds
//! the pixel-space concerns: pixel↔char mapping through the font metrics,
//! horizontal scroll-to-caret, caret blink, and command-list rendering.
//!
//! Clipboard copy/paste is not implemented.

use std::rc::Rc;

use crate::command::CommandList;
use crate::control::{set_and_mark_dirty, Control, ControlBase};
use crate::edit::{EditState, Span};
use crate::event::{CursorIcon, EventCtx, Key, KeyEvent, PointerButton, PointerEvent};
use crate::font::FontMetrics;
use crate::geometry::{Point, Rect};
use crate::theme::Theme;

/// A printable key the font can render becomes an insertion; everything else
/// falls through.
fn is_printable_ascii(ch: char) -> bool {
    ch == ' ' || ch.is_ascii_graphic()
}

pub struct TextBox {
    base: ControlBase,
    state: EditState,
    /// Horizontal pixel offset of the visible window into the rendered text.
    scroll_px: i32,
    max_scroll_px: i32,
    /// Anchor character of a live drag-selection gesture.
    drag_anchor: Option<usize>,
    blink_time: f32,
    blink_visible: bool,
    metrics: Rc<dyn FontMetrics>,
    theme: Rc<Theme>,
}

impl TextBox {
    pub fn new(text: &str, metrics: Rc<dyn FontMetrics>, theme: Rc<Theme>) -> Self {
        let height = theme.metrics.control_height;
        Self {
            base: ControlBase::new(0, height),
            state: EditState::new(text),
            scroll_px: 0,
            max_scroll_px: 0,
            drag_anchor: None,
            blink_time: 0.0,
            blink_visible: true,
            metrics,
            theme,
        }
    }

    // ── Public surface ───────────────────────────────────────────────

    pub fn text(&self) -> &str {
        self.state.text()
    }

    /// Replace the content wholesale: caret, selection, and scroll reset to
    /// the start.
    pub fn set_text(&mut self, text: &str) {
        tracing::trace!(len = text.len(), "text box content replaced");
        self.state.set_text(text);
        self.scroll_px = 0;
        self.update_scroll_bounds();
        self.base.mark_dirty();
    }

    pub fn caret(&self) -> usize {
        self.state.caret()
    }

    pub fn selection(&self) -> Span {
        self.state.selection()
    }

    pub fn set_selection(&mut self, start: usize, len: usize) {
        self.state.set_selection(start, len);
        self.base.mark_dirty();
    }

    pub fn clear_selection(&mut self) {
        self.state.clear_selection();
        self.base.mark_dirty();
    }

    pub fn select_all(&mut self) {
        self.state.select_all();
        self.base.mark_dirty();
    }

    pub fn scroll_px(&self) -> i32 {
        self.scroll_px
    }

    // ── Pixel <-> char mapping ───────────────────────────────────────

    fn visible_width(&self) -> i32 {
        self.base.width - self.theme.metrics.side_margin * 2
    }

    fn pixel_to_char(&self, x: i32) -> usize {
        let offset = x - self.theme.metrics.side_margin + self.scroll_px;
        let c = self.metrics.char_index_for_pixel(self.state.text(), offset);
        debug_assert!(c <= self.state.len_chars());
        c
    }

    fn char_to_pixel(&self, c: usize, with_margin: bool) -> i32 {
        let margin = if with_margin {
            self.theme.metrics.side_margin
        } else {
            0
        };
        margin - self.scroll_px + self.metrics.measure_width(self.state.prefix(c))
    }

    // ── Scrolling ────────────────────────────────────────────────────

    fn update_scroll_bounds(&mut self) {
        self.max_scroll_px =
            (self.metrics.measure_width(self.state.text()) - self.visible_width()).max(0);
        let clamped = self.scroll_px.clamp(0, self.max_scroll_px);
        set_and_mark_dirty(&mut self.base, &mut self.scroll_px, clamped);
    }

    /// Shift the visible window so the caret sits inside it, with a
    /// `scroll_step` margin so it never lands flush on an edge.
    fn ensure_caret_visible(&mut self) {
        let px = self.char_to_pixel(self.state.caret(), false);
        let visible = self.visible_width();
        let step = self.theme.metrics.scroll_step;

        let new_scroll = if px < 0 {
            (self.scroll_px + px - step).clamp(0, self.max_scroll_px)
        } else if px > visible {
            (self.scroll_px + px - visible + step).clamp(0, self.max_scroll_px)
        } else {
            self.scroll_px
        };
        set_and_mark_dirty(&mut self.base, &mut self.scroll_px, new_scroll);
    }

    // ── Caret blink ──────────────────────────────────────────────────

    fn update_caret_blink(&mut self) {
        let visible = self.blink_time.fract() < 0.5;
        set_and_mark_dirty(&mut self.base, &mut self.blink_visible, visible);
    }

    fn reset_caret_blink(&mut self) {
        self.blink_time = 0.0;
        self.update_caret_blink();
    }
}

impl Control for TextBox {
    fn base(&self) -> &ControlBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ControlBase {
        &mut self.base
    }

    fn set_size(&mut self, width: i32, height: i32) {
        let b = &mut self.base;
        if b.width != width || b.height != height {
            b.width = width;
            b.height = height;
            b.mark_dirty();
            self.update_scroll_bounds();
        }
    }

    fn on_pointer_down(&mut self, ctx: &mut EventCtx, ev: &PointerEvent) {
        if ev.button != PointerButton::Primary {
            return;
        }

        let c = self.pixel_to_char(ev.x);
        self.state.caret_to(c);
        self.state.clear_selection();
        self.reset_caret_blink();

        self.drag_anchor = Some(c);
        ctx.capture_pointer();
        self.base.mark_dirty();
    }

    fn on_pointer_move(&mut self, ctx: &mut EventCtx, x: i32, _y: i32) {
        ctx.set_cursor(if self.base.enabled {
            CursorIcon::IBeam
        } else {
            CursorIcon::Default
        });

        if let Some(anchor) = self.drag_anchor {
            let c = self.pixel_to_char(x);
            self.state.drag_select(anchor, c);
            self.ensure_caret_visible();
            self.base.mark_dirty();
        }
    }

    fn on_pointer_up(&mut self, ctx: &mut EventCtx, button: PointerButton) {
        if button == PointerButton::Primary {
            self.drag_anchor = None;
            ctx.release_pointer();
        }
    }

    fn on_double_click(&mut self, _ctx: &mut EventCtx, ev: &PointerEvent) {
        let c = self.pixel_to_char(ev.x);
        self.state.select_word_at(c);
        self.base.mark_dirty();
    }

    fn on_key_down(&mut self, ctx: &mut EventCtx, ev: &KeyEvent) {
        match ev.key {
            Key::Left | Key::Right => {
                let by_word = ev.modifiers.ctrl() || ev.modifiers.alt();
                let extend = ev.modifiers.shift();

                if ev.key == Key::Left {
                    self.state.move_left(by_word, extend);
                } else {
                    self.state.move_right(by_word, extend);
                }

                self.reset_caret_blink();
                self.ensure_caret_visible();
                self.base.mark_dirty();
            }
            Key::Char(c)
                if (ev.modifiers.ctrl() || ev.modifiers.meta())
                    && c.eq_ignore_ascii_case(&'a') =>
            {
                self.state.select_all();
                self.base.mark_dirty();
            }
            Key::Backspace => {
                if self.state.backspace() {
                    self.update_scroll_bounds();
                    self.ensure_caret_visible();
                    self.base.mark_dirty();
                }
            }
            Key::Delete => {
                if self.state.delete_forward() {
                    self.update_scroll_bounds();
                    self.ensure_caret_visible();
                    self.base.mark_dirty();
                }
            }
            Key::Char(c)
                if is_printable_ascii(c)
                    && !ev.modifiers.ctrl()
                    && !ev.modifiers.alt()
                    && !ev.modifiers.meta()
                    && self.metrics.has_glyph(c) =>
            {
                self.state.insert_char(c);
                self.update_scroll_bounds();
                self.ensure_caret_visible();
                self.base.mark_dirty();
            }
            Key::Escape => {
                ctx.release_focus();
            }
            _ => {}
        }
    }

    fn tick(&mut self, dt: f32) {
        self.blink_time += dt;
        self.update_caret_blink();
    }

    fn render(&self, list: &mut CommandList) {
        let w = self.base.width;
        let h = self.base.height;
        let m = &self.theme.metrics;

        list.fill_rect(Rect::from_size(w, h), self.theme.background);
        list.stroke_rect(Rect::from_size(w, h), self.theme.border);

        let sel = self.state.selection();
        if self.base.focused && !sel.is_empty() {
            let right = (w - m.side_margin).max(m.side_margin);
            let sx0 = self.char_to_pixel(sel.min(), true).clamp(m.side_margin, right);
            let sx1 = self.char_to_pixel(sel.max(), true).clamp(m.side_margin, right);

            if sx0 != sx1 {
                list.fill_rect(
                    Rect::new(sx0, m.top_margin, sx1 - sx0, h - m.top_margin * 2),
                    self.theme.selection_background,
                );
            }
        }

        let clip = Rect::new(m.side_margin, 0, w - m.side_margin * 2, h);
        list.clipped_text(
            self.state.text(),
            m.side_margin - self.scroll_px,
            self.theme.foreground,
            clip,
        );

        if self.base.focused && self.blink_visible {
            let cx = self.char_to_pixel(self.state.caret(), true);
            list.draw_line(
                Point::new(cx, m.top_margin),
                Point::new(cx, h - m.top_margin),
                self.theme.caret,
            );
        }
    }
}

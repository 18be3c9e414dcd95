//! Popup context menu.
//!
//! A vertical list of options, each with an optional check/radio marker, a
//! separator line above it, and a callback. The menu asks its host to
//! dismiss the popup when an option is chosen or Escape is pressed; it never
//! closes itself.

use std::rc::Rc;

use crate::command::CommandList;
use crate::control::{set_and_mark_dirty, Control, ControlBase};
use crate::event::{EventCtx, Key, KeyEvent, PointerButton, PointerEvent};
use crate::font::FontMetrics;
use crate::geometry::{Point, Rect};
use crate::theme::Theme;

/// Check/radio marker drawn in an option's icon slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckState {
    #[default]
    None,
    Checked,
    Unchecked,
    Radio,
}

/// One menu entry.
pub struct MenuOption {
    label: String,
    check: CheckState,
    /// Draw a separator line above this option.
    separator: bool,
    on_select: Box<dyn FnMut()>,
}

impl MenuOption {
    pub fn new(label: &str, on_select: impl FnMut() + 'static) -> Self {
        Self {
            label: label.to_string(),
            check: CheckState::None,
            separator: false,
            on_select: Box::new(on_select),
        }
    }

    pub fn with_check(mut self, check: CheckState) -> Self {
        self.check = check;
        self
    }

    pub fn with_separator(mut self) -> Self {
        self.separator = true;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

pub struct ContextMenu {
    base: ControlBase,
    options: Vec<MenuOption>,
    hovered: Option<usize>,
    theme: Rc<Theme>,
}

impl ContextMenu {
    /// Build a menu around its options; width follows the widest label.
    pub fn new(options: Vec<MenuOption>, metrics: &dyn FontMetrics, theme: Rc<Theme>) -> Self {
        let m = &theme.metrics;

        let mut label_width = 0;
        for option in &options {
            label_width = label_width.max(metrics.measure_width(&option.label));
        }
        let width = (label_width + m.menu_text_x).max(m.menu_min_width) + m.menu_icon_x;
        let height = options.len() as i32 * m.menu_item_height;

        Self {
            base: ControlBase::new(width, height),
            options,
            hovered: None,
            theme,
        }
    }

    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    pub fn hovered_index(&self) -> Option<usize> {
        self.hovered
    }

    /// Map a local position to an option index.
    fn option_at(&self, x: i32, y: i32) -> Option<usize> {
        if self.options.is_empty() || x < 0 || y < 0 || x >= self.base.width || y >= self.base.height
        {
            return None;
        }
        let idx = (y / self.theme.metrics.menu_item_height) as usize;
        Some(idx.min(self.options.len() - 1))
    }

    fn set_hovered(&mut self, idx: Option<usize>) {
        set_and_mark_dirty(&mut self.base, &mut self.hovered, idx);
    }

    /// Fire the option's callback and ask the host to close the popup.
    fn choose(&mut self, ctx: &mut EventCtx, idx: usize) {
        tracing::trace!(idx, label = %self.options[idx].label, "menu option chosen");
        ctx.dismiss_popup();
        self.base.mark_dirty();
        (self.options[idx].on_select)();
    }
}

impl Control for ContextMenu {
    fn base(&self) -> &ControlBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ControlBase {
        &mut self.base
    }

    fn on_pointer_down(&mut self, ctx: &mut EventCtx, ev: &PointerEvent) {
        if ev.button != PointerButton::Primary {
            return;
        }
        let idx = self.option_at(ev.x, ev.y);
        self.set_hovered(idx);
        if let Some(idx) = idx {
            self.choose(ctx, idx);
        }
    }

    fn on_pointer_move(&mut self, _ctx: &mut EventCtx, x: i32, y: i32) {
        let idx = self.option_at(x, y);
        self.set_hovered(idx);
    }

    fn on_pointer_leave(&mut self, _ctx: &mut EventCtx) {
        self.set_hovered(None);
    }

    fn on_key_down(&mut self, ctx: &mut EventCtx, ev: &KeyEvent) {
        match ev.key {
            Key::Escape => {
                ctx.dismiss_popup();
            }
            Key::Enter => {
                if let Some(idx) = self.hovered {
                    self.choose(ctx, idx);
                }
            }
            // Arrows enter the list at its edges when nothing is hovered yet
            Key::Up if !self.options.is_empty() => {
                let idx = match self.hovered {
                    Some(i) => i.saturating_sub(1),
                    None => self.options.len() - 1,
                };
                self.set_hovered(Some(idx));
            }
            Key::Down if !self.options.is_empty() => {
                let idx = match self.hovered {
                    Some(i) => (i + 1).min(self.options.len() - 1),
                    None => 0,
                };
                self.set_hovered(Some(idx));
            }
            _ => {}
        }
    }

    fn render(&self, list: &mut CommandList) {
        // Contract: a menu is never shown without options.
        debug_assert!(!self.options.is_empty());

        let w = self.base.width;
        let m = &self.theme.metrics;
        let item_h = m.menu_item_height;

        list.fill_rect(Rect::from_size(w, self.base.height), self.theme.background);
        list.stroke_rect(Rect::from_size(w, self.base.height), self.theme.border);

        for (i, option) in self.options.iter().enumerate() {
            let y = i as i32 * item_h;
            let hovered = self.hovered == Some(i);

            if hovered {
                list.fill_rect(
                    Rect::new(0, y, w, item_h),
                    self.theme.menu_hover_background,
                );
            }

            if option.separator {
                list.draw_line(
                    Point::new(0, y),
                    Point::new(w, y),
                    self.theme.border,
                );
            }

            // Check/radio markers are built from primitives; there is no
            // bitmap command in the sink.
            let marker_color = if hovered {
                self.theme.menu_hover_foreground
            } else {
                self.theme.foreground
            };
            let mx = m.menu_icon_x;
            let my = y + item_h / 2;
            match option.check {
                CheckState::None => {}
                CheckState::Checked => {
                    list.draw_line(
                        Point::new(mx, my),
                        Point::new(mx + 3, my + 3),
                        marker_color,
                    );
                    list.draw_line(
                        Point::new(mx + 3, my + 3),
                        Point::new(mx + 9, my - 4),
                        marker_color,
                    );
                }
                CheckState::Unchecked => {
                    list.stroke_rect(Rect::new(mx, my - 4, 9, 9), marker_color);
                }
                CheckState::Radio => {
                    list.fill_rect(Rect::new(mx + 2, my - 2, 5, 5), marker_color);
                }
            }

            list.clipped_text(
                &option.label,
                m.menu_text_x,
                marker_color,
                Rect::new(0, y, w, item_h),
            );
        }
    }
}

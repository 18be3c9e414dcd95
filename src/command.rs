//! Retained draw command list.
//!
//! Controls render by appending primitives to a [`CommandList`]; the graphics
//! backend walks the list afterwards and rasterizes it. Nothing here touches
//! pixels, so command production is cheap and fully testable.

use crate::geometry::{Point, Rect};
use crate::theme::Color;

/// A single draw primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCmd {
    /// Solid rectangle fill.
    FillRect { rect: Rect, color: Color },
    /// 1px rectangle outline.
    StrokeRect { rect: Rect, color: Color },
    /// 1px line between two points.
    DrawLine { from: Point, to: Point, color: Color },
    /// Single line of text, vertically centered in and clipped to `clip`.
    /// `origin_x` may lie left of the clip rect when the text is scrolled.
    ClippedText {
        text: String,
        origin_x: i32,
        color: Color,
        clip: Rect,
    },
}

/// An ordered list of draw primitives produced by one render pass.
#[derive(Debug, Default, Clone)]
pub struct CommandList {
    cmds: Vec<DrawCmd>,
}

impl CommandList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.cmds.push(DrawCmd::FillRect { rect, color });
    }

    pub fn stroke_rect(&mut self, rect: Rect, color: Color) {
        self.cmds.push(DrawCmd::StrokeRect { rect, color });
    }

    pub fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        self.cmds.push(DrawCmd::DrawLine { from, to, color });
    }

    pub fn clipped_text(&mut self, text: &str, origin_x: i32, color: Color, clip: Rect) {
        self.cmds.push(DrawCmd::ClippedText {
            text: text.to_string(),
            origin_x,
            color,
            clip,
        });
    }

    /// Drop all recorded commands, keeping the allocation for the next frame.
    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawCmd> {
        self.cmds.iter()
    }

    pub fn commands(&self) -> &[DrawCmd] {
        &self.cmds
    }
}

impl<'a> IntoIterator for &'a CommandList {
    type Item = &'a DrawCmd;
    type IntoIter = std::slice::Iter<'a, DrawCmd>;

    fn into_iter(self) -> Self::IntoIter {
        self.cmds.iter()
    }
}

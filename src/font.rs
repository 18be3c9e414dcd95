//! Font metrics boundary between controls and the text rasterizer.
//!
//! Controls never rasterize glyphs; they only need horizontal metrics to map
//! between character indices and pixel offsets. The [`FontMetrics`] trait is
//! that boundary. [`FontdueMetrics`] backs it with a real font; [`FixedMetrics`]
//! gives deterministic advances for tests and headless layout.

use std::cell::RefCell;
use std::collections::HashMap;

use anyhow::{anyhow, Result};
use fontdue::{Font, FontSettings};

/// Horizontal font metrics queries used by the controls.
pub trait FontMetrics {
    /// Width of `text` in pixels when rendered on one line.
    fn measure_width(&self, text: &str) -> i32;

    /// The character index nearest to `pixel_offset` within `text`.
    ///
    /// Rounds to the nearest glyph boundary: an offset past a glyph's midpoint
    /// maps after it, so a click on the right half of a character places the
    /// caret behind that character. Offsets at or below zero map to 0; offsets
    /// past the end of the text map to `text.chars().count()`.
    fn char_index_for_pixel(&self, text: &str, pixel_offset: i32) -> usize;

    /// Whether the font can render `ch` at all.
    fn has_glyph(&self, ch: char) -> bool;
}

/// Walk per-character advances, returning the boundary nearest to `pixel_offset`.
fn index_for_pixel(advances: impl Iterator<Item = f32>, pixel_offset: i32) -> usize {
    if pixel_offset <= 0 {
        return 0;
    }
    let target = pixel_offset as f32;
    let mut cursor = 0.0f32;
    let mut count = 0;
    for (i, advance) in advances.enumerate() {
        if target < cursor + advance * 0.5 {
            return i;
        }
        cursor += advance;
        count = i + 1;
    }
    count
}

/// Font metrics backed by a `fontdue` font at a fixed pixel size.
///
/// Advances are cached per character; the cache uses interior mutability
/// because the whole toolkit is single-threaded (one frame loop, no sharing
/// across threads).
pub struct FontdueMetrics {
    font: Font,
    px: f32,
    advances: RefCell<HashMap<char, f32>>,
}

impl FontdueMetrics {
    /// Load a font from raw bytes (TTF/OTF) at the given pixel size.
    pub fn from_bytes(bytes: &[u8], px: f32) -> Result<Self> {
        let font = Font::from_bytes(
            bytes,
            FontSettings {
                scale: px,
                ..FontSettings::default()
            },
        )
        .map_err(|e| anyhow!("failed to parse font: {}", e))?;

        tracing::debug!(px, "loaded font for metrics");

        Ok(Self {
            font,
            px,
            advances: RefCell::new(HashMap::new()),
        })
    }

    /// The pixel size metrics are computed at.
    pub fn px(&self) -> f32 {
        self.px
    }

    fn advance(&self, ch: char) -> f32 {
        if let Some(&adv) = self.advances.borrow().get(&ch) {
            return adv;
        }
        let adv = self.font.metrics(ch, self.px).advance_width;
        self.advances.borrow_mut().insert(ch, adv);
        adv
    }
}

impl FontMetrics for FontdueMetrics {
    fn measure_width(&self, text: &str) -> i32 {
        let width: f32 = text.chars().map(|ch| self.advance(ch)).sum();
        width.round() as i32
    }

    fn char_index_for_pixel(&self, text: &str, pixel_offset: i32) -> usize {
        index_for_pixel(text.chars().map(|ch| self.advance(ch)), pixel_offset)
    }

    fn has_glyph(&self, ch: char) -> bool {
        self.font.lookup_glyph_index(ch) != 0
    }
}

/// Monospace metrics with a constant advance per character.
///
/// Deterministic stand-in for a real font: tests and headless layout use it to
/// get exact pixel positions without loading font bytes.
#[derive(Debug, Clone, Copy)]
pub struct FixedMetrics {
    advance: i32,
}

impl FixedMetrics {
    pub const fn new(advance: i32) -> Self {
        Self { advance }
    }

    pub const fn advance(&self) -> i32 {
        self.advance
    }
}

impl FontMetrics for FixedMetrics {
    fn measure_width(&self, text: &str) -> i32 {
        text.chars().count() as i32 * self.advance
    }

    fn char_index_for_pixel(&self, text: &str, pixel_offset: i32) -> usize {
        let len = text.chars().count();
        index_for_pixel(
            std::iter::repeat(self.advance as f32).take(len),
            pixel_offset,
        )
    }

    fn has_glyph(&self, ch: char) -> bool {
        // A monospace stand-in renders any printable character.
        !ch.is_control()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_measure_width() {
        let m = FixedMetrics::new(10);
        assert_eq!(m.measure_width(""), 0);
        assert_eq!(m.measure_width("hello"), 50);
    }

    #[test]
    fn test_fixed_char_index_rounds_to_nearest() {
        let m = FixedMetrics::new(10);
        let text = "hello";

        // Left half of the first glyph
        assert_eq!(m.char_index_for_pixel(text, 0), 0);
        assert_eq!(m.char_index_for_pixel(text, 4), 0);
        // Right half of the first glyph maps past it
        assert_eq!(m.char_index_for_pixel(text, 5), 1);
        assert_eq!(m.char_index_for_pixel(text, 9), 1);
        // Middle of the text
        assert_eq!(m.char_index_for_pixel(text, 22), 2);
        assert_eq!(m.char_index_for_pixel(text, 27), 3);
    }

    #[test]
    fn test_fixed_char_index_clamps() {
        let m = FixedMetrics::new(10);
        assert_eq!(m.char_index_for_pixel("hello", -30), 0);
        assert_eq!(m.char_index_for_pixel("hello", 49), 5);
        assert_eq!(m.char_index_for_pixel("hello", 500), 5);
        assert_eq!(m.char_index_for_pixel("", 10), 0);
    }

    #[test]
    fn test_fixed_has_glyph() {
        let m = FixedMetrics::new(8);
        assert!(m.has_glyph('a'));
        assert!(m.has_glyph(' '));
        assert!(!m.has_glyph('\n'));
        assert!(!m.has_glyph('\x08'));
    }
}

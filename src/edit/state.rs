//! The single-line text editing state machine.
//!
//! [`EditState`] owns the authoritative text, the caret, and the selection,
//! all in character-index space (UTF-8 safe: byte offsets never leak out).
//! It is deliberately free of pixels, fonts, and scrolling — the text box
//! control layers those on top — so every rule here is testable with plain
//! strings.
//!
//! All index math clamps instead of failing; boundary deletes are no-ops.

use super::selection::{extend_span, Span};
use super::word::{scan_word_left, scan_word_right, word_span};

/// Editable text with caret and selection.
#[derive(Debug, Clone, Default)]
pub struct EditState {
    content: String,
    caret: usize,
    selection: Span,
}

impl EditState {
    pub fn new(text: &str) -> Self {
        Self {
            content: text.to_string(),
            caret: 0,
            selection: Span::EMPTY,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn text(&self) -> &str {
        &self.content
    }

    pub fn len_chars(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Caret position in `[0, len_chars()]`.
    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn selection(&self) -> Span {
        self.selection
    }

    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    /// The text before character index `c` (for width measurement).
    pub fn prefix(&self, c: usize) -> &str {
        &self.content[..self.char_to_byte(c)]
    }

    /// Convert char offset to byte offset
    fn char_to_byte(&self, char_offset: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_offset)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    fn remove_char_range(&mut self, start: usize, end: usize) {
        let start_byte = self.char_to_byte(start);
        let end_byte = self.char_to_byte(end);
        self.content.replace_range(start_byte..end_byte, "");
    }

    fn check_invariants(&self) {
        debug_assert!(self.caret <= self.len_chars());
        debug_assert!(self.selection.max() <= self.len_chars());
    }

    // ── Wholesale replacement ────────────────────────────────────────

    /// Replace the content, resetting caret and selection to the start.
    pub fn set_text(&mut self, text: &str) {
        self.content.clear();
        self.content.push_str(text);
        self.caret = 0;
        self.selection = Span::EMPTY;
    }

    // ── Caret and selection ──────────────────────────────────────────

    /// Place the caret, clamped into range. Leaves the selection alone.
    pub fn caret_to(&mut self, c: usize) {
        self.caret = c.min(self.len_chars());
    }

    /// Set the selection explicitly, clamped into range. Leaves the caret alone.
    pub fn set_selection(&mut self, start: usize, len: usize) {
        let total = self.len_chars();
        let start = start.min(total);
        self.selection = Span::new(start, len.min(total - start));
    }

    /// Clear the selection. Idempotent.
    pub fn clear_selection(&mut self) {
        self.selection = Span::EMPTY;
    }

    pub fn select_all(&mut self) {
        let len = self.len_chars();
        self.selection = Span::new(0, len);
        self.caret = len;
    }

    /// Select the word around character index `c` (double-click), placing the
    /// caret at the span's right edge.
    pub fn select_word_at(&mut self, c: usize) {
        let span = word_span(&self.content, c.min(self.len_chars()));
        self.selection = span;
        self.caret = span.max();
        self.check_invariants();
    }

    /// Drag-selection update: caret follows `c`, selection spans from the
    /// gesture's anchor to `c` in either direction.
    pub fn drag_select(&mut self, anchor: usize, c: usize) {
        let len = self.len_chars();
        let c = c.min(len);
        let anchor = anchor.min(len);
        self.caret = c;
        self.selection = Span::from_bounds(anchor, c);
    }

    // ── Caret movement ───────────────────────────────────────────────

    /// Move the caret one character or one word to the left.
    /// With `extend`, the selection grows/shrinks around the move; without,
    /// it is cleared.
    pub fn move_left(&mut self, by_word: bool, extend: bool) {
        let target = if by_word {
            scan_word_left(&self.content, self.caret)
        } else {
            self.caret.saturating_sub(1)
        };
        self.apply_move(target, extend);
    }

    /// Move the caret one character or one word to the right.
    pub fn move_right(&mut self, by_word: bool, extend: bool) {
        let target = if by_word {
            scan_word_right(&self.content, self.caret)
        } else {
            (self.caret + 1).min(self.len_chars())
        };
        self.apply_move(target, extend);
    }

    fn apply_move(&mut self, new_caret: usize, extend: bool) {
        let prev = self.caret;
        let new_caret = new_caret.min(self.len_chars());
        self.caret = new_caret;

        if extend {
            if self.selection.is_empty() {
                self.selection = Span::from_bounds(prev, new_caret);
            } else {
                let (min, max) =
                    extend_span(prev, new_caret, self.selection.min(), self.selection.max());
                self.selection = Span::new(min, max - min);
            }
        } else {
            self.selection = Span::EMPTY;
        }
        self.check_invariants();
    }

    // ── Editing ──────────────────────────────────────────────────────

    /// Insert a character at the caret, replacing the selection if one exists.
    pub fn insert_char(&mut self, ch: char) {
        self.delete_selection();
        let byte = self.char_to_byte(self.caret);
        self.content.insert(byte, ch);
        self.caret += 1;
        self.check_invariants();
    }

    /// Delete the selection, or the character before the caret.
    /// Returns whether anything changed; Backspace at 0 is a no-op.
    pub fn backspace(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        if self.caret == 0 {
            return false;
        }
        self.caret -= 1;
        self.remove_char_range(self.caret, self.caret + 1);
        self.check_invariants();
        true
    }

    /// Delete the selection, or the character after the caret.
    /// Returns whether anything changed; Delete at the end is a no-op.
    pub fn delete_forward(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        if self.caret >= self.len_chars() {
            return false;
        }
        self.remove_char_range(self.caret, self.caret + 1);
        self.check_invariants();
        true
    }

    /// Remove the selected range, pulling the caret to the removal point.
    /// Returns false when the selection is empty.
    pub fn delete_selection(&mut self) -> bool {
        if self.selection.is_empty() {
            return false;
        }

        let start = self.selection.min();
        let end = self.selection.max();
        self.remove_char_range(start, end);

        if self.caret >= end {
            self.caret -= end - start;
        } else if self.caret > start {
            self.caret = start;
        }

        self.selection = Span::EMPTY;
        self.check_invariants();
        true
    }
}

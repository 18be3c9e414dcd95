//! Benchmarks for the hot editing operations
//!
//! Run with: cargo bench edit_ops

use gadget::edit::EditState;
use gadget::font::{FixedMetrics, FontMetrics};

fn main() {
    divan::main();
}

fn long_line(words: usize) -> String {
    "lorem ipsum dolor sit amet ".repeat(words / 5)
}

// ============================================================================
// Caret movement
// ============================================================================

#[divan::bench(args = [100, 1000, 5000])]
fn word_jump_across_line(words: usize) {
    let mut state = EditState::new(&long_line(words));
    while state.caret() < state.len_chars() {
        state.move_right(true, false);
    }
    divan::black_box(state.caret());
}

#[divan::bench]
fn char_walk_with_selection() {
    let mut state = EditState::new(&long_line(200));
    for _ in 0..500 {
        state.move_right(false, true);
    }
    divan::black_box(state.selection());
}

// ============================================================================
// Editing churn
// ============================================================================

#[divan::bench]
fn insert_delete_churn() {
    let mut state = EditState::new("");
    for _ in 0..200 {
        state.insert_char('x');
    }
    for _ in 0..200 {
        state.backspace();
    }
    divan::black_box(state.len_chars());
}

#[divan::bench]
fn select_all_replace() {
    let mut state = EditState::new(&long_line(100));
    state.select_all();
    state.insert_char('y');
    divan::black_box(state.text().len());
}

// ============================================================================
// Pixel mapping
// ============================================================================

#[divan::bench(args = [80, 500, 2000])]
fn pixel_to_char_mapping(chars: usize) {
    let metrics = FixedMetrics::new(9);
    let text: String = "x".repeat(chars);
    for px in (0..chars as i32 * 9).step_by(37) {
        divan::black_box(metrics.char_index_for_pixel(&text, px));
    }
}

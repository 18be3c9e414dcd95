//! Text editing core: caret, selection, and word-boundary rules.
//!
//! The modules here are pure index-space logic over plain strings:
//!
//! - [`selection`]: the selection [`Span`] and the shift-move extend/shrink
//!   rule as a standalone function
//! - [`word`]: whitespace-based word boundary scans
//! - [`state`]: [`EditState`], the single-line editing state machine
//!
//! Pixels, fonts, scrolling, and blinking live in the text box control, not
//! here.

mod selection;
mod state;
mod word;

pub use selection::{extend_span, Span};
pub use state::EditState;
pub use word::{scan_word_left, scan_word_right, word_span};

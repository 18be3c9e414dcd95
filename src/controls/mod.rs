//! Concrete controls, each in its own file.

mod checkbox;
mod context_menu;
mod link_label;
mod text_box;

pub use checkbox::Checkbox;
pub use context_menu::{CheckState, ContextMenu, MenuOption};
pub use link_label::LinkLabel;
pub use text_box::TextBox;

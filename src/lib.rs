//! gadget - a lightweight retained-mode control library
//!
//! Hand-rolled interactive controls (text box, context menu, link label,
//! checkbox) that render through a retained command list instead of touching
//! pixels. The host owns the window, the event loop, focus, and pointer
//! capture; controls receive routed events, raise a dirty flag when their
//! observable state changes, and emit draw primitives on demand.
//!
//! Everything is single-threaded and event-driven: input events in arrival
//! order, then one `tick` per frame, then `render`.

pub mod command;
pub mod control;
pub mod controls;
pub mod edit;
pub mod event;
pub mod font;
pub mod geometry;
pub mod theme;
pub mod winit_adapter;

// Re-export commonly used types
pub use command::{CommandList, DrawCmd};
pub use control::{set_and_mark_dirty, Control, ControlBase};
pub use controls::{CheckState, Checkbox, ContextMenu, LinkLabel, MenuOption, TextBox};
pub use event::{
    CursorIcon, EventCtx, HostRequest, Key, KeyEvent, Modifiers, PointerButton, PointerEvent,
};
pub use font::{FixedMetrics, FontMetrics, FontdueMetrics};
pub use geometry::{Point, Rect, Size};
pub use theme::{Color, Theme};

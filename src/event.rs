//! Input events and the host container interface.
//!
//! The host (window, dialog, popup layer) owns the event loop, focus, and
//! pointer capture. Controls receive already-routed events in control-local
//! coordinates and talk back to the host exclusively through [`EventCtx`]:
//! every hook gets a context, pushes [`HostRequest`]s into it, and the host
//! drains them after the hook returns. No control calls into the host
//! directly.

/// Physical pointer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// A pointer press/release in control-local coordinates.
#[derive(Debug, Clone, Copy)]
pub struct PointerEvent {
    pub x: i32,
    pub y: i32,
    pub button: PointerButton,
}

impl PointerEvent {
    pub const fn new(x: i32, y: i32, button: PointerButton) -> Self {
        Self { x, y, button }
    }

    /// Primary-button event, the common case.
    pub const fn primary(x: i32, y: i32) -> Self {
        Self::new(x, y, PointerButton::Primary)
    }
}

/// Keyboard modifier state, packed into a byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CTRL: Modifiers = Modifiers(0b0001);
    pub const SHIFT: Modifiers = Modifiers(0b0010);
    pub const ALT: Modifiers = Modifiers(0b0100);
    pub const META: Modifiers = Modifiers(0b1000);

    /// Create modifiers from individual flags
    pub const fn new(ctrl: bool, shift: bool, alt: bool, meta: bool) -> Self {
        let mut bits = 0u8;
        if ctrl {
            bits |= 0b0001;
        }
        if shift {
            bits |= 0b0010;
        }
        if alt {
            bits |= 0b0100;
        }
        if meta {
            bits |= 0b1000;
        }
        Modifiers(bits)
    }

    pub const fn ctrl(&self) -> bool {
        self.0 & 0b0001 != 0
    }

    pub const fn shift(&self) -> bool {
        self.0 & 0b0010 != 0
    }

    pub const fn alt(&self) -> bool {
        self.0 & 0b0100 != 0
    }

    pub const fn meta(&self) -> bool {
        self.0 & 0b1000 != 0
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Modifiers) -> Modifiers {
        Modifiers(self.0 | rhs.0)
    }
}

/// The keys the controls react to. Anything else never reaches them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Enter,
    Backspace,
    Delete,
    Escape,
    /// A character-producing key, with the character it produces.
    Char(char),
}

/// A key press (or release) with its modifier state.
#[derive(Debug, Clone, Copy)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub const fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Key press without modifiers.
    pub const fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::NONE)
    }
}

/// Pointer cursor shape hints a control may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorIcon {
    Default,
    IBeam,
    Hand,
}

/// Requests a control makes of its host container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostRequest {
    /// Route all pointer events to this control until released (drag gesture).
    CapturePointer,
    /// End pointer capture.
    ReleasePointer,
    /// Give up keyboard focus (Escape in a text box).
    ReleaseFocus,
    /// Change the pointer cursor shape.
    SetCursor(CursorIcon),
    /// Open an external URI (link label).
    OpenUri(String),
    /// Close the popup hosting this control (context menu dismissal).
    DismissPopup,
}

/// Per-dispatch context handed to every event hook.
///
/// The host creates one, passes it to the hook, and drains the accumulated
/// requests afterwards. Requests are processed in the order they were pushed.
#[derive(Debug, Default)]
pub struct EventCtx {
    requests: Vec<HostRequest>,
}

impl EventCtx {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn capture_pointer(&mut self) {
        self.requests.push(HostRequest::CapturePointer);
    }

    pub fn release_pointer(&mut self) {
        self.requests.push(HostRequest::ReleasePointer);
    }

    pub fn release_focus(&mut self) {
        self.requests.push(HostRequest::ReleaseFocus);
    }

    pub fn set_cursor(&mut self, icon: CursorIcon) {
        self.requests.push(HostRequest::SetCursor(icon));
    }

    pub fn open_uri(&mut self, uri: &str) {
        self.requests.push(HostRequest::OpenUri(uri.to_string()));
    }

    pub fn dismiss_popup(&mut self) {
        self.requests.push(HostRequest::DismissPopup);
    }

    /// Requests accumulated so far, in push order.
    pub fn requests(&self) -> &[HostRequest] {
        &self.requests
    }

    /// Drain the accumulated requests for processing.
    pub fn take_requests(&mut self) -> Vec<HostRequest> {
        std::mem::take(&mut self.requests)
    }
}

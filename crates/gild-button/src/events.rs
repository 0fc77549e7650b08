//! Input events delivered by the host.
//!
//! The host's event dispatch translates its native pointer and keyboard
//! events into these types and feeds them to
//! [`FlatButton::event`](crate::FlatButton::event). Positions are in the
//! control's local coordinate space; the host performs hit-testing (via
//! [`FlatButton::hit_test`](crate::FlatButton::hit_test)) and routing.

use gild_core::Point;

/// Pointer buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary button (usually left).
    Primary,
    /// Secondary button (usually right).
    Secondary,
    /// Middle button.
    Middle,
}

/// Keyboard modifiers held during an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyboardModifiers {
    pub shift: bool,
    pub control: bool,
    pub alt: bool,
    pub meta: bool,
}

/// Keys the control reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Activates the control while focused.
    Space,
    /// Activates the control while focused.
    Enter,
    /// Cancels an outstanding keyboard press.
    Escape,
}

/// Common data for all control events.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventBase {
    /// Whether the event has been accepted (handled).
    accepted: bool,
}

impl EventBase {
    /// Create a new event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event, preventing further propagation.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, allowing further propagation.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

/// Pointer press event.
#[derive(Debug, Clone, Copy)]
pub struct PointerPressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was pressed.
    pub button: PointerButton,
    /// Position in control-local coordinates.
    pub local_pos: Point,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}

impl PointerPressEvent {
    /// Create a new pointer press event.
    pub fn new(button: PointerButton, local_pos: Point, modifiers: KeyboardModifiers) -> Self {
        Self {
            base: EventBase::new(),
            button,
            local_pos,
            modifiers,
        }
    }
}

/// Pointer release event.
#[derive(Debug, Clone, Copy)]
pub struct PointerReleaseEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was released.
    pub button: PointerButton,
    /// Position in control-local coordinates.
    pub local_pos: Point,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}

impl PointerReleaseEvent {
    /// Create a new pointer release event.
    pub fn new(button: PointerButton, local_pos: Point, modifiers: KeyboardModifiers) -> Self {
        Self {
            base: EventBase::new(),
            button,
            local_pos,
            modifiers,
        }
    }
}

/// Pointer enter event, sent when the pointer enters the control area.
#[derive(Debug, Clone, Copy)]
pub struct PointerEnterEvent {
    /// Base event data.
    pub base: EventBase,
    /// The position where the pointer entered.
    pub local_pos: Point,
}

impl PointerEnterEvent {
    /// Create a new pointer enter event.
    pub fn new(local_pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            local_pos,
        }
    }
}

/// Pointer leave event, sent when the pointer leaves the control area.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerLeaveEvent {
    /// Base event data.
    pub base: EventBase,
}

impl PointerLeaveEvent {
    /// Create a new pointer leave event.
    pub fn new() -> Self {
        Self {
            base: EventBase::new(),
        }
    }
}

/// Key press event.
#[derive(Debug, Clone, Copy)]
pub struct KeyPressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The key that was pressed.
    pub key: Key,
    /// Whether this is an auto-repeat of a held key.
    pub is_repeat: bool,
}

impl KeyPressEvent {
    /// Create a new key press event.
    pub fn new(key: Key, is_repeat: bool) -> Self {
        Self {
            base: EventBase::new(),
            key,
            is_repeat,
        }
    }
}

/// Key release event.
#[derive(Debug, Clone, Copy)]
pub struct KeyReleaseEvent {
    /// Base event data.
    pub base: EventBase,
    /// The key that was released.
    pub key: Key,
}

impl KeyReleaseEvent {
    /// Create a new key release event.
    pub fn new(key: Key) -> Self {
        Self {
            base: EventBase::new(),
            key,
        }
    }
}

/// All events the control handles, for single-entry-point dispatch.
#[derive(Debug, Clone)]
pub enum ControlEvent {
    PointerPress(PointerPressEvent),
    PointerRelease(PointerReleaseEvent),
    PointerEnter(PointerEnterEvent),
    PointerLeave(PointerLeaveEvent),
    KeyPress(KeyPressEvent),
    KeyRelease(KeyReleaseEvent),
}

impl ControlEvent {
    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        match self {
            Self::PointerPress(e) => e.base.is_accepted(),
            Self::PointerRelease(e) => e.base.is_accepted(),
            Self::PointerEnter(e) => e.base.is_accepted(),
            Self::PointerLeave(e) => e.base.is_accepted(),
            Self::KeyPress(e) => e.base.is_accepted(),
            Self::KeyRelease(e) => e.base.is_accepted(),
        }
    }

    /// Accept the event, preventing further propagation.
    pub fn accept(&mut self) {
        match self {
            Self::PointerPress(e) => e.base.accept(),
            Self::PointerRelease(e) => e.base.accept(),
            Self::PointerEnter(e) => e.base.accept(),
            Self::PointerLeave(e) => e.base.accept(),
            Self::KeyPress(e) => e.base.accept(),
            Self::KeyRelease(e) => e.base.accept(),
        }
    }
}

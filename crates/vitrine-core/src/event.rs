#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! This module defines the standard input events consumed by the view
//! engine. The hosting page translates its native pointer/wheel/resize
//! callbacks into these before handing them to the gesture adapter. All
//! events derive `Clone` and `PartialEq` for use in tests.
//!
//! # Design Notes
//!
//! - Pointer coordinates are in viewport pixels, origin at top-left.
//! - Hover targets are item indices resolved by the host's hit testing;
//!   the engine never hit-tests itself.
//! - `Modifiers` use bitflags for easy combination.

use bitflags::bitflags;

/// Canonical input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A pointer button was pressed.
    PointerDown(PointerEvent),
    /// The pointer moved (pressed or not).
    PointerMove(PointerEvent),
    /// A pointer button was released.
    PointerUp(PointerEvent),
    /// Mouse wheel / trackpad scroll.
    Wheel(WheelEvent),
    /// The pointer entered an item, or left all items (`None`).
    ///
    /// Successive `Some` values with no intervening `None` are normal: the
    /// host fires enter-only sequences when the pointer moves directly from
    /// one row to an adjacent one.
    HoverTarget(Option<usize>),
    /// The viewport was resized.
    Resize {
        /// New viewport width in pixels.
        width: f32,
        /// New viewport height in pixels.
        height: f32,
    },
}

/// A pointer (mouse/touch) event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Horizontal position in viewport pixels.
    pub x: f32,
    /// Vertical position in viewport pixels.
    pub y: f32,
    /// Which button is involved (meaningful for down/up).
    pub button: PointerButton,
    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Create a primary-button pointer event with no modifiers.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            button: PointerButton::Primary,
            modifiers: Modifiers::NONE,
        }
    }

    /// Set the button (builder).
    #[must_use]
    pub const fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    /// Set the modifiers (builder).
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// A wheel/scroll event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelEvent {
    /// Vertical scroll delta in pixels (positive = scroll down).
    pub delta_y: f32,
    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
}

impl WheelEvent {
    /// Create a wheel event with no modifiers.
    #[must_use]
    pub const fn new(delta_y: f32) -> Self {
        Self {
            delta_y,
            modifiers: Modifiers::NONE,
        }
    }
}

/// Pointer buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerButton {
    /// Left mouse button / single touch.
    #[default]
    Primary,
    /// Right mouse button.
    Secondary,
    /// Middle mouse button.
    Auxiliary,
}

bitflags! {
    /// Modifier keys held during an input event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0;
        /// Shift key.
        const SHIFT = 1 << 0;
        /// Control key.
        const CTRL  = 1 << 1;
        /// Alt/Option key.
        const ALT   = 1 << 2;
        /// Meta/Command/Windows key.
        const META  = 1 << 3;
    }
}

//! A themeable, layer-backed toggle button control for custom-drawn UI
//! hosts.
//!
//! This crate provides [`FlatButton`], a drop-in replacement for a native
//! button widget. The control owns three sublayer descriptions (surface,
//! title, icon) that a host compositor renders, and answers the usual
//! custom-control capability set: layout, hit-testing, pointer/key event
//! handling, and intrinsic size reporting.
//!
//! # Overview
//!
//! - **Appearance-adaptive styling**: every color is stored per light/dark
//!   appearance with optional active-state variants; resolution picks
//!   exactly one stored value ([`style::AdaptiveColor`]).
//! - **Surface styling**: rounded corners with per-corner masking, border,
//!   shadow with active-state overrides.
//! - **Content layout**: title and icon arranged left/center/right with
//!   configurable margins, pixel-snapped frames.
//! - **Interaction**: press-and-release toggle with pressed-state preview,
//!   keyboard activation, and disabled pass-through hit-testing.
//! - **Animation**: optional timed color transitions on state change, with
//!   separate durations for entering and leaving the active state.
//!
//! # Integrating with a host
//!
//! The host owns the event loop and the renderer. Per frame it:
//!
//! 1. Delivers pointer/key events via [`FlatButton::event`], using
//!    [`FlatButton::hit_test`] for routing.
//! 2. Calls [`FlatButton::layout_if_needed`] when the control reports
//!    [`FlatButton::needs_layout`].
//! 3. Reads the three sublayers ([`FlatButton::surface`],
//!    [`FlatButton::title_layer`], [`FlatButton::icon_layer`]) and
//!    composites them, sampling each [`layer::AnimatedColor`] until it
//!    settles.
//!
//! The host also pushes the appearance in whenever the system theme
//! changes ([`FlatButton::set_appearance`]); [`Appearance::detect`] reads
//! the OS preference when the `system-theme` feature (default) is enabled.
//!
//! # Example
//!
//! ```
//! use gild_button::prelude::*;
//! use std::time::Duration;
//!
//! let mut button = FlatButton::new("Do It")
//!     .with_corner_radius(4.0)
//!     .with_content_position(ContentPosition::Center);
//!
//! // Light and dark variants in one call, active variants separately.
//! button.set_background_color(Color::from_hex("#e8e8e8").unwrap());
//! button.set_active_background_color_light(Color::from_hex("#0066cc").unwrap());
//! button.set_active_background_color_dark(Color::from_hex("#3399ff").unwrap());
//! button.set_active_duration(Duration::from_millis(150));
//!
//! button.clicked().connect(|&active| {
//!     println!("active: {active}");
//! });
//!
//! button.set_geometry(Rect::new(0.0, 0.0, 120.0, 32.0));
//! button.layout();
//! ```

pub mod animation;
pub mod appearance;
mod base;
mod button;
mod events;
mod geometry;
pub mod icon;
pub mod layer;
pub mod prelude;
pub mod style;
pub mod text;

#[cfg(test)]
mod tests;

pub use appearance::Appearance;
pub use base::ControlBase;
pub use button::FlatButton;
pub use events::{
    ControlEvent, EventBase, Key, KeyPressEvent, KeyReleaseEvent, KeyboardModifiers,
    PointerButton, PointerEnterEvent, PointerLeaveEvent, PointerPressEvent, PointerReleaseEvent,
};
pub use geometry::SizeHint;
pub use icon::{Icon, IconError};

// Re-export the core value types the public API is expressed in.
pub use gild_core::{Color, CornerRadii, Point, Rect, Signal, Size};

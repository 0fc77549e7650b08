//! Core value types and signal/slot system for the Gild button control.
//!
//! This crate provides the foundation pieces shared by the control and its
//! host integration:
//!
//! - **Geometry and color**: [`Point`], [`Size`], [`Rect`], [`CornerRadii`],
//!   [`Color`] — the plain-data vocabulary the control uses to describe its
//!   sublayers to the host compositor.
//! - **Signal/slot system**: [`Signal`] — type-safe callbacks the host
//!   connects to for click, press, release, and toggle notifications.
//!
//! # Signal/Slot Example
//!
//! ```
//! use gild_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {value}");
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```

pub mod signal;
pub mod types;

pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use types::{Color, CornerRadii, Point, Rect, Size};

//! Convenience re-exports for typical hosts.
//!
//! ```
//! use gild_button::prelude::*;
//! ```

pub use crate::appearance::Appearance;
pub use crate::button::FlatButton;
pub use crate::events::{
    ControlEvent, Key, KeyPressEvent, KeyReleaseEvent, KeyboardModifiers, PointerButton,
    PointerEnterEvent, PointerLeaveEvent, PointerPressEvent, PointerReleaseEvent,
};
pub use crate::geometry::SizeHint;
pub use crate::icon::{Icon, IconError};
pub use crate::layer::{AnimatedColor, IconLayer, SurfaceLayer, TextLayer};
pub use crate::style::{
    AdaptiveColor, ButtonStyle, ContentPosition, CornerCurve, CornerMask, ShadowStyle,
};
pub use crate::text::{FixedAdvanceMeasurer, Font, FontFamily, FontStyle, FontWeight, TextMeasurer};

pub use gild_core::{Color, CornerRadii, Point, Rect, Signal, Size};

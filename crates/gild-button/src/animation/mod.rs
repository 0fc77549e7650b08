//! Color transition support for state changes.
//!
//! When the animation flag is enabled, color pushes into the sublayers are
//! timed interpolations between the previous and the newly resolved color;
//! the host samples the layer colors each frame until they settle. When
//! disabled, pushes are immediate assignments.

mod easing;
mod transition;

pub use easing::{Easing, ease};
pub use transition::ColorTransition;

//! Style configuration for the button control.
//!
//! Every styleable attribute is stored per appearance mode (light/dark) and,
//! where it makes sense, per active state. Resolution is a pure function of
//! the current [`Appearance`] and the active/pressed flag; exactly one stored
//! variant is returned, never a blend of the two appearance branches.
//!
//! A [`ButtonStyle`] is a plain value. It can be mutated through the
//! control's setters or built up separately and swapped in atomically with
//! [`FlatButton::set_style`](crate::FlatButton::set_style).

use std::time::Duration;

use gild_core::{Color, CornerRadii};

use crate::appearance::Appearance;

/// Default title color in light appearance (near-black label color).
pub const LABEL_COLOR_LIGHT: Color = Color::new(0.0, 0.0, 0.0, 0.85);

/// Default title color in dark appearance (near-white label color).
pub const LABEL_COLOR_DARK: Color = Color::new(1.0, 1.0, 1.0, 0.85);

/// Horizontal arrangement of title and icon within the control's bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentPosition {
    /// Icon leads at the left edge, title follows after it.
    Left,
    /// Title and icon are centered as a unit (the default).
    #[default]
    Center,
    /// Icon trails flush to the right edge, title sits to its left.
    Right,
}

/// Per-corner rounding enable flags.
///
/// A disabled corner stays sharp regardless of the configured corner radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CornerMask {
    pub top_left: bool,
    pub top_right: bool,
    pub bottom_left: bool,
    pub bottom_right: bool,
}

impl CornerMask {
    /// All four corners rounded.
    pub const ALL: Self = Self {
        top_left: true,
        top_right: true,
        bottom_left: true,
        bottom_right: true,
    };

    /// No corner rounded.
    pub const NONE: Self = Self {
        top_left: false,
        top_right: false,
        bottom_left: false,
        bottom_right: false,
    };

    /// Expand a uniform radius into per-corner radii, zeroing masked-off
    /// corners.
    pub fn radii(self, radius: f32) -> CornerRadii {
        CornerRadii {
            top_left: if self.top_left { radius } else { 0.0 },
            top_right: if self.top_right { radius } else { 0.0 },
            bottom_right: if self.bottom_right { radius } else { 0.0 },
            bottom_left: if self.bottom_left { radius } else { 0.0 },
        }
    }
}

impl Default for CornerMask {
    fn default() -> Self {
        Self::ALL
    }
}

/// How rounded corners are traced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CornerCurve {
    /// Quarter-circle corners.
    Circular,
    /// Continuous ("squircle") corners (the default).
    #[default]
    Continuous,
}

/// A color stored per appearance mode with optional active-state variants.
///
/// Reading resolves exactly one of the up to four stored values based on
/// `(appearance, active)`:
///
/// | appearance | active | returns |
/// |---|---|---|
/// | light | no  | light variant |
/// | light | yes | active light variant, falling back to the light variant |
/// | dark  | no  | dark variant |
/// | dark  | yes | active dark variant, falling back to the dark variant |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptiveColor {
    light: Color,
    dark: Color,
    active_light: Option<Color>,
    active_dark: Option<Color>,
}

impl AdaptiveColor {
    /// Create with the same color for both appearances and no active
    /// variants.
    pub const fn splat(color: Color) -> Self {
        Self {
            light: color,
            dark: color,
            active_light: None,
            active_dark: None,
        }
    }

    /// Create with distinct light and dark variants and no active variants.
    pub const fn new(light: Color, dark: Color) -> Self {
        Self {
            light,
            dark,
            active_light: None,
            active_dark: None,
        }
    }

    /// Set the active variants using builder pattern.
    pub const fn with_active(mut self, light: Color, dark: Color) -> Self {
        self.active_light = Some(light);
        self.active_dark = Some(dark);
        self
    }

    /// Get the light variant.
    pub fn light(&self) -> Color {
        self.light
    }

    /// Get the dark variant.
    pub fn dark(&self) -> Color {
        self.dark
    }

    /// Get the active light variant, if set.
    pub fn active_light(&self) -> Option<Color> {
        self.active_light
    }

    /// Get the active dark variant, if set.
    pub fn active_dark(&self) -> Option<Color> {
        self.active_dark
    }

    /// Set the light variant.
    pub fn set_light(&mut self, color: Color) {
        self.light = color;
    }

    /// Set the dark variant.
    pub fn set_dark(&mut self, color: Color) {
        self.dark = color;
    }

    /// Combined setter: overwrite both appearance variants identically.
    pub fn set_all(&mut self, color: Color) {
        self.light = color;
        self.dark = color;
    }

    /// Set the active light variant.
    pub fn set_active_light(&mut self, color: Color) {
        self.active_light = Some(color);
    }

    /// Set the active dark variant.
    pub fn set_active_dark(&mut self, color: Color) {
        self.active_dark = Some(color);
    }

    /// Combined setter: overwrite both active variants identically.
    pub fn set_active_all(&mut self, color: Color) {
        self.active_light = Some(color);
        self.active_dark = Some(color);
    }

    /// Resolve to exactly one stored variant.
    pub fn resolve(&self, appearance: Appearance, active: bool) -> Color {
        match (appearance, active) {
            (Appearance::Light, false) => self.light,
            (Appearance::Light, true) => self.active_light.unwrap_or(self.light),
            (Appearance::Dark, false) => self.dark,
            (Appearance::Dark, true) => self.active_dark.unwrap_or(self.dark),
        }
    }
}

/// Shadow styling with optional active-state overrides for radius and
/// opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowStyle {
    /// Shadow color per appearance and active state.
    pub color: AdaptiveColor,
    /// Blur radius in logical pixels.
    pub radius: f32,
    /// Opacity in the 0.0-1.0 range.
    pub opacity: f32,
    /// Radius override while active; `None` keeps the base radius.
    pub active_radius: Option<f32>,
    /// Opacity override while active; `None` keeps the base opacity.
    pub active_opacity: Option<f32>,
}

impl ShadowStyle {
    /// Resolve the blur radius for the given state.
    pub fn resolve_radius(&self, active: bool) -> f32 {
        if active {
            self.active_radius.unwrap_or(self.radius)
        } else {
            self.radius
        }
    }

    /// Resolve the opacity for the given state.
    pub fn resolve_opacity(&self, active: bool) -> f32 {
        if active {
            self.active_opacity.unwrap_or(self.opacity)
        } else {
            self.opacity
        }
    }
}

impl Default for ShadowStyle {
    fn default() -> Self {
        Self {
            color: AdaptiveColor::splat(Color::TRANSPARENT)
                .with_active(Color::TRANSPARENT, Color::TRANSPARENT),
            radius: 0.0,
            opacity: 0.0,
            active_radius: None,
            active_opacity: None,
        }
    }
}

/// The complete style configuration of a button.
///
/// All fields are plain data; swapping a whole value into the control
/// re-derives every dependent sublayer property.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonStyle {
    /// Background fill. The only attribute whose active variants start
    /// unset, so an active read falls back to the base variant until an
    /// active color is configured.
    pub background: AdaptiveColor,
    /// Border color.
    pub border: AdaptiveColor,
    /// Title (and icon tint) color.
    pub title: AdaptiveColor,
    /// Shadow configuration.
    pub shadow: ShadowStyle,
    /// Uniform corner radius, applied per [`CornerMask`].
    pub corner_radius: f32,
    /// Which corners the radius applies to.
    pub rounded_corners: CornerMask,
    /// Corner tracing style.
    pub corner_curve: CornerCurve,
    /// Border stroke width; zero draws no border.
    pub border_width: f32,
    /// Horizontal inset of the title from the relevant edge, and the
    /// icon/title gap in the centered arrangement.
    pub text_margin: f32,
    /// Horizontal inset of the icon from the relevant edge.
    pub icon_margin: f32,
    /// Horizontal arrangement of title and icon.
    pub content_position: ContentPosition,
    /// Whether state changes animate the color pushes.
    pub animate_state: bool,
    /// Transition duration when leaving the active state.
    pub rest_duration: Duration,
    /// Transition duration when entering the active state.
    pub active_duration: Duration,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            background: AdaptiveColor::splat(Color::TRANSPARENT),
            border: AdaptiveColor::splat(Color::TRANSPARENT)
                .with_active(Color::TRANSPARENT, Color::TRANSPARENT),
            title: AdaptiveColor::new(LABEL_COLOR_LIGHT, LABEL_COLOR_DARK)
                .with_active(LABEL_COLOR_LIGHT, LABEL_COLOR_DARK),
            shadow: ShadowStyle::default(),
            corner_radius: 0.0,
            rounded_corners: CornerMask::ALL,
            corner_curve: CornerCurve::Continuous,
            border_width: 0.0,
            text_margin: 8.0,
            icon_margin: 8.0,
            content_position: ContentPosition::Center,
            animate_state: true,
            rest_duration: Duration::from_millis(10),
            active_duration: Duration::from_millis(200),
        }
    }
}

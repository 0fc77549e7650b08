//! Sublayer descriptions consumed by the host compositor.
//!
//! The control owns three sublayers and keeps them up to date; the host
//! reads them each frame and composites:
//!
//! - [`SurfaceLayer`] — background fill, border, shadow, corner rounding,
//!   whole-control opacity. Frame covers the control bounds.
//! - [`TextLayer`] — the title string, its font, color, and frame.
//! - [`IconLayer`] — the icon mask bitmap, its tint color, and frame. The
//!   host renders the tint through the mask's alpha channel.
//!
//! Color properties are [`AnimatedColor`]s: a state change either assigns
//! immediately or starts a timed interpolation that the host samples until
//! it settles.

use std::time::{Duration, Instant};

use gild_core::{Color, CornerRadii, Rect};

use crate::animation::{ColorTransition, Easing};
use crate::icon::Icon;
use crate::style::{CornerCurve, CornerMask};
use crate::text::Font;

/// A layer color that can be pushed immediately or via a timed transition.
#[derive(Debug, Clone)]
pub struct AnimatedColor {
    /// The settled (target) value.
    value: Color,
    /// In-flight transition toward `value`, if any.
    transition: Option<ColorTransition>,
}

impl AnimatedColor {
    /// Create with an initial settled color.
    pub fn new(color: Color) -> Self {
        Self {
            value: color,
            transition: None,
        }
    }

    /// Assign immediately, cancelling any in-flight transition.
    pub fn set(&mut self, color: Color) {
        self.value = color;
        self.transition = None;
    }

    /// Start a timed transition from the currently displayed color.
    ///
    /// A zero duration behaves like [`set`](Self::set).
    pub fn animate_to(&mut self, color: Color, duration: Duration, easing: Easing) {
        if duration.is_zero() {
            self.set(color);
            return;
        }
        let from = self.current();
        self.value = color;
        self.transition = Some(ColorTransition::new(from, color, duration, easing));
    }

    /// The settled target color.
    pub fn target(&self) -> Color {
        self.value
    }

    /// The color to display right now.
    pub fn current(&self) -> Color {
        self.sample(Instant::now())
    }

    /// The color to display at `now`.
    pub fn sample(&self, now: Instant) -> Color {
        match &self.transition {
            Some(t) if !t.is_finished(now) => t.sample(now),
            _ => self.value,
        }
    }

    /// Check if a transition is still in flight.
    pub fn is_animating(&self) -> bool {
        self.transition
            .as_ref()
            .is_some_and(|t| !t.is_finished(Instant::now()))
    }
}

/// The background/border/shadow surface of the control.
#[derive(Debug, Clone)]
pub struct SurfaceLayer {
    /// Frame in the control's local coordinates (always the full bounds).
    pub frame: Rect,
    /// Background fill color.
    pub background: AnimatedColor,
    /// Border stroke color.
    pub border_color: AnimatedColor,
    /// Shadow color.
    pub shadow_color: AnimatedColor,
    /// Border stroke width; zero draws no border.
    pub border_width: f32,
    /// Uniform corner radius before masking.
    pub corner_radius: f32,
    /// Which corners the radius applies to.
    pub masked_corners: CornerMask,
    /// Corner tracing style.
    pub corner_curve: CornerCurve,
    /// Shadow blur radius.
    pub shadow_radius: f32,
    /// Shadow opacity in the 0.0-1.0 range.
    pub shadow_opacity: f32,
    /// Opacity applied to the whole control (reduced when disabled).
    pub opacity: f32,
}

impl SurfaceLayer {
    pub(crate) fn new() -> Self {
        Self {
            frame: Rect::ZERO,
            background: AnimatedColor::new(Color::TRANSPARENT),
            border_color: AnimatedColor::new(Color::TRANSPARENT),
            shadow_color: AnimatedColor::new(Color::TRANSPARENT),
            border_width: 0.0,
            corner_radius: 0.0,
            masked_corners: CornerMask::ALL,
            corner_curve: CornerCurve::Continuous,
            shadow_radius: 0.0,
            shadow_opacity: 0.0,
            opacity: 1.0,
        }
    }

    /// Per-corner radii with the mask applied.
    pub fn corner_radii(&self) -> CornerRadii {
        self.masked_corners.radii(self.corner_radius)
    }
}

/// The title text sublayer.
#[derive(Debug, Clone)]
pub struct TextLayer {
    /// Frame in the control's local coordinates.
    pub frame: Rect,
    /// The string to render.
    pub text: String,
    /// The font to render with.
    pub font: Font,
    /// Foreground color.
    pub color: AnimatedColor,
}

impl TextLayer {
    pub(crate) fn new() -> Self {
        Self {
            frame: Rect::ZERO,
            text: String::new(),
            font: Font::default(),
            color: AnimatedColor::new(Color::BLACK),
        }
    }
}

/// The icon sublayer.
#[derive(Debug, Clone)]
pub struct IconLayer {
    /// Frame in the control's local coordinates.
    pub frame: Rect,
    /// Tint color rendered through the mask's alpha channel.
    pub tint: AnimatedColor,
    /// The mask bitmap; `None` when no icon is set.
    pub mask: Option<Icon>,
    /// Hidden when no icon is configured.
    pub hidden: bool,
}

impl IconLayer {
    pub(crate) fn new() -> Self {
        Self {
            frame: Rect::ZERO,
            tint: AnimatedColor::new(Color::TRANSPARENT),
            mask: None,
            hidden: true,
        }
    }
}

//! Title fonts and text measurement.
//!
//! The control needs exactly one thing from a text stack: the measured size
//! of its single-line title. Shaping, rasterization, and everything else
//! belong to the host. Measurement is therefore behind the [`TextMeasurer`]
//! trait, with two implementations:
//!
//! - [`ShapedTextMeasurer`] — shapes the line with `cosmic-text` against the
//!   system font database. The default.
//! - [`FixedAdvanceMeasurer`] — deterministic fixed-advance metrics for
//!   headless hosts and tests.

use gild_core::Size;
use parking_lot::Mutex;

/// Line height as a multiple of the font size.
const LINE_HEIGHT_FACTOR: f32 = 1.2;

/// A font family selector.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FontFamily {
    /// A specific font family by name.
    Name(String),
    /// Generic serif family.
    Serif,
    /// Generic sans-serif family (the default).
    #[default]
    SansSerif,
    /// Generic monospace family.
    Monospace,
}

/// Font weight on the standard 100-900 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const NORMAL: Self = Self(400);
    pub const MEDIUM: Self = Self(500);
    pub const SEMIBOLD: Self = Self(600);
    pub const BOLD: Self = Self(700);
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Font slant style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

/// A font description for the title layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    family: FontFamily,
    size: f32,
    weight: FontWeight,
    style: FontStyle,
}

impl Font {
    /// Create a new font with the given family and size.
    pub fn new(family: FontFamily, size: f32) -> Self {
        Self {
            family,
            size,
            weight: FontWeight::NORMAL,
            style: FontStyle::Normal,
        }
    }

    /// Set the weight using builder pattern.
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Set the style using builder pattern.
    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    /// Get the font family.
    pub fn family(&self) -> &FontFamily {
        &self.family
    }

    /// Get the font size in logical pixels.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Get the font weight.
    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    /// Get the font style.
    pub fn style(&self) -> FontStyle {
        self.style
    }

    /// The line height for this font.
    pub fn line_height(&self) -> f32 {
        self.size * LINE_HEIGHT_FACTOR
    }

    /// Convert to cosmic-text attributes.
    fn to_attrs(&self) -> cosmic_text::Attrs<'_> {
        let family = match &self.family {
            FontFamily::Name(name) => cosmic_text::Family::Name(name.as_str()),
            FontFamily::Serif => cosmic_text::Family::Serif,
            FontFamily::SansSerif => cosmic_text::Family::SansSerif,
            FontFamily::Monospace => cosmic_text::Family::Monospace,
        };
        let style = match self.style {
            FontStyle::Normal => cosmic_text::Style::Normal,
            FontStyle::Italic => cosmic_text::Style::Italic,
        };

        cosmic_text::Attrs::new()
            .family(family)
            .weight(cosmic_text::Weight(self.weight.0))
            .style(style)
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(FontFamily::SansSerif, 13.0)
    }
}

/// Measures a single line of title text.
///
/// Implementations must be cheap enough to call on every layout pass.
pub trait TextMeasurer: Send + Sync {
    /// Measure `text` rendered with `font`.
    ///
    /// Empty text must measure as [`Size::ZERO`].
    fn measure(&self, text: &str, font: &Font) -> Size;
}

/// Text measurement backed by cosmic-text shaping.
///
/// Holds a font system (and its loaded font database) for the lifetime of
/// the measurer; share one instance between controls via `Arc` to avoid
/// rescanning system fonts.
pub struct ShapedTextMeasurer {
    font_system: Mutex<cosmic_text::FontSystem>,
}

impl ShapedTextMeasurer {
    /// Create a measurer with the system font database.
    pub fn new() -> Self {
        Self {
            font_system: Mutex::new(cosmic_text::FontSystem::new()),
        }
    }
}

impl Default for ShapedTextMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasurer for ShapedTextMeasurer {
    fn measure(&self, text: &str, font: &Font) -> Size {
        if text.is_empty() {
            return Size::ZERO;
        }

        let mut guard = self.font_system.lock();
        let font_system = &mut *guard;
        let metrics = cosmic_text::Metrics::new(font.size(), font.line_height());
        let mut buffer = cosmic_text::Buffer::new(font_system, metrics);

        // Single unwrapped line; the control never wraps its title.
        buffer.set_wrap(font_system, cosmic_text::Wrap::None);
        buffer.set_size(font_system, None, None);
        buffer.set_text(
            font_system,
            text,
            font.to_attrs(),
            cosmic_text::Shaping::Advanced,
        );
        buffer.shape_until_scroll(font_system, false);

        let mut width = 0.0f32;
        let mut lines = 0usize;
        for run in buffer.layout_runs() {
            width = width.max(run.line_w);
            lines += 1;
        }

        Size::new(width, lines as f32 * metrics.line_height)
    }
}

/// Deterministic fixed-advance measurement.
///
/// Every character advances by `advance_factor × font size`. Useful for
/// headless hosts and for tests that need stable geometry without a font
/// database.
#[derive(Debug, Clone, Copy)]
pub struct FixedAdvanceMeasurer {
    advance_factor: f32,
}

impl FixedAdvanceMeasurer {
    /// Create a measurer with the given per-character advance factor.
    pub fn new(advance_factor: f32) -> Self {
        Self { advance_factor }
    }
}

impl Default for FixedAdvanceMeasurer {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl TextMeasurer for FixedAdvanceMeasurer {
    fn measure(&self, text: &str, font: &Font) -> Size {
        if text.is_empty() {
            return Size::ZERO;
        }
        let advance = font.size() * self.advance_factor;
        Size::new(
            text.chars().count() as f32 * advance,
            font.line_height(),
        )
    }
}

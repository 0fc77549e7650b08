//! The button control.
//!
//! This module provides [`FlatButton`], a custom-drawn toggle button with
//! appearance-adaptive styling.
//!
//! # Overview
//!
//! FlatButton composites three host-rendered sublayers (surface, title,
//! icon), driven by a [`ButtonStyle`] configuration:
//! - Per-appearance (light/dark) and per-state (inactive/active) colors for
//!   background, border, shadow, and title
//! - Rounded corners with per-corner masking, border stroke, drop shadow
//! - Title/icon arrangement with configurable margins
//! - Optional animated color transitions on state change
//!
//! # Interaction
//!
//! A press shows a preview of the toggled state; releasing inside the bounds
//! commits the toggle and fires `clicked` exactly once. Dragging out while
//! pressed reverts the preview; dragging back in restores it. Space/Enter
//! activate the control from the keyboard.
//!
//! # Example
//!
//! ```
//! use gild_button::{Appearance, FlatButton};
//! use gild_core::{Color, Rect};
//!
//! let mut button = FlatButton::new("Switch")
//!     .with_corner_radius(6.0);
//! button.set_background_color(Color::from_rgb8(240, 240, 240));
//! button.set_active_background_color(Color::from_rgb8(0, 122, 255));
//!
//! button.clicked().connect(|&active| {
//!     println!("Button clicked! Active: {active}");
//! });
//!
//! button.set_geometry(Rect::new(0.0, 0.0, 100.0, 30.0));
//! button.set_appearance(Appearance::Light);
//! button.layout();
//! ```

use std::sync::Arc;
use std::time::Duration;

use gild_core::{Color, Point, Rect, Signal, Size};

use crate::appearance::Appearance;
use crate::base::ControlBase;
use crate::events::{
    ControlEvent, Key, KeyPressEvent, KeyReleaseEvent, PointerButton, PointerEnterEvent,
    PointerPressEvent, PointerReleaseEvent,
};
use crate::geometry::SizeHint;
use crate::icon::Icon;
use crate::layer::{IconLayer, SurfaceLayer, TextLayer};
use crate::style::{ButtonStyle, ContentPosition, CornerCurve, CornerMask};
use crate::text::{Font, ShapedTextMeasurer, TextMeasurer};

/// Opacity applied to all sublayers while the control is disabled.
const DISABLED_OPACITY: f32 = 0.6;

/// Minimum intrinsic size.
const MIN_WIDTH: f32 = 64.0;
const MIN_HEIGHT: f32 = 24.0;

/// Vertical padding added around the content for the intrinsic size.
const VERTICAL_PADDING: f32 = 8.0;

/// A custom-drawn toggle button with appearance-adaptive styling.
///
/// # Signals
///
/// - `clicked`: Emitted once per completed click, after the active state
///   flipped. Carries the new active state.
/// - `pressed`: Emitted when a press gesture starts.
/// - `released`: Emitted when a press gesture ends.
/// - `toggled`: Emitted whenever the active state changes.
pub struct FlatButton {
    /// Control base for geometry, flags, and invalidation.
    base: ControlBase,

    /// The style configuration.
    style: ButtonStyle,

    /// The button's title text.
    title: String,

    /// The font used to measure and render the title.
    font: Font,

    /// Optional icon, tinted with the resolved title color.
    icon: Option<Icon>,

    /// The appearance the host last pushed in.
    appearance: Appearance,

    /// Persisted toggle state.
    active: bool,

    /// A pointer press started on the control and has not ended yet.
    pointer_grabbed: bool,

    /// Key currently holding the control pressed, if any.
    key_pressed: Option<Key>,

    /// Measures the title for layout.
    measurer: Arc<dyn TextMeasurer>,

    /// Background/border/shadow sublayer.
    surface: SurfaceLayer,

    /// Title sublayer.
    title_layer: TextLayer,

    /// Icon sublayer.
    icon_layer: IconLayer,

    /// Signal emitted once per completed click with the new active state.
    clicked: Signal<bool>,

    /// Signal emitted when a press gesture starts.
    pressed: Signal<()>,

    /// Signal emitted when a press gesture ends.
    released: Signal<()>,

    /// Signal emitted when the active state changes.
    toggled: Signal<bool>,
}

impl FlatButton {
    /// Create a new button with the specified title.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_text_measurer(title, Arc::new(ShapedTextMeasurer::new()))
    }

    /// Create a new button with an explicit text measurer.
    ///
    /// Use this to share one [`ShapedTextMeasurer`] (and its font database)
    /// between controls, or to supply deterministic metrics in headless
    /// environments.
    pub fn with_text_measurer(title: impl Into<String>, measurer: Arc<dyn TextMeasurer>) -> Self {
        let title = title.into();
        let mut button = Self {
            base: ControlBase::new(),
            style: ButtonStyle::default(),
            title: title.clone(),
            font: Font::default(),
            icon: None,
            appearance: Appearance::default(),
            active: false,
            pointer_grabbed: false,
            key_pressed: None,
            measurer,
            surface: SurfaceLayer::new(),
            title_layer: TextLayer::new(),
            icon_layer: IconLayer::new(),
            clicked: Signal::new(),
            pressed: Signal::new(),
            released: Signal::new(),
            toggled: Signal::new(),
        };

        button.title_layer.text = title;
        button.title_layer.font = button.font.clone();
        button.sync_surface_style();
        button.push_colors(false);
        button
    }

    // =========================================================================
    // Title and Font
    // =========================================================================

    /// Get the button's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set the button's title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        if self.title != title {
            self.title = title.clone();
            self.title_layer.text = title;
            self.base.invalidate_layout();
        }
    }

    /// Get the title font.
    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Set the title font.
    pub fn set_font(&mut self, font: Font) {
        if self.font != font {
            self.font = font.clone();
            self.title_layer.font = font;
            self.base.invalidate_layout();
        }
    }

    /// Set the font using builder pattern.
    pub fn with_font(mut self, font: Font) -> Self {
        self.set_font(font);
        self
    }

    /// Replace the text measurer.
    pub fn set_text_measurer(&mut self, measurer: Arc<dyn TextMeasurer>) {
        self.measurer = measurer;
        self.base.invalidate_layout();
    }

    // =========================================================================
    // Icon
    // =========================================================================

    /// Get the button's icon, if any.
    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    /// Set or clear the button's icon.
    pub fn set_icon(&mut self, icon: Option<Icon>) {
        self.icon_layer.mask = icon.clone();
        self.icon_layer.hidden = icon.is_none();
        self.icon = icon;
        self.base.invalidate_layout();
    }

    /// Set the icon using builder pattern.
    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.set_icon(Some(icon));
        self
    }

    // =========================================================================
    // Content Arrangement
    // =========================================================================

    /// Get the content position.
    pub fn content_position(&self) -> ContentPosition {
        self.style.content_position
    }

    /// Set the horizontal arrangement of title and icon.
    pub fn set_content_position(&mut self, position: ContentPosition) {
        if self.style.content_position != position {
            self.style.content_position = position;
            self.base.invalidate_layout();
        }
    }

    /// Set the content position using builder pattern.
    pub fn with_content_position(mut self, position: ContentPosition) -> Self {
        self.set_content_position(position);
        self
    }

    /// Get the text margin.
    pub fn text_margin(&self) -> f32 {
        self.style.text_margin
    }

    /// Set the horizontal title inset (and the icon gap when centered).
    pub fn set_text_margin(&mut self, margin: f32) {
        if self.style.text_margin != margin {
            self.style.text_margin = margin;
            self.base.invalidate_layout();
        }
    }

    /// Get the icon margin.
    pub fn icon_margin(&self) -> f32 {
        self.style.icon_margin
    }

    /// Set the horizontal icon inset.
    pub fn set_icon_margin(&mut self, margin: f32) {
        if self.style.icon_margin != margin {
            self.style.icon_margin = margin;
            self.base.invalidate_layout();
        }
    }

    // =========================================================================
    // Corners and Border
    // =========================================================================

    /// Get the corner radius.
    pub fn corner_radius(&self) -> f32 {
        self.style.corner_radius
    }

    /// Set the uniform corner radius.
    pub fn set_corner_radius(&mut self, radius: f32) {
        self.style.corner_radius = radius;
        self.surface.corner_radius = radius;
        self.base.update();
    }

    /// Set the corner radius using builder pattern.
    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.set_corner_radius(radius);
        self
    }

    /// Get the per-corner rounding mask.
    pub fn rounded_corners(&self) -> CornerMask {
        self.style.rounded_corners
    }

    /// Set which corners the radius applies to.
    pub fn set_rounded_corners(&mut self, mask: CornerMask) {
        self.style.rounded_corners = mask;
        self.surface.masked_corners = mask;
        self.base.update();
    }

    /// Get the corner curve style.
    pub fn corner_curve(&self) -> CornerCurve {
        self.style.corner_curve
    }

    /// Set the corner curve style.
    pub fn set_corner_curve(&mut self, curve: CornerCurve) {
        self.style.corner_curve = curve;
        self.surface.corner_curve = curve;
        self.base.update();
    }

    /// Get the border width.
    pub fn border_width(&self) -> f32 {
        self.style.border_width
    }

    /// Set the border stroke width.
    pub fn set_border_width(&mut self, width: f32) {
        self.style.border_width = width;
        self.surface.border_width = width;
        self.base.update();
    }

    // =========================================================================
    // Colors
    // =========================================================================

    /// Combined setter: background color for both appearances.
    pub fn set_background_color(&mut self, color: Color) {
        self.edit_style(|s| s.background.set_all(color));
    }

    /// Set the light-appearance background color.
    pub fn set_background_color_light(&mut self, color: Color) {
        self.edit_style(|s| s.background.set_light(color));
    }

    /// Set the dark-appearance background color.
    pub fn set_background_color_dark(&mut self, color: Color) {
        self.edit_style(|s| s.background.set_dark(color));
    }

    /// Combined setter: active-state background color for both appearances.
    pub fn set_active_background_color(&mut self, color: Color) {
        self.edit_style(|s| s.background.set_active_all(color));
    }

    /// Set the light-appearance active background color.
    pub fn set_active_background_color_light(&mut self, color: Color) {
        self.edit_style(|s| s.background.set_active_light(color));
    }

    /// Set the dark-appearance active background color.
    pub fn set_active_background_color_dark(&mut self, color: Color) {
        self.edit_style(|s| s.background.set_active_dark(color));
    }

    /// Combined setter: border color for both appearances.
    pub fn set_border_color(&mut self, color: Color) {
        self.edit_style(|s| s.border.set_all(color));
    }

    /// Set the light-appearance border color.
    pub fn set_border_color_light(&mut self, color: Color) {
        self.edit_style(|s| s.border.set_light(color));
    }

    /// Set the dark-appearance border color.
    pub fn set_border_color_dark(&mut self, color: Color) {
        self.edit_style(|s| s.border.set_dark(color));
    }

    /// Combined setter: active-state border color for both appearances.
    pub fn set_active_border_color(&mut self, color: Color) {
        self.edit_style(|s| s.border.set_active_all(color));
    }

    /// Set the light-appearance active border color.
    pub fn set_active_border_color_light(&mut self, color: Color) {
        self.edit_style(|s| s.border.set_active_light(color));
    }

    /// Set the dark-appearance active border color.
    pub fn set_active_border_color_dark(&mut self, color: Color) {
        self.edit_style(|s| s.border.set_active_dark(color));
    }

    /// Combined setter: title color for both appearances.
    ///
    /// The icon tint follows the resolved title color.
    pub fn set_title_color(&mut self, color: Color) {
        self.edit_style(|s| s.title.set_all(color));
    }

    /// Set the light-appearance title color.
    pub fn set_title_color_light(&mut self, color: Color) {
        self.edit_style(|s| s.title.set_light(color));
    }

    /// Set the dark-appearance title color.
    pub fn set_title_color_dark(&mut self, color: Color) {
        self.edit_style(|s| s.title.set_dark(color));
    }

    /// Combined setter: active-state title color for both appearances.
    pub fn set_active_title_color(&mut self, color: Color) {
        self.edit_style(|s| s.title.set_active_all(color));
    }

    /// Set the light-appearance active title color.
    pub fn set_active_title_color_light(&mut self, color: Color) {
        self.edit_style(|s| s.title.set_active_light(color));
    }

    /// Set the dark-appearance active title color.
    pub fn set_active_title_color_dark(&mut self, color: Color) {
        self.edit_style(|s| s.title.set_active_dark(color));
    }

    /// Combined setter: shadow color for both appearances.
    pub fn set_shadow_color(&mut self, color: Color) {
        self.edit_style(|s| s.shadow.color.set_all(color));
    }

    /// Set the light-appearance shadow color.
    pub fn set_shadow_color_light(&mut self, color: Color) {
        self.edit_style(|s| s.shadow.color.set_light(color));
    }

    /// Set the dark-appearance shadow color.
    pub fn set_shadow_color_dark(&mut self, color: Color) {
        self.edit_style(|s| s.shadow.color.set_dark(color));
    }

    /// Combined setter: active-state shadow color for both appearances.
    pub fn set_active_shadow_color(&mut self, color: Color) {
        self.edit_style(|s| s.shadow.color.set_active_all(color));
    }

    /// Set the light-appearance active shadow color.
    pub fn set_active_shadow_color_light(&mut self, color: Color) {
        self.edit_style(|s| s.shadow.color.set_active_light(color));
    }

    /// Set the dark-appearance active shadow color.
    pub fn set_active_shadow_color_dark(&mut self, color: Color) {
        self.edit_style(|s| s.shadow.color.set_active_dark(color));
    }

    // =========================================================================
    // Shadow Geometry
    // =========================================================================

    /// Set the shadow blur radius.
    pub fn set_shadow_radius(&mut self, radius: f32) {
        self.edit_style(|s| s.shadow.radius = radius);
    }

    /// Set or clear the active-state shadow radius override.
    pub fn set_active_shadow_radius(&mut self, radius: Option<f32>) {
        self.edit_style(|s| s.shadow.active_radius = radius);
    }

    /// Set the shadow opacity.
    pub fn set_shadow_opacity(&mut self, opacity: f32) {
        self.edit_style(|s| s.shadow.opacity = opacity);
    }

    /// Set or clear the active-state shadow opacity override.
    pub fn set_active_shadow_opacity(&mut self, opacity: Option<f32>) {
        self.edit_style(|s| s.shadow.active_opacity = opacity);
    }

    // =========================================================================
    // Animation
    // =========================================================================

    /// Check whether state changes animate.
    pub fn animates_state(&self) -> bool {
        self.style.animate_state
    }

    /// Enable or disable animated color transitions on state change.
    pub fn set_animate_state(&mut self, animate: bool) {
        self.style.animate_state = animate;
    }

    /// Set the transition duration used when leaving the active state.
    pub fn set_rest_duration(&mut self, duration: Duration) {
        self.style.rest_duration = duration;
    }

    /// Set the transition duration used when entering the active state.
    pub fn set_active_duration(&mut self, duration: Duration) {
        self.style.active_duration = duration;
    }

    // =========================================================================
    // Style as a Whole
    // =========================================================================

    /// Get the current style configuration.
    pub fn style(&self) -> &ButtonStyle {
        &self.style
    }

    /// Swap in a complete style configuration atomically.
    ///
    /// All dependent sublayer state is re-derived from the new
    /// configuration; the push is immediate (never animated).
    pub fn set_style(&mut self, style: ButtonStyle) {
        self.style = style;
        self.sync_surface_style();
        self.push_colors(false);
        self.base.invalidate_layout();
    }

    /// Set the style using builder pattern.
    pub fn with_style(mut self, style: ButtonStyle) -> Self {
        self.set_style(style);
        self
    }

    // =========================================================================
    // Appearance and State
    // =========================================================================

    /// Get the appearance the control currently resolves against.
    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    /// Set the appearance mode.
    ///
    /// The host calls this when the system theme changes; resolved colors
    /// are re-pushed (animated if enabled).
    pub fn set_appearance(&mut self, appearance: Appearance) {
        if self.appearance != appearance {
            self.appearance = appearance;
            tracing::debug!(target: "gild_button", ?appearance, "appearance changed");
            self.push_colors(true);
        }
    }

    /// Set the appearance using builder pattern.
    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.set_appearance(appearance);
        self
    }

    /// Check if the button is currently active (toggled on).
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Set the active state directly.
    ///
    /// Emits `toggled` when the state changes. Does not emit `clicked`.
    pub fn set_active(&mut self, active: bool) {
        if self.active != active {
            self.active = active;
            self.toggled.emit(active);
            self.push_colors(true);
        }
    }

    /// Set the active state using builder pattern.
    pub fn with_active(mut self, active: bool) -> Self {
        self.set_active(active);
        self
    }

    /// Toggle the active state.
    pub fn toggle(&mut self) {
        self.set_active(!self.active);
    }

    /// Check if the button is enabled.
    pub fn is_enabled(&self) -> bool {
        self.base.is_enabled()
    }

    /// Enable or disable the button.
    ///
    /// Disabling cancels any outstanding press gesture, dims the sublayers,
    /// and removes the control from hit-testing.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.base.is_enabled() == enabled {
            return;
        }
        self.base.set_enabled(enabled);
        if !enabled {
            self.pointer_grabbed = false;
            self.key_pressed = None;
            self.base.set_pressed(false);
        }
        self.surface.opacity = if enabled { 1.0 } else { DISABLED_OPACITY };
        self.push_colors(false);
    }

    /// Check if the button currently shows pressed visuals.
    pub fn is_pressed(&self) -> bool {
        self.base.is_pressed()
    }

    /// Check if the pointer is over the button.
    pub fn is_hovered(&self) -> bool {
        self.base.is_hovered()
    }

    /// Programmatically click the button.
    ///
    /// Flips the active state and emits `toggled` and `clicked`, like a
    /// completed pointer click.
    pub fn click(&mut self) {
        if !self.base.is_enabled() {
            return;
        }
        self.pointer_grabbed = false;
        self.key_pressed = None;
        self.commit_click();
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Get a reference to the control base.
    pub fn base(&self) -> &ControlBase {
        &self.base
    }

    /// Get a mutable reference to the control base.
    pub fn base_mut(&mut self) -> &mut ControlBase {
        &mut self.base
    }

    /// Get the control's geometry.
    pub fn geometry(&self) -> Rect {
        self.base.geometry()
    }

    /// Set the control's geometry.
    pub fn set_geometry(&mut self, rect: Rect) {
        self.base.set_geometry(rect);
    }

    /// Set the device contents scale used for pixel snapping.
    pub fn set_contents_scale(&mut self, scale: f32) {
        self.base.set_contents_scale(scale);
    }

    /// Hit-test a point in local coordinates.
    ///
    /// Disabled or hidden controls never report a hit, so pointer events
    /// pass through to whatever is behind them.
    pub fn hit_test(&self, point: Point) -> bool {
        self.base.is_enabled() && self.base.is_visible() && self.base.contains_point(point)
    }

    // =========================================================================
    // Content Measurement
    // =========================================================================

    /// The measured size of the title, or zero when the title is empty.
    pub fn text_size(&self) -> Size {
        if self.title.is_empty() {
            return Size::ZERO;
        }
        self.measurer.measure(&self.title, &self.font)
    }

    /// The display size of the icon, or zero when no icon is set.
    pub fn icon_size(&self) -> Size {
        self.icon
            .as_ref()
            .map(|icon| icon.display_size())
            .unwrap_or(Size::ZERO)
    }

    /// The combined size of title and icon, including the gap between them.
    pub fn content_size(&self) -> Size {
        let text = self.text_size();
        let icon = self.icon_size();

        if self.icon.is_some() && !self.title.is_empty() {
            Size::new(
                icon.width + self.style.icon_margin + text.width,
                icon.height.max(text.height),
            )
        } else if self.icon.is_some() {
            icon
        } else {
            text
        }
    }

    /// The control's intrinsic size for layout negotiation.
    pub fn size_hint(&self) -> SizeHint {
        let content = self.content_size();
        let preferred = Size::new(
            (content.width + self.style.text_margin * 2.0).max(MIN_WIDTH),
            (content.height + VERTICAL_PADDING * 2.0).max(MIN_HEIGHT),
        );

        SizeHint::new(preferred).with_minimum_dimensions(MIN_WIDTH, MIN_HEIGHT)
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Check if sublayer frames must be recomputed.
    pub fn needs_layout(&self) -> bool {
        self.base.needs_layout()
    }

    /// Run the layout pass if anything invalidated it.
    pub fn layout_if_needed(&mut self) {
        if self.base.needs_layout() {
            self.layout();
        }
    }

    /// Recompute sublayer frames from the current bounds and content.
    ///
    /// Layout is idempotent: with unchanged inputs it produces identical
    /// frames. Final origins are snapped to the device pixel grid.
    pub fn layout(&mut self) {
        let bounds = self.base.rect();
        tracing::trace!(
            target: "gild_button",
            width = bounds.width(),
            height = bounds.height(),
            "layout"
        );

        self.surface.frame = bounds;

        let title_size = self.text_size();
        let mut title_frame = Rect::from_center(bounds.center(), title_size);

        match self.style.content_position {
            ContentPosition::Left => title_frame.origin.x = self.style.text_margin,
            ContentPosition::Right => {
                title_frame.origin.x = bounds.width() - title_size.width - self.style.text_margin;
            }
            ContentPosition::Center => {}
        }

        if let Some(icon) = &self.icon {
            let icon_size = icon.display_size();
            let mut icon_frame = Rect {
                origin: Point::ZERO,
                size: icon_size,
            };
            let leading = icon_size.width + self.style.icon_margin;

            match self.style.content_position {
                ContentPosition::Left => {
                    title_frame.origin.x += leading;
                    icon_frame.origin.x = self.style.icon_margin;
                }
                ContentPosition::Right => {
                    title_frame.origin.x -= leading;
                    icon_frame.origin.x = bounds.width() - leading;
                }
                ContentPosition::Center => {
                    title_frame.origin.x += (icon_size.width + self.style.text_margin) / 2.0;
                    icon_frame.origin.x =
                        title_frame.origin.x - self.style.text_margin - icon_size.width;
                }
            }
            icon_frame.origin.y = (bounds.height() - icon_size.height) / 2.0;

            self.icon_layer.frame = Rect {
                origin: self.base.snap_point(icon_frame.origin),
                size: icon_frame.size,
            };
            self.icon_layer.hidden = false;
        } else {
            self.icon_layer.frame = Rect::ZERO;
            self.icon_layer.hidden = true;
        }

        self.title_layer.frame = Rect {
            origin: self.base.snap_point(title_frame.origin),
            size: title_frame.size,
        };

        self.base.clear_layout_flag();
        self.base.update();
    }

    // =========================================================================
    // Sublayers
    // =========================================================================

    /// The background/border/shadow sublayer.
    pub fn surface(&self) -> &SurfaceLayer {
        &self.surface
    }

    /// The title sublayer.
    pub fn title_layer(&self) -> &TextLayer {
        &self.title_layer
    }

    /// The icon sublayer.
    pub fn icon_layer(&self) -> &IconLayer {
        &self.icon_layer
    }

    /// Whether the control currently renders its active-state colors.
    ///
    /// A press previews the state the release would commit, so this is the
    /// persisted active state XOR the transient pressed state.
    pub fn is_visually_active(&self) -> bool {
        self.active != self.base.is_pressed()
    }

    // =========================================================================
    // Event Handling
    // =========================================================================

    /// Handle a control event.
    ///
    /// Returns `true` (and accepts the event) if the event was consumed.
    pub fn event(&mut self, event: &mut ControlEvent) -> bool {
        let handled = match event {
            ControlEvent::PointerPress(e) => self.handle_pointer_press(e),
            ControlEvent::PointerRelease(e) => self.handle_pointer_release(e),
            ControlEvent::PointerEnter(e) => self.handle_pointer_enter(e),
            ControlEvent::PointerLeave(_) => self.handle_pointer_leave(),
            ControlEvent::KeyPress(e) => self.handle_key_press(e),
            ControlEvent::KeyRelease(e) => self.handle_key_release(e),
        };
        if handled {
            event.accept();
        }
        handled
    }

    /// Handle a pointer press.
    pub fn handle_pointer_press(&mut self, event: &PointerPressEvent) -> bool {
        if event.button != PointerButton::Primary || !self.base.is_enabled() {
            return false;
        }

        self.pointer_grabbed = true;
        self.base.set_pressed(true);
        tracing::debug!(target: "gild_button", title = %self.title, "pointer press");
        self.pressed.emit(());
        self.push_colors(true);
        true
    }

    /// Handle a pointer release.
    ///
    /// Completes the click when the press is still showing (the pointer is
    /// inside); a release outside the bounds cancels without toggling.
    pub fn handle_pointer_release(&mut self, event: &PointerReleaseEvent) -> bool {
        if event.button != PointerButton::Primary || !self.pointer_grabbed {
            return false;
        }
        self.pointer_grabbed = false;

        if !self.base.is_enabled() {
            self.base.set_pressed(false);
            return false;
        }

        self.released.emit(());

        let inside = self.base.contains_point(event.local_pos);
        if self.base.is_pressed() && inside {
            self.commit_click();
        } else if self.base.is_pressed() {
            self.base.set_pressed(false);
            self.push_colors(true);
        }
        true
    }

    /// Handle the pointer entering the control.
    pub fn handle_pointer_enter(&mut self, _event: &PointerEnterEvent) -> bool {
        self.base.set_hovered(true);
        if self.pointer_grabbed && self.base.is_enabled() && !self.base.is_pressed() {
            self.base.set_pressed(true);
            self.push_colors(true);
        }
        true
    }

    /// Handle the pointer leaving the control.
    ///
    /// Reverts pressed visuals while the press stays outstanding, so
    /// re-entering restores them.
    pub fn handle_pointer_leave(&mut self) -> bool {
        self.base.set_hovered(false);
        if self.pointer_grabbed && self.base.is_pressed() {
            self.base.set_pressed(false);
            self.push_colors(true);
        }
        true
    }

    /// Handle a key press (Space/Enter activate, Escape cancels).
    pub fn handle_key_press(&mut self, event: &KeyPressEvent) -> bool {
        if !self.base.is_enabled() {
            return false;
        }
        match event.key {
            Key::Space | Key::Enter => {
                if !event.is_repeat && self.key_pressed.is_none() {
                    self.key_pressed = Some(event.key);
                    self.base.set_pressed(true);
                    self.pressed.emit(());
                    self.push_colors(true);
                }
                true
            }
            Key::Escape => {
                if self.key_pressed.take().is_some() {
                    self.base.set_pressed(false);
                    self.push_colors(true);
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Handle a key release, completing a keyboard-initiated click.
    pub fn handle_key_release(&mut self, event: &KeyReleaseEvent) -> bool {
        if !self.base.is_enabled() || self.key_pressed != Some(event.key) {
            return false;
        }
        self.key_pressed = None;
        self.released.emit(());
        self.commit_click();
        true
    }

    // =========================================================================
    // Signal Access
    // =========================================================================

    /// Signal emitted once per completed click with the new active state.
    pub fn clicked(&self) -> &Signal<bool> {
        &self.clicked
    }

    /// Signal emitted when a press gesture starts.
    pub fn pressed(&self) -> &Signal<()> {
        &self.pressed
    }

    /// Signal emitted when a press gesture ends.
    pub fn released(&self) -> &Signal<()> {
        &self.released
    }

    /// Signal emitted when the active state changes.
    pub fn toggled(&self) -> &Signal<bool> {
        &self.toggled
    }

    // =========================================================================
    // Internal
    // =========================================================================

    /// Mutate the style and push the resolved colors immediately.
    fn edit_style(&mut self, edit: impl FnOnce(&mut ButtonStyle)) {
        edit(&mut self.style);
        self.push_colors(false);
    }

    /// Clear pressed visuals, flip the active state, and fire the click.
    fn commit_click(&mut self) {
        self.base.set_pressed(false);
        self.active = !self.active;
        tracing::debug!(
            target: "gild_button",
            title = %self.title,
            active = self.active,
            "click"
        );
        self.toggled.emit(self.active);
        self.push_colors(true);
        self.clicked.emit(self.active);
    }

    /// Mirror the non-color style values into the surface layer.
    fn sync_surface_style(&mut self) {
        self.surface.corner_radius = self.style.corner_radius;
        self.surface.masked_corners = self.style.rounded_corners;
        self.surface.corner_curve = self.style.corner_curve;
        self.surface.border_width = self.style.border_width;
        self.surface.opacity = if self.base.is_enabled() {
            1.0
        } else {
            DISABLED_OPACITY
        };
    }

    /// Resolve the color set for the current state and push it into the
    /// sublayers.
    ///
    /// `allow_animation` is true for state-affecting changes (press, toggle,
    /// appearance); plain property writes push immediately.
    fn push_colors(&mut self, allow_animation: bool) {
        let on = self.is_visually_active();
        let appearance = self.appearance;

        let background = self.style.background.resolve(appearance, on);
        let border = self.style.border.resolve(appearance, on);
        let shadow = self.style.shadow.color.resolve(appearance, on);
        let title = self.style.title.resolve(appearance, on);

        self.surface.shadow_radius = self.style.shadow.resolve_radius(on);
        self.surface.shadow_opacity = self.style.shadow.resolve_opacity(on);

        if allow_animation && self.style.animate_state {
            // The duration is chosen by the state being entered.
            let duration = if on {
                self.style.active_duration
            } else {
                self.style.rest_duration
            };
            let easing = crate::animation::Easing::EaseInOut;
            self.surface.background.animate_to(background, duration, easing);
            self.surface.border_color.animate_to(border, duration, easing);
            self.surface.shadow_color.animate_to(shadow, duration, easing);
            self.title_layer.color.animate_to(title, duration, easing);
            self.icon_layer.tint.animate_to(title, duration, easing);
        } else {
            self.surface.background.set(background);
            self.surface.border_color.set(border);
            self.surface.shadow_color.set(shadow);
            self.title_layer.color.set(title);
            self.icon_layer.tint.set(title);
        }

        self.base.update();
    }
}

// The control is handed between the host's setup code and its UI thread.
static_assertions::assert_impl_all!(FlatButton: Send, Sync);

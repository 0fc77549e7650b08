//! Common control state.
//!
//! `ControlBase` carries the state every custom-drawn control needs:
//! geometry, enabled/visible flags, transient pressed/hovered flags, the
//! dirty flags the host polls to schedule layout and repaint passes, and the
//! device contents scale used for pixel snapping.
//!
//! The control embeds this as a field and delegates common operations to it.

use gild_core::{Point, Rect, Signal, Size};

/// Common implementation details for a custom-drawn control.
pub struct ControlBase {
    /// The control's geometry (position relative to parent and size).
    geometry: Rect,

    /// Whether the control is visible.
    visible: bool,

    /// Whether the control is enabled (can receive input).
    enabled: bool,

    /// Whether a press gesture currently shows pressed visuals.
    pressed: bool,

    /// Whether the pointer is currently over the control.
    hovered: bool,

    /// Whether sublayer frames must be recomputed.
    needs_layout: bool,

    /// Whether the control needs to be repainted.
    needs_repaint: bool,

    /// Device pixels per logical pixel, for pixel snapping.
    contents_scale: f32,

    /// Signal emitted when the geometry changes.
    pub geometry_changed: Signal<Rect>,

    /// Signal emitted when visibility changes.
    pub visible_changed: Signal<bool>,

    /// Signal emitted when enabled state changes.
    pub enabled_changed: Signal<bool>,
}

impl ControlBase {
    /// Create a new control base.
    pub fn new() -> Self {
        Self {
            geometry: Rect::ZERO,
            visible: true,
            enabled: true,
            pressed: false,
            hovered: false,
            needs_layout: true,
            needs_repaint: true,
            contents_scale: 1.0,
            geometry_changed: Signal::new(),
            visible_changed: Signal::new(),
            enabled_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Get the control's geometry (position and size).
    #[inline]
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Set the control's geometry.
    ///
    /// Emits `geometry_changed` and invalidates layout if the geometry
    /// actually changed.
    pub fn set_geometry(&mut self, rect: Rect) {
        if self.geometry != rect {
            self.geometry = rect;
            self.needs_layout = true;
            self.needs_repaint = true;
            self.geometry_changed.emit(rect);
        }
    }

    /// Get the control's size.
    #[inline]
    pub fn size(&self) -> Size {
        self.geometry.size
    }

    /// Resize the control.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.set_geometry(Rect {
            origin: self.geometry.origin,
            size: Size::new(width, height),
        });
    }

    /// Get a rectangle representing the control's local coordinate space.
    ///
    /// Always positioned at (0, 0) with the control's size.
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(
            0.0,
            0.0,
            self.geometry.size.width,
            self.geometry.size.height,
        )
    }

    /// Get the control's width.
    #[inline]
    pub fn width(&self) -> f32 {
        self.geometry.size.width
    }

    /// Get the control's height.
    #[inline]
    pub fn height(&self) -> f32 {
        self.geometry.size.height
    }

    /// Check if a point (in local coordinates) is inside the control.
    #[inline]
    pub fn contains_point(&self, point: Point) -> bool {
        self.rect().contains(point)
    }

    // =========================================================================
    // Visibility and Enabled State
    // =========================================================================

    /// Check if the control is visible.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Set whether the control is visible.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.needs_repaint = true;
            self.visible_changed.emit(visible);
        }
    }

    /// Check if the control is enabled.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set whether the control is enabled.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.needs_repaint = true;
            self.enabled_changed.emit(enabled);
        }
    }

    // =========================================================================
    // Pressed and Hover State
    // =========================================================================

    /// Check if the control currently shows pressed visuals.
    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Set the pressed state (used by the interaction state machine).
    pub(crate) fn set_pressed(&mut self, pressed: bool) {
        if self.pressed != pressed {
            self.pressed = pressed;
            self.needs_repaint = true;
        }
    }

    /// Check if the pointer is currently over this control.
    #[inline]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Set the hover state (used by the interaction state machine).
    pub(crate) fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    // =========================================================================
    // Invalidation
    // =========================================================================

    /// Check if sublayer frames must be recomputed.
    #[inline]
    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    /// Request a layout pass.
    pub fn invalidate_layout(&mut self) {
        self.needs_layout = true;
        self.needs_repaint = true;
    }

    /// Clear the layout flag (called after layout).
    pub(crate) fn clear_layout_flag(&mut self) {
        self.needs_layout = false;
    }

    /// Check if the control needs to be repainted.
    #[inline]
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Request a repaint.
    pub fn update(&mut self) {
        self.needs_repaint = true;
    }

    /// Clear the repaint flag (called after painting).
    pub fn clear_repaint_flag(&mut self) {
        self.needs_repaint = false;
    }

    // =========================================================================
    // Contents Scale
    // =========================================================================

    /// Device pixels per logical pixel.
    #[inline]
    pub fn contents_scale(&self) -> f32 {
        self.contents_scale
    }

    /// Set the device contents scale.
    ///
    /// Non-positive values are ignored. Changing the scale invalidates
    /// layout so frames re-snap to the new pixel grid.
    pub fn set_contents_scale(&mut self, scale: f32) {
        if scale > 0.0 && self.contents_scale != scale {
            self.contents_scale = scale;
            self.invalidate_layout();
        }
    }

    /// Snap a coordinate to the device pixel grid.
    #[inline]
    pub fn snap(&self, value: f32) -> f32 {
        (value * self.contents_scale).round() / self.contents_scale
    }

    /// Snap a point's coordinates to the device pixel grid.
    #[inline]
    pub fn snap_point(&self, point: Point) -> Point {
        Point::new(self.snap(point.x), self.snap(point.y))
    }
}

impl Default for ControlBase {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn test_geometry_change_invalidates_and_signals() {
        let mut base = ControlBase::new();
        let count = Arc::new(AtomicU32::new(0));

        let count_clone = count.clone();
        base.geometry_changed.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        base.set_geometry(Rect::new(0.0, 0.0, 100.0, 30.0));
        assert!(base.needs_layout());
        assert!(base.needs_repaint());
        assert_eq!(count.load(Ordering::SeqCst), 1);

        // Unchanged geometry does not re-emit.
        base.set_geometry(Rect::new(0.0, 0.0, 100.0, 30.0));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_contains_point_uses_local_rect() {
        let mut base = ControlBase::new();
        base.set_geometry(Rect::new(50.0, 50.0, 100.0, 30.0));

        // Local coordinates, regardless of position in the parent.
        assert!(base.contains_point(Point::new(0.0, 0.0)));
        assert!(base.contains_point(Point::new(99.0, 29.0)));
        assert!(!base.contains_point(Point::new(100.0, 30.0)));
    }

    #[test]
    fn test_enabled_signal() {
        let mut base = ControlBase::new();
        let count = Arc::new(AtomicU32::new(0));

        let count_clone = count.clone();
        base.enabled_changed.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        base.set_enabled(false);
        base.set_enabled(false); // No change, no signal
        base.set_enabled(true);
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_pixel_snapping() {
        let mut base = ControlBase::new();
        assert_eq!(base.snap(10.4), 10.0);
        assert_eq!(base.snap(10.6), 11.0);

        base.set_contents_scale(2.0);
        assert_eq!(base.snap(10.3), 10.5);
        assert_eq!(base.snap(10.2), 10.0);

        // Non-positive scales are rejected.
        base.set_contents_scale(0.0);
        assert_eq!(base.contents_scale(), 2.0);
    }

    #[test]
    fn test_layout_flags() {
        let mut base = ControlBase::new();
        assert!(base.needs_layout());

        base.clear_layout_flag();
        base.clear_repaint_flag();
        assert!(!base.needs_layout());
        assert!(!base.needs_repaint());

        base.invalidate_layout();
        assert!(base.needs_layout());
        assert!(base.needs_repaint());
    }
}

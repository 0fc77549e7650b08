//! End-to-end scenarios exercising layout, interaction, and style
//! resolution through the public control surface.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use gild_core::{Color, Point, Rect, Size};

use crate::appearance::Appearance;
use crate::button::FlatButton;
use crate::events::{KeyboardModifiers, PointerButton, PointerPressEvent, PointerReleaseEvent};
use crate::icon::Icon;
use crate::style::ContentPosition;
use crate::text::{FixedAdvanceMeasurer, Font, FontFamily};

const RED: Color = Color::from_rgb(1.0, 0.0, 0.0);
const GREEN: Color = Color::from_rgb(0.0, 1.0, 0.0);
const BLUE: Color = Color::from_rgb(0.0, 0.0, 1.0);
const YELLOW: Color = Color::from_rgb(1.0, 1.0, 0.0);

/// Install a tracing subscriber once so `RUST_LOG` surfaces control logs
/// during test runs.
fn init_tracing() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

/// Deterministic button: fixed-advance metrics (half the font size per
/// character), no animation, 10px font.
fn harness_button(title: &str, width: f32, height: f32) -> FlatButton {
    init_tracing();
    let mut button =
        FlatButton::with_text_measurer(title, Arc::new(FixedAdvanceMeasurer::new(0.5)));
    button.set_animate_state(false);
    button.set_font(Font::new(FontFamily::SansSerif, 10.0));
    button.set_geometry(Rect::new(0.0, 0.0, width, height));
    button
}

fn click_through(button: &mut FlatButton, pos: Point) {
    button.handle_pointer_press(&PointerPressEvent::new(
        PointerButton::Primary,
        pos,
        KeyboardModifiers::default(),
    ));
    button.handle_pointer_release(&PointerReleaseEvent::new(
        PointerButton::Primary,
        pos,
        KeyboardModifiers::default(),
    ));
}

#[test]
fn centered_title_without_icon() {
    // 100x30 control, title "OK": the title layer gets the measured text
    // size and sits centered on both axes.
    let mut button = harness_button("OK", 100.0, 30.0);
    button.layout();

    let frame = button.title_layer().frame;
    let measured = button.text_size();

    assert_eq!(measured, Size::new(10.0, 12.0)); // 2 chars x 5.0, 10.0 x 1.2
    assert_eq!(frame.size, measured);
    assert_eq!(frame.origin.x, 45.0);
    assert_eq!(frame.origin.y, 9.0);

    // No icon: the icon layer is a hidden zero-sized region.
    assert!(button.icon_layer().hidden);
    assert_eq!(button.icon_layer().frame, Rect::ZERO);
}

#[test]
fn layout_is_idempotent() {
    let mut button = harness_button("Retry", 120.0, 28.0);
    button.layout();
    let first = (button.title_layer().frame, button.icon_layer().frame);

    button.layout();
    let second = (button.title_layer().frame, button.icon_layer().frame);

    assert_eq!(first, second);
}

#[test]
fn centered_pair_has_exact_gap_and_shared_center() {
    // 200 wide, title "OK" (10px), 16px icon, default 8px text margin:
    // icon sits immediately left of the title with exactly the margin gap,
    // and the pair is centered as a unit.
    let mut button = harness_button("OK", 200.0, 40.0);
    let icon = Icon::from_rgba8(vec![0u8; 16 * 16 * 4], 16, 16).unwrap();
    button.set_icon(Some(icon));
    button.layout();

    let title = button.title_layer().frame;
    let icon = button.icon_layer().frame;

    assert_eq!(title.origin.x, 107.0);
    assert_eq!(icon.origin.x, 83.0);
    // Exact configured gap between icon's right edge and title's start.
    assert_eq!(title.origin.x - icon.right(), button.text_margin());
    // The icon+gap+title unit is centered within the bounds.
    let unit_center = (icon.left() + title.right()) / 2.0;
    assert_eq!(unit_center, 100.0);
    // Both vertically centered.
    assert_eq!(icon.origin.y, 12.0);
    assert_eq!(title.origin.y, 14.0);
}

#[test]
fn leading_icon_offsets_title() {
    let mut button = harness_button("Go", 200.0, 40.0);
    let icon = Icon::from_rgba8(vec![0u8; 16 * 16 * 4], 16, 16).unwrap();
    button.set_icon(Some(icon));
    button.set_content_position(ContentPosition::Left);
    button.layout();

    let icon_frame = button.icon_layer().frame;
    let title_frame = button.title_layer().frame;

    assert_eq!(icon_frame.origin.x, button.icon_margin());
    assert_eq!(
        title_frame.origin.x,
        button.text_margin() + 16.0 + button.icon_margin()
    );
}

#[test]
fn trailing_icon_sits_flush_right() {
    let mut button = harness_button("Go", 200.0, 40.0);
    let icon = Icon::from_rgba8(vec![0u8; 16 * 16 * 4], 16, 16).unwrap();
    button.set_icon(Some(icon));
    button.set_content_position(ContentPosition::Right);
    button.layout();

    let icon_frame = button.icon_layer().frame;
    let title_frame = button.title_layer().frame;

    assert_eq!(icon_frame.right(), 200.0 - button.icon_margin());
    // Title shifted left of its flush-right position by the icon block.
    assert_eq!(
        title_frame.origin.x,
        200.0 - button.text_size().width - button.text_margin() - (16.0 + button.icon_margin())
    );
}

#[test]
fn origins_snap_to_device_pixels() {
    // 99 wide with a 10px title centers at x = 44.5, which is not on the
    // 1x pixel grid.
    let mut button = harness_button("OK", 99.0, 30.0);
    button.layout();
    assert_eq!(button.title_layer().frame.origin.x, 45.0); // rounded from 44.5

    // At 2x scale, half-pixel positions are on the grid.
    button.set_contents_scale(2.0);
    button.layout();
    assert_eq!(button.title_layer().frame.origin.x, 44.5);
}

#[test]
fn click_fires_exactly_once_and_toggles_once() {
    let mut button = harness_button("OK", 100.0, 30.0);
    let clicks = Arc::new(AtomicU32::new(0));

    let clicks_clone = clicks.clone();
    button.clicked().connect(move |_| {
        clicks_clone.fetch_add(1, Ordering::SeqCst);
    });

    click_through(&mut button, Point::new(50.0, 15.0));

    assert_eq!(clicks.load(Ordering::SeqCst), 1);
    assert!(button.is_active());

    // A second full click toggles back.
    click_through(&mut button, Point::new(50.0, 15.0));
    assert_eq!(clicks.load(Ordering::SeqCst), 2);
    assert!(!button.is_active());
}

#[test]
fn abandoned_press_never_fires() {
    // Press, drag out, and never receive the release (hosts that hit-test
    // the release away from the control simply do not deliver it).
    let mut button = harness_button("OK", 100.0, 30.0);
    let clicks = Arc::new(AtomicU32::new(0));

    let clicks_clone = clicks.clone();
    button.clicked().connect(move |_| {
        clicks_clone.fetch_add(1, Ordering::SeqCst);
    });

    button.handle_pointer_press(&PointerPressEvent::new(
        PointerButton::Primary,
        Point::new(50.0, 15.0),
        KeyboardModifiers::default(),
    ));
    button.handle_pointer_leave();

    assert_eq!(clicks.load(Ordering::SeqCst), 0);
    assert!(!button.is_active());
    assert!(!button.is_pressed());
}

#[test]
fn disabled_control_passes_hits_through() {
    let mut button = harness_button("OK", 100.0, 30.0);

    assert!(button.hit_test(Point::new(50.0, 15.0)));
    button.set_enabled(false);
    assert!(!button.hit_test(Point::new(50.0, 15.0)));

    // Re-enabled, hit-testing is geometry-based again.
    button.set_enabled(true);
    assert!(button.hit_test(Point::new(0.0, 0.0)));
    assert!(!button.hit_test(Point::new(100.0, 30.0)));
    assert!(!button.hit_test(Point::new(-1.0, 15.0)));
}

#[test]
fn full_variant_matrix_reaches_layers() {
    let mut button = harness_button("OK", 100.0, 30.0);
    button.set_background_color_light(RED);
    button.set_background_color_dark(GREEN);
    button.set_active_background_color_light(BLUE);
    button.set_active_background_color_dark(YELLOW);

    let cases = [
        (Appearance::Light, false, RED),
        (Appearance::Light, true, BLUE),
        (Appearance::Dark, false, GREEN),
        (Appearance::Dark, true, YELLOW),
    ];

    for (appearance, active, expected) in cases {
        button.set_appearance(appearance);
        button.set_active(active);
        assert_eq!(
            button.surface().background.target(),
            expected,
            "appearance {appearance:?}, active {active}"
        );
    }
}

#[test]
fn combined_setter_overwrites_both_appearance_variants() {
    let mut button = harness_button("OK", 100.0, 30.0);
    button.set_background_color_light(RED);
    button.set_background_color_dark(GREEN);

    button.set_background_color(BLUE);
    assert_eq!(button.style().background.light(), BLUE);
    assert_eq!(button.style().background.dark(), BLUE);

    button.set_appearance(Appearance::Dark);
    assert_eq!(button.surface().background.target(), BLUE);
}

#[test]
fn title_color_drives_icon_tint() {
    let mut button = harness_button("OK", 100.0, 30.0);
    let icon = Icon::from_rgba8(vec![0u8; 4], 1, 1).unwrap();
    button.set_icon(Some(icon));

    button.set_title_color(RED);
    assert_eq!(button.title_layer().color.target(), RED);
    assert_eq!(button.icon_layer().tint.target(), RED);

    button.set_active_title_color(BLUE);
    button.set_active(true);
    assert_eq!(button.title_layer().color.target(), BLUE);
    assert_eq!(button.icon_layer().tint.target(), BLUE);
}

#[test]
fn animated_toggle_interpolates_instead_of_jumping() {
    let mut button = harness_button("OK", 100.0, 30.0);
    button.set_animate_state(true);
    button.set_active_duration(std::time::Duration::from_secs(60));
    button.set_background_color(RED);
    button.set_active_background_color(BLUE);

    button.set_active(true);

    let background = &button.surface().background;
    assert!(background.is_animating());
    assert_eq!(background.target(), BLUE);
    // Freshly started: still rendering (essentially) the old color.
    let shown = background.current();
    assert!((shown.r - RED.r).abs() < 0.05);
}

#[test]
fn animation_disabled_pushes_immediately() {
    let mut button = harness_button("OK", 100.0, 30.0);
    button.set_background_color(RED);
    button.set_active_background_color(BLUE);

    button.set_active(true);

    let background = &button.surface().background;
    assert!(!background.is_animating());
    assert_eq!(background.current(), BLUE);
}

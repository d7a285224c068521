// Host-side tests for pure input and layout helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/input.rs"]
mod input;
#[path = "../src/ui.rs"]
mod ui;

use carousel_core::{InputEvent, Key, Viewport};
use input::*;
use ui::*;

#[test]
fn wheel_pixels_pass_through() {
    assert_eq!(
        wheel_event(3.0, -120.0, DOM_DELTA_PIXEL, 800.0),
        InputEvent::Wheel { dx: 3.0, dy: -120.0 }
    );
}

#[test]
fn wheel_lines_and_pages_scale_to_pixels() {
    assert_eq!(
        wheel_event(0.0, 3.0, DOM_DELTA_LINE, 800.0),
        InputEvent::Wheel {
            dx: 0.0,
            dy: 3.0 * WHEEL_LINE_HEIGHT_PX
        }
    );
    assert_eq!(
        wheel_event(0.0, -1.0, DOM_DELTA_PAGE, 600.0),
        InputEvent::Wheel { dx: 0.0, dy: -600.0 }
    );
    // a collapsed canvas still yields a usable page unit
    assert_eq!(
        wheel_event(0.0, 2.0, DOM_DELTA_PAGE, 0.0),
        InputEvent::Wheel { dx: 0.0, dy: 2.0 }
    );
}

#[test]
fn pointer_is_relative_to_canvas_origin() {
    assert_eq!(
        pointer_move_event(150.0, 90.0, 50.0, 40.0),
        InputEvent::PointerMove { x: 100.0, y: 50.0 }
    );
}

#[test]
fn only_main_button_counts() {
    assert!(is_primary_button(0));
    assert!(!is_primary_button(1));
    assert!(!is_primary_button(2));
}

#[test]
fn key_code_preferred_over_key() {
    assert_eq!(
        key_event("ArrowLeft", "a"),
        Some(InputEvent::Key(Key::ArrowLeft))
    );
    assert_eq!(key_event("", "Escape"), Some(InputEvent::Key(Key::Escape)));
    assert_eq!(key_event("NumpadEnter", "Enter"), Some(InputEvent::Key(Key::Enter)));
    assert_eq!(key_event("KeyQ", "q"), None);
}

#[test]
fn arrows_suppress_page_scroll() {
    assert!(should_prevent_default(Key::ArrowDown));
    assert!(should_prevent_default(Key::ArrowLeft));
    assert!(!should_prevent_default(Key::Enter));
    assert!(!should_prevent_default(Key::Escape));
}

#[test]
fn backing_size_applies_dpr_and_never_zero() {
    assert_eq!(backing_size(640.0, 480.0, 2.0), (1280, 960));
    assert_eq!(backing_size(0.0, 0.0, 1.0), (1, 1));
    assert_eq!(css_viewport(640.0, 480.0), Viewport::new(640.0, 480.0));
}

#[test]
fn title_stretches_to_track_width() {
    assert!((title_scale(400.0, 200.0) - 2.0).abs() < 1e-6);
    assert_eq!(title_scale(400.0, 0.0), 1.0);
    assert_eq!(title_scale(0.0, 120.0), 1.0);
}

#[test]
fn track_sits_below_centered_panel() {
    // 800 tall viewport, 400 tall panel: panel spans 200..600
    assert!((track_margin_top(Viewport::new(1200.0, 800.0), 400.0) - 600.0).abs() < 1e-6);
}

#[test]
fn track_follows_canvas_box_not_window() {
    // canvas shorter than the window it sits in
    let canvas = css_viewport(1200.0, 600.0);
    assert!((track_margin_top(canvas, 300.0) - 450.0).abs() < 1e-6);
}

#[test]
fn track_moves_against_card_lift() {
    assert_eq!(track_transform(120.0), "translate(0px, -120px)");
    assert_eq!(track_transform(-30.5), "translate(0px, 30.5px)");
    assert_eq!(scale_transform(1.5), "scale(1.5, 1.5)");
    assert_eq!(px(42.0), "42px");
}

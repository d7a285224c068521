use carousel_core::{InputEvent, Key, Viewport};

// WheelEvent.deltaMode
pub const DOM_DELTA_PIXEL: u32 = 0;
pub const DOM_DELTA_LINE: u32 = 1;
pub const DOM_DELTA_PAGE: u32 = 2;

pub const WHEEL_LINE_HEIGHT_PX: f32 = 16.0;

/// Wheel deltas normalized to pixels.
#[inline]
pub fn wheel_event(dx: f64, dy: f64, delta_mode: u32, page_height: f32) -> InputEvent {
    let unit = match delta_mode {
        DOM_DELTA_LINE => WHEEL_LINE_HEIGHT_PX,
        DOM_DELTA_PAGE => page_height.max(1.0),
        _ => 1.0,
    };
    InputEvent::Wheel {
        dx: dx as f32 * unit,
        dy: dy as f32 * unit,
    }
}

// ---------------- Pointer helpers ----------------
/// Client coordinates relative to the canvas' top-left corner, in CSS px.
#[inline]
pub fn pointer_move_event(client_x: f64, client_y: f64, rect_left: f64, rect_top: f64) -> InputEvent {
    InputEvent::PointerMove {
        x: (client_x - rect_left) as f32,
        y: (client_y - rect_top) as f32,
    }
}

/// Only the main button (usually left) drives the carousel.
#[inline]
pub fn is_primary_button(button: i16) -> bool {
    button == 0
}

// ---------------- Keyboard ----------------
/// Prefer the layout-independent `code`, fall back to `key`.
#[inline]
pub fn key_event(code: &str, key: &str) -> Option<InputEvent> {
    Key::from_code(code)
        .or_else(|| Key::from_code(key))
        .map(InputEvent::Key)
}

/// Arrow keys would otherwise scroll the page under the canvas.
#[inline]
pub fn should_prevent_default(key: Key) -> bool {
    matches!(
        key,
        Key::ArrowUp | Key::ArrowDown | Key::ArrowLeft | Key::ArrowRight
    )
}

// ---------------- Sizing ----------------
#[inline]
pub fn css_viewport(width: f64, height: f64) -> Viewport {
    Viewport::new(width as f32, height as f32)
}

/// Canvas backing store size for a CSS box at the given device pixel ratio.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, dpr: f64) -> (u32, u32) {
    let w = (css_width * dpr) as u32;
    let h = (css_height * dpr) as u32;
    (w.max(1), h.max(1))
}

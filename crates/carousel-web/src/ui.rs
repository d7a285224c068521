//! Layout arithmetic for the DOM overlay (title, description track).

use carousel_core::Viewport;

/// Uniform scale that stretches the title to the panel width.
///
/// Returns 1 when the text has not been laid out yet.
#[inline]
pub fn title_scale(track_width: f32, text_width: f32) -> f32 {
    if text_width > 0.0 && track_width > 0.0 {
        track_width / text_width
    } else {
        1.0
    }
}

/// Top margin that puts the track just below the centered panel.
///
/// `viewport` is the canvas box the carousel lays out against, not the window.
#[inline]
pub fn track_margin_top(viewport: Viewport, panel_height: f32) -> f32 {
    viewport.height - (viewport.height - panel_height) / 2.0
}

/// CSS transform following the lifted detail card; the track moves opposite.
#[inline]
pub fn track_transform(pixel_y: f32) -> String {
    format!("translate(0px, {}px)", -pixel_y)
}

#[inline]
pub fn scale_transform(scale: f32) -> String {
    format!("scale({scale}, {scale})")
}

#[inline]
pub fn px(value: f32) -> String {
    format!("{value}px")
}

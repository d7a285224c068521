//! Pure projection and interpolation helpers.
//!
//! Pixel/world conversions take the live camera distance on every call:
//! perspective foreshortening depends on depth, so nothing here is cached.

use crate::config::Viewport;
use glam::Vec2;

#[inline]
pub fn deg_to_rad(deg: f32) -> f32 {
    deg * std::f32::consts::PI / 180.0
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn clamp(v: f32, min: f32, max: f32) -> f32 {
    v.max(min).min(max)
}

/// One first-order low-pass step: close `k` of the remaining distance.
#[inline]
pub fn damp(current: f32, target: f32, k: f32) -> f32 {
    current + (target - current) * k
}

/// World-space height visible at `distance` in front of a camera.
#[inline]
pub fn visible_height(fov_y_degrees: f32, distance: f32) -> f32 {
    2.0 * (deg_to_rad(fov_y_degrees) / 2.0).tan() * distance
}

/// Convert a length in viewport pixels to world units on a plane `distance` away.
pub fn pixel_to_world_length(
    px: f32,
    fov_y_degrees: f32,
    distance: f32,
    viewport_height_px: f32,
) -> f32 {
    if viewport_height_px <= 0.0 {
        return 0.0;
    }
    px * visible_height(fov_y_degrees, distance) / viewport_height_px
}

/// Inverse of [`pixel_to_world_length`].
pub fn world_length_to_pixel(
    world: f32,
    fov_y_degrees: f32,
    distance: f32,
    viewport_height_px: f32,
) -> f32 {
    let visible = visible_height(fov_y_degrees, distance);
    if visible <= 0.0 {
        return 0.0;
    }
    world * viewport_height_px / visible
}

/// Size of a panel after normalizing its natural pixel size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalizedSize {
    pub width: f32,
    pub height: f32,
    pub aspect: f32,
}

/// Portrait images get a fixed height of `target`, everything else a fixed width.
pub fn normalize_size(natural_w: f32, natural_h: f32, target: f32) -> NormalizedSize {
    let aspect = natural_w / natural_h;
    let portrait = natural_h > natural_w;
    let width = if portrait { target * aspect } else { target };
    let height = if portrait { target } else { target / aspect };
    NormalizedSize {
        width,
        height,
        aspect,
    }
}

/// Device pixel position to normalized device coordinates (y up).
pub fn pointer_to_ndc(px: f32, py: f32, viewport: Viewport) -> Vec2 {
    if viewport.is_degenerate() {
        return Vec2::ZERO;
    }
    let x = (px / viewport.width) * 2.0 - 1.0;
    let y = -(py / viewport.height) * 2.0 + 1.0;
    Vec2::new(clamp(x, -1.0, 1.0), clamp(y, -1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert_eq!(lerp(2.0, 6.0, 0.25), 3.0);
    }

    #[test]
    fn visible_height_at_90_degrees_is_twice_distance() {
        let h = visible_height(90.0, 10.0);
        assert!((h - 20.0).abs() < 1e-4);
    }

    #[test]
    fn normalize_landscape_fixes_width() {
        let s = normalize_size(1600.0, 800.0, 550.0);
        assert_eq!(s.width, 550.0);
        assert!((s.height - 275.0).abs() < 1e-4);
        assert!((s.aspect - 2.0).abs() < 1e-6);
    }

    #[test]
    fn normalize_portrait_fixes_height() {
        let s = normalize_size(400.0, 800.0, 550.0);
        assert_eq!(s.height, 550.0);
        assert!((s.width - 275.0).abs() < 1e-4);
    }

    #[test]
    fn normalize_square_takes_landscape_branch() {
        let s = normalize_size(300.0, 300.0, 550.0);
        assert_eq!(s.width, 550.0);
        assert_eq!(s.height, 550.0);
    }

    #[test]
    fn pointer_center_maps_to_origin() {
        let vp = Viewport::new(800.0, 600.0);
        let ndc = pointer_to_ndc(400.0, 300.0, vp);
        assert!(ndc.length() < 1e-6);
        let top_left = pointer_to_ndc(0.0, 0.0, vp);
        assert_eq!(top_left, Vec2::new(-1.0, 1.0));
    }

    #[test]
    fn zero_viewport_height_converts_to_zero() {
        assert_eq!(pixel_to_world_length(10.0, 75.0, 500.0, 0.0), 0.0);
    }
}

use crate::constants::*;

/// Tunable parameters for one carousel instance.
///
/// `Default` reproduces the values in [`crate::constants`]; hosts override
/// individual fields with struct update syntax.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselConfig {
    pub spacing: f32,
    pub target_dimension: f32,
    pub plane_z: f32,
    pub camera_z: f32,
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub lerp_coef: f32,
    pub rotation_lerp_factor: f32,
    pub side_rotation_degrees: f32,
    pub tilt_sensitivity: f32,
    pub hover_open: f32,
    pub hover_scale: f32,
    pub detail_scale: f32,
    pub detail_lift_px: f32,
    pub detail_scroll_step_px: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            spacing: PANEL_SPACING,
            target_dimension: PANEL_TARGET_DIMENSION,
            plane_z: PANEL_PLANE_Z,
            camera_z: CAMERA_Z,
            fov_y_degrees: CAMERA_FOV_Y_DEGREES,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            lerp_coef: LERP_COEF,
            rotation_lerp_factor: ROTATION_LERP_FACTOR,
            side_rotation_degrees: SIDE_ROTATION_DEGREES,
            tilt_sensitivity: TILT_SENSITIVITY,
            hover_open: HOVER_OPEN,
            hover_scale: HOVER_SCALE,
            detail_scale: DETAIL_SCALE,
            detail_lift_px: DETAIL_LIFT_PX,
            detail_scroll_step_px: DETAIL_SCROLL_STEP_PX,
        }
    }
}

impl CarouselConfig {
    /// Smoothing coefficient applied to rotations each tick.
    pub fn rotation_coef(&self) -> f32 {
        (self.lerp_coef * self.rotation_lerp_factor).min(1.0)
    }
}

/// Host viewport size in device pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }

    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

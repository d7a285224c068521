// Shared layout/animation tuning constants used by both web and native frontends.

// Layout
pub const PANEL_SPACING: f32 = 100.0; // distance between neighbouring panel slots along X
pub const PANEL_TARGET_DIMENSION: f32 = 550.0; // longer side of a normalized panel, world units
pub const PANEL_PLANE_Z: f32 = 0.0; // every panel lives on this depth plane

// Camera
pub const CAMERA_Z: f32 = 500.0;
pub const CAMERA_FOV_Y_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 1.0;
pub const CAMERA_FAR: f32 = 1000.0;

// Smoothing
pub const LERP_COEF: f32 = 0.05; // fraction of remaining distance closed per tick
pub const ROTATION_LERP_FACTOR: f32 = 2.0; // rotation converges this many times faster

// Rotation / hover response
pub const SIDE_ROTATION_DEGREES: f32 = 90.0; // unselected panels turn edge-on
pub const TILT_SENSITIVITY: f32 = 0.25; // radians of tilt at the viewport edge
pub const HOVER_OPEN: f32 = 0.5; // how far a hovered side panel turns toward the viewer
pub const HOVER_SCALE: f32 = 1.05;

// Detail view
pub const DETAIL_SCALE: f32 = 1.25;
pub const DETAIL_LIFT_PX: f32 = 120.0; // initial upward shift of the detail card
pub const DETAIL_SCROLL_STEP_PX: f32 = 60.0; // per wheel notch / arrow press

// Fallback viewport before the host reports a real size
pub const DEFAULT_VIEWPORT_WIDTH: f32 = 1280.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 720.0;

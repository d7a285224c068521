//! Camera description shared by the web and native frontends.
//!
//! The camera looks straight down −Z and only ever travels along X, so the
//! look-at target is always the point on the panel plane in front of it.

use crate::config::{CarouselConfig, Viewport};
use glam::{Mat4, Vec2, Vec3, Vec4};

/// World-space ray with a normalized direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Right-handed perspective camera.
#[derive(Clone, Debug)]
pub struct PerspectiveCamera {
    pub position: Vec3,
    pub fov_y_degrees: f32,
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl PerspectiveCamera {
    pub fn new(config: &CarouselConfig, viewport: Viewport) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, config.camera_z),
            fov_y_degrees: config.fov_y_degrees,
            aspect: viewport.aspect(),
            znear: config.near,
            zfar: config.far,
        }
    }

    /// Distance along the view axis to the plane `z = plane_z`.
    pub fn distance_to_plane(&self, plane_z: f32) -> f32 {
        (self.position.z - plane_z).abs()
    }

    pub fn set_x(&mut self, x: f32) {
        self.position.x = x;
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_y_degrees.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        let target = Vec3::new(self.position.x, self.position.y, self.position.z - 1.0);
        Mat4::look_at_rh(self.position, target, Vec3::Y)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space ray through a point in normalized device coordinates.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_projection().inverse();
        let p_near = inv * Vec4::new(ndc.x, ndc.y, 0.0, 1.0);
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let near: Vec3 = p_near.truncate() / p_near.w;
        let far: Vec3 = p_far.truncate() / p_far.w;
        Ray {
            origin: self.position,
            direction: (far - near).normalize_or_zero(),
        }
    }
}

use crate::camera::Ray;
use glam::{Mat4, Quat, Vec3};

/// Position, rotation and scale of one panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub scale_x: f32,
    pub scale_y: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation_x: 0.0,
            rotation_y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }
}

impl Transform {
    /// Model matrix with X-then-Y rotation order.
    pub fn model_matrix(&self) -> Mat4 {
        let rotation = Quat::from_rotation_x(self.rotation_x) * Quat::from_rotation_y(self.rotation_y);
        Mat4::from_scale_rotation_translation(
            Vec3::new(self.scale_x, self.scale_y, 1.0),
            rotation,
            self.position,
        )
    }

    /// Largest absolute per-field difference to `other`.
    pub fn max_delta(&self, other: &Transform) -> f32 {
        let d = (self.position - other.position).abs();
        d.max_element()
            .max((self.rotation_x - other.rotation_x).abs())
            .max((self.rotation_y - other.rotation_y).abs())
            .max((self.scale_x - other.scale_x).abs())
            .max((self.scale_y - other.scale_y).abs())
    }
}

/// Immutable world-space size of a panel, fixed at load time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelSize {
    pub width: f32,
    pub height: f32,
    pub aspect: f32,
    /// Share of the camera's visible height the panel covered when created.
    pub viewport_height_fraction: f32,
}

#[derive(Clone, Debug)]
pub struct Panel {
    index: usize,
    size: PanelSize,
    pub(crate) current: Transform,
    pub(crate) target: Transform,
}

impl Panel {
    pub(crate) fn new(index: usize, size: PanelSize, initial: Transform) -> Self {
        Self {
            index,
            size,
            current: initial,
            target: initial,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn size(&self) -> PanelSize {
        self.size
    }

    /// Transform rendered this tick.
    pub fn current(&self) -> &Transform {
        &self.current
    }

    /// Transform the panel is animating toward.
    pub fn target(&self) -> &Transform {
        &self.target
    }

    /// Distance along `ray` to this panel's current quad, if it is hit.
    ///
    /// The quad is double sided; panels seen exactly edge-on never hit.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        if self.current.scale_x.abs() < 1e-6 || self.current.scale_y.abs() < 1e-6 {
            return None;
        }
        let inv = self.current.model_matrix().inverse();
        let o = inv.transform_point3(ray.origin);
        let d = inv.transform_vector3(ray.direction);
        if d.z.abs() < 1e-6 {
            return None;
        }
        let t = -o.z / d.z;
        if t <= 0.0 {
            return None;
        }
        let hit = o + d * t;
        let inside = hit.x.abs() <= self.size.width / 2.0 && hit.y.abs() <= self.size.height / 2.0;
        inside.then_some(t)
    }
}

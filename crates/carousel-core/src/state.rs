//! Selection and detail-view state machine.
//!
//! Every operation here is synchronous and may be a no-op under its guard;
//! out-of-range selections are ignored so held keys at the ends are harmless.

use crate::camera::PerspectiveCamera;
use crate::config::{CarouselConfig, Viewport};
use crate::math::{clamp, deg_to_rad, pixel_to_world_length, world_length_to_pixel};
use crate::observer::{CarouselObserver, DisplayDimensions};
use crate::registry::PanelRegistry;
use glam::Vec2;
use std::cmp::Ordering;

pub struct Carousel {
    pub(crate) config: CarouselConfig,
    pub(crate) viewport: Viewport,
    pub(crate) camera: PerspectiveCamera,
    pub(crate) registry: PanelRegistry,
    pub(crate) observer: Box<dyn CarouselObserver>,
    pub(crate) selected_index: usize,
    pub(crate) hover_index: Option<usize>,
    pub(crate) viewing_detail: bool,
    pub(crate) pointer: Vec2,
    pub(crate) pointer_down: bool,
    pub(crate) camera_target_x: f32,
    pub(crate) scroll_fraction: f32,
}

impl Carousel {
    /// Activate a carousel over a fully loaded registry.
    ///
    /// Selects panel 0, which emits the first `on_selection_change`.
    pub fn new(
        registry: PanelRegistry,
        camera: PerspectiveCamera,
        config: CarouselConfig,
        viewport: Viewport,
        observer: Box<dyn CarouselObserver>,
    ) -> Self {
        let mut carousel = Self {
            config,
            viewport,
            camera,
            registry,
            observer,
            selected_index: 0,
            hover_index: None,
            viewing_detail: false,
            pointer: Vec2::ZERO,
            pointer_down: false,
            camera_target_x: 0.0,
            scroll_fraction: 0.0,
        };
        carousel.camera.set_aspect(viewport.aspect());
        carousel.select_index(0);
        carousel
    }

    pub fn count(&self) -> usize {
        self.registry.count()
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn hover_index(&self) -> Option<usize> {
        self.hover_index
    }

    pub fn hovering(&self) -> bool {
        self.hover_index.is_some()
    }

    pub fn viewing_detail(&self) -> bool {
        self.viewing_detail
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn pointer_down(&self) -> bool {
        self.pointer_down
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn camera_target_x(&self) -> f32 {
        self.camera_target_x
    }

    pub fn scroll_fraction(&self) -> f32 {
        self.scroll_fraction
    }

    pub fn registry(&self) -> &PanelRegistry {
        &self.registry
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn select_index(&mut self, index: usize) {
        if index >= self.count() {
            log::debug!("[carousel] ignoring selection {} of {}", index, self.count());
            return;
        }
        self.exit_detail();
        self.reset_vertical_targets();
        self.selected_index = index;
        self.camera_target_x = index as f32 * self.config.spacing;
        self.update_targets();
        log::debug!("[carousel] selected {}", index);
        let dims = self.display_dimensions(index);
        self.observer.on_selection_change(index, dims);
    }

    pub fn select_next(&mut self) {
        if self.selected_index + 1 < self.count() {
            self.select_index(self.selected_index + 1);
        }
    }

    pub fn select_prev(&mut self) {
        if let Some(i) = self.selected_index.checked_sub(1) {
            self.select_index(i);
        }
    }

    pub fn enter_detail(&mut self) {
        if self.viewing_detail || self.selected_index >= self.count() {
            return;
        }
        self.viewing_detail = true;
        let lift = self.pixel_to_world(self.config.detail_lift_px);
        if let Some(t) = self.registry.target_mut(self.selected_index) {
            t.position.y += lift;
        }
        self.update_targets();
        log::debug!("[carousel] detail view on {}", self.selected_index);
        self.observer.on_view_change(self.selected_index, true);
    }

    pub fn exit_detail(&mut self) {
        if !self.viewing_detail {
            return;
        }
        self.viewing_detail = false;
        self.reset_vertical_targets();
        self.update_targets();
        log::debug!("[carousel] detail view off {}", self.selected_index);
        self.observer.on_view_change(self.selected_index, false);
    }

    pub fn toggle_detail(&mut self) {
        if self.viewing_detail {
            self.exit_detail();
        } else {
            self.enter_detail();
        }
    }

    /// Click/tap release on whatever is currently hovered.
    pub fn handle_primary_action(&mut self) {
        match self.hover_index {
            Some(i) if i == self.selected_index => self.toggle_detail(),
            Some(i) => self.select_index(i),
            None => {}
        }
    }

    /// Move the detail card by one step; positive `direction` scrolls the content up.
    ///
    /// Not clamped: the host bounds the visible description.
    pub fn scroll_detail(&mut self, direction: f32) {
        if !self.viewing_detail || direction == 0.0 || !direction.is_finite() {
            return;
        }
        let step = self.pixel_to_world(self.config.detail_scroll_step_px) * direction.signum();
        if let Some(t) = self.registry.target_mut(self.selected_index) {
            t.position.y += step;
        }
    }

    /// Store the pointer in normalized device coordinates; hover updates on the next tick.
    pub fn update_pointer(&mut self, x: f32, y: f32) {
        if x.is_finite() && y.is_finite() {
            self.pointer = Vec2::new(clamp(x, -1.0, 1.0), clamp(y, -1.0, 1.0));
        }
    }

    pub fn set_pointer_down(&mut self, down: bool) {
        self.pointer_down = down;
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        let viewport = Viewport::new(width, height);
        if viewport.is_degenerate() {
            return;
        }
        self.viewport = viewport;
        self.camera.set_aspect(viewport.aspect());
        self.update_targets();
    }

    /// Intrinsic size of panel `index` in viewport pixels at its current depth.
    pub fn display_dimensions(&self, index: usize) -> DisplayDimensions {
        let Some((w, h)) = self.registry.bounds_of(index) else {
            return DisplayDimensions::default();
        };
        DisplayDimensions {
            width: self.world_to_pixel(w),
            height: self.world_to_pixel(h),
        }
    }

    pub(crate) fn panel_distance(&self) -> f32 {
        self.camera.distance_to_plane(self.config.plane_z)
    }

    pub fn pixel_to_world(&self, px: f32) -> f32 {
        pixel_to_world_length(
            px,
            self.camera.fov_y_degrees,
            self.panel_distance(),
            self.viewport.height,
        )
    }

    pub fn world_to_pixel(&self, world: f32) -> f32 {
        world_length_to_pixel(
            world,
            self.camera.fov_y_degrees,
            self.panel_distance(),
            self.viewport.height,
        )
    }

    fn reset_vertical_targets(&mut self) {
        for t in self.registry.targets_mut() {
            t.position.y = 0.0;
        }
    }

    /// Shove the panels on either side of the selection outward so they clear it.
    ///
    /// The gap comes from the selected panel's own half-width, so mixed panel
    /// sizes never overlap the selection. Also sets the resting rotation and
    /// scale each panel settles to when nothing is hovered.
    pub(crate) fn update_targets(&mut self) {
        let selected = self.selected_index;
        let spacing = self.config.spacing;
        let offset = if self.viewing_detail {
            self.pixel_to_world(self.viewport.width / 2.0)
        } else {
            spacing
        };
        let selected_scale = if self.viewing_detail {
            self.config.detail_scale
        } else {
            1.0
        };
        let selected_width = self.registry.bounds_of(selected).map_or(0.0, |(w, _)| w);
        let displacement = selected_width * selected_scale / 2.0 + offset / 2.0;
        let side = deg_to_rad(self.config.side_rotation_degrees);

        for (i, t) in self.registry.targets_mut().enumerate() {
            let base = i as f32 * spacing;
            let (x, rotation_y, scale) = match i.cmp(&selected) {
                Ordering::Equal => (base, 0.0, selected_scale),
                Ordering::Less => (base - displacement, side, 1.0),
                Ordering::Greater => (base + displacement, -side, 1.0),
            };
            t.position.x = x;
            t.rotation_x = 0.0;
            t.rotation_y = rotation_y;
            t.scale_x = scale;
            t.scale_y = scale;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::NotificationLog;

    fn carousel(count: usize, config: CarouselConfig) -> (Carousel, NotificationLog) {
        let viewport = Viewport::new(1000.0, 800.0);
        let camera = PerspectiveCamera::new(&config, viewport);
        let sizes = vec![(1600.0, 800.0); count];
        let registry = PanelRegistry::from_natural_sizes(&sizes, &config, &camera).unwrap();
        let log = NotificationLog::new();
        let c = Carousel::new(registry, camera, config, viewport, Box::new(log.clone()));
        (c, log)
    }

    #[test]
    fn new_selects_first_panel() {
        let (c, log) = carousel(2, CarouselConfig::default());
        assert_eq!(c.selected_index(), 0);
        assert_eq!(log.selections(), vec![0]);
    }

    #[test]
    fn enter_detail_lifts_selected_target() {
        let (mut c, _) = carousel(3, CarouselConfig::default());
        c.select_index(1);
        c.enter_detail();
        let lift = c.pixel_to_world(c.config().detail_lift_px);
        assert!((c.registry().get(1).unwrap().target().position.y - lift).abs() < 1e-4);
        assert_eq!(c.registry().get(0).unwrap().target().position.y, 0.0);
    }

    #[test]
    fn scroll_detail_is_ignored_outside_detail() {
        let (mut c, _) = carousel(2, CarouselConfig::default());
        c.scroll_detail(1.0);
        assert_eq!(c.registry().get(0).unwrap().target().position.y, 0.0);
    }

    #[test]
    fn scroll_detail_accumulates_without_clamping() {
        let (mut c, _) = carousel(2, CarouselConfig::default());
        c.enter_detail();
        let start = c.registry().get(0).unwrap().target().position.y;
        for _ in 0..50 {
            c.scroll_detail(1.0);
        }
        c.scroll_detail(-1.0);
        let step = c.pixel_to_world(c.config().detail_scroll_step_px);
        let y = c.registry().get(0).unwrap().target().position.y;
        assert!((y - (start + 49.0 * step)).abs() < 1e-2);
    }

    #[test]
    fn detail_mode_widens_spacing() {
        let (mut c, _) = carousel(3, CarouselConfig::default());
        c.select_index(1);
        let normal = c.registry().get(2).unwrap().target().position.x;
        c.enter_detail();
        let detail = c.registry().get(2).unwrap().target().position.x;
        assert!(detail > normal);
        c.exit_detail();
        assert_eq!(c.registry().get(2).unwrap().target().position.x, normal);
    }

    #[test]
    fn resize_ignores_zero_sizes() {
        let (mut c, _) = carousel(1, CarouselConfig::default());
        c.resize(0.0, 600.0);
        assert_eq!(c.viewport(), Viewport::new(1000.0, 800.0));
        c.resize(640.0, 480.0);
        assert_eq!(c.viewport(), Viewport::new(640.0, 480.0));
    }

    #[test]
    fn resting_rotations_face_the_selection() {
        let (mut c, _) = carousel(3, CarouselConfig::default());
        c.select_index(1);
        let r = |i: usize| c.registry().get(i).unwrap().target().rotation_y;
        assert!(r(0) > 0.0);
        assert_eq!(r(1), 0.0);
        assert!(r(2) < 0.0);
    }
}

//! Per-frame smoothing of the camera and every panel toward its target.
//!
//! Each tick closes a fixed fraction of the remaining distance, a first-order
//! low-pass rather than a timed tween. Convergence is asymptotic and assumes a
//! steady frame rate.

use crate::camera::PerspectiveCamera;
use crate::math::{damp, world_length_to_pixel};
use crate::observer::ScrollUpdate;
use crate::panel::Transform;
use crate::registry::PanelRegistry;
use crate::state::Carousel;
use std::cmp::Ordering;

/// Everything a renderer needs to draw one frame.
pub struct FrameView<'a> {
    pub camera: &'a PerspectiveCamera,
    pub panels: &'a PanelRegistry,
    pub selected_index: usize,
    pub hover_index: Option<usize>,
    pub viewing_detail: bool,
}

/// Draws the scene; failures are the renderer's to report.
pub trait SceneRenderer {
    fn render(&mut self, frame: &FrameView<'_>);
}

/// Renderer that draws nothing, for headless hosts.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl SceneRenderer for NullRenderer {
    fn render(&mut self, _frame: &FrameView<'_>) {}
}

impl Carousel {
    /// Advance one frame and hand the result to `renderer`.
    pub fn tick(&mut self, renderer: &mut dyn SceneRenderer) {
        self.advance();
        renderer.render(&self.frame_view());
    }

    /// Advance one frame without rendering.
    pub fn advance(&mut self) {
        self.update_hover();
        self.update_camera();
        self.smooth_panels();
        self.emit_scroll();
    }

    pub fn frame_view(&self) -> FrameView<'_> {
        FrameView {
            camera: &self.camera,
            panels: &self.registry,
            selected_index: self.selected_index,
            hover_index: self.hover_index,
            viewing_detail: self.viewing_detail,
        }
    }

    /// Camera travel length: distance from the first to the last slot.
    pub fn track_length(&self) -> f32 {
        self.count().saturating_sub(1) as f32 * self.config.spacing
    }

    fn update_hover(&mut self) {
        let ray = self.camera.ray_from_ndc(self.pointer);
        let hovered = self.registry.hit_test(&ray);
        if hovered != self.hover_index {
            log::trace!("[carousel] hover {:?} -> {:?}", self.hover_index, hovered);
        }
        self.hover_index = hovered;
    }

    fn update_camera(&mut self) {
        let track = self.track_length();
        let target_fraction = if track > 0.0 {
            self.camera_target_x / track
        } else {
            0.0
        };
        self.scroll_fraction = damp(self.scroll_fraction, target_fraction, self.config.lerp_coef);
        self.camera.set_x(self.scroll_fraction * track);
    }

    fn smooth_panels(&mut self) {
        let cfg = &self.config;
        let k = cfg.lerp_coef;
        let k_rot = cfg.rotation_coef();
        let selected = self.selected_index;
        let hover = self.hover_index;
        let detail = self.viewing_detail;
        let pointer = self.pointer;

        for (i, target, current) in self.registry.currents_mut() {
            let hovered = hover == Some(i);
            let (rotation_x, rotation_y, scale) = match i.cmp(&selected) {
                Ordering::Equal if hovered && !detail => (
                    -pointer.y * cfg.tilt_sensitivity,
                    pointer.x * cfg.tilt_sensitivity,
                    target.scale_x,
                ),
                Ordering::Equal => (target.rotation_x, target.rotation_y, target.scale_x),
                _ if hovered => (
                    0.0,
                    target.rotation_y * (1.0 - cfg.hover_open * pointer.x.abs()),
                    cfg.hover_scale,
                ),
                _ => (0.0, target.rotation_y, target.scale_x),
            };
            let live = Transform {
                position: target.position,
                rotation_x,
                rotation_y,
                scale_x: scale,
                scale_y: scale,
            };
            smooth_toward(current, &live, k, k_rot);
        }
    }

    fn emit_scroll(&mut self) {
        let Some(panel) = self.registry.get(self.selected_index) else {
            return;
        };
        let world_y = panel.current().position.y;
        let update = ScrollUpdate {
            world_y,
            pixel_y: world_length_to_pixel(
                world_y,
                self.camera.fov_y_degrees,
                self.panel_distance(),
                self.viewport.height,
            ),
            target_x: panel.target().position.x,
        };
        self.observer.on_scroll_update(update);
    }
}

fn smooth_toward(current: &mut Transform, target: &Transform, k: f32, k_rot: f32) {
    current.position.x = damp(current.position.x, target.position.x, k);
    current.position.y = damp(current.position.y, target.position.y, k);
    current.position.z = damp(current.position.z, target.position.z, k);
    current.rotation_x = damp(current.rotation_x, target.rotation_x, k_rot);
    current.rotation_y = damp(current.rotation_y, target.rotation_y, k_rot);
    current.scale_x = damp(current.scale_x, target.scale_x, k);
    current.scale_y = damp(current.scale_y, target.scale_y, k);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CarouselConfig, Viewport};
    use crate::observer::{Notification, NotificationLog};

    fn carousel(count: usize) -> (Carousel, NotificationLog) {
        let config = CarouselConfig::default();
        let viewport = Viewport::new(1000.0, 800.0);
        let camera = PerspectiveCamera::new(&config, viewport);
        let registry =
            PanelRegistry::from_natural_sizes(&vec![(800.0, 600.0); count], &config, &camera).unwrap();
        let log = NotificationLog::new();
        let c = Carousel::new(registry, camera, config, viewport, Box::new(log.clone()));
        (c, log)
    }

    struct CountingRenderer(usize);

    impl SceneRenderer for CountingRenderer {
        fn render(&mut self, frame: &FrameView<'_>) {
            assert!(frame.panels.count() > 0);
            self.0 += 1;
        }
    }

    #[test]
    fn tick_renders_once_and_reports_scroll() {
        let (mut c, log) = carousel(3);
        log.take();
        let mut r = CountingRenderer(0);
        c.tick(&mut r);
        c.tick(&mut r);
        assert_eq!(r.0, 2);
        let scrolls = log
            .take()
            .into_iter()
            .filter(|n| matches!(n, Notification::Scroll(_)))
            .count();
        assert_eq!(scrolls, 2);
    }

    #[test]
    fn scroll_fraction_closes_five_percent_per_tick() {
        let (mut c, _) = carousel(3);
        c.select_index(2);
        c.advance();
        assert!((c.scroll_fraction() - 0.05).abs() < 1e-6);
        c.advance();
        assert!((c.scroll_fraction() - 0.0975).abs() < 1e-6);
        assert!((c.camera().position.x - 0.0975 * c.track_length()).abs() < 1e-3);
    }

    #[test]
    fn rotation_converges_twice_as_fast() {
        let (mut c, _) = carousel(2);
        let start = c.registry().get(0).unwrap().current().rotation_y;
        c.advance();
        let after = c.registry().get(0).unwrap().current().rotation_y;
        // selected panel turns from edge-on toward 0 with coefficient 0.1
        assert!((after - start * 0.9).abs() < 1e-5);
    }

    #[test]
    fn scroll_update_converts_world_to_pixels() {
        let (mut c, log) = carousel(2);
        c.enter_detail();
        log.take();
        c.advance();
        let Some(Notification::Scroll(update)) = log.take().pop() else {
            panic!("expected scroll update");
        };
        assert!(update.world_y > 0.0);
        assert!((update.pixel_y - c.world_to_pixel(update.world_y)).abs() < 1e-3);
        assert_eq!(update.target_x, 0.0);
    }
}

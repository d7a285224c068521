//! Ordered panel storage and image loading.

use crate::camera::{PerspectiveCamera, Ray};
use crate::config::CarouselConfig;
use crate::error::{CarouselError, LoadError, Result};
use crate::math::{deg_to_rad, normalize_size, visible_height};
use crate::panel::{Panel, PanelSize, Transform};
use futures::future::try_join_all;
use glam::Vec3;
use std::future::Future;

/// Where to fetch one panel's image from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageDescriptor {
    pub url: String,
}

impl ImageDescriptor {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// A decoded image with its natural pixel size and a host texture handle.
#[derive(Clone, Debug)]
pub struct LoadedImage<T> {
    pub width: u32,
    pub height: u32,
    pub texture: T,
}

/// Asynchronous image source supplied by the host.
pub trait ImageLoader {
    type Texture;

    fn load(&self, url: &str) -> impl Future<Output = std::result::Result<LoadedImage<Self::Texture>, LoadError>>;
}

/// Never empty: both constructors reject an empty batch.
#[derive(Clone, Debug)]
pub struct PanelRegistry {
    panels: Vec<Panel>,
}

impl PanelRegistry {
    /// Load every image concurrently and build the registry once all succeed.
    ///
    /// Textures are returned in panel index order. The first failed load
    /// aborts the whole batch.
    pub async fn load<L: ImageLoader>(
        descriptors: &[ImageDescriptor],
        loader: &L,
        config: &CarouselConfig,
        camera: &PerspectiveCamera,
    ) -> Result<(Self, Vec<L::Texture>)> {
        if descriptors.is_empty() {
            return Err(CarouselError::Empty);
        }
        log::info!("[registry] loading {} images", descriptors.len());
        let images = try_join_all(descriptors.iter().map(|d| loader.load(&d.url))).await?;

        let sizes: Vec<(f32, f32)> = images
            .iter()
            .map(|img| (img.width as f32, img.height as f32))
            .collect();
        let registry = Self::build(&sizes, |i| descriptors[i].url.clone(), config, camera)?;
        log::info!("[registry] {} panels ready", registry.count());
        Ok((registry, images.into_iter().map(|i| i.texture).collect()))
    }

    /// Build panels directly from natural image sizes in pixels.
    ///
    /// Every size must be positive and finite.
    pub fn from_natural_sizes(
        sizes: &[(f32, f32)],
        config: &CarouselConfig,
        camera: &PerspectiveCamera,
    ) -> Result<Self> {
        Self::build(sizes, |i| format!("panel {i}"), config, camera)
    }

    fn build(
        sizes: &[(f32, f32)],
        label: impl Fn(usize) -> String,
        config: &CarouselConfig,
        camera: &PerspectiveCamera,
    ) -> Result<Self> {
        if sizes.is_empty() {
            return Err(CarouselError::Empty);
        }
        if let Some((index, &(width, height))) = sizes
            .iter()
            .enumerate()
            .find(|&(_, &(w, h))| !is_drawable(w) || !is_drawable(h))
        {
            return Err(CarouselError::DegenerateImage {
                url: label(index),
                width,
                height,
            });
        }
        let visible = visible_height(camera.fov_y_degrees, camera.distance_to_plane(config.plane_z));
        let panels = sizes
            .iter()
            .enumerate()
            .map(|(index, &(w, h))| {
                let n = normalize_size(w, h, config.target_dimension);
                let size = PanelSize {
                    width: n.width,
                    height: n.height,
                    aspect: n.aspect,
                    viewport_height_fraction: if visible > 0.0 { n.height / visible } else { 0.0 },
                };
                Panel::new(index, size, initial_transform(index, config))
            })
            .collect();
        Ok(Self { panels })
    }

    pub fn count(&self) -> usize {
        self.panels.len()
    }

    pub fn get(&self, index: usize) -> Option<&Panel> {
        self.panels.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Panel> {
        self.panels.iter()
    }

    /// Intrinsic world-space width and height.
    pub fn bounds_of(&self, index: usize) -> Option<(f32, f32)> {
        self.panels.get(index).map(|p| (p.size().width, p.size().height))
    }

    /// Index of the nearest panel whose current quad `ray` passes through.
    pub fn hit_test(&self, ray: &Ray) -> Option<usize> {
        let mut best = None::<(usize, f32)>;
        for panel in &self.panels {
            if let Some(t) = panel.intersect(ray) {
                match best {
                    Some((_, bt)) if t >= bt => {}
                    _ => best = Some((panel.index(), t)),
                }
            }
        }
        best.map(|(i, _)| i)
    }

    pub(crate) fn target_mut(&mut self, index: usize) -> Option<&mut Transform> {
        self.panels.get_mut(index).map(|p| &mut p.target)
    }

    pub(crate) fn targets_mut(&mut self) -> impl Iterator<Item = &mut Transform> {
        self.panels.iter_mut().map(|p| &mut p.target)
    }

    pub(crate) fn currents_mut(&mut self) -> impl Iterator<Item = (usize, &Transform, &mut Transform)> {
        self.panels
            .iter_mut()
            .map(|p| (p.index(), &p.target, &mut p.current))
    }
}

fn is_drawable(length: f32) -> bool {
    length.is_finite() && length > 0.0
}

/// Panels start in their slot, turned edge-on.
fn initial_transform(index: usize, config: &CarouselConfig) -> Transform {
    Transform {
        position: Vec3::new(index as f32 * config.spacing, 0.0, config.plane_z),
        rotation_y: deg_to_rad(config.side_rotation_degrees),
        ..Transform::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Viewport;
    use std::cell::Cell;

    struct SizedLoader {
        calls: Cell<usize>,
    }

    impl ImageLoader for SizedLoader {
        type Texture = String;

        fn load(&self, url: &str) -> impl Future<Output = std::result::Result<LoadedImage<String>, LoadError>> {
            self.calls.set(self.calls.get() + 1);
            let url = url.to_string();
            async move {
                if url.starts_with("missing") {
                    return Err(LoadError::new(url, "404"));
                }
                let (w, h) = if url.contains("portrait") {
                    (400, 800)
                } else if url.contains("blank") {
                    (0, 300)
                } else {
                    (800, 400)
                };
                Ok(LoadedImage {
                    width: w,
                    height: h,
                    texture: url,
                })
            }
        }
    }

    fn setup() -> (CarouselConfig, PerspectiveCamera) {
        let config = CarouselConfig::default();
        let camera = PerspectiveCamera::new(&config, Viewport::default());
        (config, camera)
    }

    #[test]
    fn load_keeps_index_order() {
        let (config, camera) = setup();
        let loader = SizedLoader { calls: Cell::new(0) };
        let descriptors = vec![
            ImageDescriptor::new("a.jpg"),
            ImageDescriptor::new("b-portrait.jpg"),
            ImageDescriptor::new("c.jpg"),
        ];
        let (registry, textures) =
            pollster::block_on(PanelRegistry::load(&descriptors, &loader, &config, &camera)).unwrap();
        assert_eq!(loader.calls.get(), 3);
        assert_eq!(textures, vec!["a.jpg", "b-portrait.jpg", "c.jpg"]);
        assert_eq!(registry.count(), 3);
        assert_eq!(registry.bounds_of(0), Some((550.0, 275.0)));
        assert_eq!(registry.bounds_of(1), Some((275.0, 550.0)));
        assert_eq!(registry.get(2).unwrap().current().position.x, 200.0);
    }

    #[test]
    fn one_failure_aborts_the_batch() {
        let (config, camera) = setup();
        let loader = SizedLoader { calls: Cell::new(0) };
        let descriptors = vec![ImageDescriptor::new("a.jpg"), ImageDescriptor::new("missing.jpg")];
        let err = pollster::block_on(PanelRegistry::load(&descriptors, &loader, &config, &camera)).unwrap_err();
        assert_eq!(err, CarouselError::Load(LoadError::new("missing.jpg", "404")));
    }

    #[test]
    fn empty_batch_is_rejected() {
        let (config, camera) = setup();
        let loader = SizedLoader { calls: Cell::new(0) };
        let err = pollster::block_on(PanelRegistry::load(&[], &loader, &config, &camera)).unwrap_err();
        assert_eq!(err, CarouselError::Empty);
        assert_eq!(loader.calls.get(), 0);
    }

    #[test]
    fn zero_width_image_aborts_the_batch() {
        let (config, camera) = setup();
        let loader = SizedLoader { calls: Cell::new(0) };
        let descriptors = vec![ImageDescriptor::new("a.jpg"), ImageDescriptor::new("blank.png")];
        let err = pollster::block_on(PanelRegistry::load(&descriptors, &loader, &config, &camera)).unwrap_err();
        assert_eq!(
            err,
            CarouselError::DegenerateImage {
                url: "blank.png".into(),
                width: 0.0,
                height: 300.0,
            }
        );
    }

    #[test]
    fn degenerate_natural_sizes_are_rejected() {
        let (config, camera) = setup();
        for bad in [(0.0, 0.0), (800.0, -1.0), (f32::NAN, 400.0), (800.0, f32::INFINITY)] {
            let err = PanelRegistry::from_natural_sizes(&[(800.0, 400.0), bad], &config, &camera).unwrap_err();
            assert!(
                matches!(err, CarouselError::DegenerateImage { ref url, .. } if url == "panel 1"),
                "{bad:?} gave {err:?}"
            );
        }
        assert_eq!(
            PanelRegistry::from_natural_sizes(&[], &config, &camera).unwrap_err(),
            CarouselError::Empty
        );
    }

    #[test]
    fn empty_registry_never_enters_detail() {
        let (config, camera) = setup();
        let registry = PanelRegistry { panels: Vec::new() };
        let mut c = crate::state::Carousel::new(
            registry,
            camera,
            config,
            Viewport::default(),
            Box::new(crate::observer::NullObserver),
        );
        c.enter_detail();
        assert!(!c.viewing_detail());
        c.toggle_detail();
        assert!(!c.viewing_detail());
        c.advance();
        assert_eq!(c.scroll_fraction(), 0.0);
    }

    #[test]
    fn viewport_fraction_matches_visible_height() {
        let (config, camera) = setup();
        let registry = PanelRegistry::from_natural_sizes(&[(800.0, 800.0)], &config, &camera).unwrap();
        let visible = visible_height(config.fov_y_degrees, config.camera_z);
        let frac = registry.get(0).unwrap().size().viewport_height_fraction;
        assert!((frac - 550.0 / visible).abs() < 1e-6);
    }

    #[test]
    fn panels_start_edge_on_and_are_not_hit() {
        let (config, camera) = setup();
        let registry = PanelRegistry::from_natural_sizes(&[(800.0, 400.0)], &config, &camera).unwrap();
        let ray = camera.ray_from_ndc(glam::Vec2::ZERO);
        assert_eq!(registry.hit_test(&ray), None);
    }
}

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

use carousel_core::{
    counter_label, descriptors, run_frames, Carousel, CarouselConfig, CarouselObserver,
    DisplayDimensions, ManualScheduler, PanelRegistry, PerspectiveCamera, Project,
    Viewport,
};

mod catalog;
mod input;
mod loader;
mod render;

/// Reports selection and view changes on the log.
struct LogObserver {
    projects: Vec<Project>,
}

impl CarouselObserver for LogObserver {
    fn on_selection_change(&mut self, index: usize, dims: DisplayDimensions) {
        if let Some(project) = self.projects.get(index) {
            log::info!(
                "[{} / {}] {} ({:.0}x{:.0} px)",
                counter_label(index),
                self.projects.len(),
                project.title,
                dims.width,
                dims.height
            );
        }
    }

    fn on_view_change(&mut self, index: usize, detail: bool) {
        match self.projects.get(index) {
            Some(project) if detail && !project.description.is_empty() => {
                log::info!("{}", project.description)
            }
            _ => log::debug!("panel {} detail={}", index, detail),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let projects = catalog::projects_from_args(std::env::args_os().skip(1).map(PathBuf::from))?;

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("carousel-3d")
            .build(&event_loop)?,
    );
    let size = window.inner_size();
    let viewport = Viewport::new(size.width as f32, size.height as f32);

    // Nothing is interactive until every image has loaded
    let config = CarouselConfig::default();
    let camera = PerspectiveCamera::new(&config, viewport);
    let (registry, textures) = pollster::block_on(PanelRegistry::load(
        &descriptors(&projects),
        &loader::FileImageLoader,
        &config,
        &camera,
    ))?;

    let mut gpu = pollster::block_on(render::GpuState::new(Arc::clone(&window)))?;
    gpu.upload(&textures);
    drop(textures);
    let gpu = Rc::new(RefCell::new(gpu));

    let carousel = Rc::new(RefCell::new(Carousel::new(
        registry,
        camera,
        config,
        viewport,
        Box::new(LogObserver { projects }),
    )));

    // Frames are pumped from RedrawRequested
    let scheduler = Rc::new(ManualScheduler::new());
    {
        let gpu = Rc::clone(&gpu);
        let carousel = Rc::clone(&carousel);
        run_frames(Rc::clone(&scheduler), move || {
            carousel.borrow_mut().tick(&mut *gpu.borrow_mut());
        });
    }

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::RedrawRequested => {
                scheduler.run_pending();
            }
            other => {
                if let WindowEvent::Resized(size) = &other {
                    gpu.borrow_mut().resize(size.width, size.height);
                }
                if let Some(input) = input::window_input(&other) {
                    carousel.borrow_mut().handle_input(input);
                }
            }
        },
        Event::AboutToWait => window.request_redraw(),
        _ => {}
    })?;
    Ok(())
}

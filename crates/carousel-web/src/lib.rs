#![cfg(target_arch = "wasm32")]
use carousel_core::{
    descriptors, run_frames, Carousel, CarouselConfig, PanelRegistry, PerspectiveCamera,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod loader;
mod render;
mod ui;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("carousel-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, constants::CANVAS_ID)?;

    // Avoid grabbing a 2D context here to allow WebGPU to acquire the canvas
    dom::sync_canvas_backing_size(&canvas);
    let rect = canvas.get_bounding_client_rect();
    let viewport = input::css_viewport(rect.width(), rect.height());

    let projects = dom::read_projects(&document)?;
    log::info!("[init] {} projects in page", projects.len());

    // Nothing is interactive until every image has arrived
    let config = CarouselConfig::default();
    let camera = PerspectiveCamera::new(&config, viewport);
    let (registry, textures) = PanelRegistry::load(
        &descriptors(&projects),
        &loader::FetchImageLoader,
        &config,
        &camera,
    )
    .await?;

    let mut gpu = render::GpuState::new(&canvas).await?;
    gpu.upload(&textures);
    drop(textures);

    let observer = dom::DomObserver::new(&document, &canvas, projects);
    let carousel = Rc::new(RefCell::new(Carousel::new(
        registry,
        camera,
        config,
        viewport,
        Box::new(observer),
    )));

    events::wire_input_handlers(&window, &canvas, &carousel);
    events::wire_nav_buttons(&document, &carousel);

    let mut stats = frame::FrameStats::default();
    run_frames(Rc::new(frame::AnimationFrameScheduler), move || {
        // Keep WebGPU surface sized to canvas backing size
        gpu.resize_if_needed(canvas.width(), canvas.height());
        carousel.borrow_mut().tick(&mut gpu);
        stats.record();
    });
    log::info!("[init] carousel running");
    Ok(())
}

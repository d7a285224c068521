use crate::constants::*;
use crate::input::{backing_size, css_viewport};
use crate::ui;
use carousel_core::{
    counter_label, description_lines, CarouselObserver, DisplayDimensions, Project, ScrollUpdate,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] missing #{}", element_id);
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let rect = canvas.get_bounding_client_rect();
        let (w_px, h_px) = backing_size(rect.width(), rect.height(), w.device_pixel_ratio());
        canvas.set_width(w_px);
        canvas.set_height(h_px);
    }
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

/// Projects declared in the page as `<li data-src data-title>description</li>`.
///
/// Every entry needs a `data-src`; a page with a broken entry does not start.
pub fn read_projects(document: &web::Document) -> anyhow::Result<Vec<Project>> {
    let nodes = document
        .query_selector_all(PROJECTS_SELECTOR)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let mut projects = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let src = el
            .get_attribute("data-src")
            .ok_or_else(|| anyhow::anyhow!("project {} has no data-src", i))?;
        let title = el.get_attribute("data-title").unwrap_or_default();
        let description = el.text_content().unwrap_or_default();
        projects.push(Project::new(title, description.trim(), src));
    }
    Ok(projects)
}

pub fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

fn html_element(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    let el = document.get_element_by_id(id);
    if el.is_none() {
        log::warn!("[dom] missing #{}", id);
    }
    el.and_then(|e| e.dyn_into::<web::HtmlElement>().ok())
}

/// Mirrors carousel notifications into the page overlay.
pub struct DomObserver {
    document: web::Document,
    canvas: web::HtmlCanvasElement,
    projects: Vec<Project>,
    title: Option<web::HtmlElement>,
    description: Option<web::HtmlElement>,
    track: Option<web::HtmlElement>,
}

impl DomObserver {
    pub fn new(
        document: &web::Document,
        canvas: &web::HtmlCanvasElement,
        projects: Vec<Project>,
    ) -> Self {
        set_text(document, COUNT_TOTAL_ID, &projects.len().to_string());
        Self {
            document: document.clone(),
            canvas: canvas.clone(),
            title: html_element(document, TITLE_ID),
            description: html_element(document, DESCRIPTION_ID),
            track: html_element(document, TRACK_ID),
            projects,
        }
    }

    fn set_title(&self, title: &str, track_width: f32) {
        let Some(el) = &self.title else { return };
        el.set_text_content(Some(title));
        let style = el.style();
        let _ = style.set_property("transform", &ui::scale_transform(1.0));
        let text_width = el.get_bounding_client_rect().width() as f32;
        let scale = ui::title_scale(track_width, text_width);
        let _ = style.set_property("transform", &ui::scale_transform(scale));
    }

    fn set_description(&self, text: &str) {
        let Some(el) = &self.description else { return };
        el.set_text_content(None);
        for row in description_lines(text) {
            let Ok(line) = self.document.create_element("div") else {
                continue;
            };
            for word in row {
                if let Ok(span) = self.document.create_element("span") {
                    span.set_text_content(Some(word));
                    let _ = line.append_child(&span);
                }
            }
            let _ = el.append_child(&line);
        }
    }

    fn set_track_dimensions(&self, dims: DisplayDimensions) {
        let Some(track) = &self.track else { return };
        // same box the carousel sizes its viewport from
        let rect = self.canvas.get_bounding_client_rect();
        let viewport = css_viewport(rect.width(), rect.height());
        let style = track.style();
        let _ = style.set_property("width", &ui::px(dims.width));
        let _ = style.set_property(
            "margin-top",
            &ui::px(ui::track_margin_top(viewport, dims.height)),
        );
    }
}

impl CarouselObserver for DomObserver {
    fn on_selection_change(&mut self, index: usize, dims: DisplayDimensions) {
        let Some(project) = self.projects.get(index) else {
            return;
        };
        self.set_title(&project.title, dims.width);
        self.set_description(&project.description);
        self.set_track_dimensions(dims);
        set_text(&self.document, COUNT_CURRENT_ID, &counter_label(index));
    }

    fn on_view_change(&mut self, index: usize, detail: bool) {
        log::debug!("[dom] panel {} detail={}", index, detail);
        if let Some(track) = &self.track {
            let _ = track
                .class_list()
                .toggle_with_force(TRACK_VISIBLE_CLASS, detail);
        }
    }

    fn on_scroll_update(&mut self, update: ScrollUpdate) {
        if let Some(track) = &self.track {
            let _ = track
                .style()
                .set_property("transform", &ui::track_transform(update.pixel_y));
        }
    }
}

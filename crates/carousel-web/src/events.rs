use crate::constants::{BTN_NEXT_ID, BTN_PREV_ID};
use crate::dom;
use crate::input;
use carousel_core::{Carousel, InputEvent};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type SharedCarousel = Rc<RefCell<Carousel>>;

fn listen(target: &web::EventTarget, kind: &str, mut handler: impl FnMut(web::Event) + 'static) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>);
    if let Err(e) = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref()) {
        log::warn!("[events] {} listener failed: {:?}", kind, e);
    }
    closure.forget();
}

#[inline]
fn dispatch(carousel: &SharedCarousel, event: InputEvent) {
    carousel.borrow_mut().handle_input(event);
}

pub fn wire_input_handlers(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    carousel: &SharedCarousel,
) {
    // Window resize: keep backing store and viewport in sync
    {
        let canvas = canvas.clone();
        let carousel = carousel.clone();
        listen(window, "resize", move |_| {
            dom::sync_canvas_backing_size(&canvas);
            let rect = canvas.get_bounding_client_rect();
            let viewport = input::css_viewport(rect.width(), rect.height());
            dispatch(
                &carousel,
                InputEvent::Resize {
                    width: viewport.width,
                    height: viewport.height,
                },
            );
        });
    }

    // Pointer move: position only, hover is resolved by the frame loop
    {
        let target = canvas.clone();
        let carousel = carousel.clone();
        listen(canvas, "pointermove", move |ev| {
            let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
                return;
            };
            let rect = target.get_bounding_client_rect();
            dispatch(
                &carousel,
                input::pointer_move_event(
                    ev.client_x() as f64,
                    ev.client_y() as f64,
                    rect.left(),
                    rect.top(),
                ),
            );
        });
    }

    {
        let carousel = carousel.clone();
        listen(canvas, "pointerdown", move |ev| {
            let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
                return;
            };
            if input::is_primary_button(ev.button()) {
                dispatch(&carousel, InputEvent::PointerDown);
            }
        });
    }

    {
        let carousel = carousel.clone();
        listen(canvas, "pointerup", move |ev| {
            let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
                return;
            };
            if input::is_primary_button(ev.button()) {
                dispatch(&carousel, InputEvent::PointerUp);
                ev.prevent_default();
            }
        });
    }

    {
        let carousel = carousel.clone();
        let target = canvas.clone();
        listen(canvas, "wheel", move |ev| {
            let Some(ev) = ev.dyn_ref::<web::WheelEvent>() else {
                return;
            };
            ev.prevent_default();
            let page_height = target.get_bounding_client_rect().height() as f32;
            dispatch(
                &carousel,
                input::wheel_event(ev.delta_x(), ev.delta_y(), ev.delta_mode(), page_height),
            );
        });
    }

    {
        let carousel = carousel.clone();
        listen(window, "keydown", move |ev| {
            let Some(ev) = ev.dyn_ref::<web::KeyboardEvent>() else {
                return;
            };
            let Some(event) = input::key_event(&ev.code(), &ev.key()) else {
                return;
            };
            if let InputEvent::Key(key) = event {
                if input::should_prevent_default(key) {
                    ev.prevent_default();
                }
            }
            dispatch(&carousel, event);
        });
    }
}

pub fn wire_nav_buttons(document: &web::Document, carousel: &SharedCarousel) {
    let prev = carousel.clone();
    dom::add_click_listener(document, BTN_PREV_ID, move || prev.borrow_mut().select_prev());
    let next = carousel.clone();
    dom::add_click_listener(document, BTN_NEXT_ID, move || next.borrow_mut().select_next());
}

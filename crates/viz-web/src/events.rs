use crate::dom;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use viz_core::SceneState;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<SceneState>>,
    pub rng: Rc<RefCell<StdRng>>,
    pub link: Option<web::HtmlElement>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_touchmove(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
    wire_wheel(&w);
}

/// Zone test + edge detection for one pointer/touch position in viewport
/// coordinates. DOM and scene side effects happen here; the renderer picks
/// up the new colors on the next frame.
fn handle_zone_event(w: &InputWiring, x: f32, y: f32) {
    let (vw, vh) = dom::viewport_size();
    let change = w
        .scene
        .borrow_mut()
        .pointer_moved(x, y, vw, vh, &mut w.rng.borrow_mut());
    if let Some(change) = change {
        log::info!(
            "color change: {:?} text={} background={}",
            change.mode,
            change.text.to_css_hex(),
            change.background.to_css_hex()
        );
        dom::set_link_color(w.link.as_ref(), change.text);
    }
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let mut last_position: Option<(f32, f32)> = None;

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let x = ev.client_x() as f32;
        let y = ev.client_y() as f32;
        handle_zone_event(&w, x, y);

        {
            let mut scene = w.scene.borrow_mut();
            if scene.orbit.dragging {
                if let Some((lx, ly)) = last_position {
                    scene.orbit.apply_drag(x - lx, y - ly);
                }
            }
        }
        last_position = Some((x, y));
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_touchmove(w: &InputWiring) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some(touch) = ev.touches().get(0) {
            handle_zone_event(&w, touch.client_x() as f32, touch.client_y() as f32);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        w.scene.borrow_mut().orbit.dragging = true;
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        w.scene.borrow_mut().orbit.dragging = false;
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        w.scene.borrow_mut().orbit.apply_zoom(ev.delta_y() as f32);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}

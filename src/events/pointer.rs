use super::UiWiring;
use crate::input;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointer_handlers(w: &UiWiring) {
    wire_pointerdown(w);
    wire_pointermove(w);
    wire_pointerup(w);
    wire_wheel(w);
}

fn wire_pointerdown(w: &UiWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        w.music.borrow_mut().ensure_started();
        {
            let mut drag = w.drag.borrow_mut();
            drag.active = true;
            drag.last = input::pointer_canvas_px(&ev, &w.canvas);
        }
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &UiWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let delta = {
            let mut drag = w.drag.borrow_mut();
            if !drag.active {
                return;
            }
            let pos = input::pointer_canvas_px(&ev, &w.canvas);
            let delta = pos - drag.last;
            drag.last = pos;
            delta
        };
        let (d_azimuth, d_polar) = input::drag_to_orbit(delta, w.canvas.height() as f32);
        let mut scene = w.scene.borrow_mut();
        scene.orbit.rotate(d_azimuth);
        scene.orbit.tilt(d_polar);
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &UiWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        w.drag.borrow_mut().active = false;
        _ = w.canvas.release_pointer_capture(ev.pointer_id());
    }) as Box<dyn FnMut(_)>);
    for name in ["pointerup", "pointercancel"] {
        _ = canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_wheel(w: &UiWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let dy = ev.delta_y() as f32;
        if w.controls.borrow().focus().is_some() {
            w.controls
                .borrow_mut()
                .adjust_photo_zoom(input::wheel_to_photo_zoom(dy));
        } else {
            w.scene.borrow_mut().orbit.zoom(input::wheel_to_zoom(dy));
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}

use super::{apply_command, UiWiring};
use crate::input::{command_for_key, UiCommand};
use tree_core::PHOTO_ZOOM_STEP;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, w: &UiWiring) {
    let Some(cmd) = command_for_key(&ev.key(), PHOTO_ZOOM_STEP) else {
        return;
    };
    // Held keys repeat only for zoom
    if ev.repeat() && !matches!(cmd, UiCommand::PhotoZoom(_)) {
        return;
    }
    if cmd != UiCommand::ToggleMute {
        w.music.borrow_mut().ensure_started();
    }
    if cmd == UiCommand::ToggleMode {
        ev.prevent_default();
    }
    apply_command(w, cmd);
}

pub fn wire_global_keydown(w: &UiWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &w);
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

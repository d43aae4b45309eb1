#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use tree_core::{Controls, Scene, SceneParams};

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod media;
mod overlay;
mod render;
mod tracker;

use constants::*;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Stop the detection loop (camera, model) and the render loop when the page goes away.
fn wire_teardown(tracker: tracker::TrackerHandle, render_loop: frame::LoopHandle) {
    let closure = Closure::wrap(Box::new(move || {
        tracker.stop();
        render_loop.stop();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("gesture-tree starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = dom::element_as(&document, CANVAS_ID)?;
    wire_canvas_resize(&canvas);

    let scene = Scene::new(SceneParams::default(), &mut rand::thread_rng());
    let controls = Rc::new(RefCell::new(Controls::new(scene.ornaments.len())));
    let music = Rc::new(RefCell::new(audio::Music::new(&document)));

    // Rendering continues without WebGPU being available; the UI still works
    let gpu = frame::init_gpu(&canvas, &scene).await;
    let scene = Rc::new(RefCell::new(scene));

    let wiring = events::UiWiring {
        document: document.clone(),
        canvas: canvas.clone(),
        controls: controls.clone(),
        scene: scene.clone(),
        music: music.clone(),
        drag: Rc::new(RefCell::new(input::DragState::default())),
    };
    events::wire_buttons(&wiring);
    events::wire_global_keydown(&wiring);
    events::wire_pointer_handlers(&wiring);
    overlay::update_mute_button(&document, music.borrow().is_muted());
    overlay::set_debug_visible(&document, controls.borrow().debug());

    let video: web::HtmlVideoElement = dom::element_as(&document, VIDEO_ID)?;
    let landmark_canvas = dom::element_as::<web::HtmlCanvasElement>(&document, LANDMARK_CANVAS_ID)
        .map_err(|e| log::warn!("[overlay] {e}"))
        .ok();
    let tracker = tracker::start(controls.clone(), video, landmark_canvas);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        document, canvas, scene, controls, gpu,
    )));
    let render_loop = frame::start_loop(frame_ctx);
    wire_teardown(tracker, render_loop);
    Ok(())
}

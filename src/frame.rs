use crate::constants::FOV_Y_DEG;
use crate::{dom, overlay, render};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tree_core::{Controls, Scene, SceneMode, TrackerStatus};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
    pub controls: Rc<RefCell<Controls>>,
    pub gpu: Option<render::GpuState<'a>>,
    pub last_instant: Instant,
    // Last values pushed to the DOM, so text is only rewritten on change
    pub shown_status: Option<TrackerStatus>,
    pub shown_mode: Option<SceneMode>,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        document: web::Document,
        canvas: web::HtmlCanvasElement,
        scene: Rc<RefCell<Scene>>,
        controls: Rc<RefCell<Controls>>,
        gpu: Option<render::GpuState<'a>>,
    ) -> Self {
        Self {
            document,
            canvas,
            scene,
            controls,
            gpu,
            last_instant: Instant::now(),
            shown_status: None,
            shown_mode: None,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        {
            let controls = self.controls.borrow();
            self.scene.borrow_mut().advance(dt_sec, &controls);
            self.sync_ui(&controls);
        }

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            let scene = self.scene.borrow();
            let camera = scene.orbit.camera(g.aspect(), FOV_Y_DEG.to_radians());
            if let Err(e) = g.render(&scene, &camera) {
                log::error!("render error: {:?}", e);
            }
        }
    }

    fn sync_ui(&mut self, controls: &Controls) {
        if self.shown_status.as_ref() != Some(controls.status()) {
            overlay::update_status(&self.document, controls.status());
            self.shown_status = Some(controls.status().clone());
        }
        if self.shown_mode != Some(controls.mode()) {
            overlay::update_mode_button(&self.document, controls.mode());
            self.shown_mode = Some(controls.mode());
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    scene: &Scene,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    dom::sync_canvas_backing_size(leaked_canvas);
    match render::GpuState::new(leaked_canvas, scene).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Handle to the render loop; `stop()` cancels the pending frame and drops the closure.
#[derive(Clone)]
pub struct LoopHandle {
    stopped: Rc<Cell<bool>>,
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl LoopHandle {
    pub fn stop(&self) {
        if self.stopped.replace(true) {
            return;
        }
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
        log::info!("[frame] loop stopped");
    }
}

fn request_frame(handle: &LoopHandle) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(tick) = handle.tick.borrow().as_ref() {
        if let Ok(id) = w.request_animation_frame(tick.as_ref().unchecked_ref()) {
            handle.raf_id.set(Some(id));
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) -> LoopHandle {
    let handle = LoopHandle {
        stopped: Rc::new(Cell::new(false)),
        raf_id: Rc::new(Cell::new(None)),
        tick: Rc::new(RefCell::new(None)),
    };
    let handle_tick = handle.clone();
    *handle.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if handle_tick.stopped.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        request_frame(&handle_tick);
    }) as Box<dyn FnMut()>));
    request_frame(&handle);
    handle
}

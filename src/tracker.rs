//! Hand-tracking bridge: loads the gesture recognizer through `www/tracker.js`,
//! runs it once per new camera frame and folds the result into `Controls`.

use crate::constants::*;
use crate::{dom, media, overlay};
use js_sys::{Array, Reflect};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tree_core::{
    Classification, Controls, GestureKind, GestureProcessor, HandFrame, Landmark, TrackerError,
    TrackerStatus,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[wasm_bindgen(module = "/www/tracker.js")]
extern "C" {
    #[wasm_bindgen(catch, js_name = createRecognizer)]
    async fn create_recognizer(wasm_root: &str, model_path: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    fn recognize(
        recognizer: &JsValue,
        video: &web::HtmlVideoElement,
        timestamp_ms: f64,
    ) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = closeRecognizer)]
    fn close_recognizer(recognizer: &JsValue);
}

/// Convert one shim result (`{landmarks, gesture, score}`) into a hand frame.
/// `None` means no hand was found.
pub fn parse_result(result: &JsValue) -> Option<HandFrame> {
    let landmarks = Reflect::get(result, &JsValue::from_str("landmarks")).ok()?;
    let points: Array = landmarks.dyn_into().ok()?;
    let landmarks: Vec<Landmark> = points
        .iter()
        .filter_map(|p| {
            let xyz: Array = p.dyn_into().ok()?;
            Some(Landmark {
                x: xyz.get(0).as_f64()? as f32,
                y: xyz.get(1).as_f64()? as f32,
                z: xyz.get(2).as_f64().unwrap_or(0.0) as f32,
            })
        })
        .collect();
    if landmarks.is_empty() {
        return None;
    }
    let gesture = Reflect::get(result, &JsValue::from_str("gesture"))
        .ok()
        .and_then(|g| g.as_string())
        .map(|label| Classification {
            kind: GestureKind::from_label(&label),
            score: Reflect::get(result, &JsValue::from_str("score"))
                .ok()
                .and_then(|s| s.as_f64())
                .unwrap_or(0.0) as f32,
        });
    Some(HandFrame { landmarks, gesture })
}

struct TrackerLoop {
    stopped: Cell<bool>,
    raf_id: Cell<Option<i32>>,
    last_video_time: Cell<f64>,
    stream: RefCell<Option<web::MediaStream>>,
    recognizer: RefCell<Option<JsValue>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

/// Owner of the detection loop; `stop()` tears everything down.
#[derive(Clone)]
pub struct TrackerHandle {
    inner: Rc<TrackerLoop>,
}

impl TrackerHandle {
    pub fn is_stopped(&self) -> bool {
        self.inner.stopped.get()
    }

    /// Idempotent. After this returns no further writes reach `Controls`.
    pub fn stop(&self) {
        let inner = &self.inner;
        if inner.stopped.replace(true) {
            return;
        }
        if let (Some(id), Some(w)) = (inner.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        if let Some(stream) = inner.stream.borrow_mut().take() {
            media::stop_stream(&stream);
        }
        if let Some(recognizer) = inner.recognizer.borrow_mut().take() {
            close_recognizer(&recognizer);
        }
        inner.tick.borrow_mut().take();
        log::info!("[tracker] stopped");
    }
}

/// Start loading the model and the camera in the background.
pub fn start(
    controls: Rc<RefCell<Controls>>,
    video: web::HtmlVideoElement,
    landmark_canvas: Option<web::HtmlCanvasElement>,
) -> TrackerHandle {
    let handle = TrackerHandle {
        inner: Rc::new(TrackerLoop {
            stopped: Cell::new(false),
            raf_id: Cell::new(None),
            last_video_time: Cell::new(-1.0),
            stream: RefCell::new(None),
            recognizer: RefCell::new(None),
            tick: RefCell::new(None),
        }),
    };
    let task = handle.clone();
    spawn_local(async move {
        if let Err(err) = bring_up(&task, &controls, &video).await {
            if !task.is_stopped() {
                controls.borrow_mut().set_status(err.into());
            }
            return;
        }
        if task.is_stopped() {
            return;
        }
        controls.borrow_mut().set_status(TrackerStatus::Ready);
        run_loop(&task, controls, video, landmark_canvas);
    });
    handle
}

async fn bring_up(
    task: &TrackerHandle,
    controls: &Rc<RefCell<Controls>>,
    video: &web::HtmlVideoElement,
) -> Result<(), TrackerError> {
    controls
        .borrow_mut()
        .set_status(TrackerStatus::DownloadingModel);
    let recognizer = create_recognizer(VISION_WASM_ROOT, GESTURE_MODEL_URL)
        .await
        .map_err(|e| TrackerError::model_load(media::js_error_text(&e)))?;
    if task.is_stopped() {
        close_recognizer(&recognizer);
        return Ok(());
    }
    *task.inner.recognizer.borrow_mut() = Some(recognizer);
    log::info!("[tracker] model loaded");

    controls
        .borrow_mut()
        .set_status(TrackerStatus::RequestingCamera);
    let stream = media::start_camera(video).await?;
    if task.is_stopped() {
        media::stop_stream(&stream);
        return Ok(());
    }
    *task.inner.stream.borrow_mut() = Some(stream);
    Ok(())
}

fn request_frame(inner: &TrackerLoop) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(tick) = inner.tick.borrow().as_ref() {
        if let Ok(id) = w.request_animation_frame(tick.as_ref().unchecked_ref()) {
            inner.raf_id.set(Some(id));
        }
    }
}

fn run_loop(
    task: &TrackerHandle,
    controls: Rc<RefCell<Controls>>,
    video: web::HtmlVideoElement,
    landmark_canvas: Option<web::HtmlCanvasElement>,
) {
    let processor = GestureProcessor::default();
    let inner = task.inner.clone();
    let mut rng = rand::thread_rng();
    *task.inner.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if inner.stopped.get() {
            return;
        }
        inner.raf_id.set(None);
        // Only run inference when a new decoded frame is available
        let t = video.current_time();
        if video.ready_state() >= web::HtmlMediaElement::HAVE_CURRENT_DATA
            && t != inner.last_video_time.get()
        {
            inner.last_video_time.set(t);
            let detection = inner
                .recognizer
                .borrow()
                .as_ref()
                .map(|r| recognize(r, &video, dom::now_ms()));
            match detection {
                Some(Ok(result)) => {
                    let hand = parse_result(&result);
                    let debug = controls.borrow().debug();
                    let output = processor.process(hand.as_ref(), debug);
                    controls
                        .borrow_mut()
                        .apply_gesture(output, dom::now_ms(), &mut rng);
                    if debug {
                        if let Some(canvas) = &landmark_canvas {
                            overlay::draw_landmarks(canvas, &video, hand.as_ref());
                        }
                    }
                }
                Some(Err(e)) => {
                    let err = TrackerError::Inference(media::js_error_text(&e));
                    controls.borrow_mut().set_status(err.into());
                }
                None => {}
            }
        }
        request_frame(&inner);
    }) as Box<dyn FnMut()>));
    request_frame(&task.inner);
    log::info!("[tracker] detection loop running");
}

use tree_core::TrackerError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Best-effort text for a rejected promise (DOMException name, Error message, or debug form).
pub fn js_error_text(err: &JsValue) -> String {
    if let Some(ex) = err.dyn_ref::<web::DomException>() {
        return ex.name();
    }
    if let Some(e) = err.dyn_ref::<js_sys::Error>() {
        return String::from(e.message());
    }
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// Ask for the user-facing camera and start playing it into `video`.
pub async fn start_camera(video: &web::HtmlVideoElement) -> Result<web::MediaStream, TrackerError> {
    let devices = web::window()
        .and_then(|w| w.navigator().media_devices().ok())
        .ok_or(TrackerError::CameraUnavailable)?;
    let constraints = web::MediaStreamConstraints::new();
    constraints.set_video(&JsValue::TRUE);
    constraints.set_audio(&JsValue::FALSE);
    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|e| TrackerError::camera(&js_error_text(&e)))?;
    let stream: web::MediaStream = JsFuture::from(promise)
        .await
        .map_err(|e| TrackerError::camera(&js_error_text(&e)))?
        .dyn_into()
        .map_err(|_| TrackerError::CameraUnavailable)?;

    video.set_muted(true);
    _ = video.set_attribute("playsinline", "");
    video.set_src_object(Some(&stream));
    if let Ok(p) = video.play() {
        if let Err(e) = JsFuture::from(p).await {
            stop_stream(&stream);
            return Err(TrackerError::camera(&js_error_text(&e)));
        }
    }
    log::info!("[camera] streaming {}x{}", video.video_width(), video.video_height());
    Ok(stream)
}

pub fn stop_stream(stream: &web::MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<web::MediaStreamTrack>() {
            track.stop();
        }
    }
}

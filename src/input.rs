use glam::Vec2;
use web_sys as web;

// Full drag across the canvas height turns the camera once around
const DRAG_RADIANS_PER_SCREEN: f32 = std::f32::consts::TAU;
const WHEEL_ZOOM_PER_PIXEL: f32 = 0.05;
const PHOTO_ZOOM_PER_WHEEL_PIXEL: f32 = 0.002;

/// UI-level command produced by a key, button or pointer gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UiCommand {
    ToggleMode,
    ToggleMute,
    ToggleDebug,
    FocusRandom,
    Unfocus,
    PhotoZoom(f32),
}

#[inline]
pub fn command_for_key(key: &str, photo_zoom_step: f32) -> Option<UiCommand> {
    match key {
        " " | "Enter" => Some(UiCommand::ToggleMode),
        "m" | "M" => Some(UiCommand::ToggleMute),
        "d" | "D" => Some(UiCommand::ToggleDebug),
        "f" | "F" => Some(UiCommand::FocusRandom),
        "u" | "U" | "Escape" => Some(UiCommand::Unfocus),
        "+" | "=" => Some(UiCommand::PhotoZoom(photo_zoom_step)),
        "-" | "_" => Some(UiCommand::PhotoZoom(-photo_zoom_step)),
        _ => None,
    }
}

#[derive(Default, Clone, Copy)]
pub struct DragState {
    pub active: bool,
    pub last: Vec2,
}

/// Pointer movement (canvas pixels) to `(d_azimuth, d_polar)` radians.
/// Dragging right swings the camera left around the tree, dragging down tilts it up.
#[inline]
pub fn drag_to_orbit(delta_px: Vec2, canvas_height_px: f32) -> (f32, f32) {
    let h = canvas_height_px.max(1.0);
    let k = DRAG_RADIANS_PER_SCREEN / h;
    (-delta_px.x * k, -delta_px.y * k)
}

/// Wheel movement to an orbit distance change (positive = farther).
#[inline]
pub fn wheel_to_zoom(delta_y_px: f32) -> f32 {
    delta_y_px * WHEEL_ZOOM_PER_PIXEL
}

/// Wheel movement to a focused-photo zoom change (scrolling up enlarges).
#[inline]
pub fn wheel_to_photo_zoom(delta_y_px: f32) -> f32 {
    -delta_y_px * PHOTO_ZOOM_PER_WHEEL_PIXEL
}

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let w = (rect.width() as f32).max(1.0);
    let h = (rect.height() as f32).max(1.0);
    let sx = (x_css / w) * canvas.width() as f32;
    let sy = (y_css / h) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

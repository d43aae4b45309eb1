use crate::constants::*;
use crate::dom;
use tree_core::{HandFrame, SceneMode, TrackerStatus};
use wasm_bindgen::JsCast;
use web_sys as web;

// Hand skeleton edges (landmark index pairs) for the debug drawing
const HAND_CONNECTIONS: [(usize, usize); 21] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 4),
    (0, 5),
    (5, 6),
    (6, 7),
    (7, 8),
    (5, 9),
    (9, 10),
    (10, 11),
    (11, 12),
    (9, 13),
    (13, 14),
    (14, 15),
    (15, 16),
    (13, 17),
    (0, 17),
    (17, 18),
    (18, 19),
    (19, 20),
];

/// Show the tracker status line; errors are drawn in red.
pub fn update_status(document: &web::Document, status: &TrackerStatus) {
    if let Some(el) = document.get_element_by_id(STATUS_ID) {
        el.set_text_content(Some(&status.to_string()));
        if let Ok(html) = el.dyn_into::<web::HtmlElement>() {
            let color = if status.is_error() {
                STATUS_ERROR_COLOR
            } else {
                STATUS_COLOR
            };
            _ = html.style().set_property("color", color);
        }
    }
}

pub fn update_mode_button(document: &web::Document, mode: SceneMode) {
    dom::set_text(document, MODE_BUTTON_ID, mode.button_label());
}

pub fn update_mute_button(document: &web::Document, muted: bool) {
    dom::set_text(
        document,
        MUTE_BUTTON_ID,
        if muted { "🔇 MUTED" } else { "🎵 MUSIC" },
    );
    dom::set_class(document, MUTE_BUTTON_ID, "active", !muted);
}

/// Reveal or hide the mirrored camera feed and the landmark canvas.
pub fn set_debug_visible(document: &web::Document, visible: bool) {
    dom::set_text(
        document,
        DEBUG_BUTTON_ID,
        if visible { "HIDE DEBUG" } else { "🛠 DEBUG" },
    );
    dom::set_class(document, DEBUG_BUTTON_ID, "active", visible);
    dom::set_class(document, VIDEO_ID, "debug", visible);
    dom::set_class(document, LANDMARK_CANVAS_ID, "debug", visible);
}

/// Draw the latest hand skeleton; clears the canvas when `hand` is `None`.
pub fn draw_landmarks(
    canvas: &web::HtmlCanvasElement,
    video: &web::HtmlVideoElement,
    hand: Option<&HandFrame>,
) {
    let ctx = match canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok())
    {
        Some(c) => c,
        None => return,
    };
    let (w, h) = (video.video_width(), video.video_height());
    if canvas.width() != w || canvas.height() != h {
        canvas.set_width(w);
        canvas.set_height(h);
    }
    let (wf, hf) = (w as f64, h as f64);
    ctx.clear_rect(0.0, 0.0, wf, hf);
    let Some(hand) = hand else {
        return;
    };

    ctx.set_stroke_style_str("#FFD700");
    ctx.set_line_width(2.0);
    for &(a, b) in HAND_CONNECTIONS.iter() {
        if let (Some(pa), Some(pb)) = (hand.landmarks.get(a), hand.landmarks.get(b)) {
            ctx.begin_path();
            ctx.move_to(pa.x as f64 * wf, pa.y as f64 * hf);
            ctx.line_to(pb.x as f64 * wf, pb.y as f64 * hf);
            ctx.stroke();
        }
    }
    ctx.set_fill_style_str(LANDMARK_COLOR);
    for p in &hand.landmarks {
        ctx.begin_path();
        _ = ctx.arc(
            p.x as f64 * wf,
            p.y as f64 * hf,
            3.0,
            0.0,
            std::f64::consts::TAU,
        );
        ctx.fill();
    }
}

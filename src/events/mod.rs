use crate::audio::Music;
use crate::constants::*;
use crate::input::{DragState, UiCommand};
use crate::{dom, overlay};
use std::cell::RefCell;
use std::rc::Rc;
use tree_core::{Action, Controls, Scene};
use web_sys as web;

mod keyboard;
mod pointer;

pub use keyboard::wire_global_keydown;
pub use pointer::wire_pointer_handlers;

/// Shared handles every DOM listener needs.
#[derive(Clone)]
pub struct UiWiring {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub controls: Rc<RefCell<Controls>>,
    pub scene: Rc<RefCell<Scene>>,
    pub music: Rc<RefCell<Music>>,
    pub drag: Rc<RefCell<DragState>>,
}

pub fn apply_command(w: &UiWiring, cmd: UiCommand) {
    let now = dom::now_ms();
    let mut rng = rand::thread_rng();
    match cmd {
        UiCommand::ToggleMode => {
            w.controls
                .borrow_mut()
                .dispatch(Action::ToggleMode, now, &mut rng);
        }
        UiCommand::FocusRandom => {
            w.controls
                .borrow_mut()
                .dispatch(Action::FocusRandom, now, &mut rng);
        }
        UiCommand::Unfocus => {
            w.controls
                .borrow_mut()
                .dispatch(Action::Unfocus, now, &mut rng);
        }
        UiCommand::PhotoZoom(step) => w.controls.borrow_mut().adjust_photo_zoom(step),
        UiCommand::ToggleMute => {
            let muted = w.music.borrow_mut().toggle_mute();
            overlay::update_mute_button(&w.document, muted);
        }
        UiCommand::ToggleDebug => {
            let on = w.controls.borrow_mut().toggle_debug();
            overlay::set_debug_visible(&w.document, on);
            log::info!("[ui] debug={on}");
        }
    }
}

pub fn wire_buttons(w: &UiWiring) {
    for (id, cmd) in [
        (MODE_BUTTON_ID, UiCommand::ToggleMode),
        (MUTE_BUTTON_ID, UiCommand::ToggleMute),
        (DEBUG_BUTTON_ID, UiCommand::ToggleDebug),
    ] {
        let w2 = w.clone();
        dom::add_click_listener(&w.document, id, move || {
            if cmd != UiCommand::ToggleMute {
                w2.music.borrow_mut().ensure_started();
            }
            apply_command(&w2, cmd);
        });
    }
}

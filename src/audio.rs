use crate::constants::{MUSIC_ID, MUSIC_VOLUME};
use crate::dom;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Looping background track. Browsers only allow playback after a user
/// gesture, so it starts on the first click or key press.
pub struct Music {
    el: Option<web::HtmlAudioElement>,
    muted: bool,
    started: bool,
}

impl Music {
    pub fn new(document: &web::Document) -> Self {
        let el = match dom::element_as::<web::HtmlAudioElement>(document, MUSIC_ID) {
            Ok(el) => {
                el.set_loop(true);
                el.set_volume(MUSIC_VOLUME);
                Some(el)
            }
            Err(e) => {
                log::warn!("[audio] {e}");
                None
            }
        };
        Self {
            el,
            muted: false,
            started: false,
        }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn ensure_started(&mut self) {
        if self.started || self.muted {
            return;
        }
        let Some(el) = &self.el else {
            return;
        };
        self.started = true;
        match el.play() {
            Ok(p) => spawn_local(async move {
                if let Err(e) = JsFuture::from(p).await {
                    log::warn!("[audio] play rejected: {:?}", e);
                }
            }),
            Err(e) => log::warn!("[audio] play error: {:?}", e),
        }
    }

    /// Flip mute; returns the new muted state.
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        if let Some(el) = &self.el {
            el.set_muted(self.muted);
        }
        if !self.muted {
            self.ensure_started();
        }
        log::info!("[audio] muted={}", self.muted);
        self.muted
    }
}

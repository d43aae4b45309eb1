//! Shared control state written by the gesture processor / UI and read by the
//! animation driver and the orbit camera.
//!
//! These types avoid platform APIs so the web frontend and host-side tests use
//! the same single-writer state object instead of ambient globals.

use crate::constants::{FOCUS_DEBOUNCE_MS, PHOTO_ZOOM_MAX, UNFOCUS_DEBOUNCE_MS};
use crate::gesture::GestureOutput;
use crate::status::TrackerStatus;
use glam::{Mat4, Vec3};
use rand::Rng;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Discrete arrangement every collection eases toward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SceneMode {
    #[default]
    Chaos,
    Formed,
}

impl SceneMode {
    pub fn toggled(self) -> Self {
        match self {
            SceneMode::Chaos => SceneMode::Formed,
            SceneMode::Formed => SceneMode::Chaos,
        }
    }

    pub fn is_formed(self) -> bool {
        self == SceneMode::Formed
    }

    /// Label used by the mode button.
    pub fn button_label(self) -> &'static str {
        match self {
            SceneMode::Chaos => "Assemble Tree",
            SceneMode::Formed => "Disperse",
        }
    }
}

/// Per-cycle continuous control values; zero when no hand is present.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ControlDeltas {
    pub rotation_speed: f32,
    pub tilt_delta: f32,
    pub zoom_delta: f32,
}

impl ControlDeltas {
    pub const ZERO: ControlDeltas = ControlDeltas {
        rotation_speed: 0.0,
        tilt_delta: 0.0,
        zoom_delta: 0.0,
    };
}

/// Discrete request against the shared state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    SetMode(SceneMode),
    ToggleMode,
    FocusRandom,
    Unfocus,
}

/// Minimum-interval gate driven by caller-supplied timestamps.
#[derive(Clone, Copy, Debug)]
pub struct Debounce {
    min_interval_ms: f64,
    last_ms: Option<f64>,
}

impl Debounce {
    pub fn new(min_interval_ms: f64) -> Self {
        Self {
            min_interval_ms,
            last_ms: None,
        }
    }

    /// Returns true (and records `now_ms`) only if more than the interval has
    /// passed since the last honored trigger.
    pub fn try_fire(&mut self, now_ms: f64) -> bool {
        match self.last_ms {
            Some(last) if now_ms - last <= self.min_interval_ms => false,
            _ => {
                self.last_ms = Some(now_ms);
                true
            }
        }
    }
}

/// The single authoritative control state.
#[derive(Clone, Debug)]
pub struct Controls {
    mode: SceneMode,
    focus: Option<usize>,
    photo_zoom: f32,
    deltas: ControlDeltas,
    status: TrackerStatus,
    debug: bool,
    focus_gate: Debounce,
    unfocus_gate: Debounce,
    ornament_count: usize,
}

impl Controls {
    pub fn new(ornament_count: usize) -> Self {
        Self {
            mode: SceneMode::Chaos,
            focus: None,
            photo_zoom: 0.0,
            deltas: ControlDeltas::ZERO,
            status: TrackerStatus::Initializing,
            debug: false,
            focus_gate: Debounce::new(FOCUS_DEBOUNCE_MS),
            unfocus_gate: Debounce::new(UNFOCUS_DEBOUNCE_MS),
            ornament_count,
        }
    }

    pub fn mode(&self) -> SceneMode {
        self.mode
    }

    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    pub fn photo_zoom(&self) -> f32 {
        self.photo_zoom
    }

    pub fn deltas(&self) -> ControlDeltas {
        self.deltas
    }

    pub fn status(&self) -> &TrackerStatus {
        &self.status
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn set_deltas(&mut self, deltas: ControlDeltas) {
        self.deltas = deltas;
    }

    /// Returns true if the status line changed.
    pub fn set_status(&mut self, status: TrackerStatus) -> bool {
        if self.status == status {
            return false;
        }
        if status.is_error() {
            log::warn!("[tracker] {status}");
        }
        self.status = status;
        true
    }

    pub fn toggle_debug(&mut self) -> bool {
        self.debug = !self.debug;
        self.debug
    }

    /// Apply one discrete action. Returns true if shared state changed.
    ///
    /// `now_ms` feeds the focus/unfocus debounce gates; mode changes are
    /// idempotent and never debounced.
    pub fn dispatch<R: Rng + ?Sized>(
        &mut self,
        action: Action,
        now_ms: f64,
        rng: &mut R,
    ) -> bool {
        match action {
            Action::SetMode(mode) => self.set_mode(mode),
            Action::ToggleMode => self.set_mode(self.mode.toggled()),
            Action::FocusRandom => {
                if self.ornament_count == 0 || !self.focus_gate.try_fire(now_ms) {
                    log::debug!("[controls] focus suppressed");
                    return false;
                }
                // Independent of the current selection; may pick the same index
                let index = rng.gen_range(0..self.ornament_count);
                self.focus = Some(index);
                self.photo_zoom = 0.0;
                log::info!("[controls] focus photo {index}");
                true
            }
            Action::Unfocus => {
                if !self.unfocus_gate.try_fire(now_ms) {
                    log::debug!("[controls] unfocus suppressed");
                    return false;
                }
                let had_focus = self.focus.take().is_some();
                self.photo_zoom = 0.0;
                if had_focus {
                    log::info!("[controls] unfocus");
                }
                had_focus
            }
        }
    }

    /// Fold one gesture-processing cycle into the shared state.
    pub fn apply_gesture<R: Rng + ?Sized>(
        &mut self,
        output: GestureOutput,
        now_ms: f64,
        rng: &mut R,
    ) {
        self.deltas = output.deltas;
        for action in output.actions {
            self.dispatch(action, now_ms, rng);
        }
        if let Some(status) = output.status {
            self.set_status(status);
        }
    }

    /// Nudge the focused photo's zoom, kept within `[0, PHOTO_ZOOM_MAX]`.
    /// Ignored while nothing is focused.
    pub fn adjust_photo_zoom(&mut self, step: f32) {
        if self.focus.is_some() {
            self.photo_zoom = (self.photo_zoom + step).clamp(0.0, PHOTO_ZOOM_MAX);
        }
    }

    fn set_mode(&mut self, mode: SceneMode) -> bool {
        if self.mode == mode {
            return false;
        }
        log::info!("[controls] mode {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
        true
    }
}

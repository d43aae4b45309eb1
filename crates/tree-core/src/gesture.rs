//! Turns per-frame hand-tracking output into control deltas and discrete actions.
//!
//! The recognizer's label catalog is modeled as a closed enum with an explicit
//! binding table, so unknown labels land on a defined no-op branch.

use crate::constants::{
    GESTURE_MIN_CONFIDENCE, ROTATE_DEADZONE, ROTATE_GAIN, TILT_DEADZONE, TILT_GAIN, ZOOM_STEP,
};
use crate::state::{Action, ControlDeltas, SceneMode};
use crate::status::TrackerStatus;
use smallvec::SmallVec;

/// Gesture vocabulary of the hand-tracking model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureKind {
    ClosedFist,
    OpenPalm,
    PointingUp,
    ThumbDown,
    ThumbUp,
    Victory,
    ILoveYou,
    /// "None" from the model or any label outside the catalog.
    Unrecognized,
}

impl GestureKind {
    pub fn from_label(label: &str) -> Self {
        match label {
            "Closed_Fist" => GestureKind::ClosedFist,
            "Open_Palm" => GestureKind::OpenPalm,
            "Pointing_Up" => GestureKind::PointingUp,
            "Thumb_Down" => GestureKind::ThumbDown,
            "Thumb_Up" => GestureKind::ThumbUp,
            "Victory" => GestureKind::Victory,
            "ILoveYou" => GestureKind::ILoveYou,
            _ => GestureKind::Unrecognized,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GestureKind::ClosedFist => "Closed_Fist",
            GestureKind::OpenPalm => "Open_Palm",
            GestureKind::PointingUp => "Pointing_Up",
            GestureKind::ThumbDown => "Thumb_Down",
            GestureKind::ThumbUp => "Thumb_Up",
            GestureKind::Victory => "Victory",
            GestureKind::ILoveYou => "ILoveYou",
            GestureKind::Unrecognized => "None",
        }
    }

    /// What a confident detection of this gesture does.
    pub fn binding(self) -> GestureBinding {
        match self {
            GestureKind::OpenPalm => GestureBinding::Mode(SceneMode::Chaos),
            GestureKind::ClosedFist => GestureBinding::Mode(SceneMode::Formed),
            GestureKind::ThumbUp => GestureBinding::Zoom(-1.0),
            GestureKind::ThumbDown => GestureBinding::Zoom(1.0),
            GestureKind::PointingUp => GestureBinding::Focus,
            GestureKind::Victory => GestureBinding::Unfocus,
            GestureKind::ILoveYou | GestureKind::Unrecognized => GestureBinding::Nothing,
        }
    }
}

/// Action table entry for a gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureBinding {
    Mode(SceneMode),
    /// Sign of the zoom step: negative moves the camera in.
    Zoom(f32),
    Focus,
    Unfocus,
    Nothing,
}

/// Top-ranked classification for the tracked hand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Classification {
    pub kind: GestureKind,
    pub score: f32,
}

/// Normalized camera-frame coordinates in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// One tracked hand: its landmarks (index 0 is the wrist) and optional gesture.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HandFrame {
    pub landmarks: Vec<Landmark>,
    pub gesture: Option<Classification>,
}

impl HandFrame {
    pub fn wrist(&self) -> Option<Landmark> {
        self.landmarks.first().copied()
    }
}

/// Gains, deadzones and thresholds for the mapping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureTuning {
    pub min_confidence: f32,
    pub rotate_gain: f32,
    pub rotate_deadzone: f32,
    pub tilt_gain: f32,
    pub tilt_deadzone: f32,
    pub zoom_step: f32,
}

impl Default for GestureTuning {
    fn default() -> Self {
        Self {
            min_confidence: GESTURE_MIN_CONFIDENCE,
            rotate_gain: ROTATE_GAIN,
            rotate_deadzone: ROTATE_DEADZONE,
            tilt_gain: TILT_GAIN,
            tilt_deadzone: TILT_DEADZONE,
            zoom_step: ZOOM_STEP,
        }
    }
}

/// Result of one processing cycle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GestureOutput {
    pub deltas: ControlDeltas,
    pub actions: SmallVec<[Action; 2]>,
    pub status: Option<TrackerStatus>,
}

#[derive(Clone, Debug, Default)]
pub struct GestureProcessor {
    tuning: GestureTuning,
}

impl GestureProcessor {
    pub fn new(tuning: GestureTuning) -> Self {
        Self { tuning }
    }

    pub fn tuning(&self) -> &GestureTuning {
        &self.tuning
    }

    /// Map the latest detection (`None` = no hand in frame) to control output.
    ///
    /// A tracked hand reports `Ready` (replacing an earlier no-hand status);
    /// with `debug` on, a confident gesture reports its label instead.
    pub fn process(&self, hand: Option<&HandFrame>, debug: bool) -> GestureOutput {
        let mut out = GestureOutput::default();
        let Some(wrist) = hand.and_then(HandFrame::wrist) else {
            out.status = Some(TrackerStatus::NoHand);
            return out;
        };

        out.deltas.rotation_speed = self.rotation_speed(wrist.x);
        out.deltas.tilt_delta = self.tilt_delta(wrist.y);
        out.status = Some(TrackerStatus::Ready);

        let confident = hand
            .and_then(|h| h.gesture)
            .filter(|g| g.score > self.tuning.min_confidence);
        let Some(gesture) = confident else {
            return out;
        };
        if debug {
            out.status = Some(TrackerStatus::Detected(gesture.kind.label()));
        }
        match gesture.kind.binding() {
            GestureBinding::Mode(mode) => out.actions.push(Action::SetMode(mode)),
            GestureBinding::Zoom(sign) => out.deltas.zoom_delta = sign * self.tuning.zoom_step,
            GestureBinding::Focus => out.actions.push(Action::FocusRandom),
            GestureBinding::Unfocus => out.actions.push(Action::Unfocus),
            GestureBinding::Nothing => {}
        }
        out
    }

    /// Horizontal hand offset from center; centered hands do not rotate.
    pub fn rotation_speed(&self, x: f32) -> f32 {
        deadzone((0.5 - x) * self.tuning.rotate_gain, self.tuning.rotate_deadzone)
    }

    /// Vertical hand offset from center.
    pub fn tilt_delta(&self, y: f32) -> f32 {
        deadzone((y - 0.5) * self.tuning.tilt_gain, self.tuning.tilt_deadzone)
    }
}

#[inline]
fn deadzone(value: f32, threshold: f32) -> f32 {
    if value.abs() > threshold {
        value
    } else {
        0.0
    }
}

//! Hand-tracker status line and failure taxonomy.
//!
//! Nothing in here is fatal: every failure is reduced to a status string and the
//! scene keeps rendering from UI-triggered actions.

use std::fmt;
use thiserror::Error;

/// Failure while bringing up or running the hand-tracking backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackerError {
    #[error("{0}")]
    ModelLoad(String),
    #[error("CAMERA PERMISSION DENIED")]
    CameraDenied,
    #[error("CAMERA UNAVAILABLE")]
    CameraUnavailable,
    #[error("CAMERA {0}")]
    Camera(String),
    #[error("INFERENCE {0}")]
    Inference(String),
}

impl TrackerError {
    /// Collapse an arbitrary backend message into a model-load error,
    /// falling back to a generic text when the backend gave nothing useful.
    pub fn model_load(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            TrackerError::ModelLoad("MODEL FAILED".to_string())
        } else {
            TrackerError::ModelLoad(message)
        }
    }

    /// Classify a `getUserMedia` rejection by its DOMException name.
    pub fn camera(name: &str) -> Self {
        match name {
            "NotAllowedError" | "PermissionDeniedError" | "SecurityError" => {
                TrackerError::CameraDenied
            }
            "NotFoundError" | "DevicesNotFoundError" | "NotReadableError"
            | "OverconstrainedError" => TrackerError::CameraUnavailable,
            other => TrackerError::Camera(other.to_string()),
        }
    }
}

/// What the status line currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TrackerStatus {
    #[default]
    Initializing,
    DownloadingModel,
    RequestingCamera,
    Ready,
    NoHand,
    Detected(&'static str),
    Error(TrackerError),
}

impl TrackerStatus {
    pub fn is_error(&self) -> bool {
        matches!(self, TrackerStatus::Error(_))
    }
}

impl From<TrackerError> for TrackerStatus {
    fn from(err: TrackerError) -> Self {
        TrackerStatus::Error(err)
    }
}

impl fmt::Display for TrackerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackerStatus::Initializing => f.write_str("INITIALIZING..."),
            TrackerStatus::DownloadingModel => f.write_str("DOWNLOADING AI..."),
            TrackerStatus::RequestingCamera => f.write_str("REQUESTING CAMERA..."),
            TrackerStatus::Ready => f.write_str("AI READY: SHOW HAND"),
            TrackerStatus::NoHand => f.write_str("AI READY: NO HAND"),
            TrackerStatus::Detected(label) => write!(f, "DETECTED: {label}"),
            TrackerStatus::Error(err) => write!(f, "ERROR: {err}"),
        }
    }
}

// Host-side tests for the status line texts and camera failure mapping.

use tree_core::{TrackerError, TrackerStatus};

fn line(status: impl Into<TrackerStatus>) -> String {
    status.into().to_string()
}

#[test]
fn bring_up_sequence_texts() {
    assert_eq!(TrackerStatus::default().to_string(), "INITIALIZING...");
    assert_eq!(TrackerStatus::DownloadingModel.to_string(), "DOWNLOADING AI...");
    assert_eq!(TrackerStatus::RequestingCamera.to_string(), "REQUESTING CAMERA...");
    assert_eq!(TrackerStatus::Ready.to_string(), "AI READY: SHOW HAND");
    assert_eq!(TrackerStatus::NoHand.to_string(), "AI READY: NO HAND");
    assert_eq!(TrackerStatus::Detected("Open_Palm").to_string(), "DETECTED: Open_Palm");
}

#[test]
fn model_load_errors_fall_back_to_a_generic_text() {
    assert_eq!(line(TrackerError::model_load("")), "ERROR: MODEL FAILED");
    assert_eq!(line(TrackerError::model_load("   ")), "ERROR: MODEL FAILED");
    assert_eq!(
        line(TrackerError::model_load("Failed to fetch")),
        "ERROR: Failed to fetch"
    );
}

#[test]
fn camera_rejections_are_classified_by_name() {
    assert_eq!(TrackerError::camera("NotAllowedError"), TrackerError::CameraDenied);
    assert_eq!(TrackerError::camera("SecurityError"), TrackerError::CameraDenied);
    assert_eq!(TrackerError::camera("NotFoundError"), TrackerError::CameraUnavailable);
    assert_eq!(TrackerError::camera("NotReadableError"), TrackerError::CameraUnavailable);
    assert_eq!(
        TrackerError::camera("AbortError"),
        TrackerError::Camera("AbortError".to_string())
    );
}

#[test]
fn camera_error_texts() {
    assert_eq!(line(TrackerError::camera("NotAllowedError")), "ERROR: CAMERA PERMISSION DENIED");
    assert_eq!(line(TrackerError::CameraUnavailable), "ERROR: CAMERA UNAVAILABLE");
    assert_eq!(line(TrackerError::camera("AbortError")), "ERROR: CAMERA AbortError");
    assert_eq!(line(TrackerError::Inference("boom".into())), "ERROR: INFERENCE boom");
}

#[test]
fn only_errors_are_flagged() {
    assert!(TrackerStatus::from(TrackerError::CameraDenied).is_error());
    for status in [
        TrackerStatus::Initializing,
        TrackerStatus::Ready,
        TrackerStatus::NoHand,
        TrackerStatus::Detected("Victory"),
    ] {
        assert!(!status.is_error());
    }
}

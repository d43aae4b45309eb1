use glam::Vec3;
use tree_core::{
    ControlDeltas, OrbitCamera, SceneMode, AUTO_ROTATE_RAD_PER_SEC, CAMERA_START, MAX_DISTANCE,
    MAX_POLAR, MIN_DISTANCE, MIN_POLAR, TILT_TO_POLAR,
};

const DT: f32 = 1.0 / 60.0;

#[test]
fn default_camera_sits_at_the_start_position() {
    let camera = OrbitCamera::default();
    assert!((camera.eye() - CAMERA_START).length() < 1e-3);
    assert_eq!(camera.center(), Vec3::ZERO);
    assert!((camera.distance() - CAMERA_START.length()).abs() < 1e-4);
    assert!((camera.forward() - (-CAMERA_START.normalize())).length() < 1e-5);
}

#[test]
fn extreme_inputs_stay_clamped() {
    let mut camera = OrbitCamera::default();
    for input in [1e9_f32, -1e9, f32::INFINITY, f32::NEG_INFINITY, f32::NAN] {
        camera.zoom(input);
        camera.tilt(input);
        camera.rotate(input);
        assert!(camera.distance() >= MIN_DISTANCE && camera.distance() <= MAX_DISTANCE);
        assert!(camera.polar() >= MIN_POLAR && camera.polar() <= MAX_POLAR);
        assert!(camera.azimuth().is_finite());
        assert!(camera.eye().is_finite());
    }
}

#[test]
fn zoom_and_tilt_snap_to_their_bounds() {
    let mut camera = OrbitCamera::default();
    camera.zoom(-1_000.0);
    assert_eq!(camera.distance(), MIN_DISTANCE);
    camera.zoom(1_000.0);
    assert_eq!(camera.distance(), MAX_DISTANCE);
    camera.tilt(-10.0);
    assert_eq!(camera.polar(), MIN_POLAR);
    camera.tilt(10.0);
    assert_eq!(camera.polar(), MAX_POLAR);
}

#[test]
fn nan_requests_leave_the_camera_alone() {
    let mut camera = OrbitCamera::default();
    let before = camera.clone();
    camera.zoom(f32::NAN);
    camera.tilt(f32::NAN);
    assert_eq!(camera.distance(), before.distance());
    assert_eq!(camera.polar(), before.polar());
}

#[test]
fn azimuth_wraps_without_drifting() {
    let mut camera = OrbitCamera::default();
    for _ in 0..10_000 {
        camera.rotate(0.5);
        assert!(camera.azimuth() > -std::f32::consts::PI);
        assert!(camera.azimuth() <= std::f32::consts::PI);
    }
    let mut half = OrbitCamera::default();
    half.rotate(std::f32::consts::TAU);
    assert!(half.azimuth().abs() < 1e-5);
}

#[test]
fn formed_tree_auto_rotates_only_without_manual_input() {
    let idle = ControlDeltas::ZERO;

    let mut chaos = OrbitCamera::default();
    chaos.advance(&idle, SceneMode::Chaos, DT);
    assert_eq!(chaos.azimuth(), OrbitCamera::default().azimuth());

    let mut formed = OrbitCamera::default();
    let start = formed.azimuth();
    formed.advance(&idle, SceneMode::Formed, DT);
    assert!((formed.azimuth() - (start - AUTO_ROTATE_RAD_PER_SEC * DT)).abs() < 1e-6);

    let manual = ControlDeltas {
        rotation_speed: 0.05,
        ..ControlDeltas::ZERO
    };
    let mut steered = OrbitCamera::default();
    steered.advance(&manual, SceneMode::Formed, DT);
    assert!((steered.azimuth() - (start + 0.05)).abs() < 1e-6);
}

#[test]
fn tilt_delta_is_scaled_into_polar_angle() {
    let deltas = ControlDeltas {
        tilt_delta: 0.2,
        ..ControlDeltas::ZERO
    };
    let mut camera = OrbitCamera::default();
    let before = camera.polar();
    camera.advance(&deltas, SceneMode::Chaos, DT);
    assert!((camera.polar() - (before + 0.2 * TILT_TO_POLAR)).abs() < 1e-6);
}

#[test]
fn camera_projection_looks_at_the_center() {
    let orbit = OrbitCamera::default();
    let camera = orbit.camera(16.0 / 9.0, 45f32.to_radians());
    assert_eq!(camera.target, Vec3::ZERO);
    let clip = camera.view_proj() * orbit.center().extend(1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() < 1e-4 && ndc.y.abs() < 1e-4);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}

use crate::constants::{
    AUTO_ROTATE_RAD_PER_SEC, CAMERA_START, MAX_DISTANCE, MAX_POLAR, MIN_DISTANCE, MIN_POLAR,
    TILT_TO_POLAR,
};
use crate::state::{Camera, ControlDeltas, SceneMode};
use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// Camera orbiting a fixed center in spherical coordinates.
///
/// Azimuth is measured around +Y from +Z toward +X, polar from +Y down.
/// Distance and polar angle are hard-clamped; out-of-range requests snap to
/// the nearest bound.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitCamera {
    center: Vec3,
    azimuth: f32,
    polar: f32,
    distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::from_eye(CAMERA_START, Vec3::ZERO)
    }
}

impl OrbitCamera {
    pub fn from_eye(eye: Vec3, center: Vec3) -> Self {
        let offset = eye - center;
        let distance = offset.length().max(f32::EPSILON);
        let polar = (offset.y / distance).clamp(-1.0, 1.0).acos();
        let azimuth = offset.x.atan2(offset.z);
        Self {
            center,
            azimuth,
            polar: polar.clamp(MIN_POLAR, MAX_POLAR),
            distance: distance.clamp(MIN_DISTANCE, MAX_DISTANCE),
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    pub fn polar(&self) -> f32 {
        self.polar
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn eye(&self) -> Vec3 {
        let sin_polar = self.polar.sin();
        self.center
            + Vec3::new(
                self.distance * sin_polar * self.azimuth.sin(),
                self.distance * self.polar.cos(),
                self.distance * sin_polar * self.azimuth.cos(),
            )
    }

    /// Unit vector from the eye toward the orbit center.
    pub fn forward(&self) -> Vec3 {
        (self.center - self.eye()).normalize_or_zero()
    }

    /// Per-frame update from the shared control deltas.
    ///
    /// Manual rotation is a per-frame azimuth increment; without it the
    /// formed tree slowly auto-rotates (time-based).
    pub fn advance(&mut self, deltas: &ControlDeltas, mode: SceneMode, dt: f32) {
        if deltas.rotation_speed != 0.0 {
            self.rotate(deltas.rotation_speed);
        } else if mode.is_formed() {
            self.rotate(-AUTO_ROTATE_RAD_PER_SEC * dt);
        }
        if deltas.zoom_delta != 0.0 {
            self.zoom(deltas.zoom_delta);
        }
        if deltas.tilt_delta != 0.0 {
            self.tilt(deltas.tilt_delta * TILT_TO_POLAR);
        }
    }

    pub fn rotate(&mut self, d_azimuth: f32) {
        self.azimuth = wrap_angle(self.azimuth + d_azimuth);
    }

    pub fn tilt(&mut self, d_polar: f32) {
        let polar = self.polar + d_polar;
        if !polar.is_nan() {
            self.polar = polar.clamp(MIN_POLAR, MAX_POLAR);
        }
    }

    pub fn zoom(&mut self, d_distance: f32) {
        let distance = self.distance + d_distance;
        if !distance.is_nan() {
            self.distance = distance.clamp(MIN_DISTANCE, MAX_DISTANCE);
        }
    }

    pub fn camera(&self, aspect: f32, fovy_radians: f32) -> Camera {
        Camera {
            eye: self.eye(),
            target: self.center,
            up: Vec3::Y,
            aspect,
            fovy_radians,
            znear: 0.1,
            zfar: 1000.0,
        }
    }
}

/// Wrap into `(-PI, PI]` so long sessions do not lose precision.
#[inline]
fn wrap_angle(angle: f32) -> f32 {
    if !angle.is_finite() {
        return 0.0;
    }
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

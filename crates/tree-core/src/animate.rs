//! Per-frame easing of every entity toward its mode-dependent target.
//!
//! All position/scale easing is `lerp(current, target, min(rate * dt, 1))`:
//! frame-rate aware, monotonic, and never past the target, so a mode flip
//! mid-transition simply reverses direction from wherever the entity is.

use crate::constants::*;
use crate::entity::{Element, Light, Ornament, TopStar};
use crate::state::SceneMode;
use glam::{EulerRot, Mat3, Quat, Vec3};

/// Everything an entity needs to advance one frame. Positions are scene-local.
#[derive(Clone, Copy, Debug)]
pub struct FrameInputs {
    pub dt: f32,
    /// Seconds since the scene started (drives wobble and twinkle).
    pub time: f64,
    pub mode: SceneMode,
    pub eye: Vec3,
    pub focus_anchor: Vec3,
    pub photo_zoom: f32,
}

#[inline]
fn step_fraction(rate: f32, dt: f32) -> f32 {
    (rate * dt).clamp(0.0, 1.0)
}

/// `time * speed + offset` evaluated in f64 so phases stay smooth in long sessions.
#[inline]
pub fn phase(time: f64, speed: f32, offset: f32) -> f32 {
    (time * f64::from(speed) + f64::from(offset)).rem_euclid(std::f64::consts::TAU) as f32
}

#[inline]
pub fn ease_toward(current: Vec3, target: Vec3, rate: f32, dt: f32) -> Vec3 {
    current.lerp(target, step_fraction(rate, dt))
}

#[inline]
pub fn ease_scalar(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    current + (target - current) * step_fraction(rate, dt)
}

/// Exponential damping: `lerp(current, target, 1 - e^(-lambda * dt))`.
#[inline]
pub fn damp(current: f32, target: f32, lambda: f32, dt: f32) -> f32 {
    current + (target - current) * (1.0 - (-lambda * dt.max(0.0)).exp())
}

#[inline]
pub fn cubic_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let f = 2.0 * t - 2.0;
        0.5 * f * f * f + 1.0
    }
}

/// Orientation whose local +Z axis points from `from` toward `to`.
pub fn look_at_rotation(from: Vec3, to: Vec3) -> Quat {
    let forward = (to - from).normalize_or_zero();
    if forward == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    let mut right = Vec3::Y.cross(forward);
    if right.length_squared() < 1e-8 {
        // looking straight up or down
        right = Vec3::X;
    }
    let right = right.normalize();
    let up = forward.cross(right);
    Quat::from_mat3(&Mat3::from_cols(right, up, forward))
}

/// World-space point in front of the camera where a focused photo is held:
/// a fixed distance along the eye-to-center ray, lifted slightly.
pub fn focus_anchor(eye: Vec3, center: Vec3) -> Vec3 {
    let toward_center = (center - eye).normalize_or_zero();
    eye + toward_center * FOCUS_DISTANCE + Vec3::Y * FOCUS_LIFT
}

#[inline]
fn tumble(rotation: Quat, spin: Vec3, dt: f32) -> Quat {
    (rotation * Quat::from_euler(EulerRot::XYZ, spin.x * dt, spin.y * dt, spin.z * dt)).normalize()
}

impl Ornament {
    pub fn advance(&mut self, frame: &FrameInputs, focused: bool) {
        let formed = frame.mode.is_formed();
        let placement = *self.body.placement();
        let (target, rate, target_scale) = if focused {
            (
                frame.focus_anchor,
                FOCUS_RATE,
                FOCUS_SCALE + frame.photo_zoom * PHOTO_ZOOM_SCALE,
            )
        } else if formed {
            (placement.target(), FORMED_RATE * self.weight, self.base_scale)
        } else {
            (placement.chaos(), CHAOS_RATE, self.base_scale)
        };

        self.body.position = ease_toward(self.body.position, target, rate, frame.dt);
        self.body.scale = ease_scalar(self.body.scale, target_scale, SCALE_RATE, frame.dt);

        let pos = self.body.position;
        self.body.rotation = if focused {
            look_at_rotation(pos, frame.eye)
        } else if formed {
            let outward = Vec3::new(pos.x * 2.0, pos.y + 0.5, pos.z * 2.0);
            let pitch = phase(frame.time, self.wobble_speed, self.wobble_offset);
            let roll = phase(frame.time, self.wobble_speed * 0.8, self.wobble_offset);
            let wobble = Quat::from_euler(
                EulerRot::XYZ,
                pitch.sin() * WOBBLE_AMPLITUDE,
                0.0,
                roll.cos() * WOBBLE_AMPLITUDE,
            );
            look_at_rotation(pos, outward) * wobble
        } else {
            tumble(self.body.rotation, self.spin, frame.dt)
        };
    }
}

impl Element {
    pub fn advance(&mut self, frame: &FrameInputs) {
        let placement = *self.body.placement();
        let target = if frame.mode.is_formed() {
            placement.target()
        } else {
            placement.chaos()
        };
        self.body.position = ease_toward(self.body.position, target, ELEMENT_RATE, frame.dt);
        self.body.rotation = tumble(self.body.rotation, self.spin, frame.dt);
    }
}

impl Light {
    pub fn advance(&mut self, frame: &FrameInputs) {
        let placement = *self.body.placement();
        let formed = frame.mode.is_formed();
        let target = if formed {
            placement.target()
        } else {
            placement.chaos()
        };
        self.body.position = ease_toward(self.body.position, target, LIGHT_RATE, frame.dt);
        self.glow = if formed {
            let twinkle =
                (phase(frame.time, self.twinkle_speed, self.twinkle_offset).sin() + 1.0) / 2.0;
            LIGHT_BASE_GLOW + twinkle * LIGHT_TWINKLE_GLOW
        } else {
            0.0
        };
    }
}

impl TopStar {
    pub fn advance(&mut self, frame: &FrameInputs) {
        let goal = if frame.mode.is_formed() { 1.0 } else { 0.0 };
        self.scale = ease_scalar(self.scale, goal, STAR_SCALE_RATE, frame.dt);
        self.rotation =
            (self.rotation * Quat::from_rotation_y(STAR_SPIN_RAD_PER_SEC * frame.dt)).normalize();
    }
}

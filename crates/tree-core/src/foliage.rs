//! Massed needle point cloud.
//!
//! Foliage is not transform-addressable per point: the GPU blends every point
//! between its two positions from one shared progress scalar, and this type
//! only owns the static buffers plus that scalar.

use crate::animate::{cubic_in_out, damp};
use crate::constants::{FOLIAGE_COLOR, FOLIAGE_DAMPING, FOLIAGE_SCATTER_RADIUS};
use crate::field::{self, ConeFill, ConeVolume, Placement, ScatterVolume};
use crate::state::SceneMode;
use glam::Vec3;
use rand::Rng;

#[derive(Clone, Debug)]
pub struct Foliage {
    placements: Vec<Placement>,
    jitter: Vec<f32>,
    progress: f32,
}

impl Foliage {
    pub fn new<R: Rng + ?Sized>(count: usize, cone: ConeVolume, rng: &mut R) -> Self {
        let placements = field::generate(
            count,
            ScatterVolume::Sphere {
                radius: FOLIAGE_SCATTER_RADIUS,
            },
            cone,
            ConeFill::Solid,
            rng,
        );
        let jitter = (0..count).map(|_| rng.gen::<f32>()).collect();
        Self {
            placements,
            jitter,
            progress: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Per-point size jitter in `[0, 1)`.
    pub fn jitter(&self) -> &[f32] {
        &self.jitter
    }

    /// 0 = fully scattered, 1 = fully formed.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn advance(&mut self, mode: SceneMode, dt: f32) {
        let goal = if mode.is_formed() { 1.0 } else { 0.0 };
        self.progress = damp(self.progress, goal, FOLIAGE_DAMPING, dt);
    }

    /// CPU mirror of the vertex shader blend, without the time noise.
    pub fn blended_position(&self, index: usize) -> Option<Vec3> {
        let p = self.placements.get(index)?;
        Some(p.chaos().lerp(p.target(), cubic_in_out(self.progress)))
    }

    /// Point color for the current progress (dim emerald to bright emerald).
    pub fn color(&self) -> [f32; 3] {
        let t = cubic_in_out(self.progress);
        let k = 0.3 + (1.2 - 0.3) * t;
        [
            FOLIAGE_COLOR[0] * k,
            FOLIAGE_COLOR[1] * k,
            FOLIAGE_COLOR[2] * k,
        ]
    }
}

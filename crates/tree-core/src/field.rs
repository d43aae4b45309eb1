//! Dual-position sampling for every animated collection.
//!
//! Each member gets a scatter ("chaos") position drawn from a bounded volume
//! and an assembled ("formed") position drawn from the tree cone. The two are
//! sampled independently and never change after creation.

use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

/// Immutable pair of positions an entity moves between.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    chaos: Vec3,
    target: Vec3,
}

impl Placement {
    pub fn new(chaos: Vec3, target: Vec3) -> Self {
        Self { chaos, target }
    }

    #[inline]
    pub fn chaos(&self) -> Vec3 {
        self.chaos
    }

    #[inline]
    pub fn target(&self) -> Vec3 {
        self.target
    }
}

/// Bounded volume used for the dispersed arrangement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScatterVolume {
    /// Axis-aligned cube centered on the origin.
    Cube { half_extent: f32 },
    /// Solid ball centered on the origin.
    Sphere { radius: f32 },
}

impl ScatterVolume {
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        match *self {
            ScatterVolume::Cube { half_extent } => Vec3::new(
                (rng.gen::<f32>() - 0.5) * 2.0 * half_extent,
                (rng.gen::<f32>() - 0.5) * 2.0 * half_extent,
                (rng.gen::<f32>() - 0.5) * 2.0 * half_extent,
            ),
            ScatterVolume::Sphere { radius } => loop {
                // Rejection from the enclosing cube keeps the density uniform
                let p = Vec3::new(
                    rng.gen::<f32>() * 2.0 - 1.0,
                    rng.gen::<f32>() * 2.0 - 1.0,
                    rng.gen::<f32>() * 2.0 - 1.0,
                );
                if p.length_squared() <= 1.0 {
                    break p * radius;
                }
            },
        }
    }

    /// Largest distance from the origin a sample can have.
    pub fn bound(&self) -> f32 {
        match *self {
            ScatterVolume::Cube { half_extent } => half_extent * 3.0_f32.sqrt(),
            ScatterVolume::Sphere { radius } => radius,
        }
    }
}

/// How far from the axis a formed position sits at a given height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConeFill {
    /// Uniform radial distance in `[0, radius_at(y)]` (solid fill).
    Solid,
    /// Exactly `radius_at(y) * scale + offset` (ornaments hugging the surface).
    Surface { scale: f32, offset: f32 },
}

/// Upright cone centered on the origin, base at `-height/2`, apex at `+height/2`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConeVolume {
    pub height: f32,
    pub radius: f32,
}

impl ConeVolume {
    pub fn new(height: f32, radius: f32) -> Self {
        Self { height, radius }
    }

    /// Radius at height `y`, shrinking linearly from base to apex.
    #[inline]
    pub fn radius_at(&self, y: f32) -> f32 {
        let t = ((y + self.height / 2.0) / self.height).clamp(0.0, 1.0);
        self.radius * (1.0 - t)
    }

    pub fn sample<R: Rng + ?Sized>(&self, fill: ConeFill, rng: &mut R) -> Vec3 {
        let y = rng.gen::<f32>() * self.height - self.height / 2.0;
        let at_height = self.radius_at(y);
        let theta = rng.gen::<f32>() * TAU;
        let r = match fill {
            ConeFill::Solid => rng.gen::<f32>() * at_height,
            ConeFill::Surface { scale, offset } => at_height * scale + offset,
        };
        Vec3::new(r * theta.cos(), y, r * theta.sin())
    }
}

/// Produce `count` placements with independently sampled chaos and target positions.
///
/// Fresh randomness per call; pass a seeded rng only when reproducibility matters
/// (tests).
pub fn generate<R: Rng + ?Sized>(
    count: usize,
    scatter: ScatterVolume,
    cone: ConeVolume,
    fill: ConeFill,
    rng: &mut R,
) -> Vec<Placement> {
    (0..count)
        .map(|_| {
            let chaos = scatter.sample(rng);
            let target = cone.sample(fill, rng);
            Placement::new(chaos, target)
        })
        .collect()
}

use crate::constants::*;
use crate::field::{self, ConeFill, ConeVolume, Placement, ScatterVolume};
use glam::{EulerRot, Quat, Vec3};
use rand::seq::SliceRandom;
use rand::Rng;
use std::f32::consts::PI;

/// Mutable transform of one animated entity plus its fixed placement.
#[derive(Clone, Debug)]
pub struct Body {
    placement: Placement,
    pub position: Vec3,
    pub scale: f32,
    pub rotation: Quat,
}

impl Body {
    /// Starts at the chaos position, matching the initial scene mode.
    pub fn new(placement: Placement, scale: f32, rotation: Quat) -> Self {
        Self {
            position: placement.chaos(),
            placement,
            scale,
            rotation,
        }
    }

    #[inline]
    pub fn placement(&self) -> &Placement {
        &self.placement
    }
}

/// Double-sided photo card.
#[derive(Clone, Debug)]
pub struct Ornament {
    pub body: Body,
    pub base_scale: f32,
    pub weight: f32,
    pub texture_index: usize,
    pub border_color: [f32; 3],
    pub spin: Vec3,
    pub wobble_offset: f32,
    pub wobble_speed: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementKind {
    Gift,
    Bauble,
    Cane,
}

/// Decorative mesh (gift box, bauble, candy cane).
#[derive(Clone, Debug)]
pub struct Element {
    pub body: Body,
    pub kind: ElementKind,
    pub color: [f32; 3],
    pub spin: Vec3,
}

/// Twinkling fairy light.
#[derive(Clone, Debug)]
pub struct Light {
    pub body: Body,
    pub color: [f32; 3],
    pub twinkle_speed: f32,
    pub twinkle_offset: f32,
    pub glow: f32,
}

/// Gold star above the apex; grows in when the tree forms.
#[derive(Clone, Debug)]
pub struct TopStar {
    pub position: Vec3,
    pub scale: f32,
    pub rotation: Quat,
}

impl TopStar {
    pub fn new(cone: &ConeVolume) -> Self {
        Self {
            position: Vec3::new(0.0, cone.height / 2.0 + STAR_LIFT, 0.0),
            scale: 0.0,
            rotation: Quat::IDENTITY,
        }
    }
}

fn random_tumble<R: Rng + ?Sized>(rng: &mut R) -> Quat {
    Quat::from_euler(
        EulerRot::XYZ,
        rng.gen::<f32>() * PI,
        rng.gen::<f32>() * PI,
        rng.gen::<f32>() * PI,
    )
}

fn random_spin<R: Rng + ?Sized>(rng: &mut R, span: f32) -> Vec3 {
    Vec3::new(
        (rng.gen::<f32>() - 0.5) * span,
        (rng.gen::<f32>() - 0.5) * span,
        (rng.gen::<f32>() - 0.5) * span,
    )
}

fn pick<R: Rng + ?Sized, const N: usize>(palette: &[[f32; 3]; N], rng: &mut R) -> [f32; 3] {
    *palette.choose(rng).unwrap_or(&[1.0, 1.0, 1.0])
}

pub fn build_ornaments<R: Rng + ?Sized>(
    count: usize,
    cone: ConeVolume,
    texture_count: usize,
    rng: &mut R,
) -> Vec<Ornament> {
    let placements = field::generate(
        count,
        ScatterVolume::Cube {
            half_extent: ORNAMENT_SCATTER_HALF_EXTENT,
        },
        cone,
        ConeFill::Surface {
            scale: 1.0,
            offset: ORNAMENT_RADIAL_OFFSET,
        },
        rng,
    );
    placements
        .into_iter()
        .enumerate()
        .map(|(i, placement)| {
            let base_scale = if rng.gen::<f32>() < BIG_ORNAMENT_CHANCE {
                BIG_ORNAMENT_SCALE
            } else {
                0.8 + rng.gen::<f32>() * 0.6
            };
            Ornament {
                body: Body::new(placement, base_scale, random_tumble(rng)),
                base_scale,
                weight: 0.8 + rng.gen::<f32>() * 1.2,
                texture_index: i % texture_count.max(1),
                border_color: pick(&BORDER_COLORS, rng),
                spin: random_spin(rng, 1.0),
                wobble_offset: rng.gen::<f32>() * 10.0,
                wobble_speed: 0.5 + rng.gen::<f32>() * 0.5,
            }
        })
        .collect()
}

pub fn build_elements<R: Rng + ?Sized>(
    count: usize,
    cone: ConeVolume,
    rng: &mut R,
) -> Vec<Element> {
    let placements = field::generate(
        count,
        ScatterVolume::Cube {
            half_extent: ELEMENT_SCATTER_HALF_EXTENT,
        },
        cone,
        ConeFill::Surface {
            scale: ELEMENT_RADIAL_SCALE,
            offset: 0.0,
        },
        rng,
    );
    placements
        .into_iter()
        .map(|placement| {
            let (kind, color, scale) = match rng.gen_range(0..3) {
                0 => (
                    ElementKind::Gift,
                    pick(&GIFT_COLORS, rng),
                    0.8 + rng.gen::<f32>() * 0.4,
                ),
                1 => (
                    ElementKind::Bauble,
                    pick(&GIFT_COLORS, rng),
                    0.6 + rng.gen::<f32>() * 0.4,
                ),
                _ => (
                    ElementKind::Cane,
                    pick(&CANDY_COLORS, rng),
                    0.7 + rng.gen::<f32>() * 0.3,
                ),
            };
            Element {
                body: Body::new(placement, scale, random_tumble(rng)),
                kind,
                color,
                spin: random_spin(rng, 2.0),
            }
        })
        .collect()
}

pub fn build_lights<R: Rng + ?Sized>(count: usize, cone: ConeVolume, rng: &mut R) -> Vec<Light> {
    let placements = field::generate(
        count,
        ScatterVolume::Cube {
            half_extent: LIGHT_SCATTER_HALF_EXTENT,
        },
        cone,
        ConeFill::Surface {
            scale: 1.0,
            offset: LIGHT_RADIAL_OFFSET,
        },
        rng,
    );
    placements
        .into_iter()
        .map(|placement| Light {
            body: Body::new(placement, 1.0, Quat::IDENTITY),
            color: pick(&LIGHT_COLORS, rng),
            twinkle_speed: 2.0 + rng.gen::<f32>() * 3.0,
            twinkle_offset: rng.gen::<f32>() * 100.0,
            glow: 0.0,
        })
        .collect()
}

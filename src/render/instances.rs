use crate::constants::*;
use glam::Vec3;
use tree_core::entity::ElementKind;
use tree_core::foliage::Foliage;
use tree_core::{Camera, Scene, SCENE_OFFSET};

// Sprite shape ids, mirrored in shaders/tree.wgsl
pub const SHAPE_PHOTO: u32 = 0;
pub const SHAPE_GIFT: u32 = 1;
pub const SHAPE_BAUBLE: u32 = 2;
pub const SHAPE_CANE: u32 = 3;
pub const SHAPE_LIGHT: u32 = 4;
pub const SHAPE_STAR: u32 = 5;

// Below this the star is fully shrunk and not drawn
const MIN_VISIBLE_SCALE: f32 = 1e-3;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpriteInstance {
    pub position: [f32; 3],
    pub scale: f32,
    pub rotation: [f32; 4],
    pub color: [f32; 3],
    pub glow: f32,
    pub size: [f32; 2],
    pub shape: u32,
    /// Photo texture slot for cards, unused otherwise.
    pub variant: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FoliageInstance {
    pub chaos: [f32; 3],
    pub jitter: f32,
    pub formed: [f32; 3],
    pub _pad: f32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub cam_right: [f32; 4],
    pub cam_up: [f32; 4],
    pub scene_offset: [f32; 4],
    /// rgb = foliage color, w = foliage progress
    pub foliage: [f32; 4],
    /// x = seconds since start, y = foliage point size
    pub params: [f32; 4],
}

impl SceneUniforms {
    pub fn new(camera: &Camera, time: f32, foliage: &Foliage) -> Self {
        let view = camera.view_matrix();
        let right = view.row(0).truncate().normalize_or_zero();
        let up = view.row(1).truncate().normalize_or_zero();
        let c = foliage.color();
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            cam_right: right.extend(0.0).to_array(),
            cam_up: up.extend(0.0).to_array(),
            scene_offset: SCENE_OFFSET.extend(0.0).to_array(),
            foliage: [c[0], c[1], c[2], foliage.progress()],
            params: [time, FOLIAGE_POINT_SIZE, 0.0, 0.0],
        }
    }
}

// Foliage drift in tree.wgsl runs at 1.3, 1.1 and 0.9 rad/s; all three finish
// whole cycles over 20π seconds, so wrapping there is seamless.
pub const SHADER_TIME_PERIOD: f64 = 20.0 * std::f64::consts::PI;

/// Session clock folded into a range where f32 keeps sub-millisecond precision.
#[inline]
pub fn shader_time(elapsed: f64) -> f32 {
    elapsed.rem_euclid(SHADER_TIME_PERIOD) as f32
}

/// Upper bound on sprites a scene can emit per frame.
pub fn sprite_capacity(scene: &Scene) -> usize {
    scene.ornaments.len() + scene.elements.len() + scene.lights.len() + 1
}

/// Static per-point data; only the progress uniform changes per frame.
pub fn pack_foliage(foliage: &Foliage) -> Vec<FoliageInstance> {
    foliage
        .placements()
        .iter()
        .zip(foliage.jitter())
        .map(|(p, &jitter)| FoliageInstance {
            chaos: p.chaos().to_array(),
            jitter,
            formed: p.target().to_array(),
            _pad: 0.0,
        })
        .collect()
}

#[inline]
fn sprite(
    position: Vec3,
    scale: f32,
    rotation: glam::Quat,
    color: [f32; 3],
    glow: f32,
    size: [f32; 2],
    shape: u32,
) -> SpriteInstance {
    SpriteInstance {
        position: position.to_array(),
        scale,
        rotation: rotation.to_array(),
        color,
        glow,
        size,
        shape,
        variant: 0,
    }
}

/// Rebuild the per-frame sprite list from the scene's current transforms.
pub fn pack_sprites(scene: &Scene, out: &mut Vec<SpriteInstance>) {
    out.clear();
    for o in &scene.ornaments {
        let mut s = sprite(
            o.body.position,
            o.body.scale,
            o.body.rotation,
            o.border_color,
            0.0,
            PHOTO_CARD_SIZE,
            SHAPE_PHOTO,
        );
        s.variant = o.texture_index as u32;
        out.push(s);
    }
    for e in &scene.elements {
        let (size, shape) = match e.kind {
            ElementKind::Gift => (GIFT_SIZE, SHAPE_GIFT),
            ElementKind::Bauble => (BAUBLE_SIZE, SHAPE_BAUBLE),
            ElementKind::Cane => (CANE_SIZE, SHAPE_CANE),
        };
        out.push(sprite(
            e.body.position,
            e.body.scale,
            e.body.rotation,
            e.color,
            ELEMENT_GLOW,
            size,
            shape,
        ));
    }
    for l in &scene.lights {
        out.push(sprite(
            l.body.position,
            l.body.scale,
            l.body.rotation,
            l.color,
            l.glow,
            LIGHT_SIZE,
            SHAPE_LIGHT,
        ));
    }
    let star = &scene.star;
    if star.scale > MIN_VISIBLE_SCALE {
        out.push(sprite(
            star.position,
            star.scale,
            star.rotation,
            tree_core::STAR_COLOR,
            STAR_GLOW,
            STAR_SIZE,
            SHAPE_STAR,
        ));
    }
}

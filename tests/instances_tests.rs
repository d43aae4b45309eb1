// Host-side tests for GPU instance packing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod instances {
    include!("../src/render/instances.rs");
}

use instances::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tree_core::field::ConeVolume;
use tree_core::{Action, Controls, Scene, SceneMode, SceneParams};

fn scene(seed: u64) -> Scene {
    let params = SceneParams {
        foliage: 50,
        ornaments: 20,
        elements: 10,
        lights: 15,
        photo_textures: 31,
        tree: ConeVolume::new(22.0, 9.0),
    };
    Scene::new(params, &mut StdRng::seed_from_u64(seed))
}

#[test]
fn gpu_layouts_have_expected_sizes() {
    assert_eq!(std::mem::size_of::<SpriteInstance>(), 64);
    assert_eq!(std::mem::size_of::<FoliageInstance>(), 32);
    assert_eq!(std::mem::size_of::<SceneUniforms>(), 144);
    assert_eq!(std::mem::size_of::<SceneUniforms>() % 16, 0);
}

#[test]
fn hidden_star_is_not_packed() {
    let s = scene(1);
    let mut out = Vec::new();
    pack_sprites(&s, &mut out);
    assert_eq!(out.len(), 20 + 10 + 15);
    assert!(out.iter().all(|i| i.shape != SHAPE_STAR));
    assert!(out.len() < sprite_capacity(&s));
}

#[test]
fn formed_star_is_packed_last() {
    let mut s = scene(2);
    let mut controls = Controls::new(s.ornaments.len());
    controls.dispatch(
        Action::SetMode(SceneMode::Formed),
        0.0,
        &mut StdRng::seed_from_u64(0),
    );
    for _ in 0..120 {
        s.advance(1.0 / 60.0, &controls);
    }
    let mut out: Vec<SpriteInstance> = vec![bytemuck::Zeroable::zeroed(); 3];
    pack_sprites(&s, &mut out);
    assert_eq!(out.len(), sprite_capacity(&s));
    let star = out.last().copied().unwrap();
    assert_eq!(star.shape, SHAPE_STAR);
    assert_eq!(star.color, tree_core::STAR_COLOR);
}

#[test]
fn photo_cards_carry_their_texture_slot() {
    let s = scene(3);
    let mut out = Vec::new();
    pack_sprites(&s, &mut out);
    for (o, packed) in s.ornaments.iter().zip(&out) {
        assert_eq!(packed.shape, SHAPE_PHOTO);
        assert_eq!(packed.variant, o.texture_index as u32);
        assert_eq!(packed.position, o.body.position.to_array());
    }
    let shapes: Vec<u32> = out[20..30].iter().map(|i| i.shape).collect();
    assert!(shapes
        .iter()
        .all(|&s| s == SHAPE_GIFT || s == SHAPE_BAUBLE || s == SHAPE_CANE));
    assert!(out[30..].iter().all(|i| i.shape == SHAPE_LIGHT));
}

#[test]
fn foliage_packs_both_arrangements() {
    let s = scene(4);
    let packed = pack_foliage(&s.foliage);
    assert_eq!(packed.len(), s.foliage.placements().len());
    for (p, inst) in s.foliage.placements().iter().zip(&packed) {
        assert_eq!(inst.chaos, p.chaos().to_array());
        assert_eq!(inst.formed, p.target().to_array());
    }
}

#[test]
fn uniforms_carry_foliage_progress_and_offset() {
    let s = scene(5);
    let camera = s.orbit.camera(1.5, 45f32.to_radians());
    let u = SceneUniforms::new(&camera, 2.5, &s.foliage);
    assert_eq!(u.params[0], 2.5);
    assert_eq!(u.foliage[3], s.foliage.progress());
    assert_eq!(u.scene_offset[1], tree_core::SCENE_OFFSET.y);
    let right = glam::Vec4::from_array(u.cam_right).truncate();
    let up = glam::Vec4::from_array(u.cam_up).truncate();
    assert!((right.length() - 1.0).abs() < 1e-5);
    assert!(right.dot(up).abs() < 1e-5);
}

#[test]
fn shader_clock_wraps_without_a_visible_jump() {
    assert_eq!(shader_time(0.0), 0.0);
    assert!((shader_time(SHADER_TIME_PERIOD + 1.5) - 1.5).abs() < 1e-4);
    let late = 30.0 * 24.0 * 3600.0;
    assert!(shader_time(late) < SHADER_TIME_PERIOD as f32);
    // every foliage drift frequency completes whole turns per period
    for freq in [1.3_f64, 1.1, 0.9] {
        let turns = freq * SHADER_TIME_PERIOD / std::f64::consts::TAU;
        assert!((turns - turns.round()).abs() < 1e-9, "{freq}");
    }
}

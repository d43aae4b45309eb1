use crate::animate::{focus_anchor, FrameInputs};
use crate::constants::*;
use crate::entity::{self, Element, Light, Ornament, TopStar};
use crate::field::ConeVolume;
use crate::foliage::Foliage;
use crate::orbit::OrbitCamera;
use crate::state::Controls;
use glam::Vec3;
use rand::Rng;

/// Collection sizes and tree shape for one session.
#[derive(Clone, Debug)]
pub struct SceneParams {
    pub foliage: usize,
    pub ornaments: usize,
    pub elements: usize,
    pub lights: usize,
    pub photo_textures: usize,
    pub tree: ConeVolume,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            foliage: FOLIAGE_COUNT,
            ornaments: ORNAMENT_COUNT,
            elements: ELEMENT_COUNT,
            lights: LIGHT_COUNT,
            photo_textures: PHOTO_TEXTURE_COUNT,
            tree: ConeVolume::new(TREE_HEIGHT, TREE_RADIUS),
        }
    }
}

/// Clamp a raw frame delta so a paused tab does not produce one huge step.
#[inline]
pub fn clamp_frame_dt(dt: f32) -> f32 {
    if dt.is_finite() {
        dt.clamp(0.0, MAX_FRAME_DT)
    } else {
        0.0
    }
}

/// All animated state of one session, advanced by an explicit tick.
pub struct Scene {
    pub foliage: Foliage,
    pub ornaments: Vec<Ornament>,
    pub elements: Vec<Element>,
    pub lights: Vec<Light>,
    pub star: TopStar,
    pub orbit: OrbitCamera,
    params: SceneParams,
    elapsed: f64,
}

impl Scene {
    pub fn new<R: Rng + ?Sized>(params: SceneParams, rng: &mut R) -> Self {
        let tree = params.tree;
        let scene = Self {
            foliage: Foliage::new(params.foliage, tree, rng),
            ornaments: entity::build_ornaments(params.ornaments, tree, params.photo_textures, rng),
            elements: entity::build_elements(params.elements, tree, rng),
            lights: entity::build_lights(params.lights, tree, rng),
            star: TopStar::new(&tree),
            orbit: OrbitCamera::default(),
            params,
            elapsed: 0.0,
        };
        log::info!(
            "[scene] foliage={} ornaments={} elements={} lights={}",
            scene.foliage.len(),
            scene.ornaments.len(),
            scene.elements.len(),
            scene.lights.len()
        );
        scene
    }

    pub fn params(&self) -> &SceneParams {
        &self.params
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Where a focused photo is pulled to, in scene-local coordinates.
    pub fn focus_anchor(&self) -> Vec3 {
        focus_anchor(self.orbit.eye(), self.orbit.center()) - SCENE_OFFSET
    }

    /// One simulation tick: camera first, then every collection reads the
    /// resulting pose and the current mode.
    pub fn advance(&mut self, raw_dt: f32, controls: &Controls) {
        let dt = clamp_frame_dt(raw_dt);
        self.elapsed += f64::from(dt);
        let mode = controls.mode();

        self.orbit.advance(&controls.deltas(), mode, dt);

        let frame = FrameInputs {
            dt,
            time: self.elapsed,
            mode,
            eye: self.orbit.eye() - SCENE_OFFSET,
            focus_anchor: self.focus_anchor(),
            photo_zoom: controls.photo_zoom(),
        };
        let focused = controls.focus();

        self.foliage.advance(mode, dt);
        for (i, ornament) in self.ornaments.iter_mut().enumerate() {
            ornament.advance(&frame, focused == Some(i));
        }
        for element in &mut self.elements {
            element.advance(&frame);
        }
        for light in &mut self.lights {
            light.advance(&frame);
        }
        self.star.advance(&frame);
    }
}

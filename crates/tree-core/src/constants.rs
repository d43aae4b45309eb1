use glam::Vec3;

// Shared scene/gesture tuning constants used by the core and the web frontend.

// Collection sizes
pub const FOLIAGE_COUNT: usize = 15_000;
pub const ORNAMENT_COUNT: usize = 300;
pub const ELEMENT_COUNT: usize = 200;
pub const LIGHT_COUNT: usize = 400;
pub const PHOTO_TEXTURE_COUNT: usize = 31; // top photo + 30 numbered photos

// Tree cone
pub const TREE_HEIGHT: f32 = 22.0;
pub const TREE_RADIUS: f32 = 9.0;
pub const SCENE_OFFSET: Vec3 = Vec3::new(0.0, -6.0, 0.0); // world-space offset of the tree group
pub const STAR_LIFT: f32 = 1.8; // star sits this far above the apex

// Scatter volumes (chaos state)
pub const FOLIAGE_SCATTER_RADIUS: f32 = 25.0;
pub const ORNAMENT_SCATTER_HALF_EXTENT: f32 = 35.0;
pub const ELEMENT_SCATTER_HALF_EXTENT: f32 = 30.0;
pub const LIGHT_SCATTER_HALF_EXTENT: f32 = 30.0;

// Radial placement on the cone surface (formed state)
pub const ORNAMENT_RADIAL_OFFSET: f32 = 0.5;
pub const ELEMENT_RADIAL_SCALE: f32 = 0.95;
pub const LIGHT_RADIAL_OFFSET: f32 = 0.3;

// Easing rates (per second)
pub const FOCUS_RATE: f32 = 3.0;
pub const FORMED_RATE: f32 = 0.8; // multiplied by per-ornament weight
pub const CHAOS_RATE: f32 = 0.5;
pub const SCALE_RATE: f32 = 3.0;
pub const ELEMENT_RATE: f32 = 1.5;
pub const LIGHT_RATE: f32 = 2.0;
pub const FOLIAGE_DAMPING: f32 = 1.5;
pub const STAR_SCALE_RATE: f32 = 3.0;
pub const STAR_SPIN_RAD_PER_SEC: f32 = 0.5;

// Largest simulated step; longer pauses (hidden tab) collapse to this
pub const MAX_FRAME_DT: f32 = 0.1;

// Focused photo
pub const FOCUS_DISTANCE: f32 = 20.0; // along the camera-to-center ray
pub const FOCUS_LIFT: f32 = 5.0;
pub const FOCUS_SCALE: f32 = 5.0;
pub const PHOTO_ZOOM_SCALE: f32 = 2.0; // scale added per unit of photo zoom
pub const PHOTO_ZOOM_MAX: f32 = 2.0;
pub const PHOTO_ZOOM_STEP: f32 = 0.05;

// Ornament decoration
pub const BIG_ORNAMENT_CHANCE: f32 = 0.2;
pub const BIG_ORNAMENT_SCALE: f32 = 2.2;
pub const WOBBLE_AMPLITUDE: f32 = 0.05; // radians

// Fairy light brightness while formed
pub const LIGHT_BASE_GLOW: f32 = 3.0;
pub const LIGHT_TWINKLE_GLOW: f32 = 4.0;

// Gesture mapping
pub const GESTURE_MIN_CONFIDENCE: f32 = 0.4;
pub const ROTATE_GAIN: f32 = 0.15;
pub const ROTATE_DEADZONE: f32 = 0.01;
pub const TILT_GAIN: f32 = 0.8;
pub const TILT_DEADZONE: f32 = 0.05;
pub const ZOOM_STEP: f32 = 1.5;

// Debounce intervals for discrete photo actions
pub const FOCUS_DEBOUNCE_MS: f64 = 1000.0;
pub const UNFOCUS_DEBOUNCE_MS: f64 = 500.0;

// Orbit camera
pub const CAMERA_START: Vec3 = Vec3::new(0.0, 8.0, 60.0);
pub const MIN_DISTANCE: f32 = 30.0;
pub const MAX_DISTANCE: f32 = 120.0;
pub const MIN_POLAR: f32 = 0.3;
pub const MAX_POLAR: f32 = std::f32::consts::PI / 1.7;
pub const TILT_TO_POLAR: f32 = 0.02;
// Matches an orbit control's autoRotateSpeed of 0.3 (one turn per 200s)
pub const AUTO_ROTATE_RAD_PER_SEC: f32 = std::f32::consts::TAU / 60.0 * 0.3;

// Palettes (linear-ish RGB)
pub const FOLIAGE_COLOR: [f32; 3] = [0.0, 0.259, 0.145]; // emerald
pub const STAR_COLOR: [f32; 3] = [1.0, 0.843, 0.0]; // gold

pub const BORDER_COLORS: [[f32; 3]; 7] = [
    [1.0, 0.980, 0.941],
    [0.941, 0.902, 0.549],
    [0.902, 0.902, 0.980],
    [1.0, 0.714, 0.757],
    [0.596, 0.984, 0.596],
    [0.529, 0.808, 0.980],
    [1.0, 0.855, 0.725],
];

pub const GIFT_COLORS: [[f32; 3]; 4] = [
    [0.827, 0.184, 0.184],
    [1.0, 0.843, 0.0],
    [0.098, 0.463, 0.824],
    [0.180, 0.490, 0.196],
];

pub const CANDY_COLORS: [[f32; 3]; 2] = [[0.827, 0.184, 0.184], [1.0, 1.0, 1.0]];

pub const LIGHT_COLORS: [[f32; 3]; 4] = [
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    [1.0, 1.0, 0.0],
];

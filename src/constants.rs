// Front-end constants: DOM wiring, assets, projection and sprite sizing.

// DOM element ids (see www/index.html)
pub const CANVAS_ID: &str = "app-canvas";
pub const VIDEO_ID: &str = "tracker-video";
pub const LANDMARK_CANVAS_ID: &str = "landmark-canvas";
pub const STATUS_ID: &str = "ai-status";
pub const MODE_BUTTON_ID: &str = "btn-mode";
pub const MUTE_BUTTON_ID: &str = "btn-mute";
pub const DEBUG_BUTTON_ID: &str = "btn-debug";
pub const MUSIC_ID: &str = "music";

// Hand-tracking model assets
pub const VISION_WASM_ROOT: &str =
    "https://cdn.jsdelivr.net/npm/@mediapipe/tasks-vision@0.10.3/wasm";
pub const GESTURE_MODEL_URL: &str = "https://storage.googleapis.com/mediapipe-models/gesture_recognizer/gesture_recognizer/float16/1/gesture_recognizer.task";

// Projection
pub const FOV_Y_DEG: f32 = 45.0;

// Background
pub const CLEAR_COLOR: [f64; 3] = [0.0, 0.012, 0.0];

// Sprite extents (local units, multiplied by each entity's scale)
pub const PHOTO_CARD_SIZE: [f32; 2] = [1.2, 1.5];
pub const GIFT_SIZE: [f32; 2] = [0.8, 0.8];
pub const BAUBLE_SIZE: [f32; 2] = [1.0, 1.0];
pub const CANE_SIZE: [f32; 2] = [0.3, 1.2];
pub const LIGHT_SIZE: [f32; 2] = [0.24, 0.24];
pub const STAR_SIZE: [f32; 2] = [2.6, 2.6];
pub const FOLIAGE_POINT_SIZE: f32 = 0.12;

// Glow applied to sprites (lights use their own twinkle)
pub const ELEMENT_GLOW: f32 = 0.2;
pub const STAR_GLOW: f32 = 1.5;

// Landmark overlay colors
pub const LANDMARK_COLOR: &str = "#FF0000";
pub const STATUS_COLOR: &str = "rgba(255, 215, 0, 0.4)";
pub const STATUS_ERROR_COLOR: &str = "#FF0000";

// Background music
pub const MUSIC_VOLUME: f64 = 0.5;

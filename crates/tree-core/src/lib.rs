pub mod animate;
pub mod constants;
pub mod entity;
pub mod field;
pub mod foliage;
pub mod gesture;
pub mod orbit;
pub mod scene;
pub mod state;
pub mod status;

pub use constants::*;
pub use gesture::*;
pub use orbit::OrbitCamera;
pub use scene::*;
pub use state::*;
pub use status::*;

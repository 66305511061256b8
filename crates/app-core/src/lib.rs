pub mod bounds;
pub mod catalog;
pub mod constants;
pub mod framer;
pub mod layout;
pub mod mesh;
pub mod scene;
pub mod texture;
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use bounds::*;
pub use catalog::*;
pub use constants::*;
pub use framer::*;
pub use layout::*;
pub use scene::*;

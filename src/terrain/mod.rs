//! Sculptable heightfield terrain

pub mod color;
pub mod mesh;
pub mod pick;

pub use color::height_to_color;
pub use mesh::{DirtyBuffers, TerrainMesh, MAX_SEGMENTS};
pub use pick::{pick, PickResult};

//! GPU buffer management

pub mod camera_buffer;
pub mod line_buffer;

pub use camera_buffer::{CameraBuffer, CameraUniform};
pub use line_buffer::{LineBuffer, ModelUniform};

//! Render pipelines

pub mod lines;

pub use lines::{LinePipeline, DEPTH_FORMAT};

//! Terrasculpt - interactive terrain sculpting
//!
//! A flat grid mesh is raised and lowered with a stepped-falloff brush while
//! an orbit camera looks on. Heights drive vertex colors through a hue ramp.

pub mod core;
pub mod math;
pub mod terrain;
pub mod brush;
pub mod interaction;
pub mod ui;
pub mod render;

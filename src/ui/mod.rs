//! Host controls for the brush

pub mod slider;
pub mod panel;

pub use slider::Slider;
pub use panel::{BrushControl, BrushPanel, PanelEvent};

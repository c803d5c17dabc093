//! Stepped-falloff sculpting brush
//!
//! A stroke moves every vertex within the brush radius of a pick point by a
//! quantized amount, so repeated strokes build terraces rather than smooth
//! hills.

pub mod params;
pub mod falloff;
pub mod stroke;
pub mod session;

// Re-exports
pub use params::{BrushParams, MIN_RADIUS, MIN_STEP_SIZE};
pub use falloff::{height_delta, step_index};
pub use stroke::{apply_brush, StrokeDirection, StrokeOutcome};
pub use session::{DragSession, SessionSummary};

//! Live brush parameters

/// Smallest radius a brush can have; zero would divide by zero when normalizing
pub const MIN_RADIUS: f32 = 0.01;
/// Smallest step size; zero would make the band index infinite
pub const MIN_STEP_SIZE: f32 = 0.001;

const DEFAULT_RADIUS: f32 = 10.0;
const DEFAULT_MAX_FALLOFF: f32 = 0.5;
const DEFAULT_STEP_SIZE: f32 = 5.0;

/// Radius, peak delta and quantization of the sculpting brush.
///
/// Values are sanitized on the way in so a stroke can never produce a
/// non-finite height: a radius or step size at or below zero is raised to
/// its minimum, and a non-finite value is rejected (the previous value
/// stays).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrushParams {
    radius: f32,
    max_falloff: f32,
    step_size: f32,
}

impl BrushParams {
    /// Build sanitized parameters; rejected values fall back to the defaults
    pub fn new(radius: f32, max_falloff: f32, step_size: f32) -> Self {
        let mut params = Self::default();
        params.set_radius(radius);
        params.set_max_falloff(max_falloff);
        params.set_step_size(step_size);
        params
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn max_falloff(&self) -> f32 {
        self.max_falloff
    }

    pub fn step_size(&self) -> f32 {
        self.step_size
    }

    pub fn set_radius(&mut self, radius: f32) {
        if let Some(radius) = sanitize("radius", radius, MIN_RADIUS) {
            self.radius = radius;
        }
    }

    pub fn set_max_falloff(&mut self, max_falloff: f32) {
        if max_falloff.is_finite() {
            self.max_falloff = max_falloff;
        } else {
            log::warn!("Ignoring non-finite brush max_falloff {}", max_falloff);
        }
    }

    pub fn set_step_size(&mut self, step_size: f32) {
        if let Some(step_size) = sanitize("step_size", step_size, MIN_STEP_SIZE) {
            self.step_size = step_size;
        }
    }
}

impl Default for BrushParams {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            max_falloff: DEFAULT_MAX_FALLOFF,
            step_size: DEFAULT_STEP_SIZE,
        }
    }
}

fn sanitize(name: &str, value: f32, min: f32) -> Option<f32> {
    if !value.is_finite() {
        log::warn!("Ignoring non-finite brush {} {}", name, value);
        return None;
    }
    if value < min {
        log::warn!("Brush {} {} below minimum, clamping to {}", name, value, min);
        return Some(min);
    }
    Some(value)
}

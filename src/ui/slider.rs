//! Numeric slider model

/// A bounded numeric control with a step grid and an enabled flag
#[derive(Clone, Debug, PartialEq)]
pub struct Slider {
    pub label: &'static str,
    value: f32,
    min: f32,
    max: f32,
    step: f32,
    enabled: bool,
}

impl Slider {
    pub fn new(label: &'static str, value: f32, min: f32, max: f32, step: f32) -> Self {
        let mut slider = Self {
            label,
            value: min,
            min,
            max,
            step,
            enabled: true,
        };
        slider.value = slider.snap(value);
        slider
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Set a new value, clamped to the bounds and snapped to the step grid.
    /// Returns true when the value changed; a disabled slider never changes.
    pub fn set(&mut self, value: f32) -> bool {
        if !self.enabled || !value.is_finite() {
            return false;
        }
        let snapped = self.snap(value);
        let changed = snapped != self.value;
        self.value = snapped;
        changed
    }

    /// Move by a whole number of steps
    pub fn nudge(&mut self, steps: i32) -> bool {
        self.set(self.value + steps as f32 * self.step)
    }

    fn snap(&self, value: f32) -> f32 {
        let clamped = value.clamp(self.min, self.max);
        if self.step <= 0.0 {
            return clamped;
        }
        let steps = ((clamped - self.min) / self.step).round();
        (self.min + steps * self.step).clamp(self.min, self.max)
    }
}

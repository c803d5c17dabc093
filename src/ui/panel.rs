//! Brush control panel: three sliders and two mode buttons on the keyboard

use winit::keyboard::KeyCode;

use crate::brush::BrushParams;
use crate::interaction::InteractionMode;
use super::slider::Slider;

/// One of the three brush sliders
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrushControl {
    Radius,
    MaxFalloff,
    StepSize,
}

/// Something the host has to act on after a key press
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelEvent {
    /// A mode button was pressed
    SelectMode(InteractionMode),
    /// A slider value changed
    BrushChanged(BrushControl),
}

/// Slider state for the brush
pub struct BrushPanel {
    radius: Slider,
    max_falloff: Slider,
    step_size: Slider,
}

impl BrushPanel {
    pub fn new(params: &BrushParams) -> Self {
        Self {
            radius: Slider::new("Radius", params.radius(), 1.0, 50.0, 1.0),
            max_falloff: Slider::new("Max falloff", params.max_falloff(), 0.0, 5.0, 0.1),
            // Reaches zero on purpose: the brush clamps degenerate step sizes
            step_size: Slider::new("Step size", params.step_size(), 0.0, 10.0, 0.1),
        }
    }

    /// Key bindings:
    /// - `N` / `P`: navigation / painting mode
    /// - `[` / `]`: radius
    /// - `-` / `=`: max falloff
    /// - `,` / `.`: step size
    pub fn handle_key(&mut self, key: KeyCode) -> Option<PanelEvent> {
        let (control, steps) = match key {
            KeyCode::KeyN => return Some(PanelEvent::SelectMode(InteractionMode::Navigation)),
            KeyCode::KeyP => return Some(PanelEvent::SelectMode(InteractionMode::Painting)),
            KeyCode::BracketLeft => (BrushControl::Radius, -1),
            KeyCode::BracketRight => (BrushControl::Radius, 1),
            KeyCode::Minus => (BrushControl::MaxFalloff, -1),
            KeyCode::Equal => (BrushControl::MaxFalloff, 1),
            KeyCode::Comma => (BrushControl::StepSize, -1),
            KeyCode::Period => (BrushControl::StepSize, 1),
            _ => return None,
        };
        self.slider_mut(control)
            .nudge(steps)
            .then_some(PanelEvent::BrushChanged(control))
    }

    fn slider_mut(&mut self, control: BrushControl) -> &mut Slider {
        match control {
            BrushControl::Radius => &mut self.radius,
            BrushControl::MaxFalloff => &mut self.max_falloff,
            BrushControl::StepSize => &mut self.step_size,
        }
    }

    pub fn set_radius_enabled(&mut self, enabled: bool) {
        self.radius.set_enabled(enabled);
    }

    /// Copy one slider's value into the live brush; the other
    /// parameters are left as they are.
    pub fn apply(&self, control: BrushControl, params: &mut BrushParams) {
        match control {
            BrushControl::Radius => params.set_radius(self.radius.value()),
            BrushControl::MaxFalloff => params.set_max_falloff(self.max_falloff.value()),
            BrushControl::StepSize => params.set_step_size(self.step_size.value()),
        }
    }

    pub fn sliders(&self) -> [&Slider; 3] {
        [&self.radius, &self.max_falloff, &self.step_size]
    }

    /// One-line readout of mode and slider values
    pub fn status(&self, mode: InteractionMode) -> String {
        let sliders: Vec<String> = self
            .sliders()
            .iter()
            .map(|s| {
                let lock = if s.is_enabled() { "" } else { " (locked)" };
                format!("{} {:.2}{}", s.label, s.value(), lock)
            })
            .collect();
        format!("{} | {}", mode, sliders.join(", "))
    }
}

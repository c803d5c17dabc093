//! Interaction modes

use std::fmt;

/// What mouse input on the terrain does
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InteractionMode {
    /// Mouse drags orbit the camera
    #[default]
    Navigation,
    /// Mouse drags sculpt the terrain
    Painting,
}

/// Host-side switches that follow from a mode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeEffects {
    pub orbit_enabled: bool,
    pub radius_control_enabled: bool,
}

impl InteractionMode {
    pub fn effects(self) -> ModeEffects {
        match self {
            InteractionMode::Navigation => ModeEffects {
                orbit_enabled: true,
                radius_control_enabled: false,
            },
            InteractionMode::Painting => ModeEffects {
                orbit_enabled: false,
                radius_control_enabled: true,
            },
        }
    }
}

impl fmt::Display for InteractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InteractionMode::Navigation => write!(f, "Navigation"),
            InteractionMode::Painting => write!(f, "Painting"),
        }
    }
}

/// Which pointer handlers are currently registered
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Listeners {
    pub pointer_down: bool,
    pub pointer_up: bool,
    pub pointer_move: bool,
}

impl Listeners {
    pub fn none() -> Self {
        Self::default()
    }
}

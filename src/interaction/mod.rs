//! Navigation / painting interaction state machine

pub mod mode;
pub mod controller;

pub use mode::{InteractionMode, Listeners, ModeEffects};
pub use controller::InteractionController;

//! Input state tracking

use std::collections::HashSet;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};

/// Pixels per wheel line when the platform reports pixel deltas
const PIXELS_PER_LINE: f32 = 40.0;

/// Bit for a mouse button in a pointer-style button mask
/// (primary = 1, secondary = 2, auxiliary = 4, back = 8, forward = 16)
pub fn button_bit(button: MouseButton) -> u8 {
    match button {
        MouseButton::Left => 1,
        MouseButton::Right => 2,
        MouseButton::Middle => 4,
        MouseButton::Back => 8,
        MouseButton::Forward => 16,
        MouseButton::Other(_) => 0,
    }
}

/// Pointer state accumulated between frames.
///
/// Keys are not tracked here: the brush panel reacts to individual key
/// events instead of polled state.
pub struct InputState {
    /// Mouse movement since last frame, in pixels
    mouse_delta: (f32, f32),
    /// Current mouse position
    mouse_position: (f32, f32),
    /// Wheel movement since last frame, in lines
    scroll_delta: f32,
    /// Currently pressed mouse buttons
    mouse_buttons: HashSet<MouseButton>,
}

impl InputState {
    /// Create new input state
    pub fn new() -> Self {
        Self {
            mouse_delta: (0.0, 0.0),
            mouse_position: (0.0, 0.0),
            scroll_delta: 0.0,
            mouse_buttons: HashSet::new(),
        }
    }

    /// Process a window event
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.move_cursor(position.x as f32, position.y as f32);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.set_button(*button, *state == ElementState::Pressed);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.scroll(match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_LINE,
                });
            }
            WindowEvent::Focused(false) => {
                // Releases are not delivered to unfocused windows
                self.mouse_buttons.clear();
            }
            _ => {}
        }
    }

    pub(crate) fn move_cursor(&mut self, x: f32, y: f32) {
        self.mouse_delta.0 += x - self.mouse_position.0;
        self.mouse_delta.1 += y - self.mouse_position.1;
        self.mouse_position = (x, y);
    }

    pub(crate) fn scroll(&mut self, lines: f32) {
        self.scroll_delta += lines;
    }

    pub(crate) fn set_button(&mut self, button: MouseButton, pressed: bool) {
        if pressed {
            self.mouse_buttons.insert(button);
        } else {
            self.mouse_buttons.remove(&button);
        }
    }

    /// Call at end of frame to reset per-frame state
    pub fn end_frame(&mut self) {
        self.mouse_delta = (0.0, 0.0);
        self.scroll_delta = 0.0;
    }

    /// Get mouse delta since last frame
    pub fn mouse_delta(&self) -> (f32, f32) {
        self.mouse_delta
    }

    /// Get current mouse position
    pub fn mouse_position(&self) -> (f32, f32) {
        self.mouse_position
    }

    /// Wheel lines scrolled since last frame (positive = away from user)
    pub fn scroll_delta(&self) -> f32 {
        self.scroll_delta
    }

    /// Check if mouse button is pressed
    pub fn is_mouse_button_pressed(&self, button: MouseButton) -> bool {
        self.mouse_buttons.contains(&button)
    }

    /// All held buttons as a pointer-style bitmask
    pub fn buttons_mask(&self) -> u8 {
        self.mouse_buttons.iter().fold(0, |mask, b| mask | button_bit(*b))
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

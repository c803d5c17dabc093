//! Orbit camera controller

use crate::core::camera::Camera;
use crate::core::config::OrbitSettings;
use crate::core::input::InputState;
use crate::core::types::Vec3;
use winit::event::MouseButton;

/// Damped orbit controller circling a target point.
///
/// Left drag rotates, right drag pans across the ground plane, the wheel
/// dollies. Input accumulates into pending deltas; each `update` applies a
/// `damping_factor` share of them and decays the rest, which produces the
/// ease-out after the user lets go.
pub struct OrbitCameraController {
    /// When false, input is ignored and the camera is left alone
    pub enabled: bool,
    target: Vec3,
    radius: f32,
    /// Azimuth around +Y, measured from +Z
    theta: f32,
    /// Polar angle from +Y
    phi: f32,
    delta_theta: f32,
    delta_phi: f32,
    pan_offset: Vec3,
    scale: f32,
    settings: OrbitSettings,
}

impl OrbitCameraController {
    /// Create a controller that reproduces the camera's current view of `target`
    pub fn new(camera: &Camera, target: Vec3, settings: OrbitSettings) -> Self {
        let offset = camera.position - target;
        let radius = offset.length().max(settings.min_distance);
        let theta = offset.x.atan2(offset.z);
        let phi = (offset.y / radius).clamp(-1.0, 1.0).acos();

        Self {
            enabled: true,
            target,
            radius,
            theta,
            phi,
            delta_theta: 0.0,
            delta_phi: 0.0,
            pan_offset: Vec3::ZERO,
            scale: 1.0,
            settings,
        }
    }

    /// Feed this frame's mouse input
    pub fn handle_input(&mut self, input: &InputState) {
        if !self.enabled {
            return;
        }

        let (dx, dy) = input.mouse_delta();
        if input.is_mouse_button_pressed(MouseButton::Left) {
            self.rotate(dx, dy);
        } else if input.is_mouse_button_pressed(MouseButton::Right) {
            self.pan(dx, dy);
        }

        let scroll = input.scroll_delta();
        if scroll != 0.0 {
            self.dolly(scroll);
        }
    }

    /// Queue a rotation from a drag of (dx, dy) pixels
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.delta_theta -= dx * self.settings.rotate_speed;
        self.delta_phi -= dy * self.settings.rotate_speed;
    }

    /// Queue a pan from a drag of (dx, dy) pixels.
    ///
    /// Panning stays in the horizontal plane: vertical drags move the
    /// target along the camera's ground-projected forward direction.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        let scale = self.settings.pan_speed * self.radius;
        let right = Vec3::new(self.theta.cos(), 0.0, -self.theta.sin());
        let forward = Vec3::Y.cross(right);
        self.pan_offset += -right * dx * scale + forward * dy * scale;
    }

    /// Queue a dolly of `lines` wheel lines (positive moves closer)
    pub fn dolly(&mut self, lines: f32) {
        self.scale *= self.settings.zoom_speed.powf(lines);
    }

    /// Apply pending motion and write the result into the camera
    pub fn update(&mut self, camera: &mut Camera) {
        let damping = self.settings.damping_factor;

        self.theta += self.delta_theta * damping;
        self.phi = (self.phi + self.delta_phi * damping)
            .clamp(self.settings.min_polar_angle, self.settings.max_polar_angle);
        self.radius = (self.radius * self.scale)
            .clamp(self.settings.min_distance, self.settings.max_distance);
        self.target += self.pan_offset * damping;

        self.delta_theta *= 1.0 - damping;
        self.delta_phi *= 1.0 - damping;
        self.pan_offset *= 1.0 - damping;
        self.scale = 1.0;

        camera.position = self.target + self.offset();
        camera.look_at(self.target);
    }

    fn offset(&self) -> Vec3 {
        let sin_phi = self.phi.sin();
        Vec3::new(
            self.radius * sin_phi * self.theta.sin(),
            self.radius * self.phi.cos(),
            self.radius * sin_phi * self.theta.cos(),
        )
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn distance(&self) -> f32 {
        self.radius
    }

    pub fn polar_angle(&self) -> f32 {
        self.phi
    }
}

//! Application configuration
//!
//! Every section has defaults matching the stock sculpting scene, so a config
//! file only needs to name the values it changes.

use std::path::Path;

use serde::Deserialize;

use crate::core::error::Error;
use crate::core::types::Result;
use crate::terrain::MAX_SEGMENTS;

/// Window settings
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Terrasculpt".to_string(),
            width: 1280,
            height: 720,
        }
    }
}

/// Terrain plane settings
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct TerrainSettings {
    /// Edge length of the square plane in world units
    pub size: f32,
    /// Segments along each edge (vertices per edge = segments + 1)
    pub segments: u32,
    /// Divisions of the reference grid drawn under the terrain
    pub grid_divisions: u32,
}

impl Default for TerrainSettings {
    fn default() -> Self {
        Self {
            size: 100.0,
            segments: 199,
            grid_divisions: 100,
        }
    }
}

/// Initial camera placement and projection
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub fov_degrees: f32,
    pub position: [f32; 3],
    pub target: [f32; 3],
    pub near: f32,
    pub far: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            position: [0.0, 50.0, 100.0],
            target: [0.0, 0.0, 0.0],
            near: 0.1,
            far: 1000.0,
        }
    }
}

/// Orbit controller tuning
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct OrbitSettings {
    /// Fraction of the pending motion applied per frame
    pub damping_factor: f32,
    /// Radians of rotation per pixel of drag
    pub rotate_speed: f32,
    /// Dolly scale per wheel line
    pub zoom_speed: f32,
    /// World units of pan per pixel at unit distance
    pub pan_speed: f32,
    pub min_polar_angle: f32,
    pub max_polar_angle: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            damping_factor: 0.05,
            rotate_speed: 0.005,
            zoom_speed: 0.95,
            pan_speed: 0.0015,
            min_polar_angle: 0.01,
            max_polar_angle: std::f32::consts::FRAC_PI_2,
            min_distance: 1.0,
            max_distance: 500.0,
        }
    }
}

/// Initial brush parameters
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct BrushSettings {
    pub radius: f32,
    pub max_falloff: f32,
    pub step_size: f32,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            radius: 10.0,
            max_falloff: 0.5,
            step_size: 5.0,
        }
    }
}

/// Top-level configuration
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SculptConfig {
    pub window: WindowSettings,
    pub terrain: TerrainSettings,
    pub camera: CameraSettings,
    pub orbit: OrbitSettings,
    pub brush: BrushSettings,
}

impl SculptConfig {
    /// Load and validate a JSON config file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Parse and validate a JSON config string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SculptConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the scene cannot be built from
    pub fn validate(&self) -> Result<()> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(Error::Config("window size must be non-zero".to_string()));
        }
        if !(self.terrain.size.is_finite() && self.terrain.size > 0.0) {
            return Err(Error::Config(format!("terrain.size must be positive, got {}", self.terrain.size)));
        }
        if self.terrain.segments == 0 || self.terrain.segments > MAX_SEGMENTS {
            return Err(Error::Config(format!(
                "terrain.segments must be in 1..={}, got {}",
                MAX_SEGMENTS, self.terrain.segments
            )));
        }
        if !(self.camera.near > 0.0 && self.camera.far > self.camera.near) {
            return Err(Error::Config(format!(
                "camera planes must satisfy 0 < near < far, got near={} far={}",
                self.camera.near, self.camera.far
            )));
        }
        let orbit = &self.orbit;
        if !(orbit.damping_factor > 0.0 && orbit.damping_factor <= 1.0) {
            return Err(Error::Config(format!("orbit.damping_factor must be in (0, 1], got {}", orbit.damping_factor)));
        }
        if orbit.min_polar_angle > orbit.max_polar_angle || orbit.min_distance > orbit.max_distance {
            return Err(Error::Config("orbit limits are inverted".to_string()));
        }

        let brush = &self.brush;
        for (name, value) in [
            ("brush.radius", brush.radius),
            ("brush.max_falloff", brush.max_falloff),
            ("brush.step_size", brush.step_size),
        ] {
            if !value.is_finite() {
                return Err(Error::Config(format!("{} must be finite, got {}", name, value)));
            }
        }

        Ok(())
    }
}

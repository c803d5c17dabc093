//! Reference grid on the ground plane

use glam::Vec3;

/// Color of the two lines through the origin
pub const GRID_CENTER_COLOR: [f32; 3] = [0x44 as f32 / 255.0; 3];
/// Color of every other grid line
pub const GRID_LINE_COLOR: [f32; 3] = [0x88 as f32 / 255.0; 3];

/// Non-indexed line list: every two vertices form a segment
#[derive(Clone, Debug, Default)]
pub struct LineGeometry {
    pub positions: Vec<Vec3>,
    pub colors: Vec<[f32; 3]>,
}

impl LineGeometry {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    fn push_segment(&mut self, a: Vec3, b: Vec3, color: [f32; 3]) {
        self.positions.extend_from_slice(&[a, b]);
        self.colors.extend_from_slice(&[color, color]);
    }
}

/// Square grid of `size` world units in the XZ plane, centred on the
/// origin, with `divisions` cells per side.
pub fn grid_lines(size: f32, divisions: u32) -> LineGeometry {
    let divisions = divisions.max(1);
    let center = divisions / 2;
    let step = size / divisions as f32;
    let half = size * 0.5;

    let mut lines = LineGeometry::default();
    for i in 0..=divisions {
        let k = -half + i as f32 * step;
        let color = if i == center && divisions % 2 == 0 {
            GRID_CENTER_COLOR
        } else {
            GRID_LINE_COLOR
        };
        lines.push_segment(Vec3::new(-half, 0.0, k), Vec3::new(half, 0.0, k), color);
        lines.push_segment(Vec3::new(k, 0.0, -half), Vec3::new(k, 0.0, half), color);
    }
    lines
}

//! Sculptable terrain mesh

use glam::{Mat4, Vec3, Vec4};

use crate::core::config::TerrainSettings;
use crate::math::Aabb;
use super::color::height_to_color;

/// Which GPU-side copies are stale
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirtyBuffers {
    pub positions: bool,
    pub colors: bool,
}

impl DirtyBuffers {
    pub fn any(&self) -> bool {
        self.positions || self.colors
    }
}

/// A regular grid of vertices on a plane whose local Z is the height.
///
/// Local positions are `(x, y, height)`. The model transform lays the plane
/// flat so that height points along world +Y. Colors are always derived from
/// the current heights; anything that changes a height must finish with
/// [`TerrainMesh::recompute_colors`].
#[derive(Clone, Debug)]
pub struct TerrainMesh {
    segments_x: u32,
    segments_y: u32,
    positions: Vec<Vec3>,
    colors: Vec<[f32; 3]>,
    /// Triangle list, two per grid cell
    indices: Vec<u32>,
    model: Mat4,
    dirty: DirtyBuffers,
}

/// Largest segment count per edge; keeps every vertex addressable by a u32 index
pub const MAX_SEGMENTS: u32 = 4096;

/// Rotation of -90 degrees about X: local (x, y, h) lands at world (x, h, -y)
pub fn horizontal_transform() -> Mat4 {
    Mat4::from_cols(
        Vec4::X,
        Vec4::new(0.0, 0.0, -1.0, 0.0),
        Vec4::new(0.0, 1.0, 0.0, 0.0),
        Vec4::W,
    )
}

impl TerrainMesh {
    /// Build a flat plane of `width` x `depth` split into the given segments.
    ///
    /// Vertices run row by row from +y to -y, each row from -x to +x.
    /// The returned mesh is dirty so the first frame uploads it. Segment
    /// counts are clamped to `1..=MAX_SEGMENTS`.
    pub fn plane(width: f32, depth: f32, segments_x: u32, segments_y: u32) -> Self {
        if segments_x > MAX_SEGMENTS || segments_y > MAX_SEGMENTS {
            log::warn!(
                "Plane of {}x{} segments exceeds {}, clamping",
                segments_x, segments_y, MAX_SEGMENTS
            );
        }
        let segments_x = segments_x.clamp(1, MAX_SEGMENTS);
        let segments_y = segments_y.clamp(1, MAX_SEGMENTS);
        let columns = segments_x + 1;
        let rows = segments_y + 1;

        let segment_width = width / segments_x as f32;
        let segment_depth = depth / segments_y as f32;
        let half_width = width * 0.5;
        let half_depth = depth * 0.5;

        let mut positions = Vec::with_capacity(columns as usize * rows as usize);
        for iy in 0..rows {
            let y = iy as f32 * segment_depth - half_depth;
            for ix in 0..columns {
                let x = ix as f32 * segment_width - half_width;
                positions.push(Vec3::new(x, -y, 0.0));
            }
        }

        let mut indices = Vec::with_capacity(segments_x as usize * segments_y as usize * 6);
        for iy in 0..segments_y {
            for ix in 0..segments_x {
                let a = ix + columns * iy;
                let b = ix + columns * (iy + 1);
                let c = (ix + 1) + columns * (iy + 1);
                let d = (ix + 1) + columns * iy;
                indices.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }

        let mut mesh = Self {
            segments_x,
            segments_y,
            colors: vec![[0.0; 3]; positions.len()],
            positions,
            indices,
            model: horizontal_transform(),
            dirty: DirtyBuffers::default(),
        };
        mesh.recompute_colors();
        mesh.dirty.positions = true;
        mesh
    }

    /// Square plane described by the terrain config section
    pub fn from_settings(settings: &TerrainSettings) -> Self {
        Self::plane(settings.size, settings.size, settings.segments, settings.segments)
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Vertices per row
    pub fn columns(&self) -> u32 {
        self.segments_x + 1
    }

    /// Number of rows
    pub fn rows(&self) -> u32 {
        self.segments_y + 1
    }

    /// Local-space vertex positions
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Mutable local positions; marks the position buffer dirty
    pub fn positions_mut(&mut self) -> &mut [Vec3] {
        self.dirty.positions = true;
        &mut self.positions
    }

    pub fn colors(&self) -> &[[f32; 3]] {
        &self.colors
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn height(&self, index: usize) -> f32 {
        self.positions[index].z
    }

    pub fn model_matrix(&self) -> Mat4 {
        self.model
    }

    /// World-space position of a vertex
    pub fn world_position(&self, index: usize) -> Vec3 {
        self.model.transform_point3(self.positions[index])
    }

    /// Local-space corners of a triangle
    pub fn triangle(&self, triangle: usize) -> [Vec3; 3] {
        let i = triangle * 3;
        [
            self.positions[self.indices[i] as usize],
            self.positions[self.indices[i + 1] as usize],
            self.positions[self.indices[i + 2] as usize],
        ]
    }

    /// Local-space bounds of every vertex
    pub fn local_bounds(&self) -> Aabb {
        Aabb::from_points(self.positions.iter().copied()).unwrap_or_default()
    }

    /// Re-derive every vertex color from its height and mark colors dirty
    pub fn recompute_colors(&mut self) {
        for (color, position) in self.colors.iter_mut().zip(self.positions.iter()) {
            *color = height_to_color(position.z);
        }
        self.dirty.colors = true;
    }

    pub fn dirty(&self) -> DirtyBuffers {
        self.dirty
    }

    /// Return and clear the dirty flags (called by the uploader)
    pub fn take_dirty(&mut self) -> DirtyBuffers {
        std::mem::take(&mut self.dirty)
    }

    /// Unique edges of the triangulation as a line list, for wireframe drawing
    pub fn edge_indices(&self) -> Vec<u32> {
        let columns = self.columns();
        let rows = self.rows();
        let (sx, sy) = (self.segments_x as usize, self.segments_y as usize);
        let horizontal = rows as usize * sx;
        let vertical = columns as usize * sy;
        let diagonal = sx * sy;
        let mut edges = Vec::with_capacity((horizontal + vertical + diagonal) * 2);

        for iy in 0..rows {
            for ix in 0..columns {
                let a = ix + columns * iy;
                if ix + 1 < columns {
                    edges.extend_from_slice(&[a, a + 1]);
                }
                if iy + 1 < rows {
                    edges.extend_from_slice(&[a, a + columns]);
                }
                if ix + 1 < columns && iy + 1 < rows {
                    // Shared edge of the cell's two triangles
                    edges.extend_from_slice(&[a + columns, a + 1]);
                }
            }
        }
        edges
    }
}

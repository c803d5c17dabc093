//! Vertex, index and model buffers for line-list geometry

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;

use crate::render::grid::LineGeometry;
use crate::terrain::{DirtyBuffers, TerrainMesh};

/// Per-mesh uniform (must match `Model` in lines.wgsl)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ModelUniform {
    pub model: [[f32; 4]; 4],
}

impl ModelUniform {
    pub fn new(model: Mat4) -> Self {
        Self {
            model: model.to_cols_array_2d(),
        }
    }
}

/// Bind group layout for [`ModelUniform`], shared by every line buffer
pub fn model_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("model_bind_group_layout"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    })
}

/// GPU copy of a line mesh: positions and colors in separate vertex
/// buffers so either can be re-uploaded on its own.
pub struct LineBuffer {
    positions: wgpu::Buffer,
    colors: wgpu::Buffer,
    indices: Option<wgpu::Buffer>,
    /// Indices when indexed, vertices otherwise
    count: u32,
    bind_group: wgpu::BindGroup,
}

impl LineBuffer {
    fn create(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        label: &str,
        positions: &[Vec3],
        colors: &[[f32; 3]],
        indices: Option<&[u32]>,
        model: Mat4,
    ) -> Self {
        let positions_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} positions", label)),
            contents: bytemuck::cast_slice(positions),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });
        let colors_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} colors", label)),
            contents: bytemuck::cast_slice(colors),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });
        let index_buffer = indices.map(|indices| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{} indices", label)),
                contents: bytemuck::cast_slice(indices),
                usage: wgpu::BufferUsages::INDEX,
            })
        });
        let count = indices.map_or(positions.len(), |i| i.len()) as u32;

        let model_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} model", label)),
            contents: bytemuck::bytes_of(&ModelUniform::new(model)),
            usage: wgpu::BufferUsages::UNIFORM,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{} model_bind_group", label)),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: model_buffer.as_entire_binding(),
            }],
        });

        Self {
            positions: positions_buffer,
            colors: colors_buffer,
            indices: index_buffer,
            count,
            bind_group,
        }
    }

    /// Static line list in world space
    pub fn from_lines(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        label: &str,
        lines: &LineGeometry,
    ) -> Self {
        Self::create(device, layout, label, &lines.positions, &lines.colors, None, Mat4::IDENTITY)
    }

    /// Wireframe of the terrain. Uploads everything, so the mesh's dirty
    /// flags are cleared.
    pub fn from_terrain(device: &wgpu::Device, layout: &wgpu::BindGroupLayout, mesh: &mut TerrainMesh) -> Self {
        let edges = mesh.edge_indices();
        let buffer = Self::create(
            device,
            layout,
            "terrain",
            mesh.positions(),
            mesh.colors(),
            Some(&edges),
            mesh.model_matrix(),
        );
        mesh.take_dirty();
        buffer
    }

    /// Re-upload whatever the terrain has marked stale
    pub fn sync_terrain(&self, queue: &wgpu::Queue, mesh: &mut TerrainMesh) -> DirtyBuffers {
        let dirty = mesh.take_dirty();
        if dirty.positions {
            queue.write_buffer(&self.positions, 0, bytemuck::cast_slice(mesh.positions()));
        }
        if dirty.colors {
            queue.write_buffer(&self.colors, 0, bytemuck::cast_slice(mesh.colors()));
        }
        dirty
    }

    /// Record the draw; the line pipeline must already be bound
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_bind_group(1, &self.bind_group, &[]);
        pass.set_vertex_buffer(0, self.positions.slice(..));
        pass.set_vertex_buffer(1, self.colors.slice(..));
        match &self.indices {
            Some(indices) => {
                pass.set_index_buffer(indices.slice(..), wgpu::IndexFormat::Uint32);
                pass.draw_indexed(0..self.count, 0, 0..1);
            }
            None => pass.draw(0..self.count, 0..1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_uniform_size() {
        assert_eq!(std::mem::size_of::<ModelUniform>(), 64);
    }

    #[test]
    fn test_vertex_data_is_tightly_packed() {
        // Vertex layouts declare a 12-byte stride for both attributes
        let mesh = TerrainMesh::plane(2.0, 2.0, 1, 1);
        let positions: &[u8] = bytemuck::cast_slice(mesh.positions());
        let colors: &[u8] = bytemuck::cast_slice(mesh.colors());
        assert_eq!(positions.len(), mesh.vertex_count() * 12);
        assert_eq!(colors.len(), mesh.vertex_count() * 12);
    }
}

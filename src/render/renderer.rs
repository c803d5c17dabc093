//! Frame rendering: grid and terrain wireframe

use crate::core::camera::Camera;
use crate::core::config::TerrainSettings;
use crate::core::error::Error;
use crate::terrain::TerrainMesh;
use super::buffer::line_buffer::model_bind_group_layout;
use super::buffer::{CameraBuffer, LineBuffer};
use super::context::GpuContext;
use super::grid::grid_lines;
use super::pipeline::{LinePipeline, DEPTH_FORMAT};

const CLEAR_COLOR: wgpu::Color = wgpu::Color::BLACK;

fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("depth_texture"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

pub struct Renderer {
    camera_buffer: CameraBuffer,
    pipeline: LinePipeline,
    grid: LineBuffer,
    terrain: LineBuffer,
    depth_view: wgpu::TextureView,
}

impl Renderer {
    /// Build GPU resources for the grid and the terrain; the terrain's
    /// dirty flags are consumed by the initial upload.
    pub fn new(gpu: &GpuContext, terrain: &mut TerrainMesh, settings: &TerrainSettings) -> Self {
        let device = &gpu.device;
        let camera_buffer = CameraBuffer::new(device);
        let model_layout = model_bind_group_layout(device);
        let pipeline = LinePipeline::new(device, gpu.format(), camera_buffer.bind_group_layout(), &model_layout);

        let terrain_vertices = terrain.vertex_count();
        let grid_geometry = grid_lines(settings.size, settings.grid_divisions);
        let grid = LineBuffer::from_lines(device, &model_layout, "grid", &grid_geometry);
        let terrain = LineBuffer::from_terrain(device, &model_layout, terrain);

        let (width, height) = gpu.size();
        let depth_view = create_depth_view(device, width, height);

        log::info!(
            "Renderer ready: {} grid vertices, terrain {} vertices",
            grid_geometry.vertex_count(),
            terrain_vertices
        );

        Self {
            camera_buffer,
            pipeline,
            grid,
            terrain,
            depth_view,
        }
    }

    /// Recreate size-dependent targets; call after `GpuContext::resize`
    pub fn resize(&mut self, gpu: &GpuContext) {
        let (width, height) = gpu.size();
        self.depth_view = create_depth_view(&gpu.device, width, height);
    }

    /// Upload pending terrain edits and draw one frame
    pub fn render(&mut self, gpu: &GpuContext, camera: &Camera, terrain: &mut TerrainMesh) -> Result<(), Error> {
        let dirty = self.terrain.sync_terrain(&gpu.queue, terrain);
        if dirty.any() {
            log::trace!("Terrain upload: positions={} colors={}", dirty.positions, dirty.colors);
        }
        self.camera_buffer.update(&gpu.queue, camera);

        let output = gpu.get_current_texture()?;
        let view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = gpu.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("frame_encoder"),
        });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("lines_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            pass.set_pipeline(self.pipeline.pipeline());
            pass.set_bind_group(0, self.camera_buffer.bind_group(), &[]);
            self.grid.draw(&mut pass);
            self.terrain.draw(&mut pass);
        }

        gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}


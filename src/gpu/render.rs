use wgpu::{BindGroup, BindGroupLayoutEntry, Device, Queue, RenderPipeline, ShaderStages, TextureFormat, TextureView};

use crate::config::BACKGROUND_COLOR;
use crate::gpu::buffers::BoardBuffers;
use crate::layout::{Action, ScreenLayout};
use crate::simulation::GpuCell;

/// Read-only storage buffer visible to the fragment stage
fn storage_entry(binding: u32) -> BindGroupLayoutEntry {
    BindGroupLayoutEntry {
        binding,
        visibility: ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Storage { read_only: true },
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }
}

fn uniform_entry(binding: u32) -> BindGroupLayoutEntry {
    BindGroupLayoutEntry {
        binding,
        visibility: ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }
}

/// Draws the board and toolbar with one fullscreen triangle.
///
/// The buffers live as long as the session, so the bind group is built once.
pub struct BoardRenderer {
    pipeline: RenderPipeline,
    bind_group: BindGroup,
    buffers: BoardBuffers,
}

impl BoardRenderer {
    pub fn new(device: &Device, format: TextureFormat, cells: &[GpuCell], layout: &ScreenLayout) -> Self {
        let buffers = BoardBuffers::new(device, cells, layout);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("board-shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/board.wgsl").into()),
        });

        // Bindings: 0 cells, 1 render params, 2 label glyphs
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("board-bind-group-layout"),
            entries: &[storage_entry(0), uniform_entry(1), storage_entry(2)],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("board-bind-group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffers.cells_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: buffers.render_params_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: buffers.glyph_buffer.as_entire_binding(),
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("board-pipeline-layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        // No vertex buffers: vs_main derives the triangle from the vertex index
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("board-pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(format.into())],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        Self {
            pipeline,
            bind_group,
            buffers,
        }
    }

    pub fn upload_cells(&self, queue: &Queue, cells: &[GpuCell]) {
        self.buffers.upload_cells(queue, cells);
    }

    pub fn update_layout(&self, queue: &Queue, layout: &ScreenLayout, hovered: Option<Action>) {
        self.buffers.update_render_params(queue, layout, hovered);
    }

    /// Record the board pass into `encoder`
    pub fn draw(&self, encoder: &mut wgpu::CommandEncoder, view: &TextureView) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("board-pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(BACKGROUND_COLOR),
                    store: wgpu::StoreOp::Store,
                },
            })],
            ..Default::default()
        });

        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.bind_group, &[]);
        pass.draw(0..3, 0..1);
    }
}

use wgpu::util::{BufferInitDescriptor, DeviceExt};
use wgpu::{Buffer, BufferUsages, Device, Queue};

use crate::font;
use crate::layout::{Action, ScreenLayout};
use crate::simulation::GpuCell;

/// `hovered_button` value when the pointer is not over any button
pub const NO_HOVER: u32 = u32::MAX;

/// Session-long GPU buffers read by the board shader.
///
/// Sizes are fixed at creation; only the contents change.
pub struct BoardBuffers {
    /// Cell states, row-major
    pub cells_buffer: Buffer,
    /// Uniform buffer for render parameters
    pub render_params_buffer: Buffer,
    /// Toolbar label bitmaps, written once
    pub glyph_buffer: Buffer,
    cell_count: usize,
}

/// Render parameters passed to the board shader (128 bytes, aligned to 16)
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RenderParams {
    // Board info (16 bytes)
    pub rows: u32,
    pub cols: u32,
    pub cell_size: f32,
    pub hovered_button: u32, // NO_HOVER or toolbar index

    // Board origin in pixels (8 bytes + 8 padding = 16 bytes)
    pub origin: [f32; 2],
    pub _padding: [f32; 2],

    // Toolbar buttons as [x, y, width, height] (48 bytes)
    pub buttons: [[f32; 4]; 3],

    // Button captions as [x, y, scale, len] (48 bytes)
    pub labels: [[f32; 4]; 3],
}

impl RenderParams {
    pub fn new(layout: &ScreenLayout, hovered: Option<Action>) -> Self {
        Self {
            rows: layout.board.rows as u32,
            cols: layout.board.cols as u32,
            cell_size: layout.board.cell_size,
            hovered_button: hovered.map_or(NO_HOVER, |action| action.index() as u32),
            origin: [layout.board.origin.0, layout.board.origin.1],
            _padding: [0.0, 0.0],
            buttons: Action::ALL.map(|action| layout.toolbar.rect(action).to_array()),
            labels: Action::ALL.map(|action| layout.toolbar.label(action).to_array()),
        }
    }
}

impl BoardBuffers {
    /// Create and fill every buffer for a board of `initial_data.len()` cells
    pub fn new(device: &Device, initial_data: &[GpuCell], layout: &ScreenLayout) -> Self {
        let cells_buffer = device.create_buffer_init(&BufferInitDescriptor {
            label: Some("board-cells-buffer"),
            contents: bytemuck::cast_slice(initial_data),
            usage: BufferUsages::STORAGE | BufferUsages::COPY_DST,
        });

        let render_params_buffer = device.create_buffer_init(&BufferInitDescriptor {
            label: Some("render-params-buffer"),
            contents: bytemuck::bytes_of(&RenderParams::new(layout, None)),
            usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
        });

        let glyph_buffer = device.create_buffer_init(&BufferInitDescriptor {
            label: Some("toolbar-glyph-buffer"),
            contents: bytemuck::cast_slice(&font::toolbar_glyphs()),
            usage: BufferUsages::STORAGE,
        });

        Self {
            cells_buffer,
            render_params_buffer,
            glyph_buffer,
            cell_count: initial_data.len(),
        }
    }

    /// Replace the board contents after an engine mutation
    pub fn upload_cells(&self, queue: &Queue, cells: &[GpuCell]) {
        assert_eq!(cells.len(), self.cell_count, "Cell data size mismatch");
        queue.write_buffer(&self.cells_buffer, 0, bytemuck::cast_slice(cells));
    }

    /// Update render parameters
    pub fn update_render_params(&self, queue: &Queue, layout: &ScreenLayout, hovered: Option<Action>) {
        let params = RenderParams::new(layout, hovered);
        queue.write_buffer(&self.render_params_buffer, 0, bytemuck::bytes_of(&params));
    }
}

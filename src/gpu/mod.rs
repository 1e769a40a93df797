mod buffers;
mod context;
mod render;

pub use context::{GpuContext, GpuError};
pub use render::BoardRenderer;

mod cell;
mod error;
mod grid;
mod rule;

pub use cell::GpuCell;
pub use error::GridError;
pub use grid::Grid;

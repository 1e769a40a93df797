/// GPU-compatible cell state, one per grid cell in row-major order.
///
/// Layout: 4 bytes, matching `array<u32>` in the board shader.
/// - state: 1 = alive, 0 = dead
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuCell {
    pub state: u32,
}

impl GpuCell {
    pub const DEAD: Self = Self { state: 0 };
    pub const ALIVE: Self = Self { state: 1 };
}

impl From<bool> for GpuCell {
    fn from(alive: bool) -> Self {
        if alive {
            Self::ALIVE
        } else {
            Self::DEAD
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_size() {
        assert_eq!(std::mem::size_of::<GpuCell>(), 4);
    }

    #[test]
    fn test_from_bool() {
        assert_eq!(GpuCell::from(true), GpuCell::ALIVE);
        assert_eq!(GpuCell::from(false), GpuCell::DEAD);
    }

    #[test]
    fn test_cast_to_words() {
        let cells = [GpuCell::ALIVE, GpuCell::DEAD, GpuCell::ALIVE];
        let words: &[u32] = bytemuck::cast_slice(&cells);
        assert_eq!(words, &[1, 0, 1]);
    }
}

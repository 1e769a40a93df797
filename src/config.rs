use std::env;

/// Window size in logical pixels
pub const WINDOW_WIDTH: u32 = 1200;
pub const WINDOW_HEIGHT: u32 = 800;

pub const WINDOW_TITLE: &str = "Conway's Game of Life";

/// Pixels per cell side
pub const CELL_SIZE: u32 = 30;

/// Cells sprinkled by a single Randomize action
pub const DEFAULT_RANDOM_COUNT: usize = 300;

// ============================================
// Toolbar
// ============================================

/// Height of the button strip along the bottom edge
pub const TOOLBAR_HEIGHT: u32 = 48;

/// Button geometry inside the toolbar
pub const BUTTON_WIDTH: u32 = 110;
pub const BUTTON_PADDING: u32 = 6;
pub const BUTTON_GAP: u32 = 10;

// ============================================
// Colors (linear RGB, consumed by the board shader and clear pass)
// ============================================

pub const BACKGROUND_COLOR: wgpu::Color = wgpu::Color {
    r: 0.02,
    g: 0.02,
    b: 0.02,
    a: 1.0,
};

/// Environment variables read by [`Config::from_env`]
pub const ENV_CELL_SIZE: &str = "LIFE_CELL_SIZE";
pub const ENV_RANDOM_COUNT: &str = "LIFE_RANDOM_COUNT";
pub const ENV_SEED: &str = "LIFE_SEED";

/// Runtime configuration for the shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Pixels per cell side (logical pixels)
    pub cell_size: u32,
    /// Cells sprinkled by the Randomize action
    pub random_count: usize,
    /// Fixed RNG seed, or `None` to seed from entropy
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            random_count: DEFAULT_RANDOM_COUNT,
            seed: None,
        }
    }
}

impl Config {
    /// Create config from environment variables
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    ///
    /// Unparseable values are reported and the default is kept.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_CELL_SIZE) {
            match raw.trim().parse::<u32>() {
                Ok(size) if size > 0 => config.cell_size = size,
                _ => log::warn!(
                    "Ignoring {}={:?}, expected a positive integer",
                    ENV_CELL_SIZE,
                    raw
                ),
            }
        }

        if let Some(raw) = lookup(ENV_RANDOM_COUNT) {
            match raw.trim().parse::<usize>() {
                Ok(count) => config.random_count = count,
                Err(_) => log::warn!(
                    "Ignoring {}={:?}, expected a non-negative integer",
                    ENV_RANDOM_COUNT,
                    raw
                ),
            }
        }

        if let Some(raw) = lookup(ENV_SEED) {
            match raw.trim().parse::<u64>() {
                Ok(seed) => config.seed = Some(seed),
                Err(_) => log::warn!("Ignoring {}={:?}, expected a u64", ENV_SEED, raw),
            }
        }

        config
    }
}

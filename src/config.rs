// config.rs - Generation parameters
//
// Plain record handed in by the CLI (or the WASM handle).
// Validated once, before the grid is allocated.

use thiserror::Error;

pub const DEFAULT_NUM_LEVELS: u32 = 1;
pub const DEFAULT_MAX_FEATURES: u32 = 1;
pub const DEFAULT_X_PIXELS: usize = 128;
pub const DEFAULT_Y_PIXELS: usize = 256;
pub const DEFAULT_SEED: u64 = 123_456_789;

/// Widest per-cell buffer built from a grid (u32 labels; RGB needs 3)
const MAX_BYTES_PER_CELL: usize = std::mem::size_of::<u32>();

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{name} must not be negative (got {value})")]
    Negative { name: &'static str, value: i64 },
    #[error("{name} must be at least 1 pixel")]
    ZeroDimension { name: &'static str },
    #[error("grid of {x} x {y} pixels does not fit in memory")]
    GridTooLarge { x: usize, y: usize },
    #[error("{name} = {value} is out of range")]
    OutOfRange { name: &'static str, value: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldConfig {
    /// Number of feature types; levels run 1..=num_levels
    pub num_levels: u32,
    /// Exclusive upper bound on features drawn per level
    pub max_features_per_level: u32,
    pub num_x_pixels: usize,
    pub num_y_pixels: usize,
    pub seed: u64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            num_levels: DEFAULT_NUM_LEVELS,
            max_features_per_level: DEFAULT_MAX_FEATURES,
            num_x_pixels: DEFAULT_X_PIXELS,
            num_y_pixels: DEFAULT_Y_PIXELS,
            seed: DEFAULT_SEED,
        }
    }
}

impl FieldConfig {
    /// Build from signed values as they arrive from a command line or JS.
    /// Any integer is a valid seed, see `seed_from_signed`.
    pub fn from_raw(
        num_levels: i64,
        max_features_per_level: i64,
        num_x_pixels: i64,
        num_y_pixels: i64,
        seed: i64,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            num_levels: to_count("numLevels", num_levels)?,
            max_features_per_level: to_count("maxNumFeaturesOfType", max_features_per_level)?,
            num_x_pixels: to_pixels("numXPixels", num_x_pixels)?,
            num_y_pixels: to_pixels("numYPixels", num_y_pixels)?,
            seed: seed_from_signed(seed),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_x_pixels == 0 {
            return Err(ConfigError::ZeroDimension { name: "numXPixels" });
        }
        if self.num_y_pixels == 0 {
            return Err(ConfigError::ZeroDimension { name: "numYPixels" });
        }
        match self.buffer_bytes() {
            Some(bytes) if bytes <= isize::MAX as usize => Ok(()),
            _ => Err(ConfigError::GridTooLarge {
                x: self.num_x_pixels,
                y: self.num_y_pixels,
            }),
        }
    }

    /// Size of the largest per-cell buffer, None on overflow
    fn buffer_bytes(&self) -> Option<usize> {
        self.num_x_pixels
            .checked_mul(self.num_y_pixels)?
            .checked_mul(MAX_BYTES_PER_CELL)
    }
}

/// Negative seeds use their magnitude, so -n and n give the same field.
pub fn seed_from_signed(seed: i64) -> u64 {
    seed.unsigned_abs()
}

fn to_count(name: &'static str, value: i64) -> Result<u32, ConfigError> {
    if value < 0 {
        return Err(ConfigError::Negative { name, value });
    }
    u32::try_from(value).map_err(|_| ConfigError::OutOfRange { name, value })
}

fn to_pixels(name: &'static str, value: i64) -> Result<usize, ConfigError> {
    if value < 0 {
        return Err(ConfigError::Negative { name, value });
    }
    usize::try_from(value).map_err(|_| ConfigError::OutOfRange { name, value })
}

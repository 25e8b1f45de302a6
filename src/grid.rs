// grid.rs - Label raster
//
// Shape is (num_x_pixels, num_y_pixels), indexed [[x, y]].
// 0 = background, any other value = level of the last feature stamped there.

use ndarray::Array2;

use crate::config::FieldConfig;

pub type Grid = Array2<u32>;

pub const BACKGROUND: u32 = 0;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// All-background grid sized from the config
pub fn new_grid(config: &FieldConfig) -> Grid {
    Array2::from_elem((config.num_x_pixels, config.num_y_pixels), BACKGROUND)
}

/// FNV-1a over every cell's little-endian bytes, x-major.
/// Stable across runs and platforms, used for golden comparisons.
pub fn grid_checksum(grid: &Grid) -> u64 {
    let mut hash = FNV_OFFSET;
    for &v in grid.iter() {
        for b in v.to_le_bytes() {
            hash ^= b as u64;
            hash = hash.wrapping_mul(FNV_PRIME);
        }
    }
    hash
}

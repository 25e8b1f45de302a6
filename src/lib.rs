use wasm_bindgen::prelude::*;

// ============================================================================
// FEATURE FIELD - Synthetic labelled rasters from random rotated ellipses
// ============================================================================

pub mod config;
pub mod error;
pub mod field;
pub mod geometry;
pub mod grid;
pub mod render;

pub use config::{ConfigError, FieldConfig};
pub use error::FieldError;
pub use field::{FeatureFieldGenerator, FieldRng, PlacementStats, UnitStream, generate};
pub use geometry::{FeatureError, RasterFeature};
pub use grid::{Grid, grid_checksum, new_grid};
pub use render::{ColorRaster, Rgb, false_color, to_color};

/// Finished field for JS callers: label grid plus its colour encoding.
/// Both buffers are row-major with the top row at the highest y.
#[wasm_bindgen]
pub struct FeatureField {
    w: u32,
    h: u32,

    labels: Vec<u32>,
    rgb: Vec<u8>,
    stats: PlacementStats,
    checksum: u64,
}

#[wasm_bindgen]
impl FeatureField {
    /// `seed` arrives as a BigInt; negative seeds use their magnitude
    #[wasm_bindgen(constructor)]
    pub fn new(levels: i32, max_features: i32, w: i32, h: i32, seed: i64) -> Result<FeatureField, JsError> {
        let config = FieldConfig::from_raw(levels as i64, max_features as i64, w as i64, h as i64, seed)?;
        let (grid, stats) = generate(&config)?;

        let (gw, gh) = grid.dim();
        let mut labels = Vec::with_capacity(gw * gh);
        for y in (0..gh).rev() {
            for x in 0..gw {
                labels.push(grid[[x, y]]);
            }
        }

        Ok(Self {
            w: gw as u32,
            h: gh as u32,
            labels,
            rgb: to_color(&grid).to_rgb_bytes(),
            stats,
            checksum: grid_checksum(&grid),
        })
    }

    /// Features placed at `level`, 0 for unknown levels
    pub fn feature_count(&self, level: u32) -> u32 {
        self.stats.get(level).unwrap_or(0)
    }

    /// "level L => N features" lines
    pub fn report(&self) -> String {
        self.stats.to_string()
    }

    pub fn checksum(&self) -> u64 { self.checksum }

    pub fn labels_ptr(&self) -> *const u32 { self.labels.as_ptr() }
    pub fn labels_len(&self) -> usize { self.labels.len() }
    pub fn rgb_ptr(&self) -> *const u8 { self.rgb.as_ptr() }
    pub fn rgb_len(&self) -> usize { self.rgb.len() }
    pub fn width(&self) -> u32 { self.w }
    pub fn height(&self) -> u32 { self.h }
}

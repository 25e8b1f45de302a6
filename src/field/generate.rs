// generate.rs - Stochastic multi-level placement
//
// For each level 1..=num_levels:
//   1. Draw the feature count n = floor(max * U)
//   2. Draw n features (x0, y0, a, b, angle, in that order)
//   3. Stamp each one immediately, so later features win on overlap
//
// The count draw never reaches `max` itself. Callers expecting an
// inclusive range get one fewer feature at most; kept on purpose so
// existing rasters stay reproducible.

use std::collections::BTreeMap;
use std::f64::consts::PI;
use std::fmt;

use tracing::{debug, info};

use super::rng::{FieldRng, UnitStream};
use crate::config::FieldConfig;
use crate::error::FieldError;
use crate::geometry::RasterFeature;
use crate::grid::{Grid, new_grid};

/// Semi-axes are drawn up to this fraction of the shorter grid side
const MAX_AXIS_FRACTION: f64 = 0.3;

/// Features generated per level
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlacementStats {
    counts: BTreeMap<u32, u32>,
}

impl PlacementStats {
    pub fn record(&mut self, level: u32, count: u32) {
        self.counts.insert(level, count);
    }

    pub fn get(&self, level: u32) -> Option<u32> {
        self.counts.get(&level).copied()
    }

    /// (level, count) in ascending level order
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.counts.iter().map(|(&l, &n)| (l, n))
    }

    pub fn total(&self) -> u64 {
        self.counts.values().map(|&n| n as u64).sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl fmt::Display for PlacementStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (level, n) in self.iter() {
            writeln!(f, "level {level} => {n} features")?;
        }
        Ok(())
    }
}

/// Owns the config and the draw stream for a single run
pub struct FeatureFieldGenerator<S: UnitStream = FieldRng> {
    config: FieldConfig,
    stream: S,
}

impl FeatureFieldGenerator<FieldRng> {
    pub fn new(config: FieldConfig) -> Result<Self, FieldError> {
        let stream = FieldRng::new(config.seed);
        Self::with_stream(config, stream)
    }
}

impl<S: UnitStream> FeatureFieldGenerator<S> {
    pub fn with_stream(config: FieldConfig, stream: S) -> Result<Self, FieldError> {
        config.validate()?;
        Ok(Self { config, stream })
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// One count draw; result is in [0, max - 1] (0 when max is 0)
    pub fn draw_count(&mut self) -> u32 {
        let u = self.stream.next_unit();
        (self.config.max_features_per_level as f64 * u).floor() as u32
    }

    /// Five draws: x0, y0, a, b, angle
    pub fn draw_feature(&mut self) -> Result<RasterFeature, FieldError> {
        let nx = self.config.num_x_pixels as f64;
        let ny = self.config.num_y_pixels as f64;
        let xy_min = self.config.num_x_pixels.min(self.config.num_y_pixels) as f64;

        let x0 = (nx * self.stream.next_unit()).floor();
        let y0 = (ny * self.stream.next_unit()).floor();
        let a = (MAX_AXIS_FRACTION * xy_min * self.stream.next_unit()).floor().max(1.0);
        let b = (MAX_AXIS_FRACTION * xy_min * self.stream.next_unit()).floor().max(1.0);
        let angle = 0.5 * PI * self.stream.next_unit();

        Ok(RasterFeature::new((x0, y0), (a, b), angle)?)
    }

    pub fn run(self) -> Result<(Grid, PlacementStats), FieldError> {
        self.run_with(|_, _, _| {})
    }

    /// Same as `run`, calling `on_feature(level, n, &feature)` after each stamp.
    pub fn run_with<F>(mut self, mut on_feature: F) -> Result<(Grid, PlacementStats), FieldError>
    where
        F: FnMut(u32, u32, &RasterFeature),
    {
        let mut grid = new_grid(&self.config);
        let mut stats = PlacementStats::default();

        for level in 1..=self.config.num_levels {
            let n = self.draw_count();
            stats.record(level, n);

            for _ in 0..n {
                let feature = self.draw_feature()?;
                let (x0, y0) = feature.center();
                let (a, b) = feature.semi_axes();
                debug!(level, n, x0, y0, a, b, angle = feature.angle(), "placed feature");

                feature.fill(&mut grid, level);
                on_feature(level, n, &feature);
            }
        }

        info!(
            levels = self.config.num_levels,
            features = stats.total(),
            width = self.config.num_x_pixels,
            height = self.config.num_y_pixels,
            seed = self.config.seed,
            "feature field generated"
        );
        Ok((grid, stats))
    }
}

/// Seeded end-to-end run
pub fn generate(config: &FieldConfig) -> Result<(Grid, PlacementStats), FieldError> {
    FeatureFieldGenerator::new(*config)?.run()
}

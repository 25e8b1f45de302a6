// genfeatures - Generate a synthetic labelled raster of random ellipses
//
// Pipeline:
//   1. Parse arguments into a FieldConfig (validated before allocation)
//   2. Run the seeded placement loop
//   3. Report per-level feature counts
//   4. Optionally write the false-colour image and/or preview it
//
// Usage: cargo run --bin genfeatures -- -f 3 -F 10 -x 128 -y 256 -s 42 -o field.png

mod export;
mod logging;
mod preview;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use feature_field::{FeatureFieldGenerator, FieldConfig, config, grid_checksum, to_color};

/// Generate random features
///
/// Each level (feature type) gets floor(F * U) rotated ellipses stamped onto
/// the grid with the level as label; later features overwrite earlier ones.
#[derive(Parser, Debug)]
#[command(name = "genfeatures", version, about = "Generate random features", long_about = None)]
struct Args {
    /// Number of feature types
    #[arg(short = 'f', long = "levels", default_value_t = config::DEFAULT_NUM_LEVELS as i64, allow_negative_numbers = true)]
    num_levels: i64,

    /// Max number of features of a certain type (exclusive)
    #[arg(short = 'F', long = "max-features", default_value_t = config::DEFAULT_MAX_FEATURES as i64, allow_negative_numbers = true)]
    max_features: i64,

    /// Number of x pixels
    #[arg(short = 'x', long = "x-pixels", default_value_t = config::DEFAULT_X_PIXELS as i64, allow_negative_numbers = true)]
    x_pixels: i64,

    /// Number of y pixels
    #[arg(short = 'y', long = "y-pixels", default_value_t = config::DEFAULT_Y_PIXELS as i64, allow_negative_numbers = true)]
    y_pixels: i64,

    /// Random seed (negative values use their magnitude)
    #[arg(short = 's', long, default_value_t = config::DEFAULT_SEED as i64, allow_negative_numbers = true)]
    seed: i64,

    /// Show the colour raster in the terminal
    #[arg(short = 'p', long)]
    plot: bool,

    /// Log every placed feature
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Write the false-colour image here (format from extension)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::setup_logging(args.verbose)?;

    let config = FieldConfig::from_raw(
        args.num_levels,
        args.max_features,
        args.x_pixels,
        args.y_pixels,
        args.seed,
    )?;

    let generator = FeatureFieldGenerator::new(config)?;
    let (grid, stats) = generator.run()?;

    print!("{stats}");
    info!(checksum = %format!("{:#018x}", grid_checksum(&grid)), "grid checksum");

    if args.output.is_none() && !args.plot {
        return Ok(());
    }

    let raster = to_color(&grid);

    if let Some(path) = &args.output {
        export::write_image(path, &raster)?;
        info!(path = %path.display(), "wrote image");
    }

    if args.plot {
        preview::show(&raster).context("failed to draw preview")?;
    }

    Ok(())
}

// export.rs - Write the colour raster to disk
//
// Format follows the file extension (png, bmp, tiff, ...).

use anyhow::{Context, Result};
use image::RgbImage;
use std::path::Path;

use feature_field::ColorRaster;

pub fn to_image(raster: &ColorRaster) -> Result<RgbImage> {
    let (w, h) = (raster.width() as u32, raster.height() as u32);
    RgbImage::from_raw(w, h, raster.to_rgb_bytes())
        .with_context(|| format!("colour buffer does not match {w}x{h}"))
}

pub fn write_image(path: &Path, raster: &ColorRaster) -> Result<()> {
    let img = to_image(raster)?;
    img.save(path)
        .with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use feature_field::{Grid, to_color};
    use ndarray::Array2;

    #[test]
    fn image_has_grid_extent_and_y_up() {
        let mut grid: Grid = Array2::zeros((3, 2));
        grid[[2, 1]] = 4;
        let img = to_image(&to_color(&grid)).unwrap();

        assert_eq!(img.dimensions(), (3, 2));
        // (x = 2, y = 1) lands in the top image row
        assert_eq!(img.get_pixel(2, 0).0, [0, 255, 0]);
        assert_eq!(img.get_pixel(2, 1).0, [0, 0, 255]);
    }
}

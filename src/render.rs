// render.rs - False-colour encoding of a label grid
//
// Labels are normalised to xx in [0, 1] over the grid's own min..max and
// pushed through a piecewise-linear transfer:
//   xx = 0.0  -> blue
//   xx = 0.5  -> red
//   xx = 1.0  -> green
// A flat grid (max == min) renders black.

use ndarray::Array2;

use crate::grid::Grid;

pub type Rgb = [u8; 3];

pub const BLACK: Rgb = [0, 0, 0];

/// Colour raster, same shape and [[x, y]] indexing as the Grid it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorRaster {
    cells: Array2<Rgb>,
}

impl ColorRaster {
    pub fn width(&self) -> usize { self.cells.dim().0 }
    pub fn height(&self) -> usize { self.cells.dim().1 }

    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        self.cells.get([x, y]).copied()
    }

    pub fn cells(&self) -> &Array2<Rgb> {
        &self.cells
    }

    /// Packed RGB, one image row per y, top row = highest y.
    /// Matches a plot with the origin in the lower-left corner.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let (w, h) = self.cells.dim();
        let mut out = Vec::with_capacity(w * h * 3);
        for y in (0..h).rev() {
            for x in 0..w {
                out.extend_from_slice(&self.cells[[x, y]]);
            }
        }
        out
    }
}

/// Transfer function for a normalised value; input is clamped to [0, 1]
#[inline]
pub fn false_color(xx: f64) -> Rgb {
    let xx = xx.clamp(0.0, 1.0);
    let t = 2.0 * xx - 1.0;

    let red = 1.0 - t.abs();
    let green = t.max(0.0);
    let blue = (-t).max(0.0);

    [to_byte(red), to_byte(green), to_byte(blue)]
}

#[inline]
fn to_byte(channel: f64) -> u8 {
    (255.0 * channel).round().clamp(0.0, 255.0) as u8
}

/// Grid -> colour raster, pure
pub fn to_color(grid: &Grid) -> ColorRaster {
    let range = grid.iter().fold(None, |acc: Option<(u32, u32)>, &v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    });

    let cells = match range {
        Some((lo, hi)) if hi > lo => {
            let span = (hi - lo) as f64;
            grid.map(|&v| false_color((v - lo) as f64 / span))
        }
        _ => grid.map(|_| BLACK),
    };

    ColorRaster { cells }
}

// ellipse.rs - Rotated ellipse rasterization
//
// A cell (i, j) is interior when, after moving the centre to the origin,
// rotating by -angle and scaling by the semi-axes, it lies strictly inside
// the unit circle. Pixel coordinates are the integer cell indices.

use std::ops::Range;

use thiserror::Error;

use crate::grid::Grid;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FeatureError {
    #[error("semi-axes must be finite and positive (got a = {a}, b = {b})")]
    InvalidSemiAxes { a: f64, b: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterFeature {
    x0: f64,
    y0: f64,
    a: f64,
    b: f64,
    angle: f64,
    cos: f64,
    sin: f64,
}

impl RasterFeature {
    /// `angle` in radians, rotating the (a, b) axes away from the grid axes.
    pub fn new(center: (f64, f64), semi_axes: (f64, f64), angle: f64) -> Result<Self, FeatureError> {
        let (a, b) = semi_axes;
        if !(a.is_finite() && b.is_finite() && a > 0.0 && b > 0.0) {
            return Err(FeatureError::InvalidSemiAxes { a, b });
        }
        Ok(Self {
            x0: center.0,
            y0: center.1,
            a,
            b,
            angle,
            cos: angle.cos(),
            sin: angle.sin(),
        })
    }

    pub fn center(&self) -> (f64, f64) { (self.x0, self.y0) }
    pub fn semi_axes(&self) -> (f64, f64) { (self.a, self.b) }
    pub fn angle(&self) -> f64 { self.angle }

    /// Strict interior test, points on the boundary are outside
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let dx = x - self.x0;
        let dy = y - self.y0;

        // Rotate into the feature frame
        let u = dx * self.cos + dy * self.sin;
        let v = -dx * self.sin + dy * self.cos;

        // Normalise to the unit circle
        let u = u / self.a;
        let v = v / self.b;

        u * u + v * v < 1.0
    }

    /// Cell ranges that can contain interior cells, clipped to an nx x ny grid.
    /// Padded by one cell on each side; callers still run `contains` per cell.
    pub fn bounding_box(&self, nx: usize, ny: usize) -> Option<(Range<usize>, Range<usize>)> {
        let (ac, as_) = (self.a * self.cos, self.a * self.sin);
        let (bc, bs) = (self.b * self.cos, self.b * self.sin);
        let ex = (ac * ac + bs * bs).sqrt();
        let ey = (as_ * as_ + bc * bc).sqrt();

        let xs = clip(self.x0 - ex, self.x0 + ex, nx)?;
        let ys = clip(self.y0 - ey, self.y0 + ey, ny)?;
        Some((xs, ys))
    }

    /// Overwrite every interior cell with `value`; exterior cells keep their label.
    pub fn fill(&self, grid: &mut Grid, value: u32) {
        let (nx, ny) = grid.dim();
        let Some((xs, ys)) = self.bounding_box(nx, ny) else { return; };

        for i in xs {
            for j in ys.clone() {
                if self.contains(i as f64, j as f64) {
                    grid[[i, j]] = value;
                }
            }
        }
    }
}

fn clip(lo: f64, hi: f64, n: usize) -> Option<Range<usize>> {
    let lo = lo.floor() - 1.0;
    let hi = hi.ceil() + 1.0;
    if !(lo.is_finite() && hi.is_finite()) || hi < 0.0 || lo >= n as f64 {
        return None;
    }
    let start = lo.max(0.0) as usize;
    let end = (hi as usize).saturating_add(1).min(n);
    (start < end).then_some(start..end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;
    use std::f64::consts::FRAC_PI_2;

    fn circle(x0: f64, y0: f64, r: f64) -> RasterFeature {
        RasterFeature::new((x0, y0), (r, r), 0.0).unwrap()
    }

    /// Reference fill without the bounding-box shortcut
    fn fill_everywhere(f: &RasterFeature, grid: &mut Grid, value: u32) {
        let (nx, ny) = grid.dim();
        for i in 0..nx {
            for j in 0..ny {
                if f.contains(i as f64, j as f64) {
                    grid[[i, j]] = value;
                }
            }
        }
    }

    #[test]
    fn boundary_is_exterior() {
        let f = circle(5.0, 5.0, 2.0);
        assert!(f.contains(5.0, 5.0));
        assert!(f.contains(6.0, 5.0));
        assert!(!f.contains(7.0, 5.0));
        assert!(!f.contains(7.1, 5.0));
        assert!(!f.contains(5.0, 3.0));
    }

    #[test]
    fn fill_marks_interior_only() {
        let mut grid: Grid = Array2::zeros((11, 11));
        circle(5.0, 5.0, 2.0).fill(&mut grid, 3);

        assert_eq!(grid[[5, 5]], 3);
        assert_eq!(grid[[6, 6]], 3);
        assert_eq!(grid[[7, 5]], 0);
        assert_eq!(grid[[3, 5]], 0);
        // r = 2: centre, 4 axis neighbours, 4 diagonals
        assert_eq!(grid.iter().filter(|&&v| v == 3).count(), 9);
    }

    #[test]
    fn rotation_swaps_axes_at_right_angle() {
        let wide = RasterFeature::new((10.0, 10.0), (6.0, 2.0), 0.0).unwrap();
        assert!(wide.contains(15.0, 10.0));
        assert!(!wide.contains(10.0, 13.0));

        let tall = RasterFeature::new((10.0, 10.0), (6.0, 2.0), FRAC_PI_2).unwrap();
        assert!(!tall.contains(15.0, 10.0));
        assert!(tall.contains(10.0, 15.0));
    }

    #[test]
    fn fill_overwrites_regardless_of_label() {
        let mut grid: Grid = Array2::zeros((12, 12));
        circle(6.0, 6.0, 5.0).fill(&mut grid, 7);
        circle(6.0, 6.0, 2.0).fill(&mut grid, 1);

        assert_eq!(grid[[6, 6]], 1);
        assert_eq!(grid[[6, 9]], 7);
        assert_eq!(grid[[0, 0]], 0);
    }

    #[test]
    fn center_outside_grid_gives_partial_or_nothing() {
        let mut grid: Grid = Array2::zeros((8, 8));
        circle(-1.0, 4.0, 3.0).fill(&mut grid, 2);
        assert_eq!(grid[[0, 4]], 2);
        assert_eq!(grid[[1, 4]], 2);
        assert_eq!(grid[[2, 4]], 0);

        let mut grid: Grid = Array2::zeros((8, 8));
        circle(100.0, 100.0, 3.0).fill(&mut grid, 2);
        assert!(grid.iter().all(|&v| v == 0));
        assert!(circle(100.0, 100.0, 3.0).bounding_box(8, 8).is_none());
    }

    #[test]
    fn bounding_box_matches_full_scan() {
        let features = [
            RasterFeature::new((3.0, 17.0), (9.0, 2.0), 0.3).unwrap(),
            RasterFeature::new((20.0, 0.0), (1.0, 14.0), 1.2).unwrap(),
            RasterFeature::new((12.0, 12.0), (7.0, 7.0), 0.0).unwrap(),
            RasterFeature::new((0.0, 0.0), (1.0, 1.0), 0.7).unwrap(),
            RasterFeature::new((23.0, 5.0), (5.0, 3.0), FRAC_PI_2).unwrap(),
        ];
        for (k, f) in features.iter().enumerate() {
            let mut fast: Grid = Array2::zeros((24, 20));
            let mut slow: Grid = Array2::zeros((24, 20));
            f.fill(&mut fast, k as u32 + 1);
            fill_everywhere(f, &mut slow, k as u32 + 1);
            assert_eq!(fast, slow, "feature {k}");
        }
    }

    #[test]
    fn degenerate_axes_are_rejected() {
        assert!(RasterFeature::new((0.0, 0.0), (0.0, 1.0), 0.0).is_err());
        assert!(RasterFeature::new((0.0, 0.0), (1.0, -2.0), 0.0).is_err());
        assert!(RasterFeature::new((0.0, 0.0), (f64::NAN, 1.0), 0.0).is_err());
    }
}

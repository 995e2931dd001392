use nalgebra::vector;

use crate::error::SolveError;
use crate::grid::PlateGrid;

/// One edge of the plate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Bottom,
    Top,
    Left,
    Right,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Side::Bottom => "bottom",
            Side::Top => "top",
            Side::Left => "left",
            Side::Right => "right",
        };
        write!(f, "{name}")
    }
}

/// Fixed edge temperatures in kelvin, one per plate side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundarySpec {
    bottom: f64,
    top: f64,
    left: f64,
    right: f64,
}

impl BoundarySpec {
    /// Creates a boundary with validated temperatures.
    ///
    /// # Errors
    ///
    /// Returns an error for the first edge whose temperature is not a
    /// positive finite kelvin value.
    pub fn new(
        bottom: f64,
        top: f64,
        left: f64,
        right: f64,
    ) -> Result<Self, SolveError> {
        for (side, value) in [
            (Side::Bottom, bottom),
            (Side::Top, top),
            (Side::Left, left),
            (Side::Right, right),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SolveError::InvalidTemperature { side, value });
            }
        }
        Ok(BoundarySpec {
            bottom,
            top,
            left,
            right,
        })
    }

    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    /// Arithmetic mean of the four edges, the interior seed value.
    pub fn mean(&self) -> f64 {
        0.25 * (self.bottom + self.top + self.left + self.right)
    }

    /// Overwrites the padding ring of `grid` with the edge
    /// temperatures. Top and bottom rows first, then the side columns,
    /// so the four corner cells carry the left/right values. Corners
    /// never feed a stencil application.
    pub fn stamp(&self, grid: &mut PlateGrid) {
        let rows = grid.shape().padded_rows() as i32;
        let cols = grid.shape().padded_cols() as i32;
        for col in 0..cols {
            grid.set_coord(&vector![0, col], self.top);
            grid.set_coord(&vector![rows - 1, col], self.bottom);
        }
        for row in 0..rows {
            grid.set_coord(&vector![row, 0], self.left);
            grid.set_coord(&vector![row, cols - 1], self.right);
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::shape::GridShape;
    use float_cmp::assert_approx_eq;

    #[test]
    fn validation_test() {
        assert_eq!(
            BoundarySpec::new(0.0, 400.0, 250.0, 350.0).unwrap_err(),
            SolveError::InvalidTemperature {
                side: Side::Bottom,
                value: 0.0
            }
        );
        assert_eq!(
            BoundarySpec::new(300.0, -1.0, 250.0, 350.0).unwrap_err(),
            SolveError::InvalidTemperature {
                side: Side::Top,
                value: -1.0
            }
        );
        assert!(matches!(
            BoundarySpec::new(300.0, 400.0, f64::NAN, 350.0).unwrap_err(),
            SolveError::InvalidTemperature {
                side: Side::Left,
                ..
            }
        ));
        assert!(matches!(
            BoundarySpec::new(300.0, 400.0, 250.0, f64::INFINITY).unwrap_err(),
            SolveError::InvalidTemperature {
                side: Side::Right,
                ..
            }
        ));
        assert!(BoundarySpec::new(300.0, 400.0, 250.0, 350.0).is_ok());
    }

    #[test]
    fn mean_test() {
        let boundary = BoundarySpec::new(100.0, 200.0, 300.0, 400.0).unwrap();
        assert_approx_eq!(f64, boundary.mean(), 250.0);
    }

    #[test]
    fn stamp_test() {
        use nalgebra::vector;

        let shape = GridShape::new(3, 2).unwrap();
        let boundary = BoundarySpec::new(100.0, 200.0, 300.0, 400.0).unwrap();
        let mut grid = PlateGrid::seeded(shape, 1.0, 1);
        boundary.stamp(&mut grid);

        for col in 1..=3 {
            assert_approx_eq!(f64, grid.view(&vector![0, col]), 200.0);
            assert_approx_eq!(f64, grid.view(&vector![3, col]), 100.0);
        }
        for row in 1..=2 {
            assert_approx_eq!(f64, grid.view(&vector![row, 0]), 300.0);
            assert_approx_eq!(f64, grid.view(&vector![row, 4]), 400.0);
        }

        // Side columns own the corners.
        assert_approx_eq!(f64, grid.view(&vector![0, 0]), 300.0);
        assert_approx_eq!(f64, grid.view(&vector![3, 0]), 300.0);
        assert_approx_eq!(f64, grid.view(&vector![0, 4]), 400.0);
        assert_approx_eq!(f64, grid.view(&vector![3, 4]), 400.0);

        // Interior cells keep the seed.
        for row in 1..=2 {
            for col in 1..=3 {
                assert_approx_eq!(f64, grid.view(&vector![row, col]), 1.0);
            }
        }
    }
}

use nalgebra::vector;

use crate::grid::PlateGrid;

/// Converged plate temperatures in caller coordinates: `value(x, y)`
/// with `x` in `0..nx` running left to right and `y` in `0..ny`
/// running bottom to top, origin at the bottom-left interior cell.
#[derive(Debug, Clone, PartialEq)]
pub struct PlateTemperatures {
    nx: usize,
    ny: usize,
    values: Vec<f64>,
}

impl PlateTemperatures {
    pub fn nx(&self) -> usize {
        self.nx
    }

    pub fn ny(&self) -> usize {
        self.ny
    }

    pub fn value(&self, x: usize, y: usize) -> f64 {
        debug_assert!(x < self.nx && y < self.ny);
        self.values[x * self.ny + y]
    }

    /// Backing storage, x-major.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Rows from the top of the plate down, `y = ny - 1` first. The
    /// CSV and image writers emit this order.
    pub fn rows_top_down(&self) -> impl Iterator<Item = Vec<f64>> + '_ {
        (0..self.ny)
            .rev()
            .map(move |y| (0..self.nx).map(|x| self.value(x, y)).collect())
    }
}

/// Strips the padding ring and reorients from grid space, row 0 at
/// the top, into caller space, origin at the bottom left. Caller
/// `(x, y)` reads grid row `ny - y`, column `x + 1`. All orientation
/// knowledge lives here; everything upstream thinks in rows and
/// columns.
pub fn from_grid(grid: &PlateGrid) -> PlateTemperatures {
    profiling::scope!("extract::from_grid");
    let nx = grid.shape().nx();
    let ny = grid.shape().ny();
    let mut values = Vec::with_capacity(nx * ny);
    for x in 0..nx {
        for y in 0..ny {
            let row = (ny - y) as i32;
            let col = (x + 1) as i32;
            values.push(grid.view(&vector![row, col]));
        }
    }
    PlateTemperatures { nx, ny, values }
}

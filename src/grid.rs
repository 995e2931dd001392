use crate::par_slice;
use crate::shape::GridShape;
use crate::util::{coord_to_linear, Coord};

/// A padded temperature buffer: `(ny + 2) x (nx + 2)` cells, row-major
/// with the column index fastest. Row 0 holds the top boundary, row
/// `ny + 1` the bottom, column 0 the left, column `nx + 1` the right.
/// Sweeps write interior cells only; the padding ring stays fixed
/// after stamping.
#[derive(Debug, Clone, PartialEq)]
pub struct PlateGrid {
    shape: GridShape,
    buffer: Vec<f64>,
}

impl PlateGrid {
    /// Allocates a grid with every cell, padding included, set to
    /// `value`. `chunk_size` is in rows per fill task.
    pub fn seeded(shape: GridShape, value: f64, chunk_size: usize) -> Self {
        let mut buffer = vec![0.0; shape.buffer_size()];
        par_slice::fill(
            &mut buffer,
            value,
            chunk_size.max(1) * shape.padded_cols(),
        );
        PlateGrid { shape, buffer }
    }

    pub fn shape(&self) -> &GridShape {
        &self.shape
    }

    pub fn buffer(&self) -> &[f64] {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut [f64] {
        &mut self.buffer
    }

    pub fn view(&self, coord: &Coord) -> f64 {
        debug_assert!(self.shape.contains(coord), "out of bounds: {coord:?}");
        self.buffer[coord_to_linear(coord, &self.shape.padded_bounds())]
    }

    pub fn set_coord(&mut self, coord: &Coord, value: f64) {
        debug_assert!(self.shape.contains(coord), "out of bounds: {coord:?}");
        let linear_index = coord_to_linear(coord, &self.shape.padded_bounds());
        self.buffer[linear_index] = value;
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;
    use nalgebra::vector;

    #[test]
    fn seeded_test() {
        let shape = GridShape::new(7, 5).unwrap();
        let grid = PlateGrid::seeded(shape, 250.0, 1);
        assert_eq!(grid.buffer().len(), shape.buffer_size());
        for v in grid.buffer() {
            assert_approx_eq!(f64, *v, 250.0);
        }
    }

    #[test]
    fn view_set_test() {
        let shape = GridShape::new(4, 4).unwrap();
        let mut grid = PlateGrid::seeded(shape, 0.0, 1);
        grid.set_coord(&vector![2, 3], 99.0);
        assert_approx_eq!(f64, grid.view(&vector![2, 3]), 99.0);
        assert_approx_eq!(f64, grid.view(&vector![3, 2]), 0.0);
        assert_approx_eq!(f64, grid.view(&vector![2, 2]), 0.0);
    }

    #[test]
    fn swap_test() {
        let shape = GridShape::new(3, 3).unwrap();
        let mut a = PlateGrid::seeded(shape, 1.0, 1);
        let mut b = PlateGrid::seeded(shape, 2.0, 1);
        std::mem::swap(&mut a, &mut b);
        assert_approx_eq!(f64, a.view(&vector![1, 1]), 2.0);
        assert_approx_eq!(f64, b.view(&vector![1, 1]), 1.0);
    }
}

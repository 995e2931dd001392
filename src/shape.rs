use nalgebra::vector;

use crate::error::SolveError;
use crate::util::Coord;

/// Interior divisions of the plate: `nx` columns across, `ny` rows up.
///
/// The working buffers carry one cell of boundary padding on each
/// side, so a shape maps to a `(ny + 2) x (nx + 2)` row-major buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    nx: usize,
    ny: usize,
}

impl GridShape {
    /// Creates a shape with validated division counts.
    ///
    /// # Errors
    ///
    /// Returns an error if either axis has zero divisions.
    pub fn new(nx: usize, ny: usize) -> Result<Self, SolveError> {
        if nx == 0 || ny == 0 {
            return Err(SolveError::InvalidGridShape { nx, ny });
        }
        Ok(GridShape { nx, ny })
    }

    pub fn nx(&self) -> usize {
        self.nx
    }

    pub fn ny(&self) -> usize {
        self.ny
    }

    pub fn padded_rows(&self) -> usize {
        self.ny + 2
    }

    pub fn padded_cols(&self) -> usize {
        self.nx + 2
    }

    /// Exclusive bounds of the padded buffer, `[rows, columns]`.
    pub fn padded_bounds(&self) -> Coord {
        vector![self.padded_rows() as i32, self.padded_cols() as i32]
    }

    /// Cell count of the padded buffer.
    pub fn buffer_size(&self) -> usize {
        self.padded_rows() * self.padded_cols()
    }

    pub fn contains(&self, coord: &Coord) -> bool {
        coord[0] >= 0
            && coord[1] >= 0
            && coord[0] < self.padded_rows() as i32
            && coord[1] < self.padded_cols() as i32
    }

    /// True for cells sweeps may write, false for the padding ring.
    pub fn is_interior(&self, coord: &Coord) -> bool {
        coord[0] >= 1
            && coord[1] >= 1
            && coord[0] <= self.ny as i32
            && coord[1] <= self.nx as i32
    }
}

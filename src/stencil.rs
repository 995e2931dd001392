use crate::util::{Coord, Values};

/// Recovers one weight per neighbor from a linear operation by
/// probing it with 1.0 in that slot and 0.0 everywhere else.
pub fn extract_weights<
    const NEIGHBORHOOD_SIZE: usize,
    F: Fn(&[f64; NEIGHBORHOOD_SIZE]) -> f64,
>(
    f: F,
) -> Values<NEIGHBORHOOD_SIZE> {
    let mut weights = Values::zeros();
    let mut arg_buffer = [0.0; NEIGHBORHOOD_SIZE];
    for n in 0..NEIGHBORHOOD_SIZE {
        arg_buffer[n] = 1.0;
        weights[n] = f(&arg_buffer);
        arg_buffer[n] = 0.0;
    }
    weights
}

/// A linear stencil: neighbor offsets in `[row, column]` grid space
/// and one weight per neighbor.
pub struct Stencil<const NEIGHBORHOOD_SIZE: usize> {
    weights: Values<NEIGHBORHOOD_SIZE>,
    offsets: [Coord; NEIGHBORHOOD_SIZE],
}

impl<const NEIGHBORHOOD_SIZE: usize> Stencil<NEIGHBORHOOD_SIZE> {
    pub fn new<F: Fn(&[f64; NEIGHBORHOOD_SIZE]) -> f64>(
        offsets: [[i32; 2]; NEIGHBORHOOD_SIZE],
        operation: F,
    ) -> Self {
        let weights = extract_weights(operation);
        Stencil {
            offsets: std::array::from_fn(|i| {
                Coord::from_column_slice(&offsets[i])
            }),
            weights,
        }
    }

    pub fn weights(&self) -> &Values<NEIGHBORHOOD_SIZE> {
        &self.weights
    }

    pub fn offsets(&self) -> &[Coord; NEIGHBORHOOD_SIZE] {
        &self.offsets
    }

    /// Offsets translated to linear-index deltas for a row-major
    /// buffer with the given exclusive bounds.
    pub fn linear_offsets(
        &self,
        exclusive_bounds: &Coord,
    ) -> [i32; NEIGHBORHOOD_SIZE] {
        std::array::from_fn(|i| {
            self.offsets[i][0] * exclusive_bounds[1] + self.offsets[i][1]
        })
    }

    pub fn apply(&self, args: &Values<NEIGHBORHOOD_SIZE>) -> f64 {
        self.weights.component_mul(args).sum()
    }
}

/// The fixed-point update for the steady-state heat equation: setting
/// the discrete Laplacian of a cell to zero and solving for the cell
/// leaves the unweighted mean of its four axis neighbors. The center
/// weight vanishes, so the center is not part of the neighborhood.
pub fn laplace_2d() -> Stencil<4> {
    Stencil::new([[0, -1], [0, 1], [-1, 0], [1, 0]], |args: &[f64; 4]| {
        0.25 * (args[0] + args[1] + args[2] + args[3])
    })
}

//! Interior seeding.
//!
//! The solver seeds with the boundary mean. The random fill exists to
//! check that the settled field does not depend on the starting guess,
//! and for experiments that want a rough start.

use rand::prelude::*;
use rayon::prelude::*;

use crate::grid::PlateGrid;

/// Fills the interior cells with uniform random temperatures from
/// `[low, high)`, leaving the padding ring alone. `chunk_size` is in
/// rows per task.
pub fn random_interior(
    grid: &mut PlateGrid,
    low: f64,
    high: f64,
    chunk_size: usize,
) {
    debug_assert!(low > 0.0 && low < high);
    let cols = grid.shape().padded_cols();
    let nx = grid.shape().nx();
    let ny = grid.shape().ny();
    let rows_per_chunk = chunk_size.max(1);

    let interior = &mut grid.buffer_mut()[cols..(ny + 1) * cols];
    interior
        .par_chunks_mut(rows_per_chunk * cols)
        .for_each(|chunk| {
            let mut rng = rand::thread_rng();
            for row in chunk.chunks_mut(cols) {
                for value in &mut row[1..=nx] {
                    *value = rng.gen_range(low..high);
                }
            }
        });
}

use rayon::prelude::*;

use crate::grid::PlateGrid;
use crate::stencil::Stencil;
use crate::util::Values;

/// Fractional change of one cell between consecutive buffers.
/// Division by zero and non-finite arithmetic both surface as
/// non-finite results, which frac_max keeps.
fn relative_change(previous: f64, next: f64) -> f64 {
    (next - previous).abs() / previous.abs()
}

/// Maximum that lets non-finite values through. `f64::max` drops NaN,
/// which would hide a poisoned cell.
fn frac_max(a: f64, b: f64) -> f64 {
    if !a.is_finite() {
        a
    } else if !b.is_finite() {
        b
    } else {
        a.max(b)
    }
}

/// Recomputes the interior cells of one padded row. `row` is the full
/// padded row holding `row_base` in the source buffer; its boundary
/// columns are left alone.
fn sweep_row(
    stencil: &Stencil<4>,
    prev_buffer: &[f64],
    row: &mut [f64],
    row_base: usize,
    nx: usize,
    linear_offsets: &[i32; 4],
) -> f64 {
    let mut row_frac = 0.0;
    for col in 1..=nx {
        let linear_index = row_base + col;
        let mut args = Values::zeros();
        for (n, offset) in linear_offsets.iter().enumerate() {
            args[n] = prev_buffer[(linear_index as i32 + offset) as usize];
        }
        let next = stencil.apply(&args);
        row_frac = frac_max(
            row_frac,
            relative_change(prev_buffer[linear_index], next),
        );
        row[col] = next;
    }
    row_frac
}

/// One full sweep on a single thread: every interior cell of `curr`
/// becomes the stencil result over its neighbors in `prev`. Returns
/// the largest fractional change of any interior cell; non-finite
/// values poison the maximum.
pub fn apply(stencil: &Stencil<4>, prev: &PlateGrid, curr: &mut PlateGrid) -> f64 {
    profiling::scope!("sweep::apply");
    debug_assert_eq!(prev.shape(), curr.shape());
    let bounds = prev.shape().padded_bounds();
    let linear_offsets = stencil.linear_offsets(&bounds);
    let cols = prev.shape().padded_cols();
    let nx = prev.shape().nx();
    let ny = prev.shape().ny();
    let prev_buffer = prev.buffer();

    let mut frac = 0.0;
    let interior = &mut curr.buffer_mut()[cols..(ny + 1) * cols];
    for (r, row) in interior.chunks_mut(cols).enumerate() {
        let row_base = (1 + r) * cols;
        frac = frac_max(
            frac,
            sweep_row(stencil, prev_buffer, row, row_base, nx, &linear_offsets),
        );
    }
    frac
}

/// Parallel sweep over interior-row chunks. Reads only `prev`, writes
/// disjoint rows of `curr`, and reduces the per-chunk maxima after the
/// join. `chunk_size` is in interior rows per task. Chunking changes
/// nothing about the per-cell arithmetic, so the output buffer matches
/// the serial sweep bit for bit.
pub fn par_apply(
    stencil: &Stencil<4>,
    prev: &PlateGrid,
    curr: &mut PlateGrid,
    chunk_size: usize,
) -> f64 {
    profiling::scope!("sweep::par_apply");
    debug_assert_eq!(prev.shape(), curr.shape());
    let bounds = prev.shape().padded_bounds();
    let linear_offsets = stencil.linear_offsets(&bounds);
    let cols = prev.shape().padded_cols();
    let nx = prev.shape().nx();
    let ny = prev.shape().ny();
    let rows_per_chunk = chunk_size.max(1);
    let prev_buffer = prev.buffer();

    let interior = &mut curr.buffer_mut()[cols..(ny + 1) * cols];
    interior
        .par_chunks_mut(rows_per_chunk * cols)
        .enumerate()
        .map(|(c, chunk)| {
            profiling::scope!("sweep::par_apply: chunk");
            let mut chunk_frac = 0.0;
            for (r, row) in chunk.chunks_mut(cols).enumerate() {
                let row_base = (1 + c * rows_per_chunk + r) * cols;
                chunk_frac = frac_max(
                    chunk_frac,
                    sweep_row(
                        stencil,
                        prev_buffer,
                        row,
                        row_base,
                        nx,
                        &linear_offsets,
                    ),
                );
            }
            chunk_frac
        })
        .reduce(|| 0.0, frac_max)
}

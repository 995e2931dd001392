use crate::error::SolveError;
use crate::grid::PlateGrid;
use crate::stencil;
use crate::sweep;

/// A converged relaxation: the settled grid plus how it got there.
#[derive(Debug)]
pub struct Relaxed {
    pub grid: PlateGrid,
    pub sweeps: usize,
    pub frac: f64,
}

/// Runs sweeps until the largest fractional change of any interior
/// cell comes within `tolerance`.
///
/// Both grids must hold the same stamped starting state; each sweep
/// reads one and writes the other, then the buffers swap roles. The
/// change starts above any finite tolerance, so at least one sweep
/// always runs and convergence is measured, never assumed. With
/// `max_sweeps: None` the loop runs as long as it takes; a cap turns
/// running out of sweeps into `NotConverged`, and a sweep producing a
/// non-finite fractional change into `NumericalInstability`.
pub fn relax(
    mut prev: PlateGrid,
    mut curr: PlateGrid,
    tolerance: f64,
    max_sweeps: Option<usize>,
    chunk_size: usize,
) -> Result<Relaxed, SolveError> {
    profiling::scope!("relax");
    debug_assert_eq!(prev.shape(), curr.shape());
    let stencil = stencil::laplace_2d();
    let mut frac = f64::INFINITY;
    let mut sweeps = 0;

    while frac > tolerance {
        if max_sweeps.is_some_and(|cap| sweeps >= cap) {
            return Err(SolveError::NotConverged { sweeps, frac });
        }
        frac = sweep::par_apply(&stencil, &prev, &mut curr, chunk_size);
        sweeps += 1;
        if !frac.is_finite() {
            return Err(SolveError::NumericalInstability { sweep: sweeps });
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    Ok(Relaxed {
        grid: prev,
        sweeps,
        frac,
    })
}

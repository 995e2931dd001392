use crate::config::SolveConfig;
use crate::error::SolveError;
use crate::extract::{self, PlateTemperatures};
use crate::grid::PlateGrid;
use crate::relax;

/// A settled steady-state field plus the effort it took.
#[derive(Debug)]
pub struct Solution {
    pub temperatures: PlateTemperatures,
    pub sweeps: usize,
    /// Largest fractional change of the final sweep.
    pub max_frac_change: f64,
}

/// Solves the steady-state temperature field for `config`.
///
/// Three phases run in order: seed and stamp the padded grid pair,
/// relax until the largest fractional change comes within tolerance,
/// then strip the padding and reorient for the caller. Same config in,
/// same field out; no state survives the call.
///
/// # Errors
///
/// Returns `SolveError::InvalidTolerance` before any grid is
/// allocated, plus whatever the relaxation loop surfaces.
pub fn solve(config: &SolveConfig) -> Result<Solution, SolveError> {
    profiling::scope!("solver::solve");
    if !config.tolerance.is_finite() || config.tolerance <= 0.0 {
        return Err(SolveError::InvalidTolerance {
            value: config.tolerance,
        });
    }

    let mut prev = PlateGrid::seeded(
        config.shape,
        config.boundary.mean(),
        config.chunk_size,
    );
    config.boundary.stamp(&mut prev);
    let curr = prev.clone();

    let relaxed = relax::relax(
        prev,
        curr,
        config.tolerance,
        config.max_sweeps,
        config.chunk_size,
    )?;

    Ok(Solution {
        temperatures: extract::from_grid(&relaxed.grid),
        sweeps: relaxed.sweeps,
        max_frac_change: relaxed.frac,
    })
}

use thiserror::Error;

use crate::boundary::Side;

/// Errors that can occur when setting up or running a solve.
///
/// The `Invalid*` variants are rejected before any grid is allocated.
/// The other two surface from the relaxation loop itself.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SolveError {
    #[error("{side} boundary temperature must be positive kelvin, got {value}")]
    InvalidTemperature { side: Side, value: f64 },

    #[error("grid needs at least one division per axis, got nx={nx} ny={ny}")]
    InvalidGridShape { nx: usize, ny: usize },

    #[error("tolerance must be positive and finite, got {value}")]
    InvalidTolerance { value: f64 },

    #[error("sweep cap hit after {sweeps} sweeps, max fractional change {frac:e}")]
    NotConverged { sweeps: usize, frac: f64 },

    #[error("non-finite cell update during sweep {sweep}")]
    NumericalInstability { sweep: usize },
}

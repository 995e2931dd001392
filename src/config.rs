use crate::boundary::BoundarySpec;
use crate::shape::GridShape;

/// Interior rows handed to one rayon task when nothing else is asked
/// for.
pub const DEFAULT_CHUNK_SIZE: usize = 64;

/// Everything one steady-state solve needs.
///
/// Shape and boundary reject bad values at construction; the solver
/// checks the tolerance on entry.
#[derive(Debug, Clone, Copy)]
pub struct SolveConfig {
    pub shape: GridShape,
    pub boundary: BoundarySpec,
    /// Bound on the per-sweep maximum fractional change, applied as
    /// given and not scaled by cell count.
    pub tolerance: f64,
    /// Hard sweep cap; `None` runs until convergence.
    pub max_sweeps: Option<usize>,
    /// Interior rows per rayon task.
    pub chunk_size: usize,
}

impl SolveConfig {
    pub fn new(
        shape: GridShape,
        boundary: BoundarySpec,
        tolerance: f64,
    ) -> Self {
        SolveConfig {
            shape,
            boundary,
            tolerance,
            max_sweeps: None,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

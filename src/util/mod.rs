mod indexing;
pub use indexing::*;

/// Grid-space coordinates: `[row, column]` into a padded buffer.
/// Row 0 is the top boundary row, column 0 the left boundary column.
pub type Coord = nalgebra::Vector2<i32>;

/// Stencil weight and argument bundles.
pub type Values<const NEIGHBORHOOD_SIZE: usize> =
    nalgebra::SVector<f64, { NEIGHBORHOOD_SIZE }>;

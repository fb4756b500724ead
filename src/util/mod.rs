pub use num_traits::Zero;

mod aabb;
pub mod indexing;
pub use aabb::*;

pub use nalgebra::{matrix, vector};

pub type Coord<const GRID_DIMENSION: usize> =
    nalgebra::SVector<i32, { GRID_DIMENSION }>;

/// Inclusive per-dimension bounds, min in column 0, max in column 1.
pub type Bounds<const GRID_DIMENSION: usize> =
    nalgebra::SMatrix<i32, { GRID_DIMENSION }, 2>;

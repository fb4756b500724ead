//! Domain initialization.
//!
//! The benchmark seeds an annulus of unit concentration around the
//! domain center. Use `Grid::par_set_interior_values` for custom needs.

use crate::domain::*;
use rand::prelude::*;
use rayon::prelude::*;

pub const ANNULUS_R2_MIN: f64 = 0.05;
pub const ANNULUS_R2_MAX: f64 = 0.1;

/// Set interior points to 1.0 inside the annulus
/// `r^2 = (x_n - 0.5)^2 + (y_n - 0.5)^2 in [0.05, 0.1]`,
/// coordinates normalized to the interior extent. Halo stays zero.
pub fn annulus_ic_2d<P: Fn(f64, f64) -> f64 + Send + Sync>(
    grid: &mut Grid,
    shape: P,
) {
    let min = grid.interior().min();
    let extent = grid.interior().exclusive_bounds();
    let n_x = extent[0] as f64;
    let n_y = extent[1] as f64;
    grid.par_set_interior_values(move |coord| {
        let x_n = ((coord[0] - min[0]) as f64) / n_x;
        let y_n = ((coord[1] - min[1]) as f64) / n_y;
        let r2 = shape(x_n, y_n);
        if (ANNULUS_R2_MIN..=ANNULUS_R2_MAX).contains(&r2) {
            1.0
        } else {
            0.0
        }
    });
}

/// The intended radial annulus.
pub fn annulus(grid: &mut Grid) {
    annulus_ic_2d(grid, |x_n, y_n| {
        (x_n - 0.5).powi(2) + (y_n - 0.5).powi(2)
    });
}

/// The variant the original driver actually computes: the x-derived
/// normalized coordinate stands in for both axes, collapsing the
/// annulus to a pair of vertical bands. Kept for reproducing the
/// original's numbers.
pub fn legacy_band(grid: &mut Grid) {
    annulus_ic_2d(grid, |x_n, _| 2.0 * (x_n - 0.5).powi(2));
}

/// Chunked random fill over the whole padded buffer.
pub fn rand(grid: &mut Grid, max_val: i32, chunk_size: usize) {
    grid.par_modify_access(chunk_size).for_each(
        |mut chunk: RowChunk<'_>| {
            let mut rng = rand::thread_rng();
            chunk.coord_iter_mut().for_each(|(_, value_mut)| {
                *value_mut = (rng.gen::<i32>() % max_val) as f64;
            })
        },
    );
}

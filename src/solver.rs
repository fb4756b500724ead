//! The time stepper.
//!
//! Levels are strictly sequential; within one level every interior
//! point is independent (reads all come from the current buffer,
//! writes all go to the next), so the point loop is a rayon
//! parallel-for with a join at each level boundary.

use crate::coefficients::SUPPORTED_ORDERS;
use crate::domain::*;
use crate::error::ConfigError;
use crate::stencil::DiffusionStencil;
use rayon::prelude::*;

/// Run configuration, fixed for the whole run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepParameters {
    pub dt: f64,
    pub h_x: f64,
    pub h_y: f64,
    pub k_x: f64,
    pub k_y: f64,
    pub order: usize,
    pub domain_size: usize,
    pub padding: i32,
}

impl StepParameters {
    /// Every failure here is fatal and precedes any grid work.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !SUPPORTED_ORDERS.contains(&self.order) {
            return Err(ConfigError::UnsupportedOrder { order: self.order });
        }
        let required = self.order as i32 / 2;
        if self.padding < required {
            return Err(ConfigError::InsufficientPadding {
                padding: self.padding,
                required,
            });
        }
        if self.domain_size == 0 {
            return Err(ConfigError::EmptyDomain);
        }
        Ok(())
    }
}

/// Advance one time level: read `input`, write every interior point of
/// `output`. Writes to distinct points are disjoint, no locking.
pub fn apply_step(
    stencil: &DiffusionStencil,
    input: &Grid,
    output: &mut Grid,
) {
    debug_assert_eq!(input.aabb(), output.aabb());
    debug_assert!(input.padding() >= stencil.radius() as i32);
    output
        .par_interior_rows()
        .for_each(|mut chunk: RowChunk<'_>| {
            chunk.coord_iter_mut().for_each(|(coord, value_mut)| {
                *value_mut = stencil.apply(input, &coord);
            })
        });
}

/// Drive the inclusive level range `time_m..=time_M`, alternating
/// buffer roles by parity. `time_M < time_m` runs zero levels and
/// leaves both buffers untouched. Returns the number of levels run.
pub fn run(
    stencil: &DiffusionStencil,
    pair: &mut GridPair,
    time_m: i32,
    time_max: i32,
) -> usize {
    let mut levels = 0;
    for time in time_m..=time_max {
        profiling::scope!("diffusion_step");
        let (input, output) = pair.split(time);
        apply_step(stencil, input, output);
        levels += 1;
    }
    levels
}

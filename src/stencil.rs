//! The diffusion stencil kernel.
//!
//! One data-driven kernel covers every supported order: the per-order
//! generated bodies of the original benchmark collapse into a loop over
//! coefficient rings. The update is an explicit forward-Euler step,
//!
//! `u + dt * (k_x / h_x^2) * d2x(u) + dt * (k_y / h_y^2) * d2y(u)`
//!
//! where `d2x`/`d2y` are the central second-difference sums and the
//! ring-0 weight applies once per axis to the center cell.

use crate::coefficients::CoefficientSet;
use crate::domain::Grid;
use crate::util::*;

pub struct DiffusionStencil {
    coeffs: CoefficientSet,
    /// Precomputed `dt * k_x / h_x^2`.
    scale_x: f64,
    /// Precomputed `dt * k_y / h_y^2`.
    scale_y: f64,
}

impl DiffusionStencil {
    pub fn new(
        coeffs: CoefficientSet,
        dt: f64,
        h_x: f64,
        h_y: f64,
        k_x: f64,
        k_y: f64,
    ) -> Self {
        let r_x = 1.0 / (h_x * h_x);
        let r_y = 1.0 / (h_y * h_y);
        DiffusionStencil {
            coeffs,
            scale_x: dt * k_x * r_x,
            scale_y: dt * k_y * r_y,
        }
    }

    /// Neighbor radius along each axis, `order / 2`.
    pub fn radius(&self) -> usize {
        self.coeffs.radius()
    }

    /// Neighbor extent per dimension, negative reach in column 0,
    /// positive in column 1. The required halo width is its max entry.
    pub fn slopes(&self) -> Bounds<2> {
        let r = self.radius() as i32;
        matrix![r, r; r, r]
    }

    /// Updated value for one grid point.
    ///
    /// Pure read of `input`; the write belongs to the caller. All
    /// accessed offsets must lie inside the padded buffer, which the
    /// time stepper guarantees by validating padding against radius.
    #[inline]
    pub fn apply(&self, input: &Grid, coord: &Coord<2>) -> f64 {
        let center = input.view(coord);
        let w = self.coeffs.weights();

        // Ring 0 contributes once per axis scale.
        let mut laplacian = w[0] * (self.scale_x + self.scale_y) * center;
        for (k, w_k) in w.iter().enumerate().skip(1) {
            let k = k as i32;
            let x_pair = input.view(&vector![coord[0] - k, coord[1]])
                + input.view(&vector![coord[0] + k, coord[1]]);
            let y_pair = input.view(&vector![coord[0], coord[1] - k])
                + input.view(&vector![coord[0], coord[1] + k]);
            laplacian += w_k * (self.scale_x * x_pair + self.scale_y * y_pair);
        }

        center + laplacian
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;
    use rayon::prelude::*;

    fn unit_stencil(order: usize) -> DiffusionStencil {
        let coeffs = CoefficientSet::derive(order).unwrap();
        DiffusionStencil::new(coeffs, 1.0, 1.0, 1.0, 1.0, 1.0)
    }

    #[test]
    fn constant_field_is_fixed_point() {
        for order in [2, 8, 16] {
            let stencil = unit_stencil(order);
            let mut grid = Grid::padded(AABB::square(4), order as i32 / 2);
            grid.fill(3.0);
            for coord in grid.interior().coord_iter() {
                assert_approx_eq!(
                    f64,
                    stencil.apply(&grid, &coord),
                    3.0,
                    epsilon = 1e-12
                );
            }
        }
    }

    #[test]
    fn quadratic_field_second_derivative() {
        // u = x^2 + y^2 has laplacian 4 everywhere, which every order
        // differentiates exactly. With dt = k = h = 1 the update is
        // u + 4.
        for order in [2, 16] {
            let stencil = unit_stencil(order);
            let mut grid = Grid::padded(AABB::square(6), order as i32 / 2);
            grid.par_modify_access(64).for_each(|mut chunk| {
                chunk.coord_iter_mut().for_each(|(c, v)| {
                    *v = (c[0] * c[0] + c[1] * c[1]) as f64;
                });
            });
            for coord in grid.interior().coord_iter() {
                let u = grid.view(&coord);
                assert_approx_eq!(
                    f64,
                    stencil.apply(&grid, &coord),
                    u + 4.0,
                    epsilon = 1e-8
                );
            }
        }
    }

    #[test]
    fn anisotropic_scales() {
        // u = x^2 with h_x = 2: d2x/h_x^2 = 0.5, no y variation.
        let coeffs = CoefficientSet::derive(2).unwrap();
        let stencil = DiffusionStencil::new(coeffs, 1.0, 2.0, 1.0, 1.0, 1.0);
        let mut grid = Grid::padded(AABB::square(4), 1);
        grid.par_modify_access(64).for_each(|mut chunk| {
            chunk.coord_iter_mut().for_each(|(c, v)| {
                *v = (c[0] * c[0]) as f64;
            });
        });
        for coord in grid.interior().coord_iter() {
            let u = grid.view(&coord);
            assert_approx_eq!(
                f64,
                stencil.apply(&grid, &coord),
                u + 0.5,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn slopes_match_radius() {
        let stencil = unit_stencil(12);
        assert_eq!(stencil.slopes(), matrix![6, 6; 6, 6]);
    }
}

use float_cmp::assert_approx_eq;
use hofd::coefficients::CoefficientSet;
use hofd::domain::*;
use hofd::solver;
use hofd::stencil::DiffusionStencil;
use hofd::util::*;

fn reference_stencil(order: usize, dt: f64) -> DiffusionStencil {
    let coeffs = CoefficientSet::derive(order).unwrap();
    DiffusionStencil::new(coeffs, dt, 1.0, 1.0, 0.5, 0.5)
}

#[test]
fn single_step_point_source() {
    // N=4, order 2, dt=0.1, h=1, diffusivity 0.5: a unit point source
    // drops to 1 + 0.1 * (-1 * 2) = 0.8 and each direct neighbor
    // gains 0.1 * 0.5 = 0.05.
    let stencil = reference_stencil(2, 0.1);
    let mut pair = GridPair::new(AABB::square(4), 2);
    pair.grid_mut(0).set_coord(&vector![1, 1], 1.0);

    let levels = solver::run(&stencil, &mut pair, 0, 0);
    assert_eq!(levels, 1);

    let result = pair.current(1);
    for coord in result.interior().coord_iter() {
        let expected = match (coord[0], coord[1]) {
            (1, 1) => 0.8,
            (0, 1) | (2, 1) | (1, 0) | (1, 2) => 0.05,
            _ => 0.0,
        };
        assert_approx_eq!(f64, result.view(&coord), expected, ulps = 2);
    }
}

#[test]
fn read_buffer_untouched_by_one_level() {
    let stencil = reference_stencil(2, 0.1);
    let mut pair = GridPair::new(AABB::square(8), 1);
    pair.grid_mut(0).set_coord(&vector![3, 3], 1.0);
    let seed_state: Vec<f64> = pair.grid(0).buffer().to_vec();

    solver::run(&stencil, &mut pair, 0, 0);

    // Level 0 reads buffer 0 and writes buffer 1 only.
    assert_eq!(pair.grid(0).buffer(), &seed_state[..]);
    assert_ne!(pair.grid(1).buffer(), &seed_state[..]);
}

#[test]
fn ping_pong_matches_manual_stepping() {
    let stencil = reference_stencil(4, 0.05);
    let n_levels = 5;

    let mut pair = GridPair::new(AABB::square(12), 2);
    pair.seed(|g| {
        g.par_set_interior_values(|c| {
            if c[0] >= 4 && c[0] <= 7 && c[1] >= 4 && c[1] <= 7 {
                1.0
            } else {
                0.0
            }
        })
    });

    // Same run with explicitly managed buffers.
    let mut manual_a = Grid::padded(AABB::square(12), 2);
    let mut manual_b = Grid::padded(AABB::square(12), 2);
    manual_a.par_set_interior_values(|c| {
        if c[0] >= 4 && c[0] <= 7 && c[1] >= 4 && c[1] <= 7 {
            1.0
        } else {
            0.0
        }
    });

    solver::run(&stencil, &mut pair, 0, n_levels - 1);

    for _ in 0..n_levels {
        solver::apply_step(&stencil, &manual_a, &mut manual_b);
        std::mem::swap(&mut manual_a, &mut manual_b);
    }

    let result = pair.current(n_levels);
    for coord in result.interior().coord_iter() {
        assert_approx_eq!(
            f64,
            result.view(&coord),
            manual_a.view(&coord),
            ulps = 4
        );
    }
}

#[test]
fn mass_conserved_away_from_boundary() {
    // While the support of the field stays inside the interior, the
    // symmetric zero-sum weights redistribute without loss.
    let stencil = reference_stencil(4, 0.1);
    let mut pair = GridPair::new(AABB::square(32), 2);
    pair.seed(|g| g.set_coord(&vector![16, 16], 1.0));

    let steps = 3;
    solver::run(&stencil, &mut pair, 0, steps - 1);

    let result = pair.current(steps);
    let total: f64 = result
        .interior()
        .coord_iter()
        .map(|c| result.view(&c))
        .sum();
    assert_approx_eq!(f64, total, 1.0, epsilon = 1e-12);
}

#[test]
fn zero_dt_run_is_identity() {
    let stencil = reference_stencil(8, 0.0);
    let mut pair = GridPair::new(AABB::square(16), 4);
    pair.seed(hofd::init::annulus);
    let before: Vec<f64> = pair.grid(0).buffer().to_vec();

    solver::run(&stencil, &mut pair, 0, 20);

    assert_eq!(pair.grid(0).buffer(), &before[..]);
    assert_eq!(pair.grid(1).buffer(), &before[..]);
}

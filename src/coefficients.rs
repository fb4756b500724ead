//! Central finite-difference weights for the second derivative.
//!
//! For an even order of accuracy `2R` the symmetric stencil spans
//! offsets `-R..=R`, and by symmetry one weight per ring suffices.
//! Rather than carry per-order literal tables, we generate the weights
//! once at startup from the closed form of the moment conditions,
//!
//! `w_k = 2 (-1)^(k+1) (R!)^2 / (k^2 (R-k)! (R+k)!)` for `k >= 1`,
//!
//! with the center weight balancing the full symmetric sum to zero.
//! Every factor is an integer below 2^53, so the weights are exact to
//! rounding; the unit tests cross-check against a direct Vandermonde
//! solve of the moment system.

use crate::error::ConfigError;

pub const SUPPORTED_ORDERS: [usize; 8] = [2, 4, 6, 8, 10, 12, 14, 16];

fn factorial(n: usize) -> f64 {
    (1..=n).map(|i| i as f64).product()
}

/// Weights `w_0..w_R` for one axis of the second-derivative stencil,
/// ring `k` applying to both offsets `-k` and `+k`.
/// Immutable once derived.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientSet {
    order: usize,
    weights: Vec<f64>,
}

impl CoefficientSet {
    /// Derive the weights for an even order in {2, 4, ..., 16}.
    pub fn derive(order: usize) -> Result<Self, ConfigError> {
        if !SUPPORTED_ORDERS.contains(&order) {
            return Err(ConfigError::UnsupportedOrder { order });
        }

        let radius = order / 2;
        let r_fact_sq = factorial(radius) * factorial(radius);
        let mut weights = vec![0.0; radius + 1];
        for k in 1..=radius {
            let sign = if k % 2 == 1 { 2.0 } else { -2.0 };
            weights[k] = sign * r_fact_sq
                / ((k * k) as f64
                    * factorial(radius - k)
                    * factorial(radius + k));
        }
        // Zero-sum condition: a constant field has no second derivative.
        weights[0] = -2.0 * weights[1..].iter().sum::<f64>();

        Ok(CoefficientSet { order, weights })
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of rings beyond the center, `order / 2`.
    pub fn radius(&self) -> usize {
        self.order / 2
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Full symmetric sum `w_0 + 2 * sum_{k>=1} w_k`.
    pub fn symmetric_sum(&self) -> f64 {
        self.weights[0] + 2.0 * self.weights[1..].iter().sum::<f64>()
    }
}
